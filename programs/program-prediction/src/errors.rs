use anchor_lang::prelude::*;

#[error_code]
pub enum PredictionError {
    #[msg("Arithmetic overflow error during calculation.")]
    ArithmeticOverflow,
    #[msg("Cannot start a new round while one is already open.")]
    RoundInProgress,
    #[msg("No round is currently open for play.")]
    NoOpenRound,
    #[msg("The betting window for this round has closed.")]
    BettingClosed,
    #[msg("The stake must be greater than zero.")]
    InvalidStake,
    #[msg("Insufficient funds in the bettor's token account for the stake.")]
    InsufficientFunds,
    #[msg("Invalid bet selection (number bets must be 0-9).")]
    InvalidBet,
    #[msg("The current round status does not allow this operation.")]
    InvalidRoundStatus,
    #[msg("Only the game authority can perform this operation.")]
    AdminOnly,
    #[msg("Result numbers must be in the range 0-9.")]
    InvalidResultNumber,
    #[msg("The round is under manual control; the timer may not complete it.")]
    ManualControlActive,
    #[msg("This operation requires the round to be under manual control.")]
    ManualControlRequired,
    #[msg("No result has been staged for this round.")]
    ResultNotStaged,
    #[msg("The staged result has been consumed and can no longer change.")]
    ResultAlreadyLocked,
    #[msg("The betting window has not elapsed yet.")]
    RoundNotExpired,
    #[msg("The round is not within its closing margin yet.")]
    LockNotDue,
    #[msg("Maximum number of bets for this round reached.")]
    MaxBetsReached,
    #[msg("Settlement requires every bet of the round to be supplied.")]
    IncompleteSettlement,
    #[msg("The provided bet account is invalid or does not belong to this round.")]
    InvalidBetAccount,
    #[msg("Invalid SPL token account provided (wrong mint, owner, or not initialized).")]
    InvalidTokenAccount,
    #[msg("Insufficient liquidity in the house vault to cover the payout.")]
    InsufficientLiquidity,
    #[msg("The supplied previous round does not match the latest sequence.")]
    PreviousRoundMismatch,
    #[msg("Game config account is already initialized.")]
    AlreadyInitialized,
}
