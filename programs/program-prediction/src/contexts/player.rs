use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{
    constants::*,
    errors::PredictionError,
    state::*,
};

/// Accounts required for a bettor to place a wager into the open round.
/// The stake transfer into the house vault and the bet account creation land
/// in the same transaction, so the debit is atomic with the pending bet.
#[derive(Accounts)]
pub struct PlaceBet<'info> {
    #[account(mut)]
    pub bettor: Signer<'info>,

    #[account(mut, seeds = [GAME_CONFIG_SEED], bump = game_config.bump)]
    pub game_config: Account<'info, GameConfig>,

    /// The open round. A stale sequence means no round is currently playable.
    #[account(
        mut,
        seeds = [ROUND_SEED, &round.sequence.to_le_bytes()],
        bump = round.bump,
        constraint = round.sequence == game_config.round_counter @ PredictionError::NoOpenRound,
    )]
    pub round: Account<'info, Round>,

    #[account(
        init,
        payer = bettor,
        space = 8 + Bet::INIT_SPACE,
        seeds = [
            BET_SEED,
            round.key().as_ref(),
            bettor.key().as_ref(),
            &(round.total_bets + 1).to_le_bytes(),
        ],
        bump
    )]
    pub bet: Account<'info, Bet>,

    #[account(
        mut,
        constraint = house_vault.key() == game_config.house_vault @ PredictionError::InvalidTokenAccount,
    )]
    pub house_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = bettor_token_account.mint == game_config.token_mint @ PredictionError::InvalidTokenAccount,
        constraint = bettor_token_account.owner == bettor.key() @ PredictionError::InvalidTokenAccount,
    )]
    pub bettor_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
