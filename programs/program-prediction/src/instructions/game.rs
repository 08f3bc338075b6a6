use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{
    constants::*,
    contexts::*,
    errors::PredictionError,
    events::*,
    state::*,
};

// =================================================================================================
// Game Bootstrap
// =================================================================================================

pub fn initialize_game(ctx: Context<InitializeGame>, mode: GameMode) -> Result<()> {
    let game_config = &mut ctx.accounts.game_config;

    game_config.authority = *ctx.accounts.authority.key;
    game_config.mode = mode;
    game_config.round_counter = 0;
    game_config.token_mint = ctx.accounts.token_mint.key();
    game_config.house_vault = ctx.accounts.house_vault.key();
    game_config.total_liquidity = 0;
    game_config.bump = ctx.bumps.game_config;
    Ok(())
}

pub fn fund_house(ctx: Context<FundHouse>, amount: u64) -> Result<()> {
    require!(amount > 0, PredictionError::InvalidStake);

    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), Transfer {
            from: ctx.accounts.funder_token_account.to_account_info(),
            to: ctx.accounts.house_vault.to_account_info(),
            authority: ctx.accounts.funder.to_account_info(),
        }),
        amount,
    )?;

    let game_config = &mut ctx.accounts.game_config;
    game_config.total_liquidity = game_config.total_liquidity
        .checked_add(amount)
        .ok_or(PredictionError::ArithmeticOverflow)?;

    emit!(HouseFunded {
        funder: *ctx.accounts.funder.key,
        amount,
        total_liquidity: game_config.total_liquidity,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

// =================================================================================================
// Round Start
// =================================================================================================

pub fn start_round(ctx: Context<StartRound>) -> Result<()> {
    let game_config = &mut ctx.accounts.game_config;
    let round = &mut ctx.accounts.round;
    let current_time = Clock::get()?.unix_timestamp;

    // The previous round must be fully settled before the next one opens, so
    // there is never more than one playable round.
    if game_config.round_counter > 0 {
        let previous = ctx.accounts.previous_round
            .as_ref()
            .ok_or(PredictionError::PreviousRoundMismatch)?;
        require!(
            previous.sequence == game_config.round_counter,
            PredictionError::PreviousRoundMismatch
        );
        require!(
            previous.status == RoundStatus::Completed,
            PredictionError::RoundInProgress
        );
    }

    let sequence = game_config.round_counter
        .checked_add(1)
        .ok_or(PredictionError::ArithmeticOverflow)?;
    let mode = game_config.mode;
    let window_end = current_time
        .checked_add(mode.duration_secs())
        .ok_or(PredictionError::ArithmeticOverflow)?;

    round.sequence = sequence;
    round.mode = mode;
    round.window_start = current_time;
    round.window_end = window_end;
    round.status = RoundStatus::Active;
    round.control = RoundControl::Automatic;
    round.result = None;
    round.admin_result = None;
    round.admin_result_locked = false;
    round.total_bets = 0;
    round.total_pool = 0;
    round.completed_at = None;
    round.bump = ctx.bumps.round;

    game_config.round_counter = sequence;

    emit!(RoundStarted {
        sequence,
        mode,
        window_start: current_time,
        window_end,
        starter: *ctx.accounts.starter.key,
    });
    Ok(())
}

// =================================================================================================
// Round Lock
// =================================================================================================

pub fn lock_round(ctx: Context<LockRound>) -> Result<()> {
    let round = &mut ctx.accounts.round;
    let current_time = Clock::get()?.unix_timestamp;

    require!(
        round.status == RoundStatus::Active,
        PredictionError::InvalidRoundStatus
    );
    require!(round.lock_due(current_time), PredictionError::LockNotDue);

    round.status = RoundStatus::Locked;

    emit!(RoundLocked {
        sequence: round.sequence,
        locked_at: current_time,
        closer: *ctx.accounts.closer.key,
    });
    Ok(())
}

// =================================================================================================
// Round Completion (automatic path)
// =================================================================================================

pub fn complete_round<'info>(
    ctx: Context<'_, '_, 'info, 'info, CompleteRound<'info>>,
) -> Result<()> {
    let clock = Clock::get()?;
    let current_time = clock.unix_timestamp;

    // A concurrent crank or admin already finished this round. Not an error.
    if ctx.accounts.round.status == RoundStatus::Completed {
        msg!("Round {} already completed, skipping", ctx.accounts.round.sequence);
        return Ok(());
    }

    // Manual rounds wait for the admin; the timer never resolves them.
    require!(
        ctx.accounts.round.control == RoundControl::Automatic,
        PredictionError::ManualControlActive
    );
    require!(
        ctx.accounts.round.expired(current_time),
        PredictionError::RoundNotExpired
    );

    // Draw color and number independently from the hash entropy.
    let round_key = ctx.accounts.round.key();
    let sequence = ctx.accounts.round.sequence;
    let hash_input: &[&[u8]] = &[
        round_key.as_ref(),
        &sequence.to_le_bytes()[..],
        &current_time.to_le_bytes()[..],
        &clock.slot.to_le_bytes()[..],
    ];
    let entropy = hash::hashv(hash_input).to_bytes();
    let result = RoundResult::from_entropy(&entropy);

    msg!(
        "Round {} | drew color {:?} number {}",
        sequence,
        result.color,
        result.number
    );

    settle_round_bets(
        ctx.program_id,
        &mut ctx.accounts.game_config,
        &mut ctx.accounts.round,
        &ctx.accounts.house_vault,
        &ctx.accounts.token_program,
        ctx.remaining_accounts,
        result,
        current_time,
    )
}

// =================================================================================================
// Settlement (shared by the automatic crank and admin force-completion)
// =================================================================================================

/// Fixes the result, settles every bet of the round and marks it Completed,
/// all in one transaction. Callers guard the status before invoking; within
/// the transaction the runtime serializes all writers of the round account,
/// so the transition runs at most once.
///
/// `bet_accounts` holds (bet PDA, bettor token account) pairs covering every
/// bet of the round. Already-settled bets are skipped.
pub(crate) fn settle_round_bets<'info>(
    program_id: &Pubkey,
    game_config: &mut Account<'info, GameConfig>,
    round: &mut Account<'info, Round>,
    house_vault: &Account<'info, TokenAccount>,
    token_program: &Program<'info, Token>,
    bet_accounts: &[AccountInfo<'info>],
    result: RoundResult,
    current_time: i64,
) -> Result<()> {
    let round_key = round.key();
    let expected_accounts = (round.total_bets as usize)
        .checked_mul(2)
        .ok_or(PredictionError::ArithmeticOverflow)?;
    require!(
        bet_accounts.len() == expected_accounts,
        PredictionError::IncompleteSettlement
    );

    let config_seeds = &[GAME_CONFIG_SEED, &[game_config.bump]];
    let signer_seeds = &[&config_seeds[..]];

    let mut seen_bets: u64 = 0;
    let mut total_payout: u64 = 0;

    for pair in bet_accounts.chunks(2) {
        let bet_info = &pair[0];
        let bettor_token_info = &pair[1];

        require_keys_eq!(*bet_info.owner, *program_id, PredictionError::InvalidBetAccount);

        let mut data = bet_info.try_borrow_mut_data()?;
        let mut bet: Bet = Bet::try_deserialize(&mut &data[..])
            .map_err(|_| PredictionError::InvalidBetAccount)?;

        require_keys_eq!(bet.round, round_key, PredictionError::InvalidBetAccount);
        require!(
            bet.id >= 1 && bet.id <= round.total_bets,
            PredictionError::InvalidBetAccount
        );

        let (expected_pda, _) = Pubkey::find_program_address(
            &[
                BET_SEED,
                round_key.as_ref(),
                bet.bettor.as_ref(),
                &bet.id.to_le_bytes(),
            ],
            program_id,
        );
        require_keys_eq!(*bet_info.key, expected_pda, PredictionError::InvalidBetAccount);

        // Reject the same bet supplied twice in place of a missing one.
        let bet_bit = 1u64 << (bet.id - 1);
        require!(seen_bets & bet_bit == 0, PredictionError::InvalidBetAccount);
        seen_bets |= bet_bit;

        // Idempotence: a bet that already carries an outcome stays untouched.
        if bet.outcome != BetOutcome::Pending {
            continue;
        }

        let (outcome, payout) = settle(&bet.selection, bet.stake, &result)?;

        if outcome == BetOutcome::Won {
            // Winners get their stake back plus the win amount.
            let total_return = bet.stake
                .checked_add(payout)
                .ok_or(PredictionError::ArithmeticOverflow)?;

            let bettor_token: TokenAccount = TokenAccount::try_deserialize(
                &mut &bettor_token_info.data.borrow()[..]
            ).map_err(|_| PredictionError::InvalidTokenAccount)?;
            require_keys_eq!(
                bettor_token.owner,
                bet.bettor,
                PredictionError::InvalidTokenAccount
            );
            require_keys_eq!(
                bettor_token.mint,
                game_config.token_mint,
                PredictionError::InvalidTokenAccount
            );

            require!(
                total_return <= game_config.total_liquidity,
                PredictionError::InsufficientLiquidity
            );

            token::transfer(
                CpiContext::new_with_signer(
                    token_program.to_account_info(),
                    Transfer {
                        from: house_vault.to_account_info(),
                        to: bettor_token_info.to_account_info(),
                        authority: game_config.to_account_info(),
                    },
                    signer_seeds,
                ),
                total_return,
            )?;

            game_config.total_liquidity = game_config.total_liquidity
                .checked_sub(total_return)
                .ok_or(PredictionError::ArithmeticOverflow)?;
            total_payout = total_payout
                .checked_add(payout)
                .ok_or(PredictionError::ArithmeticOverflow)?;
        }

        bet.outcome = outcome;
        bet.payout = payout;

        let serialized = bet.try_to_vec()
            .map_err(|_| PredictionError::InvalidBetAccount)?;
        require!(
            serialized.len() <= data[8..].len(),
            PredictionError::InvalidBetAccount
        );
        data[8..8 + serialized.len()].copy_from_slice(&serialized);

        emit!(BetSettled {
            sequence: round.sequence,
            bet_id: bet.id,
            bettor: bet.bettor,
            outcome,
            payout,
        });
    }

    round.result = Some(result);
    round.status = RoundStatus::Completed;
    round.completed_at = Some(current_time);

    msg!(
        "Round {} completed | {} bets settled | {} paid out in winnings",
        round.sequence,
        round.total_bets,
        total_payout
    );

    emit!(RoundCompleted {
        sequence: round.sequence,
        result,
        control: round.control,
        total_bets: round.total_bets,
        total_payout,
        completed_at: current_time,
    });
    Ok(())
}

// =================================================================================================
// Round State (read-only)
// =================================================================================================

pub fn get_round_state(ctx: Context<GetRoundState>) -> Result<()> {
    let round = &ctx.accounts.round;
    let current_time = Clock::get()?.unix_timestamp;

    // Always re-derived from the stored window end, never from a cached
    // countdown, so a reconnecting observer gets the true remaining time.
    let remaining_secs = round.remaining_secs(current_time);
    let accepting_bets = round.accepting_bets(current_time);

    msg!(
        "Round {} | status {:?} | {}s remaining | accepting_bets {}",
        round.sequence,
        round.status,
        remaining_secs,
        accepting_bets
    );

    emit!(RoundStateSnapshot {
        sequence: round.sequence,
        status: round.status,
        control: round.control,
        remaining_secs,
        accepting_bets,
    });
    Ok(())
}
