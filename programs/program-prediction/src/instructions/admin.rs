use anchor_lang::prelude::*;
use crate::{
    constants::*,
    contexts::*,
    errors::PredictionError,
    events::*,
    instructions::game::settle_round_bets,
    state::*,
};

pub fn set_control(ctx: Context<SetControl>, control: RoundControl) -> Result<()> {
    let round = &mut ctx.accounts.round;

    require!(round.is_open(), PredictionError::InvalidRoundStatus);

    // Switching to Manual freezes bet acceptance straight away (placement
    // requires Automatic); switching back resumes the timer-driven rules.
    round.control = control;

    emit!(ControlChanged {
        sequence: round.sequence,
        control,
        changed_by: *ctx.accounts.authority.key,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

pub fn stage_result(ctx: Context<StageResult>, number: u8) -> Result<()> {
    let round = &mut ctx.accounts.round;

    require!(round.is_open(), PredictionError::InvalidRoundStatus);
    require!(
        round.control == RoundControl::Manual,
        PredictionError::ManualControlRequired
    );
    require!(number <= MAX_NUMBER, PredictionError::InvalidResultNumber);
    require!(!round.admin_result_locked, PredictionError::ResultAlreadyLocked);

    // The color comes from the fixed number table on this path; the automatic
    // draw picks the two independently.
    let result = RoundResult::from_admin_number(number);
    round.admin_result = Some(result);

    emit!(ResultStaged {
        sequence: round.sequence,
        result,
        staged_by: *ctx.accounts.authority.key,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

pub fn force_complete<'info>(
    ctx: Context<'_, '_, 'info, 'info, ForceComplete<'info>>,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    // A concurrent automatic crank may have won the race on an Automatic
    // round that was flipped back; treat it as done.
    if ctx.accounts.round.status == RoundStatus::Completed {
        msg!("Round {} already completed, skipping", ctx.accounts.round.sequence);
        return Ok(());
    }

    require!(
        ctx.accounts.round.control == RoundControl::Manual,
        PredictionError::ManualControlRequired
    );

    // Always the staged result, never a draw.
    let result = ctx.accounts.round.admin_result
        .ok_or(PredictionError::ResultNotStaged)?;
    ctx.accounts.round.admin_result_locked = true;

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

pub fn set_mode(ctx: Context<SetMode>, mode: GameMode) -> Result<()> {
    let game_config = &mut ctx.accounts.game_config;
    game_config.mode = mode;
    msg!("Next rounds will run in mode {:?}", mode);
    Ok(())
}
