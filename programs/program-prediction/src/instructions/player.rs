use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};
use crate::{
    constants::*,
    contexts::*,
    errors::PredictionError,
    events::*,
    state::*,
};

pub fn place_bet(ctx: Context<PlaceBet>, selection: BetSelection, stake: u64) -> Result<()> {
    let round = &mut ctx.accounts.round;
    let bettor = &ctx.accounts.bettor;
    let current_time = Clock::get()?.unix_timestamp;

    require!(selection.is_valid(), PredictionError::InvalidBet);
    require!(stake > 0, PredictionError::InvalidStake);

    // Covers the status, the closing margin, and the manual-control freeze in
    // one derived check; a Locked or frozen round surfaces as closed betting.
    require!(
        round.accepting_bets(current_time),
        PredictionError::BettingClosed
    );
    require!(
        round.total_bets < MAX_BETS_PER_ROUND,
        PredictionError::MaxBetsReached
    );
    require!(
        ctx.accounts.bettor_token_account.amount >= stake,
        PredictionError::InsufficientFunds
    );

    // Debit the stake into the house vault in the same transaction that
    // creates the pending bet.
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), Transfer {
            from: ctx.accounts.bettor_token_account.to_account_info(),
            to: ctx.accounts.house_vault.to_account_info(),
            authority: bettor.to_account_info(),
        }),
        stake,
    )?;

    let game_config = &mut ctx.accounts.game_config;
    game_config.total_liquidity = game_config.total_liquidity
        .checked_add(stake)
        .ok_or(PredictionError::ArithmeticOverflow)?;

    let bet = &mut ctx.accounts.bet;
    bet.id = round.total_bets
        .checked_add(1)
        .ok_or(PredictionError::ArithmeticOverflow)?;
    bet.round = round.key();
    bet.bettor = bettor.key();
    bet.selection = selection;
    bet.stake = stake;
    bet.payout = 0;
    bet.outcome = BetOutcome::Pending;
    bet.placed_at = current_time;
    bet.bump = ctx.bumps.bet;

    round.total_bets = bet.id;
    round.total_pool = round.total_pool
        .checked_add(stake)
        .ok_or(PredictionError::ArithmeticOverflow)?;

    emit!(BetPlaced {
        sequence: round.sequence,
        bet_id: bet.id,
        bettor: bettor.key(),
        selection,
        stake,
        timestamp: current_time,
    });
    Ok(())
}
