use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{
    constants::*,
    errors::PredictionError,
    state::*,
};

/// Accounts required to bootstrap the game: the config singleton and the
/// house vault that holds stakes and pays winners.
#[derive(Accounts)]
pub struct InitializeGame<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + GameConfig::INIT_SPACE,
        seeds = [GAME_CONFIG_SEED],
        bump
    )]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        init,
        payer = authority,
        token::mint = token_mint,
        token::authority = game_config,
        seeds = [HOUSE_VAULT_SEED],
        bump
    )]
    pub house_vault: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

/// Accounts for topping up the house vault so payouts stay covered.
#[derive(Accounts)]
pub struct FundHouse<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(mut, seeds = [GAME_CONFIG_SEED], bump = game_config.bump)]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        constraint = house_vault.key() == game_config.house_vault @ PredictionError::InvalidTokenAccount,
    )]
    pub house_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = funder_token_account.mint == game_config.token_mint @ PredictionError::InvalidTokenAccount,
        constraint = funder_token_account.owner == funder.key() @ PredictionError::InvalidTokenAccount,
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Accounts for opening the next round. Anyone may crank this; the PDA init
/// on the next sequence number is the store-level guard against creating the
/// same round twice, and the handler checks the previous round is Completed.
#[derive(Accounts)]
pub struct StartRound<'info> {
    #[account(mut)]
    pub starter: Signer<'info>,

    #[account(mut, seeds = [GAME_CONFIG_SEED], bump = game_config.bump)]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        init,
        payer = starter,
        space = 8 + Round::INIT_SPACE,
        seeds = [ROUND_SEED, &(game_config.round_counter + 1).to_le_bytes()],
        bump
    )]
    pub round: Account<'info, Round>,

    /// The round currently recorded in `game_config.round_counter`. Absent
    /// only for the first round ever created.
    pub previous_round: Option<Account<'info, Round>>,

    pub system_program: Program<'info, System>,
}

/// Accounts for the Active -> Locked crank on the open round.
#[derive(Accounts)]
pub struct LockRound<'info> {
    pub closer: Signer<'info>,

    #[account(seeds = [GAME_CONFIG_SEED], bump = game_config.bump)]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [ROUND_SEED, &round.sequence.to_le_bytes()],
        bump = round.bump,
        constraint = round.sequence == game_config.round_counter @ PredictionError::NoOpenRound,
    )]
    pub round: Account<'info, Round>,
}

/// Accounts for the automatic completion crank. The settlement pass reads
/// (bet account, bettor token account) pairs from the remaining accounts.
#[derive(Accounts)]
pub struct CompleteRound<'info> {
    #[account(mut)]
    pub cranker: Signer<'info>,

    #[account(mut, seeds = [GAME_CONFIG_SEED], bump = game_config.bump)]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [ROUND_SEED, &round.sequence.to_le_bytes()],
        bump = round.bump,
        constraint = round.sequence == game_config.round_counter @ PredictionError::NoOpenRound,
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        constraint = house_vault.key() == game_config.house_vault @ PredictionError::InvalidTokenAccount,
    )]
    pub house_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Read-only view of the open round's timer-derived state.
#[derive(Accounts)]
pub struct GetRoundState<'info> {
    #[account(seeds = [GAME_CONFIG_SEED], bump = game_config.bump)]
    pub game_config: Account<'info, GameConfig>,

    #[account(
        seeds = [ROUND_SEED, &round.sequence.to_le_bytes()],
        bump = round.bump,
        constraint = round.sequence == game_config.round_counter @ PredictionError::NoOpenRound,
    )]
    pub round: Account<'info, Round>,
}
