use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{
    constants::*,
    errors::PredictionError,
    state::*,
};

/// Accounts for toggling a round between Automatic and Manual control.
#[derive(Accounts)]
pub struct SetControl<'info> {
    #[account(
        constraint = authority.key() == game_config.authority @ PredictionError::AdminOnly,
    )]
    pub authority: Signer<'info>,

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

/// Accounts for staging an admin-chosen result on a Manual round.
#[derive(Accounts)]
pub struct StageResult<'info> {
    #[account(
        constraint = authority.key() == game_config.authority @ PredictionError::AdminOnly,
    )]
    pub authority: Signer<'info>,

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

/// Accounts for the admin force-completion path. Shares the settlement pass
/// with the automatic crank, so it carries the same vault accounts.
#[derive(Accounts)]
pub struct ForceComplete<'info> {
    #[account(
        mut,
        constraint = authority.key() == game_config.authority @ PredictionError::AdminOnly,
    )]
    pub authority: Signer<'info>,

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

/// Accounts for changing the mode applied to future rounds.
#[derive(Accounts)]
pub struct SetMode<'info> {
    #[account(
        constraint = authority.key() == game_config.authority @ PredictionError::AdminOnly,
    )]
    pub authority: Signer<'info>,

    #[account(mut, seeds = [GAME_CONFIG_SEED], bump = game_config.bump)]
    pub game_config: Account<'info, GameConfig>,
}
