use anchor_lang::prelude::*;

// 1. Declare all our modules
pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

// 2. Make everything from them accessible
use contexts::*;
use state::{BetSelection, GameMode, RoundControl}; // Needed for instruction signatures

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Prediction Protocol Program",
    project_url: "https://prediction-protocol.example",
    contacts: "link:https://prediction-protocol.example/security",
    policy: "https://prediction-protocol.example/security-policy",
    source_code: "https://github.com/prediction-protocol/program-prediction",
    auditors: "None"
}

declare_id!("9DK1L9UF4EmkrMPpv9FZs4B63RvVPwJR34NGWm9NEbVy");

#[program]
pub mod program_prediction {
    use super::*;

    // ========== BOOTSTRAP INSTRUCTIONS ==========
    pub fn initialize_game(ctx: Context<InitializeGame>, mode: GameMode) -> Result<()> {
        instructions::game::initialize_game(ctx, mode)
    }

    pub fn fund_house(ctx: Context<FundHouse>, amount: u64) -> Result<()> {
        instructions::game::fund_house(ctx, amount)
    }

    // ========== ROUND LIFECYCLE INSTRUCTIONS ==========
    pub fn start_round(ctx: Context<StartRound>) -> Result<()> {
        instructions::game::start_round(ctx)
    }

    pub fn lock_round(ctx: Context<LockRound>) -> Result<()> {
        instructions::game::lock_round(ctx)
    }

    pub fn complete_round<'info>(
        ctx: Context<'_, '_, 'info, 'info, CompleteRound<'info>>,
    ) -> Result<()> {
        instructions::game::complete_round(ctx)
    }

    // ========== PLAYER INSTRUCTIONS ==========
    pub fn place_bet(ctx: Context<PlaceBet>, selection: BetSelection, stake: u64) -> Result<()> {
        instructions::player::place_bet(ctx, selection, stake)
    }

    // ========== ADMIN INSTRUCTIONS ==========
    pub fn set_control(ctx: Context<SetControl>, control: RoundControl) -> Result<()> {
        instructions::admin::set_control(ctx, control)
    }

    pub fn stage_result(ctx: Context<StageResult>, number: u8) -> Result<()> {
        instructions::admin::stage_result(ctx, number)
    }

    pub fn force_complete<'info>(
        ctx: Context<'_, '_, 'info, 'info, ForceComplete<'info>>,
    ) -> Result<()> {
        instructions::admin::force_complete(ctx)
    }

    pub fn set_mode(ctx: Context<SetMode>, mode: GameMode) -> Result<()> {
        instructions::admin::set_mode(ctx, mode)
    }

    // ========== READ-ONLY INSTRUCTIONS ==========
    pub fn get_round_state(ctx: Context<GetRoundState>) -> Result<()> {
        instructions::game::get_round_state(ctx)
    }
}
