use anchor_lang::prelude::*;
use crate::state::{BetOutcome, BetSelection, GameMode, RoundControl, RoundResult, RoundStatus};

#[event]
pub struct RoundStarted {
    pub sequence: u64,
    pub mode: GameMode,
    pub window_start: i64,
    pub window_end: i64,
    pub starter: Pubkey,
}

#[event]
pub struct RoundLocked {
    pub sequence: u64,
    pub locked_at: i64,
    pub closer: Pubkey,
}

#[event]
pub struct RoundCompleted {
    pub sequence: u64,
    pub result: RoundResult,
    pub control: RoundControl,
    pub total_bets: u64,
    pub total_payout: u64,
    pub completed_at: i64,
}

#[event]
pub struct BetPlaced {
    pub sequence: u64,
    pub bet_id: u64,
    pub bettor: Pubkey,
    pub selection: BetSelection,
    pub stake: u64,
    pub timestamp: i64,
}

#[event]
pub struct BetSettled {
    pub sequence: u64,
    pub bet_id: u64,
    pub bettor: Pubkey,
    pub outcome: BetOutcome,
    pub payout: u64,
}

#[event]
pub struct ControlChanged {
    pub sequence: u64,
    pub control: RoundControl,
    pub changed_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ResultStaged {
    pub sequence: u64,
    pub result: RoundResult,
    pub staged_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct HouseFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub total_liquidity: u64,
    pub timestamp: i64,
}

/// Snapshot of the timer-derived view of the open round, for observers that
/// poll `get_round_state` instead of recomputing the countdown themselves.
#[event]
pub struct RoundStateSnapshot {
    pub sequence: u64,
    pub status: RoundStatus,
    pub control: RoundControl,
    pub remaining_secs: i64,
    pub accepting_bets: bool,
}
