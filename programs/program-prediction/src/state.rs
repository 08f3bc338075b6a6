use anchor_lang::prelude::*;
use crate::{constants::*, errors::PredictionError};

/// Round duration presets. The config stores the mode used for the next round.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Turbo,    // 30s
    Quick,    // 60s
    Standard, // 180s
    Extended, // 300s
}

impl GameMode {
    pub fn duration_secs(&self) -> i64 {
        match self {
            GameMode::Turbo => 30,
            GameMode::Quick => 60,
            GameMode::Standard => 180,
            GameMode::Extended => 300,
        }
    }
}

/// Defines the possible states of a prediction round.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoundStatus {
    #[default]
    Active,
    Locked,
    Completed,
}

/// Who resolves the round: the timer-driven random draw, or the admin.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoundControl {
    #[default]
    Automatic,
    Manual,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetColor {
    Red,
    Green,
    PurpleRed,
}

impl BetColor {
    /// Fixed color-from-number table used when an admin stages a result.
    /// Intentionally distinct from the automatic draw, which picks color and
    /// number independently.
    pub fn from_number(number: u8) -> BetColor {
        match number {
            1 | 3 | 7 | 9 => BetColor::Red,
            2 | 4 | 6 | 8 => BetColor::Green,
            _ => BetColor::PurpleRed, // 0 and 5
        }
    }
}

/// What a bettor wagered on.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetSelection {
    Color { color: BetColor },
    Number { number: u8 },
}

impl BetSelection {
    pub fn is_valid(&self) -> bool {
        match self {
            BetSelection::Color { .. } => true,
            BetSelection::Number { number } => *number <= MAX_NUMBER,
        }
    }
}

/// The resolved outcome of a round: a color and a number, fixed at completion.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub color: BetColor,
    pub number: u8,
}

impl RoundResult {
    /// Derives a result from 32 bytes of hash entropy. Color and number are
    /// drawn independently; the color is NOT derived from the number here.
    pub fn from_entropy(entropy: &[u8; 32]) -> RoundResult {
        let number = entropy[0] % 10;
        let color = match entropy[1] % 3 {
            0 => BetColor::Red,
            1 => BetColor::Green,
            _ => BetColor::PurpleRed,
        };
        RoundResult { color, number }
    }

    /// Builds the staged result for an admin-chosen number, deriving the color
    /// from the fixed table.
    pub fn from_admin_number(number: u8) -> RoundResult {
        RoundResult {
            color: BetColor::from_number(number),
            number,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BetOutcome {
    #[default]
    Pending,
    Won,
    Lost,
}

/// Singleton configuration and house treasury bookkeeping.
#[account]
#[derive(InitSpace)]
pub struct GameConfig {
    pub authority: Pubkey,
    /// Mode applied to the next round opened by `start_round`.
    pub mode: GameMode,
    /// Sequence number of the most recently created round. Strictly
    /// increasing, never reused. 0 means no round has ever been created.
    pub round_counter: u64,
    pub token_mint: Pubkey,
    pub house_vault: Pubkey,
    /// Funds available in the house vault to cover payouts. Updated on every
    /// stake in, payout out, and house funding.
    pub total_liquidity: u64,
    pub bump: u8,
}

/// One betting period. Created by `start_round`, frozen forever once
/// Completed; round accounts are never closed, they are the history.
#[account]
#[derive(InitSpace)]
pub struct Round {
    pub sequence: u64,
    pub mode: GameMode,
    pub window_start: i64,
    pub window_end: i64,
    pub status: RoundStatus,
    pub control: RoundControl,
    /// Set exactly once, when the round completes.
    pub result: Option<RoundResult>,
    /// Staged by the admin under Manual control; consumed by force_complete.
    pub admin_result: Option<RoundResult>,
    /// True once the staged result has been consumed; blocks restaging.
    pub admin_result_locked: bool,
    pub total_bets: u64,
    pub total_pool: u64,
    pub completed_at: Option<i64>,
    pub bump: u8,
}

impl Round {
    /// Seconds until the window closes, clamped at zero. Always recomputed
    /// from the stored `window_end`; callers must not cache a countdown.
    pub fn remaining_secs(&self, now: i64) -> i64 {
        (self.window_end - now).max(0)
    }

    /// Whether a new bet may be created right now. Manual control freezes
    /// acceptance immediately, regardless of remaining time.
    pub fn accepting_bets(&self, now: i64) -> bool {
        self.status == RoundStatus::Active
            && self.control == RoundControl::Automatic
            && self.remaining_secs(now) > CLOSING_MARGIN_SECS
    }

    /// Whether the Active -> Locked transition is due.
    pub fn lock_due(&self, now: i64) -> bool {
        self.remaining_secs(now) <= CLOSING_MARGIN_SECS
    }

    /// Whether the betting window has fully elapsed.
    pub fn expired(&self, now: i64) -> bool {
        now >= self.window_end
    }

    /// A round still in play, i.e. eligible for admin operations.
    pub fn is_open(&self) -> bool {
        matches!(self.status, RoundStatus::Active | RoundStatus::Locked)
    }
}

/// One wager placed by one bettor into one round. Settled exactly once.
#[account]
#[derive(InitSpace)]
pub struct Bet {
    pub id: u64,
    pub round: Pubkey,
    pub bettor: Pubkey,
    pub selection: BetSelection,
    pub stake: u64,
    /// Win amount on top of the returned stake; 0 while Pending or when Lost.
    pub payout: u64,
    pub outcome: BetOutcome,
    pub placed_at: i64,
    pub bump: u8,
}

/// Maps a (selection, stake, result) triple to its settled outcome and win
/// amount. Pure and deterministic: identical inputs always produce identical
/// outputs, which is what makes re-running a settlement a safe no-op.
pub fn settle(selection: &BetSelection, stake: u64, result: &RoundResult) -> Result<(BetOutcome, u64)> {
    let win_bps = match selection {
        BetSelection::Color { color } => {
            if *color != result.color {
                return Ok((BetOutcome::Lost, 0));
            }
            if result.color == BetColor::PurpleRed {
                PURPLE_RED_WIN_BPS
            } else {
                COLOR_WIN_BPS
            }
        }
        BetSelection::Number { number } => {
            // Number 0 never wins a number bet, even a bet on 0.
            if *number != result.number || result.number == 0 {
                return Ok((BetOutcome::Lost, 0));
            }
            NUMBER_WIN_BPS
        }
    };

    let payout = (stake as u128)
        .checked_mul(win_bps as u128)
        .ok_or(PredictionError::ArithmeticOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(PredictionError::ArithmeticOverflow)? as u64;

    Ok((BetOutcome::Won, payout))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(color: BetColor, number: u8) -> RoundResult {
        RoundResult { color, number }
    }

    #[test]
    fn color_bet_wins_at_95_bps() {
        let bet = BetSelection::Color { color: BetColor::Red };
        let (outcome, payout) = settle(&bet, 100, &result(BetColor::Red, 3)).unwrap();
        assert_eq!(outcome, BetOutcome::Won);
        assert_eq!(payout, 95);
    }

    #[test]
    fn purple_red_wins_at_90_bps() {
        let bet = BetSelection::Color { color: BetColor::PurpleRed };
        let (outcome, payout) = settle(&bet, 100, &result(BetColor::PurpleRed, 5)).unwrap();
        assert_eq!(outcome, BetOutcome::Won);
        assert_eq!(payout, 90);
    }

    #[test]
    fn color_mismatch_loses() {
        let bet = BetSelection::Color { color: BetColor::Green };
        let (outcome, payout) = settle(&bet, 100, &result(BetColor::Red, 1)).unwrap();
        assert_eq!(outcome, BetOutcome::Lost);
        assert_eq!(payout, 0);
    }

    #[test]
    fn number_bet_pays_nine_to_one() {
        let bet = BetSelection::Number { number: 7 };
        let (outcome, payout) = settle(&bet, 10, &result(BetColor::Red, 7)).unwrap();
        assert_eq!(outcome, BetOutcome::Won);
        assert_eq!(payout, 90);
    }

    #[test]
    fn number_zero_never_wins() {
        // Even a bet on 0 loses when 0 is drawn.
        let bet = BetSelection::Number { number: 0 };
        let (outcome, payout) = settle(&bet, 100, &result(BetColor::PurpleRed, 0)).unwrap();
        assert_eq!(outcome, BetOutcome::Lost);
        assert_eq!(payout, 0);
    }

    #[test]
    fn settle_is_deterministic() {
        let bet = BetSelection::Number { number: 4 };
        let res = result(BetColor::Green, 4);
        let first = settle(&bet, 20, &res).unwrap();
        let second = settle(&bet, 20, &res).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, (BetOutcome::Won, 180));
    }

    #[test]
    fn mixed_round_settles_both_winners() {
        // 60s round, color Green for 50 and number 4 for 20, drawn (Green, 4).
        // Stakes in base units of a 6-decimal token so the 47.5 payout is exact.
        let res = result(BetColor::Green, 4);
        let (oa, pa) = settle(&BetSelection::Color { color: BetColor::Green }, 50_000_000, &res).unwrap();
        let (ob, pb) = settle(&BetSelection::Number { number: 4 }, 20_000_000, &res).unwrap();
        assert_eq!((oa, pa), (BetOutcome::Won, 47_500_000));
        assert_eq!((ob, pb), (BetOutcome::Won, 180_000_000));
    }

    #[test]
    fn admin_color_table() {
        for n in [1u8, 3, 7, 9] {
            assert_eq!(BetColor::from_number(n), BetColor::Red);
        }
        for n in [2u8, 4, 6, 8] {
            assert_eq!(BetColor::from_number(n), BetColor::Green);
        }
        for n in [0u8, 5] {
            assert_eq!(BetColor::from_number(n), BetColor::PurpleRed);
        }
    }

    #[test]
    fn entropy_draw_is_independent_of_color_table() {
        // entropy picks number 8 but color PurpleRed, a pair the admin table
        // could never produce. Both schemes are preserved on purpose.
        let mut entropy = [0u8; 32];
        entropy[0] = 18; // 18 % 10 = 8
        entropy[1] = 2; // 2 % 3 = PurpleRed
        let res = RoundResult::from_entropy(&entropy);
        assert_eq!(res.number, 8);
        assert_eq!(res.color, BetColor::PurpleRed);
        assert_ne!(BetColor::from_number(res.number), res.color);
    }

    #[test]
    fn entropy_draw_stays_in_range() {
        for seed in 0..=255u8 {
            let mut entropy = [0u8; 32];
            entropy[0] = seed;
            entropy[1] = seed.wrapping_add(11);
            let res = RoundResult::from_entropy(&entropy);
            assert!(res.number <= MAX_NUMBER);
        }
    }

    fn sample_round(now: i64, mode: GameMode) -> Round {
        Round {
            sequence: 10_001,
            mode,
            window_start: now,
            window_end: now + mode.duration_secs(),
            status: RoundStatus::Active,
            control: RoundControl::Automatic,
            result: None,
            admin_result: None,
            admin_result_locked: false,
            total_bets: 0,
            total_pool: 0,
            completed_at: None,
            bump: 255,
        }
    }

    #[test]
    fn remaining_is_rederived_and_clamped() {
        let round = sample_round(1_000, GameMode::Quick);
        assert_eq!(round.remaining_secs(1_000), 60);
        assert_eq!(round.remaining_secs(1_045), 15);
        // stays derivable past the end so countdown UIs keep reading 0
        assert_eq!(round.remaining_secs(1_100), 0);
    }

    #[test]
    fn acceptance_stops_at_closing_margin() {
        let round = sample_round(1_000, GameMode::Quick);
        assert!(round.accepting_bets(1_000));
        assert!(round.accepting_bets(1_054)); // 6s left
        assert!(!round.accepting_bets(1_055)); // exactly the margin
        assert!(round.lock_due(1_055));
        assert!(!round.expired(1_059));
        assert!(round.expired(1_060));
    }

    #[test]
    fn manual_control_freezes_acceptance_immediately() {
        let mut round = sample_round(1_000, GameMode::Extended);
        assert!(round.accepting_bets(1_001));
        round.control = RoundControl::Manual;
        assert!(!round.accepting_bets(1_001));
    }

    #[test]
    fn locked_round_rejects_bets_but_keeps_counting() {
        let mut round = sample_round(1_000, GameMode::Turbo);
        round.status = RoundStatus::Locked;
        assert!(!round.accepting_bets(1_010));
        assert_eq!(round.remaining_secs(1_010), 20);
        assert!(round.is_open());
        round.status = RoundStatus::Completed;
        assert!(!round.is_open());
    }

    #[test]
    fn mode_durations() {
        assert_eq!(GameMode::Turbo.duration_secs(), 30);
        assert_eq!(GameMode::Quick.duration_secs(), 60);
        assert_eq!(GameMode::Standard.duration_secs(), 180);
        assert_eq!(GameMode::Extended.duration_secs(), 300);
    }
}
