/// Seed for the singleton game configuration PDA.
pub const GAME_CONFIG_SEED: &[u8] = b"game_config";
/// Seed for per-round PDAs, combined with the round sequence number.
pub const ROUND_SEED: &[u8] = b"round";
/// Seed for per-bet PDAs, combined with round key, bettor key and bet id.
pub const BET_SEED: &[u8] = b"bet";
/// Seed for the house vault token account PDA.
pub const HOUSE_VAULT_SEED: &[u8] = b"house_vault";

/// Seconds before `window_end` at which bet acceptance stops and the round
/// may be locked. One policy, applied uniformly at every call site.
pub const CLOSING_MARGIN_SECS: i64 = 5;

/// Basis-point denominator for payout multipliers.
pub const BPS_DENOMINATOR: u64 = 10_000;
/// Win multiplier for a color bet when the result color is Red or Green (0.95x).
pub const COLOR_WIN_BPS: u64 = 9_500;
/// Win multiplier for a color bet when the result color is PurpleRed (0.90x).
pub const PURPLE_RED_WIN_BPS: u64 = 9_000;
/// Win multiplier for a number bet (9.0x).
pub const NUMBER_WIN_BPS: u64 = 90_000;

/// Highest playable number; results and number bets are 0..=9.
pub const MAX_NUMBER: u8 = 9;

/// Cap on bets per round so a full settlement pass (one bet account plus one
/// bettor token account each) fits in a single transaction.
pub const MAX_BETS_PER_ROUND: u64 = 16;
