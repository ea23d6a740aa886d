//! Tunables and storage keys.

pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_XP_TO_NEXT_LEVEL: u64 = 100;

/// Threshold multiplier applied on every level gained.
pub const LEVEL_GROWTH: f64 = 1.5;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 20;

/// How long a choice's consequence text stays up before the story moves on.
pub const CONSEQUENCE_DELAY_MS: u32 = 1500;
/// How long the ending banner stays up before returning to the menu.
pub const ENDING_RETURN_DELAY_MS: u32 = 2000;
/// How long notices stay visible.
pub const NOTICE_DURATION_MS: u32 = 3000;

/// Clicks further apart than this start a new round.
pub const COMBO_WINDOW_MS: f64 = 1200.0;
pub const CLICK_XP: i64 = 2;
pub const CLICK_SCORE: i64 = 5;
/// Every this many combo hits adds one to the score multiplier.
pub const COMBO_STEP: u32 = 10;

pub const FINALE_PREFIX: &str = "FINALE: ";

pub const KEY_PLAYER_DATA: &str = "ns_player_data";
pub const KEY_SETTING_VARIANT: &str = "ns_setting_variant";
