//! Player progression: the persisted record and the pure rules that evolve it.
//!
//! Every operation takes the current record by reference and returns the
//! updated one. Nothing here touches storage; the session persists whatever
//! record comes out.

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_PLAYER_NAME, LEVEL_GROWTH, NAME_MAX_CHARS, NAME_MIN_CHARS, STARTING_LEVEL,
    STARTING_XP_TO_NEXT_LEVEL,
};
use crate::error::{GameError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRecord {
    pub name: String,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub score: u64,
    /// Total clicks in the clicker variant.
    pub clicks: u64,
    /// Id of the last story node visited.
    pub story_progress: i32,
    /// Unlocked ending names in order of discovery, no duplicates.
    pub endings: Vec<String>,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
            level: STARTING_LEVEL,
            xp: 0,
            xp_to_next_level: STARTING_XP_TO_NEXT_LEVEL,
            score: 0,
            clicks: 0,
            story_progress: 0,
            endings: Vec::new(),
        }
    }
}

/// Next threshold after one level-up: floor(threshold * 1.5).
fn grow_threshold(threshold: u64) -> u64 {
    threshold.saturating_add(threshold / 2)
}

fn add_clamped(value: u64, delta: i64) -> u64 {
    if delta >= 0 {
        value.saturating_add(delta as u64)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

/// Trim and length-check a display name.
pub fn validate_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    let len = name.chars().count();
    if len < NAME_MIN_CHARS {
        return Err(GameError::Validation {
            reason: format!("name must be at least {NAME_MIN_CHARS} characters"),
        });
    }
    if len > NAME_MAX_CHARS {
        return Err(GameError::Validation {
            reason: format!("name must be at most {NAME_MAX_CHARS} characters"),
        });
    }
    Ok(name.to_string())
}

impl PlayerRecord {
    /// Add xp and score. At most one level-up happens per call: overflow
    /// beyond the threshold is carried into `xp` even when it already
    /// exceeds the next threshold.
    pub fn apply_reward(&self, xp_delta: i64, score_delta: i64) -> PlayerRecord {
        let mut next = self.clone();
        next.score = add_clamped(self.score, score_delta);
        let xp_total = add_clamped(self.xp, xp_delta);
        if xp_total >= self.xp_to_next_level {
            next.level = self.level.saturating_add(1);
            next.xp = xp_total - self.xp_to_next_level;
            next.xp_to_next_level = grow_threshold(self.xp_to_next_level).max(1);
        } else {
            next.xp = xp_total;
        }
        next
    }

    /// Unlock an ending. Names already present are left alone.
    pub fn record_ending(&self, ending: &str) -> PlayerRecord {
        let mut next = self.clone();
        if !next.has_ending(ending) {
            next.endings.push(ending.to_string());
        }
        next
    }

    pub fn has_ending(&self, ending: &str) -> bool {
        self.endings.iter().any(|e| e == ending)
    }

    pub fn rename_profile(&self, new_name: &str) -> Result<PlayerRecord> {
        let name = validate_name(new_name)?;
        Ok(PlayerRecord {
            name,
            ..self.clone()
        })
    }

    /// Purchased levels: `level + n`, threshold becomes floor(threshold * 1.5^n).
    /// XP and score are untouched.
    pub fn grant_levels(&self, n: u32) -> PlayerRecord {
        let factor = LEVEL_GROWTH.powi(n.min(i32::MAX as u32) as i32);
        let threshold = (self.xp_to_next_level as f64 * factor).floor();
        PlayerRecord {
            level: self.level.saturating_add(n),
            // `as` saturates on overflow
            xp_to_next_level: (threshold as u64).max(1),
            ..self.clone()
        }
    }

    pub fn count_click(&self) -> PlayerRecord {
        PlayerRecord {
            clicks: self.clicks.saturating_add(1),
            ..self.clone()
        }
    }

    pub fn visit_node(&self, node_id: i32) -> PlayerRecord {
        PlayerRecord {
            story_progress: node_id,
            ..self.clone()
        }
    }

    /// Repair a record read from storage so the invariants hold again.
    pub fn normalized(&self) -> PlayerRecord {
        let mut next = self.clone();
        next.name = validate_name(&self.name).unwrap_or_else(|_| DEFAULT_PLAYER_NAME.to_string());
        next.level = next.level.max(STARTING_LEVEL);
        next.xp_to_next_level = next.xp_to_next_level.max(1);
        let mut seen: Vec<String> = Vec::with_capacity(self.endings.len());
        for ending in &self.endings {
            if !seen.contains(ending) {
                seen.push(ending.clone());
            }
        }
        next.endings = seen;
        next
    }
}

/// Fill of the xp bar, 0..=100.
pub fn xp_percent(xp: u64, xp_to_next_level: u64) -> f64 {
    if xp_to_next_level == 0 {
        return 0.0;
    }
    ((xp as f64 / xp_to_next_level as f64) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> PlayerRecord {
        PlayerRecord::default()
    }

    #[test]
    fn reward_below_threshold_keeps_level() {
        let r = fresh().apply_reward(50, 100);
        assert_eq!(r.level, 1);
        assert_eq!(r.xp, 50);
        assert_eq!(r.xp_to_next_level, 100);
        assert_eq!(r.score, 100);
    }

    #[test]
    fn reward_scenario_rolls_into_level_two() {
        let r = fresh().apply_reward(50, 100).apply_reward(80, 200);
        assert_eq!(r.level, 2);
        assert_eq!(r.xp, 30);
        assert_eq!(r.xp_to_next_level, 150);
        assert_eq!(r.score, 300);
    }

    #[test]
    fn reward_exactly_at_threshold_levels_up_with_zero_xp() {
        let r = fresh().apply_reward(100, 0);
        assert_eq!(r.level, 2);
        assert_eq!(r.xp, 0);
    }

    #[test]
    fn large_reward_rolls_over_only_once() {
        let r = fresh().apply_reward(400, 0);
        assert_eq!(r.level, 2);
        assert_eq!(r.xp, 300);
        assert_eq!(r.xp_to_next_level, 150);
        // still above the new threshold, carried as-is
        assert!(r.xp >= r.xp_to_next_level);
    }

    #[test]
    fn below_threshold_property_holds_for_many_inputs() {
        for threshold in [1u64, 7, 100, 151, 10_000] {
            for xp in [0u64, 1, threshold / 2, threshold - 1] {
                if xp >= threshold {
                    continue;
                }
                let start = PlayerRecord {
                    xp,
                    xp_to_next_level: threshold,
                    ..fresh()
                };
                let delta = (threshold - 1 - xp) as i64;
                let r = start.apply_reward(delta, 0);
                assert_eq!(r.level, start.level);
                assert_eq!(r.xp, xp + delta as u64);
            }
        }
    }

    #[test]
    fn negative_deltas_clamp_at_zero() {
        let start = PlayerRecord {
            xp: 10,
            score: 5,
            ..fresh()
        };
        let r = start.apply_reward(-50, -50);
        assert_eq!(r.xp, 0);
        assert_eq!(r.score, 0);
        assert_eq!(r.level, 1);
    }

    #[test]
    fn record_ending_is_idempotent_and_ordered() {
        let once = fresh().record_ending("Digital God").record_ending("Lone Wolf");
        let twice = once.record_ending("Digital God");
        assert_eq!(once.endings, twice.endings);
        assert_eq!(twice.endings, vec!["Digital God", "Lone Wolf"]);
    }

    #[test]
    fn rename_rejects_short_names() {
        let err = fresh().rename_profile("a").unwrap_err();
        assert!(matches!(err, GameError::Validation { .. }));
        assert!(fresh().rename_profile("   a  ").is_err());
    }

    #[test]
    fn rename_accepts_and_trims() {
        assert_eq!(fresh().rename_profile("ab").unwrap().name, "ab");
        assert_eq!(fresh().rename_profile(" ab ").unwrap().name, "ab");
    }

    #[test]
    fn rename_rejects_long_names() {
        let twenty = "x".repeat(20);
        assert!(fresh().rename_profile(&twenty).is_ok());
        let twenty_one = "x".repeat(21);
        assert!(fresh().rename_profile(&twenty_one).is_err());
    }

    #[test]
    fn rename_counts_characters_not_bytes() {
        // 10 two-byte characters
        let name = "игрокигрок";
        assert_eq!(fresh().rename_profile(name).unwrap().name, name);
    }

    #[test]
    fn failed_rename_leaves_record_untouched() {
        let start = fresh();
        let _ = start.rename_profile("x");
        assert_eq!(start.name, DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn grant_levels_scenario() {
        let start = PlayerRecord {
            level: 3,
            xp: 40,
            score: 900,
            xp_to_next_level: 100,
            ..fresh()
        };
        let r = start.grant_levels(2);
        assert_eq!(r.level, 5);
        assert_eq!(r.xp_to_next_level, 225);
        assert_eq!(r.xp, 40);
        assert_eq!(r.score, 900);
    }

    #[test]
    fn grant_levels_uses_single_floor() {
        let start = PlayerRecord {
            xp_to_next_level: 101,
            ..fresh()
        };
        // floor(101 * 2.25) = 227, not floor(floor(101 * 1.5) * 1.5) = 226
        assert_eq!(start.grant_levels(2).xp_to_next_level, 227);
    }

    #[test]
    fn grant_zero_levels_is_identity() {
        let start = fresh().apply_reward(30, 30);
        assert_eq!(start.grant_levels(0), start);
    }

    #[test]
    fn normalized_repairs_invariants() {
        let broken = PlayerRecord {
            name: " x ".into(),
            level: 0,
            xp_to_next_level: 0,
            endings: vec!["A".into(), "B".into(), "A".into()],
            ..fresh()
        };
        let r = broken.normalized();
        assert_eq!(r.name, DEFAULT_PLAYER_NAME);
        assert_eq!(r.level, 1);
        assert_eq!(r.xp_to_next_level, 1);
        assert_eq!(r.endings, vec!["A", "B"]);
    }

    #[test]
    fn snapshot_uses_camel_case_fields() {
        let json = serde_json::to_value(fresh()).unwrap();
        assert_eq!(json["xpToNextLevel"], 100);
        assert_eq!(json["storyProgress"], 0);
        assert!(json["endings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn snapshot_missing_fields_take_defaults() {
        let r: PlayerRecord = serde_json::from_str(r#"{"name":"Neo","score":42}"#).unwrap();
        assert_eq!(r.name, "Neo");
        assert_eq!(r.score, 42);
        assert_eq!(r.level, 1);
        assert_eq!(r.xp_to_next_level, 100);
    }

    #[test]
    fn xp_percent_is_bounded() {
        assert_eq!(xp_percent(0, 100), 0.0);
        let half = fresh().apply_reward(50, 0);
        assert_eq!(xp_percent(half.xp, half.xp_to_next_level), 50.0);
        let over = PlayerRecord {
            xp: 500,
            ..fresh()
        };
        assert_eq!(xp_percent(over.xp, over.xp_to_next_level), 100.0);
        assert_eq!(xp_percent(30, 0), 0.0);
        assert_eq!(xp_percent(75, 150), 50.0);
    }

    #[test]
    fn huge_threshold_stays_saturated() {
        assert_eq!(grow_threshold(u64::MAX), u64::MAX);
        assert_eq!(grow_threshold(u64::MAX - 1), u64::MAX);
        assert_eq!(grow_threshold(101), 151);
        let r = PlayerRecord {
            xp_to_next_level: u64::MAX,
            ..fresh()
        }
        .grant_levels(3);
        assert_eq!(r.xp_to_next_level, u64::MAX);
    }
}
