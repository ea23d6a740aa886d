//! Click-combo tracking for the clicker variant.

use crate::config::{CLICK_SCORE, CLICK_XP, COMBO_STEP, COMBO_WINDOW_MS};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComboState {
    pub combo: u32,
    /// Best combo this session.
    pub best: u32,
    pub last_click_ms: Option<f64>,
}

/// Reward earned by one click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickReward {
    pub xp: i64,
    pub score: i64,
}

impl ComboState {
    pub fn multiplier(&self) -> u32 {
        1 + self.combo / COMBO_STEP
    }

    /// Count a click at `now_ms`; a gap longer than the combo window starts
    /// a new round first.
    pub fn register_click(&mut self, now_ms: f64) -> ClickReward {
        if self.is_expired(now_ms) {
            self.combo = 0;
        }
        self.combo = self.combo.saturating_add(1);
        self.best = self.best.max(self.combo);
        self.last_click_ms = Some(now_ms);
        ClickReward {
            xp: CLICK_XP,
            score: CLICK_SCORE * self.multiplier() as i64,
        }
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.last_click_ms
            .is_some_and(|last| now_ms - last > COMBO_WINDOW_MS)
    }

    pub fn reset_round(&mut self) {
        self.combo = 0;
        self.last_click_ms = None;
    }
}
