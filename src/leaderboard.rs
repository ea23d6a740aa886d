//! Leaderboard view: the live player merged into a fixed comparison set.

use crate::model::PlayerRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u64,
    pub level: u32,
    pub is_player: bool,
}

impl LeaderboardEntry {
    fn rival(name: &str, score: u64, level: u32) -> Self {
        Self {
            name: name.to_string(),
            score,
            level,
            is_player: false,
        }
    }
}

/// Mock rivals shown next to the player.
pub fn static_entries() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry::rival("CyberPro", 15420, 25),
        LeaderboardEntry::rival("NeonMaster", 12890, 22),
        LeaderboardEntry::rival("GlowHunter", 10340, 19),
        LeaderboardEntry::rival("PixelWave", 8220, 17),
    ]
}

/// Append the player to `entries` and order by score, highest first.
/// The sort is stable, so equal scores keep their input order and the
/// player ranks below rivals with the same score.
pub fn project(player: &PlayerRecord, entries: &[LeaderboardEntry]) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<LeaderboardEntry> = entries.to_vec();
    ranked.push(LeaderboardEntry {
        name: player.name.clone(),
        score: player.score,
        level: player.level,
        is_player: true,
    });
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// 1-based rank of the player in a projection.
pub fn player_rank(ranked: &[LeaderboardEntry]) -> Option<usize> {
    ranked.iter().position(|e| e.is_player).map(|i| i + 1)
}

pub fn rank_color(rank: usize) -> &'static str {
    match rank {
        1 => "#facc15",
        2 => "#d1d5db",
        3 => "#fb923c",
        _ => "#8b949e",
    }
}
