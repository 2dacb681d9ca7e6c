//! Level, progress and badge derivation. Pure functions of a points value.

use serde::Serialize;

/// Points needed to leave level 0.
pub const FIRST_THRESHOLD: u32 = 20;

/// Points per level after the first.
pub const LEVEL_STRIDE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    pub level: u32,
    pub points_in_level: u32,
    pub points_for_next: u32,
}

impl LevelInfo {
    pub fn percent(&self) -> f64 {
        progress_percent(self.points_in_level, self.points_for_next)
    }

    pub fn tier(&self) -> ProgressTier {
        progress_tier(self.percent())
    }
}

pub fn level_info(points: u32) -> LevelInfo {
    if points < FIRST_THRESHOLD {
        return LevelInfo {
            level: 0,
            points_in_level: points,
            points_for_next: FIRST_THRESHOLD,
        };
    }
    let above = points - FIRST_THRESHOLD;
    LevelInfo {
        level: 1 + above / LEVEL_STRIDE,
        points_in_level: above % LEVEL_STRIDE,
        points_for_next: LEVEL_STRIDE,
    }
}

pub fn progress_percent(points_in_level: u32, points_for_next: u32) -> f64 {
    if points_for_next == 0 {
        return 0.0;
    }
    100.0 * f64::from(points_in_level) / f64::from(points_for_next)
}

/// Coarse bucket for colouring a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressTier {
    Low,
    Medium,
    High,
    Complete,
}

impl ProgressTier {
    pub fn color(&self) -> &'static str {
        match self {
            ProgressTier::Low => "#ff4444",
            ProgressTier::Medium => "#ff8800",
            ProgressTier::High => "#ffdd00",
            ProgressTier::Complete => "#44ff44",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProgressTier::Low => "low",
            ProgressTier::Medium => "medium",
            ProgressTier::High => "high",
            ProgressTier::Complete => "complete",
        }
    }
}

pub fn progress_tier(percent: f64) -> ProgressTier {
    if percent < 25.0 {
        ProgressTier::Low
    } else if percent < 50.0 {
        ProgressTier::Medium
    } else if percent < 75.0 {
        ProgressTier::High
    } else {
        ProgressTier::Complete
    }
}

/// A milestone unlocked once a member reaches `unlock_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub name: &'static str,
    pub symbol: &'static str,
    pub description: &'static str,
    pub unlock_level: u32,
}

/// Every badge, ordered by unlock level.
pub const BADGES: &[Badge] = &[
    Badge { name: "آغازگر", symbol: "🌟", description: "رسیدن به سطح ۱", unlock_level: 1 },
    Badge { name: "پیشرو", symbol: "⭐", description: "رسیدن به سطح ۳", unlock_level: 3 },
    Badge { name: "فعال", symbol: "✨", description: "رسیدن به سطح ۵", unlock_level: 5 },
    Badge { name: "نمونه", symbol: "🏆", description: "رسیدن به سطح ۱۰", unlock_level: 10 },
    Badge { name: "ستاره", symbol: "💎", description: "رسیدن به سطح ۱۵", unlock_level: 15 },
    Badge { name: "قهرمان", symbol: "👑", description: "رسیدن به سطح ۲۰", unlock_level: 20 },
];

pub fn achievement_badges(level: u32) -> Vec<Badge> {
    BADGES
        .iter()
        .filter(|b| level >= b.unlock_level)
        .copied()
        .collect()
}

/// The next badge still locked at `level`, if any.
pub fn next_badge(level: u32) -> Option<Badge> {
    BADGES.iter().find(|b| level < b.unlock_level).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(progress_tier(0.0), ProgressTier::Low);
        assert_eq!(progress_tier(24.9), ProgressTier::Low);
        assert_eq!(progress_tier(25.0), ProgressTier::Medium);
        assert_eq!(progress_tier(50.0), ProgressTier::High);
        assert_eq!(progress_tier(75.0), ProgressTier::Complete);
        assert_eq!(progress_tier(99.0), ProgressTier::Complete);
    }

    #[test]
    fn percent_of_zero_span_is_zero() {
        assert_eq!(progress_percent(5, 0), 0.0);
    }

    #[test]
    fn next_badge_after_champion_is_none() {
        assert_eq!(next_badge(0).map(|b| b.unlock_level), Some(1));
        assert_eq!(next_badge(4).map(|b| b.unlock_level), Some(5));
        assert!(next_badge(20).is_none());
    }

    #[test]
    fn badge_labels_match_stored_wording() {
        let first = BADGES[0];
        assert_eq!((first.name, first.symbol), ("آغازگر", "🌟"));
        let last = BADGES[BADGES.len() - 1];
        assert_eq!((last.name, last.description), ("قهرمان", "رسیدن به سطح ۲۰"));
    }

    #[test]
    fn badges_are_sorted_by_unlock_level() {
        assert!(BADGES.windows(2).all(|w| w[0].unlock_level < w[1].unlock_level));
    }
}
