use mpm::level::*;

// ==========================================================================
// LEVEL INFO TESTS
// ==========================================================================

fn triple(points: u32) -> (u32, u32, u32) {
    let info = level_info(points);
    (info.level, info.points_in_level, info.points_for_next)
}

#[test]
fn level_info_known_points() {
    assert_eq!(triple(0), (0, 0, 20));
    assert_eq!(triple(19), (0, 19, 20));
    assert_eq!(triple(20), (1, 0, 30));
    assert_eq!(triple(49), (1, 29, 30));
    assert_eq!(triple(50), (2, 0, 30));
}

#[test]
fn level_zero_exactly_below_first_threshold() {
    for p in 0..500 {
        assert_eq!(level_info(p).level == 0, p < 20, "points {}", p);
    }
}

#[test]
fn level_info_reconstructs_points() {
    for p in 20..2000 {
        let info = level_info(p);
        assert!(info.points_in_level < 30);
        assert_eq!(20 + (info.level - 1) * 30 + info.points_in_level, p);
    }
}

#[test]
fn level_info_has_no_cap() {
    let info = level_info(20 + 30 * 1000);
    assert_eq!(info.level, 1001);
    assert_eq!(info.points_in_level, 0);
}

// ==========================================================================
// PROGRESS TESTS
// ==========================================================================

#[test]
fn progress_percent_stays_below_hundred() {
    for p in 0..300 {
        let info = level_info(p);
        let pct = info.percent();
        assert!((0.0..100.0).contains(&pct), "points {} gave {}", p, pct);
    }
}

#[test]
fn progress_percent_examples() {
    assert_eq!(progress_percent(10, 20), 50.0);
    assert_eq!(progress_percent(0, 30), 0.0);
    assert_eq!(progress_percent(15, 30), 50.0);
}

#[test]
fn progress_tier_follows_percent() {
    assert_eq!(level_info(2).tier(), ProgressTier::Low);
    assert_eq!(level_info(6).tier(), ProgressTier::Medium);
    assert_eq!(level_info(10).tier(), ProgressTier::High);
    assert_eq!(level_info(18).tier(), ProgressTier::Complete);
    assert_eq!(ProgressTier::Low.color(), "#ff4444");
    assert_eq!(ProgressTier::Complete.color(), "#44ff44");
}

// ==========================================================================
// BADGE TESTS
// ==========================================================================

#[test]
fn no_badges_at_level_zero() {
    assert!(achievement_badges(0).is_empty());
}

#[test]
fn all_six_badges_at_level_twenty() {
    assert_eq!(achievement_badges(20).len(), 6);
    assert_eq!(achievement_badges(200).len(), 6);
}

#[test]
fn badges_unlock_at_fixed_levels() {
    let counts: Vec<usize> = [1, 2, 3, 4, 5, 9, 10, 14, 15, 19, 20]
        .iter()
        .map(|l| achievement_badges(*l).len())
        .collect();
    assert_eq!(counts, vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6]);
}

#[test]
fn badges_are_monotonic_in_level() {
    for level in 0..30 {
        let lower = achievement_badges(level);
        let higher = achievement_badges(level + 1);
        assert!(lower.iter().all(|b| higher.contains(b)), "level {}", level);
    }
}

#[test]
fn badges_carry_name_symbol_description() {
    let first = achievement_badges(1)[0];
    assert_eq!(first.unlock_level, 1);
    assert!(!first.name.is_empty());
    assert!(!first.symbol.is_empty());
    assert!(!first.description.is_empty());
}
