use chrono::NaiveDate;
use mpm::model::NewMember;
use mpm::queries::member_queries;
use mpm::queries::stats_queries;
use mpm::store::MemberStore;
use tempfile::TempDir;

fn setup_with(points: &[(&str, i64)]) -> (TempDir, MemberStore) {
    let dir = TempDir::new().unwrap();
    let store = MemberStore::new(dir.path().join("members_data.json"), dir.path());
    for (i, (name, p)) in points.iter().enumerate() {
        store
            .add(NewMember::new(*name, "Hosseini", NaiveDate::from_ymd_opt(2009, 1, 1).unwrap()))
            .unwrap();
        if *p > 0 {
            store.set_points(i, *p, "seed").unwrap();
        }
    }
    (dir, store)
}

// ==========================================================================
// LEADERBOARD TESTS
// ==========================================================================

#[test]
fn leaderboard_rows_rank_and_level() {
    let (_dir, store) = setup_with(&[("Amir", 19), ("Hadi", 55), ("Javad", 19)]);
    let rows = member_queries::leaderboard_rows(&store);

    let summary: Vec<(usize, usize, u32, u32)> =
        rows.iter().map(|r| (r.rank, r.index, r.points, r.level)).collect();
    assert_eq!(summary, vec![(1, 1, 55, 2), (2, 0, 19, 0), (3, 2, 19, 0)]);
    assert_eq!(rows[0].name, "Hadi Hosseini");
}

#[test]
fn leaderboard_rows_empty_store() {
    let (_dir, store) = setup_with(&[]);
    assert!(member_queries::leaderboard_rows(&store).is_empty());
}

// ==========================================================================
// MEMBER CARD TESTS
// ==========================================================================

#[test]
fn member_card_derives_level_and_badges() {
    let (_dir, store) = setup_with(&[("Amir", 95)]);
    let card = member_queries::member_card(&store, 0).unwrap();
    assert_eq!(card.info.level, 3);
    assert_eq!(card.info.points_in_level, 15);
    assert_eq!(card.percent, 50.0);
    assert_eq!(card.badges.len(), 2);
    assert_eq!(card.next_badge.map(|b| b.unlock_level), Some(5));
}

#[test]
fn member_card_bad_index_fails() {
    let (_dir, store) = setup_with(&[("Amir", 1)]);
    assert!(member_queries::member_card(&store, 4).is_err());
}

#[test]
fn find_by_name_is_case_insensitive() {
    let (_dir, store) = setup_with(&[("Amir", 0), ("Hadi", 0), ("amirali", 0)]);
    let found: Vec<usize> = member_queries::find_by_name(&store, "AMIR")
        .into_iter()
        .map(|(i, _)| i)
        .collect();
    assert_eq!(found, vec![0, 2]);
    assert!(member_queries::find_by_name(&store, "  ").is_empty());
}

// ==========================================================================
// STATS TESTS
// ==========================================================================

#[test]
fn group_stats_summarises_members() {
    let (_dir, store) = setup_with(&[("Amir", 10), ("Hadi", 50), ("Javad", 0), ("Karim", 50)]);
    let stats = stats_queries::group_stats(&store);
    assert_eq!(stats.members, 4);
    assert_eq!(stats.total_points, 110);
    assert_eq!(stats.average_points, 27.5);
    assert_eq!(stats.highest_level, 2);
    assert_eq!(stats.ranked_members, 2);
    assert_eq!(stats.members_with_history, 3);
    assert_eq!(stats.top_member, Some(("Hadi Hosseini".to_string(), 50)));
}

#[test]
fn group_stats_empty_store() {
    let (_dir, store) = setup_with(&[]);
    let stats = stats_queries::group_stats(&store);
    assert_eq!(stats.members, 0);
    assert_eq!(stats.average_points, 0.0);
    assert_eq!(stats.top_member, None);
}
