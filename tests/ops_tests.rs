use chrono::NaiveDate;
use mpm::error::MpmError;
use mpm::ops::member_ops::{self, MemberEdit};
use mpm::ops::points_ops;
use mpm::store::MemberStore;
use tempfile::TempDir;

fn setup() -> (TempDir, MemberStore) {
    let dir = TempDir::new().unwrap();
    let store = MemberStore::new(dir.path().join("members_data.json"), dir.path());
    (dir, store)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn born() -> NaiveDate {
    NaiveDate::from_ymd_opt(2011, 9, 23).unwrap()
}

fn add(store: &MemberStore, first: &str) {
    member_ops::add_member(store, first, "Moradi", born(), "", "", None, today()).unwrap();
}

// ==========================================================================
// MEMBER OPS TESTS
// ==========================================================================

#[test]
fn add_member_trims_fields() {
    let (_dir, store) = setup();
    let m = member_ops::add_member(
        &store,
        "  Sajjad ",
        " Moradi",
        born(),
        " librarian ",
        "  ",
        Some("  "),
        today(),
    )
    .unwrap();
    assert_eq!(m.first_name, "Sajjad");
    assert_eq!(m.last_name, "Moradi");
    assert_eq!(m.responsibility, "librarian");
    assert_eq!(m.description, "");
    assert_eq!(m.photo_path, None);
}

#[test]
fn add_member_rejects_blank_names() {
    let (_dir, store) = setup();
    let result = member_ops::add_member(&store, "   ", "Moradi", born(), "", "", None, today());
    assert!(matches!(result, Err(MpmError::BlankField { .. })));
    let result = member_ops::add_member(&store, "Sajjad", "", born(), "", "", None, today());
    assert!(matches!(result, Err(MpmError::BlankField { .. })));
    assert_eq!(store.count(), 0);
}

#[test]
fn add_member_rejects_future_birth_date() {
    let (_dir, store) = setup();
    let tomorrow = today().succ_opt().unwrap();
    let result = member_ops::add_member(&store, "Sajjad", "Moradi", tomorrow, "", "", None, today());
    assert!(matches!(result, Err(MpmError::FutureBirthDate { .. })));
    assert_eq!(store.count(), 0);
}

#[test]
fn edit_member_changes_only_given_fields() {
    let (_dir, store) = setup();
    add(&store, "Sajjad");
    points_ops::set_points(&store, 0, 21, "camp").unwrap();

    let edit = MemberEdit {
        description: Some("Quran reciter"),
        photo_path: Some(Some("photos/member_0.jpg")),
        ..Default::default()
    };
    let m = member_ops::edit_member(&store, 0, edit, today()).unwrap();

    assert_eq!(m.first_name, "Sajjad");
    assert_eq!(m.description, "Quran reciter");
    assert_eq!(m.photo_path.as_deref(), Some("photos/member_0.jpg"));
    assert_eq!(m.points, 21);
    assert_eq!(store.history(0).len(), 1);
}

#[test]
fn edit_member_can_clear_photo() {
    let (_dir, store) = setup();
    member_ops::add_member(&store, "Sajjad", "Moradi", born(), "", "", Some("a.png"), today()).unwrap();
    let edit = MemberEdit {
        photo_path: Some(None),
        ..Default::default()
    };
    let m = member_ops::edit_member(&store, 0, edit, today()).unwrap();
    assert_eq!(m.photo_path, None);
}

#[test]
fn edit_member_validates_before_writing() {
    let (_dir, store) = setup();
    add(&store, "Sajjad");
    let edit = MemberEdit {
        first_name: Some(" "),
        description: Some("changed"),
        ..Default::default()
    };
    assert!(member_ops::edit_member(&store, 0, edit, today()).is_err());
    assert_eq!(store.get(0).unwrap().description, "");
}

#[test]
fn edit_missing_member_is_not_found() {
    let (_dir, store) = setup();
    let result = member_ops::edit_member(&store, 0, MemberEdit::default(), today());
    assert!(matches!(result, Err(MpmError::NotFound { .. })));
}

// ==========================================================================
// POINTS OPS TESTS
// ==========================================================================

#[test]
fn adjust_points_adds_and_subtracts() {
    let (_dir, store) = setup();
    add(&store, "Sajjad");
    points_ops::adjust_points(&store, 0, 5, "").unwrap();
    points_ops::adjust_points(&store, 0, 1, "").unwrap();
    let entry = points_ops::adjust_points(&store, 0, -1, "late").unwrap();

    assert_eq!(store.get(0).unwrap().points, 5);
    assert_eq!(entry.old_points, 6);
    assert_eq!(entry.change, -1);
    assert_eq!(entry.reason, "late");
    assert_eq!(store.history(0)[0].reason, "added 5 points");
}

#[test]
fn adjust_points_never_goes_negative() {
    let (_dir, store) = setup();
    add(&store, "Sajjad");
    points_ops::adjust_points(&store, 0, 3, "").unwrap();
    let entry = points_ops::adjust_points(&store, 0, -5, "").unwrap();
    assert_eq!(entry.new_points, 0);
    assert_eq!(entry.change, -3);
    assert_eq!(store.get(0).unwrap().points, 0);
}

#[test]
fn set_points_fills_blank_reason() {
    let (_dir, store) = setup();
    add(&store, "Sajjad");
    let entry = points_ops::set_points(&store, 0, 12, "   ").unwrap();
    assert_eq!(entry.reason, points_ops::DEFAULT_REASON);
}

#[test]
fn recent_history_is_newest_first_and_limited() {
    let (_dir, store) = setup();
    add(&store, "Sajjad");
    for p in 1..=12 {
        points_ops::set_points(&store, 0, p, "").unwrap();
    }
    let recent = points_ops::recent_history(&store, 0, 10);
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].new_points, 12);
    assert_eq!(recent[9].new_points, 3);
}
