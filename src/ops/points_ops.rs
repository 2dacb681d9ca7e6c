use crate::error::MpmResult;
use crate::model::HistoryEntry;
use crate::store::MemberStore;

/// Reason recorded when the operator leaves it blank.
pub const DEFAULT_REASON: &str = "manual adjustment";

/// Sets an absolute value. A blank reason becomes [`DEFAULT_REASON`].
pub fn set_points(store: &MemberStore, index: usize, value: i64, reason: &str) -> MpmResult<HistoryEntry> {
    let reason = match reason.trim() {
        "" => DEFAULT_REASON,
        r => r,
    };
    store.set_points(index, value, reason)
}

/// Adds `delta` (possibly negative) to the current points.
pub fn adjust_points(store: &MemberStore, index: usize, delta: i64, reason: &str) -> MpmResult<HistoryEntry> {
    let current = store.get(index)?.points;
    let reason = match reason.trim() {
        "" => default_adjust_reason(delta),
        r => r.to_string(),
    };
    store.set_points(index, i64::from(current).saturating_add(delta), &reason)
}

fn default_adjust_reason(delta: i64) -> String {
    match delta {
        1 => "added one point".into(),
        -1 => "removed one point".into(),
        0 => "no change".into(),
        d if d > 0 => format!("added {} points", d),
        d => format!("removed {} points", d.unsigned_abs()),
    }
}

/// The last `limit` entries, newest first.
pub fn recent_history(store: &MemberStore, index: usize, limit: usize) -> Vec<HistoryEntry> {
    store.history(index).into_iter().rev().take(limit).collect()
}
