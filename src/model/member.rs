use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::history::{clamped_points, HistoryEntry};
use super::ids::Id;

/// A tracked member of the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default = "Id::nil")]
    pub id: Id<Member>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub responsibility: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photo_path: Option<String>,
    #[serde(default, deserialize_with = "clamped_points")]
    pub points: u32,
    /// Append-only; left out of the file until the first point change.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points_history: Vec<HistoryEntry>,
}

/// Fields supplied when a member is first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub responsibility: String,
    pub description: String,
    pub photo_path: Option<String>,
}

impl NewMember {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            responsibility: String::new(),
            description: String::new(),
            photo_path: None,
        }
    }
}

/// Wholesale replacement of a member's editable fields.
/// `points: None` keeps whatever the store currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberUpdate {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub responsibility: String,
    pub description: String,
    pub photo_path: Option<String>,
    pub points: Option<u32>,
}

impl MemberUpdate {
    /// Starts from the member's current values with points left alone.
    pub fn from_member(member: &Member) -> Self {
        Self {
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            birth_date: member.birth_date,
            responsibility: member.responsibility.clone(),
            description: member.description.clone(),
            photo_path: member.photo_path.clone(),
            points: None,
        }
    }
}

impl Member {
    pub fn create(new: NewMember) -> Self {
        Self {
            id: Id::generate(),
            first_name: new.first_name,
            last_name: new.last_name,
            birth_date: new.birth_date,
            responsibility: new.responsibility,
            description: new.description,
            photo_path: new.photo_path,
            points: 0,
            points_history: Vec::new(),
        }
    }

    /// Gives a record stored without an id one derived from its position and
    /// identity fields, so repeated reads of the same file agree.
    pub fn assign_missing_id(&mut self, position: usize) {
        if self.id.is_nil() {
            self.id = Id::derived(&format!(
                "{}|{}|{}|{}",
                position, self.first_name, self.last_name, self.birth_date
            ));
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replaces the editable fields. Id and history stay as they are.
    pub fn apply_update(&mut self, update: MemberUpdate) {
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.birth_date = update.birth_date;
        self.responsibility = update.responsibility;
        self.description = update.description;
        self.photo_path = update.photo_path;
        if let Some(points) = update.points {
            self.points = points;
        }
    }

    /// Sets points to `new_points` clamped at zero and appends the audit entry.
    pub fn record_points(&mut self, new_points: i64, reason: String, at: NaiveDateTime) -> HistoryEntry {
        let clamped = u32::try_from(new_points.max(0)).unwrap_or(u32::MAX);
        let entry = HistoryEntry::create(self.points, clamped, reason, at);
        self.points = clamped;
        self.points_history.push(entry.clone());
        entry
    }
}
