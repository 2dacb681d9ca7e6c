use chrono::NaiveDate;

use crate::error::MpmResult;
use crate::model::{Member, MemberUpdate, NewMember};
use crate::store::MemberStore;
use crate::validation::{self, trim_optional, trim_text};

pub fn add_member(
    store: &MemberStore,
    first_name: &str,
    last_name: &str,
    birth_date: NaiveDate,
    responsibility: &str,
    description: &str,
    photo_path: Option<&str>,
    today: NaiveDate,
) -> MpmResult<Member> {
    let first_name = validation::non_blank(first_name, "first name")?;
    let last_name = validation::non_blank(last_name, "last name")?;
    let birth_date = validation::not_in_future(birth_date, today)?;

    let mut new = NewMember::new(first_name, last_name, birth_date);
    new.responsibility = trim_text(responsibility);
    new.description = trim_text(description);
    new.photo_path = trim_optional(photo_path);

    store.add(new)
}

/// Partial edit. `None` leaves a field alone; `Some(None)` clears the photo.
#[derive(Debug, Clone, Default)]
pub struct MemberEdit<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub birth_date: Option<NaiveDate>,
    pub responsibility: Option<&'a str>,
    pub description: Option<&'a str>,
    pub photo_path: Option<Option<&'a str>>,
}

/// Edits everything except points. Never writes a history entry.
pub fn edit_member(
    store: &MemberStore,
    index: usize,
    edit: MemberEdit<'_>,
    today: NaiveDate,
) -> MpmResult<Member> {
    let current = store.get(index)?;
    let mut update = MemberUpdate::from_member(&current);

    if let Some(f) = edit.first_name {
        update.first_name = validation::non_blank(f, "first name")?;
    }
    if let Some(l) = edit.last_name {
        update.last_name = validation::non_blank(l, "last name")?;
    }
    if let Some(bd) = edit.birth_date {
        update.birth_date = validation::not_in_future(bd, today)?;
    }
    if let Some(r) = edit.responsibility {
        update.responsibility = trim_text(r);
    }
    if let Some(d) = edit.description {
        update.description = trim_text(d);
    }
    if let Some(p) = edit.photo_path {
        update.photo_path = trim_optional(p);
    }

    store.update(index, update)
}
