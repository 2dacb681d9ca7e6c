//! File-backed member store.
//!
//! Every call re-reads the data file, applies its change and writes the whole
//! collection back through a temp-file rename. Nothing is cached between calls,
//! so sequential callers never act on stale data. Two processes writing at the
//! same moment can still lose one of the writes.

pub mod csv;
pub mod file;

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{MpmError, MpmResult};
use crate::model::{HistoryEntry, Id, Member, MemberUpdate, NewMember};

pub struct MemberStore {
    data_file: PathBuf,
    backup_dir: PathBuf,
}

impl MemberStore {
    pub fn new(data_file: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            backup_dir: backup_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_file, &config.backup_dir)
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    // ----------------------------------------------------------------------
    // Reads: a missing or corrupt file reads as an empty collection.
    // ----------------------------------------------------------------------

    pub fn load_all(&self) -> Vec<Member> {
        match file::read_members(&self.data_file) {
            Ok(members) => members,
            Err(e) => {
                warn!(path = %self.data_file.display(), error = %e, "unreadable member file, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn get(&self, index: usize) -> MpmResult<Member> {
        let members = self.load_all();
        let len = members.len();
        let found = members
            .into_iter()
            .nth(index)
            .ok_or(MpmError::NotFound { index, len });
        report("get", found)
    }

    /// Empty for members that never had a point change, and for bad indices.
    pub fn history(&self, index: usize) -> Vec<HistoryEntry> {
        self.load_all()
            .into_iter()
            .nth(index)
            .map(|m| m.points_history)
            .unwrap_or_default()
    }

    /// Highest points first; equal points keep their stored order.
    pub fn leaderboard(&self) -> Vec<Member> {
        let mut members = self.load_all();
        members.sort_by(|a, b| b.points.cmp(&a.points));
        members
    }

    pub fn count(&self) -> usize {
        self.load_all().len()
    }

    /// Current position of the member with `id`.
    pub fn find_index(&self, id: Id<Member>) -> Option<usize> {
        self.load_all().iter().position(|m| m.id == id)
    }

    // ----------------------------------------------------------------------
    // Writes: strict. A corrupt file is reported instead of being overwritten.
    // ----------------------------------------------------------------------

    pub fn add(&self, new: NewMember) -> MpmResult<Member> {
        report(
            "add",
            self.mutate(|members| {
                let member = Member::create(new);
                members.push(member.clone());
                Ok(member)
            }),
        )
        .inspect(|m| info!(id = %m.id, name = %m.full_name(), "member added"))
    }

    /// Replaces the record's editable fields. Points survive when
    /// `update.points` is `None`; id and history always survive.
    pub fn update(&self, index: usize, update: MemberUpdate) -> MpmResult<Member> {
        report(
            "update",
            self.mutate(|members| {
                let len = members.len();
                let member = members
                    .get_mut(index)
                    .ok_or(MpmError::NotFound { index, len })?;
                member.apply_update(update);
                Ok(member.clone())
            }),
        )
        .inspect(|m| debug!(index, id = %m.id, "member updated"))
    }

    /// Sets points (clamped at zero) and appends the matching history entry.
    pub fn set_points(&self, index: usize, new_points: i64, reason: &str) -> MpmResult<HistoryEntry> {
        report(
            "set_points",
            self.mutate(|members| {
                let len = members.len();
                let member = members
                    .get_mut(index)
                    .ok_or(MpmError::NotFound { index, len })?;
                Ok(member.record_points(new_points, reason.to_string(), HistoryEntry::now()))
            }),
        )
        .inspect(|e| {
            info!(index, old = e.old_points, new = e.new_points, change = e.change, "points changed")
        })
    }

    /// Removes the member; everyone after it moves up one position.
    pub fn delete(&self, index: usize) -> MpmResult<Member> {
        report(
            "delete",
            self.mutate(|members| {
                let len = members.len();
                if index >= len {
                    return Err(MpmError::NotFound { index, len });
                }
                Ok(members.remove(index))
            }),
        )
        .inspect(|m| info!(index, id = %m.id, "member deleted"))
    }

    pub fn clear(&self) -> MpmResult<()> {
        report("clear", file::write_members(&self.data_file, &[]))
            .inspect(|_| warn!(path = %self.data_file.display(), "member list cleared"))
    }

    // ----------------------------------------------------------------------
    // Snapshots and export
    // ----------------------------------------------------------------------

    /// Copies the current collection to `target`, or to a timestamped file in
    /// the backup directory. The data file is not touched.
    pub fn backup(&self, target: Option<&Path>) -> MpmResult<PathBuf> {
        let path = match target {
            Some(p) => p.to_path_buf(),
            None => self.backup_dir.join(backup_file_name(Local::now().naive_local())),
        };
        let result = file::read_members(&self.data_file).and_then(|members| {
            if target.is_none() {
                std::fs::create_dir_all(&self.backup_dir)?;
            }
            file::write_members(&path, &members)?;
            Ok(members.len())
        });
        report("backup", result).map(|n| {
            info!(path = %path.display(), members = n, "backup written");
            path
        })
    }

    /// Replaces the collection with a snapshot. Anything but an array of
    /// members is rejected and the data file stays exactly as it was.
    pub fn restore(&self, source: &Path) -> MpmResult<usize> {
        let result = std::fs::read_to_string(source)
            .map_err(MpmError::from)
            .and_then(|text| file::parse_snapshot(&text))
            .and_then(|members| file::write_members(&self.data_file, &members).map(|_| members.len()));
        report("restore", result)
            .inspect(|n| info!(source = %source.display(), members = n, "snapshot restored"))
    }

    /// Writes a BOM-prefixed CSV of every member. Refuses an empty collection.
    pub fn export_csv(&self, target: &Path) -> MpmResult<usize> {
        let result = file::read_members(&self.data_file).and_then(|members| {
            if members.is_empty() {
                return Err(MpmError::EmptyCollection);
            }
            let text = csv::render(&members)?;
            file::write_atomic(target, text.as_bytes())?;
            Ok(members.len())
        });
        report("export", result)
            .inspect(|n| info!(path = %target.display(), members = n, "export written"))
    }

    fn mutate<T, F>(&self, apply: F) -> MpmResult<T>
    where
        F: FnOnce(&mut Vec<Member>) -> MpmResult<T>,
    {
        let mut members = file::read_members(&self.data_file)?;
        let out = apply(&mut members)?;
        file::write_members(&self.data_file, &members)?;
        Ok(out)
    }
}

/// `members_backup_YYYYMMDD_HHMMSS.json`
pub fn backup_file_name(at: chrono::NaiveDateTime) -> String {
    format!("members_backup_{}.json", at.format("%Y%m%d_%H%M%S"))
}

fn report<T>(op: &'static str, result: MpmResult<T>) -> MpmResult<T> {
    if let Err(e) = &result {
        match e {
            MpmError::NotFound { .. } => debug!(op, error = %e, "member store lookup missed"),
            MpmError::Validation(_) | MpmError::EmptyCollection => {
                warn!(op, error = %e, "member store rejected request")
            }
            _ => error!(op, error = %e, "member store operation failed"),
        }
    }
    result
}
