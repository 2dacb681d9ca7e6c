use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{MpmError, MpmResult};
use crate::model::Member;

/// Reads the member array at `path`. A missing file is an empty collection;
/// anything unparseable is an error for the caller to decide on.
pub fn read_members(path: &Path) -> MpmResult<Vec<Member>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut members: Vec<Member> = serde_json::from_str(&text)?;
    assign_missing_ids(&mut members);
    Ok(members)
}

/// Parses snapshot text, insisting on a JSON array of well-formed members.
pub fn parse_snapshot(text: &str) -> MpmResult<Vec<Member>> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| MpmError::Validation(e.to_string()))?;
    if !value.is_array() {
        return Err(MpmError::Validation("expected a JSON array of members".into()));
    }
    let mut members: Vec<Member> =
        serde_json::from_value(value).map_err(|e| MpmError::Validation(e.to_string()))?;
    assign_missing_ids(&mut members);
    Ok(members)
}

/// Records written before ids existed get a position-derived one. It is
/// stable across reads and becomes durable with the next write.
fn assign_missing_ids(members: &mut [Member]) {
    for (position, member) in members.iter_mut().enumerate() {
        member.assign_missing_id(position);
    }
}

/// Pretty JSON, two-space indent, non-ASCII left as is.
pub fn write_members(path: &Path, members: &[Member]) -> MpmResult<()> {
    let mut json = serde_json::to_string_pretty(members)?;
    json.push('\n');
    write_atomic(path, json.as_bytes())
}

/// Writes to a sibling temp file, syncs, then renames over `path`.
/// The old file is untouched if any step before the rename fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> MpmResult<()> {
    let temp_path = temp_path_for(path);
    let result = (|| -> std::io::Result<()> {
        let mut file = File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)
    })();
    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "members".into());
    name.push(".tmp");
    path.with_file_name(name)
}
