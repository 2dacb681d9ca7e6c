use crate::error::MpmResult;
use crate::model::Member;

/// Lets spreadsheet tools pick UTF-8 for non-Latin names.
pub const BOM: &str = "\u{feff}";

pub const HEADER: &[&str] = &[
    "id",
    "first_name",
    "last_name",
    "birth_date",
    "responsibility",
    "description",
    "photo_path",
    "points",
    "points_history",
];

/// One row per member; history is inlined as compact JSON.
pub fn render(members: &[Member]) -> MpmResult<String> {
    let mut out = String::from(BOM);
    push_row(&mut out, HEADER.iter().map(|h| h.to_string()));
    for m in members {
        let history = if m.points_history.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&m.points_history)?
        };
        push_row(
            &mut out,
            [
                m.id.to_string(),
                m.first_name.clone(),
                m.last_name.clone(),
                m.birth_date.to_string(),
                m.responsibility.clone(),
                m.description.clone(),
                m.photo_path.clone().unwrap_or_default(),
                m.points.to_string(),
                history,
            ],
        );
    }
    Ok(out)
}

fn push_row<I: IntoIterator<Item = String>>(out: &mut String, fields: I) {
    let row: Vec<String> = fields.into_iter().map(|f| quote(&f)).collect();
    out.push_str(&row.join(","));
    out.push('\n');
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
