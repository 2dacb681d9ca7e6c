use crate::level;
use crate::store::MemberStore;

#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub members: usize,
    pub total_points: u64,
    pub average_points: f64,
    pub highest_level: u32,
    /// Members with at least one recorded point change.
    pub members_with_history: usize,
    /// Members at level 1 or above.
    pub ranked_members: usize,
    /// Highest scorer's name and points.
    pub top_member: Option<(String, u32)>,
}

pub fn group_stats(store: &MemberStore) -> GroupStats {
    let members = store.load_all();

    let total_points: u64 = members.iter().map(|m| u64::from(m.points)).sum();
    let average_points = if members.is_empty() {
        0.0
    } else {
        total_points as f64 / members.len() as f64
    };

    let levels: Vec<u32> = members
        .iter()
        .map(|m| level::level_info(m.points).level)
        .collect();

    // First of the highest scorers, matching leaderboard order.
    let top_member = members
        .iter()
        .fold(None, |best: Option<&crate::model::Member>, m| match best {
            Some(b) if b.points >= m.points => Some(b),
            _ => Some(m),
        })
        .map(|m| (m.full_name(), m.points));

    GroupStats {
        members: members.len(),
        total_points,
        average_points,
        highest_level: levels.iter().copied().max().unwrap_or(0),
        members_with_history: members.iter().filter(|m| !m.points_history.is_empty()).count(),
        ranked_members: levels.iter().filter(|l| **l >= 1).count(),
        top_member,
    }
}
