use crate::error::MpmResult;
use crate::level::{self, Badge, LevelInfo, ProgressTier};
use crate::model::Member;
use crate::store::MemberStore;

/// A leaderboard line as shown to the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub rank: usize,
    /// Position in the stored list, for follow-up commands.
    pub index: usize,
    pub name: String,
    pub points: u32,
    pub level: u32,
}

pub fn leaderboard_rows(store: &MemberStore) -> Vec<LeaderboardRow> {
    let mut indexed: Vec<(usize, Member)> = store.load_all().into_iter().enumerate().collect();
    indexed.sort_by(|a, b| b.1.points.cmp(&a.1.points));
    indexed
        .into_iter()
        .enumerate()
        .map(|(i, (index, m))| LeaderboardRow {
            rank: i + 1,
            index,
            name: m.full_name(),
            points: m.points,
            level: level::level_info(m.points).level,
        })
        .collect()
}

/// A member with everything the level engine derives from their points.
#[derive(Debug, Clone)]
pub struct MemberCard {
    pub member: Member,
    pub info: LevelInfo,
    pub percent: f64,
    pub tier: ProgressTier,
    pub badges: Vec<Badge>,
    pub next_badge: Option<Badge>,
}

impl MemberCard {
    pub fn from_member(member: Member) -> Self {
        let info = level::level_info(member.points);
        Self {
            percent: info.percent(),
            tier: info.tier(),
            badges: level::achievement_badges(info.level),
            next_badge: level::next_badge(info.level),
            info,
            member,
        }
    }
}

pub fn member_card(store: &MemberStore, index: usize) -> MpmResult<MemberCard> {
    store.get(index).map(MemberCard::from_member)
}

/// Case-insensitive match on either name, with positions.
pub fn find_by_name(store: &MemberStore, query: &str) -> Vec<(usize, Member)> {
    let lower = query.trim().to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }
    store
        .load_all()
        .into_iter()
        .enumerate()
        .filter(|(_, m)| m.full_name().to_lowercase().contains(&lower))
        .collect()
}
