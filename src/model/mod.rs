pub mod ids;
pub mod member;
pub mod history;

// Re-exports for convenience
pub use ids::Id;
pub use member::{Member, MemberUpdate, NewMember};
pub use history::HistoryEntry;
