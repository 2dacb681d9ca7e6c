pub mod member_queries;
pub mod stats_queries;
