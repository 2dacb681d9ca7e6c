pub mod member_ops;
pub mod points_ops;
