pub mod attendance;
pub mod notice;
