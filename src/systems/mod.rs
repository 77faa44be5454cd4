// src/systems/mod.rs
//! 盤面に対して走らせるシステムたち！

pub mod blocked_status_system;
pub mod deal_system;
pub mod win_condition_system;

pub use blocked_status_system::BlockedStatusSystem;
pub use deal_system::DealPyramidSystem;
pub use win_condition_system::WinConditionSystem;
