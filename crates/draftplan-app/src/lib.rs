// Auction draft scenario planner: config, data providers, planning and output.

pub mod config;
pub mod draft_state;
pub mod planner;
pub mod pool;
pub mod report;
pub mod source;
