pub mod config;
pub mod projection;
pub mod report;
pub mod tiers;
pub mod types;
