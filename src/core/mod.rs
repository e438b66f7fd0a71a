pub mod aggregator;
pub mod attendance;
pub mod classifier;
pub mod config;
pub mod grid;
pub mod log;
pub mod range;
pub mod student;
