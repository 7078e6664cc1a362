pub mod config;
pub mod ruler;
