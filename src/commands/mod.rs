pub mod config;
pub mod manage;
