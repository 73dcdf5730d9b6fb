pub mod cli;
pub mod client;
pub mod config;
pub mod poker;
pub mod pretty;
pub mod strategy;
