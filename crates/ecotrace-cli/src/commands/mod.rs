pub mod config;
pub mod questions;
pub mod score;
pub mod wizard;
