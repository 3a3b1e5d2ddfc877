pub mod attribute;
pub mod config;
pub mod stage;
