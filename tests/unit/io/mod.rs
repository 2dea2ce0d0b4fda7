pub mod configuration;
pub mod export;
