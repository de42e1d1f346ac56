pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod state;
