pub mod diagnostics;
pub mod logger;
