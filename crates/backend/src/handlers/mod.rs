pub mod diagnostics;
pub mod error_report;
