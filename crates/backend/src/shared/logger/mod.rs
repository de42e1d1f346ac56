pub mod repository;

pub use repository::DiagnosticLog;

use contracts::system::routes::IssueKind;

pub const SOURCE_SERVER: &str = "server";
pub const SOURCE_CLIENT: &str = "client";

pub const CATEGORY_RUNTIME_PANIC: &str = "runtime_panic";
pub const CATEGORY_TASK_FAILURE: &str = "task_failure";
pub const CATEGORY_RESOURCE_LOAD: &str = "resource_load";
pub const CATEGORY_ERROR_BOUNDARY: &str = "error_boundary";

pub fn probe_category() -> &'static str {
    IssueKind::ProbeUnreachable.as_str()
}

impl DiagnosticLog {
    /// Логирование события на сервере
    ///
    /// # Примеры
    /// ```ignore
    /// log.server(CATEGORY_RESOURCE_LOAD, "Admin resource loading error: /logo.png");
    /// ```
    pub fn server(&self, category: &str, message: impl Into<String>) -> i64 {
        self.log_event(SOURCE_SERVER, category, message)
    }

    /// Событие, пришедшее из браузера (error boundary)
    pub fn client(&self, category: &str, message: impl Into<String>) -> i64 {
        self.log_event(SOURCE_CLIENT, category, message)
    }
}
