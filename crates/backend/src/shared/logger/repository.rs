use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use contracts::shared::logger::LogEntry;

#[derive(Debug, Default)]
struct LogState {
    last_id: i64,
    entries: Vec<LogEntry>,
}

/// Process-wide diagnostic log.
///
/// Append-only until explicitly cleared. Clones share the same store, so the
/// handle is passed to whoever needs to report (handlers, probes, fault hooks).
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    inner: Arc<Mutex<LogState>>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, LogState> {
        // A poisoned lock still holds a consistent Vec; keep logging
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Добавить запись в лог, возвращает её id
    pub fn log_event(&self, source: &str, category: &str, message: impl Into<String>) -> i64 {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        let message = message.into();

        let mut state = self.state();
        state.last_id += 1;
        let id = state.last_id;
        state.entries.push(LogEntry {
            id,
            timestamp,
            source: source.to_string(),
            category: category.to_string(),
            message,
        });
        id
    }

    /// Получить все записи лога (новые сверху)
    pub fn get_all_logs(&self) -> Vec<LogEntry> {
        let state = self.state();
        state.entries.iter().rev().cloned().collect()
    }

    /// Очистить все записи лога
    pub fn clear_all_logs(&self) {
        self.state().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
