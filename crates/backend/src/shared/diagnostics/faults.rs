//! Global fault handling
//!
//! `install` hooks process panics into the diagnostic log, `uninstall`
//! restores the default hook. Both are idempotent. The hook only records;
//! it never panics again and leaves recovery to the caller (tokio turns a
//! panicking task into a `JoinError`, axum keeps serving).

use std::any::Any;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use tokio::task::JoinHandle;

use crate::shared::logger::{DiagnosticLog, CATEGORY_RUNTIME_PANIC, CATEGORY_TASK_FAILURE};

static HOOK_LOG: Lazy<Mutex<Option<DiagnosticLog>>> = Lazy::new(|| Mutex::new(None));

/// Returns false if a hook was already installed
pub fn install(log: &DiagnosticLog) -> bool {
    let mut slot = HOOK_LOG.lock().unwrap_or_else(PoisonError::into_inner);
    if slot.is_some() {
        return false;
    }
    *slot = Some(log.clone());
    drop(slot);

    std::panic::set_hook(Box::new(|info| {
        let message = panic_message(info.payload());
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        tracing::error!(%location, "Admin runtime panic: {}", message);

        if let Some(log) = current_log() {
            log.server(
                CATEGORY_RUNTIME_PANIC,
                format!("Admin runtime panic: {message} ({location})"),
            );
        }
    }));

    tracing::info!("Global fault handler installed");
    true
}

/// Returns false if nothing was installed
pub fn uninstall() -> bool {
    let mut slot = HOOK_LOG.lock().unwrap_or_else(PoisonError::into_inner);
    if slot.take().is_none() {
        return false;
    }
    drop(slot);

    let _ = std::panic::take_hook();
    tracing::info!("Global fault handler removed");
    true
}

pub fn is_installed() -> bool {
    HOOK_LOG
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

fn current_log() -> Option<DiagnosticLog> {
    HOOK_LOG
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown error".to_string()
    }
}

/// Spawn a background task whose panic or cancellation is recorded
/// instead of being silently dropped with the `JoinHandle`.
pub fn spawn_supervised<F>(log: DiagnosticLog, name: &'static str, task: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let handle = tokio::spawn(task);

    tokio::spawn(async move {
        if let Err(e) = handle.await {
            let reason = if e.is_panic() {
                panic_message(&*e.into_panic())
            } else {
                "cancelled".to_string()
            };
            tracing::error!(task = name, "background task failed: {}", reason);
            log.server(
                CATEGORY_TASK_FAILURE,
                format!("Admin unhandled task failure: {name}: {reason}"),
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_payloads() {
        let text: Box<dyn Any + Send> = Box::new("static text");
        assert_eq!(panic_message(&*text), "static text");

        let owned: Box<dyn Any + Send> = Box::new(String::from("owned text"));
        assert_eq!(panic_message(&*owned), "owned text");

        let other: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(&*other), "Unknown error");
    }

    // Only test in this binary that touches the process-wide hook
    #[test]
    fn test_install_is_idempotent_and_records_panics() {
        let log = DiagnosticLog::new();

        assert!(install(&log));
        assert!(!install(&DiagnosticLog::new()));
        assert!(is_installed());

        let result = std::panic::catch_unwind(|| panic!("fault hook probe"));
        assert!(result.is_err());

        assert!(log
            .get_all_logs()
            .iter()
            .any(|e| e.category == CATEGORY_RUNTIME_PANIC
                && e.message.starts_with("Admin runtime panic: fault hook probe")));

        assert!(uninstall());
        assert!(!uninstall());
        assert!(!is_installed());
    }

    #[tokio::test]
    async fn test_supervised_task_panic_is_recorded() {
        let log = DiagnosticLog::new();
        let watcher = spawn_supervised(log.clone(), "exploding-task", async {
            panic!("task blew up");
        });
        watcher.await.unwrap();

        let entries = log.get_all_logs();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, CATEGORY_TASK_FAILURE);
        assert_eq!(
            entries[0].message,
            "Admin unhandled task failure: exploding-task: task blew up"
        );
    }

    #[tokio::test]
    async fn test_supervised_task_success_is_silent() {
        let log = DiagnosticLog::new();
        spawn_supervised(log.clone(), "quiet-task", async {}).await.unwrap();
        assert!(log.is_empty());
    }
}
