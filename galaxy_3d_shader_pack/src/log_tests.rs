//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the global logger.

use crate::log::{self, Logger, LogEntry, LogSeverity, DefaultLogger};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "galaxy3d::ShaderPack".to_string(),
        message: format!("{:?} message", severity),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_with_file_line() {
    let e = entry(LogSeverity::Error, Some("shader_pack.rs"), Some(42));

    assert_eq!(e.severity, LogSeverity::Error);
    assert_eq!(e.source, "galaxy3d::ShaderPack");
    assert_eq!(e.file, Some("shader_pack.rs"));
    assert_eq!(e.line, Some(42));
}

#[test]
fn test_log_entry_clone() {
    let e1 = entry(LogSeverity::Warn, Some("test.rs"), Some(10));
    let e2 = e1.clone();

    assert_eq!(e1.severity, e2.severity);
    assert_eq!(e1.source, e2.source);
    assert_eq!(e1.message, e2.message);
    assert_eq!(e1.file, e2.file);
    assert_eq!(e1.line, e2.line);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Both output branches must not panic
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("test.rs"), Some(7)));
    }
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        // Other unit tests may log concurrently; keep only this module's source
        if entry.source == "galaxy3d::test" {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

#[test]
#[serial]
fn test_macros_route_to_global_logger() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CaptureLogger { entries: entries.clone() });

    crate::pack_debug!("galaxy3d::test", "loaded {} shaders", 3);
    crate::pack_warn!("galaxy3d::test", "legacy version {}", 2);
    crate::pack_error!("galaxy3d::test", "bad stream");

    log::reset_logger();

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 3);
    assert_eq!(captured[0].severity, LogSeverity::Debug);
    assert_eq!(captured[0].message, "loaded 3 shaders");
    assert!(captured[0].file.is_none());
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert_eq!(captured[1].message, "legacy version 2");
    assert_eq!(captured[2].severity, LogSeverity::Error);
    assert!(captured[2].file.is_some());
    assert!(captured[2].line.is_some());
}

#[test]
#[serial]
fn test_reset_logger_detaches_custom_logger() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CaptureLogger { entries: entries.clone() });

    log::log(LogSeverity::Info, "galaxy3d::test", "first".to_string());
    log::reset_logger();
    log::log(LogSeverity::Info, "galaxy3d::test", "second".to_string());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "first");
}
