//! Integration tests for the console logger
//!
//! These tests verify:
//! - Saving the buffer to files (overwrite and append)
//! - IO error propagation from save
//! - Deferred error output end to end
//! - Callback mirroring into a file

use rust_console_log::appenders::{FileTarget, MemoryConsole};
use rust_console_log::core::timestamp::FixedClock;
use rust_console_log::{LogLevel, Logger, LoggerConfig, LoggerError, SaveMode, SaveTarget, LINE_ENDING};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn buffered_logger() -> (Logger, MemoryConsole) {
    let console = MemoryConsole::new();
    let logger = Logger::builder()
        .config(LoggerConfig::buffered())
        .console(console.clone())
        .clock(FixedClock::utc(2024, 10, 17, 8, 0, 0).expect("valid datetime"))
        .build();
    (logger, console)
}

#[test]
fn test_save_overwrite_matches_buffer() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("run.log");
    fs::write(&log_file, "stale content from a previous run\n").expect("seed");

    let (mut logger, _console) = buffered_logger();
    logger.text("starting");
    logger.warning("slow response");

    let written = logger.save(&log_file, false).expect("Failed to save");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, logger.get());
    assert_eq!(written, content.len());
    assert_eq!(
        content,
        format!(
            "[17-10-2024 08:00:00] starting{n}[17-10-2024 08:00:00] [WARNING] slow response{n}",
            n = LINE_ENDING
        )
    );
}

#[test]
fn test_save_append_concatenates_snapshots() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("run.log");

    let (mut logger, _console) = buffered_logger();
    logger.text("first batch");
    let first = logger.get().to_string();
    logger.save(&log_file, false).expect("first save");

    logger.clear();
    logger.error("second batch");
    let second = logger.get().to_string();
    logger.save(&log_file, true).expect("second save");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, format!("{}{}", first, second));
}

#[test]
fn test_save_empty_buffer_creates_empty_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("empty.log");

    let (logger, _console) = buffered_logger();
    assert_eq!(logger.save(&log_file, false).expect("save"), 0);
    assert_eq!(fs::read_to_string(&log_file).expect("read"), "");
}

#[test]
fn test_save_propagates_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // A directory cannot be opened as a file for writing
    let target = temp_dir.path().to_path_buf();

    let (mut logger, _console) = buffered_logger();
    logger.text("unsaved");

    let err = logger.save(&target, false).expect_err("saving to a directory must fail");
    assert!(matches!(err, LoggerError::IoOperation { .. }));
    assert!(err.io_source().is_some());
}

#[test]
fn test_deferred_output_released_by_error() {
    let console = MemoryConsole::new();
    let mut logger = Logger::builder()
        .config(
            LoggerConfig::new()
                .with_use_timestamps(false)
                .with_output_only_if_error(true),
        )
        .console(console.clone())
        .build();

    for i in 0..5 {
        logger.text(format!("step {}", i));
    }
    assert_eq!(console.contents(), "");

    logger.error("step 5 failed");
    let out = console.take();
    let mut last = 0;
    for i in 0..5 {
        let at = out.find(&format!("step {}", i)).expect("deferred line printed");
        assert!(at >= last);
        last = at;
    }
    assert!(out.find("step 5 failed").expect("error printed") > last);

    logger.text("step 6");
    assert!(console.contents().contains("step 6"));
}

#[test]
fn test_callback_mirrors_buffer_into_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mirror_path = temp_dir.path().join("mirror.log");
    let target = FileTarget::new(&mirror_path);

    let (mut logger, _console) = buffered_logger();
    logger.set_log_callback(move |text| {
        let mut target = target.clone();
        if let Err(e) = target.persist(text.as_bytes(), SaveMode::Append) {
            panic!("mirror write failed: {}", e);
        }
    });

    logger.text("one");
    logger.write(LogLevel::Success, "two", LINE_ENDING);

    let mirrored = fs::read_to_string(&mirror_path).expect("read mirror");
    assert_eq!(mirrored, logger.get());
}

#[test]
fn test_builder_callback_sees_only_appended_text() {
    let seen = Arc::new(parking_lot::Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&seen);

    let mut logger = Logger::builder()
        .config(LoggerConfig::buffered().with_use_timestamps(false))
        .console(MemoryConsole::new())
        .log_callback(Arc::new(move |text: &str| sink.lock().push(text.to_string())))
        .build();

    logger.text("a");
    logger.text("b");

    let seen = seen.lock();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1], format!("b{}", LINE_ENDING));
    assert_eq!(logger.get(), seen.concat());
}
