//! Logger builder integration tests.
//!
//! Each test uses a standalone registry pointed at a temp directory so tests
//! stay hermetic and can run in parallel.

use std::path::{Path, PathBuf};

use logkit::{ConsoleOptions, FileOptions, HandlerKind, Level, LoggerRegistry, Settings};

fn registry_at(dir: &Path) -> LoggerRegistry {
    LoggerRegistry::with_settings(Settings {
        output_dir: dir.to_path_buf(),
        root_dir: PathBuf::from("."),
        ..Settings::default()
    })
}

#[test]
fn repeated_build_attaches_each_handler_kind_once() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = registry_at(tmp.path());

    for _ in 0..2 {
        registry
            .builder("dup")
            .file(FileOptions::default())
            .build();
    }

    let logger = registry.get_or_create("dup");
    assert_eq!(logger.managed_handler_count(HandlerKind::Console), 1);
    assert_eq!(logger.managed_handler_count(HandlerKind::File), 1);
    assert_eq!(logger.handler_count(), 2);
}

#[test]
fn loggers_with_distinct_names_are_isolated() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = registry_at(tmp.path());

    let a = registry.builder("a").file(FileOptions::default()).build();
    let b = registry.builder("b").build();

    assert_eq!(a.managed_handler_count(HandlerKind::File), 1);
    assert_eq!(b.managed_handler_count(HandlerKind::File), 0);
    assert_eq!(b.managed_handler_count(HandlerKind::Console), 1);
}

#[test]
fn default_build_is_console_only_at_debug() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = registry_at(tmp.path());

    let logger = registry.builder("c").build();

    assert_eq!(logger.level(), Level::Debug);
    assert_eq!(logger.managed_handler_count(HandlerKind::Console), 1);
    assert_eq!(logger.managed_handler_count(HandlerKind::File), 0);
}

#[test]
fn output_dir_is_created_lazily() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("logs");
    let registry = registry_at(&out);

    registry.builder("console-only").build();
    assert!(!out.exists());

    registry
        .builder("with-file")
        .file(FileOptions::default())
        .build();
    assert!(out.exists());
}

#[test]
fn file_path_derives_from_logger_name() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = registry_at(tmp.path());

    registry.builder("svc").file(FileOptions::default()).build();

    assert!(tmp.path().join("svc.log").exists());
}

#[test]
fn explicit_file_name_overrides_logger_name() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = registry_at(tmp.path());

    registry
        .builder("svc")
        .file(FileOptions {
            file_name: Some("custom".to_string()),
            ..FileOptions::default()
        })
        .build();

    assert!(tmp.path().join("custom.log").exists());
    assert!(!tmp.path().join("svc.log").exists());
}

#[test]
fn uncreatable_output_dir_degrades_to_console_only() {
    let tmp = tempfile::tempdir().unwrap();
    // A regular file where a directory component is needed makes
    // create_dir_all fail on every platform.
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let registry = registry_at(&blocker.join("logs"));

    let logger = registry.builder("x").file(FileOptions::default()).build();

    assert_eq!(logger.managed_handler_count(HandlerKind::Console), 1);
    assert_eq!(logger.managed_handler_count(HandlerKind::File), 0);
}

#[test]
fn info_record_matches_line_format() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = registry_at(tmp.path());

    let logger = registry
        .builder("fmt")
        .file(FileOptions::default())
        .build();
    logger.info("hello");

    let content = std::fs::read_to_string(tmp.path().join("fmt.log")).unwrap();
    let pattern =
        regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} \| \(fmt\) \[INFO\] hello$")
            .unwrap();
    assert!(
        pattern.is_match(content.trim_end()),
        "unexpected log line: {content:?}"
    );
}

#[test]
fn logger_minimum_level_filters_file_output() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = registry_at(tmp.path());

    let logger = registry
        .builder("filtered")
        .level(Level::Warning)
        .file(FileOptions::default())
        .build();
    logger.info("quiet");
    logger.error("loud");

    let content = std::fs::read_to_string(tmp.path().join("filtered.log")).unwrap();
    assert!(!content.contains("quiet"));
    assert!(content.contains("loud"));
}

#[test]
fn disabling_unique_stacks_console_handlers() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = registry_at(tmp.path());

    let options = ConsoleOptions {
        unique: false,
        ..ConsoleOptions::default()
    };
    registry.builder("stacked").console(options.clone()).build();
    registry.builder("stacked").console(options).build();

    let logger = registry.get_or_create("stacked");
    assert_eq!(logger.managed_handler_count(HandlerKind::Console), 2);
}

#[test]
fn build_returns_shared_handle() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = registry_at(tmp.path());

    let first = registry.builder("shared").build();
    let second = registry.builder("shared").build();

    assert!(std::sync::Arc::ptr_eq(&first, &second));
}
