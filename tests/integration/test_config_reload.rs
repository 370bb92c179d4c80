//! Integration Tests for Configuration Loading
//!
//! These tests cover the layered alias files, `reload`, persistence failures
//! and first-run bootstrap through `cll::init`.

use cll::{ConfigPaths, Console, FixedConfigPaths, Mode};
use std::fs;
use tempfile::TempDir;

fn paths_in(dir: &TempDir) -> FixedConfigPaths {
    FixedConfigPaths::new(dir.path().join("cll"), dir.path().join("shared"))
}

fn write_aliases(paths: &FixedConfigPaths, shared: &str, local: &str) {
    fs::create_dir_all(paths.config_dir()).unwrap();
    fs::create_dir_all(paths.shared_dir()).unwrap();
    fs::write(paths.shared_aliases(), shared).unwrap();
    fs::write(paths.local_aliases(), local).unwrap();
}

#[test]
fn test_local_aliases_override_shared() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    write_aliases(&paths, "# shared\nll=ls -l\ngs=git status\n", "ll=ls -la\n");

    let console = Console::builder().config_paths(paths).build().unwrap();
    assert_eq!(console.aliases().get("ll"), Some("ls -la"));
    assert_eq!(console.aliases().get("gs"), Some("git status"));
    assert_eq!(console.expand_alias("ll /tmp"), "ls -la /tmp");
}

#[test]
fn test_missing_files_give_empty_table() {
    let dir = TempDir::new().unwrap();
    let console = Console::builder().config_paths(paths_in(&dir)).build().unwrap();
    assert!(console.aliases().is_empty());
}

#[test]
fn test_reload_picks_up_edits() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    write_aliases(&paths, "", "old=echo old\n");

    let mut console = Console::builder().config_paths(paths.clone()).build().unwrap();
    assert_eq!(console.aliases().get("old"), Some("echo old"));

    fs::write(paths.local_aliases(), "new=echo new\n").unwrap();
    let result = console.execute("reload");

    assert!(result.success);
    assert_eq!(
        result.output,
        format!("Configuration reloaded from {}", paths.config_dir().display())
    );
    assert_eq!(console.aliases().get("new"), Some("echo new"));
    assert_eq!(console.aliases().get("old"), None);
}

#[test]
fn test_reload_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    let mut console = Console::builder().config_paths(paths.clone()).build().unwrap();

    // A directory where the alias file should be cannot be read
    fs::create_dir_all(paths.local_aliases()).unwrap();
    let result = console.execute("reload");

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.error.contains("Failed to load config"));
}

#[test]
fn test_alias_save_failure_is_an_execution_error() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    let mut console = Console::builder().config_paths(paths.clone()).build().unwrap();

    fs::create_dir_all(paths.local_aliases()).unwrap();
    let result = console.execute("config alias x=y");

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.error.contains("Failed to save config"));
    // The unsaved alias is not applied
    assert_eq!(console.aliases().get("x"), None);
    assert_eq!(console.expand_alias("x a"), "x a");
    // The console keeps accepting input
    assert!(console.execute("help").success);
}

#[test]
fn test_failed_save_keeps_previous_value() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    write_aliases(&paths, "", "g=git\n");
    let mut console = Console::builder().config_paths(paths.clone()).build().unwrap();

    fs::remove_file(paths.local_aliases()).unwrap();
    fs::create_dir_all(paths.local_aliases()).unwrap();
    assert!(!console.execute("config alias g=grep").success);

    assert_eq!(console.aliases().get("g"), Some("git"));
}

#[test]
fn test_non_utf8_shared_aliases_still_load() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    fs::create_dir_all(paths.shared_dir()).unwrap();
    fs::write(paths.shared_aliases(), b"# caf\xe9 aliases\ng=git\n").unwrap();

    let console = Console::builder().config_paths(paths.clone()).build().unwrap();
    assert_eq!(console.aliases().get("g"), Some("git"));

    let (console, _) = cll::init(paths).unwrap();
    assert_eq!(console.expand_alias("g status"), "git status");
}

#[test]
fn test_unreadable_shared_aliases_do_not_block_startup() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    fs::create_dir_all(paths.shared_aliases()).unwrap();

    let (mut console, _) = cll::init(paths).unwrap();
    assert_eq!(console.aliases().get("ll"), Some("ls -la"));
    assert!(console.execute("reload").success);
}

#[test]
fn test_init_bootstraps_directory() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);

    let (console, config) = cll::init(paths.clone()).unwrap();

    assert!(paths.config_file().is_file());
    assert!(paths.local_aliases().is_file());
    assert_eq!(console.mode(), Mode::Shell);
    assert_eq!(console.aliases().get("ll"), Some("ls -la"));
    assert_eq!(console.aliases().get("q"), Some("quit"));
    assert_eq!(config.history_size, 1000);
}

#[test]
fn test_init_respects_existing_settings() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    fs::create_dir_all(paths.config_dir()).unwrap();
    fs::write(
        paths.config_file(),
        r#"{ "default_mode": "javascript", "show_execution_time": false }"#,
    )
    .unwrap();

    let (console, config) = cll::init(paths.clone()).unwrap();

    assert_eq!(console.mode(), Mode::JavaScript);
    assert!(!config.show_execution_time);
    // The directory existed, so no default aliases were written
    assert!(!paths.local_aliases().exists());
    assert!(console.aliases().is_empty());
}

#[test]
fn test_init_falls_back_on_invalid_settings() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    fs::create_dir_all(paths.config_dir()).unwrap();
    fs::write(paths.config_file(), r#"{ "history_size": 0 }"#).unwrap();

    let (_console, config) = cll::init(paths).unwrap();
    assert_eq!(config, cll::ConsoleConfig::default());
}
