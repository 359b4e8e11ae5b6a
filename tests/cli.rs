use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture_root(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    let pid = std::process::id();
    path.push(format!("apathy-theme-cli-{label}-{pid}-{nanos}"));
    path
}

fn with_temp_root<F: FnOnce(&Path)>(label: &str, f: F) {
    let root = fixture_root(label);
    fs::create_dir_all(&root).unwrap();
    f(&root);
    let _ = fs::remove_dir_all(&root);
}

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_apathy-theme"))
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should launch")
}

#[test]
fn writes_default_theme_and_confirms_on_stdout() {
    with_temp_root("ok", |root| {
        fs::create_dir_all(root.join("themes")).unwrap();

        let output = run_in(root);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Wrote default theme");

        let written = fs::read_to_string(root.join("themes/default.yaml")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["name"], "Apathy (Experimental)");
        assert_eq!(value["type"], "dark");
        assert_eq!(value["colors"]["editor.background"], "#0A0A0A");
        assert_eq!(value["tokenColors"][0]["settings"]["fontStyle"], "italic");
    });
}

#[test]
fn repeated_runs_produce_identical_bytes() {
    with_temp_root("repeat", |root| {
        fs::create_dir_all(root.join("themes")).unwrap();

        assert!(run_in(root).status.success());
        let first = fs::read(root.join("themes/default.yaml")).unwrap();
        assert!(run_in(root).status.success());
        let second = fs::read(root.join("themes/default.yaml")).unwrap();

        assert_eq!(first, second);
    });
}

#[test]
fn missing_themes_directory_fails_with_stderr_message() {
    with_temp_root("missing", |root| {
        let output = run_in(root);

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("failed to write default theme"));
        assert!(!root.join("themes").exists());
    });
}

#[test]
fn unwritable_target_leaves_existing_content_untouched() {
    with_temp_root("blocked", |root| {
        let target = root.join("themes/default.yaml");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("keep.txt"), "untouched").unwrap();

        let output = run_in(root);

        assert!(!output.status.success());
        assert!(!output.stderr.is_empty());
        assert!(target.is_dir());
        assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "untouched");
    });
}

#[test]
fn config_file_redirects_output() {
    with_temp_root("config", |root| {
        let config_dir = root.join("config/apathy-theme");
        fs::create_dir_all(&config_dir).unwrap();
        let target = root.join("custom.json");
        let config = serde_json::json!({ "output_path": target });
        fs::write(config_dir.join("config.json"), config.to_string()).unwrap();

        let output = run_in(root);
        assert!(output.status.success());

        let written = apathy_theme::read_theme(&target).unwrap();
        assert_eq!(written.name, "Apathy (Experimental)");
        assert!(!root.join("themes").exists());
    });
}
