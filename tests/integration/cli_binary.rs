//! End-to-end tests that run the `music-cli` binary.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn run(config: &std::path::Path, args: &[&str]) -> std::process::Output {
    run_with_env(config, args, &[])
}

fn run_with_env(
    config: &std::path::Path,
    args: &[&str],
    env: &[(&str, &str)],
) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_music-cli"))
        .env_remove("MUSIC_CLI_LOG")
        .env_remove("MUSIC_CLI_LOG_FORMAT")
        .env_remove("MUSIC_CLI_LOG_OUTPUT")
        .envs(env.iter().copied())
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .unwrap()
}

fn empty_config(temp_dir: &TempDir) -> std::path::PathBuf {
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[logging]\ncolor = false\n").unwrap();
    path
}

#[test]
fn test_context_show_json() {
    let temp_dir = TempDir::new().unwrap();
    let config = empty_config(&temp_dir);

    let output = run(
        &config,
        &[
            "context",
            "show",
            "--at",
            "2024-01-06 22:15",
            "--mood",
            "chill",
            "--format",
            "json",
        ],
    );
    assert!(
        output.status.success(),
        "context show should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["temporal"]["timestamp"], "2024-01-06T22:15:00");
    assert_eq!(value["temporal"]["day_kind"], "weekend");
    assert_eq!(value["temporal"]["time_of_day"], "night");
    assert_eq!(value["mood"]["mood"], "relaxed");
}

#[test]
fn test_context_show_text_without_color() {
    let temp_dir = TempDir::new().unwrap();
    let config = empty_config(&temp_dir);

    let output = run(&config, &["context", "show", "--at", "2024-10-15T08:30:00"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Listening context\n"));
    assert!(stdout.contains("  Period:  morning"));
    assert!(stdout.contains("  Season:  autumn"));
}

#[test]
fn test_unknown_mood_exits_nonzero_with_hint() {
    let temp_dir = TempDir::new().unwrap();
    let config = empty_config(&temp_dir);

    let output = run(&config, &["--quiet", "context", "show", "--mood", "grumpy"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown mood: 'grumpy'"));
    assert!(stderr.contains("music-cli moods"));
}

#[test]
fn test_moods_json_lists_vocabulary() {
    let temp_dir = TempDir::new().unwrap();
    let config = empty_config(&temp_dir);

    let output = run(&config, &["moods", "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 8);
}

#[test]
fn test_file_logging_writes_startup_message() {
    let temp_dir = TempDir::new().unwrap();
    let config = empty_config(&temp_dir);
    let log_file = temp_dir.path().join("logs").join("music-cli.log");

    let output = run(
        &config,
        &[
            "--log-level",
            "info",
            "--log-output",
            "file",
            "--log-file",
            log_file.to_str().unwrap(),
            "moods",
        ],
    );
    assert!(output.status.success());
    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("music-cli starting"));
}

#[test]
fn test_config_init_creates_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("fresh").join("config.toml");

    let output = run(&config, &["--quiet", "config", "init"]);
    assert!(
        output.status.success(),
        "config init should create a missing file: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config.exists());

    let output = run(&config, &["--quiet", "context", "show", "--format", "json"]);
    assert!(output.status.success());
}

#[test]
fn test_config_init_force_repairs_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[context]\ndefault_mood = \"grumpy\"\n").unwrap();

    let output = run(&config, &["--quiet", "context", "show"]);
    assert!(!output.status.success(), "invalid config should be rejected");

    let output = run(&config, &["--quiet", "config", "init"]);
    assert!(!output.status.success(), "existing file needs --force");

    let output = run(&config, &["--quiet", "config", "init", "--force"]);
    assert!(
        output.status.success(),
        "config init --force should overwrite an invalid file: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = run(&config, &["--quiet", "context", "show"]);
    assert!(output.status.success());
}

#[test]
fn test_environment_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(
        &config,
        "[context]\nhemisphere = \"north\"\ndefault_mood = \"sad\"\n",
    )
    .unwrap();

    let output = run_with_env(
        &config,
        &[
            "--quiet",
            "context",
            "show",
            "--at",
            "2024-12-24 22:00",
            "--format",
            "json",
        ],
        &[
            ("MUSIC_CLI_CONTEXT__HEMISPHERE", "south"),
            ("MUSIC_CLI_CONTEXT__PERIODS__NIGHT", "23"),
            ("MUSIC_CLI_CONTEXT__DEFAULT_MOOD", "chill"),
        ],
    );
    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["temporal"]["time_of_day"], "evening");
    assert_eq!(value["temporal"]["season"], "summer");
    assert_eq!(value["mood"]["mood"], "relaxed");
}

#[test]
fn test_log_environment_overrides_flags_and_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(
        &config,
        "[logging]\nlevel = \"error\"\nformat = \"text\"\noutput = \"stderr\"\ncolor = false\n",
    )
    .unwrap();

    let output = run_with_env(
        &config,
        &["--log-output", "stderr", "--log-format", "text", "moods"],
        &[
            ("MUSIC_CLI_LOG", "info"),
            ("MUSIC_CLI_LOG_OUTPUT", "stdout"),
            ("MUSIC_CLI_LOG_FORMAT", "json"),
        ],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let startup = stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|event| event["fields"]["message"] == "music-cli starting");
    assert!(
        startup.is_some(),
        "expected a JSON startup event on stdout; got: {}",
        stdout
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("music-cli starting"));
}
