//! CLI integration tests for conciergectl.
//!
//! Each test points CONCIERGE_CONFIG at a temporary file so the user's own
//! configuration never leaks in.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn write_config(dir: &Path, extra: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    let contents = format!(
        "[chat]\nreply_delay_ms = 0\n{}\n[output]\ncolor = \"never\"\n",
        extra
    );
    fs::write(&path, contents).unwrap();
    path
}

fn run(config: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_conciergectl"))
        .args(args)
        .env("CONCIERGE_CONFIG", config)
        .env_remove("CONCIERGE_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn conciergectl");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(text) = stdin {
            pipe.write_all(text.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

#[test]
fn test_ask_booking() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");

    let output = run(&config, &["ask", "Can", "I", "book", "a", "table", "for", "Friday?"], None);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Book Now →"));
    assert!(stdout.contains("https://web.dojo.app/create_booking/"));
    assert!(stdout.contains("020 8691 0263"));
    assert!(!stdout.contains("<strong>"));
}

#[test]
fn test_ask_raw_keeps_markup() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");

    let output = run(&config, &["--raw", "ask", "opening hours"], None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<strong>Opening Hours:</strong><br>Monday: Closed<br>"));
}

#[test]
fn test_ask_unknown_gets_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");

    let output = run(&config, &["ask", "qwxz"], None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("I'm not sure about that"));
}

#[test]
fn test_knowledge_override_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let kb = dir.path().join("kb.toml");
    fs::write(&kb, "[restaurant]\nname = \"Quay Kitchen\"\nphone = \"555 0199\"\n").unwrap();
    let config = write_config(dir.path(), &format!("knowledge_path = {:?}", kb.display().to_string()));

    let output = run(&config, &["ask", "call you"], None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("555 0199"));
}

#[test]
fn test_bad_knowledge_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");

    let output = run(&config, &["--knowledge", "/nonexistent/kb.toml", "ask", "menu"], None);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load knowledge base"));
}

#[test]
fn test_chat_session_over_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");

    let output = run(&config, &["chat"], Some("<script>hi</script>\nwifi?\n/quit\n"));
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to Monika Restaurant"));
    assert!(stdout.contains("How can I help you today?"));
    assert!(stdout.contains("Wi-Fi availability"));
}

#[test]
fn test_intents_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");

    let output = run(&config, &["intents", "--json"], None);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 22);
    assert_eq!(value[21]["kind"], "wifi");
}

#[test]
fn test_config_shows_source() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "");

    let output = run(&config, &["config"], None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# source: "));
    assert!(stdout.contains("reply_delay_ms = 0"));
}
