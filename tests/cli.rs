//! The `iframed` binary against a configuration file.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const CONFIG: &str = r#"
default_base = "http://parentdomain.com"

[[mappings]]
internal = "/appname/viewname"
external = "/refererpath"
"#;

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("iframed-cli-{}-{}.toml", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path
}

fn run(config: &PathBuf, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iframed"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_resolve_prints_internal_path() {
    let path = write_config("resolve", CONFIG);
    let output = run(
        &path,
        &["resolve", "--referer", "http://www.referer.com/refererpath/?id=/a/b"],
    );
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "/appname/viewname/a/b");
}

#[test]
fn test_rewrite_json_output() {
    let path = write_config("rewrite", CONFIG);
    let output = run(&path, &["--json", "rewrite", "/appname/viewname/x", "--default-base"]);
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["outcome"], "default_base");
    assert_eq!(result["url"], "http://parentdomain.com/refererpath?id=/x");
}

#[test]
fn test_invalid_config_fails() {
    let path = write_config("invalid", "default_base = \"http://parentdomain.com/\"\n");
    let output = run(&path, &["check"]);
    fs::remove_file(&path).unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
