//! End-to-end tests for the `bundleplan` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bundleplan(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bundleplan").unwrap();
    cmd.current_dir(root)
        .env_remove("NODE_ENV")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    for (key, _) in std::env::vars() {
        if key.starts_with("BUNDLEPLAN_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

fn resolve_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "resolve failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn resolve_prod_flag_selects_production() {
    let temp = TempDir::new().unwrap();

    bundleplan(temp.path())
        .args(["resolve", "--env", "NODE_ENV=prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"production\""))
        .stdout(predicate::str::contains("hidden-source-map"))
        .stdout(predicate::str::contains("UglifyJsPlugin"));
}

#[test]
fn resolve_defaults_to_development() {
    let temp = TempDir::new().unwrap();

    let plan = resolve_json(bundleplan(temp.path()).arg("resolve"));
    assert_eq!(plan["mode"], "development");
    assert_eq!(plan["devtool"], "eval");
    assert_eq!(plan["stats"], "minimal");
    assert_eq!(plan["plugins"][0]["definitions"]["__ENV__"], "undefined");
}

#[test]
fn resolve_other_node_env_values_are_development() {
    let temp = TempDir::new().unwrap();

    let plan = resolve_json(
        bundleplan(temp.path()).args(["resolve", "--compact", "--env", "NODE_ENV=staging"]),
    );
    assert_eq!(plan["mode"], "development");
    assert_eq!(plan["plugins"][0]["definitions"]["__ENV__"], "\"staging\"");
}

#[test]
fn resolve_reads_process_node_env() {
    let temp = TempDir::new().unwrap();

    let plan = resolve_json(bundleplan(temp.path()).env("NODE_ENV", "prod").arg("resolve"));
    assert_eq!(plan["mode"], "production");
    assert_eq!(plan["stats"], "none");
}

#[test]
fn resolve_flag_overrides_process_node_env() {
    let temp = TempDir::new().unwrap();

    let plan = resolve_json(
        bundleplan(temp.path())
            .env("NODE_ENV", "prod")
            .args(["resolve", "--env", "NODE_ENV=development"]),
    );
    assert_eq!(plan["mode"], "development");
}

fn banner(root: &Path, node_env: &str) -> String {
    let root = root.canonicalize().unwrap();
    format!(
        "Webpack build -\n    - ENV: {node_env}\n    - outputPath  {}\n    - includePath {}\n    - nodeModulesPath: {}\n",
        root.join("build/js").display(),
        root.join("src").display(),
        root.join("node_modules").display(),
    )
}

#[test]
fn resolve_prints_banner_verbatim_on_stderr() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap();

    let output = bundleplan(&root)
        .args(["resolve", "--compact", "-e", "NODE_ENV=prod"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr, banner(&root, "prod"));
    assert!(!String::from_utf8(output.stdout).unwrap().contains("ENV: prod"));
}

#[test]
fn quiet_keeps_banner_but_hides_status_lines() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().canonicalize().unwrap();

    let output = bundleplan(&root)
        .args(["-q", "check", "-e", "NODE_ENV=prod"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr, banner(&root, "prod"));
}

#[test]
fn no_banner_silences_resolution_output() {
    let temp = TempDir::new().unwrap();

    bundleplan(temp.path())
        .args(["resolve", "--no-banner"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("\"mode\": \"development\""));
}

#[test]
fn quiet_still_reports_errors() {
    let temp = TempDir::new().unwrap();

    bundleplan(temp.path())
        .args(["-q", "--no-banner", "check", "--fs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry point not found"))
        .stderr(predicate::str::contains("Resolving build plan").not());
}

#[test]
fn resolve_uses_settings_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("bundleplan.toml"),
        "title = \"Demo\"\n\n[dev_server]\nport = 8080\n",
    )
    .unwrap();

    let plan = resolve_json(bundleplan(temp.path()).arg("resolve"));
    assert_eq!(plan["devServer"]["port"], 8080);
    assert_eq!(plan["plugins"][1]["title"], "Demo");
}

#[test]
fn resolve_env_var_overrides_settings_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bundleplan.toml"), "[dev_server]\nport = 8080\n").unwrap();

    let plan = resolve_json(
        bundleplan(temp.path())
            .env("BUNDLEPLAN_DEV_SERVER__PORT", "9090")
            .arg("resolve"),
    );
    assert_eq!(plan["devServer"]["port"], 9090);
}

#[test]
fn resolve_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();

    bundleplan(temp.path())
        .args(["resolve", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn malformed_env_flag_is_rejected() {
    let temp = TempDir::new().unwrap();

    bundleplan(temp.path())
        .args(["resolve", "--env", "NODE_ENV"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn check_fs_requires_project_files() {
    let temp = TempDir::new().unwrap();

    bundleplan(temp.path())
        .args(["check", "--fs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("app.js"));

    fs::create_dir_all(temp.path().join("src/html")).unwrap();
    fs::write(temp.path().join("src/app.js"), "").unwrap();
    fs::write(temp.path().join("src/html/index.html"), "<html></html>").unwrap();

    bundleplan(temp.path())
        .args(["check", "--fs"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Plan is valid"));
}

#[test]
fn schema_prints_settings_schema() {
    let temp = TempDir::new().unwrap();

    bundleplan(temp.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"properties\""))
        .stdout(predicate::str::contains("dev_server"));
}

#[test]
fn init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();

    bundleplan(temp.path()).arg("init").assert().success();
    assert!(temp.path().join("bundleplan.toml").exists());

    bundleplan(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    bundleplan(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
