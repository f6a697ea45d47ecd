//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("usuarios").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("usuarios").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_init_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("data").join("usuarios.db");

    let mut cmd = Command::cargo_bin("usuarios").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("USUARIOS_DATABASE")
        .arg("init")
        .arg("--database")
        .arg(&db_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database ready"));

    assert!(db_path.exists());
}

#[test]
fn test_init_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("usuarios.toml"),
        "database = \"from-config.db\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("usuarios").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("USUARIOS_DATABASE")
        .arg("init");

    cmd.assert().success();

    assert!(dir.path().join("from-config.db").exists());
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "bind = 42\n").unwrap();

    let mut cmd = Command::cargo_bin("usuarios").unwrap();
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("init");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid TOML"));
}
