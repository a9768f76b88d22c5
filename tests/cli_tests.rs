//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
[project]
name = "dfwinreg"
maintainer = "Log2Timeline maintainers <log2timeline-maintainers@googlegroups.com>"
homepage = "https://github.com/log2timeline/dfwinreg"
summary = "Digital Forensics Windows Registry (dfWinReg)."
description = ["dfWinReg provides read-only access to Windows Registry objects."]
"#;

const REGISTRY: &str = r#"
[[dependency]]
name = "construct"
minimum_version = "2.5.2"
dpkg_name = "python-construct"
rpm_name = "python-construct"

[[dependency]]
name = "six"
dpkg_name = "python-six"
rpm_name = "python-six"
"#;

fn depsync() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("depsync"))
}

fn project(with_dirs: bool) -> TempDir {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("depsync.toml"), CONFIG).expect("write config");
    fs::write(tmp.path().join("dependencies.toml"), REGISTRY).expect("write registry");
    if with_dirs {
        fs::create_dir_all(tmp.path().join("config/dpkg")).expect("mkdir");
        fs::create_dir_all(tmp.path().join("config/travis")).expect("mkdir");
    }
    tmp
}

fn root_arg(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

#[test]
fn test_cli_version() {
    depsync().arg("--version").assert().success().stdout(predicate::str::contains("depsync"));
}

#[test]
fn test_cli_help() {
    depsync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate packaging"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_generate_writes_all_artifacts() {
    let tmp = project(true);
    depsync()
        .args(["generate", "--root", root_arg(tmp.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote config/dpkg/control"))
        .stdout(predicate::str::contains("wrote config/travis/install.sh"));

    let control = fs::read_to_string(tmp.path().join("config/dpkg/control")).expect("control");
    assert!(control.starts_with("Source: dfwinreg\n"));
    assert!(control.contains(
        "Depends: python-construct (>= 2.5.2), python-six, ${python:Depends}, ${misc:Depends}"
    ));
    assert!(control.contains(
        "Depends: python3-construct (>= 2.5.2), python3-six, ${python:Depends}, ${misc:Depends}"
    ));

    let requirements = fs::read_to_string(tmp.path().join("requirements.txt")).expect("reqs");
    assert_eq!(requirements, "pip >= 7.0.0\npytest\nconstruct>=2.5.2\nsix");

    let setup_cfg = fs::read_to_string(tmp.path().join("setup.cfg")).expect("setup.cfg");
    assert!(setup_cfg.ends_with("requires = python-construct >= 2.5.2\n           python-six"));

    let script = fs::read_to_string(tmp.path().join("config/travis/install.sh")).expect("script");
    assert!(script.starts_with("#!/bin/bash\n"));
    assert!(script.contains("PYTHON2_DEPENDENCIES=\"python-construct python-six\";"));
    assert!(script.contains("PYTHON3_DEPENDENCIES=\"python3-construct python3-six\";"));
    assert!(script.contains("--preset=dfwinreg;"));
}

#[test]
fn test_generate_is_idempotent() {
    let tmp = project(true);
    depsync().args(["generate", "--root", root_arg(tmp.path())]).assert().success();
    let first = fs::read(tmp.path().join("config/dpkg/control")).expect("control");
    depsync().args(["generate", "--root", root_arg(tmp.path())]).assert().success();
    let second = fs::read(tmp.path().join("config/dpkg/control")).expect("control");
    assert_eq!(first, second);
}

#[test]
fn test_generate_fails_on_missing_directory() {
    let tmp = project(false);
    depsync()
        .args(["generate", "--root", root_arg(tmp.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed writing"));
    assert!(!tmp.path().join("requirements.txt").exists());
}

#[test]
fn test_generate_only_selected() {
    let tmp = project(false);
    depsync()
        .args(["generate", "--root", root_arg(tmp.path()), "--only", "requirements,setup-cfg"])
        .assert()
        .success();
    assert!(tmp.path().join("requirements.txt").exists());
    assert!(tmp.path().join("setup.cfg").exists());
}

#[test]
fn test_generate_rejects_unknown_artifact() {
    let tmp = project(true);
    depsync()
        .args(["generate", "--root", root_arg(tmp.path()), "--only", "debian"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown artifact 'debian'"));
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let tmp = project(false);
    depsync()
        .args(["generate", "--root", root_arg(tmp.path()), "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would write requirements.txt"));
    assert!(!tmp.path().join("requirements.txt").exists());
}

#[test]
fn test_missing_registry_fails() {
    let tmp = project(true);
    fs::remove_file(tmp.path().join("dependencies.toml")).expect("rm");
    depsync()
        .args(["generate", "--root", root_arg(tmp.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dependency registry not readable"));
    assert!(!tmp.path().join("requirements.txt").exists());
}

#[test]
fn test_blank_project_metadata_warns() {
    let tmp = project(false);
    fs::write(tmp.path().join("depsync.toml"), "[project]\nname = \"dfvfs\"\n").expect("write");
    depsync()
        .args(["list", "--root", root_arg(tmp.path())])
        .assert()
        .success()
        .stderr(predicate::str::contains("maintainer is empty"))
        .stderr(predicate::str::contains("homepage is empty"));
}

#[test]
fn test_list_json() {
    let tmp = project(false);
    let output = depsync()
        .args(["list", "--root", root_arg(tmp.path()), "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["project"], "dfwinreg");
    assert_eq!(value["dpkg_depends"][0], "python-construct (>= 2.5.2)");
    assert_eq!(value["dpkg_packages"][0], "python-construct");
    assert_eq!(value["rpm_requires"][1], "python-six");
    assert_eq!(value["install_requires"][0], "construct>=2.5.2");
}

#[test]
fn test_check_without_version_commands_succeeds() {
    let tmp = project(false);
    depsync()
        .args(["check", "--root", root_arg(tmp.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking availability"));
}

#[test]
fn test_check_fails_on_missing_required_program() {
    let tmp = project(false);
    fs::write(
        tmp.path().join("dependencies.toml"),
        "[[dependency]]\nname = \"ghost\"\nversion_command = [\"depsync-no-such-program-xyz\"]\n",
    )
    .expect("write");
    depsync()
        .args(["check", "--root", root_arg(tmp.path())])
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing: ghost"));
}

#[test]
fn test_completions() {
    depsync()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("depsync"));
}
