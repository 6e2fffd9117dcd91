use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(root: &Path, rel_path: &str, content: &str) {
    let path = root.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn setup_library() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write(root, "LICENSE", "MIT License\n");
    write(
        root,
        "dui.hpp",
        "#pragma once\n#include \"label.hpp\"\n#include \"box.hpp\"\n",
    );
    write(
        root,
        "label.hpp",
        "#pragma once\n#include \"box.hpp\"\n\nnamespace dui {\nstruct Label {};\n} // namespace dui\n",
    );
    write(
        root,
        "box.hpp",
        "#pragma once\n#include <SDL.h>\n\nnamespace dui {\nstruct Box {};\n} // namespace dui\n",
    );

    tmp
}

fn singlehdr(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("singlehdr").unwrap();
    cmd.arg("--no-config").arg("-C").arg(root);
    cmd
}

#[test]
fn test_help_output() {
    let mut cmd = Command::cargo_bin("singlehdr").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Amalgamate a header-only C++ library into a single header",
        ))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("order"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_output() {
    let mut cmd = Command::cargo_bin("singlehdr").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_order_command() {
    let tmp = setup_library();

    singlehdr(tmp.path())
        .arg("order")
        .assert()
        .success()
        .stdout("box.hpp\nlabel.hpp\ndui.hpp\n");
}

#[test]
fn test_build_writes_output() {
    let tmp = setup_library();

    singlehdr(tmp.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files merged: 3"));

    let output = fs::read_to_string(tmp.path().join("dui_single.hpp")).unwrap();
    assert!(output.starts_with("/*\n * MIT License\n * \n */\n#ifndef DUI_SINGLE_HPP\n"));
    assert!(output.contains("// begin box.hpp\nstruct Box {};\n\n// begin label.hpp\nstruct Label {};\n"));
    assert!(output.ends_with("#endif // DUI_SINGLE_HPP\n"));
}

#[test]
fn test_build_stdout() {
    let tmp = setup_library();

    singlehdr(tmp.path())
        .args(["build", "--stdout", "--no-license", "--no-includes", "--namespace", ""])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#ifndef DUI_SINGLE_HPP\n#define DUI_SINGLE_HPP\n\n#ifndef DUI_THEME"))
        .stdout(predicate::str::contains("namespace dui {\nstruct Box {};\n} // namespace dui"));

    assert!(!tmp.path().join("dui_single.hpp").exists());
}

#[test]
fn test_build_dry_run() {
    let tmp = setup_library();

    singlehdr(tmp.path())
        .args(["build", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[DRY RUN] Would write"));

    assert!(!tmp.path().join("dui_single.hpp").exists());
}

#[test]
fn test_build_with_custom_output() {
    let tmp = setup_library();

    singlehdr(tmp.path())
        .args(["build", "--output", "dist/ui.hpp"])
        .assert()
        .success();

    let output = fs::read_to_string(tmp.path().join("dist/ui.hpp")).unwrap();
    assert!(output.contains("#ifndef UI_HPP\n"));
    assert!(output.ends_with("#endif // UI_HPP\n"));
}

#[test]
fn test_build_reads_project_config() {
    let tmp = setup_library();
    write(
        tmp.path(),
        "singlehdr.toml",
        "output = \"single.hpp\"\nincludes = [\"vector\"]\n",
    );

    let mut cmd = Command::cargo_bin("singlehdr").unwrap();
    cmd.arg("-C").arg(tmp.path()).arg("build").assert().success();

    let output = fs::read_to_string(tmp.path().join("single.hpp")).unwrap();
    assert!(output.contains("#include <vector>\n\nnamespace dui {"));
    assert!(!output.contains("#include <SDL.h>"));
}

#[test]
fn test_cycle_fails() {
    let tmp = setup_library();
    write(tmp.path(), "box.hpp", "#pragma once\n#include \"dui.hpp\"\n");

    singlehdr(tmp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Include cycle detected"));

    assert!(!tmp.path().join("dui_single.hpp").exists());
}

#[test]
fn test_missing_include_fails() {
    let tmp = setup_library();
    fs::remove_file(tmp.path().join("box.hpp")).unwrap();

    singlehdr(tmp.path())
        .arg("order")
        .assert()
        .failure()
        .stderr(predicate::str::contains("box.hpp"));
}

#[test]
fn test_check_up_to_date_and_stale() {
    let tmp = setup_library();

    singlehdr(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    singlehdr(tmp.path()).arg("build").assert().success();

    singlehdr(tmp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("is up to date"));

    write(
        tmp.path(),
        "box.hpp",
        "#pragma once\n\nnamespace dui {\nstruct Box { int w; };\n} // namespace dui\n",
    );

    singlehdr(tmp.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("+struct Box { int w; };"))
        .stderr(predicate::str::contains("is out of date"));
}

#[test]
fn test_config_command() {
    let tmp = setup_library();

    singlehdr(tmp.path())
        .args(["config", "--guard", "MY_GUARD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entry = \"dui.hpp\""))
        .stdout(predicate::str::contains("guard = \"MY_GUARD\""));
}

#[test]
fn test_config_output_reloads_unchanged() {
    let tmp = setup_library();

    let printed = singlehdr(tmp.path())
        .args(["config", "--no-license", "--namespace", ""])
        .output()
        .unwrap();
    assert!(printed.status.success());
    let printed = String::from_utf8(printed.stdout).unwrap();
    assert!(printed.contains("license = \"\""));

    let saved = tmp.path().join("saved.toml");
    fs::write(&saved, &printed).unwrap();

    let mut cmd = Command::cargo_bin("singlehdr").unwrap();
    cmd.arg("--config")
        .arg(&saved)
        .arg("-C")
        .arg(tmp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::diff(printed));
}

#[test]
fn test_config_verbose_keeps_stdout_clean() {
    let tmp = setup_library();

    singlehdr(tmp.path())
        .args(["-v", "config"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("entry = \"dui.hpp\""));
}

#[test]
fn test_output_over_entry_rejected() {
    let tmp = setup_library();

    singlehdr(tmp.path())
        .args(["build", "--output", "./dui.hpp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("would overwrite the entry header"));

    let entry = fs::read_to_string(tmp.path().join("dui.hpp")).unwrap();
    assert!(entry.starts_with("#pragma once\n"));
}

#[test]
fn test_invalid_guard_rejected() {
    let tmp = setup_library();

    singlehdr(tmp.path())
        .args(["build", "--guard", "not-valid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid macro name"));
}

#[test]
fn test_config_and_no_config_conflict() {
    let mut cmd = Command::cargo_bin("singlehdr").unwrap();
    cmd.args(["--config", "x.toml", "--no-config", "order"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unknown_subcommand() {
    let mut cmd = Command::cargo_bin("singlehdr").unwrap();
    cmd.arg("unknown")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_no_subcommand() {
    let mut cmd = Command::cargo_bin("singlehdr").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_for_subcommands() {
    for subcommand in ["build", "order", "check", "config"] {
        let mut cmd = Command::cargo_bin("singlehdr").unwrap();
        cmd.args([subcommand, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }
}
