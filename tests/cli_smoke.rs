use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;

use res_move::config::xml::CONFIG_ENV;

/// Pin the config to a file inside the test's own temp dir so the binary
/// never reads the developer's config or writes a template outside the
/// sandbox; the log file is kept inside the temp dir too.
fn write_config(temp: &TempDir) {
    temp.child("config.xml")
        .write_str(&format!(
            "<config><log_level>normal</log_level><log_file>{}</log_file></config>",
            temp.child("res_move.log").path().display()
        ))
        .unwrap();
}

fn res_move(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("res_move").expect("binary builds");
    cmd.env(CONFIG_ENV, temp.child("config.xml").path());
    cmd
}

fn project_fixture() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    write_config(&temp);
    let base = temp.child("proj");
    temp.child("proj/app/res/drawable/icon.png")
        .write_str("png")
        .unwrap();
    temp.child("proj/app/res/drawable-hdpi/icon.png")
        .write_str("png")
        .unwrap();
    temp.child("proj/core/.keep").touch().unwrap();
    let base_path = base.path().to_path_buf();
    (temp, base_path)
}

#[test]
fn help_mentions_target_module() {
    let temp = TempDir::new().unwrap();
    write_config(&temp);
    res_move(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--to"));
}

#[test]
fn moves_selection_with_variants_via_binary() {
    let (temp, base) = project_fixture();
    let src = base.join("app/res/drawable/icon.png");
    res_move(&temp)
        .arg("--project-base")
        .arg(&base)
        .arg("--to")
        .arg("core")
        .arg(&src)
        .assert()
        .success()
        .stdout(contains("moved"));

    assert!(base.join("core/res/drawable/icon.png").is_file());
    assert!(
        base.join("core/res/drawable-hdpi/icon.png").is_file(),
        "qualified variant followed the selection"
    );
    assert!(!src.exists());
}

#[test]
fn dry_run_reports_but_does_not_move() {
    let (temp, base) = project_fixture();
    let src = base.join("app/res/drawable/icon.png");
    res_move(&temp)
        .arg("--project-base")
        .arg(&base)
        .arg("--to")
        .arg("core")
        .arg("--dry-run")
        .arg(&src)
        .assert()
        .success()
        .stdout(contains("would move"));
    assert!(src.exists());
    assert!(!base.join("core/res/drawable/icon.png").exists());
}

#[test]
fn unknown_target_module_fails_with_module_list() {
    let (temp, base) = project_fixture();
    res_move(&temp)
        .arg("--project-base")
        .arg(&base)
        .arg("--to")
        .arg("nonexistent")
        .arg(base.join("app/res/drawable/icon.png"))
        .assert()
        .failure()
        .stderr(contains("Unknown target module"))
        .stderr(contains("\u{1b}[").not());
}

#[test]
fn mixed_selection_is_rejected_before_any_move() {
    let (temp, base) = project_fixture();
    let file = base.join("app/res/drawable/icon.png");
    let dir = base.join("app/res/drawable-hdpi");
    res_move(&temp)
        .arg("--project-base")
        .arg(&base)
        .arg("--to")
        .arg("core")
        .arg(&file)
        .arg(&dir)
        .assert()
        .failure()
        .stderr(contains("mixes files and directories"));
    assert!(file.exists());
    assert!(dir.exists());
}

#[test]
fn print_config_exits_without_paths() {
    let temp = TempDir::new().unwrap();
    write_config(&temp);
    res_move(&temp)
        .arg("--print-config")
        .assert()
        .success()
        .stdout(contains("config"));
}
