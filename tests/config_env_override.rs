use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::str::contains;
use serial_test::serial;

use res_move::config::xml::{CONFIG_ENV, LoadResult, load_config};

fn res_move() -> Command {
    Command::cargo_bin("res_move").expect("binary builds")
}

/// RES_MOVE_CONFIG drives the binary: a config restricting selections to a
/// 'res' root makes a move outside that root unavailable.
#[test]
fn explicit_config_enforces_resources_root() {
    let temp = TempDir::new().unwrap();
    temp.child("config.xml")
        .write_str(&format!(
            "<config><resources_root>res</resources_root><log_level>quiet</log_level><log_file>{}</log_file></config>",
            temp.child("res_move.log").path().display()
        ))
        .unwrap();
    let base = temp.child("proj");
    temp.child("proj/app/assets/raw/icon.png").write_str("x").unwrap();
    temp.child("proj/core/.keep").touch().unwrap();

    res_move()
        .env(CONFIG_ENV, temp.child("config.xml").path())
        .arg("--project-base")
        .arg(base.path())
        .arg("--to")
        .arg("core")
        .arg(base.path().join("app/assets/raw/icon.png"))
        .assert()
        .failure()
        .stderr(contains("resources directory"));
}

/// A config selecting '_' as the delimiter changes which directories count
/// as qualified siblings.
#[test]
fn configured_delimiter_drives_grouping() {
    let temp = TempDir::new().unwrap();
    temp.child("config.xml")
        .write_str(&format!(
            "<config><qualifier_delimiter>_</qualifier_delimiter><log_level>quiet</log_level><log_file>{}</log_file></config>",
            temp.child("res_move.log").path().display()
        ))
        .unwrap();
    let base = temp.child("proj");
    temp.child("proj/app/res/lang/strings.txt").write_str("en").unwrap();
    temp.child("proj/app/res/lang_fr/strings.txt").write_str("fr").unwrap();
    temp.child("proj/core/.keep").touch().unwrap();

    res_move()
        .env(CONFIG_ENV, temp.child("config.xml").path())
        .arg("--project-base")
        .arg(base.path())
        .arg("--to")
        .arg("core")
        .arg(base.path().join("app/res/lang/strings.txt"))
        .assert()
        .success();

    assert!(base.path().join("core/res/lang/strings.txt").is_file());
    assert!(
        base.path().join("core/res/lang_fr/strings.txt").is_file(),
        "underscore-qualified sibling moved along"
    );
}

/// In-process loader honors the environment variable and fails loudly on a
/// broken explicit config.
#[test]
#[serial]
fn load_config_env_is_authoritative() {
    let temp = TempDir::new().unwrap();
    let good = temp.child("good.xml");
    good.write_str("<config><search_comments>false</search_comments></config>")
        .unwrap();

    unsafe { std::env::set_var(CONFIG_ENV, good.path()) };
    let loaded = load_config().unwrap();
    unsafe { std::env::remove_var(CONFIG_ENV) };
    match loaded {
        LoadResult::Loaded(cfg) => assert!(!cfg.search_comments),
        other => panic!("expected Loaded, got {other:?}"),
    }

    let broken = temp.child("broken.xml");
    broken.write_str("<config><unknown>x</unknown></config>").unwrap();
    unsafe { std::env::set_var(CONFIG_ENV, broken.path()) };
    let result = load_config();
    unsafe { std::env::remove_var(CONFIG_ENV) };
    assert!(result.is_err(), "explicit config must parse or fail");
}
