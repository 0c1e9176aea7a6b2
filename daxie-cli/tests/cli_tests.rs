//! CLI integration tests
//!
//! Every command runs with HOME pointed at an empty temporary directory so a
//! developer's own init file never leaks into the results.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn daxie(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("daxie").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("DAXIE_INIT")
        .env_remove("DAXIE_ROUNDING")
        .env_remove("DAXIE_TERMINAL")
        .env_remove("DAXIE_OUTPUT")
        .env_remove("DAXIE_NEGATIVE_PREFIX");
    cmd
}

/// Test basic command help
#[test]
fn test_help_output() {
    let home = TempDir::new().unwrap();
    daxie(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chinese uppercase numerals"))
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("format"))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_extract_from_arguments() {
    let home = TempDir::new().unwrap();
    daxie(&home)
        .args(["extract", "我有1万元哈哈", "已履行行政处罚决定,罚款10000元哈哈", "我有元"])
        .assert()
        .success()
        .stdout("10000\n10000\n0\n");
}

#[test]
fn test_extract_from_stdin() {
    let home = TempDir::new().unwrap();
    daxie(&home)
        .arg("x")
        .write_stdin("10000元\n壹万伍仟肆佰壹拾圆叁角伍分肆厘\n")
        .assert()
        .success()
        .stdout("10000\n15410.354\n");
}

#[test]
fn test_extract_show_match() {
    let home = TempDir::new().unwrap();
    daxie(&home)
        .args(["extract", "--show-match", "我有1万元哈哈", "无"])
        .assert()
        .success()
        .stdout("10000\tdigits\t6..13\t1万元\n0\t-\n");
}

#[test]
fn test_format_amounts() {
    let home = TempDir::new().unwrap();
    daxie(&home)
        .args(["format", "10000", "-10000", "0", "1105000.00"])
        .assert()
        .success()
        .stdout("壹万元整\n负壹万元整\n零元整\n壹佰壹拾万伍仟元整\n");
}

#[test]
fn test_format_out_of_range() {
    let home = TempDir::new().unwrap();
    daxie(&home)
        .args(["format", "12345678901234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot format 12345678901234"));
}

#[test]
fn test_format_invalid_amount() {
    let home = TempDir::new().unwrap();
    daxie(&home)
        .args(["--verbose", "format", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount: abc"))
        .stderr(predicate::str::contains("Caused by"));
}

#[test]
fn test_convert() {
    let home = TempDir::new().unwrap();
    daxie(&home)
        .args(["convert", "罚款1105000元", "拾壹亿壹仟万伍仟肆佰壹拾元贰角捌分肆厘"])
        .assert()
        .success()
        .stdout("壹佰壹拾万伍仟元整\n壹拾壹亿壹仟万伍仟肆佰壹拾元贰角捌分肆厘\n");
}

#[test]
fn test_json_output() {
    let home = TempDir::new().unwrap();
    daxie(&home)
        .args(["--output", "json", "format", "10000"])
        .assert()
        .success()
        .stdout("{\"input\":\"10000\",\"uppercase\":\"壹万元整\"}\n");

    daxie(&home)
        .args(["-o", "json", "extract", "--show-match", "1万元"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"amount\":\"10000\""))
        .stdout(predicate::str::contains("\"kind\":\"digits\""));
}

#[test]
fn test_init_file_configuration() {
    let home = TempDir::new().unwrap();
    let init_file = home.path().join("custom.rc");
    fs::write(&init_file, "# formatting\n--terminal 正\n; trailing comment\n--rounding half-up\n").unwrap();

    daxie(&home)
        .arg("--init-file")
        .arg(&init_file)
        .args(["format", "5", "0.0005"])
        .assert()
        .success()
        .stdout("伍元正\n壹厘\n");

    // command-line flags override the init file
    daxie(&home)
        .arg("--init-file")
        .arg(&init_file)
        .args(["--terminal", "整", "format", "5"])
        .assert()
        .success()
        .stdout("伍元整\n");
}

#[test]
fn test_default_init_file_in_home() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".daxierc"), "--negative-prefix 负数\n").unwrap();

    daxie(&home).args(["format", "-3"]).assert().success().stdout("负数叁元整\n");
}

#[test]
fn test_environment_configuration() {
    let home = TempDir::new().unwrap();
    daxie(&home)
        .env("DAXIE_ROUNDING", "half-up")
        .args(["format", "0.0005"])
        .assert()
        .success()
        .stdout("壹厘\n");

    daxie(&home)
        .env("DAXIE_ROUNDING", "half-up")
        .args(["--args-only", "format", "0.0005"])
        .assert()
        .success()
        .stdout("零元整\n");
}

#[test]
fn test_invalid_configuration() {
    let home = TempDir::new().unwrap();
    daxie(&home)
        .args(["--rounding", "up", "format", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rounding option"));

    let missing = home.path().join("missing.rc");
    daxie(&home)
        .arg("--init-file")
        .arg(&missing)
        .args(["format", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Init file not found"));
}
