extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use image::GenericImageView;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const CUBIC: &str = "(1 + 0i) + (0 + 0i)x + (0 + 0i)xx + (1 + 0i)xxx";
const DERIVATIVE: &str = "(0 + 0i) + (0 + 0i)x + (3 + 0i)xx";

#[test]
fn renders_a_small_fractal() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("newton.png");
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["10", "10", "-2", "2", "-2", "2"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains(CUBIC))
        .stdout(predicate::str::contains(DERIVATIVE));

    let img = image::open(&out).unwrap();
    assert_eq!(img.dimensions(), (10, 10));
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    for out in &[&first, &second] {
        Command::cargo_bin("newton")
            .unwrap()
            .args(&["24", "16", "-1.5", "1.5", "-1", "1"])
            .arg(out)
            .assert()
            .success();
    }
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn output_defaults_to_out_png() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("newton")
        .unwrap()
        .current_dir(dir.path())
        .args(&["4", "3", "-1", "1", "-1", "1"])
        .assert()
        .success();
    let img = image::open(dir.path().join("out.png")).unwrap();
    assert_eq!(img.dimensions(), (4, 3));
}

#[test]
fn missing_arguments_fail() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["10", "10", "-2"])
        .assert()
        .failure();
}

#[test]
fn malformed_numbers_fail() {
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["ten", "10", "-2", "2", "-2", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Width must be a positive integer"));

    Command::cargo_bin("newton")
        .unwrap()
        .args(&["10", "10", "-2", "two", "-2", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse plane coordinate"));
}

#[test]
fn backwards_plane_fails() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["10", "10", "2", "-2", "-2", "2"])
        .arg(dir.path().join("never.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
    assert!(!dir.path().join("never.png").exists());
}

#[test]
fn unwritable_output_fails() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("newton")
        .unwrap()
        .args(&["4", "4", "-2", "2", "-2", "2"])
        .arg(dir.path().join("missing").join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not write image"));
}
