use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn folioctl(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("folioctl");
    cmd.current_dir(dir.path())
        .env_remove("FOLIO_CONFIG_PATH")
        .env_remove("FOLIO_CONFIG_JSON")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn simulate_help_mentions_options() {
    let mut cmd = cargo_bin_cmd!("folioctl");
    let output = cmd
        .arg("simulate")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("--surface"), "simulate help missing --surface");
    assert!(text.contains("--for"), "simulate help missing --for");
    assert!(text.contains("fullscreen"), "simulate help missing surfaces");
}

#[test]
fn categories_lists_the_builtin_portfolio() {
    let dir = TempDir::new().unwrap();
    folioctl(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("all        17"))
        .stdout(predicate::str::contains("retrato    Retrato"))
        .stdout(predicate::str::contains("producto"));
}

#[test]
fn catalog_filters_by_category_and_search() {
    let dir = TempDir::new().unwrap();
    folioctl(&dir)
        .args(["catalog", "--category", "calle", "--search", "espuma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Espuma Playa"))
        .stdout(predicate::str::contains("1 de 17 fotos"));

    folioctl(&dir)
        .args(["catalog", "--category", "cine"])
        .assert()
        .failure();
}

#[test]
fn simulate_fullscreen_is_manual_unless_asked() {
    let dir = TempDir::new().unwrap();
    folioctl(&dir)
        .args(["simulate", "--surface", "fullscreen", "--for", "20s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ticks: 0, moves: 0"));

    folioctl(&dir)
        .args(["simulate", "--surface", "fullscreen", "--for", "20s", "--autoplay"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ticks: 3, moves: 3"))
        .stdout(predicate::str::contains("18s"));
}

#[test]
fn simulate_hero_fires_every_five_seconds() {
    let dir = TempDir::new().unwrap();
    folioctl(&dir)
        .args(["simulate", "--for", "15s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ticks: 3, moves: 3"));
}

#[test]
fn check_rejects_a_zero_interval() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("folio.toml"), "[hero]\ninterval_ms = 0\n").unwrap();
    folioctl(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("hero.interval_ms must be greater than zero"));
}

#[test]
fn check_reports_sources_and_warnings() {
    let dir = TempDir::new().unwrap();
    folioctl(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("built-in portfolio (17 photos)"))
        .stdout(predicate::str::contains("foto-retrato.jpg"));
}

#[test]
fn play_hero_runs_the_deduplicated_banner() {
    let dir = TempDir::new().unwrap();
    folioctl(&dir)
        .args(["play", "--surface", "hero", "--for", "100ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0s  fotos/"))
        .stdout(predicate::str::contains("stopped at 1 of 16"));
}

#[test]
fn play_fullscreen_stays_on_the_first_slide_without_autoplay() {
    let dir = TempDir::new().unwrap();
    folioctl(&dir)
        .args(["play", "--surface", "fullscreen", "--for", "100ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Foto Retrato (fotos/foto-retrato.jpg)"))
        .stdout(predicate::str::contains("stopped at 1 of 17"));
}
