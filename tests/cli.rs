use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURES: &str = "tests/fixtures/traefik";

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

/// Copy a fixture set into a fresh temp dir so corrections never touch the repo.
fn fixture(name: &str) -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    copy_dir(&Path::new(FIXTURES).join(name), &tmp.path().join("conf"));
    tmp
}

fn traefik_validate(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_traefik-validate"));
    cmd.env("HOME", home).env_remove("RUST_LOG").arg("--no-color");
    cmd
}

#[test]
fn valid_directory_passes() {
    let tmp = fixture("valid");

    traefik_validate(tmp.path())
        .args(["--skip-lint"])
        .arg(tmp.path().join("conf"))
        .assert()
        .success()
        .stdout(predicate::str::contains("section_start:"))
        .stdout(predicate::str::contains("routers.yml is valid"))
        .stdout(predicate::str::contains(
            "docker-compose.yml is valid (not a Traefik configuration file)",
        ))
        .stdout(predicate::str::contains("All files are valid!"));
}

#[test]
fn invalid_directory_fails_with_messages() {
    let tmp = fixture("invalid");

    traefik_validate(tmp.path())
        .args(["--skip-lint"])
        .arg(tmp.path().join("conf"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "  - Router 'r1' in HTTP references undefined service 's1'.",
        ))
        .stdout(predicate::str::contains(
            "  - Missing or empty 'services' in HTTP configuration, but at least one router references a non-internal service.",
        ))
        .stdout(predicate::str::contains(
            "  - Missing 'routers' in HTTP configuration, but 'services' are defined.",
        ))
        .stdout(predicate::str::contains("Some files have validation errors."));
}

#[test]
fn auto_correct_rewrites_and_passes() {
    let tmp = fixture("invalid");
    let conf = tmp.path().join("conf");

    traefik_validate(tmp.path())
        .args(["--skip-lint", "--auto-correct"])
        .arg(&conf)
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempting to auto-correct..."))
        .stdout(predicate::str::contains("Configuration has been auto-corrected."));

    let corrected: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(conf.join("orphan-services.yml")).unwrap())
            .unwrap();
    assert!(corrected["http"]["routers"].is_mapping());
    assert!(corrected["http"]["serversTransports"]["insecure"].is_mapping());

    let corrected: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(conf.join("missing-services.yml")).unwrap())
            .unwrap();
    assert!(corrected["http"]["services"].is_mapping());
}

#[test]
fn strict_auto_correct_fails_on_remaining_errors() {
    let tmp = fixture("invalid");

    traefik_validate(tmp.path())
        .args(["--skip-lint", "--auto-correct", "--strict"])
        .arg(tmp.path().join("conf"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("after correction:"));
}

#[test]
fn dry_run_leaves_files_untouched() {
    let tmp = fixture("invalid");
    let file = tmp.path().join("conf/missing-services.yml");
    let before = fs::read_to_string(&file).unwrap();

    traefik_validate(tmp.path())
        .args(["--skip-lint", "--auto-correct", "--dry-run"])
        .arg(tmp.path().join("conf"))
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run, not written"))
        .stdout(predicate::str::contains("services: {}"));

    assert_eq!(fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn not_a_directory_is_an_error() {
    let tmp = fixture("valid");

    traefik_validate(tmp.path())
        .args(["--skip-lint"])
        .arg(tmp.path().join("conf/traefik.yml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a valid directory"));
}

#[test]
fn empty_directory_passes() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("README.md"), "# nothing here\n").unwrap();

    traefik_validate(tmp.path())
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No YAML files found in"));
}

#[test]
fn json_output_is_parseable() {
    let tmp = fixture("invalid");

    let output = traefik_validate(tmp.path())
        .args(["--skip-lint", "--format", "json"])
        .arg(tmp.path().join("conf"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let files = payload.as_array().unwrap();
    assert_eq!(files.len(), 3);
    // Discovery order is sorted by path.
    assert!(files[0]["filePath"].as_str().unwrap().ends_with("cross-section.yml"));
    assert_eq!(files[0]["status"], "invalid");
    assert_eq!(files[0]["messages"][0]["ruleId"], "TRF009");
}

#[test]
fn github_output_has_annotations() {
    let tmp = fixture("invalid");

    traefik_validate(tmp.path())
        .args(["--skip-lint", "--format", "github"])
        .arg(tmp.path().join("conf"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("::error file="))
        .stdout(predicate::str::contains(",line=8,col=7,title=TRF009::"));
}

#[test]
fn config_file_downgrades_rules() {
    let tmp = fixture("invalid");
    let config = tmp.path().join("relaxed.toml");
    fs::write(
        &config,
        "[lint]\nenabled = false\n\n[validation]\nwarn = [\"TRF009\", \"TRF010\", \"routers-required\"]\n",
    )
    .unwrap();

    traefik_validate(tmp.path())
        .arg("--config")
        .arg(&config)
        .arg(tmp.path().join("conf"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings in"));
}

#[test]
fn broken_explicit_config_is_an_error() {
    let tmp = fixture("valid");
    let config = tmp.path().join("broken.toml");
    fs::write(&config, "[validation\n").unwrap();

    traefik_validate(tmp.path())
        .arg("-c")
        .arg(&config)
        .arg(tmp.path().join("conf"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn missing_linter_fails_files() {
    let tmp = fixture("valid");
    let config = tmp.path().join("lint.toml");
    fs::write(&config, "[lint]\ncommand = \"no-such-yaml-linter\"\n").unwrap();

    traefik_validate(tmp.path())
        .arg("--config")
        .arg(&config)
        .arg(tmp.path().join("conf"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error running no-such-yaml-linter"));
}

#[cfg(unix)]
#[test]
fn linter_rejection_fails_files() {
    let tmp = fixture("valid");
    let config = tmp.path().join("lint.toml");
    fs::write(&config, "[lint]\ncommand = \"false\"\n").unwrap();

    traefik_validate(tmp.path())
        .arg("--config")
        .arg(&config)
        .arg(tmp.path().join("conf"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("YAML Lint errors in"));
}

#[test]
fn list_rules() {
    let tmp = tempfile::tempdir().unwrap();

    traefik_validate(tmp.path())
        .arg("--list-rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("TRF001"))
        .stdout(predicate::str::contains("router-service-defined"));
}
