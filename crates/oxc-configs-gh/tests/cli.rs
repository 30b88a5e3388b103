use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

fn oxc_configs_gh(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("oxc-configs-gh").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_unknown_template_exits_with_error() {
    let dir = TempDir::new().unwrap();

    oxc_configs_gh(&dir)
        .arg("--template-dir")
        .arg(templates_dir())
        .arg("vue")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown template"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_writes_pretty_configs() {
    let dir = TempDir::new().unwrap();

    oxc_configs_gh(&dir)
        .arg("--template-dir")
        .arg(templates_dir())
        .arg("react-typescript")
        .assert()
        .success();

    let linter = std::fs::read_to_string(dir.path().join(".oxlintrc.json")).unwrap();
    assert!(linter.starts_with("{\n  "));
    assert!(linter.ends_with("}\n"));
    assert!(linter.contains("react/rules-of-hooks"));
    assert!(dir.path().join(".oxfmtrc.json").exists());
}

#[test]
fn test_install_flags_not_offered() {
    let dir = TempDir::new().unwrap();

    oxc_configs_gh(&dir)
        .args(["--skip-install", "typescript"])
        .assert()
        .code(2);
}

/// Install a fake `gh` whose `auth status` exits with `auth_code`
#[cfg(unix)]
fn fake_gh(bin: &Path, auth_code: i32) {
    use std::os::unix::fs::PermissionsExt;

    let path = bin.join("gh");
    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" = \"--version\" ]; then echo \"gh version 2.62.0\"; exit 0; fi\n\
         if [ \"$1\" = \"auth\" ]; then exit {}; fi\n\
         exit 1\n",
        auth_code
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_missing_gh_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();

    oxc_configs_gh(&dir)
        .env("PATH", bin.path())
        .arg("typescript")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GitHub CLI is not installed"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn test_logged_out_gh_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    fake_gh(bin.path(), 1);

    oxc_configs_gh(&dir)
        .env("PATH", bin.path())
        .arg("typescript")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("gh auth login"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
