use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Binary run inside `cwd` with no ambient config and colors off
fn renametool(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("renametool").unwrap();
    cmd.current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("RENAMETOOL_CONFIG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", cwd.join("no-user-config"));
    cmd
}

fn create_files(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), name).unwrap();
    }
}

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    renametool(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch-rename files"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    renametool(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand() {
    let dir = tempdir().unwrap();
    renametool(dir.path()).assert().failure().code(2);
}

#[test]
fn test_files_lists_visible_files() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["b.txt", "A.txt", ".hidden", "Thumbs.db"]);

    renametool(dir.path())
        .args(["files", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. A.txt"))
        .stdout(predicate::str::contains("2. b.txt"))
        .stdout(predicate::str::contains(".hidden").not())
        .stdout(predicate::str::contains("Thumbs.db").not());
}

#[test]
fn test_files_defaults_to_current_directory() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["here.txt"]);

    renametool(dir.path())
        .arg("files")
        .assert()
        .success()
        .stdout(predicate::str::contains("here.txt"));
}

#[test]
fn test_files_extension_filter() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.JPG", "b.png"]);

    renametool(dir.path())
        .args(["files", "--ext", "jpg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.JPG"))
        .stdout(predicate::str::contains("b.png").not());
}

#[test]
fn test_missing_folder() {
    let dir = tempdir().unwrap();
    renametool(dir.path())
        .args(["files", "/nonexistent/path/12345"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_patterns_command() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["IMG_001.jpg", "IMG_002.jpg", "IMG_003.jpg"]);

    renametool(dir.path())
        .arg("patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequence code"))
        .stdout(predicate::str::contains("IMG_001"));
}

#[test]
fn test_media_command() {
    let dir = tempdir().unwrap();
    create_files(
        dir.path(),
        &["Breaking.Bad.S01E01.720p.BluRay.mkv", "The.Matrix.1999.1080p.mkv"],
    );

    renametool(dir.path())
        .arg("media")
        .assert()
        .success()
        .stdout(predicate::str::contains("Breaking Bad"))
        .stdout(predicate::str::contains("S01E01"))
        .stdout(predicate::str::contains("The Matrix"))
        .stdout(predicate::str::contains("1999"));
}

#[test]
fn test_rename_dry_run_changes_nothing() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["hello_world.txt"]);

    renametool(dir.path())
        .args(["rename", "--op", "replace:world=>earth", "--dry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("hello_earth.txt"))
        .stdout(predicate::str::contains("[OK]"));

    assert!(dir.path().join("hello_world.txt").exists());
    assert!(!dir.path().join("hello_earth.txt").exists());
    assert!(!dir.path().join(".renametool_undo.json").exists());
}

#[test]
fn test_rename_then_undo() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["IMG_001.jpeg", "IMG_002.jpeg"]);

    renametool(dir.path())
        .args(["rename", "--op", r"regex:IMG_(\d+)=>beach_\1", "--op", "ext:jpg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 2 files."));

    assert!(dir.path().join("beach_001.jpg").exists());
    assert!(dir.path().join("beach_002.jpg").exists());
    assert!(dir.path().join(".renametool_undo.json").exists());

    let log = fs::read_to_string(dir.path().join(".renametool.log")).unwrap();
    assert!(log.starts_with("=== "));
    assert!(log.contains("IMG_001.jpeg -> beach_001.jpg [OK]"));

    renametool(dir.path())
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 2 files."));

    assert_eq!(
        fs::read_to_string(dir.path().join("IMG_001.jpeg")).unwrap(),
        "IMG_001.jpeg"
    );
    assert!(dir.path().join("IMG_002.jpeg").exists());
    assert!(!dir.path().join("beach_001.jpg").exists());
    assert!(!dir.path().join(".renametool_undo.json").exists());
}

#[test]
fn test_undo_dry_run_keeps_ledger() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt"]);

    renametool(dir.path())
        .args(["rename", "--op", "prefix:new_"])
        .assert()
        .success();

    renametool(dir.path())
        .args(["undo", "--dry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new_a.txt  ->  a.txt"));

    assert!(dir.path().join("new_a.txt").exists());
    assert!(dir.path().join(".renametool_undo.json").exists());
}

#[test]
fn test_undo_without_ledger() {
    let dir = tempdir().unwrap();

    renametool(dir.path())
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("No undo information"));
}

#[test]
fn test_duplicate_targets_are_not_applied() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt", "b.txt"]);

    renametool(dir.path())
        .args(["rename", "--op", "regex:^.*$=>same"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[CONFLICT]"))
        .stdout(predicate::str::contains("2 conflicts"));

    assert!(dir.path().join("a.txt").exists());
    assert!(dir.path().join("b.txt").exists());
    assert!(!dir.path().join("same.txt").exists());
}

#[test]
fn test_select_limits_batch() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt", "b.txt"]);

    renametool(dir.path())
        .args(["rename", "--select", "b.txt", "--op", "case:upper"])
        .assert()
        .success();

    assert!(dir.path().join("a.txt").exists());
    assert!(dir.path().join("B.txt").exists());
}

#[test]
fn test_select_unknown_file() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt"]);

    renametool(dir.path())
        .args(["rename", "--select", "ghost.txt", "--op", "prefix:x"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("ghost.txt"));
}

#[test]
fn test_invalid_regex_rejected() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt"]);

    renametool(dir.path())
        .args(["rename", "--op", "regex:[oops=>x"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid regex"));

    assert!(dir.path().join("a.txt").exists());
}

#[test]
fn test_malformed_op_rejected_by_parser() {
    let dir = tempdir().unwrap();

    renametool(dir.path())
        .args(["rename", "--op", "rotate:90"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_no_operations() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt"]);

    renametool(dir.path())
        .arg("rename")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_media_rename() {
    let dir = tempdir().unwrap();
    create_files(
        dir.path(),
        &["Breaking.Bad.S01E01.720p.BluRay.mkv", "notes.txt"],
    );

    renametool(dir.path())
        .args(["rename", "--op", "tv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not recognized as tv: notes.txt"));

    assert!(dir.path().join("Breaking Bad - S01E01.mkv").exists());
    assert!(dir.path().join("notes.txt").exists());
}

#[test]
fn test_plan_file() {
    let dir = tempdir().unwrap();
    let media = dir.path().join("media");
    fs::create_dir(&media).unwrap();
    create_files(&media, &["photo.jpeg"]);
    let plan = dir.path().join("plan.json");
    fs::write(
        &plan,
        r#"[{"type": "prefix", "prefix": "2024_"}, {"type": "ext_change", "ext": "jpg"}]"#,
    )
    .unwrap();

    renametool(dir.path())
        .args(["rename", "media", "--plan", "plan.json", "--op", "case:upper"])
        .assert()
        .success();

    assert!(media.join("2024_PHOTO.jpg").exists());
}

#[test]
fn test_config_defaults() {
    let dir = tempdir().unwrap();
    let media = dir.path().join("media");
    fs::create_dir(&media).unwrap();
    create_files(&media, &["a.mkv", "b.txt", "skip.mkv"]);
    fs::write(
        dir.path().join("renametool.toml"),
        "default_folder = \"media\"\n\
         default_extension_filter = \".mkv\"\n\
         excluded_files = [\"SKIP.mkv\"]\n",
    )
    .unwrap();

    renametool(dir.path())
        .arg("files")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.mkv"))
        .stdout(predicate::str::contains("b.txt").not())
        .stdout(predicate::str::contains("skip.mkv").not());
}

#[test]
fn test_config_from_environment() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.mkv", "b.txt"]);
    let config = dir.path().join("elsewhere.conf");
    fs::write(&config, "default_extension_filter = \"txt\"").unwrap();

    renametool(dir.path())
        .env("RENAMETOOL_CONFIG", &config)
        .arg("files")
        .assert()
        .success()
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("a.mkv").not());
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().unwrap();

    renametool(dir.path())
        .args(["--config", "nope.toml", "files"])
        .assert()
        .failure()
        .code(8);
}

#[test]
fn test_malformed_config_warns_and_continues() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("renametool.toml"), "default_folder = [").unwrap();

    renametool(dir.path())
        .arg("files")
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring config"));
}

#[test]
fn test_verbose_flag() {
    let dir = tempdir().unwrap();
    create_files(dir.path(), &["a.txt"]);

    renametool(dir.path())
        .args(["-vv", "files"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Listing files"));
}
