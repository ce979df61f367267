//! End-to-end CLI integration tests.
//!
//! Each test writes commit and user exports into a temporary directory, runs
//! the taglog binary there and checks what it prints or writes.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BASE_URL: &str = "https://github.com/o/r";

const COMMITS: &str = r#"[
  {
    "sha": "aaaaaaa1111",
    "message": "feat(auth): add OAuth login (#42)",
    "html_url": "https://github.com/o/r/commit/aaaaaaa1111",
    "author": {"login": "merge-bot"}
  },
  {
    "sha": "ccccccc3333",
    "message": "chore: bump dependencies",
    "html_url": "https://github.com/o/r/commit/ccccccc3333"
  },
  {
    "sha": "bbbbbbb2222",
    "message": "fix!: drop legacy token field\n\nBREAKING CHANGE: tokens issued before 1.0 are rejected",
    "html_url": "https://github.com/o/r/commit/bbbbbbb2222",
    "author": {"login": "alice", "html_url": "https://github.com/alice"}
  },
  {
    "sha": "ddddddd4444",
    "message": "Merge branch 'main' into feature",
    "html_url": "https://github.com/o/r/commit/ddddddd4444"
  },
  {
    "sha": "eeeeeee5555",
    "message": "feat: add logout",
    "html_url": "https://github.com/o/r/commit/eeeeeee5555"
  }
]"#;

const USERS: &str = r#"{
  "42": {"username": "octocat", "user_url": "https://github.com/octocat"}
}"#;

fn taglog_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::from_std(std::process::Command::new(env!("CARGO_BIN_EXE_taglog")));
    cmd.current_dir(dir.path())
        .env_remove("TAGLOG_BASE_URL")
        .env_remove("TAGLOG_RELEASE")
        .env_remove("RUST_LOG");
    cmd
}

fn setup_fixtures() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("commits.json"), COMMITS).unwrap();
    fs::write(dir.path().join("users.json"), USERS).unwrap();
    dir
}

fn path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

mod generate {
    use super::*;

    #[test]
    fn test_prints_grouped_changelog() {
        let dir = setup_fixtures();

        taglog_cmd(&dir)
            .args(["generate", "--release", "v2.0.0", "--commits", "commits.json"])
            .args(["--base-url", BASE_URL])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("## v2.0.0\n"))
            .stdout(predicate::str::contains("### Features"))
            .stdout(predicate::str::contains("### Bug Fixes"))
            .stdout(predicate::str::contains("### Chores"))
            .stdout(predicate::str::contains(
                "add OAuth login ([#42](https://github.com/o/r/issues/42))",
            ))
            .stdout(predicate::str::contains("Merge branch").not());
    }

    #[test]
    fn test_exclude_types_flag() {
        let dir = setup_fixtures();

        let output = taglog_cmd(&dir)
            .args(["generate", "--release", "v2.0.0", "--commits", "commits.json"])
            .args(["--exclude-types", "chore"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let changelog = String::from_utf8(output).unwrap();
        assert!(!changelog.contains("Chores"));
        assert!(!changelog.contains("bump dependencies"));

        let features: Vec<_> = changelog
            .split("### Features\n\n")
            .nth(1)
            .unwrap()
            .lines()
            .take_while(|line| !line.is_empty())
            .collect();
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_submitter_attribution() {
        let dir = setup_fixtures();

        taglog_cmd(&dir)
            .args(["generate", "--release", "v2.0.0", "--commits", "commits.json"])
            .args(["--users", "users.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "by [@octocat](https://github.com/octocat)",
            ))
            .stdout(predicate::str::contains("merge-bot").not())
            .stdout(predicate::str::contains("by [@alice](https://github.com/alice)"));
    }

    #[test]
    fn test_breaking_changes() {
        let dir = setup_fixtures();

        taglog_cmd(&dir)
            .args(["generate", "--release", "v2.0.0", "--commits", "commits.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "- **BREAKING:** drop legacy token field",
            ))
            .stdout(predicate::str::contains(
                "### BREAKING CHANGES\n\n- tokens issued before 1.0 are rejected\n",
            ));
    }

    #[test]
    fn test_writes_output_files() {
        let dir = setup_fixtures();

        taglog_cmd(&dir)
            .args(["generate", "--release", "v2.0.0", "--commits", "commits.json"])
            .args(["--date", "2024-05-01"])
            .args(["--changelog-out", "CHANGELOG.md", "--changes-out", "changes.txt"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let changelog = fs::read_to_string(path(&dir, "CHANGELOG.md")).unwrap();
        assert!(changelog.starts_with("## v2.0.0 - 2024-05-01\n"));

        let changes = fs::read_to_string(path(&dir, "changes.txt")).unwrap();
        assert_eq!(changes.lines().count(), 4);
        assert!(!changes.contains("###"));
    }

    #[test]
    fn test_nothing_eligible_prints_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(
            path(&dir, "commits.json"),
            r#"[{"sha": "a1", "message": "Merge branch 'x'"}, {"sha": "b2", "message": "wip: later"}]"#,
        )
        .unwrap();

        taglog_cmd(&dir)
            .args(["generate", "--release", "v1.0.0", "--commits", "commits.json"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("no eligible commits"));
    }

    #[test]
    fn test_uses_config_from_current_directory() {
        let dir = setup_fixtures();
        fs::write(
            path(&dir, "taglog.toml"),
            r#"
[changelog]
exclude_types = ["chore", "fix"]
commit_template = "* {description}"

[changelog.headings]
feat = "Added"
"#,
        )
        .unwrap();

        taglog_cmd(&dir)
            .args(["generate", "--release", "v2.0.0", "--commits", "commits.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("### Added\n\n* add OAuth login (#42)\n* add logout\n"))
            .stdout(predicate::str::contains("drop legacy token field").not());
    }

    #[test]
    fn test_missing_commits_file() {
        let dir = TempDir::new().unwrap();

        taglog_cmd(&dir)
            .args(["generate", "--release", "v1.0.0", "--commits", "missing.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read"));
    }

    #[test]
    fn test_invalid_config_fails() {
        let dir = setup_fixtures();
        fs::write(path(&dir, "taglog.toml"), "[changelog]\nexclude_types = [\"nope\"]\n").unwrap();

        taglog_cmd(&dir)
            .args(["generate", "--release", "v1.0.0", "--commits", "commits.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("taglog.toml"));
    }

    #[test]
    fn test_empty_exclude_types_keeps_configured_list() {
        let dir = setup_fixtures();
        fs::write(
            path(&dir, "taglog.toml"),
            "[changelog]\nexclude_types = [\"chore\"]\n",
        )
        .unwrap();

        taglog_cmd(&dir)
            .args(["generate", "--release", "v2.0.0", "--commits", "commits.json"])
            .args(["--exclude-types", ""])
            .assert()
            .success()
            .stdout(predicate::str::contains("### Features"))
            .stdout(predicate::str::contains("bump dependencies").not());
    }

    #[test]
    fn test_unknown_exclude_type_is_rejected() {
        let dir = setup_fixtures();

        taglog_cmd(&dir)
            .args(["generate", "--release", "v1.0.0", "--commits", "commits.json"])
            .args(["--exclude-types", "chore,nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown commit type: nope"));
    }
}

mod parse {
    use super::*;

    #[test]
    fn test_prints_parsed_commit() {
        let dir = TempDir::new().unwrap();

        taglog_cmd(&dir)
            .args(["parse", "feat(auth): add OAuth login (#42)", "--base-url", BASE_URL])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""outcome": "included""#))
            .stdout(predicate::str::contains(r#""type": "feat""#))
            .stdout(predicate::str::contains(r#""scope": "auth""#))
            .stdout(predicate::str::contains(r#""breaking": false"#))
            .stdout(predicate::str::contains(r#""pr": 42"#))
            .stdout(predicate::str::contains(
                "add OAuth login ([#42](https://github.com/o/r/issues/42))",
            ));
    }

    #[test]
    fn test_resolves_submitter() {
        let dir = setup_fixtures();

        taglog_cmd(&dir)
            .args(["parse", "fix: crash (#42)", "--users", "users.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""username": "octocat""#));
    }

    #[test]
    fn test_prints_skip_reason() {
        let dir = TempDir::new().unwrap();

        taglog_cmd(&dir)
            .args(["parse", "Merge branch 'main' into feature"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""outcome": "skipped""#))
            .stdout(predicate::str::contains(r#""reason": "merge""#));
    }
}

mod init {
    use super::*;

    #[test]
    fn test_writes_default_config() {
        let dir = TempDir::new().unwrap();

        taglog_cmd(&dir)
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created taglog.toml"));

        let content = fs::read_to_string(path(&dir, "taglog.toml")).unwrap();
        assert!(content.contains("[changelog]"));
        assert!(content.contains("commit_template"));
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        fs::write(path(&dir, "taglog.toml"), "# mine\n").unwrap();

        taglog_cmd(&dir)
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
        assert_eq!(
            fs::read_to_string(path(&dir, "taglog.toml")).unwrap(),
            "# mine\n"
        );

        taglog_cmd(&dir).args(["init", "--force"]).assert().success();
        assert!(
            fs::read_to_string(path(&dir, "taglog.toml"))
                .unwrap()
                .contains("[changelog]")
        );
    }

    #[test]
    fn test_written_config_is_loadable() {
        let dir = setup_fixtures();

        taglog_cmd(&dir).arg("init").assert().success();
        taglog_cmd(&dir)
            .args(["generate", "--release", "v2.0.0", "--commits", "commits.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("### Features"));
    }
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();

    taglog_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("init"));
}
