use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_remote-sweep");

struct Workspace {
    temp_dir: TempDir,
    remote: PathBuf,
    clone: PathBuf,
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn setup_workspace() -> Workspace {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let remote = temp_dir.path().join("remote.git");
    let clone = temp_dir.path().join("work");
    let remote_str = remote.to_string_lossy().to_string();

    git(temp_dir.path(), &["init", "--bare", "--initial-branch=main", &remote_str]);
    fs::create_dir_all(&clone).unwrap();
    git(&clone, &["init", "--initial-branch=main"]);
    git(&clone, &["config", "user.name", "Test User"]);
    git(&clone, &["config", "user.email", "test@example.com"]);
    git(&clone, &["config", "commit.gpgsign", "false"]);
    fs::write(clone.join("README.md"), "# Test Repository").unwrap();
    git(&clone, &["add", "README.md"]);
    git(&clone, &["commit", "-m", "Initial commit"]);
    git(&clone, &["remote", "add", "origin", &remote_str]);
    git(&clone, &["push", "origin", "main"]);
    git(&clone, &["branch", "feature-x"]);
    git(&clone, &["push", "origin", "feature-x"]);
    git(&clone, &["fetch", "origin"]);

    Workspace {
        temp_dir,
        remote,
        clone,
    }
}

impl Workspace {
    /// Writes an executable selector script and a config file pointing at it.
    #[cfg(unix)]
    fn configure_selector(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.temp_dir.path().join("selector.sh");
        fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let config = self.temp_dir.path().join("config.json");
        let json = serde_json::json!({
            "selector": { "command": script.to_string_lossy() }
        });
        fs::write(&config, json.to_string()).unwrap();
        config
    }

    fn remote_heads(&self) -> String {
        git(&self.remote, &["branch", "--list"])
    }
}

fn sweep(dir: &Path, config: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .current_dir(dir)
        .args(args)
        .env("REMOTE_SWEEP_CONFIG", config)
        .env("LANG", "C")
        .env("GIT_PAGER", "cat")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run remote-sweep")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_help_in_both_languages() {
    let workspace = setup_workspace();
    let config = workspace.temp_dir.path().join("absent.json");

    let english = sweep(&workspace.clone, &config, &["-help"]);
    assert_eq!(english.status.code(), Some(0));
    assert!(stdout(&english).starts_with("Usage: remote-sweep"));

    let japanese = sweep(&workspace.clone, &config, &["-lang", "ja", "--help"]);
    assert_eq!(japanese.status.code(), Some(0));
    assert!(stdout(&japanese).starts_with("使い方"));
}

#[cfg(unix)]
#[test]
fn test_non_interactive_run_declines_deletion() {
    let workspace = setup_workspace();
    let config = workspace.configure_selector("grep feature-x");

    let output = sweep(&workspace.clone, &config, &[]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let printed = stdout(&output);
    assert!(printed.contains("The following remote branches will be deleted:"));
    assert!(printed.contains("feature-x"));
    assert!(printed.contains("Deletion cancelled."));
    assert!(workspace.remote_heads().contains("feature-x"));
}

#[cfg(unix)]
#[test]
fn test_selector_cancel_exits_cleanly() {
    let workspace = setup_workspace();
    let config = workspace.configure_selector("cat > /dev/null; exit 130");

    let output = sweep(&workspace.clone, &config, &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Deletion cancelled."));
    assert!(workspace.remote_heads().contains("feature-x"));
}

#[cfg(unix)]
#[test]
fn test_protected_only_selection_reports_skip() {
    let workspace = setup_workspace();
    let config = workspace.configure_selector("grep origin/main");

    let output = sweep(&workspace.clone, &config, &[]);

    assert_eq!(output.status.code(), Some(0));
    let printed = stdout(&output);
    assert!(printed.contains("Skipping protected branch: origin/main"));
    assert!(printed.contains("No branches selected."));
    assert!(workspace.remote_heads().contains("main"));
}

#[cfg(unix)]
#[test]
fn test_outside_repository_fails_with_listing_error() {
    let workspace = setup_workspace();
    let config = workspace.configure_selector("cat");
    let not_a_repo = TempDir::new().unwrap();

    let output = sweep(not_a_repo.path(), &config, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error getting remote branches"));
}

#[test]
fn test_missing_selector_prints_install_hint() {
    let workspace = setup_workspace();
    let config = workspace.temp_dir.path().join("absent.json");
    let empty_path = TempDir::new().unwrap();

    let output = Command::new(BIN)
        .current_dir(&workspace.clone)
        .env("REMOTE_SWEEP_CONFIG", &config)
        .env("LANG", "C")
        .env("PATH", empty_path.path())
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run remote-sweep");

    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    assert!(message.contains("fzf is not installed"));
    assert!(message.contains("https://github.com/junegunn/fzf"));
}

#[test]
fn test_preview_prints_commit_summary() {
    let workspace = setup_workspace();
    let config = workspace.temp_dir.path().join("absent.json");

    let output = sweep(
        &workspace.clone,
        &config,
        &["-get-remote-log", "\x1b[32morigin/feature-x (merged)\x1b[0m"],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let printed = stdout(&output);
    assert!(printed.contains("Test User"));
    assert!(printed.contains("Initial commit"));
}

#[test]
fn test_preview_survives_broken_config() {
    let workspace = setup_workspace();
    let config = workspace.temp_dir.path().join("broken.json");
    fs::write(&config, "{ not json").unwrap();

    let output = sweep(&workspace.clone, &config, &["--get-remote-log", "origin/feature-x"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Initial commit"));
}
