//! CLI integration tests for frame-cache

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_frame-cache"))
}

fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run binary")
}

/// Create a cache directory holding the given files
fn create_cache_dir(root: &Path, files: &[&str]) -> PathBuf {
    let dir = root.join(".pd_cache");
    fs::create_dir(&dir).unwrap();
    for name in files {
        fs::write(dir.join(name), b"payload").unwrap();
    }
    dir
}

mod cli_behavior {
    use super::*;

    #[test]
    fn test_help_flag() {
        let temp = TempDir::new().unwrap();
        let output = run(temp.path(), &["--help"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("list"));
        assert!(stdout.contains("clear"));
        assert!(stdout.contains("--cache-dir"));
    }

    #[test]
    fn test_missing_directory_exit_code() {
        let temp = TempDir::new().unwrap();
        let output = run(temp.path(), &["clear"]);

        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("does not exist"));
    }
}

mod listing {
    use super::*;

    #[test]
    fn test_list_default_directory() {
        let temp = TempDir::new().unwrap();
        create_cache_dir(temp.path(), &["sales_0a1b2c.pkl", "readme.txt"]);

        let output = run(temp.path(), &["list"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("sales"));
        assert!(stdout.contains("0a1b2c"));
        assert!(!stdout.contains("readme.txt"));
    }

    #[test]
    fn test_list_json() {
        let temp = TempDir::new().unwrap();
        let dir = create_cache_dir(temp.path(), &["b_bbbbbb.pkl", "a_aaaaaa.pkl"]);

        let output = run(
            temp.path(),
            &["list", "--json", "--cache-dir", dir.to_str().unwrap()],
        );

        assert!(output.status.success());
        let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let entries = entries.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["function_name"], "a");
        assert_eq!(entries[0]["fingerprint"], "aaaaaa");
        assert_eq!(entries[1]["size"], 7);
    }
}

mod clearing {
    use super::*;

    #[test]
    fn test_clear_removes_entries() {
        let temp = TempDir::new().unwrap();
        let dir = create_cache_dir(temp.path(), &["x_aaaaaa.pkl", "y_bbbbbb.pkl", "keep.csv"]);

        let output = run(temp.path(), &["clear"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Removed 2 cached entries"));
        let remaining: Vec<_> = fs::read_dir(&dir).unwrap().filter_map(|e| e.ok()).collect();
        assert_eq!(remaining.len(), 1);
        assert!(dir.join("keep.csv").exists());
    }

    #[test]
    fn test_clear_empty_directory() {
        let temp = TempDir::new().unwrap();
        create_cache_dir(temp.path(), &[]);

        let output = run(temp.path(), &["-q", "clear"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("No cached entries"));
    }
}
