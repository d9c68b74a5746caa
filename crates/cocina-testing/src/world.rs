//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `cocina` binary.
///
/// # Example
/// ```no_run
/// use cocina_testing::TestWorld;
///
/// let world = TestWorld::new().as_user("alice");
/// world.run(&["add", "--title", "Migas"]).unwrap();
/// let result = world.run_json(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    user: Option<String>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with user `tester`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".cocina");

        Self {
            temp_dir,
            data_dir,
            user: Some("tester".to_string()),
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Act as `user` for subsequent commands.
    pub fn as_user(mut self, user: &str) -> Self {
        self.user = Some(user.to_string());
        self
    }

    /// Do not pass `--user`; the CLI falls back to config and `$USER`.
    pub fn without_user(mut self) -> Self {
        self.user = None;
        self
    }

    pub fn set_user(&mut self, user: &str) {
        self.user = Some(user.to_string());
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a file under the temp root and return its path.
    pub fn write_file(&self, name: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        if let Some(user) = &self.user {
            cmd.arg("--user").arg(user);
        }

        cmd.current_dir(self.temp_dir.path())
            .env_remove("RUST_LOG")
            .env_remove("COCINA_PATH")
            .env("NO_COLOR", "1");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    #[allow(deprecated)]
    fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("cocina")
            .map_err(|e| anyhow::anyhow!("Failed to find cocina binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Execute the binary with `args` and capture its output.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args);
        CliResult::from_output(cmd.output()?)
    }

    /// Same as [`TestWorld::run`] with `--format json`.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.arg("--format").arg("json").args(args);
        CliResult::from_output(cmd.output()?)
    }

    /// Execute with `input` piped to stdin (for `browse`).
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args).write_stdin(input.to_string());
        CliResult::from_output(cmd.output()?)
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    fn from_output(output: std::process::Output) -> Result<Self> {
        Ok(Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
