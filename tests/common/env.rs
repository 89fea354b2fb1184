//! Test environment builder for isolated metamodel CLI runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Variables the CLI reads; cleared so the host environment cannot leak in.
const METAMODEL_VARS: [&str; 7] = [
    "METAMODEL_LOG",
    "METAMODEL_MODEL_DIR",
    "METAMODEL_INTROSPECTION",
    "METAMODEL_LAYOUT_DIR",
    "METAMODEL_POST_FOR_DEFAULT",
    "METAMODEL_HOT_RELOAD",
    "NO_COLOR",
];

/// Result of running a metamodel CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parsed NDJSON lines of stdout
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON {l:?}: {e}")))
            .collect()
    }
}

/// Isolated project and home directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run the CLI from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    fn run_from_with_env(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_metamodel"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));
        for var in METAMODEL_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute metamodel");
        to_result(output)
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    project_config: Option<String>,
    model_files: Vec<(String, String)>,
    layout_files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    /// Content of `metamodel.toml`; without it no config file is written
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// Add a file under `model/`
    pub fn with_model(mut self, name: &str, content: &str) -> Self {
        self.model_files.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a file under `layouts/`
    pub fn with_layout(mut self, name: &str, content: &str) -> Self {
        self.layout_files.push((name.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        };
        std::fs::create_dir_all(env.project_path("model")).expect("Failed to create model dir");
        if let Some(config) = &self.project_config {
            env.write_project_file("metamodel.toml", config);
        }
        for (name, content) in &self.model_files {
            env.write_project_file(&format!("model/{}", name), content);
        }
        for (name, content) in &self.layout_files {
            env.write_project_file(&format!("layouts/{}", name), content);
        }
        env
    }
}
