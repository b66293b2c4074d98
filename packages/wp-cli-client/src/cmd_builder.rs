//! Command builder for running WP-CLI processes

use std::process::Stdio;

use tokio::process::Command;

use crate::error::{Result, WpCliError};

/// Fluent builder for a single external process invocation
#[derive(Debug, Default, Clone)]
pub struct CmdBuilder {
    program: String,
    args: Vec<String>,
}

impl CmdBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Rendered for logs: program followed by its arguments.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Run to completion and capture output. A non-zero exit is not an error here;
    /// callers inspect `CmdOutput::success`.
    pub async fn run_capture(&self) -> Result<CmdOutput> {
        let mut cmd = self.build_command();
        // WP-CLI prompts on some commands; never let it wait on our stdin
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        tracing::debug!(command = %self.display(), "running");

        let output = cmd.output().await.map_err(|source| WpCliError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        Ok(CmdOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Output from a captured command execution
#[derive(Debug, Clone)]
pub struct CmdOutput {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CmdOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn stdout_string(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    pub fn stderr_string(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }

    /// Convert a failed run into a `WpCliError::Command` carrying WP-CLI's own message.
    pub fn into_error(self) -> WpCliError {
        let message = error_message(&self.stderr_string(), &self.stdout_string(), self.code);
        WpCliError::Command {
            code: self.code,
            message,
        }
    }
}

/// Reduce WP-CLI's stderr to the text of its `Error:` lines.
///
/// Falls back to the whole trimmed stderr, then stdout, then a generic exit message.
pub fn error_message(stderr: &str, stdout: &str, code: Option<i32>) -> String {
    let errors: Vec<&str> = stderr
        .lines()
        .filter_map(|l| l.trim().strip_prefix("Error:"))
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if !errors.is_empty() {
        return errors.join(" ");
    }

    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    let stdout = stdout.trim();
    if !stdout.is_empty() {
        return stdout.to_string();
    }
    match code {
        Some(code) => format!("wp exited with code {code}"),
        None => "wp was terminated by a signal".to_string(),
    }
}
