//! External wake-on-LAN utility invocation

use std::io;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use super::error::StartupError;

/// Captured result of one utility run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

impl From<std::process::Output> for CommandOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Sends a magic packet for `mac` to `broadcast_address`
///
/// Implementations must be cancel-safe: dropping the returned future
/// (as the dispatcher does on timeout) has to stop any work in flight.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, broadcast_address: &str, mac: &str) -> io::Result<CommandOutput>;
}

/// Runs the real utility as `<program> -i <broadcast> <mac>`
#[derive(Debug, Clone)]
pub struct SystemCommandRunner {
    program: String,
}

impl SystemCommandRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check that the utility can be launched at all
    ///
    /// Runs it once without arguments; its exit status is ignored since
    /// most implementations print usage and exit nonzero. A run that
    /// outlives `timeout` still counts as present.
    pub async fn probe(&self, timeout: Duration) -> Result<(), StartupError> {
        let child = Command::new(&self.program)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(timeout, child).await {
            Ok(Ok(_)) | Err(_) => Ok(()),
            Ok(Err(e)) if e.kind() == io::ErrorKind::NotFound => Err(StartupError::ToolNotFound {
                command: self.program.clone(),
            }),
            Ok(Err(e)) => Err(StartupError::ToolProbe {
                command: self.program.clone(),
                source: e,
            }),
        }
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, broadcast_address: &str, mac: &str) -> io::Result<CommandOutput> {
        // kill_on_drop: a timed-out dispatch drops this future and the child with it
        let output = Command::new(&self.program)
            .arg("-i")
            .arg(broadcast_address)
            .arg(mac)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        Ok(CommandOutput::from(output))
    }
}
