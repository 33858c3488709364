// Test doubles for the external utility

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::runner::{CommandOutput, CommandRunner};

/// What the fake utility does when invoked
pub enum Behavior {
    Exit { code: i32, stderr: &'static str },
    /// Succeed after the given delay
    Slow(Duration),
    Hang,
    SpawnError,
}

/// Stand-in for the external utility that counts invocations
pub struct FakeRunner {
    behavior: Behavior,
    calls: AtomicUsize,
    pub last_args: Mutex<Option<(String, String)>>,
}

impl FakeRunner {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_args: Mutex::new(None),
        })
    }

    pub fn succeeding() -> Arc<Self> {
        Self::new(Behavior::Exit { code: 0, stderr: "" })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, broadcast_address: &str, mac: &str) -> io::Result<CommandOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_args.lock().unwrap() = Some((broadcast_address.to_string(), mac.to_string()));

        match &self.behavior {
            Behavior::Exit { code, stderr } => Ok(CommandOutput {
                code: Some(*code),
                stdout: String::new(),
                stderr: (*stderr).to_string(),
            }),
            Behavior::Slow(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(CommandOutput {
                    code: Some(0),
                    stdout: String::new(),
                    stderr: String::new(),
                })
            }
            Behavior::Hang => {
                futures_util::future::pending::<()>().await;
                unreachable!("pending future never resolves")
            }
            Behavior::SpawnError => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            )),
        }
    }
}
