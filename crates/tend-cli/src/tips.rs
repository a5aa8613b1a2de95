//! Tip generation through a user-configured shell command.
//!
//! The store only knows the [`TipGenerator`] seam; this module plugs a
//! shell command into it. The command receives the prompt on stdin and
//! is expected to print a markdown tip on stdout, which makes any
//! local LLM wrapper or API script usable without code changes.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Context;
use async_trait::async_trait;
use tend_core::TipGenerator;

/// Generates tips by piping the prompt through `sh -c <command>`.
pub struct CommandTipGenerator {
    command: String,
}

impl CommandTipGenerator {
    pub fn new(command: String) -> Self {
        Self { command }
    }
}

#[async_trait]
impl TipGenerator for CommandTipGenerator {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let command = self.command.clone();
        let prompt = prompt.to_string();

        // The child blocks on stdin/stdout, so run it off the async
        // executor.
        let output = tokio::task::spawn_blocking(move || {
            let mut child = Command::new("sh")
                .arg("-c")
                .arg(&command)
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .spawn()
                .context("Failed to spawn tip command")?;

            if let Some(stdin) = child.stdin.as_mut() {
                // A command may exit without reading stdin (e.g. a
                // fixed `echo` tip); the resulting broken pipe is not
                // a generation failure.
                match stdin.write_all(prompt.as_bytes()) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                    Err(e) => {
                        return Err(e).context("Failed to write prompt to tip command");
                    }
                }
            }

            let output = child
                .wait_with_output()
                .context("Failed to wait for tip command")?;
            if !output.status.success() {
                anyhow::bail!("Tip command exited with {}", output.status);
            }
            String::from_utf8(output.stdout).context("Tip command produced invalid UTF-8")
        })
        .await
        .context("Tip command task failed")??;

        let tip = output.trim().to_string();
        if tip.is_empty() {
            anyhow::bail!("Tip command produced no output");
        }
        Ok(tip)
    }
}
