use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;

use crate::llm::provider::InferenceProvider;
use crate::models::InferenceOutcome;

/// Runs a local Ollama model as a child process. The prompt goes in via
/// stdin, the recommendation comes back on stdout, and the whole invocation
/// is bounded by a hard timeout after which the child is killed and reaped.
pub struct OllamaRunner {
    program: String,
    model: String,
    timeout: Duration,
}

impl OllamaRunner {
    pub fn new(model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: "ollama".to_string(),
            model: model.into(),
            timeout,
        }
    }

    fn command(&self) -> Command {
        // Argument list is built structurally; the model name is a single
        // argv entry and is never re-tokenized.
        let mut command = Command::new(&self.program);
        command.arg("run").arg(&self.model);
        command
    }
}

#[async_trait]
impl InferenceProvider for OllamaRunner {
    async fn generate(&self, prompt: &str) -> InferenceOutcome {
        tracing::debug!("Invoking model {} (timeout {:?})", self.model, self.timeout);
        let outcome = run_bounded(self.command(), prompt, self.timeout).await;
        if let InferenceOutcome::Degraded(reason) = &outcome {
            tracing::warn!("Inference degraded: {}", reason);
        }
        outcome
    }

    fn name(&self) -> &str {
        "Ollama"
    }
}

/// Spawns `command`, feeds it `prompt` on stdin and waits up to `timeout`
/// for completion. Every fault maps to a distinct `Degraded` reason:
/// nonzero exit, empty output, timeout (child killed and reaped) or a
/// launch/IO fault.
pub async fn run_bounded(
    mut command: Command,
    prompt: &str,
    timeout: Duration,
) -> InferenceOutcome {
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            return InferenceOutcome::Degraded(format!("failed to launch inference process: {e}"))
        }
    };

    let mut stdin = child.stdin.take();
    let mut stdout = child.stdout.take();

    // Writing the prompt happens inside the timed section too: a child that
    // never reads stdin must not stall the caller past the bound.
    let collect = async {
        if let Some(mut stdin) = stdin.take() {
            let _ = stdin.write_all(prompt.as_bytes()).await;
            // Dropping stdin closes the pipe so the model sees end of input.
        }

        let mut output = Vec::new();
        if let Some(stdout) = stdout.as_mut() {
            let _ = stdout.read_to_end(&mut output).await;
        }

        let status = child.wait().await;
        (status, output)
    };

    match tokio::time::timeout(timeout, collect).await {
        Ok((Ok(status), output)) => {
            if !status.success() {
                return InferenceOutcome::Degraded("generation failed".to_string());
            }

            let text = String::from_utf8_lossy(&output).trim().to_string();
            if text.is_empty() {
                InferenceOutcome::Degraded("empty response".to_string())
            } else {
                InferenceOutcome::Text(text)
            }
        }
        Ok((Err(e), _)) => {
            InferenceOutcome::Degraded(format!("failed to wait for inference process: {e}"))
        }
        Err(_) => {
            // kill() also reaps the child, so nothing is left running.
            if let Err(e) = child.kill().await {
                tracing::warn!("Failed to kill timed-out inference process: {}", e);
            }
            InferenceOutcome::Degraded("timed out".to_string())
        }
    }
}
