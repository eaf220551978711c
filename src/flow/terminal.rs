// src/flow/terminal.rs
//! Scripted "processing" log shown while an upload is in flight. Its timing is fixed
//! and has nothing to do with how far the real request has got.

use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace};

use super::Cancellation;
use crate::config::TerminalConfig;
use crate::view::ViewState;

pub const TERMINAL_MESSAGES: [&str; 8] = [
    "Initializing secure environment...",
    "Reading document structure...",
    "Extracting entity data...",
    "Parsing employment history...",
    "Identifying skill keywords...",
    "Matching target role requirements...",
    "Calculating ATS compatibility...",
    "Compiling final report...",
];

#[derive(Debug, Clone)]
pub struct TerminalAnimation {
    messages: Vec<String>,
    line_speed: Duration,
    buffer: Duration,
}

impl Default for TerminalAnimation {
    fn default() -> Self {
        Self::new(&TerminalConfig::default())
    }
}

impl TerminalAnimation {
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            messages: TERMINAL_MESSAGES.iter().map(|m| m.to_string()).collect(),
            line_speed: config.line_speed(),
            buffer: config.buffer(),
        }
    }

    pub fn with_messages(mut self, messages: Vec<String>) -> Self {
        self.messages = messages;
        self
    }

    /// Time from play start until `play` returns, independent of anything else
    pub fn total_duration(&self) -> Duration {
        self.line_speed * self.messages.len() as u32 + self.buffer
    }

    /// Offset of line `index` from play start
    pub fn line_offset(&self, index: usize) -> Duration {
        self.line_speed * index as u32
    }

    /// Reveal each line on schedule, then wait out the buffer.
    /// Lines are appended to whatever the log already shows.
    pub async fn play(&self, view: &mut ViewState, cancel: &Cancellation) {
        let start = Instant::now();
        let total = self.messages.len();
        debug!("Playing terminal animation: {} lines over {:?}", total, self.total_duration());

        for (index, message) in self.messages.iter().enumerate() {
            if !Self::wait_until(start + self.line_offset(index), cancel).await {
                debug!("Terminal animation cancelled after {} lines", index);
                return;
            }
            view.append_terminal_line(format!("> {}", message));
            view.set_progress((index + 1) as f64 / total as f64 * 100.0);
            trace!("terminal line {}/{}: {}", index + 1, total, message);
        }

        Self::wait_until(start + self.total_duration(), cancel).await;
    }

    async fn wait_until(deadline: Instant, cancel: &Cancellation) -> bool {
        tokio::select! {
            _ = sleep_until(deadline) => true,
            _ = cancel.cancelled() => false,
        }
    }
}
