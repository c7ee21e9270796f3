//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let command = self.command;
        let json = match event {
            DeployEvent::Started { app, kind, host } => serde_json::json!({
                "event": "start",
                "command": command,
                "app": app,
                "kind": kind,
                "host": host,
            }),

            DeployEvent::StageStarted { stage } => serde_json::json!({
                "event": "stage_start",
                "command": command,
                "stage": stage,
                "label": stage.label(),
            }),

            DeployEvent::StageCompleted { stage } => serde_json::json!({
                "event": "stage_complete",
                "command": command,
                "stage": stage,
            }),

            DeployEvent::StageFailed { stage, error } => serde_json::json!({
                "event": "stage_failed",
                "command": command,
                "stage": stage,
                "error": error,
            }),

            DeployEvent::Warning { message } => serde_json::json!({
                "event": "warning",
                "command": command,
                "message": message,
            }),

            DeployEvent::Completed { url } => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": "success",
                "url": url,
            }),
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
