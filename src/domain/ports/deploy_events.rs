//! Deploy Event Port
//!
//! Provides an observable interface for the deployment pipeline.
//! Enables progress reporting, JSON event streams, and debugging.
//! Sinks only observe; nothing in the pipeline waits on them.

use std::fmt;

use serde::Serialize;

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Init,
    Authenticated,
    ImageReady,
    DescriptorWritten,
    RemoteDirectoryReady,
    Transferred,
    RemoteActivated,
    RecordPersisted,
    Done,
}

impl Stage {
    /// Every stage a run passes through after `Init`
    pub const PIPELINE: [Stage; 7] = [
        Stage::Authenticated,
        Stage::ImageReady,
        Stage::DescriptorWritten,
        Stage::RemoteDirectoryReady,
        Stage::Transferred,
        Stage::RemoteActivated,
        Stage::RecordPersisted,
    ];

    /// Progress line shown while the stage is running
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Init => "Preparing deployment",
            Stage::Authenticated => "Logging into VPS",
            Stage::ImageReady => "Building and publishing image",
            Stage::DescriptorWritten => "Writing compose file",
            Stage::RemoteDirectoryReady => "Preparing remote directory",
            Stage::Transferred => "Copying files to VPS",
            Stage::RemoteActivated => "Starting containers",
            Stage::RecordPersisted => "Saving deployment record",
            Stage::Done => "Done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Event emitted during a deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        app: String,
        /// "primary" or "preview <hash>"
        kind: String,
        host: String,
    },

    /// A stage began running
    StageStarted { stage: Stage },

    /// A stage finished successfully
    StageCompleted { stage: Stage },

    /// A stage failed; the pipeline stops after this event
    StageFailed { stage: Stage, error: String },

    /// Non-fatal notice (e.g. env file changed since the last deploy)
    Warning { message: String },

    /// Deploy completed
    Completed { url: String },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Spinner per stage in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants per-stage events
    ///
    /// Some sinks (like CI) may only want summary events.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: Arc<Mutex<Vec<DeployEvent>>>,
    }

    impl RecordingEventSink {
        fn new() -> (Self, Arc<Mutex<Vec<DeployEvent>>>) {
            let events = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    events: events.clone(),
                },
                events,
            )
        }
    }

    impl DeployEventSink for RecordingEventSink {
        fn on_event(&self, event: DeployEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let (sink, events) = RecordingEventSink::new();

        sink.on_event(DeployEvent::Started {
            app: "shop".to_string(),
            kind: "primary".to_string(),
            host: "shop.example.com".to_string(),
        });

        sink.on_event(DeployEvent::StageStarted {
            stage: Stage::Authenticated,
        });

        let recorded = events.lock().unwrap();
        assert_eq!(recorded.len(), 2);
    }

    #[test]
    fn noop_sink_wants_no_details() {
        let sink = NoopEventSink;
        assert!(!sink.wants_detailed_events());
    }

    #[test]
    fn pipeline_stages_are_in_order() {
        let mut sorted = Stage::PIPELINE;
        sorted.sort();
        assert_eq!(sorted, Stage::PIPELINE);
        assert!(Stage::Init < Stage::PIPELINE[0]);
        assert!(Stage::PIPELINE[6] < Stage::Done);
    }

    #[test]
    fn stage_serializes_as_snake_case() {
        let json = serde_json::to_string(&Stage::RemoteDirectoryReady).unwrap();
        assert_eq!(json, "\"remote_directory_ready\"");
    }
}
