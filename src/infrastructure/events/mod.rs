//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink lives in the binary's UI layer

mod json;

pub use json::JsonEventSink;
