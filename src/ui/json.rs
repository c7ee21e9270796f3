//! NDJSON output helpers

use std::io::{self, Write};

use tracing::warn;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Emit to stdout where the caller is already failing or only warning
pub fn emit_or_log(event: serde_json::Value) {
    emit_or_log_to(&mut io::stdout().lock(), &event);
}

fn emit_or_log_to(out: &mut impl Write, event: &serde_json::Value) -> bool {
    match write_event(out, event) {
        Ok(()) => true,
        Err(err) => {
            let kind = &event["event"];
            warn!(error = %err, event = %kind, "Failed to write JSON event");
            false
        }
    }
}
