/*!
 * Command Tracing
 * Structured tracing for shell commands using the tracing crate
 *
 * Features:
 * - Trace ID per command for log correlation
 * - Human-readable or JSON output on stderr
 * - Result and duration recorded when the span closes
 */

use std::time::Instant;
use tracing::{debug, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing.
///
/// `RUST_LOG` overrides `default_filter`. Logs go to stderr so rendered
/// output on stdout stays clean. Calling this more than once is harmless.
pub fn init_tracing(json: bool, default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!(json, "Structured tracing initialized");
    }
}

/// Generate a unique trace ID for command correlation
fn generate_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one shell command
pub struct CommandSpan {
    span: tracing::Span,
    start: Instant,
    command: String,
    trace_id: String,
}

impl CommandSpan {
    pub fn new(command: &str, line: usize) -> Self {
        let trace_id = generate_trace_id();

        let span = span!(
            Level::DEBUG,
            "command",
            trace_id = %trace_id,
            command = command,
            line = line,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            command: command.to_string(),
            trace_id,
        }
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Record the command result
    pub fn record_result(&self, success: bool) {
        self.span
            .record("result", if success { "success" } else { "error" });
    }

    /// Record an error
    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
    }

    /// Enter the span context so core logs inherit its fields
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for CommandSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);

        if duration.as_millis() > 100 {
            warn!(
                trace_id = %self.trace_id,
                command = %self.command,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow command detected"
            );
        }
    }
}

/// Helper to create a command span
#[inline]
pub fn span_command(command: &str, line: usize) -> CommandSpan {
    CommandSpan::new(command, line)
}
