/*!
 * Monitoring
 * Structured tracing for simulator commands
 */

mod tracer;

pub use tracer::{init_tracing, span_command, CommandSpan};
