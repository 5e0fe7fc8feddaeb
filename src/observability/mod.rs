//! Tracing with OTLP-JSON file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → RotatingWriter
//! ```
//!
//! Spans land in `~/.local/share/zellij/zcatalog/zcatalog-otlp.json`, one OTLP
//! document per line. The file rotates at 10 MB and keeps three numbered
//! backups. The filter comes from the `trace_level` plugin option and
//! defaults to `info`.

mod exporter;
mod init;
mod rotating;

pub use exporter::{create_tracer_provider, FileSpanExporter};
pub use init::init_tracing;
pub use rotating::{RotatingWriter, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
