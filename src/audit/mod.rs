//! Evaluation history log
//!
//! Records every evaluation the CLI runs in an append-only audit log, so a
//! user can look back at how their figures and suggestions changed.
//!
//! - `AuditEntry`: one evaluation with timestamp, source, input and result.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON
//!   (JSONL) and reads them back.
//!
//! The evaluator never writes here; callers decide whether to record.

mod entry;
mod logger;

pub use entry::{AuditEntry, EvaluationSource};
pub use logger::AuditLogger;
