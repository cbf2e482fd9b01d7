//! Intake Boundary Layer
//!
//! This crate provides the in-process boundary around the decision core:
//! ingest of loosely-shaped extraction JSON on the way in, and the
//! standard output and decision export documents on the way out.
//!
//! # Architecture
//!
//! - **Ingest**: markdown-fence stripping and lenient JSON parsing
//! - **Output**: the standard output and the full decision export
//! - **Config**: environment-backed settings for the CLI binary
//!
//! # Example
//!
//! ```rust
//! use interface_export::{ingest, output::StandardOutput};
//!
//! let doc = ingest::parse_claim(r#"{"policy": {"number": "POL-7"}}"#)?;
//! let output = StandardOutput::from_document(&doc);
//! assert_eq!(output.missing_fields.len(), 18);
//! # Ok::<(), interface_export::ingest::IngestError>(())
//! ```

pub mod config;
pub mod ingest;
pub mod output;

pub use config::IntakeConfig;
pub use ingest::{claim_from_value, parse_claim, strip_code_fence, IngestError};
pub use output::{DecisionExport, StandardOutput};
