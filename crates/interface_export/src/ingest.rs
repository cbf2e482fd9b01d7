//! Extraction-output ingest
//!
//! Converts loosely-shaped JSON from the upstream extraction collaborator
//! into an `FnolDocument`. Language-model replies often arrive wrapped in
//! a markdown code fence and take liberties with scalar formats; this
//! module strips the fence and lets the document model's lenient scalar
//! parsers absorb the rest. Only malformed JSON itself is an error:
//! every recognizably-JSON payload produces a document.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use domain_fnol::FnolDocument;

/// Errors from the ingest boundary
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input carried no payload after trimming and fence stripping
    #[error("input is empty")]
    EmptyInput,

    /// Input was not valid JSON
    #[error("input is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Strips a wrapping markdown code fence, if present.
///
/// When the trimmed input opens with ``` the first line is dropped
/// (language tag included), and the final line is dropped when it is a
/// bare closing fence. Unfenced input passes through trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let body = match trimmed.split_once('\n') {
        Some((_, rest)) => rest,
        None => "",
    };
    if body.trim() == "```" {
        return "";
    }
    match body.rsplit_once('\n') {
        Some((init, last)) if last.trim() == "```" => init,
        _ => body,
    }
}

/// Parses raw extraction output into a document.
///
/// Accepts plain JSON or JSON wrapped in a markdown code fence. Partial
/// documents are fine; scalar fields the document model cannot parse
/// read as absent rather than failing the ingest.
#[instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_claim(input: &str) -> Result<FnolDocument, IngestError> {
    let payload = strip_code_fence(input);
    if payload.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let doc: FnolDocument = serde_json::from_str(payload)?;
    debug!("claim payload ingested");
    Ok(doc)
}

/// Builds a document from an already-parsed JSON value.
pub fn claim_from_value(value: Value) -> Result<FnolDocument, IngestError> {
    Ok(serde_json::from_value(value)?)
}
