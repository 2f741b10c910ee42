//! Three-way classification of a create-then-submit attempt.
//!
//! The document system answers both calls with `{"name": ..., "docstatus":
//! ...}` payloads (0 = draft, 1 = submitted). The resolver maps whatever
//! came back to exactly one of Success, Warning, or Error; the UI never
//! shows two at once.

use serde::{Deserialize, Serialize};

use crate::models::DocumentKind;

/// A document reference as the document system reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub name: String,
    pub docstatus: i32,
}

/// What the create-then-submit sequence produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionReply {
    /// Both calls returned; `submitted` carries the final docstatus.
    Submitted {
        created: DocumentRef,
        submitted: DocumentRef,
    },
    /// The document was created but no successful submit reply arrived.
    CreatedOnly { created: DocumentRef },
    /// A call failed outright. `created` is set when creation had already
    /// succeeded before the failure.
    Failed {
        reason: String,
        created: Option<DocumentRef>,
    },
}

/// The single outcome surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { reference: String, message: String },
    Warning { message: String },
    Error { message: String },
}

impl SubmissionOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Success { message, .. } => message,
            SubmissionOutcome::Warning { message } => message,
            SubmissionOutcome::Error { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }
}

/// Failure text that is recognized as benign and downgraded to a warning
/// instead of blocking the user.
fn is_benign_failure(reason: &str) -> bool {
    reason.to_lowercase().contains("currency")
}

fn has_known_prefix(kind: DocumentKind, name: &str) -> bool {
    kind.reference_prefixes()
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Classify a submission reply. Error signals win over success signals
/// unless the failure text matches a benign pattern, in which case the
/// outcome is downgraded to a retryable warning.
pub fn resolve_outcome(kind: DocumentKind, reply: &SubmissionReply) -> SubmissionOutcome {
    match reply {
        SubmissionReply::Failed { reason, .. } => {
            if is_benign_failure(reason) {
                SubmissionOutcome::Warning {
                    message: reason.clone(),
                }
            } else {
                SubmissionOutcome::Error {
                    message: reason.clone(),
                }
            }
        }
        SubmissionReply::CreatedOnly { created } => SubmissionOutcome::Warning {
            message: format!("Document {} was created but not submitted", created.name),
        },
        SubmissionReply::Submitted { submitted, .. } => {
            if submitted.docstatus == 1 && has_known_prefix(kind, &submitted.name) {
                SubmissionOutcome::Success {
                    reference: submitted.name.clone(),
                    message: format!("Submitted successfully as {}", submitted.name),
                }
            } else if submitted.docstatus == 1 {
                SubmissionOutcome::Warning {
                    message: format!(
                        "Submitted, but {} is not a recognized reference number",
                        submitted.name
                    ),
                }
            } else {
                SubmissionOutcome::Warning {
                    message: format!(
                        "Document {} was created but not submitted",
                        submitted.name
                    ),
                }
            }
        }
    }
}
