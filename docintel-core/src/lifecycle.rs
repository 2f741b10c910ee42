//! Upload/process/submit lifecycle for a single document instance.
//!
//! One `DocumentSession` owns one document from "no file" to submitted or
//! failed. Transitions are driven by exactly four external events: file
//! selection, the extraction response, the submit action, and the
//! submission response. The two awaits (extraction, submission) are the
//! only suspension points; everything else is synchronous.

use async_trait::async_trait;

use crate::models::{DocumentKind, FormDocument};
use crate::outcome::{resolve_outcome, SubmissionOutcome, SubmissionReply};
use crate::validation::ValidationError;

/// Lifecycle states. `Submitted` is terminal; `Failed` allows re-editing,
/// which transitions back to `Populated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    Empty,
    Uploading,
    Processing,
    Populated,
    Validating,
    Submitting,
    Submitted,
    Failed,
}

impl DocumentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentState::Empty => "empty",
            DocumentState::Uploading => "uploading",
            DocumentState::Processing => "processing",
            DocumentState::Populated => "populated",
            DocumentState::Validating => "validating",
            DocumentState::Submitting => "submitting",
            DocumentState::Submitted => "submitted",
            DocumentState::Failed => "failed",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("Please select a valid PDF file")]
    InvalidFileType,

    #[error("extraction failed: {0}")]
    ExtractionFailed(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("a submission is already in progress")]
    SubmissionInFlight,

    #[error("no populated document to submit")]
    NotPopulated,

    #[error("the document is not editable in the {0} state")]
    NotEditable(&'static str),

    #[error("cannot upload in the {0} state")]
    UploadNotAllowed(&'static str),
}

/// The extraction collaborator: accepts the selected file and answers with
/// the raw extraction result for the session's document kind.
#[async_trait]
pub trait Extractor<D: FormDocument>: Send + Sync {
    async fn extract(&self, filename: &str, bytes: Vec<u8>) -> anyhow::Result<D::Extraction>;
}

/// The document-system collaborator: runs the create-then-submit sequence
/// and reports whatever came back. Transport failures are part of the
/// reply, not a Rust error, because the outcome resolver classifies them.
#[async_trait]
pub trait DocumentSink<D: FormDocument>: Send + Sync {
    async fn submit(&self, document: &D) -> SubmissionReply;
}

/// Company lookup used to prefill the invoice's read-only currency.
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    async fn default_currency(&self, company: &str) -> anyhow::Result<String>;
}

fn is_pdf_filename(filename: &str) -> bool {
    filename.to_ascii_lowercase().ends_with(".pdf") && filename.len() > ".pdf".len()
}

/// State machine for one document's upload → populate → submit life.
pub struct DocumentSession<D: FormDocument> {
    state: DocumentState,
    document: Option<D>,
}

impl<D: FormDocument> DocumentSession<D> {
    pub fn new() -> Self {
        Self {
            state: DocumentState::Empty,
            document: None,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        D::KIND
    }

    pub fn state(&self) -> DocumentState {
        self.state
    }

    pub fn document(&self) -> Option<&D> {
        self.document.as_ref()
    }

    /// File selection. Non-PDF selections are rejected without leaving
    /// `Empty`; an accepted file runs the extraction round-trip and
    /// bulk-populates the document from the result.
    pub async fn upload<E>(
        &mut self,
        extractor: &E,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), LifecycleError>
    where
        E: Extractor<D> + ?Sized,
    {
        if self.state != DocumentState::Empty {
            return Err(LifecycleError::UploadNotAllowed(self.state.as_str()));
        }
        if !is_pdf_filename(filename) {
            tracing::warn!(filename, "rejected non-PDF selection");
            return Err(LifecycleError::InvalidFileType);
        }

        self.state = DocumentState::Uploading;
        tracing::info!(filename, kind = D::KIND.as_str(), "uploading document");

        match extractor.extract(filename, bytes).await {
            Ok(result) => {
                self.state = DocumentState::Processing;
                self.document = Some(D::from_extraction(&result));
                self.state = DocumentState::Populated;
                tracing::info!(kind = D::KIND.as_str(), "document populated from extraction");
                Ok(())
            }
            Err(err) => {
                self.state = DocumentState::Empty;
                tracing::error!(error = %err, "extraction failed");
                Err(LifecycleError::ExtractionFailed(err.to_string()))
            }
        }
    }

    /// Field-by-field editing between population and submission. Editing a
    /// failed document transitions it back to `Populated`.
    pub fn edit(&mut self) -> Result<&mut D, LifecycleError> {
        match self.state {
            DocumentState::Populated => {}
            DocumentState::Failed => self.state = DocumentState::Populated,
            other => return Err(LifecycleError::NotEditable(other.as_str())),
        }
        match self.document.as_mut() {
            Some(doc) => Ok(doc),
            None => Err(LifecycleError::NotPopulated),
        }
    }

    /// The submit action. Validation runs synchronously; a violation
    /// returns the document to `Populated` with its fields editable. A
    /// clean pass enters `Submitting`, during which further submits are
    /// rejected, and the reply classifies into the final state.
    ///
    /// A dropped submit future leaves the machine in `Submitting`: the
    /// in-flight request is never treated as cancelled.
    pub async fn submit<S>(&mut self, sink: &S) -> Result<SubmissionOutcome, LifecycleError>
    where
        S: DocumentSink<D> + ?Sized,
    {
        match self.state {
            DocumentState::Populated | DocumentState::Failed => {}
            DocumentState::Submitting => return Err(LifecycleError::SubmissionInFlight),
            _ => return Err(LifecycleError::NotPopulated),
        }
        let document = match self.document.as_ref() {
            Some(doc) => doc,
            None => return Err(LifecycleError::NotPopulated),
        };

        self.state = DocumentState::Validating;
        if let Err(err) = document.validate() {
            self.state = DocumentState::Populated;
            tracing::warn!(error = %err, "validation rejected submission");
            return Err(LifecycleError::Validation(err));
        }

        self.state = DocumentState::Submitting;
        let reply = sink.submit(document).await;
        let outcome = resolve_outcome(D::KIND, &reply);

        self.state = if outcome.is_success() {
            DocumentState::Submitted
        } else {
            DocumentState::Failed
        };
        tracing::info!(
            state = self.state.as_str(),
            message = outcome.message(),
            "submission resolved"
        );
        Ok(outcome)
    }
}

impl<D: FormDocument> Default for DocumentSession<D> {
    fn default() -> Self {
        Self::new()
    }
}
