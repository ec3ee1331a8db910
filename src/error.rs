use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Everything the form surface can fail with. Serialized to the webview as
/// `{ "code": ..., "message": ... }` so the frontend can branch on the kind.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("request failed: {0}")]
    Transfer(String),
    #[error("malformed response from extraction service: {0}")]
    MalformedResponse(String),
    #[error("invalid edit target: {0}")]
    InvalidEditTarget(String),
    #[error("no document selected")]
    NoDocumentSelected,
    #[error("no invoice loaded")]
    NoInvoiceLoaded,
    #[error("could not read document: {0}")]
    Io(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl FormError {
    pub fn code(&self) -> &'static str {
        match self {
            FormError::Transfer(_) => "transfer",
            FormError::MalformedResponse(_) => "malformed_response",
            FormError::InvalidEditTarget(_) => "invalid_edit_target",
            FormError::NoDocumentSelected => "no_document_selected",
            FormError::NoInvoiceLoaded => "no_invoice_loaded",
            FormError::Io(_) => "io",
            FormError::Internal(_) => "internal",
        }
    }
}

impl Serialize for FormError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

impl From<std::io::Error> for FormError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            FormError::Io("File not found.".to_string())
        } else {
            FormError::Io(err.to_string())
        }
    }
}
