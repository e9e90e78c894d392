//! Processor error types and their terminal HTTP mapping

use axum::http::StatusCode;
use thiserror::Error;

use shared::StoreFailure;

/// Result type for processor operations
pub type ProcessorResult<T> = Result<T, ProcessorError>;

/// How a licenses metafield value failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Textual value that is not valid JSON
    MalformedJson,
    /// Value is neither text nor a pre-decoded list
    UnexpectedType,
    /// Decoded successfully, but not to a list
    NotAList,
}

/// Terminal failures of one invocation.
///
/// Every failure resolves locally into exactly one of these; nothing is
/// left for the caller to interpret beyond the status code and message.
#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("missing order_id in request")]
    MissingOrderId,

    #[error("metafield fetch failed: {failure}")]
    FetchFailed { failure: StoreFailure },

    #[error("licenses metafield not found within the retry budget")]
    NotFound,

    #[error("licenses metafield did not decode: {kind:?}")]
    Malformed { kind: ParseErrorKind },

    #[error("derived metafield save failed: {failure}")]
    SaveFailed { failure: StoreFailure },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("unexpected error: {message}")]
    Unexpected { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ProcessorError {
    /// Terminal HTTP status for this failure.
    ///
    /// Fetch failures pass the upstream status through when one exists;
    /// transport failures with no status surface as 502.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingOrderId => StatusCode::BAD_REQUEST,
            Self::FetchFailed { failure } => failure
                .status()
                .and_then(|status| StatusCode::from_u16(status).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Malformed { .. }
            | Self::SaveFailed { .. }
            | Self::Config { .. }
            | Self::Unexpected { .. }
            | Self::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body returned to the caller. Internal detail stays in
    /// the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingOrderId => "Missing order_id",
            Self::FetchFailed { .. } => "Error fetching metafields from Shopify",
            Self::NotFound => "License metafield not found after retries.",
            Self::Malformed {
                kind: ParseErrorKind::MalformedJson,
            } => "Failed to parse metafield value as JSON",
            Self::Malformed { .. } => "Expected licenses metafield to contain a JSON array",
            Self::SaveFailed { .. } => "Failed to save HTML to licenses_html metafield",
            Self::Config { .. } | Self::Unexpected { .. } | Self::IoError(_) => {
                "Unexpected server error"
            }
        }
    }
}
