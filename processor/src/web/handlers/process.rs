//! Invocation endpoint for the license workflow

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures_util::FutureExt;
use serde::Deserialize;
use tracing::{error, info_span, Instrument};
use uuid::Uuid;

use crate::error::ProcessorError;
use crate::processor_impl::LicenseProcessor;
use crate::traits::MetafieldStore;

/// Invocation payload
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub order_id: Option<String>,
}

/// `POST /process-license` — run the poll/parse/render/persist workflow for
/// one order and reply with a terminal plain-text status.
pub async fn process_license<S>(
    State(processor): State<Arc<LicenseProcessor<S>>>,
    Json(request): Json<ProcessRequest>,
) -> Response
where
    S: MetafieldStore + Send + Sync + 'static,
{
    // Input gate: runs before any remote call is made.
    let order_id = match request.order_id.filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => return reply(Err(ProcessorError::MissingOrderId)),
    };

    let run_id = Uuid::new_v4();
    let span = info_span!("process_license", %run_id, %order_id);

    // Unanticipated faults, panics included, resolve to the generic
    // failure instead of propagating raw to the caller. Dropping this
    // future (client disconnect, shutdown) cancels the workflow at its
    // next suspension point.
    let result = AssertUnwindSafe(processor.process_order(&order_id))
        .catch_unwind()
        .instrument(span)
        .await
        .unwrap_or_else(|_| {
            error!("license workflow panicked for order {}", order_id);
            Err(ProcessorError::Unexpected {
                message: "workflow panicked".to_string(),
            })
        });

    reply(result)
}

fn reply(result: Result<(), ProcessorError>) -> Response {
    match result {
        Ok(()) => (StatusCode::OK, "HTML saved successfully.").into_response(),
        Err(error) => (error.status_code(), error.public_message()).into_response(),
    }
}
