//! License processor with dependency injection
//!
//! Sequences the workflow: poll for the licenses metafield, decode it,
//! render the HTML table, write the derived metafield back.

use tracing::{error, info};

use crate::config::RetryPolicy;
use crate::core::poller::{self, PollOutcome};
use crate::core::{parser, renderer};
use crate::error::{ProcessorError, ProcessorResult};
use crate::traits::MetafieldStore;
use shared::NewMetafield;

/// Workflow driver, generic over the store for testability.
pub struct LicenseProcessor<S: MetafieldStore> {
    store: S,
    policy: RetryPolicy,
}

impl<S: MetafieldStore> LicenseProcessor<S> {
    /// Create a new processor over a store with the given retry policy
    pub fn new(store: S, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }

    /// Run one invocation for an order.
    ///
    /// The derived metafield is written at most once, and only after the
    /// source value decoded successfully.
    pub async fn process_order(&self, order_id: &str) -> ProcessorResult<()> {
        let value = match poller::poll_licenses(&self.store, order_id, &self.policy).await {
            Ok(PollOutcome::Found(value)) => value,
            Ok(PollOutcome::Exhausted) => {
                info!(
                    "licenses metafield for order {} not found after {} attempts",
                    order_id, self.policy.max_attempts
                );
                return Err(ProcessorError::NotFound);
            }
            Err(failure) => {
                error!(
                    "fetching metafields for order {} failed: {}",
                    order_id, failure
                );
                return Err(ProcessorError::FetchFailed { failure });
            }
        };

        let entries = parser::parse_licenses(&value).map_err(|kind| {
            error!(
                "licenses metafield for order {} did not decode: {:?}",
                order_id, kind
            );
            ProcessorError::Malformed { kind }
        })?;

        let html = renderer::render_table(&entries);
        info!(
            "rendered {} license entries for order {}",
            entries.len(),
            order_id
        );

        self.store
            .create_order_metafield(NewMetafield::licenses_html(order_id, html))
            .await
            .map_err(|failure| {
                error!(
                    "saving licenses_html for order {} failed: {}",
                    order_id, failure
                );
                ProcessorError::SaveFailed { failure }
            })?;

        info!("licenses_html saved for order {}", order_id);
        Ok(())
    }
}
