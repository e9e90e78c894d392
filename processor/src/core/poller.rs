//! Bounded-retry polling for the licenses metafield
//!
//! The fetch channel is trusted within an attempt: a non-success response
//! aborts the poll immediately. Only "record not yet present" is retried.

use serde_json::Value;
use tokio::time;
use tracing::info;

use crate::config::RetryPolicy;
use crate::traits::MetafieldStore;
use shared::StoreFailure;

/// Terminal outcomes of a poll that completed without a store failure.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The licenses metafield appeared with a populated value.
    Found(Value),
    /// The retry budget ran out without the metafield appearing.
    Exhausted,
}

/// Poll the order's metafield page until the licenses metafield is
/// populated or the retry budget is exhausted.
///
/// Waits `policy.delay` between a failed lookup and the next attempt; no
/// delay before the first attempt and none after the last.
pub async fn poll_licenses<S: MetafieldStore>(
    store: &S,
    order_id: &str,
    policy: &RetryPolicy,
) -> Result<PollOutcome, StoreFailure> {
    for attempt in 1..=policy.max_attempts {
        let metafields = store.fetch_order_metafields(order_id).await?;

        let license = metafields
            .iter()
            .find(|metafield| metafield.is_license_source() && metafield.has_value());

        if let Some(metafield) = license {
            info!("licenses metafield found on attempt {}", attempt);
            return Ok(PollOutcome::Found(metafield.value.clone()));
        }

        if attempt < policy.max_attempts {
            info!("attempt {}: licenses metafield not found yet", attempt);
            time::sleep(policy.delay).await;
        }
    }

    Ok(PollOutcome::Exhausted)
}
