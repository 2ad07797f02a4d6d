//! API layer for the order lookup

use crate::shared::api_utils::LookupConfig;
use async_trait::async_trait;
use contracts::domain::a001_order::OrderRecord;
use gloo_net::http::Request;
use thiserror::Error;

/// Why a lookup could not produce a record. Never shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("lookup service answered with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Result of one lookup attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(OrderRecord),
    NotFound,
    ServiceError(LookupError),
}

/// Resolves an order identifier to a record. One remote read per call,
/// no retries.
#[async_trait(?Send)]
pub trait OrderLookup {
    async fn lookup(&self, order_uid: &str) -> LookupOutcome;
}

/// `<base>/order?id=<percent-encoded id>`
pub fn order_url(base_url: &str, order_uid: &str) -> String {
    format!("{}/order?id={}", base_url, urlencoding::encode(order_uid))
}

/// Classifies a completed HTTP exchange.
///
/// A success body that is not an order record fails closed as a service error.
pub fn classify_response(status: u16, body: &str) -> LookupOutcome {
    match status {
        404 => LookupOutcome::NotFound,
        200..=299 => match serde_json::from_str::<OrderRecord>(body) {
            Ok(order) => LookupOutcome::Found(order),
            Err(e) => LookupOutcome::ServiceError(LookupError::Decode(e.to_string())),
        },
        other => LookupOutcome::ServiceError(LookupError::Status(other)),
    }
}

/// Browser lookup client backed by `fetch`
#[derive(Debug, Clone)]
pub struct GlooOrderLookup {
    config: LookupConfig,
}

impl GlooOrderLookup {
    pub fn new(config: LookupConfig) -> Self {
        Self { config }
    }

    async fn fetch(&self, order_uid: &str) -> Result<(u16, String), LookupError> {
        let url = order_url(&self.config.base_url, order_uid);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            return Ok((status, String::new()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(format!("failed to read response: {}", e)))?;
        Ok((status, text))
    }
}

#[async_trait(?Send)]
impl OrderLookup for GlooOrderLookup {
    async fn lookup(&self, order_uid: &str) -> LookupOutcome {
        let outcome = match self.fetch(order_uid).await {
            Ok((status, body)) => classify_response(status, &body),
            Err(e) => LookupOutcome::ServiceError(e),
        };

        if let LookupOutcome::Found(order) = &outcome {
            if let Err(gap) = order.validate() {
                log::warn!("Order {} is incomplete: {}", order.order_uid, gap);
            }
        }
        outcome
    }
}
