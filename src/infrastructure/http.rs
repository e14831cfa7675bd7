use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{AbortController, FormData};

use crate::config;
use crate::domain::{
    errors::{LeadError, LeadResult},
    leads::{LeadRelay, RelayResponse},
    logging::LogComponent,
};
use crate::{log_debug, log_warn};

/// Web3Forms client: one multipart POST per attempt, aborted after `timeout_ms`
#[derive(Clone)]
pub struct Web3FormsRelay {
    endpoint: String,
    timeout_ms: u32,
}

impl Default for Web3FormsRelay {
    fn default() -> Self {
        Self::new()
    }
}

impl Web3FormsRelay {
    pub fn new() -> Self {
        Self::with_endpoint(config::RELAY_ENDPOINT, config::RELAY_TIMEOUT_MS)
    }

    pub fn with_endpoint(endpoint: &str, timeout_ms: u32) -> Self {
        Self { endpoint: endpoint.to_string(), timeout_ms }
    }

    fn form_data(fields: &[(&'static str, String)]) -> LeadResult<FormData> {
        let data = FormData::new()
            .map_err(|e| LeadError::Network(format!("FormData unavailable: {:?}", e)))?;
        for (name, value) in fields {
            data.append_with_str(name, value)
                .map_err(|e| LeadError::Network(format!("Failed to append '{}': {:?}", name, e)))?;
        }
        Ok(data)
    }

    async fn post(&self, body: FormData, controller: &AbortController) -> LeadResult<String> {
        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .abort_signal(Some(&controller.signal()))
            .body(body)
            .map_err(|e| LeadError::Network(format!("Failed to build request: {:?}", e)))?
            .send()
            .await
            .map_err(|e| LeadError::Network(format!("Failed to send request: {:?}", e)))?;

        // The relay answers 4xx with a JSON verdict too, so the status alone decides nothing.
        log_debug!(
            LogComponent::Infrastructure("Web3FormsRelay"),
            "HTTP {} {}",
            response.status(),
            response.status_text()
        );

        response
            .text()
            .await
            .map_err(|e| LeadError::Network(format!("Failed to read body: {:?}", e)))
    }
}

impl LeadRelay for Web3FormsRelay {
    async fn send(&self, fields: &[(&'static str, String)]) -> LeadResult<RelayResponse> {
        let body = Self::form_data(fields)?;
        let controller = AbortController::new()
            .map_err(|e| LeadError::Network(format!("AbortController unavailable: {:?}", e)))?;

        let request = Box::pin(self.post(body, &controller));
        let deadline = Box::pin(TimeoutFuture::new(self.timeout_ms));

        match select(request, deadline).await {
            Either::Left((result, _)) => RelayResponse::parse(&result?),
            Either::Right(_) => {
                controller.abort();
                log_warn!(
                    LogComponent::Infrastructure("Web3FormsRelay"),
                    "⏱️ Request to {} aborted after {} ms",
                    self.endpoint,
                    self.timeout_ms
                );
                Err(LeadError::Timeout(self.timeout_ms))
            }
        }
    }
}
