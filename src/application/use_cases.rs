use crate::domain::{
    errors::LeadResult,
    leads::{LeadForm, LeadRelay},
    logging::{LogComponent, LogLevel, get_logger},
};
use crate::log_warn;

/// Use Case: deliver one lead form to the relay
///
/// Validation runs first and never reaches the network. Transport failures are
/// retried up to `retries` extra times; a relay verdict is final on the first answer.
pub struct SubmitLeadUseCase<R: LeadRelay> {
    relay: R,
    access_key: String,
    retries: u32,
}

impl<R: LeadRelay> SubmitLeadUseCase<R> {
    pub fn new(relay: R, access_key: &str, retries: u32) -> Self {
        Self { relay, access_key: access_key.to_string(), retries }
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    pub async fn execute(&self, form: &LeadForm) -> LeadResult<()> {
        form.validate()?;
        let fields = form.to_fields(&self.access_key);

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.relay.send(&fields).await {
                Ok(response) => {
                    let verdict = response.into_result();
                    get_logger().log_with_metadata(
                        if verdict.is_ok() { LogLevel::Info } else { LogLevel::Warn },
                        LogComponent::Application("SubmitLead"),
                        &format!(
                            "📨 {:?} lead {}",
                            form.kind,
                            if verdict.is_ok() { "accepted" } else { "rejected" }
                        ),
                        &format!("attempt {}/{}", attempt, self.retries + 1),
                    );
                    return verdict;
                }
                Err(error) if error.is_transient() && attempt <= self.retries => {
                    log_warn!(
                        LogComponent::Application("SubmitLead"),
                        "Attempt {} failed ({}), retrying",
                        attempt,
                        error
                    );
                }
                Err(error) => {
                    log_warn!(
                        LogComponent::Application("SubmitLead"),
                        "❌ {:?} lead failed after {} attempt(s): {}",
                        form.kind,
                        attempt,
                        error
                    );
                    return Err(error);
                }
            }
        }
    }
}
