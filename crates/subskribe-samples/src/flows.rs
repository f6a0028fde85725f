//! Sample request flows.

use subskribe_client::{
    ClientError, HttpService, RawUsage, RawUsageData, Response, JSON_CONTENT_TYPE, USAGE_PATH,
};
use uuid::Uuid;

/// Tenant information endpoint.
pub const TENANTS_PATH: &str = "/tenants";

/// Users endpoint.
pub const USERS_PATH: &str = "/users";

/// A sample step failed.
#[derive(Debug, thiserror::Error)]
#[error("error {step}: {source}")]
pub struct SampleError {
    /// What the flow was doing.
    pub step: &'static str,
    /// Underlying client error.
    pub source: ClientError,
}

impl SampleError {
    fn at(step: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |source| Self { step, source }
    }
}

/// Fetch tenants and users, then submit a usage batch.
///
/// Stops at the first failing step.
///
/// # Errors
///
/// Returns the failing step together with its [`ClientError`].
pub async fn run<S: HttpService + ?Sized>(service: &S, usage_time: i64) -> Result<(), SampleError> {
    let tenants = service
        .get(TENANTS_PATH)
        .await
        .map_err(SampleError::at("getting tenant information"))?;
    log_response(&tenants);

    let users = service
        .get(USERS_PATH)
        .await
        .map_err(SampleError::at("getting users"))?;
    log_response(&users);

    let usage = sample_usage(usage_time);
    let payload = serde_json::to_string(&usage)
        .map_err(ClientError::from)
        .map_err(SampleError::at("encoding usage data"))?;
    tracing::info!(payload = %payload, "About to submit usage payload");

    let submitted = service
        .post(USAGE_PATH, payload.into_bytes(), JSON_CONTENT_TYPE)
        .await
        .map_err(SampleError::at("calling usage submission"))?;
    log_response(&submitted);

    Ok(())
}

/// Two records at `usage_time`: one billed by alias, one by subscription and charge.
#[must_use]
pub fn sample_usage(usage_time: i64) -> RawUsageData {
    RawUsageData::new(vec![
        RawUsage::for_alias(usage_id(), "als-001", usage_time, 100),
        RawUsage::for_subscription_charge(usage_id(), "SUB-001", "CHRG-001", usage_time, 100),
    ])
}

fn usage_id() -> String {
    format!("usg-{}", Uuid::new_v4())
}

fn log_response(response: &Response) {
    tracing::info!(
        status = %response.status,
        headers = ?response.headers,
        body = %response.text(),
        "Response"
    );
}
