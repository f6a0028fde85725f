//! Subskribe API client.
//!
//! A thin authenticated wrapper over `reqwest` for the Subskribe billing API.
//! Every request carries the `X-API-Key` header; only status 200 and 201 are
//! treated as success.
//!
//! # Example
//!
//! ```no_run
//! use subskribe_client::{HttpService, RawUsage, RawUsageData, ServiceConfig, SubskribeService};
//!
//! # async fn example() -> Result<(), subskribe_client::ClientError> {
//! let service = SubskribeService::new(ServiceConfig::from_env()?)?;
//!
//! let tenants = service.get("/tenants").await?;
//! println!("Tenants: {}", tenants.text());
//!
//! let usage = RawUsageData::new(vec![RawUsage::for_alias("usg-001", "als-001", 1_700_000_000, 100)]);
//! service.submit_usage(&usage).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod response;
mod service;

pub use config::{
    ServiceConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TIMEOUT_ENV,
};
pub use error::{ClientError, Result};
pub use response::{location_key, Response, LOCATION_HEADER};
pub use service::{HttpService, SubskribeService, API_KEY_HEADER, JSON_CONTENT_TYPE, USAGE_PATH};
pub use subskribe_usage::{RawUsage, RawUsageData, UsageTarget};
