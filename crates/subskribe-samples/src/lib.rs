//! Sample program for the Subskribe API.
//!
//! Reads `SUBSKRIBE_API_KEY` (required) and `SUBSKRIBE_BASE_URL` (optional)
//! from the environment, lists tenants and users, then submits a small usage
//! batch to `/v2/usage`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod flows;

pub use flows::{run, sample_usage, SampleError, TENANTS_PATH, USERS_PATH};
