//! Usage payload types for the Subskribe API.
//!
//! A [`RawUsageData`] batch holds one or more [`RawUsage`] records and is
//! posted as JSON to `/v2/usage`:
//!
//! ```json
//! {"data": [{"id": "usg-001", "aliasId": "als-001", "usageTime": 1700000000, "usageQuantity": 100}]}
//! ```
//!
//! No validation happens on this side. Idempotency on `id` and resolution of
//! the billing target are enforced by the server.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod usage;

pub use usage::{RawUsage, RawUsageData, UsageTarget};
