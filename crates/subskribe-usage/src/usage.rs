//! Raw usage records submitted to `POST /v2/usage`.
//!
//! Records are passed through as-is. Deduplication on `id` and target
//! resolution are done by the server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single meterable usage event.
///
/// The billing target is identified either by `alias_id`, or by the
/// `subscription_id` + `charge_id` pair. Neither is enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUsage {
    /// Idempotency key. Resubmitting a record with the same id does nothing.
    #[serde(rename = "id")]
    pub usage_id: String,

    /// Friendly identifier linking to a subscription and charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_id: Option<String>,

    /// The subscription this usage is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    /// The charge this usage is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_id: Option<String>,

    /// Unix epoch seconds.
    pub usage_time: i64,

    /// Quantity consumed.
    pub usage_quantity: i64,
}

impl RawUsage {
    /// Create a record billed through an alias.
    #[must_use]
    pub fn for_alias(
        usage_id: impl Into<String>,
        alias_id: impl Into<String>,
        usage_time: i64,
        usage_quantity: i64,
    ) -> Self {
        Self {
            usage_id: usage_id.into(),
            alias_id: Some(alias_id.into()),
            subscription_id: None,
            charge_id: None,
            usage_time,
            usage_quantity,
        }
    }

    /// Create a record billed against an explicit subscription and charge.
    #[must_use]
    pub fn for_subscription_charge(
        usage_id: impl Into<String>,
        subscription_id: impl Into<String>,
        charge_id: impl Into<String>,
        usage_time: i64,
        usage_quantity: i64,
    ) -> Self {
        Self {
            usage_id: usage_id.into(),
            alias_id: None,
            subscription_id: Some(subscription_id.into()),
            charge_id: Some(charge_id.into()),
            usage_time,
            usage_quantity,
        }
    }

    /// The billing target this record names, if any.
    ///
    /// An alias wins when both forms are present.
    #[must_use]
    pub fn target(&self) -> Option<UsageTarget<'_>> {
        if let Some(alias) = self.alias_id.as_deref() {
            return Some(UsageTarget::Alias(alias));
        }
        match (self.subscription_id.as_deref(), self.charge_id.as_deref()) {
            (Some(subscription_id), Some(charge_id)) => Some(UsageTarget::SubscriptionCharge {
                subscription_id,
                charge_id,
            }),
            _ => None,
        }
    }

    /// `usage_time` as a UTC timestamp, or `None` if it is out of range.
    #[must_use]
    pub fn usage_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.usage_time, 0)
    }
}

/// Borrowed view of the billing target of a [`RawUsage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageTarget<'a> {
    /// Target resolved through an alias.
    Alias(&'a str),
    /// Explicit subscription and charge.
    SubscriptionCharge {
        /// Subscription id.
        subscription_id: &'a str,
        /// Charge id.
        charge_id: &'a str,
    },
}

/// Batch of usage records, serialized wholesale as the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUsageData {
    /// Records in submission order.
    pub data: Vec<RawUsage>,
}

impl RawUsageData {
    /// Create a batch from records.
    #[must_use]
    pub fn new(data: Vec<RawUsage>) -> Self {
        Self { data }
    }

    /// Append a record.
    pub fn push(&mut self, usage: RawUsage) {
        self.data.push(usage);
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the batch has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromIterator<RawUsage> for RawUsageData {
    fn from_iter<I: IntoIterator<Item = RawUsage>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
