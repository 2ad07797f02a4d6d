use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// `null` reads as the default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// RFC 3339 string, anything else (empty, malformed, non-string) reads as `None`
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc)))
}

/// Recipient and delivery address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryInfo {
    /// Full name of the recipient
    pub name: Option<String>,
    pub phone: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    /// Street address
    pub address: Option<String>,
    pub region: Option<String>,
    pub email: Option<String>,
}

/// Payment of the order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInfo {
    /// Transaction identifier at the payment provider
    pub transaction: Option<String>,
    pub request_id: Option<String>,
    /// ISO currency code, e.g. "USD"
    pub currency: Option<String>,
    pub provider: Option<String>,
    /// Total charged amount
    pub amount: Option<f64>,
    /// Payment time, unix seconds
    pub payment_dt: Option<i64>,
    pub bank: Option<String>,
    pub delivery_cost: Option<f64>,
    /// Subtotal of the goods without delivery
    pub goods_total: Option<f64>,
    pub custom_fee: Option<f64>,
}

/// One line of the order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub chrt_id: Option<i64>,
    pub track_number: Option<String>,
    /// Unit price before the sale discount
    pub price: Option<f64>,
    pub rid: Option<String>,
    pub name: Option<String>,
    /// Sale discount in percent, 0..=100
    pub sale: Option<f64>,
    pub size: Option<String>,
    /// Price after the discount as reported by the lookup service
    pub total_price: Option<f64>,
    pub nm_id: Option<i64>,
    pub brand: Option<String>,
    /// Numeric status code (202, 200, 400, ...)
    pub status: Option<i64>,
}

/// Order as returned by the lookup service (`GET /order?id=...`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Unique order identifier
    pub order_uid: String,
    #[serde(default)]
    pub track_number: Option<String>,
    /// Entry channel tag, e.g. "WBIL"
    #[serde(default)]
    pub entry: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub delivery: DeliveryInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment: PaymentInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub internal_signature: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub delivery_service: Option<String>,
    #[serde(default)]
    pub shardkey: Option<String>,
    #[serde(default)]
    pub sm_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub oof_shard: Option<String>,
}

/// Structural gap found by [`OrderRecord::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderGap {
    MissingOrderUid,
    MissingTrackNumber,
    MissingRecipientName,
    NoItems,
}

impl std::fmt::Display for OrderGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            OrderGap::MissingOrderUid => "order_uid is required",
            OrderGap::MissingTrackNumber => "track_number is required",
            OrderGap::MissingRecipientName => "delivery name is required",
            OrderGap::NoItems => "order must contain at least one item",
        };
        f.write_str(text)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.is_empty())
}

impl OrderRecord {
    /// Reports the first structural gap of the record, if any.
    pub fn validate(&self) -> Result<(), OrderGap> {
        if self.order_uid.is_empty() {
            return Err(OrderGap::MissingOrderUid);
        }
        if is_blank(&self.track_number) {
            return Err(OrderGap::MissingTrackNumber);
        }
        if is_blank(&self.delivery.name) {
            return Err(OrderGap::MissingRecipientName);
        }
        if self.items.is_empty() {
            return Err(OrderGap::NoItems);
        }
        Ok(())
    }
}
