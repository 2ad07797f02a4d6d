//! Order display structure and the renderer producing it
//!
//! [`render`] turns an [`OrderRecord`] into plain data. Concrete output
//! (markup, text, JSON) is produced from [`OrderDisplay`] by a backend, see
//! [`super::backends`] and the page components.

use super::status::ItemStatus;
use crate::shared::date_utils::{format_datetime_in, format_local_datetime};
use crate::shared::number_format::{
    format_amount, format_amount_with_currency, format_percent,
};
use chrono::{DateTime, TimeZone, Utc};
use contracts::domain::a001_order::OrderRecord;
use serde::Serialize;
use std::fmt::Display;

/// Placeholder for absent values
pub const NOT_AVAILABLE: &str = "N/A";

/// Header badge. The aggregate order status is not derived from the items.
pub const ORDER_STATUS_BADGE: &str = "Completed";

pub const ITEM_COLUMNS: [&str; 6] = ["Product", "Brand", "Price", "Sale", "Total", "Status"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayHeader {
    pub order_uid: String,
    /// "Order #<uid>"
    pub title: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoField {
    pub label: &'static str,
    pub value: String,
}

/// Titled group of label/value pairs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoSection {
    pub title: &'static str,
    pub fields: Vec<InfoField>,
}

impl InfoSection {
    fn new(title: &'static str, fields: Vec<(&'static str, String)>) -> Self {
        Self {
            title,
            fields: fields
                .into_iter()
                .map(|(label, value)| InfoField { label, value })
                .collect(),
        }
    }

    /// Value of the field with the given label
    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRow {
    pub name: String,
    pub brand: String,
    pub price: String,
    pub sale: String,
    pub total: String,
    pub status: ItemStatus,
}

impl ItemRow {
    /// Cells in [`ITEM_COLUMNS`] order
    pub fn cells(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.brand.as_str(),
            self.price.as_str(),
            self.sale.as_str(),
            self.total.as_str(),
            self.status.label(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemsTable {
    /// "Order Items (<n>)"
    pub title: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<ItemRow>,
}

/// Everything the result panel shows for one order, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDisplay {
    pub header: DisplayHeader,
    pub delivery: InfoSection,
    pub payment: InfoSection,
    pub items: ItemsTable,
    pub details: InfoSection,
}

fn text(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn amount(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_amount)
}

fn joined_address(city: &Option<String>, address: &Option<String>) -> String {
    let parts: Vec<&str> = [city, address]
        .into_iter()
        .filter_map(|p| p.as_deref())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        parts.join(", ")
    }
}

/// Render with the creation time in the viewer's local format
pub fn render(order: &OrderRecord) -> OrderDisplay {
    render_with(order, format_local_datetime)
}

/// Render with creation time shown as `DD.MM.YYYY HH:MM:SS` in `tz`
pub fn render_in<Tz>(order: &OrderRecord, tz: &Tz) -> OrderDisplay
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    render_with(order, |d| format_datetime_in(d, tz))
}

fn render_with<F>(order: &OrderRecord, format_date: F) -> OrderDisplay
where
    F: Fn(&DateTime<Utc>) -> String,
{
    let delivery = &order.delivery;
    let payment = &order.payment;

    let header = DisplayHeader {
        order_uid: order.order_uid.clone(),
        title: format!("Order #{}", order.order_uid),
        status: ORDER_STATUS_BADGE,
    };

    let delivery_section = InfoSection::new(
        "Delivery Information",
        vec![
            ("Full Name", text(&delivery.name)),
            ("Phone", text(&delivery.phone)),
            ("Email", text(&delivery.email)),
            ("Address", joined_address(&delivery.city, &delivery.address)),
            ("ZIP Code", text(&delivery.zip)),
            ("Region", text(&delivery.region)),
        ],
    );

    let total_amount = match (payment.amount, payment.currency.as_deref()) {
        (Some(value), Some(currency)) if !currency.is_empty() => {
            format_amount_with_currency(value, currency)
        }
        (value, _) => amount(value),
    };

    let payment_section = InfoSection::new(
        "Payment Information",
        vec![
            ("Transaction ID", text(&payment.transaction)),
            ("Amount", total_amount),
            ("Provider", text(&payment.provider)),
            ("Bank", text(&payment.bank)),
            ("Delivery Cost", amount(payment.delivery_cost)),
            ("Goods Total", amount(payment.goods_total)),
        ],
    );

    let rows = order
        .items
        .iter()
        .map(|item| ItemRow {
            name: text(&item.name),
            brand: text(&item.brand),
            price: amount(item.price),
            sale: item
                .sale
                .map_or_else(|| NOT_AVAILABLE.to_string(), format_percent),
            total: amount(item.total_price),
            status: ItemStatus::from_opt(item.status),
        })
        .collect();

    let items = ItemsTable {
        title: format!("Order Items ({})", order.items.len()),
        columns: ITEM_COLUMNS.to_vec(),
        rows,
    };

    let locale = order
        .locale
        .as_deref()
        .filter(|l| !l.is_empty())
        .map_or_else(|| NOT_AVAILABLE.to_string(), str::to_uppercase);
    let date_created = order
        .date_created
        .as_ref()
        .map_or_else(|| NOT_AVAILABLE.to_string(), |d| format_date(d));

    let details = InfoSection::new(
        "Order Details",
        vec![
            ("Track Number", text(&order.track_number)),
            ("Entry", text(&order.entry)),
            ("Customer ID", text(&order.customer_id)),
            ("Delivery Service", text(&order.delivery_service)),
            ("Locale", locale),
            ("Date Created", date_created),
        ],
    );

    OrderDisplay {
        header,
        delivery: delivery_section,
        payment: payment_section,
        items,
        details,
    }
}
