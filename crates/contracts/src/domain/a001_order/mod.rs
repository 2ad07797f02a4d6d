pub mod aggregate;

pub use aggregate::{DeliveryInfo, LineItem, OrderGap, OrderRecord, PaymentInfo};
