//! Orders used across the order lookup tests

use contracts::domain::a001_order::{DeliveryInfo, LineItem, OrderRecord, PaymentInfo};

pub const SAMPLE_ORDER_JSON: &str = r#"{
    "order_uid": "b563feb7b2b84b6test",
    "track_number": "WBILMTESTTRACK",
    "entry": "WBIL",
    "delivery": {
        "name": "Test Testov",
        "phone": "+9720000000",
        "zip": "2639809",
        "city": "Kiryat Mozkin",
        "address": "Ploshad Mira 15",
        "region": "Kraiot",
        "email": "test@gmail.com"
    },
    "payment": {
        "transaction": "b563feb7b2b84b6test",
        "request_id": "",
        "currency": "USD",
        "provider": "wbpay",
        "amount": 1817,
        "payment_dt": 1637907727,
        "bank": "alpha",
        "delivery_cost": 1500,
        "goods_total": 317,
        "custom_fee": 0
    },
    "items": [
        {
            "chrt_id": 9934930,
            "track_number": "WBILMTESTTRACK",
            "price": 453,
            "rid": "ab4219087a764ae0btest",
            "name": "Mascaras",
            "sale": 30,
            "size": "0",
            "total_price": 317,
            "nm_id": 2389212,
            "brand": "Vivienne Sabo",
            "status": 202
        }
    ],
    "locale": "en",
    "internal_signature": "",
    "customer_id": "test",
    "delivery_service": "meest",
    "shardkey": "9",
    "sm_id": 99,
    "date_created": "2021-11-26T06:22:19Z",
    "oof_shard": "1"
}"#;

pub fn sample_order() -> OrderRecord {
    serde_json::from_str(SAMPLE_ORDER_JSON).unwrap()
}

/// Record with nothing but an identifier
pub fn minimal_order(order_uid: &str) -> OrderRecord {
    OrderRecord {
        order_uid: order_uid.to_string(),
        track_number: None,
        entry: None,
        delivery: DeliveryInfo::default(),
        payment: PaymentInfo::default(),
        items: Vec::<LineItem>::new(),
        locale: None,
        internal_signature: None,
        customer_id: None,
        delivery_service: None,
        shardkey: None,
        sm_id: None,
        date_created: None,
        oof_shard: None,
    }
}
