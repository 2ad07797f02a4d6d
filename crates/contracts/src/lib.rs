//! Wire types shared between the order lookup service and its clients.

pub mod domain;
