pub mod controller;
pub mod model;
pub mod page;
mod tabs;
pub mod view_model;

pub use controller::{OrderLookupController, ResultPanel, ResultSink, UiState};
pub use model::{GlooOrderLookup, LookupError, LookupOutcome, OrderLookup};
pub use page::OrderLookupPage;
