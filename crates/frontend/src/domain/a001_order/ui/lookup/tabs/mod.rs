//! Tab components for the order result panel

mod details;
mod json;
mod text;

pub use details::DetailsTab;
pub use json::JsonTab;
pub use text::TextTab;
