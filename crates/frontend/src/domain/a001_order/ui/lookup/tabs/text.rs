//! Plain text tab

use crate::domain::a001_order::backends::{DisplayBackend, PlainTextBackend};
use crate::domain::a001_order::display::OrderDisplay;
use crate::shared::output_viewer::OutputViewer;
use leptos::prelude::*;

#[component]
pub fn TextTab(display: OrderDisplay) -> impl IntoView {
    let content = PlainTextBackend.render(&display);
    let file_name = format!("order_{}.txt", display.header.order_uid);

    view! {
        <OutputViewer content=content title="Order as text".to_string() file_name=file_name />
    }
}
