//! JSON tab

use crate::domain::a001_order::backends::{DisplayBackend, JsonBackend};
use crate::domain::a001_order::display::OrderDisplay;
use crate::shared::output_viewer::OutputViewer;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn JsonTab(display: OrderDisplay) -> impl IntoView {
    match JsonBackend::pretty().render(&display) {
        Ok(json) => {
            let file_name = format!("order_{}.json", display.header.order_uid);
            view! {
                <OutputViewer
                    content=json
                    title="Order as JSON".to_string()
                    file_name=file_name
                    mime="application/json"
                />
            }
            .into_any()
        }
        Err(e) => {
            log::error!("Failed to serialize order {}: {}", display.header.order_uid, e);
            view! {
                <Card>
                    <div style="color: var(--color-text-secondary);">"JSON is not available"</div>
                </Card>
            }
            .into_any()
        }
    }
}
