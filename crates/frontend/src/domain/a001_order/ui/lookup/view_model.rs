//! ViewModel for the order lookup page

use super::controller::{OrderLookupController, ResultPanel, ResultSink};
use super::model::GlooOrderLookup;
use crate::shared::api_utils::{location_search, LookupConfig};
use leptos::html::Div;
use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Query string of the page, `?id=<order uid>`
#[derive(Debug, Deserialize)]
struct PageQuery {
    id: Option<String>,
}

/// Order id passed in the page query string, if any.
///
/// Pairs are decoded one at a time so a repeated or malformed key elsewhere
/// does not hide the id. The first `id` wins.
pub fn query_order_uid(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| serde_qs::from_str::<PageQuery>(pair).ok())
        .find_map(|query| query.id)
        .filter(|id| !id.is_empty())
}

/// Signals the controller publishes into
#[derive(Clone, Copy)]
pub struct PageSink {
    input: RwSignal<String>,
    panel: RwSignal<ResultPanel>,
    result_ref: NodeRef<Div>,
}

impl ResultSink for PageSink {
    fn publish(&self, panel: ResultPanel) {
        self.panel.set(panel);
    }

    fn set_input(&self, value: &str) {
        self.input.set(value.to_string());
    }

    fn scroll_into_view(&self) {
        if let Some(element) = self.result_ref.get_untracked() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

type PageController = OrderLookupController<GlooOrderLookup, PageSink>;

#[derive(Clone, Copy)]
pub struct OrderLookupVm {
    pub input: RwSignal<String>,
    pub panel: RwSignal<ResultPanel>,
    pub result_ref: NodeRef<Div>,
    /// "details" | "text" | "json"
    pub active_tab: RwSignal<&'static str>,
    controller: StoredValue<PageController, LocalStorage>,
}

impl OrderLookupVm {
    pub fn new() -> Self {
        let input = RwSignal::new(String::new());
        let panel = RwSignal::new(ResultPanel::Hidden);
        let result_ref = NodeRef::<Div>::new();

        let sink = PageSink {
            input,
            panel,
            result_ref,
        };
        let lookup = GlooOrderLookup::new(LookupConfig::from_env());

        Self {
            input,
            panel,
            result_ref,
            active_tab: RwSignal::new("details"),
            controller: StoredValue::new_local(OrderLookupController::new(lookup, sink)),
        }
    }

    pub fn set_tab(&self, tab: &'static str) {
        self.active_tab.set(tab);
    }

    pub fn submit(&self) {
        let controller = self.controller.get_value();
        let order_uid = self.input.get_untracked();
        self.active_tab.set("details");
        spawn_local(async move {
            controller.submit(&order_uid).await;
        });
    }

    pub fn load_sample(&self) {
        let controller = self.controller.get_value();
        self.active_tab.set("details");
        spawn_local(async move {
            controller.load_sample().await;
        });
    }

    pub fn on_input(&self, value: String) {
        self.input.set(value);
        self.controller.with_value(|c| c.input_edited());
    }

    /// Auto-submit when the page was opened with `?id=...`
    pub fn load_from_location(&self) {
        let Some(order_uid) = query_order_uid(&location_search()) else {
            return;
        };
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.page_load(Some(&order_uid)).await;
        });
    }
}

impl Default for OrderLookupVm {
    fn default() -> Self {
        Self::new()
    }
}
