//! Order lookup page (MVVM Standard)

use super::controller::ResultPanel;
use super::tabs::{DetailsTab, JsonTab, TextTab};
use super::view_model::OrderLookupVm;
use crate::domain::a001_order::display::OrderDisplay;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderLookupPage() -> impl IntoView {
    let vm = OrderLookupVm::new();

    vm.load_from_location();

    view! {
        <div class="page order-lookup">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{icon("package")} "Order Lookup"</h1>
                </div>
            </div>

            <SearchForm vm=vm />

            <div class="page__content order-lookup__result" node_ref=vm.result_ref>
                <ResultContent vm=vm />
            </div>
        </div>
    }
}

// ── Search form ───────────────────────────────────────────────────────────────

#[component]
fn SearchForm(vm: OrderLookupVm) -> impl IntoView {
    view! {
        <form
            class="order-lookup__form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <input
                type="text"
                class="form__input"
                placeholder="Enter Order ID"
                autocomplete="off"
                prop:value=move || vm.input.get()
                on:input=move |ev| vm.on_input(event_target_value(&ev))
            />
            <button type="submit" class="button button--primary">
                {icon("search")} "Search"
            </button>
            <button type="button" class="button button--secondary" on:click=move |_| vm.load_sample()>
                "Load sample order"
            </button>
        </form>
    }
}

// ── Result panel ──────────────────────────────────────────────────────────────

#[component]
fn ResultContent(vm: OrderLookupVm) -> impl IntoView {
    view! {
        {move || match vm.panel.get() {
            ResultPanel::Hidden => ().into_any(),
            ResultPanel::Loading => view! {
                <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                    <Spinner />
                    <span>"Loading order information..."</span>
                </Flex>
            }
            .into_any(),
            ResultPanel::Error(message) => view! {
                <div class="error-message" style="padding: var(--spacing-lg); background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: var(--radius-sm); color: var(--color-error); margin: var(--spacing-lg);">
                    <strong>"Error: "</strong>{message}
                </div>
            }
            .into_any(),
            ResultPanel::Order(display) => view! {
                <OrderResult vm=vm display=display />
            }
            .into_any(),
        }}
    }
}

#[component]
fn OrderResult(vm: OrderLookupVm, display: OrderDisplay) -> impl IntoView {
    let title = display.header.title.clone();
    let status = display.header.status;
    let display = StoredValue::new(display);
    let active_tab = vm.active_tab;

    view! {
        <div class="order-header">
            <h2 class="page__title">{title}</h2>
            <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Success>
                {status}
            </Badge>
        </div>

        <TabBar vm=vm />

        {move || match active_tab.get() {
            "text" => view! { <TextTab display=display.get_value() /> }.into_any(),
            "json" => view! { <JsonTab display=display.get_value() /> }.into_any(),
            _      => view! { <DetailsTab display=display.get_value() /> }.into_any(),
        }}
    }
}

// ── Tab bar ───────────────────────────────────────────────────────────────────

#[component]
fn TabBar(vm: OrderLookupVm) -> impl IntoView {
    let active_tab = vm.active_tab;

    view! {
        <div class="page__tabs">
            <button
                class="page__tab"
                class:page__tab--active=move || active_tab.get() == "details"
                on:click=move |_| vm.set_tab("details")
            >
                {icon("list")} "Details"
            </button>

            <button
                class="page__tab"
                class:page__tab--active=move || active_tab.get() == "text"
                on:click=move |_| vm.set_tab("text")
            >
                {icon("file-text")} "Text"
            </button>

            <button
                class="page__tab"
                class:page__tab--active=move || active_tab.get() == "json"
                on:click=move |_| vm.set_tab("json")
            >
                {icon("code")} "JSON"
            </button>
        </div>
    }
}
