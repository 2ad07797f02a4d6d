use crate::domain::a001_order::ui::lookup::OrderLookupPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <OrderLookupPage />
        </ConfigProvider>
    }
}
