//! Read-only viewer for generated text with copy and download actions

use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Offer `content` as a file download named `file_name`
fn download(content: &str, file_name: &str, mime: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&wasm_bindgen::JsValue::from_str(content));

    let blob_property_bag = web_sys::BlobPropertyBag::new();
    blob_property_bag.set_type(mime);

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &blob_property_bag)
    else {
        log::warn!("Failed to create blob for {}", file_name);
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    if let Some(link) = document
        .create_element("a")
        .ok()
        .and_then(|a| a.dyn_into::<web_sys::HtmlAnchorElement>().ok())
    {
        link.set_href(&url);
        link.set_download(file_name);
        link.click();
    }
    web_sys::Url::revoke_object_url(&url).ok();
}

#[component]
pub fn OutputViewer(
    /// Text to show
    content: String,
    title: String,
    /// Name of the downloaded file
    file_name: String,
    /// MIME type of the downloaded file
    #[prop(optional)]
    mime: Option<&'static str>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let content_for_copy = content.clone();
    let content_for_download = content.clone();
    let line_count = content.lines().count();
    let char_count = content.chars().count();
    let mime = mime.unwrap_or("text/plain");

    let handle_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        let text = content_for_copy.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let promise = clipboard.write_text(&text);
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("Clipboard write failed: {:?}", e);
            }
        });
        set_copied.set(true);

        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    let handle_download = move |_| download(&content_for_download, &file_name, mime);

    view! {
        <div class="json-viewer">
            <div class="modal-header modal-header--compact">
                <h3 class="modal-title">{title}</h3>
                <div class="modal-header-actions">
                    <button class="button button--secondary" on:click=handle_copy title="Copy to clipboard">
                        {move || if copied.get() {
                            view! { <>{icon("check")}{"Copied!"}</> }.into_any()
                        } else {
                            view! { <>{icon("copy")}{"Copy"}</> }.into_any()
                        }}
                    </button>
                    <button class="button button--success" on:click=handle_download title="Download as file">
                        {icon("download")}
                        {"Download"}
                    </button>
                </div>
            </div>

            <div class="json-viewer__body">
                <pre class="json-viewer__content">{content}</pre>
            </div>

            <div class="json-viewer__footer">
                {"Size: "}<strong>{format!("{} chars", char_count)}</strong>
                {" | "}
                {"Lines: "}<strong>{line_count}</strong>
            </div>
        </div>
    }
}
