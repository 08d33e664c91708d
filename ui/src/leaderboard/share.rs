use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::core::platform::page_url;
use crate::core::query::encode_query;
use crate::core::selection::Selection;

/// Hosted dashboard address, used as the link base when the app has no
/// address bar of its own (desktop builds).
pub const PUBLIC_DASHBOARD_URL: &str = "https://podium.daviancloud.dev/leaderboard";

#[derive(Clone, Debug, PartialEq)]
enum ShareStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[component]
pub fn SharePanel(selection: Selection) -> Element {
    let status = use_signal(|| ShareStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ShareStatus::Idle => None,
        ShareStatus::Working(label) => {
            Some(("board-card__meta".to_string(), format!("{label}…")))
        }
        ShareStatus::Done(message) => Some((
            "board-card__meta board-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ShareStatus::Error(err) => Some((
            "board-card__meta board-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let share_handler = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ShareStatus::Working("Preparing link"));
            let link = share_link(&selection);

            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                let mut busy_signal = busy_signal;
                platform::spawn_future(async move {
                    let outcome = deliver_link(link).await;
                    match outcome {
                        Ok(message) => status_signal.set(ShareStatus::Done(message)),
                        Err(err) => status_signal.set(ShareStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(deliver_link(link));
                match outcome {
                    Ok(message) => status_signal.set(ShareStatus::Done(message)),
                    Err(err) => status_signal.set(ShareStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };

    rsx! {
        section { class: "board-card board-share",
            div { class: "board-card__header",
                h2 { "Share" }
            }

            p {
                "Share the current filters and sort as a link; anyone opening it sees the same view."
            }

            div { class: "board-share__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: share_handler,
                    "Share this view"
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

/// Builds the shareable URL: page origin and path where one exists, the
/// hosted dashboard otherwise, plus the non-default selection.
pub fn share_link(selection: &Selection) -> String {
    let base = page_url().unwrap_or_else(|| PUBLIC_DASHBOARD_URL.to_string());
    let query = encode_query(selection);
    if query.is_empty() {
        base
    } else {
        format!("{base}?{query}")
    }
}

async fn deliver_link(link: String) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        if try_native_share(&link).await {
            return Ok("Share sheet opened".to_string());
        }
    }

    copy_to_clipboard(link).await?;
    Ok("Link copied to clipboard".to_string())
}

/// Hands the link to the browser share sheet when the platform exposes
/// one. `false` means "fall back to the clipboard", including when the
/// user dismisses the sheet.
#[cfg(target_arch = "wasm32")]
async fn try_native_share(link: &str) -> bool {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    let has_share = js_sys::Reflect::has(&navigator, &JsValue::from_str("share"))
        .unwrap_or(false);
    if !has_share {
        return false;
    }

    let mut data = web_sys::ShareData::new();
    data.title("Podium leaderboard");
    data.url(link);

    JsFuture::from(navigator.share_with_data(&data)).await.is_ok()
}

async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        if !document.exec_command("copy").unwrap_or(false) {
            textarea.remove();
            return Err("Clipboard copy blocked".into());
        }
        textarea.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}
