pub mod shared;

use contracts::auth::TabMarkup;
use leptos::prelude::*;
use shared::auth_tabs::{
    attach, attach_to_window, markup_from_document, window_document, AttachError, AuthTabs,
};
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

fn init_logging() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

fn attach_and_keep(markup: &TabMarkup) -> Result<(), AttachError> {
    let attached = attach_to_window(markup)?;
    attached.leak();
    Ok(())
}

/// Wire the tab buttons of a server-rendered page, using a custom markup contract.
///
/// `config` is a plain JS object with any of the `TabMarkup` fields;
/// `undefined` or `null` means the stock ids.
#[wasm_bindgen]
pub fn attach_auth_tabs(config: JsValue) -> Result<(), JsValue> {
    init_logging();

    let markup = if config.is_undefined() || config.is_null() {
        TabMarkup::default()
    } else {
        serde_wasm_bindgen::from_value::<TabMarkup>(config)
            .map_err(|e| AttachError::InvalidMarkup(e.to_string()))?
    };

    attach_and_keep(&markup).map_err(|e| {
        log::error!("Failed to attach auth tabs: {}", e);
        JsValue::from(e)
    })
}

/// Render the login / signup box into `<body>`.
#[wasm_bindgen]
pub fn mount_auth_tabs() {
    init_logging();
    leptos::mount::mount_to_body(|| view! { <AuthTabs /> });
}

/// Markup comes from `<body data-auth-tabs="{...}">` when present.
fn attach_from_document() -> Result<(), AttachError> {
    let document = window_document()?;
    let markup = markup_from_document(&document)?;
    attach(&document, &markup)?.leak();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logging();

    match attach_from_document() {
        Ok(()) => {}
        // page renders its own tabs through `mount_auth_tabs`
        Err(AttachError::MissingElement { id, .. }) => {
            log::warn!("Auth tab markup not found (#{}), nothing attached", id);
        }
        Err(e) => log::error!("Failed to attach auth tabs: {}", e),
    }
}
