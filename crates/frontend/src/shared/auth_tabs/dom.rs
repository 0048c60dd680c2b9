//! Binding the toggler to an existing document.

use std::rc::Rc;

use contracts::auth::{AuthTab, TabMarkup};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use super::toggler::TabToggler;

#[derive(Debug, Error)]
pub enum AttachError {
    #[error("No document available")]
    NoDocument,

    #[error("Element #{id} ({role}) not found")]
    MissingElement { role: &'static str, id: String },

    #[error("Invalid tab markup: {0}")]
    InvalidMarkup(String),

    #[error("Failed to listen for clicks on #{id}: {message}")]
    Listener { id: String, message: String },
}

impl From<AttachError> for JsValue {
    fn from(err: AttachError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

type ClickHandler = Closure<dyn FnMut(Event)>;

/// Body attribute holding a JSON markup contract for pages with custom ids.
pub const MARKUP_ATTRIBUTE: &str = "data-auth-tabs";

struct Listener {
    target: Element,
    handler: ClickHandler,
}

/// Click listeners wired to the document.
///
/// Dropping it removes the listeners again; call [`AttachedToggler::leak`]
/// to keep them for the lifetime of the page.
pub struct AttachedToggler {
    listeners: Vec<Listener>,
}

impl AttachedToggler {
    pub fn leak(mut self) {
        for listener in std::mem::take(&mut self.listeners) {
            listener.handler.forget();
        }
    }
}

impl Drop for AttachedToggler {
    fn drop(&mut self) {
        for listener in &self.listeners {
            let _ = listener.target.remove_event_listener_with_callback(
                "click",
                listener.handler.as_ref().unchecked_ref(),
            );
        }
    }
}

fn find(document: &Document, role: &'static str, id: &str) -> Result<Element, AttachError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AttachError::MissingElement {
            role,
            id: id.to_string(),
        })
}

fn find_pair(
    document: &Document,
    markup: &TabMarkup,
    tab: AuthTab,
) -> Result<(Element, Element), AttachError> {
    let (trigger_role, panel_role) = match tab {
        AuthTab::Login => ("login trigger", "login panel"),
        AuthTab::Signup => ("signup trigger", "signup panel"),
    };
    Ok((
        find(document, trigger_role, markup.trigger_id(tab))?,
        find(document, panel_role, markup.panel_id(tab))?,
    ))
}

/// Markup contract for `document`: the JSON in `data-auth-tabs` on `<body>`,
/// or the stock ids when the attribute is absent.
pub fn markup_from_document(document: &Document) -> Result<TabMarkup, AttachError> {
    match document.body().and_then(|b| b.get_attribute(MARKUP_ATTRIBUTE)) {
        Some(json) => TabMarkup::from_json(&json)
            .map_err(|e| AttachError::InvalidMarkup(format!("{:#}", e))),
        None => Ok(TabMarkup::default()),
    }
}

/// Look up the two triggers and two panels by id and listen for clicks on the triggers.
pub fn attach(document: &Document, markup: &TabMarkup) -> Result<AttachedToggler, AttachError> {
    markup
        .validate()
        .map_err(|e| AttachError::InvalidMarkup(e.to_string()))?;

    let (login_trigger, login_panel) = find_pair(document, markup, AuthTab::Login)?;
    let (signup_trigger, signup_panel) = find_pair(document, markup, AuthTab::Signup)?;

    let toggler = Rc::new(TabToggler::new(
        login_trigger.clone(),
        signup_trigger.clone(),
        login_panel,
        signup_panel,
        markup,
    ));

    let initial = toggler.view();
    if !initial.is_consistent() {
        log::warn!("auth tab markup starts inconsistent: {:?}", initial);
    }

    let mut attached = AttachedToggler {
        listeners: Vec::with_capacity(2),
    };

    for (tab, target) in [(AuthTab::Login, login_trigger), (AuthTab::Signup, signup_trigger)] {
        let toggler = toggler.clone();
        let handler = Closure::wrap(Box::new(move |_event: Event| {
            toggler.activate(tab);
        }) as Box<dyn FnMut(Event)>);

        // on failure `attached` drops and removes the listeners added so far
        target
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(|e| AttachError::Listener {
                id: markup.trigger_id(tab).to_string(),
                message: format!("{:?}", e),
            })?;

        attached.listeners.push(Listener { target, handler });
    }

    log::info!(
        "auth tabs attached: #{} / #{} (selected: {:?})",
        markup.login_trigger,
        markup.signup_trigger,
        initial.selected()
    );
    Ok(attached)
}

pub fn attach_to_window(markup: &TabMarkup) -> Result<AttachedToggler, AttachError> {
    attach(&window_document()?, markup)
}

pub fn window_document() -> Result<Document, AttachError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(AttachError::NoDocument)
}
