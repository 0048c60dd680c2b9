//! Listener wiring against a real document; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use contracts::auth::{AuthTab, TabMarkup, TabView};
use frontend::shared::auth_tabs::{
    attach, markup_from_document, window_document, AttachError, MARKUP_ATTRIBUTE,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Login page markup with ids prefixed by `prefix`, removed again on drop.
struct Page {
    document: Document,
    markup: TabMarkup,
    elements: Vec<Element>,
}

impl Page {
    fn new(prefix: &str) -> Self {
        let document = window_document().unwrap();
        let markup = TabMarkup {
            login_trigger: format!("{}-login-btn", prefix),
            signup_trigger: format!("{}-signup-btn", prefix),
            login_panel: format!("{}-login-form", prefix),
            signup_panel: format!("{}-signup-form", prefix),
            ..TabMarkup::default()
        };
        let body = document.body().unwrap();
        let mut elements = Vec::new();
        for (tag, id, class) in [
            ("button", &markup.login_trigger, "tab-btn active"),
            ("button", &markup.signup_trigger, "tab-btn"),
            ("form", &markup.login_panel, "auth-form"),
            ("form", &markup.signup_panel, "auth-form hidden"),
        ] {
            let el = document.create_element(tag).unwrap();
            el.set_id(id);
            el.set_class_name(class);
            body.append_child(&el).unwrap();
            elements.push(el);
        }
        Self {
            document,
            markup,
            elements,
        }
    }

    fn element(&self, id: &str) -> Element {
        self.document.get_element_by_id(id).unwrap()
    }

    fn click(&self, tab: AuthTab) {
        self.element(self.markup.trigger_id(tab))
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn view(&self) -> TabView {
        let has = |id: &str, class: &str| self.element(id).class_list().contains(class);
        TabView {
            login_trigger_active: has(&self.markup.login_trigger, "active"),
            signup_trigger_active: has(&self.markup.signup_trigger, "active"),
            login_panel_hidden: has(&self.markup.login_panel, "hidden"),
            signup_panel_hidden: has(&self.markup.signup_panel, "hidden"),
        }
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        for el in &self.elements {
            el.remove();
        }
    }
}

#[wasm_bindgen_test]
fn click_switches_tabs() {
    let page = Page::new("switch");
    let attached = attach(&page.document, &page.markup).unwrap();

    page.click(AuthTab::Signup);
    assert_eq!(page.view(), TabView::of(AuthTab::Signup));

    page.click(AuthTab::Signup);
    assert_eq!(page.view(), TabView::of(AuthTab::Signup));

    page.click(AuthTab::Login);
    assert_eq!(page.view(), TabView::of(AuthTab::Login));

    drop(attached);
}

#[wasm_bindgen_test]
fn dropping_detaches_listeners() {
    let page = Page::new("detach");
    let attached = attach(&page.document, &page.markup).unwrap();
    drop(attached);

    page.click(AuthTab::Signup);
    assert_eq!(page.view(), TabView::of(AuthTab::Login));
}

#[wasm_bindgen_test]
fn missing_element_is_named() {
    let page = Page::new("missing");
    page.element(&page.markup.signup_panel).remove();

    match attach(&page.document, &page.markup) {
        Err(AttachError::MissingElement { role, id }) => {
            assert_eq!(role, "signup panel");
            assert_eq!(id, "missing-signup-form");
        }
        other => panic!("expected MissingElement, got {:?}", other.err()),
    }
}

#[wasm_bindgen_test]
fn whitespace_class_is_rejected_before_listening() {
    let page = Page::new("spaced");
    let markup = TabMarkup {
        active_class: "is selected".to_string(),
        ..page.markup.clone()
    };

    assert!(matches!(
        attach(&page.document, &markup),
        Err(AttachError::InvalidMarkup(_))
    ));
    page.click(AuthTab::Signup);
    assert_eq!(page.view(), TabView::of(AuthTab::Login));
}

#[wasm_bindgen_test]
fn markup_is_read_from_body_attribute() {
    let document = window_document().unwrap();
    let body = document.body().unwrap();

    assert_eq!(markup_from_document(&document).unwrap(), TabMarkup::default());

    body.set_attribute(MARKUP_ATTRIBUTE, r#"{"login_trigger":"tab-login"}"#)
        .unwrap();
    let markup = markup_from_document(&document).unwrap();
    assert_eq!(markup.login_trigger, "tab-login");
    assert_eq!(markup.signup_trigger, "signup-btn");

    body.set_attribute(MARKUP_ATTRIBUTE, "not json").unwrap();
    assert!(matches!(
        markup_from_document(&document),
        Err(AttachError::InvalidMarkup(_))
    ));

    body.remove_attribute(MARKUP_ATTRIBUTE).unwrap();
}
