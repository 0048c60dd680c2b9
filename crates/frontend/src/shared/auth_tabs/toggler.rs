use contracts::auth::{AuthTab, TabMarkup, TabView};
use web_sys::Element;

/// Anything whose class list the toggler can flip.
pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

impl ClassTarget for Element {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::warn!("Failed to add class '{}' to #{}: {:?}", class, self.id(), e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            log::warn!("Failed to remove class '{}' from #{}: {:?}", class, self.id(), e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

impl<T: ClassTarget + ?Sized> ClassTarget for &T {
    fn add_class(&self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class)
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

/// Keeps the two (trigger, panel) pairs mutually exclusive.
///
/// Holds handles to elements owned by the document; it never creates or
/// removes them, only flips the active/hidden marker classes.
pub struct TabToggler<E: ClassTarget> {
    login_trigger: E,
    signup_trigger: E,
    login_panel: E,
    signup_panel: E,
    active_class: String,
    hidden_class: String,
}

impl<E: ClassTarget> TabToggler<E> {
    pub fn new(
        login_trigger: E,
        signup_trigger: E,
        login_panel: E,
        signup_panel: E,
        markup: &TabMarkup,
    ) -> Self {
        Self {
            login_trigger,
            signup_trigger,
            login_panel,
            signup_panel,
            active_class: markup.active_class.clone(),
            hidden_class: markup.hidden_class.clone(),
        }
    }

    fn trigger(&self, tab: AuthTab) -> &E {
        match tab {
            AuthTab::Login => &self.login_trigger,
            AuthTab::Signup => &self.signup_trigger,
        }
    }

    fn panel(&self, tab: AuthTab) -> &E {
        match tab {
            AuthTab::Login => &self.login_panel,
            AuthTab::Signup => &self.signup_panel,
        }
    }

    /// Select `tab`: its trigger becomes active and its panel visible, the
    /// other pair is cleared. Activating the selected tab again changes nothing.
    pub fn activate(&self, tab: AuthTab) -> TabView {
        let target = TabView::of(tab);
        let other = tab.other();

        self.trigger(tab).set_class(&self.active_class, true);
        self.trigger(other).set_class(&self.active_class, false);
        self.panel(tab).set_class(&self.hidden_class, false);
        self.panel(other).set_class(&self.hidden_class, true);

        log::debug!("auth tab activated: {}", tab.code());
        target
    }

    /// Markers as they currently are on the elements.
    pub fn view(&self) -> TabView {
        TabView {
            login_trigger_active: self.login_trigger.has_class(&self.active_class),
            signup_trigger_active: self.signup_trigger.has_class(&self.active_class),
            login_panel_hidden: self.login_panel.has_class(&self.hidden_class),
            signup_panel_hidden: self.signup_panel.has_class(&self.hidden_class),
        }
    }

    /// Selected tab, judged by the trigger markers alone.
    pub fn current(&self) -> Option<AuthTab> {
        let view = self.view();
        match (view.login_trigger_active, view.signup_trigger_active) {
            (true, false) => Some(AuthTab::Login),
            (false, true) => Some(AuthTab::Signup),
            _ => None,
        }
    }
}
