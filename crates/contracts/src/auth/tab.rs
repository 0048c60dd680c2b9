use serde::{Deserialize, Serialize};

/// Tab of the login / signup box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

impl AuthTab {
    /// Code used in `form_type` hidden inputs and logs.
    pub fn code(&self) -> &'static str {
        match self {
            AuthTab::Login => "login",
            AuthTab::Signup => "signup",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AuthTab::Login => "Login",
            AuthTab::Signup => "Sign Up",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            AuthTab::Login => AuthTab::Signup,
            AuthTab::Signup => AuthTab::Login,
        }
    }

    pub fn all() -> [AuthTab; 2] {
        [AuthTab::Login, AuthTab::Signup]
    }
}

/// Visual state of both triggers and both panels.
///
/// Built only through [`TabView::of`], so every instance produced by the
/// toggler keeps the complementary pair: the selected trigger is active and
/// the other tab's panel is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabView {
    pub login_trigger_active: bool,
    pub signup_trigger_active: bool,
    pub login_panel_hidden: bool,
    pub signup_panel_hidden: bool,
}

impl TabView {
    pub fn of(tab: AuthTab) -> Self {
        let login = tab == AuthTab::Login;
        Self {
            login_trigger_active: login,
            signup_trigger_active: !login,
            login_panel_hidden: !login,
            signup_panel_hidden: login,
        }
    }

    pub fn trigger_active(&self, tab: AuthTab) -> bool {
        match tab {
            AuthTab::Login => self.login_trigger_active,
            AuthTab::Signup => self.signup_trigger_active,
        }
    }

    pub fn panel_hidden(&self, tab: AuthTab) -> bool {
        match tab {
            AuthTab::Login => self.login_panel_hidden,
            AuthTab::Signup => self.signup_panel_hidden,
        }
    }

    /// Tab this view selects, if it is consistent.
    pub fn selected(&self) -> Option<AuthTab> {
        AuthTab::all()
            .into_iter()
            .find(|tab| *self == TabView::of(*tab))
    }

    /// Exactly one trigger active, exactly one panel hidden, and the active
    /// trigger's own panel is the visible one.
    pub fn is_consistent(&self) -> bool {
        self.login_trigger_active != self.signup_trigger_active
            && self.login_panel_hidden != self.signup_panel_hidden
            && self.login_trigger_active == self.signup_panel_hidden
    }
}
