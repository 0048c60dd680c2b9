//! Markup contract between the page and the tab toggler.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::AuthTab;

/// Element ids and marker classes the toggler relies on.
///
/// Missing fields fall back to the ids used by the stock login page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabMarkup {
    pub login_trigger: String,
    pub signup_trigger: String,
    pub login_panel: String,
    pub signup_panel: String,
    pub active_class: String,
    pub hidden_class: String,
}

impl Default for TabMarkup {
    fn default() -> Self {
        Self {
            login_trigger: "login-btn".to_string(),
            signup_trigger: "signup-btn".to_string(),
            login_panel: "login-form".to_string(),
            signup_panel: "signup-form".to_string(),
            active_class: "active".to_string(),
            hidden_class: "hidden".to_string(),
        }
    }
}

impl TabMarkup {
    /// Parse a markup contract from JSON text, e.g. a `data-` attribute value.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let markup: TabMarkup =
            serde_json::from_str(json).context("Invalid tab markup JSON")?;
        markup.validate()?;
        Ok(markup)
    }

    /// Ids must be single non-empty tokens and distinct; same for the two classes.
    ///
    /// The DOM rejects class tokens containing whitespace, so such a name
    /// would make every class-list mutation fail.
    pub fn validate(&self) -> anyhow::Result<()> {
        let ids = self.ids();
        for (i, id) in ids.iter().enumerate() {
            check_token("Element id", id)?;
            if ids[..i].contains(id) {
                anyhow::bail!("Element id '{}' is used twice", id);
            }
        }
        check_token("Active class", &self.active_class)?;
        check_token("Hidden class", &self.hidden_class)?;
        if self.active_class == self.hidden_class {
            anyhow::bail!("Active and hidden classes must differ");
        }
        Ok(())
    }

    pub fn trigger_id(&self, tab: AuthTab) -> &str {
        match tab {
            AuthTab::Login => &self.login_trigger,
            AuthTab::Signup => &self.signup_trigger,
        }
    }

    pub fn panel_id(&self, tab: AuthTab) -> &str {
        match tab {
            AuthTab::Login => &self.login_panel,
            AuthTab::Signup => &self.signup_panel,
        }
    }

    fn ids(&self) -> [&str; 4] {
        [
            &self.login_trigger,
            &self.signup_trigger,
            &self.login_panel,
            &self.signup_panel,
        ]
    }
}

fn check_token(what: &str, value: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} is empty", what);
    }
    if value.chars().any(char::is_whitespace) {
        anyhow::bail!("{} '{}' contains whitespace", what, value);
    }
    Ok(())
}
