use contracts::auth::{AuthTab, TabMarkup, TabView};
use leptos::prelude::*;

const DEFAULT_ACTION: &str = "/login_signup";

/// Markup to render with; an invalid contract falls back to the stock ids.
fn resolve_markup(markup: Option<TabMarkup>) -> TabMarkup {
    match markup {
        Some(markup) => match markup.validate() {
            Ok(()) => markup,
            Err(e) => {
                log::warn!("Invalid auth tab markup ({:#}), using defaults", e);
                TabMarkup::default()
            }
        },
        None => TabMarkup::default(),
    }
}

fn trigger_class(view: &TabView, tab: AuthTab, markup: &TabMarkup) -> String {
    if view.trigger_active(tab) {
        format!("tab-btn {}", markup.active_class)
    } else {
        "tab-btn".to_string()
    }
}

fn panel_class(view: &TabView, tab: AuthTab, markup: &TabMarkup) -> String {
    if view.panel_hidden(tab) {
        format!("auth-form {}", markup.hidden_class)
    } else {
        "auth-form".to_string()
    }
}

/// Login / signup box rendered by Leptos.
///
/// Emits the same ids and marker classes as the server template, so page CSS
/// works unchanged. Forms are submitted by the browser as plain HTML posts.
#[component]
pub fn AuthTabs(
    /// Tab shown on first render
    #[prop(optional)]
    initial: AuthTab,
    /// Form `action` for both forms (default: `/login_signup`)
    #[prop(optional, into)]
    action: MaybeProp<String>,
    /// Element ids and marker classes
    #[prop(optional)]
    markup: Option<TabMarkup>,
) -> impl IntoView {
    let markup = StoredValue::new(resolve_markup(markup));
    let selected = RwSignal::new(initial);
    let view_state = Memo::new(move |_| TabView::of(selected.get()));

    let action = move || action.get().unwrap_or_else(|| DEFAULT_ACTION.to_string());

    let select = move |tab: AuthTab| {
        if selected.get_untracked() != tab {
            log::debug!("auth tab activated: {}", tab.code());
        }
        selected.set(tab);
    };

    let trigger = move |tab: AuthTab| {
        view! {
            <button
                type="button"
                id=markup.with_value(|m| m.trigger_id(tab).to_string())
                class=move || markup.with_value(|m| trigger_class(&view_state.get(), tab, m))
                on:click=move |_| select(tab)
            >
                {tab.display_name()}
            </button>
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-tabs">
                {trigger(AuthTab::Login)}
                {trigger(AuthTab::Signup)}
            </div>

            <form
                id=markup.with_value(|m| m.panel_id(AuthTab::Login).to_string())
                class=move || markup.with_value(|m| panel_class(&view_state.get(), AuthTab::Login, m))
                method="post"
                action=action
            >
                <input type="hidden" name="form_type" value=AuthTab::Login.code() />
                <input type="email" name="email" placeholder="Email" required />
                <input type="password" name="password" placeholder="Password" required />
                <button type="submit" class="button button--primary">"Login"</button>
            </form>

            <form
                id=markup.with_value(|m| m.panel_id(AuthTab::Signup).to_string())
                class=move || markup.with_value(|m| panel_class(&view_state.get(), AuthTab::Signup, m))
                method="post"
                action=action
            >
                <input type="hidden" name="form_type" value=AuthTab::Signup.code() />
                <input type="text" name="username" placeholder="Username" required />
                <input type="email" name="email" placeholder="Email" required />
                <input type="password" name="password" placeholder="Password" required />
                <input type="password" name="confirm_password" placeholder="Confirm Password" required />
                <button type="submit" class="button button--primary">"Sign Up"</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_follow_view() {
        let markup = TabMarkup::default();
        let view = TabView::of(AuthTab::Signup);

        assert_eq!(trigger_class(&view, AuthTab::Signup, &markup), "tab-btn active");
        assert_eq!(trigger_class(&view, AuthTab::Login, &markup), "tab-btn");
        assert_eq!(panel_class(&view, AuthTab::Signup, &markup), "auth-form");
        assert_eq!(panel_class(&view, AuthTab::Login, &markup), "auth-form hidden");
    }

    #[test]
    fn test_invalid_markup_falls_back_to_defaults() {
        let duplicate_ids = TabMarkup {
            signup_panel: "login-form".to_string(),
            ..TabMarkup::default()
        };
        assert_eq!(resolve_markup(Some(duplicate_ids)), TabMarkup::default());

        let spaced_class = TabMarkup {
            hidden_class: "d none".to_string(),
            ..TabMarkup::default()
        };
        assert_eq!(resolve_markup(Some(spaced_class)), TabMarkup::default());
    }

    #[test]
    fn test_valid_markup_is_kept() {
        let custom = TabMarkup {
            login_trigger: "tab-login".to_string(),
            ..TabMarkup::default()
        };
        assert_eq!(resolve_markup(Some(custom.clone())), custom);
        assert_eq!(resolve_markup(None), TabMarkup::default());
    }

    #[test]
    fn test_custom_marker_classes() {
        let markup = TabMarkup {
            active_class: "is-selected".to_string(),
            hidden_class: "d-none".to_string(),
            ..TabMarkup::default()
        };
        let view = TabView::of(AuthTab::Login);

        assert_eq!(trigger_class(&view, AuthTab::Login, &markup), "tab-btn is-selected");
        assert_eq!(panel_class(&view, AuthTab::Signup, &markup), "auth-form d-none");
    }
}
