//! Login / signup tab switching.
//!
//! Two ways to use it:
//!
//! ```ignore
//! // 1. Page markup already exists (server-rendered template)
//! let attached = attach_to_window(&TabMarkup::default())?;
//! attached.leak();
//!
//! // 2. Page is built in Leptos
//! view! { <AuthTabs initial=AuthTab::Signup /> }
//! ```
//!
//! Both follow the same rule from [`contracts::auth::TabView`].

pub mod component;
pub mod dom;
pub mod toggler;

pub use component::AuthTabs;
pub use dom::{
    attach, attach_to_window, markup_from_document, window_document, AttachError,
    AttachedToggler, MARKUP_ATTRIBUTE,
};
pub use toggler::{ClassTarget, TabToggler};
