//! Login / signup tab contract shared by the UI layers.
//!
//! Everything here is browser independent so the state rules can be tested natively.

pub mod markup;
pub mod tab;

pub use markup::TabMarkup;
pub use tab::{AuthTab, TabView};
