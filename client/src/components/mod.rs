//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod chat_widget;
pub mod contact_section;
pub mod loading_screen;
pub mod nav_bar;
pub mod project_card;
pub mod scroll_top;
pub mod site_footer;
pub mod theme_toggle;
