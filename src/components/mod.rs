//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome while reading shared session state from
//! Leptos context providers; mutation stays in the pages.

pub mod card_tile;
pub mod progress_banner;
pub mod route_guard;
