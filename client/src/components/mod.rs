//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render account and comparison surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod linked_text;
pub mod profile_modal;
pub mod profile_panel;
pub mod signup_form;
pub mod toaster;
