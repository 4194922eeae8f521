//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Adapters that let the framework-neutral submission handler drive Leptos
//! toasts and router navigation.

pub mod navigate;
pub mod notify;
