//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only state shared across routes lives here; the registration draft is
//! owned by the register page for its mount lifetime.

pub mod toast;
