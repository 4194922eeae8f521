//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Plain data mutated through an `RwSignal` in context; timers that expire
//! toasts live in `util::notify` so this model stays testable off-browser.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Oldest toasts are dropped beyond this many.
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// How long a toast stays on screen before auto-dismiss.
pub const TOAST_TTL_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts in arrival order.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast; returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}
