//! Platform-neutral registration form core.
//!
//! Holds the in-progress registration draft, resolves profile image previews,
//! and maps one multipart submission to notifications and navigation. Browser
//! and native front-ends plug in their own file handles, transports, toast
//! presenters and routers through the traits exported here.
//!
//! ```text
//! input event ──► RegistrationDraft::apply_input ──► update
//!                       │
//!        render ──► ImagePreview::resolve ──► object URL | placeholder
//!                       │
//!        submit ──► SubmissionHandler::submit ──► RegisterTransport
//!                                           ├──► Notifier
//!                                           └──► Navigator
//! ```

pub mod config;
pub mod draft;
pub mod preview;
pub mod submit;
pub mod wire;

pub use config::{ClientConfig, ConfigError};
pub use draft::{DraftField, FieldValue, FormPhase, RegistrationDraft, UnknownField};
pub use preview::{ImagePreview, PLACEHOLDER_AVATAR_URL, PreviewError, PreviewUrls};
pub use submit::{Navigator, Notifier, SubmissionHandler, SubmitOutcome};
pub use wire::{RegisterReply, RegisterTransport, RegistrationForm, ResponseBody, TransportError};
