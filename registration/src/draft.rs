//! In-progress registration data and field updates.
//!
//! DESIGN
//! ======
//! The draft is generic over the platform's file handle so the browser can
//! keep a `web_sys::File` while native callers hold bytes read from disk.
//! Updates replace exactly one field; nothing here validates input.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::fmt;
use std::str::FromStr;

/// Unsaved registration data held by one form instance.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationDraft<F> {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile: Option<F>,
}

impl<F> Default for RegistrationDraft<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            profile: None,
        }
    }
}

/// Form inputs that can be edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Email,
    Password,
    Profile,
}

impl DraftField {
    /// Value of the HTML `name` attribute bound to this field, also used as
    /// the multipart part name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "profile" => Ok(Self::Profile),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

/// Input `name` attribute that does not map to a draft field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

/// New value delivered by an input change event.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<F> {
    /// Text typed into a name/email/password input.
    Text(String),
    /// Files chosen in the picker, in selection order.
    Files(Vec<F>),
}

/// Where the form is in its submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    /// Registration accepted; the page is navigating away.
    Registered,
}

impl<F> RegistrationDraft<F> {
    /// Replace one field with `value`, leaving the others untouched.
    ///
    /// For [`DraftField::Profile`] the first selected file wins and an empty
    /// selection keeps the current image. Mismatched value kinds are ignored.
    pub fn update(&mut self, field: DraftField, value: FieldValue<F>) {
        match (field, value) {
            (DraftField::Name, FieldValue::Text(text)) => self.name = text,
            (DraftField::Email, FieldValue::Text(text)) => self.email = text,
            (DraftField::Password, FieldValue::Text(text)) => self.password = text,
            (DraftField::Profile, FieldValue::Files(files)) => {
                if let Some(first) = files.into_iter().next() {
                    self.profile = Some(first);
                }
            }
            (field, _) => log::debug!("ignoring mismatched value for field {field}"),
        }
    }

    /// Route an input event to the field named by its `name` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownField`] when `name` is not one of the draft inputs;
    /// the draft is left unchanged.
    pub fn apply_input(&mut self, name: &str, value: FieldValue<F>) -> Result<DraftField, UnknownField> {
        let field = name.parse::<DraftField>()?;
        self.update(field, value);
        Ok(field)
    }

    /// Consuming form of [`update`](Self::update) for signal `update` closures
    /// and builder-style tests.
    #[must_use]
    pub fn with(mut self, field: DraftField, value: FieldValue<F>) -> Self {
        self.update(field, value);
        self
    }

    /// Drop all entered data, returning to the mount-time defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the draft still holds only defaults.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.password.is_empty() && self.profile.is_none()
    }
}
