//! Register form submission: precondition, one multipart POST, and the
//! mapping from its result to toasts, draft reset and navigation.
//!
//! STATE MACHINE
//! =============
//! `Editing ──submit──► Submitting ──200──► Registered` (draft reset, go to login)
//! `Submitting ──error / non-200──► Editing` (toast shown, draft kept)
//!
//! A submit while `Submitting` is refused, so a double click sends one
//! request. There is no retry and no cancellation.
//!
//! The flow is split into [`begin`](SubmissionHandler::begin),
//! [`send`](SubmissionHandler::send), [`finish`](SubmissionHandler::finish)
//! and [`follow_up`](SubmissionHandler::follow_up) so reactive front-ends can
//! hold their draft in a signal across the await point;
//! [`submit`](SubmissionHandler::submit) chains all four for plain owners.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::config::ClientConfig;
use crate::draft::{FormPhase, RegistrationDraft};
use crate::wire::{RegisterReply, RegisterTransport, RegistrationForm, TransportError};

pub const MISSING_PROFILE_MESSAGE: &str = "Please select a profile picture";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";
/// Used when a 200 response carries no `message`.
pub const REGISTRATION_SUCCEEDED_MESSAGE: &str = "Registration successful";

/// Transient user-visible notifications (toasts).
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Client-side route changes.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// How one submit attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was still in flight; nothing was sent.
    InFlight,
    /// No profile image selected; nothing was sent.
    MissingProfile,
    /// Server answered 200; draft reset and login route requested.
    Registered { message: String },
    /// Server answered a 2xx other than 200; nothing else happened.
    Ignored { status: u16 },
    /// Request failed or server answered non-2xx; draft kept.
    Failed { message: String },
}

/// Submission handler with injected transport, toast presenter and router.
#[derive(Debug)]
pub struct SubmissionHandler<T, N, V> {
    config: ClientConfig,
    transport: T,
    notifier: N,
    navigator: V,
}

impl<T, N, V> SubmissionHandler<T, N, V>
where
    T: RegisterTransport,
    N: Notifier,
    V: Navigator,
{
    pub fn new(config: ClientConfig, transport: T, notifier: N, navigator: V) -> Self {
        Self { config, transport, notifier, navigator }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn navigator(&self) -> &V {
        &self.navigator
    }

    /// Run one complete submission against a draft the caller owns.
    pub async fn submit(&self, draft: &mut RegistrationDraft<T::File>, phase: &mut FormPhase) -> SubmitOutcome {
        let result = match self.begin(draft, phase) {
            Ok(form) => self.send(form).await,
            Err(outcome) => return outcome,
        };
        let outcome = self.finish(result, draft, phase);
        self.follow_up(&outcome);
        outcome
    }

    /// Check the in-flight guard and the profile-image precondition.
    ///
    /// On success `phase` becomes [`FormPhase::Submitting`] and the borrowed
    /// form is ready to [`send`](Self::send).
    ///
    /// # Errors
    ///
    /// Returns the terminal [`SubmitOutcome`] when nothing should be sent.
    pub fn begin<'a>(
        &self,
        draft: &'a RegistrationDraft<T::File>,
        phase: &mut FormPhase,
    ) -> Result<RegistrationForm<'a, T::File>, SubmitOutcome> {
        // Guard added on top of the plain form flow: one request per click.
        if *phase == FormPhase::Submitting {
            log::debug!("register submit ignored: request already in flight");
            return Err(SubmitOutcome::InFlight);
        }
        let Some(profile) = draft.profile.as_ref() else {
            self.notifier.error(MISSING_PROFILE_MESSAGE);
            return Err(SubmitOutcome::MissingProfile);
        };

        *phase = FormPhase::Submitting;
        Ok(RegistrationForm {
            name: &draft.name,
            email: &draft.email,
            password: &draft.password,
            profile,
        })
    }

    /// Issue the single register request.
    ///
    /// # Errors
    ///
    /// Propagates [`TransportError`] from the transport unchanged.
    pub async fn send(&self, form: RegistrationForm<'_, T::File>) -> Result<RegisterReply, TransportError> {
        let url = self.config.register_endpoint();
        log::info!("register request: url={url} email={}", form.email);
        self.transport.register(&url, form).await
    }

    /// Apply a settled request to the live draft and raise the toast.
    pub fn finish(
        &self,
        result: Result<RegisterReply, TransportError>,
        draft: &mut RegistrationDraft<T::File>,
        phase: &mut FormPhase,
    ) -> SubmitOutcome {
        match result {
            Ok(reply) if reply.status == 200 => {
                let message = reply.message().unwrap_or(REGISTRATION_SUCCEEDED_MESSAGE).to_owned();
                log::info!("register succeeded");
                self.notifier.success(&message);
                draft.reset();
                *phase = FormPhase::Registered;
                SubmitOutcome::Registered { message }
            }
            Ok(reply) if reply.is_success() => {
                log::warn!("register returned unexpected success status {}", reply.status);
                *phase = FormPhase::Editing;
                SubmitOutcome::Ignored { status: reply.status }
            }
            Ok(reply) => {
                log::warn!("register rejected: status={}", reply.status);
                *phase = FormPhase::Editing;
                self.fail(reply.message())
            }
            Err(e) => {
                log::warn!("{e}");
                *phase = FormPhase::Editing;
                self.fail(None)
            }
        }
    }

    /// Route away after a successful registration.
    pub fn follow_up(&self, outcome: &SubmitOutcome) {
        if matches!(outcome, SubmitOutcome::Registered { .. }) {
            self.navigator.navigate(self.config.login_route());
        }
    }

    fn fail(&self, server_message: Option<&str>) -> SubmitOutcome {
        let message = server_message.unwrap_or(REGISTRATION_FAILED_MESSAGE).to_owned();
        self.notifier.error(&message);
        SubmitOutcome::Failed { message }
    }
}
