//! The activity form controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits between a [`FormView`] (DOM or terminal) and a [`Transport`]. Each
//! submission reads the fields, validates them, sends at most one request,
//! and renders exactly one of the result or error panels.
//!
//! DESIGN
//! ======
//! Methods take `&self` and the mode lives in a `Cell`, so one controller can
//! be shared through `Rc` by several event callbacks on a single-threaded
//! event loop. The mode is the re-entrancy guard: a submit or reset that
//! arrives while a request is in flight is ignored.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;

use form::{FormFields, FormInput, ValidationError, validate};

use crate::config::ClientConfig;
use crate::net::api::{self, Transport};
use crate::net::error::SubmitError;
use crate::state::ui::{Panels, UiEvent, UiState};

/// The UI surface the controller drives.
///
/// Implementations own their element handles. `apply_panels` is the only way
/// panels become visible, and it is always called after the matching content
/// setter.
pub trait FormView {
    fn read_fields(&self) -> FormFields;
    fn write_fields(&self, fields: &FormFields);
    /// Blocking, user-facing validation message.
    fn alert(&self, message: &str);
    fn set_activities(&self, activities: &str);
    fn set_error_message(&self, message: &str);
    fn apply_panels(&self, panels: Panels);
}

/// Result of one [`FormController::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A request was already in flight; nothing happened.
    Busy,
    /// The form failed validation; no request was sent.
    Invalid(ValidationError),
    /// The backend returned activities, now shown in the result panel.
    Activities(String),
    /// The request failed; the message is shown in the error panel.
    Failed(SubmitError),
}

pub struct FormController<V, T> {
    view: V,
    transport: T,
    endpoint: String,
    default_fields: FormFields,
    state: Cell<UiState>,
}

impl<V: FormView, T: Transport> FormController<V, T> {
    /// Wrap `view` and `transport`, starting in [`UiState::Idle`] with both
    /// panels hidden.
    pub fn new(view: V, transport: T, config: &ClientConfig) -> Self {
        view.apply_panels(UiState::Idle.panels());
        Self {
            view,
            transport,
            endpoint: config.endpoint_url(),
            default_fields: config.default_fields(),
            state: Cell::new(UiState::Idle),
        }
    }

    #[must_use]
    pub fn state(&self) -> UiState {
        self.state.get()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Read and parse the current field values.
    #[must_use]
    pub fn collect_input(&self) -> FormInput {
        FormInput::from_fields(&self.view.read_fields())
    }

    /// Validate the form and, if it passes, send it and render the reply.
    pub async fn submit(&self) -> Outcome {
        if self.state.get().is_loading() {
            tracing::debug!("submit ignored: request already in flight");
            return Outcome::Busy;
        }

        let request = match validate(&self.collect_input()) {
            Ok(request) => request,
            Err(err) => {
                tracing::info!(reason = %err, "activity form rejected");
                self.transition(UiEvent::Rejected);
                self.view.alert(&err.to_string());
                return Outcome::Invalid(err);
            }
        };

        self.transition(UiEvent::Submit);
        match api::submit(&self.transport, &self.endpoint, &request).await {
            Ok(activities) => {
                tracing::info!(len = activities.len(), "activities received");
                self.view.set_activities(&activities);
                self.transition(UiEvent::Succeeded);
                Outcome::Activities(activities)
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "activity request failed");
                self.view.set_error_message(&err.user_message());
                self.transition(UiEvent::Failed);
                Outcome::Failed(err)
            }
        }
    }

    /// Restore the default form and hide both panels.
    ///
    /// Returns `false`, changing nothing, while a request is in flight.
    pub fn reset(&self) -> bool {
        if self.state.get().is_loading() {
            return false;
        }
        self.view.write_fields(&self.default_fields);
        self.transition(UiEvent::Reset)
    }

    /// Hide the error panel. Returns `false` while a request is in flight.
    pub fn dismiss_error(&self) -> bool {
        self.transition(UiEvent::DismissError)
    }

    fn transition(&self, event: UiEvent) -> bool {
        let Some(next) = self.state.get().on(event) else {
            return false;
        };
        self.state.set(next);
        self.view.apply_panels(next.panels());
        true
    }
}
