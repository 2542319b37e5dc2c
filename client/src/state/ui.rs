//! Visual mode of the activity form and its transitions.
//!
//! DESIGN
//! ======
//! The four modes are mutually exclusive. Panel visibility is derived from
//! the mode rather than stored, so a result and an error can never be shown
//! together.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Mutually exclusive visual mode of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    /// Nothing shown; ready for input.
    #[default]
    Idle,
    /// A request is in flight; submit is disabled.
    Loading,
    /// The result panel shows activities.
    ShowingResult,
    /// The error panel shows a failure message.
    ShowingError,
}

/// Inputs that move the form between modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Valid input was submitted; the request is about to be sent.
    Submit,
    /// Submitted input failed validation; nothing was sent.
    Rejected,
    Succeeded,
    Failed,
    Reset,
    DismissError,
}

/// What the view should show for a given mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panels {
    pub result_visible: bool,
    pub error_visible: bool,
    pub submit_enabled: bool,
    /// Swap the submit label for the loading indicator.
    pub loading_indicator: bool,
}

impl UiState {
    /// Next mode after `event`, or `None` when the event is not allowed now.
    ///
    /// While `Loading`, only the request's own completion is accepted; this is
    /// the re-entrancy guard for submissions.
    #[must_use]
    pub fn on(self, event: UiEvent) -> Option<Self> {
        match (self, event) {
            (Self::Loading, UiEvent::Succeeded) => Some(Self::ShowingResult),
            (Self::Loading, UiEvent::Failed) => Some(Self::ShowingError),
            (Self::Loading, _) | (_, UiEvent::Succeeded | UiEvent::Failed) => None,
            (_, UiEvent::Submit) => Some(Self::Loading),
            (_, UiEvent::Rejected | UiEvent::Reset) => Some(Self::Idle),
            (Self::ShowingError, UiEvent::DismissError) => Some(Self::Idle),
            (_, UiEvent::DismissError) => Some(self),
        }
    }

    #[must_use]
    pub fn panels(self) -> Panels {
        Panels {
            result_visible: self == Self::ShowingResult,
            error_visible: self == Self::ShowingError,
            submit_enabled: self != Self::Loading,
            loading_indicator: self == Self::Loading,
        }
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }
}
