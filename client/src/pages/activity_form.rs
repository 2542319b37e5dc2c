//! Browser binding for the activity request page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup is served as static HTML. [`mount`] looks every element
//! up once by id, hands the handles to a [`DomFormView`] owned by the
//! controller, and wires the submit/reset/dismiss listeners.
//!
//! TRADE-OFFS
//! ==========
//! Listeners are leaked with `Closure::forget`; they live exactly as long as
//! the page, so there is nothing to unregister.

use std::rc::Rc;

use form::FormFields;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::config::ClientConfig;
use crate::controller::{FormController, FormView};
use crate::net::fetch::FetchTransport;
use crate::state::ui::Panels;
use crate::util::markdown::render_activities_html;

const FORM_ID: &str = "activityForm";
const SUBMIT_ID: &str = "submitBtn";
const SUBMIT_LABEL_SELECTOR: &str = "#submitBtn .btn-text";
const SUBMIT_SPINNER_SELECTOR: &str = "#submitBtn .btn-loading";
const RESULTS_ID: &str = "results";
const ACTIVITIES_CONTENT_ID: &str = "activitiesContent";
const ERROR_ID: &str = "error";
const ERROR_MESSAGE_ID: &str = "errorMessage";
const NUM_CHILDREN_ID: &str = "numChildren";
const AGES_ID: &str = "ages";
const WEATHER_ID: &str = "weather";
const LOCATION_ID: &str = "location";
const SPECIAL_CASES_ID: &str = "specialCases";
const RESET_ID: &str = "resetBtn";
const DISMISS_ERROR_ID: &str = "dismissErrorBtn";

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no browser document available")]
    MissingDocument,
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("element #{0} has an unexpected type")]
    WrongElementType(&'static str),
    #[error("failed to register {event} listener: {message}")]
    Listener { event: &'static str, message: String },
}

/// A form control that carries a string value.
enum Field {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl Field {
    fn lookup(document: &Document, id: &'static str) -> Result<Self, MountError> {
        let element = by_id(document, id)?;
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Ok(Self::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Ok(Self::Select(select)),
            Err(element) => element,
        };
        element
            .dyn_into::<HtmlTextAreaElement>()
            .map(Self::TextArea)
            .map_err(|_| MountError::WrongElementType(id))
    }

    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::Select(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(el) => el.set_value(value),
            Self::Select(el) => el.set_value(value),
            Self::TextArea(el) => el.set_value(value),
        }
    }
}

/// DOM handles for the activity form, looked up once at mount.
pub struct DomFormView {
    form: HtmlFormElement,
    submit: HtmlButtonElement,
    submit_label: Option<HtmlElement>,
    submit_spinner: Option<HtmlElement>,
    results: HtmlElement,
    activities_content: Element,
    error: HtmlElement,
    error_message: Element,
    num_children: Field,
    ages: Field,
    weather: Field,
    location: Field,
    special_cases: Field,
}

impl DomFormView {
    /// Look up every element the form needs.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] naming the first missing or mistyped element.
    pub fn bind(document: &Document) -> Result<Self, MountError> {
        Ok(Self {
            form: typed_by_id(document, FORM_ID)?,
            submit: typed_by_id(document, SUBMIT_ID)?,
            submit_label: by_selector(document, SUBMIT_LABEL_SELECTOR),
            submit_spinner: by_selector(document, SUBMIT_SPINNER_SELECTOR),
            results: typed_by_id(document, RESULTS_ID)?,
            activities_content: by_id(document, ACTIVITIES_CONTENT_ID)?,
            error: typed_by_id(document, ERROR_ID)?,
            error_message: by_id(document, ERROR_MESSAGE_ID)?,
            num_children: Field::lookup(document, NUM_CHILDREN_ID)?,
            ages: Field::lookup(document, AGES_ID)?,
            weather: Field::lookup(document, WEATHER_ID)?,
            location: Field::lookup(document, LOCATION_ID)?,
            special_cases: Field::lookup(document, SPECIAL_CASES_ID)?,
        })
    }
}

impl FormView for DomFormView {
    fn read_fields(&self) -> FormFields {
        FormFields {
            num_children: self.num_children.value(),
            ages: self.ages.value(),
            weather: self.weather.value(),
            location: self.location.value(),
            special_cases: self.special_cases.value(),
        }
    }

    fn write_fields(&self, fields: &FormFields) {
        self.form.reset();
        self.num_children.set_value(&fields.num_children);
        self.ages.set_value(&fields.ages);
        self.weather.set_value(&fields.weather);
        self.location.set_value(&fields.location);
        self.special_cases.set_value(&fields.special_cases);
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn set_activities(&self, activities: &str) {
        self.activities_content
            .set_inner_html(&render_activities_html(activities));
    }

    fn set_error_message(&self, message: &str) {
        self.error_message.set_text_content(Some(message));
    }

    fn apply_panels(&self, panels: Panels) {
        set_display(&self.results, panels.result_visible, "block");
        set_display(&self.error, panels.error_visible, "block");
        self.submit.set_disabled(!panels.submit_enabled);
        if let Some(label) = &self.submit_label {
            set_display(label, !panels.loading_indicator, "inline");
        }
        if let Some(spinner) = &self.submit_spinner {
            set_display(spinner, panels.loading_indicator, "inline");
        }

        if panels.result_visible {
            scroll_into_view(&self.results);
        } else if panels.error_visible {
            scroll_into_view(&self.error);
        }
    }
}

/// Bind the page's form to a controller and register its listeners.
///
/// # Errors
///
/// Returns [`MountError`] when the document lacks a required element or a
/// listener cannot be registered.
pub fn mount(config: &ClientConfig) -> Result<(), MountError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::MissingDocument)?;
    let view = DomFormView::bind(&document)?;
    let form = view.form.clone();
    let controller = Rc::new(FormController::new(
        view,
        FetchTransport::new(config.timeouts.request()),
        config,
    ));

    let submit_controller = Rc::clone(&controller);
    listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let controller = Rc::clone(&submit_controller);
        wasm_bindgen_futures::spawn_local(async move {
            let _ = controller.submit().await;
        });
    })?;

    if let Some(button) = document.get_element_by_id(RESET_ID) {
        let reset_controller = Rc::clone(&controller);
        listen(&button, "click", move |ev| {
            ev.prevent_default();
            if !reset_controller.reset() {
                tracing::debug!("reset ignored: request in flight");
            }
        })?;
    }

    if let Some(button) = document.get_element_by_id(DISMISS_ERROR_ID) {
        let dismiss_controller = Rc::clone(&controller);
        listen(&button, "click", move |ev| {
            ev.prevent_default();
            dismiss_controller.dismiss_error();
        })?;
    }

    tracing::info!(endpoint = %config.endpoint_url(), "activity form mounted");
    Ok(())
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), MountError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| MountError::Listener {
            event,
            message: format!("{err:?}"),
        })?;
    closure.forget();
    Ok(())
}

fn by_id(document: &Document, id: &'static str) -> Result<Element, MountError> {
    document
        .get_element_by_id(id)
        .ok_or(MountError::MissingElement(id))
}

fn typed_by_id<E: JsCast>(document: &Document, id: &'static str) -> Result<E, MountError> {
    by_id(document, id)?
        .dyn_into::<E>()
        .map_err(|_| MountError::WrongElementType(id))
}

fn by_selector(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn set_display(element: &HtmlElement, visible: bool, shown: &str) {
    let _ = element
        .style()
        .set_property("display", if visible { shown } else { "none" });
}

fn scroll_into_view(element: &HtmlElement) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
