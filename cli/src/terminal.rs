//! Terminal rendering of the activity form.
//!
//! The "panels" of the browser page become output streams: activities go to
//! stdout so they can be piped, everything else goes to stderr.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::RefCell;
use std::io::Write;

use client::controller::FormView;
use client::state::ui::Panels;
use form::FormFields;

pub struct TerminalView<O: Write, E: Write> {
    pub(crate) fields: RefCell<FormFields>,
    activities: RefCell<String>,
    error_message: RefCell<String>,
    pub(crate) out: RefCell<O>,
    pub(crate) err: RefCell<E>,
}

impl TerminalView<std::io::Stdout, std::io::Stderr> {
    pub fn stdio(fields: FormFields) -> Self {
        Self::new(fields, std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(fields: FormFields, out: O, err: E) -> Self {
        Self {
            fields: RefCell::new(fields),
            activities: RefCell::new(String::new()),
            error_message: RefCell::new(String::new()),
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }
}

impl<O: Write, E: Write> FormView for TerminalView<O, E> {
    fn read_fields(&self) -> FormFields {
        self.fields.borrow().clone()
    }

    fn write_fields(&self, fields: &FormFields) {
        *self.fields.borrow_mut() = fields.clone();
    }

    fn alert(&self, message: &str) {
        let _ = writeln!(self.err.borrow_mut(), "error: {message}");
    }

    fn set_activities(&self, activities: &str) {
        *self.activities.borrow_mut() = activities.to_owned();
    }

    fn set_error_message(&self, message: &str) {
        *self.error_message.borrow_mut() = message.to_owned();
    }

    fn apply_panels(&self, panels: Panels) {
        if panels.loading_indicator {
            let _ = writeln!(self.err.borrow_mut(), "Fetching activities...");
        }
        if panels.result_visible {
            let _ = writeln!(self.out.borrow_mut(), "{}", self.activities.borrow());
        }
        if panels.error_visible {
            let _ = writeln!(self.err.borrow_mut(), "error: {}", self.error_message.borrow());
        }
    }
}
