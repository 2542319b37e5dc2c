//! Client-side state models.
//!
//! DESIGN
//! ======
//! State here is plain data with pure transitions; the controller applies it
//! to a view, which keeps it testable without a browser.

pub mod ui;
