//! Activity request form model and wire schema.
//!
//! This crate owns the shapes shared by every front end of the activity
//! planner client: the raw form fields, their parsed form, the validated
//! request payload, and the backend reply. It performs no I/O.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` drives these types through its controller; `cli` builds them from
//! command-line flags. Only [`validate`] produces an [`ActivityRequest`].

pub mod input;
pub mod request;
pub mod response;
pub mod validate;

pub use input::{DEFAULT_LOCATION, DEFAULT_SPECIAL_CASES, FormFields, FormInput};
pub use request::ActivityRequest;
pub use response::{ActivityResponse, DecodeError, FAILURE_FALLBACK_MESSAGE, decode_response};
pub use validate::{MAX_AGE, MIN_AGE, ValidationError, validate};
