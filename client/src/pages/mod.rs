//! Page modules for browser screens.
//!
//! ARCHITECTURE
//! ============
//! Each page binds server-rendered markup to a controller. Pages exist only
//! in the browser build.

#[cfg(feature = "hydrate")]
pub mod activity_form;
