//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting concerns from the controller and the
//! DOM view to improve reuse and testability.

pub mod markdown;
