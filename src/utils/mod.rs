//! Browser utility modules.
//!
//! Provides:
//! - [`dom`] - window/document access, event listeners, smooth scrolling

pub mod dom;
