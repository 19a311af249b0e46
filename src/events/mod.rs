//! Event types and observers used by the demo.
//!
//! Submodules:
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod switchdebug;
