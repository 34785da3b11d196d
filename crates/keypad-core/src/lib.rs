//! Keypad decoding tables, the T9 dictionary, and the predictive matching engine.
//!
//! This crate holds the stateless half of the keypad input pipeline: raw
//! scancode decoding, per-key character tables, the compiled-in dictionary,
//! and `PredictiveEngine`, which matches digit sequences against it.

pub mod dict;
pub mod keymap;
pub mod predictive;
pub mod settings;
