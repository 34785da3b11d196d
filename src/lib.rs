//! C ABI for the keypad input engine.
//!
//! The scanning driver owns one session handle, forwards key-matrix press
//! and release callbacks to it, and polls the resulting output events. Calls
//! on a handle must be serialised by the caller.

// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

mod ffi;
mod trace_init;

pub use ffi::*;
pub use keypad_core::{dict, keymap, predictive, settings};
pub use keypad_session::{
    EventQueue, EventSink, InputMode, KeyEvent, KeypadSession, KeypadState, Notification,
    Notifier, NullNotifier, WordState,
};
pub use trace_init::init_tracing;
