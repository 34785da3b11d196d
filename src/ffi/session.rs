use std::ffi::{c_char, c_void, CStr};
use std::sync::Arc;

use tracing::warn;

use keypad_core::dict::DEFAULT_DICTIONARY;
use keypad_core::settings::{self, InputMode};
use keypad_session::{EventQueue, KeyEvent, KeypadSession, Notification, Notifier};

use super::{cptr_to_str, ffi_close, ffi_guard, owned_new};

// --- Events ---

pub const KEYPAD_EVENT_NONE: u8 = 0;
pub const KEYPAD_EVENT_CHAR: u8 = 1;
pub const KEYPAD_EVENT_BACKSPACE: u8 = 2;
pub const KEYPAD_EVENT_SELECT: u8 = 3;
pub const KEYPAD_EVENT_ESCAPE: u8 = 4;

pub const KEYPAD_MODE_MULTI_TAP: u8 = 0;
pub const KEYPAD_MODE_PREDICTIVE: u8 = 1;

pub const KEYPAD_NOTIFY_ENTERING_PREDICTIVE: u8 = 0;
pub const KEYPAD_NOTIFY_ENTERING_MULTI_TAP: u8 = 1;

/// One output event. `ch` is a Unicode scalar value, set only for
/// `KEYPAD_EVENT_CHAR`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadEvent {
    pub kind: u8,
    pub ch: u32,
}

impl KeypadEvent {
    pub(crate) fn none() -> Self {
        Self {
            kind: KEYPAD_EVENT_NONE,
            ch: 0,
        }
    }
}

impl From<KeyEvent> for KeypadEvent {
    fn from(event: KeyEvent) -> Self {
        let (kind, ch) = match event {
            KeyEvent::Char(c) => (KEYPAD_EVENT_CHAR, u32::from(c)),
            KeyEvent::Backspace => (KEYPAD_EVENT_BACKSPACE, 0),
            KeyEvent::Select => (KEYPAD_EVENT_SELECT, 0),
            KeyEvent::Escape => (KEYPAD_EVENT_ESCAPE, 0),
        };
        Self { kind, ch }
    }
}

// --- Notifier ---

/// Display callback: `(user_data, KEYPAD_NOTIFY_*, message, duration_ms)`.
/// `message` is a static NUL-terminated string.
pub type KeypadNotifyFn = Option<
    extern "C" fn(user_data: *mut c_void, kind: u8, message: *const c_char, duration_ms: u32),
>;

/// Forwards mode banners to the driver's display callback, if one is set.
pub struct CallbackNotifier {
    callback: KeypadNotifyFn,
    user_data: *mut c_void,
}

impl CallbackNotifier {
    fn unset() -> Self {
        Self {
            callback: None,
            user_data: std::ptr::null_mut(),
        }
    }
}

fn notification_parts(notification: Notification) -> (u8, &'static CStr) {
    match notification {
        Notification::EnteringPredictive => {
            (KEYPAD_NOTIFY_ENTERING_PREDICTIVE, c"Predictive mode")
        }
        Notification::EnteringMultiTap => (KEYPAD_NOTIFY_ENTERING_MULTI_TAP, c"Multi-tap mode"),
    }
}

impl Notifier for CallbackNotifier {
    fn notify(&mut self, notification: Notification, duration_ms: u32) {
        let Some(callback) = self.callback else {
            return;
        };
        let (kind, message) = notification_parts(notification);
        callback(self.user_data, kind, message.as_ptr(), duration_ms);
    }
}

// --- Session handle ---

/// Opaque session handle owned by the driver.
pub struct KeypadHandle {
    inner: KeypadSession<EventQueue, CallbackNotifier>,
}

/// Create a session over the built-in dictionary.
///
/// `settings_toml` may be null to use the global settings; otherwise it is
/// parsed and validated, and null is returned if it is invalid.
#[no_mangle]
pub extern "C" fn keypad_session_new(settings_toml: *const c_char) -> *mut KeypadHandle {
    let dict = Arc::new(DEFAULT_DICTIONARY);
    let inner = if settings_toml.is_null() {
        KeypadSession::new(dict, EventQueue::new(), CallbackNotifier::unset())
    } else {
        let Some(content) = (unsafe { cptr_to_str(settings_toml) }) else {
            warn!("keypad_session_new: settings are not valid UTF-8");
            return std::ptr::null_mut();
        };
        match settings::parse_settings_toml(content) {
            Ok(s) => KeypadSession::with_settings(
                dict,
                EventQueue::new(),
                CallbackNotifier::unset(),
                &s,
            ),
            Err(e) => {
                warn!("keypad_session_new: {e}");
                return std::ptr::null_mut();
            }
        }
    };
    owned_new(KeypadHandle { inner })
}

ffi_close!(keypad_session_free, KeypadHandle);

/// Mark the scanner as configured; events before this call are ignored.
#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn keypad_session_begin(handle: *mut KeypadHandle) {
    ffi_guard!(();
        mut: h = handle,
    );
    h.inner.begin();
}

/// Return to a fresh idle session. Queued events are kept.
#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn keypad_session_reset(handle: *mut KeypadHandle) {
    ffi_guard!(();
        mut: h = handle,
    );
    h.inner.reset();
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn keypad_on_press(handle: *mut KeypadHandle, raw: u8, now_ms: u32) {
    ffi_guard!(();
        mut: h = handle,
    );
    h.inner.on_press(raw, now_ms);
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn keypad_on_release(handle: *mut KeypadHandle, now_ms: u32) {
    ffi_guard!(();
        mut: h = handle,
    );
    h.inner.on_release(now_ms);
}

/// Take the oldest queued event, or `KEYPAD_EVENT_NONE` when empty.
#[no_mangle]
pub extern "C" fn keypad_poll_event(handle: *mut KeypadHandle) -> KeypadEvent {
    ffi_guard!(KeypadEvent::none();
        mut: h = handle,
    );
    h.inner
        .sink_mut()
        .pop()
        .map_or_else(KeypadEvent::none, KeypadEvent::from)
}

/// `KEYPAD_MODE_*` of the session; multi-tap for a null handle.
#[no_mangle]
pub extern "C" fn keypad_input_mode(handle: *const KeypadHandle) -> u8 {
    ffi_guard!(KEYPAD_MODE_MULTI_TAP;
        ref: h = handle,
    );
    match h.inner.input_mode() {
        InputMode::MultiTap => KEYPAD_MODE_MULTI_TAP,
        InputMode::Predictive => KEYPAD_MODE_PREDICTIVE,
    }
}

/// Set (or clear, with a null `callback`) the mode-banner callback.
/// `user_data` is passed back unchanged and must outlive the handle.
#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn keypad_set_notifier(
    handle: *mut KeypadHandle,
    callback: KeypadNotifyFn,
    user_data: *mut c_void,
) {
    ffi_guard!(();
        mut: h = handle,
    );
    *h.inner.notifier_mut() = CallbackNotifier {
        callback,
        user_data,
    };
}
