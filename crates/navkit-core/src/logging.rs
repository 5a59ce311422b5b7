//! Logging macros that work on both wasm32 and native targets.
//!
//! | Macro | Requires | wasm32 | native |
//! |-------|----------|--------|--------|
//! | `debug_log!` | `debug_assertions` + `debug-log` feature | `console.debug` | stderr |
//! | `info_log!` | `debug_assertions` | `console.info` | stderr |
//! | `warn_log!` | `debug_assertions` | `console.warn` | stderr |
//!
//! Every macro compiles to nothing in release builds.
//!
//! ```ignore
//! use navkit_core::{debug_log, warn_log};
//!
//! debug_log!("navigate: {}", path);
//! warn_log!("pushState failed: {:?}", err);
//! ```

/// Logs a debug message (requires the `debug-log` feature).
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-log", target_arch = "wasm32"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        $crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
    }};
}

/// Logs a debug message (requires the `debug-log` feature).
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-log", not(target_arch = "wasm32")))]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        eprintln!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// No-op `debug_log!`.
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-log")))]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

/// Logs an informational message.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        $crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
    }};
}

/// Logs an informational message.
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        eprintln!("[INFO] {}", format!($($arg)*));
    }};
}

/// No-op `info_log!` in release builds.
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Logs a warning.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        $crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
    }};
}

/// Logs a warning.
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        eprintln!("[WARN] {}", format!($($arg)*));
    }};
}

/// No-op `warn_log!` in release builds.
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
    ($($arg:tt)*) => {{}};
}
