//! Typed handles and accessors over the Win32 window management API.
//!
//! Every operation forwards to a single native call through [`win32::api::native::NativeApi`].
//! On Windows the [`win32::api::win32_api::Win32Api`] backend talks to `user32`; the
//! [`win32::api::mock::MockDesktop`] backend keeps an in-memory window tree with the same
//! contract and is what the test suite runs against.

pub mod structs {
    pub mod point;
    pub mod rectangle;
}

pub mod win32;

pub use structs::{point::WindowPoint, rectangle::WindowRectangle};
pub use win32::api::error::{OnError, WindowError};
pub use win32::api::native::{NativeApi, ShowCommand, WindowLong};
pub use win32::window::style_view::{StyleFlag, StyleView, STYLE_FLAGS};
pub use win32::window::window_handle::{ModuleHandle, WindowHandle};
pub use win32::window::window_ref::WindowRef;
pub use win32::window::window_styles::{ExtendedWindowStyles, WindowStyles};
