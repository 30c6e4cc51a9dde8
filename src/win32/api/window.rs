use crate::structs::rectangle::WindowRectangle;
use crate::win32::window::window_handle::{ModuleHandle, WindowHandle};
use crate::win32::window::window_styles::{ExtendedWindowStyles, WindowStyles};

use super::error::{call, OnError, WindowError};
use super::native::{NativeApi, ShowCommand, WindowLong};

/// Reads a long-form attribute. `index` is passed to the native layer verbatim.
pub fn get_long<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    index: impl Into<i32>,
    on_error: OnError,
) -> Result<isize, WindowError> {
    let index = index.into();
    call(api, on_error, "GetWindowLongPtr", |a| a.get_window_long(hwnd.0, index))
}

/// Writes a long-form attribute and returns its previous value.
pub fn set_long<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    index: impl Into<i32>,
    value: isize,
    on_error: OnError,
) -> Result<isize, WindowError> {
    let index = index.into();
    call(api, on_error, "SetWindowLongPtr", |a| a.set_window_long(hwnd.0, index, value))
}

/// Writes a long-form attribute without surfacing errors.
///
/// Returns the previous value, or `None` when the native call reported a failure. A previous value
/// of `0` is a success as long as the last-error slot stayed clear, so `Some(0)` and `None` are
/// distinct outcomes.
pub fn try_set_long<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    index: impl Into<i32>,
    value: isize,
) -> Option<isize> {
    set_long(api, hwnd, index, value, OnError::Fail)
        .inspect_err(|e| log::debug!("try_set_long on {}: {}", hwnd, e))
        .ok()
}

pub fn get_window_style<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    on_error: OnError,
) -> Result<WindowStyles, WindowError> {
    get_long(api, hwnd, WindowLong::Style, on_error).map(WindowStyles::from_long)
}

pub fn set_window_style<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    style: WindowStyles,
    on_error: OnError,
) -> Result<WindowStyles, WindowError> {
    set_long(api, hwnd, WindowLong::Style, style.to_long(), on_error).map(WindowStyles::from_long)
}

pub fn try_set_window_style<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    style: WindowStyles,
) -> Option<WindowStyles> {
    try_set_long(api, hwnd, WindowLong::Style, style.to_long()).map(WindowStyles::from_long)
}

pub fn get_window_ex_style<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    on_error: OnError,
) -> Result<ExtendedWindowStyles, WindowError> {
    get_long(api, hwnd, WindowLong::ExStyle, on_error).map(ExtendedWindowStyles::from_long)
}

pub fn set_window_ex_style<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    ex_style: ExtendedWindowStyles,
    on_error: OnError,
) -> Result<ExtendedWindowStyles, WindowError> {
    set_long(api, hwnd, WindowLong::ExStyle, ex_style.to_long(), on_error).map(ExtendedWindowStyles::from_long)
}

pub fn try_set_window_ex_style<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    ex_style: ExtendedWindowStyles,
) -> Option<ExtendedWindowStyles> {
    try_set_long(api, hwnd, WindowLong::ExStyle, ex_style.to_long()).map(ExtendedWindowStyles::from_long)
}

pub fn get_module_handle<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    on_error: OnError,
) -> Result<ModuleHandle, WindowError> {
    get_long(api, hwnd, WindowLong::HInstance, on_error).map(ModuleHandle)
}

pub fn set_module_handle<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    module: ModuleHandle,
    on_error: OnError,
) -> Result<ModuleHandle, WindowError> {
    set_long(api, hwnd, WindowLong::HInstance, module.0, on_error).map(ModuleHandle)
}

pub fn get_window_id<A: NativeApi + ?Sized>(api: &A, hwnd: WindowHandle, on_error: OnError) -> Result<isize, WindowError> {
    get_long(api, hwnd, WindowLong::Id, on_error)
}

pub fn set_window_id<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    id: isize,
    on_error: OnError,
) -> Result<isize, WindowError> {
    set_long(api, hwnd, WindowLong::Id, id, on_error)
}

pub fn get_window_title<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    on_error: OnError,
) -> Result<String, WindowError> {
    call(api, on_error, "GetWindowText", |a| a.get_window_text(hwnd.0))
}

pub fn set_window_title<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    title: &str,
    on_error: OnError,
) -> Result<bool, WindowError> {
    if title.contains('\0') {
        return Err(WindowError::InvalidText);
    }
    call(api, on_error, "SetWindowText", |a| a.set_window_text(hwnd.0, title))
}

pub fn get_class_name<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    on_error: OnError,
) -> Result<String, WindowError> {
    call(api, on_error, "GetClassName", |a| a.get_class_name(hwnd.0))
}

/// A null handle means the window is top-level (or the call failed in lenient mode).
pub fn get_parent<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    on_error: OnError,
) -> Result<WindowHandle, WindowError> {
    call(api, on_error, "GetParent", |a| WindowHandle(a.get_parent(hwnd.0)))
}

/// Reparents `child` and returns its previous parent. A null `new_parent` makes it top-level.
pub fn set_parent<A: NativeApi + ?Sized>(
    api: &A,
    child: WindowHandle,
    new_parent: WindowHandle,
    on_error: OnError,
) -> Result<WindowHandle, WindowError> {
    call(api, on_error, "SetParent", |a| WindowHandle(a.set_parent(child.0, new_parent.0)))
}

pub fn get_window_rect<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    on_error: OnError,
) -> Result<Option<WindowRectangle>, WindowError> {
    call(api, on_error, "GetWindowRect", |a| a.get_window_rect(hwnd.0))
}

pub fn move_window<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    rect: WindowRectangle,
    repaint: bool,
    on_error: OnError,
) -> Result<bool, WindowError> {
    call(api, on_error, "MoveWindow", |a| a.move_window(hwnd.0, rect, repaint))
}

/// Returns whether the window was visible before the call.
pub fn show_window<A: NativeApi + ?Sized>(
    api: &A,
    hwnd: WindowHandle,
    cmd: ShowCommand,
    on_error: OnError,
) -> Result<bool, WindowError> {
    call(api, on_error, "ShowWindow", |a| a.show_window(hwnd.0, cmd.into()))
}

pub fn is_window<A: NativeApi + ?Sized>(api: &A, hwnd: WindowHandle) -> bool {
    !hwnd.is_null() && api.is_window(hwnd.0)
}

pub fn destroy_window<A: NativeApi + ?Sized>(api: &A, hwnd: WindowHandle, on_error: OnError) -> Result<bool, WindowError> {
    call(api, on_error, "DestroyWindow", |a| a.destroy_window(hwnd.0))
}

pub fn get_desktop_window<A: NativeApi + ?Sized>(api: &A) -> WindowHandle {
    WindowHandle(api.get_desktop_window())
}

pub fn get_foreground_window<A: NativeApi + ?Sized>(api: &A) -> Option<WindowHandle> {
    match WindowHandle(api.get_foreground_window()) {
        WindowHandle::NULL => None,
        hwnd => Some(hwnd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::win32::api::mock::MockDesktop;
    use crate::win32::api::native::{ERROR_INVALID_INDEX, ERROR_INVALID_WINDOW_HANDLE};

    fn setup() -> (MockDesktop, WindowHandle) {
        let api = MockDesktop::new();
        let hwnd = api.create_window(None, "Notepad", "Untitled - Notepad", WindowStyles::OVERLAPPEDWINDOW);
        (api, hwnd)
    }

    #[test]
    fn test_style_roundtrip() {
        let (api, hwnd) = setup();

        let previous = set_window_style(&api, hwnd, WindowStyles::POPUPWINDOW, OnError::Fail).unwrap();

        assert_eq!(previous, WindowStyles::OVERLAPPEDWINDOW);
        assert_eq!(get_window_style(&api, hwnd, OnError::Fail).unwrap(), WindowStyles::POPUPWINDOW);
    }

    #[test]
    fn test_unknown_index_passes_through() {
        let (api, hwnd) = setup();

        let err = get_long(&api, hwnd, -99, OnError::Fail).unwrap_err();
        assert_eq!(err.code(), Some(ERROR_INVALID_INDEX));
        assert_eq!(get_long(&api, hwnd, -99, OnError::Ignore), Ok(0));
    }

    #[test]
    fn test_try_set_long_distinguishes_zero_from_failure() {
        let (api, hwnd) = setup();

        assert_eq!(try_set_long(&api, hwnd, WindowLong::UserData, 1234), Some(0));
        assert_eq!(try_set_long(&api, hwnd, WindowLong::UserData, 0), Some(1234));
        assert_eq!(try_set_long(&api, WindowHandle(0x7777), WindowLong::UserData, 1), None);
    }

    #[test]
    fn test_try_set_styles() {
        let (api, hwnd) = setup();

        let previous = try_set_window_ex_style(&api, hwnd, ExtendedWindowStyles::TOOLWINDOW);

        assert_eq!(previous, Some(ExtendedWindowStyles::empty()));
        assert_eq!(
            try_set_window_style(&api, hwnd, WindowStyles::CHILD),
            Some(WindowStyles::OVERLAPPEDWINDOW)
        );
    }

    #[test]
    fn test_module_handle_and_id() {
        let (api, hwnd) = setup();

        assert_eq!(get_module_handle(&api, hwnd, OnError::Fail), Ok(ModuleHandle(0x0040_0000)));
        assert_eq!(set_window_id(&api, hwnd, 42, OnError::Fail), Ok(0));
        assert_eq!(get_window_id(&api, hwnd, OnError::Fail), Ok(42));
        assert_eq!(set_module_handle(&api, hwnd, ModuleHandle(1), OnError::Fail), Ok(ModuleHandle(0x0040_0000)));
    }

    #[test]
    fn test_title_and_class() {
        let (api, hwnd) = setup();

        assert_eq!(get_window_title(&api, hwnd, OnError::Fail).unwrap(), "Untitled - Notepad");
        assert_eq!(set_window_title(&api, hwnd, "notes.txt", OnError::Fail), Ok(true));
        assert_eq!(get_window_title(&api, hwnd, OnError::Fail).unwrap(), "notes.txt");
        assert_eq!(get_class_name(&api, hwnd, OnError::Fail).unwrap(), "Notepad");
        assert_eq!(set_window_title(&api, hwnd, "a\0b", OnError::Ignore), Err(WindowError::InvalidText));
    }

    #[test]
    fn test_desktop_and_foreground() {
        let (api, hwnd) = setup();
        let desktop = get_desktop_window(&api);

        assert!(is_window(&api, desktop));
        assert_eq!(get_class_name(&api, desktop, OnError::Fail).unwrap(), "#32769");
        assert_eq!(get_foreground_window(&api), None);

        api.set_foreground(hwnd);
        assert_eq!(get_foreground_window(&api), Some(hwnd));
    }

    #[test]
    fn test_invalid_handle() {
        let api = MockDesktop::new();
        let ghost = WindowHandle(0x4242);

        let err = get_window_title(&api, ghost, OnError::Fail).unwrap_err();
        assert_eq!(err.code(), Some(ERROR_INVALID_WINDOW_HANDLE));
        assert_eq!(get_window_title(&api, ghost, OnError::Ignore).unwrap(), "");
        assert!(!is_window(&api, WindowHandle::NULL));
    }
}
