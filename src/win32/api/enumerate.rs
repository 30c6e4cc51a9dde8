//! Callback and list forms of window enumeration.
//!
//! Enumeration order is whatever the OS reports (Z-order for top-level windows on Windows) and is
//! not stable across calls. Lists are collected eagerly and re-query the OS every time; windows
//! destroyed while the enumeration runs may still show up as stale handles.

use crate::win32::window::window_handle::WindowHandle;

use super::error::{call, OnError, WindowError};
use super::native::{NativeApi, ERROR_SUCCESS};

/// Visits top-level windows until `callback` returns `false`.
///
/// Stopping early is not a failure: the result is `Ok(true)` unless the native call itself set the
/// last-error slot. Native calls made from `callback` do not affect the result.
pub fn enum_windows<A, F>(api: &A, on_error: OnError, mut callback: F) -> Result<bool, WindowError>
where
    A: NativeApi + ?Sized,
    F: FnMut(WindowHandle) -> bool,
{
    let completed = call(api, on_error, "EnumWindows", |a| {
        a.enum_windows(&mut |hwnd| keep_last_error(a, || callback(WindowHandle(hwnd))))
    })?;
    log::trace!("EnumWindows returned {}", completed);
    Ok(api.get_last_error() == ERROR_SUCCESS)
}

/// Visits every descendant of `parent` (not only direct children) until `callback` returns `false`.
pub fn enum_child_windows<A, F>(
    api: &A,
    parent: WindowHandle,
    on_error: OnError,
    mut callback: F,
) -> Result<bool, WindowError>
where
    A: NativeApi + ?Sized,
    F: FnMut(WindowHandle) -> bool,
{
    let completed = call(api, on_error, "EnumChildWindows", |a| {
        a.enum_child_windows(parent.0, &mut |hwnd| keep_last_error(a, || callback(WindowHandle(hwnd))))
    })?;
    log::trace!("EnumChildWindows on {} returned {}", parent, completed);
    Ok(api.get_last_error() == ERROR_SUCCESS)
}

/// Runs a visitor callback and puts back the last-error code the enumeration had before it.
///
/// The native enum functions return `false` on an early stop too, so the slot is the only failure
/// signal and wrapped calls made by the callback must not leave their own code in it.
fn keep_last_error<A: NativeApi + ?Sized>(api: &A, callback: impl FnOnce() -> bool) -> bool {
    let saved = api.get_last_error();
    let keep_going = callback();
    api.set_last_error(saved);
    keep_going
}

pub fn list_windows<A: NativeApi + ?Sized>(api: &A, on_error: OnError) -> Result<Vec<WindowHandle>, WindowError> {
    let mut windows = Vec::new();
    enum_windows(api, on_error, |hwnd| {
        windows.push(hwnd);
        true
    })?;
    log::trace!("enumerated {} top-level windows", windows.len());
    Ok(windows)
}

pub fn list_child_windows<A: NativeApi + ?Sized>(
    api: &A,
    parent: WindowHandle,
    on_error: OnError,
) -> Result<Vec<WindowHandle>, WindowError> {
    let mut windows = Vec::new();
    enum_child_windows(api, parent, on_error, |hwnd| {
        windows.push(hwnd);
        true
    })?;
    log::trace!("enumerated {} descendants of {}", windows.len(), parent);
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::win32::api::mock::MockDesktop;
    use crate::win32::api::window::get_window_title;
    use crate::win32::window::window_styles::WindowStyles;

    #[test]
    fn test_list_windows() {
        let api = MockDesktop::new();
        let a = api.create_window(None, "A", "", WindowStyles::OVERLAPPEDWINDOW);
        let b = api.create_window(None, "B", "", WindowStyles::OVERLAPPEDWINDOW);
        api.create_window(Some(a), "Child", "", WindowStyles::CHILD);

        assert_eq!(list_windows(&api, OnError::Fail).unwrap(), vec![a, b]);
    }

    #[test]
    fn test_early_stop_is_success() {
        let api = MockDesktop::new();
        for _ in 0..5 {
            api.create_window(None, "A", "", WindowStyles::OVERLAPPEDWINDOW);
        }

        let mut visited = 0;
        let result = enum_windows(&api, OnError::Fail, |_| {
            visited += 1;
            visited < 2
        });

        assert_eq!(result, Ok(true));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_child_early_stop_is_success() {
        let api = MockDesktop::new();
        let app = api.create_window(None, "App", "", WindowStyles::OVERLAPPEDWINDOW);
        for _ in 0..4 {
            api.create_window(Some(app), "Edit", "", WindowStyles::CHILD);
        }

        let mut visited = Vec::new();
        let result = enum_child_windows(&api, app, OnError::Fail, |hwnd| {
            visited.push(hwnd);
            visited.len() < 3
        });

        assert_eq!(result, Ok(true));
        assert_eq!(visited.len(), 3);
    }

    #[test]
    fn test_failing_call_inside_callback() {
        let api = MockDesktop::new();
        let app = api.create_window(None, "App", "", WindowStyles::OVERLAPPEDWINDOW);
        api.create_window(Some(app), "Edit", "", WindowStyles::CHILD);
        let ghost = WindowHandle(0x4242);

        let result = enum_windows(&api, OnError::Fail, |_| {
            let _ = get_window_title(&api, ghost, OnError::Ignore);
            true
        });
        assert_eq!(result, Ok(true));

        let result = enum_child_windows(&api, app, OnError::Fail, |_| {
            assert!(get_window_title(&api, ghost, OnError::Fail).is_err());
            true
        });
        assert_eq!(result, Ok(true));
    }

    #[test]
    fn test_leaf_has_no_children() {
        let api = MockDesktop::new();
        let leaf = api.create_window(None, "Leaf", "", WindowStyles::OVERLAPPEDWINDOW);

        assert_eq!(list_child_windows(&api, leaf, OnError::Fail).unwrap(), vec![]);
    }

    #[test]
    fn test_child_enumeration_of_missing_parent() {
        let api = MockDesktop::new();
        let ghost = WindowHandle(0x999);

        assert!(list_child_windows(&api, ghost, OnError::Fail).is_err());
        assert_eq!(list_child_windows(&api, ghost, OnError::Ignore).unwrap(), vec![]);
        assert_eq!(enum_child_windows(&api, ghost, OnError::Ignore, |_| true), Ok(false));
    }
}
