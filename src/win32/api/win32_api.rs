use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

use widestring::U16CString;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{GetLastError, SetLastError, BOOL, HWND, MAX_PATH, RECT, WIN32_ERROR};
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyWindow, EnumChildWindows, EnumWindows, GetClassNameW, GetDesktopWindow, GetForegroundWindow, GetParent,
    GetWindowRect, GetWindowTextLengthW, GetWindowTextW, IsWindow, MoveWindow, SetParent, SetWindowTextW, ShowWindow,
    SHOW_WINDOW_CMD, WINDOW_LONG_PTR_INDEX,
};

use crate::structs::rectangle::WindowRectangle;
use crate::win32::callbacks::enum_windows::{enum_windows_visitor, visitor_param, EnumVisitor};

use super::native::NativeApi;

/// [`NativeApi`] backed by `user32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Api;

fn hwnd(raw: isize) -> HWND {
    HWND(raw as *mut _)
}

fn from_wide(buffer: &[u16]) -> String {
    OsString::from_wide(buffer)
        .to_string_lossy()
        .trim_matches(char::from(0))
        .to_string()
}

#[cfg(target_pointer_width = "64")]
unsafe fn get_long(hwnd: HWND, index: WINDOW_LONG_PTR_INDEX) -> isize {
    windows::Win32::UI::WindowsAndMessaging::GetWindowLongPtrW(hwnd, index)
}

#[cfg(target_pointer_width = "64")]
unsafe fn set_long(hwnd: HWND, index: WINDOW_LONG_PTR_INDEX, value: isize) -> isize {
    windows::Win32::UI::WindowsAndMessaging::SetWindowLongPtrW(hwnd, index, value)
}

#[cfg(target_pointer_width = "32")]
unsafe fn get_long(hwnd: HWND, index: WINDOW_LONG_PTR_INDEX) -> isize {
    windows::Win32::UI::WindowsAndMessaging::GetWindowLongW(hwnd, index) as isize
}

#[cfg(target_pointer_width = "32")]
unsafe fn set_long(hwnd: HWND, index: WINDOW_LONG_PTR_INDEX, value: isize) -> isize {
    windows::Win32::UI::WindowsAndMessaging::SetWindowLongW(hwnd, index, value as i32) as isize
}

impl NativeApi for Win32Api {
    fn set_last_error(&self, code: u32) {
        unsafe { SetLastError(WIN32_ERROR(code)) }
    }

    fn get_last_error(&self) -> u32 {
        unsafe { GetLastError() }.0
    }

    fn get_window_long(&self, hwnd_raw: isize, index: i32) -> isize {
        unsafe { get_long(hwnd(hwnd_raw), WINDOW_LONG_PTR_INDEX(index)) }
    }

    fn set_window_long(&self, hwnd_raw: isize, index: i32, value: isize) -> isize {
        unsafe { set_long(hwnd(hwnd_raw), WINDOW_LONG_PTR_INDEX(index), value) }
    }

    fn enum_windows(&self, callback: &mut dyn FnMut(isize) -> bool) -> bool {
        let mut visitor: EnumVisitor = callback;
        let lparam = visitor_param(&mut visitor);
        unsafe { EnumWindows(Some(enum_windows_visitor), lparam) }.is_ok()
    }

    fn enum_child_windows(&self, parent: isize, callback: &mut dyn FnMut(isize) -> bool) -> bool {
        let mut visitor: EnumVisitor = callback;
        let lparam = visitor_param(&mut visitor);
        unsafe { EnumChildWindows(hwnd(parent), Some(enum_windows_visitor), lparam) }.as_bool()
    }

    fn get_window_text(&self, hwnd_raw: isize) -> String {
        let len = unsafe { GetWindowTextLengthW(hwnd(hwnd_raw)) }.max(0) as usize;
        let mut buffer = vec![0u16; len + 1];
        let copied = unsafe { GetWindowTextW(hwnd(hwnd_raw), &mut buffer) }.max(0) as usize;
        from_wide(&buffer[..copied.min(buffer.len())])
    }

    fn set_window_text(&self, hwnd_raw: isize, text: &str) -> bool {
        let Ok(text) = U16CString::from_str(text) else {
            return false;
        };
        unsafe { SetWindowTextW(hwnd(hwnd_raw), PCWSTR(text.as_ptr())) }.is_ok()
    }

    fn get_class_name(&self, hwnd_raw: isize) -> String {
        let mut buffer = [0u16; MAX_PATH as usize];
        let copied = unsafe { GetClassNameW(hwnd(hwnd_raw), &mut buffer) }.max(0) as usize;
        from_wide(&buffer[..copied.min(buffer.len())])
    }

    fn get_parent(&self, hwnd_raw: isize) -> isize {
        unsafe { GetParent(hwnd(hwnd_raw)) }.unwrap_or_default().0 as isize
    }

    fn set_parent(&self, child: isize, new_parent: isize) -> isize {
        unsafe { SetParent(hwnd(child), hwnd(new_parent)) }.unwrap_or_default().0 as isize
    }

    fn get_window_rect(&self, hwnd_raw: isize) -> Option<WindowRectangle> {
        let mut rect = RECT::default();
        match unsafe { GetWindowRect(hwnd(hwnd_raw), &mut rect) } {
            Ok(_) => Some(WindowRectangle::from_corners(rect.left, rect.top, rect.right, rect.bottom)),
            Err(_) => None,
        }
    }

    fn move_window(&self, hwnd_raw: isize, rect: WindowRectangle, repaint: bool) -> bool {
        unsafe { MoveWindow(hwnd(hwnd_raw), rect.x, rect.y, rect.width, rect.height, BOOL::from(repaint)) }.is_ok()
    }

    fn show_window(&self, hwnd_raw: isize, cmd: i32) -> bool {
        unsafe { ShowWindow(hwnd(hwnd_raw), SHOW_WINDOW_CMD(cmd)) }.as_bool()
    }

    fn is_window(&self, hwnd_raw: isize) -> bool {
        unsafe { IsWindow(hwnd(hwnd_raw)) }.as_bool()
    }

    fn destroy_window(&self, hwnd_raw: isize) -> bool {
        unsafe { DestroyWindow(hwnd(hwnd_raw)) }.is_ok()
    }

    fn get_desktop_window(&self) -> isize {
        unsafe { GetDesktopWindow() }.0 as isize
    }

    fn get_foreground_window(&self) -> isize {
        unsafe { GetForegroundWindow() }.0 as isize
    }
}
