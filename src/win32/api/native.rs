use crate::structs::rectangle::WindowRectangle;

pub const ERROR_SUCCESS: u32 = 0;
pub const ERROR_INVALID_PARAMETER: u32 = 87;
pub const ERROR_INVALID_WINDOW_HANDLE: u32 = 1400;
pub const ERROR_INVALID_INDEX: u32 = 1413;

/// Class name the platform assigns to the desktop window.
pub const DESKTOP_CLASS_NAME: &str = "#32769";

/// Index of a long-form window attribute. Values are fixed by the platform ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum WindowLong {
    WndProc = -4,
    HInstance = -6,
    HwndParent = -8,
    Id = -12,
    Style = -16,
    ExStyle = -20,
    UserData = -21,
}

impl From<WindowLong> for i32 {
    fn from(index: WindowLong) -> Self {
        index as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ShowCommand {
    Hide = 0,
    ShowNormal = 1,
    ShowMinimized = 2,
    ShowMaximized = 3,
    ShowNoActivate = 4,
    Show = 5,
    Minimize = 6,
    ShowMinNoActive = 7,
    ShowNA = 8,
    Restore = 9,
    ShowDefault = 10,
    ForceMinimize = 11,
}

impl From<ShowCommand> for i32 {
    fn from(cmd: ShowCommand) -> Self {
        cmd as i32
    }
}

/// Raw window management primitives.
///
/// Every method maps to exactly one native call and keeps its native contract: failures are
/// reported only through the thread's last-error slot, which callers read with
/// [`NativeApi::get_last_error`]. Use the wrappers in [`crate::win32::api::window`] instead of
/// calling these directly.
pub trait NativeApi {
    fn set_last_error(&self, code: u32);
    fn get_last_error(&self) -> u32;

    fn get_window_long(&self, hwnd: isize, index: i32) -> isize;
    /// Returns the previous value.
    fn set_window_long(&self, hwnd: isize, index: i32, value: isize) -> isize;

    /// Visits top-level windows until `callback` returns `false`.
    fn enum_windows(&self, callback: &mut dyn FnMut(isize) -> bool) -> bool;
    /// Visits every descendant of `parent` until `callback` returns `false`.
    fn enum_child_windows(&self, parent: isize, callback: &mut dyn FnMut(isize) -> bool) -> bool;

    fn get_window_text(&self, hwnd: isize) -> String;
    /// `text` never contains interior NULs.
    fn set_window_text(&self, hwnd: isize, text: &str) -> bool;
    fn get_class_name(&self, hwnd: isize) -> String;

    fn get_parent(&self, hwnd: isize) -> isize;
    /// Returns the previous parent.
    fn set_parent(&self, child: isize, new_parent: isize) -> isize;

    fn get_window_rect(&self, hwnd: isize) -> Option<WindowRectangle>;
    fn move_window(&self, hwnd: isize, rect: WindowRectangle, repaint: bool) -> bool;
    /// Returns whether the window was previously visible.
    fn show_window(&self, hwnd: isize, cmd: i32) -> bool;

    fn is_window(&self, hwnd: isize) -> bool;
    fn destroy_window(&self, hwnd: isize) -> bool;
    fn get_desktop_window(&self) -> isize;
    fn get_foreground_window(&self) -> isize;
}
