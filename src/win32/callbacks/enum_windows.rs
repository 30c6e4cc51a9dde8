use windows::Win32::Foundation::{BOOL, HWND, LPARAM};

/// Visitor passed through the `LPARAM` of `EnumWindows`/`EnumChildWindows`.
pub type EnumVisitor<'a> = &'a mut dyn FnMut(isize) -> bool;

pub extern "system" fn enum_windows_visitor(hwnd: HWND, param: LPARAM) -> BOOL {
    let visitor = unsafe { &mut *(param.0 as *mut EnumVisitor) };
    visitor(hwnd.0 as isize).into()
}

pub fn visitor_param(visitor: &mut EnumVisitor) -> LPARAM {
    LPARAM(visitor as *mut EnumVisitor as isize)
}
