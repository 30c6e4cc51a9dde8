use std::fmt::{Debug, Display};

/// Non-owning reference to an OS-managed window.
///
/// The handle can go stale at any time: check [`crate::WindowRef::exists`] instead of assuming
/// the window is still alive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    pub const NULL: WindowHandle = WindowHandle(0);

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Parses a decimal or `0x`-prefixed hexadecimal handle value.
    pub fn parse(value: &str) -> Option<WindowHandle> {
        let value = value.trim();
        let raw = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
            Some(hex) => isize::from_str_radix(hex, 16).ok()?,
            None => value.parse::<isize>().ok()?,
        };
        Some(WindowHandle(raw))
    }
}

impl From<isize> for WindowHandle {
    fn from(raw: isize) -> Self {
        WindowHandle(raw)
    }
}

impl From<WindowHandle> for isize {
    fn from(handle: WindowHandle) -> Self {
        handle.0
    }
}

impl Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl Debug for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WindowHandle({})", self)
    }
}

/// Handle of the module instance that owns a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModuleHandle(pub isize);

impl ModuleHandle {
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}
