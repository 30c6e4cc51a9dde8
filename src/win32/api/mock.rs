//! In-memory window tree implementing [`NativeApi`].
//!
//! Follows the native contract closely enough to exercise the wrappers: failures only write the
//! last-error slot, successful calls leave it untouched, top-level windows report a null parent and
//! child enumeration walks the whole subtree.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use crate::structs::rectangle::WindowRectangle;
use crate::win32::window::window_handle::WindowHandle;
use crate::win32::window::window_styles::{ExtendedWindowStyles, WindowStyles};

use super::native::{
    NativeApi, ShowCommand, WindowLong, DESKTOP_CLASS_NAME, ERROR_INVALID_INDEX, ERROR_INVALID_PARAMETER,
    ERROR_INVALID_WINDOW_HANDLE,
};

const DESKTOP_HANDLE: isize = 0x0001_0010;
const FIRST_HANDLE: isize = 0x0002_0000;

#[derive(Debug, Clone)]
struct MockWindow {
    parent: isize,
    class_name: String,
    title: String,
    rect: WindowRectangle,
    longs: HashMap<i32, isize>,
}

pub struct MockDesktop {
    windows: RefCell<BTreeMap<isize, MockWindow>>,
    last_error: Cell<u32>,
    next_handle: Cell<isize>,
    foreground: Cell<isize>,
}

impl Default for MockDesktop {
    fn default() -> Self {
        MockDesktop::new()
    }
}

impl MockDesktop {
    pub fn new() -> MockDesktop {
        let desktop = MockWindow {
            parent: 0,
            class_name: DESKTOP_CLASS_NAME.to_string(),
            title: String::new(),
            rect: WindowRectangle::from_corners(0, 0, 1920, 1080),
            longs: Self::default_longs(WindowStyles::POPUP | WindowStyles::VISIBLE | WindowStyles::CLIPCHILDREN),
        };

        MockDesktop {
            windows: RefCell::new(BTreeMap::from([(DESKTOP_HANDLE, desktop)])),
            last_error: Cell::new(0),
            next_handle: Cell::new(FIRST_HANDLE),
            foreground: Cell::new(0),
        }
    }

    /// Creates a window under `parent`, or a top-level window when `parent` is `None`.
    ///
    /// Panics if `parent` does not exist: the mock is a test fixture and a bad fixture is a bug in
    /// the test.
    pub fn create_window(
        &self,
        parent: Option<WindowHandle>,
        class_name: &str,
        title: &str,
        style: WindowStyles,
    ) -> WindowHandle {
        let parent = parent.map_or(DESKTOP_HANDLE, |p| p.0);
        assert!(self.windows.borrow().contains_key(&parent), "unknown parent {:#x}", parent);

        let hwnd = self.next_handle.get();
        self.next_handle.set(hwnd + 2);

        let window = MockWindow {
            parent,
            class_name: class_name.to_string(),
            title: title.to_string(),
            rect: WindowRectangle::default(),
            longs: Self::default_longs(style),
        };
        self.windows.borrow_mut().insert(hwnd, window);
        WindowHandle(hwnd)
    }

    pub fn set_foreground(&self, hwnd: WindowHandle) {
        self.foreground.set(hwnd.0);
    }

    pub fn window_count(&self) -> usize {
        self.windows.borrow().len()
    }

    fn default_longs(style: WindowStyles) -> HashMap<i32, isize> {
        HashMap::from([
            (WindowLong::WndProc.into(), 0),
            (WindowLong::HInstance.into(), 0x0040_0000),
            (WindowLong::HwndParent.into(), 0),
            (WindowLong::Id.into(), 0),
            (WindowLong::Style.into(), style.to_long()),
            (WindowLong::ExStyle.into(), ExtendedWindowStyles::empty().to_long()),
            (WindowLong::UserData.into(), 0),
        ])
    }

    fn fail<T>(&self, code: u32, value: T) -> T {
        self.last_error.set(code);
        value
    }

    fn with_window<T>(&self, hwnd: isize, default: T, f: impl FnOnce(&mut MockWindow) -> T) -> T {
        match self.windows.borrow_mut().get_mut(&hwnd) {
            Some(w) => f(w),
            None => self.fail(ERROR_INVALID_WINDOW_HANDLE, default),
        }
    }

    fn children_of(&self, parent: isize) -> Vec<isize> {
        self.windows
            .borrow()
            .iter()
            .filter(|(_, w)| w.parent == parent)
            .map(|(h, _)| *h)
            .collect()
    }

    fn descendants_of(&self, parent: isize) -> Vec<isize> {
        let mut result = Vec::new();
        for child in self.children_of(parent) {
            result.push(child);
            result.extend(self.descendants_of(child));
        }
        result
    }

    fn is_descendant(&self, hwnd: isize, ancestor: isize) -> bool {
        let windows = self.windows.borrow();
        let mut current = windows.get(&hwnd).map(|w| w.parent);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = windows.get(&p).map(|w| w.parent);
        }
        false
    }

    fn visit(&self, handles: Vec<isize>, callback: &mut dyn FnMut(isize) -> bool) -> bool {
        for hwnd in handles {
            if !callback(hwnd) {
                return false;
            }
        }
        true
    }
}

impl NativeApi for MockDesktop {
    fn set_last_error(&self, code: u32) {
        self.last_error.set(code);
    }

    fn get_last_error(&self) -> u32 {
        self.last_error.get()
    }

    fn get_window_long(&self, hwnd: isize, index: i32) -> isize {
        match self.with_window(hwnd, None, |w| Some(w.longs.get(&index).copied())) {
            Some(Some(value)) => value,
            Some(None) => self.fail(ERROR_INVALID_INDEX, 0),
            None => 0,
        }
    }

    fn set_window_long(&self, hwnd: isize, index: i32, value: isize) -> isize {
        match self.with_window(hwnd, None, |w| Some(w.longs.get_mut(&index).map(|v| std::mem::replace(v, value)))) {
            Some(Some(previous)) => previous,
            Some(None) => self.fail(ERROR_INVALID_INDEX, 0),
            None => 0,
        }
    }

    fn enum_windows(&self, callback: &mut dyn FnMut(isize) -> bool) -> bool {
        let top_level = self.children_of(DESKTOP_HANDLE);
        self.visit(top_level, callback)
    }

    fn enum_child_windows(&self, parent: isize, callback: &mut dyn FnMut(isize) -> bool) -> bool {
        if !self.windows.borrow().contains_key(&parent) {
            return self.fail(ERROR_INVALID_WINDOW_HANDLE, false);
        }
        let descendants = self.descendants_of(parent);
        self.visit(descendants, callback)
    }

    fn get_window_text(&self, hwnd: isize) -> String {
        self.with_window(hwnd, String::new(), |w| w.title.clone())
    }

    fn set_window_text(&self, hwnd: isize, text: &str) -> bool {
        self.with_window(hwnd, false, |w| {
            w.title = text.to_string();
            true
        })
    }

    fn get_class_name(&self, hwnd: isize) -> String {
        self.with_window(hwnd, String::new(), |w| w.class_name.clone())
    }

    fn get_parent(&self, hwnd: isize) -> isize {
        self.with_window(hwnd, 0, |w| if w.parent == DESKTOP_HANDLE { 0 } else { w.parent })
    }

    fn set_parent(&self, child: isize, new_parent: isize) -> isize {
        let new_parent = if new_parent == 0 { DESKTOP_HANDLE } else { new_parent };
        if child == DESKTOP_HANDLE || !self.windows.borrow().contains_key(&child) {
            return self.fail(ERROR_INVALID_WINDOW_HANDLE, 0);
        }
        if !self.windows.borrow().contains_key(&new_parent) {
            return self.fail(ERROR_INVALID_WINDOW_HANDLE, 0);
        }
        if new_parent == child || self.is_descendant(new_parent, child) {
            return self.fail(ERROR_INVALID_PARAMETER, 0);
        }

        self.with_window(child, 0, |w| std::mem::replace(&mut w.parent, new_parent))
    }

    fn get_window_rect(&self, hwnd: isize) -> Option<WindowRectangle> {
        self.with_window(hwnd, None, |w| Some(w.rect))
    }

    fn move_window(&self, hwnd: isize, rect: WindowRectangle, _repaint: bool) -> bool {
        self.with_window(hwnd, false, |w| {
            w.rect = rect;
            true
        })
    }

    fn show_window(&self, hwnd: isize, cmd: i32) -> bool {
        self.with_window(hwnd, false, |w| {
            let key = i32::from(WindowLong::Style);
            let style = WindowStyles::from_long(w.longs.get(&key).copied().unwrap_or_default());
            let was_visible = style.contains(WindowStyles::VISIBLE);

            let hide = ShowCommand::Hide as i32;
            let minimize = [ShowCommand::ShowMinimized, ShowCommand::Minimize, ShowCommand::ShowMinNoActive]
                .map(i32::from)
                .contains(&cmd)
                || cmd == ShowCommand::ForceMinimize as i32;
            let maximize = cmd == ShowCommand::ShowMaximized as i32;
            let restore = [ShowCommand::ShowNormal, ShowCommand::Restore, ShowCommand::ShowDefault]
                .map(i32::from)
                .contains(&cmd);

            let mut new_style = style;
            new_style.set(WindowStyles::VISIBLE, cmd != hide);
            if minimize {
                new_style.remove(WindowStyles::MAXIMIZE);
                new_style.insert(WindowStyles::MINIMIZE);
            } else if maximize {
                new_style.remove(WindowStyles::MINIMIZE);
                new_style.insert(WindowStyles::MAXIMIZE);
            } else if restore {
                new_style.remove(WindowStyles::MINIMIZE | WindowStyles::MAXIMIZE);
            }
            w.longs.insert(key, new_style.to_long());

            was_visible
        })
    }

    fn is_window(&self, hwnd: isize) -> bool {
        self.windows.borrow().contains_key(&hwnd)
    }

    fn destroy_window(&self, hwnd: isize) -> bool {
        if hwnd == DESKTOP_HANDLE {
            return self.fail(ERROR_INVALID_PARAMETER, false);
        }
        if !self.is_window(hwnd) {
            return self.fail(ERROR_INVALID_WINDOW_HANDLE, false);
        }

        let mut doomed = self.descendants_of(hwnd);
        doomed.push(hwnd);
        let mut windows = self.windows.borrow_mut();
        for h in doomed {
            windows.remove(&h);
            if self.foreground.get() == h {
                self.foreground.set(0);
            }
        }
        true
    }

    fn get_desktop_window(&self) -> isize {
        DESKTOP_HANDLE
    }

    fn get_foreground_window(&self) -> isize {
        self.foreground.get()
    }
}
