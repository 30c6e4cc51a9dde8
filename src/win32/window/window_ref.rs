use std::fmt::Debug;

use crate::structs::{point::WindowPoint, rectangle::WindowRectangle};
use crate::win32::api::enumerate::list_child_windows;
use crate::win32::api::error::{OnError, WindowError};
use crate::win32::api::native::{NativeApi, ShowCommand};
use crate::win32::api::window::{
    destroy_window, get_class_name, get_desktop_window, get_long, get_module_handle, get_parent, get_window_ex_style,
    get_window_id, get_window_rect, get_window_style, get_window_title, is_window, move_window, set_long,
    set_module_handle, set_parent, set_window_ex_style, set_window_id, set_window_style, set_window_title,
    show_window, try_set_long, try_set_window_ex_style, try_set_window_style,
};

use super::{
    style_view::StyleView,
    window_handle::{ModuleHandle, WindowHandle},
    window_snapshot::WindowSnapshot,
    window_styles::{ExtendedWindowStyles, WindowStyles},
};

/// A [`WindowHandle`] bound to the native API that serves it.
///
/// Every accessor is a live query; nothing is cached. With the default [`OnError::Fail`] policy a
/// non-zero last error becomes an `Err`; [`WindowRef::lenient`] returns the raw results instead.
pub struct WindowRef<'a, A: NativeApi + ?Sized> {
    api: &'a A,
    hwnd: WindowHandle,
    on_error: OnError,
}

impl<A: NativeApi + ?Sized> Clone for WindowRef<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: NativeApi + ?Sized> Copy for WindowRef<'_, A> {}

impl<A: NativeApi + ?Sized> PartialEq for WindowRef<'_, A> {
    fn eq(&self, other: &Self) -> bool {
        self.hwnd == other.hwnd
    }
}

impl<A: NativeApi + ?Sized> Debug for WindowRef<'_, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowRef")
            .field("hwnd", &self.hwnd)
            .field("on_error", &self.on_error)
            .finish()
    }
}

impl<'a, A: NativeApi + ?Sized> WindowRef<'a, A> {
    pub fn new(api: &'a A, hwnd: WindowHandle) -> WindowRef<'a, A> {
        WindowRef {
            api,
            hwnd,
            on_error: OnError::Fail,
        }
    }

    pub fn desktop(api: &'a A) -> WindowRef<'a, A> {
        WindowRef::new(api, get_desktop_window(api))
    }

    pub fn with_policy(self, on_error: OnError) -> WindowRef<'a, A> {
        WindowRef { on_error, ..self }
    }

    pub fn lenient(self) -> WindowRef<'a, A> {
        self.with_policy(OnError::Ignore)
    }

    /// Binds another handle to the same API and error policy.
    pub fn at(&self, hwnd: WindowHandle) -> WindowRef<'a, A> {
        WindowRef { hwnd, ..*self }
    }

    pub fn handle(&self) -> WindowHandle {
        self.hwnd
    }

    pub fn policy(&self) -> OnError {
        self.on_error
    }

    pub fn api(&self) -> &'a A {
        self.api
    }

    pub fn exists(&self) -> bool {
        is_window(self.api, self.hwnd)
    }

    pub fn is_desktop(&self) -> bool {
        self.hwnd == get_desktop_window(self.api)
    }

    pub fn title(&self) -> Result<String, WindowError> {
        get_window_title(self.api, self.hwnd, self.on_error)
    }

    pub fn set_title(&self, title: &str) -> Result<bool, WindowError> {
        set_window_title(self.api, self.hwnd, title, self.on_error)
    }

    pub fn class_name(&self) -> Result<String, WindowError> {
        get_class_name(self.api, self.hwnd, self.on_error)
    }

    pub fn parent(&self) -> Result<WindowHandle, WindowError> {
        get_parent(self.api, self.hwnd, self.on_error)
    }

    /// Returns the previous parent.
    pub fn set_parent(&self, new_parent: WindowHandle) -> Result<WindowHandle, WindowError> {
        set_parent(self.api, self.hwnd, new_parent, self.on_error)
    }

    /// `true` when the window has no parent or its parent is the desktop.
    pub fn is_top_level(&self) -> Result<bool, WindowError> {
        let parent = self.parent()?;
        Ok(parent.is_null() || parent == get_desktop_window(self.api))
    }

    pub fn long(&self, index: impl Into<i32>) -> Result<isize, WindowError> {
        get_long(self.api, self.hwnd, index, self.on_error)
    }

    pub fn set_long(&self, index: impl Into<i32>, value: isize) -> Result<isize, WindowError> {
        set_long(self.api, self.hwnd, index, value, self.on_error)
    }

    pub fn try_set_long(&self, index: impl Into<i32>, value: isize) -> Option<isize> {
        try_set_long(self.api, self.hwnd, index, value)
    }

    pub fn style(&self) -> Result<WindowStyles, WindowError> {
        get_window_style(self.api, self.hwnd, self.on_error)
    }

    pub fn set_style(&self, style: WindowStyles) -> Result<WindowStyles, WindowError> {
        set_window_style(self.api, self.hwnd, style, self.on_error)
    }

    pub fn try_set_style(&self, style: WindowStyles) -> Option<WindowStyles> {
        try_set_window_style(self.api, self.hwnd, style)
    }

    pub fn ex_style(&self) -> Result<ExtendedWindowStyles, WindowError> {
        get_window_ex_style(self.api, self.hwnd, self.on_error)
    }

    pub fn set_ex_style(&self, ex_style: ExtendedWindowStyles) -> Result<ExtendedWindowStyles, WindowError> {
        set_window_ex_style(self.api, self.hwnd, ex_style, self.on_error)
    }

    pub fn try_set_ex_style(&self, ex_style: ExtendedWindowStyles) -> Option<ExtendedWindowStyles> {
        try_set_window_ex_style(self.api, self.hwnd, ex_style)
    }

    pub fn module_handle(&self) -> Result<ModuleHandle, WindowError> {
        get_module_handle(self.api, self.hwnd, self.on_error)
    }

    pub fn set_module_handle(&self, module: ModuleHandle) -> Result<ModuleHandle, WindowError> {
        set_module_handle(self.api, self.hwnd, module, self.on_error)
    }

    pub fn id(&self) -> Result<isize, WindowError> {
        get_window_id(self.api, self.hwnd, self.on_error)
    }

    pub fn set_id(&self, id: isize) -> Result<isize, WindowError> {
        set_window_id(self.api, self.hwnd, id, self.on_error)
    }

    pub fn rect(&self) -> Result<Option<WindowRectangle>, WindowError> {
        get_window_rect(self.api, self.hwnd, self.on_error)
    }

    pub fn move_window(&self, rect: WindowRectangle, repaint: bool) -> Result<bool, WindowError> {
        move_window(self.api, self.hwnd, rect, repaint, self.on_error)
    }

    pub fn move_to(&self, position: WindowPoint, size: WindowPoint) -> Result<bool, WindowError> {
        self.move_window(WindowRectangle::new(position, size), true)
    }

    /// Returns whether the window was visible before the call.
    pub fn show(&self, cmd: ShowCommand) -> Result<bool, WindowError> {
        show_window(self.api, self.hwnd, cmd, self.on_error)
    }

    pub fn destroy(&self) -> Result<bool, WindowError> {
        log::debug!("Destroying window {}", self.hwnd);
        destroy_window(self.api, self.hwnd, self.on_error)
    }

    pub fn styles(&self) -> StyleView<'a, A> {
        StyleView::new(*self)
    }

    /// Direct children when `recursive` is `false`, every descendant otherwise.
    ///
    /// The native child enumeration always walks the whole subtree, so the direct-children form
    /// queries the parent of every descendant and costs O(descendants). Top-level windows report a
    /// null parent; they count as direct children of the desktop.
    pub fn children(&self, recursive: bool) -> Result<Vec<WindowHandle>, WindowError> {
        let descendants = list_child_windows(self.api, self.hwnd, self.on_error)?;
        if recursive {
            return Ok(descendants);
        }

        let is_desktop = self.is_desktop();
        let mut children = Vec::new();
        for hwnd in descendants {
            let parent = match get_parent(self.api, hwnd, self.on_error) {
                Ok(p) => p,
                Err(e) if !self.exists() => return Err(e),
                Err(e) => {
                    log::debug!("Skipping child {} of {}: {}", hwnd, self.hwnd, e);
                    continue;
                }
            };
            if parent == self.hwnd || (is_desktop && parent.is_null()) {
                children.push(hwnd);
            }
        }
        Ok(children)
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        let lenient = self.lenient();
        WindowSnapshot {
            hwnd: self.hwnd,
            title: lenient.title().ok().filter(|t| !t.is_empty()),
            class_name: lenient.class_name().ok().filter(|c| !c.is_empty()),
            style: lenient.style().unwrap_or(WindowStyles::empty()),
            ex_style: lenient.ex_style().unwrap_or(ExtendedWindowStyles::empty()),
            rect: lenient.rect().ok().flatten(),
            parent: lenient.parent().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WindowRef;
    use crate::structs::{point::WindowPoint, rectangle::WindowRectangle};
    use crate::win32::api::mock::MockDesktop;
    use crate::win32::api::native::{ShowCommand, WindowLong, ERROR_INVALID_WINDOW_HANDLE};
    use crate::win32::window::window_handle::WindowHandle;
    use crate::win32::window::window_styles::WindowStyles;

    struct Fixture {
        api: MockDesktop,
        app: WindowHandle,
        toolbar: WindowHandle,
        button: WindowHandle,
        editor: WindowHandle,
        other: WindowHandle,
    }

    fn fixture() -> Fixture {
        let api = MockDesktop::new();
        let app = api.create_window(None, "AppFrame", "My App", WindowStyles::OVERLAPPEDWINDOW);
        let toolbar = api.create_window(Some(app), "ToolbarWindow32", "", WindowStyles::CHILD);
        let button = api.create_window(Some(toolbar), "Button", "Save", WindowStyles::CHILD);
        let editor = api.create_window(Some(app), "Edit", "", WindowStyles::CHILD | WindowStyles::VSCROLL);
        let other = api.create_window(None, "Other", "Other app", WindowStyles::POPUPWINDOW);
        Fixture {
            api,
            app,
            toolbar,
            button,
            editor,
            other,
        }
    }

    #[test]
    fn test_desktop_scenario() {
        let api = MockDesktop::new();
        let desktop = WindowRef::desktop(&api);

        assert!(desktop.exists());
        assert_eq!(desktop.class_name().unwrap(), "#32769");
    }

    #[test]
    fn test_direct_children() {
        let f = fixture();
        let app = WindowRef::new(&f.api, f.app);

        let children = app.children(false).unwrap();

        assert_eq!(children, vec![f.toolbar, f.editor]);
        for child in &children {
            assert_eq!(app.at(*child).parent().unwrap(), f.app);
        }
    }

    #[test]
    fn test_recursive_children_contain_direct_children() {
        let f = fixture();
        let app = WindowRef::new(&f.api, f.app);

        let direct = app.children(false).unwrap();
        let all = app.children(true).unwrap();

        assert_eq!(all, vec![f.toolbar, f.button, f.editor]);
        assert!(direct.iter().all(|c| all.contains(c)));
    }

    #[test]
    fn test_desktop_children_are_top_level_windows() {
        let f = fixture();
        let desktop = WindowRef::desktop(&f.api);

        assert_eq!(desktop.children(false).unwrap(), vec![f.app, f.other]);
        assert_eq!(desktop.children(true).unwrap().len(), 5);
        assert!(desktop.at(f.other).is_top_level().unwrap());
        assert!(!desktop.at(f.button).is_top_level().unwrap());
    }

    #[test]
    fn test_leaf_children_are_empty() {
        let f = fixture();
        let button = WindowRef::new(&f.api, f.button);

        assert!(button.children(false).unwrap().is_empty());
        assert!(button.children(true).unwrap().is_empty());
    }

    #[test]
    fn test_destroy_scenario() {
        let f = fixture();
        let app = WindowRef::new(&f.api, f.app);

        assert_eq!(app.destroy(), Ok(true));
        assert!(!app.exists());
        assert!(!app.at(f.button).exists());

        let err = app.title().unwrap_err();
        assert_eq!(err.code(), Some(ERROR_INVALID_WINDOW_HANDLE));
        assert!(app.style().is_err());

        let lenient = app.lenient();
        assert_eq!(lenient.title().unwrap(), "");
        assert_eq!(lenient.style().unwrap(), WindowStyles::empty());
        assert_eq!(lenient.parent().unwrap(), WindowHandle::NULL);
        assert_eq!(lenient.children(false).unwrap(), vec![]);
    }

    #[test]
    fn test_reparent() {
        let f = fixture();
        let button = WindowRef::new(&f.api, f.button);

        assert_eq!(button.set_parent(f.editor).unwrap(), f.toolbar);
        assert_eq!(button.parent().unwrap(), f.editor);
        assert_eq!(WindowRef::new(&f.api, f.editor).children(false).unwrap(), vec![f.button]);
        assert!(WindowRef::new(&f.api, f.toolbar).children(true).unwrap().is_empty());
    }

    #[test]
    fn test_move_and_rect() {
        let f = fixture();
        let app = WindowRef::new(&f.api, f.app);

        assert_eq!(app.move_to(WindowPoint::new(10, 20), WindowPoint::new(800, 600)), Ok(true));
        assert_eq!(
            app.rect().unwrap(),
            Some(WindowRectangle::new(WindowPoint::new(10, 20), WindowPoint::new(800, 600)))
        );
    }

    #[test]
    fn test_show() {
        let f = fixture();
        let app = WindowRef::new(&f.api, f.app);

        assert_eq!(app.show(ShowCommand::Show), Ok(false));
        assert!(app.style().unwrap().contains(WindowStyles::VISIBLE));
        assert_eq!(app.show(ShowCommand::Hide), Ok(true));
        assert!(!app.style().unwrap().contains(WindowStyles::VISIBLE));
    }

    #[test]
    fn test_longs() {
        let f = fixture();
        let editor = WindowRef::new(&f.api, f.editor);

        assert_eq!(editor.set_long(WindowLong::UserData, 0xBEEF), Ok(0));
        assert_eq!(editor.long(WindowLong::UserData), Ok(0xBEEF));
        assert_eq!(editor.try_set_style(WindowStyles::CHILD), Some(WindowStyles::CHILD | WindowStyles::VSCROLL));
        assert_eq!(editor.set_id(7), Ok(0));
        assert_eq!(editor.id(), Ok(7));
    }

    #[test]
    fn test_snapshot() {
        let f = fixture();
        let snapshot = WindowRef::new(&f.api, f.editor).snapshot();

        assert_eq!(snapshot.hwnd, f.editor);
        assert_eq!(snapshot.class_name.as_deref(), Some("Edit"));
        assert_eq!(snapshot.title, None);
        assert_eq!(snapshot.parent, f.app);
        assert!(snapshot.style.contains(WindowStyles::VSCROLL));
    }
}
