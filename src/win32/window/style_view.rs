use crate::win32::api::error::WindowError;
use crate::win32::api::native::NativeApi;

use super::window_ref::WindowRef;
use super::window_styles::{ExtendedWindowStyles, WindowStyles};

/// A style or extended style mask, possibly a union of several bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFlag {
    Style(WindowStyles),
    Extended(ExtendedWindowStyles),
}

impl From<WindowStyles> for StyleFlag {
    fn from(style: WindowStyles) -> Self {
        StyleFlag::Style(style)
    }
}

impl From<ExtendedWindowStyles> for StyleFlag {
    fn from(ex_style: ExtendedWindowStyles) -> Self {
        StyleFlag::Extended(ex_style)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StyleFlagEntry {
    pub name: &'static str,
    pub flag: StyleFlag,
}

/// Named boolean view over the style and extended style masks of a window.
///
/// Every write reads the whole mask and writes it back. Two writers targeting the same window can
/// lose each other's update: serialize style changes per window.
pub struct StyleView<'a, A: NativeApi + ?Sized> {
    window: WindowRef<'a, A>,
}

impl<'a, A: NativeApi + ?Sized> StyleView<'a, A> {
    pub fn new(window: WindowRef<'a, A>) -> StyleView<'a, A> {
        StyleView { window }
    }

    /// `true` when every bit of `flag` is set. Zero-valued flags are always set.
    pub fn is_set(&self, flag: impl Into<StyleFlag>) -> Result<bool, WindowError> {
        match flag.into() {
            StyleFlag::Style(bits) => Ok(self.window.style()?.contains(bits)),
            StyleFlag::Extended(bits) => Ok(self.window.ex_style()?.contains(bits)),
        }
    }

    pub fn set(&self, flag: impl Into<StyleFlag>, value: bool) -> Result<(), WindowError> {
        match flag.into() {
            StyleFlag::Style(bits) => {
                let mut style = self.window.style()?;
                style.set(bits, value);
                self.window.set_style(style)?;
            }
            StyleFlag::Extended(bits) => {
                let mut ex_style = self.window.ex_style()?;
                ex_style.set(bits, value);
                self.window.set_ex_style(ex_style)?;
            }
        }
        Ok(())
    }

    /// Looks a flag up by its table name, e.g. `"caption"` or `"ex_topmost"`.
    pub fn get(&self, name: &str) -> Option<Result<bool, WindowError>> {
        find_flag(name).map(|flag| self.is_set(flag))
    }

    pub fn set_named(&self, name: &str, value: bool) -> Option<Result<(), WindowError>> {
        find_flag(name).map(|flag| self.set(flag, value))
    }

    /// Names of the non-zero flags currently set, in table order.
    pub fn enabled_flags(&self) -> Result<Vec<&'static str>, WindowError> {
        Ok(enabled_flag_names(self.window.style()?, self.window.ex_style()?))
    }
}

/// Names of the non-zero table flags fully contained in `style` and `ex_style`.
pub fn enabled_flag_names(style: WindowStyles, ex_style: ExtendedWindowStyles) -> Vec<&'static str> {
    STYLE_FLAGS
        .iter()
        .filter(|e| match e.flag {
            StyleFlag::Style(bits) => !bits.is_empty() && style.contains(bits),
            StyleFlag::Extended(bits) => !bits.is_empty() && ex_style.contains(bits),
        })
        .map(|e| e.name)
        .collect()
}

pub fn find_flag(name: &str) -> Option<StyleFlag> {
    STYLE_FLAGS.iter().find(|e| e.name == name).map(|e| e.flag)
}

macro_rules! style_flags {
    ($($name:literal, $get:ident, $set:ident => $flag:expr;)*) => {
        /// Every named flag exposed by [`StyleView`].
        pub const STYLE_FLAGS: &[StyleFlagEntry] = &[$(StyleFlagEntry { name: $name, flag: $flag },)*];

        impl<A: NativeApi + ?Sized> StyleView<'_, A> {
            $(
                pub fn $get(&self) -> Result<bool, WindowError> {
                    self.is_set($flag)
                }

                pub fn $set(&self, value: bool) -> Result<(), WindowError> {
                    self.set($flag, value)
                }
            )*
        }
    };
}

use StyleFlag::{Extended as Ex, Style as St};

style_flags! {
    "overlapped", overlapped, set_overlapped => St(WindowStyles::OVERLAPPED);
    "popup", popup, set_popup => St(WindowStyles::POPUP);
    "child", child, set_child => St(WindowStyles::CHILD);
    "minimize", minimize, set_minimize => St(WindowStyles::MINIMIZE);
    "visible", visible, set_visible => St(WindowStyles::VISIBLE);
    "disabled", disabled, set_disabled => St(WindowStyles::DISABLED);
    "clip_siblings", clip_siblings, set_clip_siblings => St(WindowStyles::CLIPSIBLINGS);
    "clip_children", clip_children, set_clip_children => St(WindowStyles::CLIPCHILDREN);
    "maximize", maximize, set_maximize => St(WindowStyles::MAXIMIZE);
    "caption", caption, set_caption => St(WindowStyles::CAPTION);
    "border", border, set_border => St(WindowStyles::BORDER);
    "dlg_frame", dlg_frame, set_dlg_frame => St(WindowStyles::DLGFRAME);
    "vscroll", vscroll, set_vscroll => St(WindowStyles::VSCROLL);
    "hscroll", hscroll, set_hscroll => St(WindowStyles::HSCROLL);
    "sys_menu", sys_menu, set_sys_menu => St(WindowStyles::SYSMENU);
    "thick_frame", thick_frame, set_thick_frame => St(WindowStyles::THICKFRAME);
    "group", group, set_group => St(WindowStyles::GROUP);
    "tab_stop", tab_stop, set_tab_stop => St(WindowStyles::TABSTOP);
    "minimize_box", minimize_box, set_minimize_box => St(WindowStyles::MINIMIZEBOX);
    "maximize_box", maximize_box, set_maximize_box => St(WindowStyles::MAXIMIZEBOX);
    "tiled", tiled, set_tiled => St(WindowStyles::TILED);
    "iconic", iconic, set_iconic => St(WindowStyles::ICONIC);
    "size_box", size_box, set_size_box => St(WindowStyles::SIZEBOX);
    "child_window", child_window, set_child_window => St(WindowStyles::CHILDWINDOW);
    "overlapped_window", overlapped_window, set_overlapped_window => St(WindowStyles::OVERLAPPEDWINDOW);
    "tiled_window", tiled_window, set_tiled_window => St(WindowStyles::TILEDWINDOW);
    "popup_window", popup_window, set_popup_window => St(WindowStyles::POPUPWINDOW);

    "ex_dlg_modal_frame", ex_dlg_modal_frame, set_ex_dlg_modal_frame => Ex(ExtendedWindowStyles::DLGMODALFRAME);
    "ex_no_parent_notify", ex_no_parent_notify, set_ex_no_parent_notify => Ex(ExtendedWindowStyles::NOPARENTNOTIFY);
    "ex_topmost", ex_topmost, set_ex_topmost => Ex(ExtendedWindowStyles::TOPMOST);
    "ex_accept_files", ex_accept_files, set_ex_accept_files => Ex(ExtendedWindowStyles::ACCEPTFILES);
    "ex_transparent", ex_transparent, set_ex_transparent => Ex(ExtendedWindowStyles::TRANSPARENT);
    "ex_mdi_child", ex_mdi_child, set_ex_mdi_child => Ex(ExtendedWindowStyles::MDICHILD);
    "ex_tool_window", ex_tool_window, set_ex_tool_window => Ex(ExtendedWindowStyles::TOOLWINDOW);
    "ex_window_edge", ex_window_edge, set_ex_window_edge => Ex(ExtendedWindowStyles::WINDOWEDGE);
    "ex_client_edge", ex_client_edge, set_ex_client_edge => Ex(ExtendedWindowStyles::CLIENTEDGE);
    "ex_context_help", ex_context_help, set_ex_context_help => Ex(ExtendedWindowStyles::CONTEXTHELP);
    "ex_right", ex_right, set_ex_right => Ex(ExtendedWindowStyles::RIGHT);
    "ex_left", ex_left, set_ex_left => Ex(ExtendedWindowStyles::LEFT);
    "ex_rtl_reading", ex_rtl_reading, set_ex_rtl_reading => Ex(ExtendedWindowStyles::RTLREADING);
    "ex_ltr_reading", ex_ltr_reading, set_ex_ltr_reading => Ex(ExtendedWindowStyles::LTRREADING);
    "ex_left_scrollbar", ex_left_scrollbar, set_ex_left_scrollbar => Ex(ExtendedWindowStyles::LEFTSCROLLBAR);
    "ex_right_scrollbar", ex_right_scrollbar, set_ex_right_scrollbar => Ex(ExtendedWindowStyles::RIGHTSCROLLBAR);
    "ex_control_parent", ex_control_parent, set_ex_control_parent => Ex(ExtendedWindowStyles::CONTROLPARENT);
    "ex_static_edge", ex_static_edge, set_ex_static_edge => Ex(ExtendedWindowStyles::STATICEDGE);
    "ex_app_window", ex_app_window, set_ex_app_window => Ex(ExtendedWindowStyles::APPWINDOW);
    "ex_layered", ex_layered, set_ex_layered => Ex(ExtendedWindowStyles::LAYERED);
    "ex_no_inherit_layout", ex_no_inherit_layout, set_ex_no_inherit_layout => Ex(ExtendedWindowStyles::NOINHERITLAYOUT);
    "ex_no_redirection_bitmap", ex_no_redirection_bitmap, set_ex_no_redirection_bitmap => Ex(ExtendedWindowStyles::NOREDIRECTIONBITMAP);
    "ex_layout_rtl", ex_layout_rtl, set_ex_layout_rtl => Ex(ExtendedWindowStyles::LAYOUTRTL);
    "ex_composited", ex_composited, set_ex_composited => Ex(ExtendedWindowStyles::COMPOSITED);
    "ex_no_activate", ex_no_activate, set_ex_no_activate => Ex(ExtendedWindowStyles::NOACTIVATE);
    "ex_overlapped_window", ex_overlapped_window, set_ex_overlapped_window => Ex(ExtendedWindowStyles::OVERLAPPEDWINDOW);
    "ex_palette_window", ex_palette_window, set_ex_palette_window => Ex(ExtendedWindowStyles::PALETTEWINDOW);
}

#[cfg(test)]
mod tests {
    use super::{find_flag, StyleFlag, STYLE_FLAGS};
    use crate::win32::api::mock::MockDesktop;
    use crate::win32::window::window_ref::WindowRef;
    use crate::win32::window::window_styles::{ExtendedWindowStyles, WindowStyles};
    use std::collections::HashSet;

    #[test]
    fn test_toggle_law_for_every_flag() {
        let api = MockDesktop::new();
        let hwnd = api.create_window(None, "App", "", WindowStyles::OVERLAPPEDWINDOW | WindowStyles::VISIBLE);
        let styles = WindowRef::new(&api, hwnd).styles();

        for entry in STYLE_FLAGS {
            styles.set(entry.flag, true).unwrap();
            assert!(styles.is_set(entry.flag).unwrap(), "{} should be set", entry.name);

            let is_zero = match entry.flag {
                StyleFlag::Style(bits) => bits.is_empty(),
                StyleFlag::Extended(bits) => bits.is_empty(),
            };
            styles.set(entry.flag, false).unwrap();
            if !is_zero {
                assert!(!styles.is_set(entry.flag).unwrap(), "{} should be cleared", entry.name);
            }
        }
    }

    #[test]
    fn test_union_sets_every_component() {
        let api = MockDesktop::new();
        let hwnd = api.create_window(None, "App", "", WindowStyles::POPUP);
        let styles = WindowRef::new(&api, hwnd).styles();

        styles.set_overlapped_window(true).unwrap();

        assert!(styles.caption().unwrap());
        assert!(styles.border().unwrap());
        assert!(styles.dlg_frame().unwrap());
        assert!(styles.sys_menu().unwrap());
        assert!(styles.thick_frame().unwrap());
        assert!(styles.minimize_box().unwrap());
        assert!(styles.maximize_box().unwrap());
        assert!(styles.popup().unwrap());
    }

    #[test]
    fn test_union_requires_all_components() {
        let api = MockDesktop::new();
        let hwnd = api.create_window(None, "App", "", WindowStyles::OVERLAPPEDWINDOW);
        let styles = WindowRef::new(&api, hwnd).styles();

        styles.set_sys_menu(false).unwrap();

        assert!(!styles.overlapped_window().unwrap());
        assert!(styles.caption().unwrap());
    }

    #[test]
    fn test_extended_flags() {
        let api = MockDesktop::new();
        let hwnd = api.create_window(None, "App", "", WindowStyles::OVERLAPPEDWINDOW);
        let window = WindowRef::new(&api, hwnd);
        let styles = window.styles();

        styles.set_ex_palette_window(true).unwrap();

        assert!(styles.ex_topmost().unwrap());
        assert!(styles.ex_tool_window().unwrap());
        assert_eq!(window.ex_style().unwrap(), ExtendedWindowStyles::PALETTEWINDOW);
        assert_eq!(window.style().unwrap(), WindowStyles::OVERLAPPEDWINDOW);
    }

    #[test]
    fn test_named_lookup() {
        let api = MockDesktop::new();
        let hwnd = api.create_window(None, "App", "", WindowStyles::CHILD);
        let styles = WindowRef::new(&api, hwnd).styles();

        assert_eq!(styles.get("child").map(Result::unwrap), Some(true));
        assert_eq!(styles.set_named("ex_layered", true).map(Result::unwrap), Some(()));
        assert_eq!(styles.get("ex_layered").map(Result::unwrap), Some(true));
        assert!(styles.get("no_such_flag").is_none());
        assert_eq!(find_flag("popup"), Some(StyleFlag::Style(WindowStyles::POPUP)));
    }

    #[test]
    fn test_enabled_flags() {
        let api = MockDesktop::new();
        let hwnd = api.create_window(None, "App", "", WindowStyles::CHILD | WindowStyles::VISIBLE);
        let styles = WindowRef::new(&api, hwnd).styles();
        styles.set_ex_topmost(true).unwrap();

        assert_eq!(styles.enabled_flags().unwrap(), vec!["child", "visible", "child_window", "ex_topmost"]);
    }

    #[test]
    fn test_flag_names_are_unique() {
        let names: HashSet<_> = STYLE_FLAGS.iter().map(|e| e.name).collect();

        assert_eq!(names.len(), STYLE_FLAGS.len());
    }

    #[test]
    fn test_errors_propagate() {
        let api = MockDesktop::new();
        let hwnd = api.create_window(None, "App", "", WindowStyles::CHILD);
        let window = WindowRef::new(&api, hwnd);
        window.destroy().unwrap();

        assert!(window.styles().child().is_err());
        assert!(window.styles().set_child(true).is_err());
        assert_eq!(window.lenient().styles().child(), Ok(false));
    }
}
