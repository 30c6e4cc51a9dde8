use std::fmt::{Debug, Display};

use crate::structs::rectangle::WindowRectangle;

use super::style_view::enabled_flag_names;
use super::window_handle::WindowHandle;
use super::window_styles::{ExtendedWindowStyles, WindowStyles};

/// Attributes of a window read at one point in time. Reads that failed are left empty.
#[derive(Clone, PartialEq)]
pub struct WindowSnapshot {
    pub hwnd: WindowHandle,
    pub title: Option<String>,
    pub class_name: Option<String>,
    pub style: WindowStyles,
    pub ex_style: ExtendedWindowStyles,
    pub rect: Option<WindowRectangle>,
    pub parent: WindowHandle,
}

impl WindowSnapshot {
    pub fn is_visible(&self) -> bool {
        self.style.contains(WindowStyles::VISIBLE)
    }

    pub fn flag_names(&self) -> Vec<&'static str> {
        enabled_flag_names(self.style, self.ex_style)
    }
}

impl Debug for WindowSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowSnapshot")
            .field("hwnd", &self.hwnd)
            .field("title", &self.title.clone().unwrap_or("/".to_string()))
            .field("class", &self.class_name.clone().unwrap_or("/".to_string()))
            .field("style", &format!("{:x}", self.style.bits()))
            .field("ex_style", &format!("{:x}", self.ex_style.bits()))
            .field("rect", &self.rect.map_or("/".to_string(), |r| format!("{:?}", r)))
            .field("parent", &self.parent)
            .finish()
    }
}

impl Display for WindowSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = default_str(self.title.as_ref());
        let class = default_str(self.class_name.as_ref());
        let rect = self.rect.map_or("/".to_string(), |r| {
            format!("({}, {}, {}, {})", r.x, r.y, r.width, r.height)
        });
        let visible = if self.is_visible() { "v" } else { "!v" };
        write!(
            f,
            "[{}] {} (class: {}, style: {:x}, [{}], view: {})",
            self.hwnd,
            title,
            class,
            self.style.bits(),
            visible,
            rect
        )
    }
}

fn default_str<T: Debug>(val: Option<T>) -> String {
    val.map_or("/".to_string(), |v| format!("{:?}", v))
}
