pub mod api {
    pub mod enumerate;
    pub mod error;
    pub mod mock;
    pub mod native;
    pub mod window;
    #[cfg(windows)]
    pub mod win32_api;
}

#[cfg(windows)]
pub mod callbacks {
    pub mod enum_windows;
}

pub mod window {
    pub mod style_view;
    pub mod window_handle;
    pub mod window_ref;
    pub mod window_snapshot;
    pub mod window_styles;
    pub mod window_tree;
}
