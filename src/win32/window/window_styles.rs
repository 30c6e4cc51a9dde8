use bitflags::bitflags;

bitflags! {
    /// Window style bits (`GWL_STYLE`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowStyles: u32 {
        const OVERLAPPED = 0x0000_0000;
        const POPUP = 0x8000_0000;
        const CHILD = 0x4000_0000;
        const MINIMIZE = 0x2000_0000;
        const VISIBLE = 0x1000_0000;
        const DISABLED = 0x0800_0000;
        const CLIPSIBLINGS = 0x0400_0000;
        const CLIPCHILDREN = 0x0200_0000;
        const MAXIMIZE = 0x0100_0000;
        const BORDER = 0x0080_0000;
        const DLGFRAME = 0x0040_0000;
        const CAPTION = Self::BORDER.bits() | Self::DLGFRAME.bits();
        const VSCROLL = 0x0020_0000;
        const HSCROLL = 0x0010_0000;
        const SYSMENU = 0x0008_0000;
        const THICKFRAME = 0x0004_0000;
        const GROUP = 0x0002_0000;
        const TABSTOP = 0x0001_0000;
        const MINIMIZEBOX = 0x0002_0000;
        const MAXIMIZEBOX = 0x0001_0000;

        const TILED = Self::OVERLAPPED.bits();
        const ICONIC = Self::MINIMIZE.bits();
        const SIZEBOX = Self::THICKFRAME.bits();
        const CHILDWINDOW = Self::CHILD.bits();

        const OVERLAPPEDWINDOW = Self::OVERLAPPED.bits()
            | Self::CAPTION.bits()
            | Self::SYSMENU.bits()
            | Self::THICKFRAME.bits()
            | Self::MINIMIZEBOX.bits()
            | Self::MAXIMIZEBOX.bits();
        const TILEDWINDOW = Self::OVERLAPPEDWINDOW.bits();
        const POPUPWINDOW = Self::POPUP.bits() | Self::BORDER.bits() | Self::SYSMENU.bits();
    }
}

bitflags! {
    /// Extended window style bits (`GWL_EXSTYLE`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ExtendedWindowStyles: u32 {
        const DLGMODALFRAME = 0x0000_0001;
        const NOPARENTNOTIFY = 0x0000_0004;
        const TOPMOST = 0x0000_0008;
        const ACCEPTFILES = 0x0000_0010;
        const TRANSPARENT = 0x0000_0020;
        const MDICHILD = 0x0000_0040;
        const TOOLWINDOW = 0x0000_0080;
        const WINDOWEDGE = 0x0000_0100;
        const CLIENTEDGE = 0x0000_0200;
        const CONTEXTHELP = 0x0000_0400;
        const RIGHT = 0x0000_1000;
        const LEFT = 0x0000_0000;
        const RTLREADING = 0x0000_2000;
        const LTRREADING = 0x0000_0000;
        const LEFTSCROLLBAR = 0x0000_4000;
        const RIGHTSCROLLBAR = 0x0000_0000;
        const CONTROLPARENT = 0x0001_0000;
        const STATICEDGE = 0x0002_0000;
        const APPWINDOW = 0x0004_0000;
        const LAYERED = 0x0008_0000;
        const NOINHERITLAYOUT = 0x0010_0000;
        const NOREDIRECTIONBITMAP = 0x0020_0000;
        const LAYOUTRTL = 0x0040_0000;
        const COMPOSITED = 0x0200_0000;
        const NOACTIVATE = 0x0800_0000;

        const OVERLAPPEDWINDOW = Self::WINDOWEDGE.bits() | Self::CLIENTEDGE.bits();
        const PALETTEWINDOW = Self::WINDOWEDGE.bits() | Self::TOOLWINDOW.bits() | Self::TOPMOST.bits();
    }
}

impl WindowStyles {
    /// Reinterprets a raw window long as a style mask, keeping bits this type has no name for.
    pub fn from_long(value: isize) -> WindowStyles {
        WindowStyles::from_bits_retain(value as u32)
    }

    pub fn to_long(self) -> isize {
        self.bits() as i32 as isize
    }
}

impl ExtendedWindowStyles {
    pub fn from_long(value: isize) -> ExtendedWindowStyles {
        ExtendedWindowStyles::from_bits_retain(value as u32)
    }

    pub fn to_long(self) -> isize {
        self.bits() as i32 as isize
    }
}
