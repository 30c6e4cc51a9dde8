use regex::Regex;

use winhandle::win32::window::window_snapshot::WindowSnapshot;

use super::configs::Filters;

#[derive(Debug, Clone)]
enum Matcher {
    Contains(String),
    Regex(Regex),
}

impl Matcher {
    fn parse(query: &str) -> Result<Matcher, regex::Error> {
        match query.strip_prefix('/').and_then(|q| q.strip_suffix('/')) {
            Some(re) => Regex::new(re).map(Matcher::Regex),
            None => Ok(Matcher::Contains(query.to_string())),
        }
    }

    fn matches(&self, value: Option<&str>) -> bool {
        let value = value.unwrap_or_default();
        match self {
            Matcher::Contains(query) => value.contains(query.as_str()),
            Matcher::Regex(re) => re.is_match(value),
        }
    }
}

/// Class name and title conditions; every configured condition must match.
#[derive(Debug, Clone, Default)]
pub struct WindowFilter {
    classname: Option<Matcher>,
    title: Option<Matcher>,
}

impl WindowFilter {
    pub fn from_config(filters: &Filters) -> Result<WindowFilter, regex::Error> {
        Ok(WindowFilter {
            classname: filters.classname.as_deref().map(Matcher::parse).transpose()?,
            title: filters.title.as_deref().map(Matcher::parse).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.classname.is_none() && self.title.is_none()
    }

    pub fn matches(&self, snapshot: &WindowSnapshot) -> bool {
        self.classname
            .as_ref()
            .is_none_or(|m| m.matches(snapshot.class_name.as_deref()))
            && self.title.as_ref().is_none_or(|m| m.matches(snapshot.title.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::WindowFilter;
    use crate::app::configs::Filters;
    use winhandle::win32::window::window_snapshot::WindowSnapshot;
    use winhandle::{ExtendedWindowStyles, WindowHandle, WindowStyles};

    fn snapshot(class_name: &str, title: Option<&str>) -> WindowSnapshot {
        WindowSnapshot {
            hwnd: WindowHandle(0x20000),
            title: title.map(str::to_string),
            class_name: Some(class_name.to_string()),
            style: WindowStyles::empty(),
            ex_style: ExtendedWindowStyles::empty(),
            rect: None,
            parent: WindowHandle::NULL,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = WindowFilter::from_config(&Filters::default()).unwrap();

        assert!(filter.is_empty());
        assert!(filter.matches(&snapshot("Edit", None)));
    }

    #[test]
    fn test_substring_and_regex() {
        let filter = WindowFilter::from_config(&Filters {
            classname: Some("/^Chrome_/".to_string()),
            title: Some("Inbox".to_string()),
        })
        .unwrap();

        assert!(filter.matches(&snapshot("Chrome_WidgetWin_1", Some("Inbox - Mail"))));
        assert!(!filter.matches(&snapshot("Chrome_WidgetWin_1", Some("News"))));
        assert!(!filter.matches(&snapshot("MozillaWindowClass", Some("Inbox"))));
        assert!(!filter.matches(&snapshot("Chrome_WidgetWin_1", None)));
    }
}
