use crate::win32::api::error::WindowError;
use crate::win32::api::native::NativeApi;

use super::window_ref::WindowRef;
use super::window_snapshot::WindowSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry {
    pub depth: usize,
    pub snapshot: WindowSnapshot,
}

/// Depth-first listing of a window subtree, root first.
#[derive(Debug, Clone, Default)]
pub struct WindowTree {
    pub entries: Vec<TreeEntry>,
}

impl WindowTree {
    /// Walks direct children recursively down to `max_depth` (unbounded when `None`).
    ///
    /// Entries rejected by `filter` are left out but their subtrees are still visited. Windows that
    /// disappear during the walk are skipped.
    pub fn build<A, F>(root: WindowRef<'_, A>, max_depth: Option<usize>, filter: F) -> Result<WindowTree, WindowError>
    where
        A: NativeApi + ?Sized,
        F: Fn(&WindowSnapshot) -> bool,
    {
        let mut tree = WindowTree::default();
        tree.push(root.snapshot(), 0, &filter);
        tree.walk(root, 1, max_depth, &filter)?;
        Ok(tree)
    }

    /// Lists every descendant of `root` at depth 1, in native enumeration order.
    pub fn flat<A, F>(root: WindowRef<'_, A>, filter: F) -> Result<WindowTree, WindowError>
    where
        A: NativeApi + ?Sized,
        F: Fn(&WindowSnapshot) -> bool,
    {
        let mut tree = WindowTree::default();
        tree.push(root.snapshot(), 0, &filter);
        for hwnd in root.children(true)? {
            let child = root.at(hwnd);
            if child.exists() {
                tree.push(child.snapshot(), 1, &filter);
            }
        }
        Ok(tree)
    }

    fn push<F: Fn(&WindowSnapshot) -> bool>(&mut self, snapshot: WindowSnapshot, depth: usize, filter: &F) {
        if filter(&snapshot) {
            self.entries.push(TreeEntry { depth, snapshot });
        }
    }

    fn walk<A, F>(
        &mut self,
        window: WindowRef<'_, A>,
        depth: usize,
        max_depth: Option<usize>,
        filter: &F,
    ) -> Result<(), WindowError>
    where
        A: NativeApi + ?Sized,
        F: Fn(&WindowSnapshot) -> bool,
    {
        if max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        let children = match window.children(false) {
            Ok(children) => children,
            Err(e) if depth > 1 && !window.exists() => {
                log::debug!("Window {} vanished during the walk: {}", window.handle(), e);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        for hwnd in children {
            let child = window.at(hwnd);
            if !child.exists() {
                continue;
            }
            self.push(child.snapshot(), depth, filter);
            self.walk(child, depth + 1, max_depth, filter)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One line per entry, prefixed by `indent` repeated `depth` times.
    pub fn render<L: Fn(&WindowSnapshot) -> String>(&self, indent: &str, line: L) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}{}\n", indent.repeat(e.depth), line(&e.snapshot)))
            .collect()
    }
}
