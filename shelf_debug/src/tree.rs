// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indented listing of a node tree.

use core::fmt;

use shelf_core::layout::SizingMode;
use shelf_core::node::{NodeId, NodeStore};

/// Displays the subtree under `root`, one node per line.
///
/// Each line shows the widget kind, slot index, sizing mode, rectangle and
/// any pending flags:
///
/// ```text
/// Panel #0 layout 0,0 400x24
///   Launcher #1 content 2,2 42x20
///     LauncherIcon #2 content 2,2 20x20
///   Taskbar #4 layout 46,2 254x20 dirty=size
/// ```
#[derive(Clone, Copy)]
pub struct TreeDump<'a> {
    store: &'a NodeStore,
    root: NodeId,
}

impl fmt::Debug for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeDump")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl<'a> TreeDump<'a> {
    /// Creates a dump of the subtree under `root`.
    #[must_use]
    pub fn new(store: &'a NodeStore, root: NodeId) -> Self {
        Self { store, root }
    }

    fn node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let s = self.store;
        let r = s.rect(id);
        write!(
            f,
            "{:indent$}{} #{} {} {},{} {}x{}",
            "",
            widget_kind(s, id),
            id.index(),
            sizing_name(s.sizing_mode(id)),
            r.origin.x,
            r.origin.y,
            r.size.width,
            r.size.height,
            indent = depth * 2,
        )?;
        if !s.is_visible(id) {
            f.write_str(" hidden")?;
        }
        match (s.is_dirty_size(id), s.is_dirty_paint(id)) {
            (true, true) => f.write_str(" dirty=size,paint")?,
            (true, false) => f.write_str(" dirty=size")?,
            (false, true) => f.write_str(" dirty=paint")?,
            (false, false) => {}
        }
        writeln!(f)?;
        for child in s.children(id) {
            self.node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node(f, self.root, 0)
    }
}

pub(crate) fn sizing_name(mode: SizingMode) -> &'static str {
    match mode {
        SizingMode::ByContent => "content",
        SizingMode::ByLayout => "layout",
    }
}

/// Short name of the node's widget type, taken from its `Debug` output.
pub(crate) fn widget_kind(store: &NodeStore, id: NodeId) -> String {
    let Some(widget) = store.widget_dyn(id) else {
        return "?".to_owned();
    };
    let debug = format!("{widget:?}");
    debug
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .next()
        .unwrap_or_default()
        .to_owned()
}
