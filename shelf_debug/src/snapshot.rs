// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON snapshot of a laid-out tree.
//!
//! [`snapshot`] captures the geometry and flags of every node under a root
//! as nested JSON objects. Comparing snapshots before and after a change is
//! a quick way to see which nodes moved.

use std::io::{self, Write};

use serde_json::{Value, json};

use shelf_core::node::{NodeId, NodeStore};

use crate::tree::{sizing_name, widget_kind};

/// Captures the subtree under `root` as JSON.
///
/// Each node becomes an object with `kind`, `index`, `generation`, `sizing`,
/// `visible`, `rect` (`[x, y, width, height]`), `dirty` and `children`.
#[must_use]
pub fn snapshot(store: &NodeStore, root: NodeId) -> Value {
    let r = store.rect(root);
    let children: Vec<Value> = store
        .children(root)
        .map(|child| snapshot(store, child))
        .collect();
    json!({
        "kind": widget_kind(store, root),
        "index": root.index(),
        "generation": root.generation(),
        "sizing": sizing_name(store.sizing_mode(root)),
        "visible": store.is_visible(root),
        "rect": [r.origin.x, r.origin.y, r.size.width, r.size.height],
        "dirty": {
            "size": store.is_dirty_size(root),
            "paint": store.is_dirty_paint(root),
        },
        "children": children,
    })
}

/// Writes a pretty-printed snapshot of the subtree under `root`.
pub fn write_snapshot(store: &NodeStore, root: NodeId, writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &snapshot(store, root))?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use shelf_core::backend::Frame;
    use shelf_core::output::OutputId;
    use shelf_render::IntSize;
    use shelf_widgets::{ChargeState, FixedAdvance, PanelBuilder};

    use super::*;

    #[test]
    fn snapshot_records_geometry() {
        let builder = PanelBuilder::new(Rc::new(FixedAdvance::default()));
        let (mut window, nodes) = builder.build(OutputId(0), IntSize::new(400, 24));
        nodes.set_battery(&mut window, 85, ChargeState::Charging);
        window.run_passes(&mut |_: &Frame<'_>| {});

        let snap = snapshot(window.store(), window.root());
        assert_eq!(snap["kind"], "Panel");
        assert_eq!(snap["rect"], json!([0, 0, 400, 24]));
        let children = snap["children"].as_array().unwrap();
        let battery = children
            .iter()
            .find(|c| c["kind"] == "Battery")
            .unwrap();
        // "85%+" is 4 glyphs of 7 px plus 4 px padding each side.
        assert_eq!(battery["rect"][2], 36);
        assert_eq!(battery["sizing"], "content");
        assert_eq!(battery["dirty"]["paint"], false);
    }

    #[test]
    fn written_snapshot_is_valid_json() {
        let builder = PanelBuilder::new(Rc::new(FixedAdvance::default()));
        let (mut window, _) = builder.build(OutputId(0), IntSize::new(100, 20));
        window.run_passes(&mut |_: &Frame<'_>| {});

        let mut out = Vec::new();
        write_snapshot(window.store(), window.root(), &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, snapshot(window.store(), window.root()));
    }
}
