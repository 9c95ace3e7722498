// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node tree data model.
//!
//! A *node* is one rectangle of a panel window: the panel itself, a taskbar,
//! a task button, a clock. Each node has:
//!
//! - An identity ([`NodeId`]), a generational handle that becomes stale when
//!   the node is destroyed.
//! - Topology: parent, first-child, and sibling links forming an ordered
//!   tree. Child order is both layout order along the primary axis and
//!   stacking order.
//! - **Inputs** set by the owner: the widget, its [`SizingMode`], a style
//!   handle, padding, and visibility.
//! - **Computed geometry** written by the passes: `size` and `position`,
//!   plus a cached pixel buffer regenerated only when the node is dirty.
//!
//! Nodes are stored in struct-of-arrays layout with index-based handles.
//!
//! # Passes
//!
//! [`NodeStore::absorb`] turns queued invalidations into per-node flags, then
//! three whole-tree passes bring geometry and pixels up to date:
//!
//! 1. [`measure`](NodeStore::measure): post-order content sizing of
//!    `ByContent` nodes; a changed size dirties the parent.
//! 2. [`arrange`](NodeStore::arrange): pre-order distribution of free space
//!    to `ByLayout` children and positioning of every visible child.
//! 3. [`redraw`](NodeStore::redraw): pre-order repaint of dirty nodes and
//!    compositing of every visible buffer onto the frame.
//!
//! [`SizingMode`]: crate::layout::SizingMode

mod hit;
mod id;
mod passes;
mod store;
mod traverse;

pub use id::{INVALID, NodeId};
pub use passes::FrameState;
pub use store::NodeStore;
pub use traverse::Children;
