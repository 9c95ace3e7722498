// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Invalidations coming from outside the engine (new battery reading, window
//! title change, pointer hover) are recorded per channel in an
//! [`understory_dirty`] tracker owned by the [`NodeStore`]. Nothing touches
//! node geometry at that point: the [`Scheduler`] drains every channel at the
//! start of the next frame and turns the drained keys into the per-node
//! `dirty_size` / `dirty_paint` flags the three passes read.
//!
//! # Propagation semantics
//!
//! All channels are local-only. Size invalidation does travel upward, but
//! only when a child's measured size actually changes, which the content
//! sizing pass decides; an eager dependency edge would over-invalidate.
//!
//! - [`SIZE`]: the node's content or layout inputs changed.
//! - [`PAINT`]: the node's appearance changed but its size did not.
//! - [`TOPOLOGY`]: children were added, removed, or reordered under the
//!   marked node.
//!
//! [`NodeStore`]: crate::node::NodeStore
//! [`Scheduler`]: crate::scheduler::Scheduler

use understory_dirty::Channel;

/// Content or layout inputs changed, requires a sizing pass.
pub const SIZE: Channel = Channel::new(0);

/// Appearance changed, requires the pixel buffer to be regenerated.
pub const PAINT: Channel = Channel::new(1);

/// Child list changed, requires re-layout and repaint of the marked parent.
pub const TOPOLOGY: Channel = Channel::new(2);
