// Copyright 2026 the Shelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for shelf panels.
//!
//! - [`pretty::PrettyPrintSink`]: a [`TraceSink`](shelf_core::trace::TraceSink)
//!   writing one human-readable line per event.
//! - [`tree::TreeDump`]: an indented listing of a node tree with geometry
//!   and flags.
//! - [`snapshot::snapshot`]: the same tree as JSON, for golden files and bug
//!   reports.

pub mod pretty;
pub mod snapshot;
pub mod tree;
