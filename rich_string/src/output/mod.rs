// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical output of materialization.
//!
//! [`Content`] and [`Modifier`] are closed trees with structural equality. They are built once
//! by [`materialize`](crate::materialize) and consumed by
//! [`ModifierMap::reduce`](crate::ModifierMap::reduce).

mod content;
mod modifier;

pub use content::Content;
pub use modifier::Modifier;
