// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text stores a UTF-8 string together with attribute spans applied to byte ranges.
//!
//! Spans are kept in the order they were applied. When spans overlap, resolution walks them in
//! that order and lets later spans overwrite earlier ones through the [`Merge`] trait, so the
//! most recently applied attribute wins for any key both spans define.
//!
//! ## Example
//!
//! ```
//! use attributed_text::{AttributedText, Merge};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Bold(Option<bool>);
//!
//! impl Merge for Bold {
//!     fn merge(&mut self, other: &Self) {
//!         if other.0.is_some() {
//!             self.0 = other.0;
//!         }
//!     }
//! }
//!
//! let mut text = AttributedText::new("Hello!");
//! text.apply_span(text.range(0..5).unwrap(), Bold(Some(true)));
//! text.apply_span(text.range(2..5).unwrap(), Bold(Some(false)));
//!
//! let runs: Vec<_> = text.resolved_runs().collect();
//! assert_eq!(runs.len(), 3);
//! assert_eq!(runs[1].range, 2..5);
//! assert_eq!(runs[1].attributes, Bold(Some(false)));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod attributed_text;
mod error;
mod merge;
mod runs;
mod text_range;

pub use crate::attributed_text::AttributedText;
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::merge::Merge;
pub use crate::runs::{AttributeRun, CoalescedRuns, ResolvedRuns};
pub use crate::text_range::TextRange;
