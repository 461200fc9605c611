// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Attribute values that can be layered on top of each other.
///
/// Resolution starts from [`Default::default`] and merges every span covering a segment in
/// application order. Implementations must let `other` overwrite `self` on every key `other`
/// defines, and must leave keys `other` does not define untouched.
pub trait Merge: Clone + Default {
    /// Overlays `other` onto `self`.
    fn merge(&mut self, other: &Self);
}
