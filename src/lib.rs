//! SIMD N-way `lower_bound` search, and a cache-aware SIMD B-tree ordered set
//! built on top of it.
//!
//! Classical binary search narrows a sorted range with one scalar comparison
//! per step, branching two ways at each level of the (implicit) search tree.
//! Hardware SIMD gives cheap access to a second kind of branch: a single
//! vector comparison against `LANES` values at once, collapsed to a lane
//! index with one bitmask reduction. [`lower_bound`] uses that to branch
//! `LANES + 1` ways per step instead of two, trading probe count for fewer,
//! wider steps. [`BTreeSet`] is built the same way at the node level, so each
//! node visited during a descent is searched with one vector compare rather
//! than `log2(CAP)` scalar ones.
//!
//! # NaN ordering
//!
//! `f32`/`f64` have no total order (NaN is unordered with everything,
//! including itself). [`lower_bound`] on a NaN-free slice behaves as
//! documented; behavior on a slice containing a NaN is unspecified but safe.
//! [`BTreeSet`] sidesteps the issue entirely: [`BTreeSet::insert`] and
//! [`BTreeSet::erase`] silently reject NaN and infinite keys (the same value
//! used as the sentinel, see [`Key::MAX`]), so a `BTreeSet<f64>` only ever
//! holds finite keys and its total order is never in question.
//!
//! # Feature flags
//!
//! - `simd` — use the `std::simd` (portable-SIMD) vector backend instead of
//!   the scalar fallback. Requires nightly.
//! - `nightly` — enable advisory cache prefetching ahead of probe loads via
//!   `core::intrinsics::prefetch_read_data`. Requires nightly.
//!
//! Both backends implement the identical algorithm and agree on every
//! result; `simd` only changes how fast the comparison step runs.

#![no_std]
#![cfg_attr(feature = "simd", feature(portable_simd))]
#![cfg_attr(feature = "nightly", feature(core_intrinsics))]
#![cfg_attr(feature = "nightly", allow(internal_features))]
#![deny(missing_docs)]

extern crate alloc;

mod btree;
mod key;
mod lower_bound;
mod simd;

pub use btree::{BTreeSet, Iter};
pub use key::Key;
pub use lower_bound::{lower_bound, LowerBoundExt};
