//! Component B: the N-way `lower_bound` search primitive.
//!
//! Classical binary search narrows a range with one comparison per step,
//! branching two ways. Here we narrow it with one SIMD comparison per step,
//! branching `Key::LANES + 1` ways: probe `LANES` equally-spaced positions at
//! once, and find the cut lane with a single vector compare instead of
//! `log2(LANES)` scalar ones.
//!
//! Two cuts are needed and both are exposed: [`lower_bound`] (first element
//! `>= key`, the public, std-flavored one) and [`upper_bound`] (first element
//! `> key`, used internally by node descent to locate a child/insertion
//! position). They share the same probing loop and differ only in which
//! lane-comparison the key trait runs.

use crate::key::{Key, MAX_LANES};

/// Returns the index of the first element in `slice` that is not less than
/// `key`, equivalent to the classical `lower_bound` /
/// [`<[T]>::partition_point`] with predicate `|v| v < key`.
///
/// `slice` must be sorted in ascending order by `K`'s natural order. Behavior
/// is unspecified (but safe) if it is not, or if it contains a NaN.
pub fn lower_bound<K: Key>(slice: &[K], key: K) -> usize {
    nway_search(slice, key, K::not_less_first_index, |s, k| {
        s.partition_point(|v| *v < k)
    })
}

/// Returns the index of the first element in `slice` that is strictly greater
/// than `key`. Used by [`super::btree::node::BtreeNode`] to find a child
/// position for descent/insertion without first checking for an exact match.
pub(crate) fn upper_bound<K: Key>(slice: &[K], key: K) -> usize {
    nway_search(slice, key, K::greater_first_index, |s, k| {
        s.partition_point(|v| *v <= k)
    })
}

#[inline]
fn nway_search<K: Key>(
    slice: &[K],
    key: K,
    probe_cut: fn(&[K], K) -> usize,
    small_cut: fn(&[K], K) -> usize,
) -> usize {
    let w = K::LANES;
    let mut beg = 0usize;
    let mut end = slice.len();

    loop {
        let n = end - beg;
        if n < w + 1 {
            return beg + small_cut(&slice[beg..end], key);
        }

        let step = n / (w + 1);
        let mut probes = [K::MAX; MAX_LANES];
        for (i, probe) in probes.iter_mut().enumerate().take(w) {
            let p = beg + (i + 1) * step;
            *probe = slice[p];
            crate::simd::prefetch(&slice[p]);
        }

        let i = probe_cut(&probes[..w], key);
        log::trace!("nway_search: n={n} step={step} lane={i}");

        if i < w {
            end = beg + (i + 1) * step;
            beg += i * step;
        } else {
            beg += w * step;
        }
    }
}

/// Extension trait putting [`lower_bound`] on slices directly, mirroring
/// [`<[T]>::binary_search`]'s ergonomics.
pub trait LowerBoundExt<K: Key> {
    /// See [`lower_bound`].
    fn lower_bound(&self, key: K) -> usize;
}

impl<K: Key> LowerBoundExt<K> for [K] {
    fn lower_bound(&self, key: K) -> usize {
        lower_bound(self, key)
    }
}
