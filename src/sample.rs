//! Random sampling of the changed-file set.
//!
//! Bounds the number of per-file history queries by drawing a uniform,
//! duplicate-free subset when the change set exceeds the cap. The RNG is
//! injected so tests can seed it.

use std::collections::HashSet;

use rand::Rng;

/// Draw at most `max_size` elements from `files` without replacement.
///
/// When `files` already fits within `max_size` it is returned unchanged,
/// in the same order. Otherwise exactly `max_size` elements are drawn by
/// uniform index selection; already-taken indices are retried, so the
/// output order is the draw order, not the input order.
pub fn sample<R: Rng>(files: &[String], max_size: usize, rng: &mut R) -> Vec<String> {
    if files.len() <= max_size {
        return files.to_vec();
    }

    let mut sampled = Vec::with_capacity(max_size);
    let mut taken = HashSet::with_capacity(max_size);

    while sampled.len() < max_size {
        let index = rng.gen_range(0..files.len());
        if !taken.insert(index) {
            continue;
        }
        sampled.push(files[index].clone());
    }

    sampled
}
