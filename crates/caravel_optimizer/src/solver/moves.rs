//! Candidate-generating move operators over customer sequences.
//!
//! All four operators are pure: inputs are never mutated and every call
//! returns freshly allocated sequences. For in-range indices the combined
//! multiset of elements across the pair is conserved; out-of-range indices
//! are handled as documented no-ops or clamps, never as errors, because the
//! search loops generate split points speculatively.

/// **Intra-route 2-opt**
///
/// Reverses `route[i..=j]` inclusive, leaving the prefix and suffix
/// unchanged. With `i == 0` this reverses the prefix ending at `j`.
///
/// ```text
/// BEFORE:  a .. [i] -> ... -> [j] .. b
/// AFTER:   a .. [j] -> ... -> [i] .. b
/// ```
///
/// Precondition: `i <= j < route.len()`.
pub fn reverse_segment<T: Clone>(route: &[T], i: usize, j: usize) -> Vec<T> {
    debug_assert!(i <= j && j < route.len());

    let mut result = Vec::with_capacity(route.len());
    result.extend_from_slice(&route[..i]);
    result.extend(route[i..=j].iter().rev().cloned());
    result.extend_from_slice(&route[j + 1..]);
    result
}

/// **Tail exchange (segment cross)**
///
/// Splits both sequences and swaps their suffixes:
/// `(a[..i] ++ b[j..], b[..j] ++ a[i..])`. Split points beyond a sequence's
/// length are clamped to it, so a zero-length tail (and a zero-length
/// result) is legal.
pub fn exchange_tails<T: Clone>(a: &[T], b: &[T], i: usize, j: usize) -> (Vec<T>, Vec<T>) {
    let i = i.min(a.len());
    let j = j.min(b.len());

    let first = a[..i].iter().chain(b[j..].iter()).cloned().collect();
    let second = b[..j].iter().chain(a[i..].iter()).cloned().collect();
    (first, second)
}

/// **Single-customer relocation**
///
/// Removes the element at `i mod a.len()` from `a` and inserts it at
/// position `j` of `b` (clamped to appending). No-op when `a` is empty.
pub fn relocate_one<T: Clone>(a: &[T], b: &[T], i: usize, j: usize) -> (Vec<T>, Vec<T>) {
    if a.is_empty() {
        return (a.to_vec(), b.to_vec());
    }

    let i = i % a.len();
    let j = j.min(b.len());

    let mut first = Vec::with_capacity(a.len() - 1);
    first.extend_from_slice(&a[..i]);
    first.extend_from_slice(&a[i + 1..]);

    let mut second = Vec::with_capacity(b.len() + 1);
    second.extend_from_slice(&b[..j]);
    second.push(a[i].clone());
    second.extend_from_slice(&b[j..]);

    (first, second)
}

/// **Single-customer swap**
///
/// Exchanges `a[i]` and `b[j]`, leaving both lengths unchanged. No-op when
/// either index is out of bounds.
pub fn swap_one<T: Clone>(a: &[T], b: &[T], i: usize, j: usize) -> (Vec<T>, Vec<T>) {
    if i >= a.len() || j >= b.len() {
        return (a.to_vec(), b.to_vec());
    }

    let mut first = a.to_vec();
    let mut second = b.to_vec();
    std::mem::swap(&mut first[i], &mut second[j]);
    (first, second)
}
