//! Utility macros and functions for the HTTP crate.
//!
//! This module provides helper macros and byte helpers that are used internally
//! by the codec implementation.

/// A macro for early returns with an error if a condition is not met.
///
/// This is similar to the `assert!` macro, but returns an error instead of panicking.
/// It's useful for validation checks where you want to return early with an error
/// if some condition is not satisfied.
///
/// # Arguments
///
/// * `$predicate` - A boolean expression that should evaluate to true
/// * `$error` - The error value to return if the predicate is false
///
/// # Example
///
/// ```ignore
/// ensure!(path.len() < path_buf.len(), ParseError::path_too_long(path.len(), path_buf.len()));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;

/// Tests whether the first `count` bytes of `a` and `b` are equal, ignoring ASCII case.
///
/// The end of a slice acts as a terminator: if both slices end before `count` bytes
/// have been compared they are equal, if only one of them ends they differ. Once
/// `count` bytes compared equal the result is `true` regardless of what follows,
/// so this is a bounded prefix test rather than full equality.
///
/// Passing `expected.len() + 1` as `count` turns it into full equality, because the
/// ends of both slices then have to line up.
pub(crate) fn bounded_eq_ignore_ascii_case(a: &[u8], b: &[u8], count: usize) -> bool {
    for i in 0..count {
        match (a.get(i), b.get(i)) {
            (None, None) => return true,
            (Some(x), Some(y)) if x.eq_ignore_ascii_case(y) => {}
            _ => return false,
        }
    }
    true
}

/// Case-insensitive full equality of `value` against a known token.
#[inline]
pub(crate) fn token_eq_ignore_ascii_case(value: &[u8], token: &[u8]) -> bool {
    bounded_eq_ignore_ascii_case(value, token, token.len() + 1)
}

/// Strips optional whitespace (SP and HTAB) from both ends of `bytes`.
pub(crate) fn trim_ows(bytes: &[u8]) -> &[u8] {
    let is_ows = |b: &u8| *b == b' ' || *b == b'\t';
    let start = bytes.iter().position(|b| !is_ows(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !is_ows(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}
