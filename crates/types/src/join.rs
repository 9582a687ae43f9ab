//! Concatenation of fragments.

use crate::fragment::Fragment;
use itertools::Itertools;
use std::borrow::Borrow;

/// Concatenates `fragments` in order with `separator` between consecutive
/// elements. Zero fragments yield the empty fragment.
///
/// The separator is inserted verbatim: it is treated as markup, like the
/// fragments it joins.
pub fn join<I>(fragments: I, separator: &str) -> Fragment
where
    I: IntoIterator,
    I::Item: Borrow<Fragment>,
{
    let joined = fragments
        .into_iter()
        .map(|fragment| fragment.borrow().clone())
        .join(separator);
    Fragment::from_trusted(joined)
}

/// Concatenates `fragments` with no separator.
pub fn flatten<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Borrow<Fragment>,
{
    join(fragments, "")
}
