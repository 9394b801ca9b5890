use std::collections::HashSet;
use std::hash::Hash;

/// Determines how many elements within the provided reference slice are unique by the given
/// property.
///
/// # Parameters
///
/// * `slice` A reference slice from which to derive values to count.
/// * `selector` A closure that defines the criteria used to determine when a value in the slice
/// should be added to the count.
///
/// # Examples
/// ```
/// use asset_trail_smart_contract::util::functions::distinct_count_by_property;
///
/// let values = vec!["a", "b", "c", "a"];
/// let distinct_count = distinct_count_by_property(&values, |s| s);
/// assert_eq!(3, distinct_count);
/// ```
pub fn distinct_count_by_property<F, T, U>(slice: &[T], selector: F) -> usize
where
    U: Sized + Eq + Hash,
    F: FnMut(&T) -> &U,
{
    slice.iter().map(selector).collect::<HashSet<_>>().len()
}

/// Determines if a string has no content once leading and trailing whitespace is removed.
///
/// # Examples
/// ```
/// use asset_trail_smart_contract::util::functions::is_blank;
///
/// assert!(is_blank("   "));
/// assert!(!is_blank(" value "));
/// ```
pub fn is_blank<S: AsRef<str>>(value: S) -> bool {
    value.as_ref().trim().is_empty()
}
