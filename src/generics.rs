// 🧩 Generic helpers - trait bounds and lifetimes on small slice/str utilities

/// Largest element of a list; the first one wins on ties.
///
/// Returns `None` for an empty list.
pub fn largest<T: PartialOrd>(list: &[T]) -> Option<&T> {
    let mut iter = list.iter();
    let mut largest = iter.next()?;

    for item in iter {
        if item > largest {
            largest = item;
        }
    }

    Some(largest)
}

/// The longer of two string slices (`y` when both have the same length)
pub fn longest<'a>(x: &'a str, y: &'a str) -> &'a str {
    if x.len() > y.len() {
        x
    } else {
        y
    }
}

/// Everything before the first space, or the whole string
pub fn first_word(s: &str) -> &str {
    match s.find(' ') {
        Some(end) => &s[..end],
        None => s,
    }
}

// ============================================================================
// TESTS
// ============================================================================
