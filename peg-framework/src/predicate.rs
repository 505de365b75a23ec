//! Element predicates for [`pred`](crate::pred) and the predicate-run rules.

use cursor_framework::Classify;

pub fn is_alpha<T: Classify>(item: &T) -> bool {
    item.is_alphabetic()
}

pub fn is_alnum<T: Classify>(item: &T) -> bool {
    item.is_alphanumeric()
}

pub fn is_digit<T: Classify>(item: &T) -> bool {
    item.is_digit()
}

pub fn is_space<T: Classify>(item: &T) -> bool {
    item.is_whitespace()
}

/// Matches any character contained in `set`.
pub fn one_of(set: &str) -> impl Fn(&char) -> bool + '_ {
    move |c: &char| set.contains(*c)
}

/// Matches elements in the inclusive range `[low, high]`.
pub fn in_range<T: PartialOrd>(low: T, high: T) -> impl Fn(&T) -> bool {
    move |item: &T| low <= *item && *item <= high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert!(is_alpha(&'q'));
        assert!(is_alnum(&b'9'));
        assert!(!is_digit(&'x'));
        assert!(is_space(&' '));
    }

    #[test]
    fn test_one_of() {
        let sign = one_of("+-");
        assert!(sign(&'-'));
        assert!(!sign(&'*'));
    }

    #[test]
    fn test_in_range() {
        let hex = in_range('a', 'f');
        assert!(hex(&'c'));
        assert!(!hex(&'g'));
    }
}
