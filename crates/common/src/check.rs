//! Comparator building blocks.
//!
//! Each helper returns `Ok(())` on a match and a human-readable mismatch
//! description otherwise, which is the shape [`AssertPipe`](crate::AssertPipe)
//! comparators return.

use std::fmt::Debug;

/// `observed == expected`
pub fn equals<T>(expected: &T, observed: &T) -> Result<(), String>
where
    T: PartialEq + Debug + ?Sized,
{
    if expected == observed {
        Ok(())
    } else {
        Err(format!("expected {:?}, got {:?}", expected, observed))
    }
}

/// Every element of `expected` appears somewhere in `observed`.
///
/// Extra observed elements are allowed.
pub fn contains_all<T>(expected: &[T], observed: &[T]) -> Result<(), String>
where
    T: PartialEq + Debug,
{
    let missing: Vec<&T> = expected
        .iter()
        .filter(|item| !observed.contains(item))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("{:?} does not contain {:?}", observed, missing))
    }
}

/// `haystack` contains `needle` as a substring
pub fn contains_str(haystack: &str, needle: &str) -> Result<(), String> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(format!("{:?} does not contain {:?}", haystack, needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals() {
        assert!(equals(&1, &1).is_ok());
        assert_eq!(equals("a", "b").unwrap_err(), "expected \"a\", got \"b\"");
    }

    #[test]
    fn test_contains_all_allows_extras() {
        let expected = vec!["u1".to_string()];
        let observed = vec!["u0".to_string(), "u1".to_string(), "u2".to_string()];
        assert!(contains_all(&expected, &observed).is_ok());
    }

    #[test]
    fn test_contains_all_reports_missing() {
        let message = contains_all(&[1, 2, 3], &[1]).unwrap_err();
        assert!(message.contains("[2, 3]"), "{}", message);
    }

    #[test]
    fn test_contains_all_empty_expected() {
        assert!(contains_all::<i32>(&[], &[]).is_ok());
    }

    #[test]
    fn test_contains_str() {
        assert!(contains_str("For input string: \"12abc\"", "12abc").is_ok());
        assert!(contains_str("Pet not found", "12abc").is_err());
    }
}
