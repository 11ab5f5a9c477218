//! Stock transforms for common normalizations
//!
//! The string transforms require the `alloc` feature.

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::Transform;

/// Folds a string to upper case
///
/// Strings that are already upper case are stored as given, without
/// reallocating.
#[cfg(feature = "alloc")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Uppercase;

#[cfg(feature = "alloc")]
impl Transform for Uppercase {
    type Value = String;

    fn transform(value: String) -> String {
        if value.chars().all(|c| maps_to_itself(c, c.to_uppercase())) {
            value
        } else {
            value.to_uppercase()
        }
    }
}

/// Folds a string to lower case
///
/// Strings that are already lower case are stored as given, without
/// reallocating.
#[cfg(feature = "alloc")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Lowercase;

#[cfg(feature = "alloc")]
impl Transform for Lowercase {
    type Value = String;

    fn transform(value: String) -> String {
        if value.chars().all(|c| maps_to_itself(c, c.to_lowercase())) {
            value
        } else {
            value.to_lowercase()
        }
    }
}

#[cfg(feature = "alloc")]
fn maps_to_itself(c: char, mut mapped: impl Iterator<Item = char>) -> bool {
    mapped.next() == Some(c) && mapped.next().is_none()
}

/// Clamps an integer so that it never exceeds `MAX`
///
/// Values above the bound are stored as `MAX`. Values at or below it are
/// stored unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct AtMost<const MAX: i64>;

impl<const MAX: i64> Transform for AtMost<MAX> {
    type Value = i64;

    #[inline]
    fn transform(value: i64) -> i64 {
        value.min(MAX)
    }
}

/// Clamps an integer so that it never falls below `MIN`
///
/// Values below the bound are stored as `MIN`. Values at or above it are
/// stored unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct AtLeast<const MIN: i64>;

impl<const MIN: i64> Transform for AtLeast<MIN> {
    type Value = i64;

    #[inline]
    fn transform(value: i64) -> i64 {
        value.max(MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_keeps_bound_itself() {
        assert_eq!(AtMost::<12>::transform(12), 12);
        assert_eq!(AtMost::<12>::transform(13), 12);
        assert_eq!(AtMost::<12>::transform(i64::MIN), i64::MIN);
    }

    #[test]
    fn at_least_keeps_bound_itself() {
        assert_eq!(AtLeast::<0>::transform(0), 0);
        assert_eq!(AtLeast::<0>::transform(-1), 0);
        assert_eq!(AtLeast::<0>::transform(i64::MAX), i64::MAX);
    }

    #[cfg(feature = "alloc")]
    mod strings {
        use super::*;
        use alloc::borrow::ToOwned;

        #[test]
        fn uppercase_folds() {
            assert_eq!(Uppercase::transform("hi".to_owned()), "HI");
            assert_eq!(Uppercase::transform("Straße".to_owned()), "STRASSE");
        }

        #[test]
        fn uppercase_keeps_allocation_when_already_upper() {
            let value = "ALREADY LOUD 123".to_owned();
            let ptr = value.as_ptr();
            let stored = Uppercase::transform(value);
            assert_eq!(stored.as_ptr(), ptr);
        }

        #[test]
        fn uppercase_folds_titlecase_letters() {
            // U+01C5 is neither upper nor lower case, but does have an upper-case mapping
            assert_eq!(Uppercase::transform("\u{01C5}".to_owned()), "\u{01C4}");
        }

        #[test]
        fn lowercase_folds() {
            assert_eq!(Lowercase::transform("TestIng".to_owned()), "testing");
            assert_eq!(Lowercase::transform("ÀÉÎ".to_owned()), "àéî");
        }

        #[test]
        fn lowercase_keeps_allocation_when_already_lower() {
            let value = "quiet".to_owned();
            let ptr = value.as_ptr();
            let stored = Lowercase::transform(value);
            assert_eq!(stored.as_ptr(), ptr);
        }
    }
}
