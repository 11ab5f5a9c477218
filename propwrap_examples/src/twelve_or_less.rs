//! An example of a wrapped property that clamps every integer
//! assigned to it.
//!
//! Trying to store a number larger than twelve in a [`Rectangle`] side
//! actually stores twelve. The caller is not told about the substitution.

use propwrap::{properties, Transform};
use serde::{Deserialize, Serialize};

/// Keeps stored integers at or below twelve
#[derive(Debug)]
pub struct TwelveOrLess;

impl Transform for TwelveOrLess {
    type Value = i64;

    fn transform(value: i64) -> i64 {
        value.min(12)
    }
}

/// A rectangle whose sides never exceed twelve
///
/// A new rectangle has both sides set to zero.
#[properties]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    /// The height of the rectangle
    #[wrap(TwelveOrLess)]
    pub height: i64,
    /// The width of the rectangle
    #[wrap(TwelveOrLess)]
    pub width: i64,
}

impl Rectangle {
    /// The area covered by the rectangle
    ///
    /// Sides are only bounded from above, so the product of two very
    /// negative sides can overflow. Returns `None` in that case.
    pub fn area(&self) -> Option<i64> {
        self.height().checked_mul(*self.width())
    }
}
