//! Examples showing the output of using [`propwrap`] to
//! attach storage behavior to struct fields.
//!
//! Two kinds of wrapped properties are demonstrated:
//! * [Capitalized][capitalized], normalizing strings on write
//! * [Twelve or less][twelve_or_less], clamping integers on write
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod capitalized;
pub mod twelve_or_less;
