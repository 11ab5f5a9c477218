//! Attach storage behavior to your properties
//!
//! It is very common for a field to carry a rule that must hold every time it is
//! modified: a name that should always be upper-case, a dimension that should never
//! exceed some bound. Scattering that rule across every setter and every call site
//! is how it gets forgotten. Propwrap moves the rule into the storage itself.
//!
//! A [`Transform`] names a value type and a pure, total function over it. A
//! [`Cell`] holds one value and routes every write through the transform, so the
//! stored value is always the transform's output.
//!
//! Examples of the documentation and implementations generated for wrapped properties
//! are available in the [`propwrap_examples`] crate documentation.
//!
//! [`propwrap_examples`]: https://docs.rs/propwrap_examples/
//!
//! # Usage
//!
//! A transform is a marker type implementing [`Transform`].
//!
//! ```
//! use propwrap::{Cell, Transform};
//!
//! pub struct TwelveOrLess;
//!
//! impl Transform for TwelveOrLess {
//!     type Value = i64;
//!
//!     fn transform(value: i64) -> i64 {
//!         value.min(12)
//!     }
//! }
//!
//! let mut height = Cell::<TwelveOrLess>::default();
//! assert_eq!(height.get(), 0);
//!
//! height.write(10);
//! assert_eq!(height.get(), 10);
//!
//! height.write(24);
//! assert_eq!(height.get(), 12);
//! ```
//!
//! Out-of-range and non-canonical values are not errors. They are silently replaced
//! by their transformed form, and callers cannot tell "accepted as-is" apart from
//! "coerced".
//!
//! The initial value goes through the same transform as every later write.
//!
//! ```
//! use propwrap::{transforms::Uppercase, Cell};
//!
//! let mut name = Cell::<Uppercase>::new("hi".to_owned());
//! assert_eq!(name.read(), "HI");
//!
//! name.write("there".to_owned());
//! assert_eq!(name.read(), "THERE");
//! ```
//!
//! # Wrapped properties
//!
//! Declaring cells directly works, but every aggregate then has to forward reads and
//! writes by hand. Attaching `#[properties]` to a struct and marking fields with
//! `#[wrap(Transform)]` does that forwarding for you. Each wrapped field is rewritten
//! into a private [`Cell`], and a getter and a `set_` setter with the field's original
//! visibility are generated.
//!
//! ```
//! use propwrap::{properties, transforms::AtMost};
//!
//! #[properties]
//! #[derive(Debug, Default)]
//! pub struct Rectangle {
//!     /// The height of the rectangle
//!     #[wrap(AtMost<12>)]
//!     pub height: i64,
//!     #[wrap(AtMost<12>)]
//!     pub width: i64,
//! }
//!
//! let mut rectangle = Rectangle::default();
//! assert_eq!(*rectangle.height(), 0);
//!
//! rectangle.set_height(10);
//! assert_eq!(*rectangle.height(), 10);
//!
//! rectangle.set_height(24);
//! assert_eq!(*rectangle.height(), 12);
//! assert_eq!(*rectangle.width(), 0);
//! ```
//!
//! The declared field type must be the transform's [`Value`][Transform::Value]. If it
//! is not, the generated getter will fail to compile.
//!
//! Attach `#[properties]` before any `#[derive]` attributes so that the derives see the
//! rewritten fields.
//!
//! ## Accessor names
//!
//! The generated accessors can be renamed with `get` and `set`.
//!
//! ```
//! use propwrap::{properties, transforms::AtLeast};
//!
//! #[properties]
//! #[derive(Default)]
//! pub struct Account {
//!     #[wrap(AtLeast<0>, get = "balance_cents", set = "adjust_balance")]
//!     pub balance: i64,
//! }
//!
//! let mut account = Account::default();
//! account.adjust_balance(-500);
//! assert_eq!(*account.balance_cents(), 0);
//! ```
//!
//! ## Constructors
//!
//! Because wrapped fields become private, struct literal syntax is no longer available
//! outside of the defining module. Passing `constructor` generates a memberwise
//! constructor named `new`, and `constructor = "name"` picks a different name. Every
//! wrapped argument is passed through its transform.
//!
//! ```
//! use propwrap::{properties, transforms::Uppercase};
//!
//! #[properties(constructor)]
//! pub struct User {
//!     #[wrap(Uppercase)]
//!     pub first_name: String,
//!     #[wrap(Uppercase)]
//!     pub last_name: String,
//!     pub age: u8,
//! }
//!
//! let user = User::new("ada".to_owned(), "lovelace".to_owned(), 36);
//! assert_eq!(user.first_name(), "ADA");
//! assert_eq!(user.last_name(), "LOVELACE");
//! assert_eq!(user.age, 36);
//! ```
//!
//! # Provided implementations
//!
//! A [`Cell`] implements each of the following whenever the stored value does:
//!
//! * [`Clone`] and [`Copy`]
//! * [`Debug`] and [`Display`], delegating to the stored value
//! * [`PartialEq`], [`Eq`], [`PartialOrd`], [`Ord`], and [`Hash`]
//! * [`Default`], passing the default value through the transform
//!
//! Every cell also implements [`Deref`] and [`AsRef`] to its stored value. There is no
//! [`DerefMut`], because a mutable reference would let a caller bypass the transform.
//!
//! [`Debug`]: core::fmt::Debug
//! [`Display`]: core::fmt::Display
//! [`Hash`]: core::hash::Hash
//! [`Deref`]: core::ops::Deref
//! [`DerefMut`]: core::ops::DerefMut
//!
//! # Serde
//!
//! With the `serde` feature enabled, a cell serializes as its stored value. On
//! deserialization, the decoded value is passed through the transform, so values read
//! from the outside world uphold the same invariant as values written in code.
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # {
//! use propwrap::{transforms::AtMost, Cell};
//!
//! let cell: Cell<AtMost<12>> = serde_json::from_str("24").unwrap();
//! assert_eq!(cell.get(), 12);
//! # }
//! ```
//!
//! # `no_std` support
//!
//! Propwrap is `no_std`. The string transforms need an allocator and are gated behind
//! the default `alloc` feature. Specify `default-features = false` to remove it.

#![warn(
    missing_docs,
    unused_import_braces,
    unused_imports,
    unused_qualifications
)]
#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_must_use
)]
#![forbid(unsafe_code)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod cell;
pub mod transforms;

pub use cell::Cell;

/// A pure, total normalization applied to every value stored in a [`Cell`]
///
/// Implementations should be idempotent: transforming an already transformed
/// value must return it unchanged. A cell relies on this to guarantee that
/// what it hands out is always a fixed point of the transform.
pub trait Transform {
    /// The type of value being stored
    type Value;

    /// Maps any input to the value that will actually be stored
    fn transform(value: Self::Value) -> Self::Value;
}

pub use propwrap_impl::properties;
