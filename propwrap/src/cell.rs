use core::{cmp::Ordering, fmt, hash, marker::PhantomData, mem, ops};

use crate::Transform;

/// Storage for a single value that is normalized by `X` on every write
///
/// The stored value is always the output of [`Transform::transform`]. This holds
/// for the initial value given to [`new`][Self::new], for [`Default`], and for
/// every later [`write`][Self::write], [`replace`][Self::replace], or
/// [`update`][Self::update]. No other path reaches the stored value.
pub struct Cell<X: Transform> {
    value: X::Value,
    transform: PhantomData<fn() -> X>,
}

impl<X: Transform> Cell<X> {
    /// Constructs a new cell holding the transformed form of `initial`
    #[inline]
    pub fn new(initial: X::Value) -> Self {
        Self {
            value: X::transform(initial),
            transform: PhantomData,
        }
    }

    /// Provides access to the stored value
    #[inline]
    pub fn read(&self) -> &X::Value {
        &self.value
    }

    /// Stores the transformed form of `value`
    ///
    /// If `value` is out of range or not in canonical form, it is silently
    /// replaced by what the transform makes of it.
    #[inline]
    pub fn write(&mut self, value: X::Value) {
        self.value = X::transform(value);
    }

    /// Stores the transformed form of `value`, returning the previous value
    #[inline]
    pub fn replace(&mut self, value: X::Value) -> X::Value {
        mem::replace(&mut self.value, X::transform(value))
    }

    /// Computes a new value from the current one and writes it
    ///
    /// ```
    /// use propwrap::{transforms::AtMost, Cell};
    ///
    /// let mut height = Cell::<AtMost<12>>::new(10);
    /// height.update(|h| h + 5);
    /// assert_eq!(height.get(), 12);
    /// ```
    #[inline]
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&X::Value) -> X::Value,
    {
        let next = f(&self.value);
        self.write(next);
    }

    /// Unwraps the stored value
    #[inline]
    pub fn into_inner(self) -> X::Value {
        self.value
    }
}

impl<X> Cell<X>
where
    X: Transform,
    X::Value: Copy,
{
    /// Returns a copy of the stored value
    #[inline]
    pub fn get(&self) -> X::Value {
        self.value
    }
}

impl<X> Default for Cell<X>
where
    X: Transform,
    X::Value: Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(X::Value::default())
    }
}

impl<X> Clone for Cell<X>
where
    X: Transform,
    X::Value: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            transform: PhantomData,
        }
    }
}

impl<X> Copy for Cell<X>
where
    X: Transform,
    X::Value: Copy,
{
}

impl<X> fmt::Debug for Cell<X>
where
    X: Transform,
    X::Value: fmt::Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <X::Value as fmt::Debug>::fmt(&self.value, f)
    }
}

impl<X> fmt::Display for Cell<X>
where
    X: Transform,
    X::Value: fmt::Display,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <X::Value as fmt::Display>::fmt(&self.value, f)
    }
}

impl<X> PartialEq for Cell<X>
where
    X: Transform,
    X::Value: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<X> Eq for Cell<X>
where
    X: Transform,
    X::Value: Eq,
{
}

impl<X> PartialOrd for Cell<X>
where
    X: Transform,
    X::Value: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<X> Ord for Cell<X>
where
    X: Transform,
    X::Value: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<X> hash::Hash for Cell<X>
where
    X: Transform,
    X::Value: hash::Hash,
{
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.value, state)
    }
}

impl<X: Transform> ops::Deref for Cell<X> {
    type Target = X::Value;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<X: Transform> AsRef<X::Value> for Cell<X> {
    #[inline]
    fn as_ref(&self) -> &X::Value {
        &self.value
    }
}

#[cfg(feature = "serde")]
impl<X> serde::Serialize for Cell<X>
where
    X: Transform,
    X::Value: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        <X::Value as serde::Serialize>::serialize(&self.value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, X> serde::Deserialize<'de> for Cell<X>
where
    X: Transform,
    X::Value: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <X::Value as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
