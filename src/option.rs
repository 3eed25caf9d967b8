use crate::{abort::system_abort, config::UNWRAP_NONE_MESSAGE};

/// A slot holding zero or one value.
///
/// Unlike `core::option::Option` every access to a possibly missing value is an explicit
/// choice between aborting ([`unwrap`](Self::unwrap), [`expect`](Self::expect)) and handling
/// the absence ([`try_unwrap`](Self::try_unwrap), [`unwrap_or`](Self::unwrap_or)).
///
/// Owned by a single user. Not meant to be shared between tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Optional<T> {
    val: Option<T>,
}

impl<T: Copy> Optional<T> {
    /// Wrap a plain value.
    ///
    /// Only offered for `Copy` types. Anything else has to be created empty and then
    /// [`insert`](Self::insert)ed.
    ///
    /// ```compile_fail
    /// use tftools::Optional;
    ///
    /// let name = Optional::new(String::from("deeper"));
    /// ```
    ///
    /// The same goes for wrapping an existing `Option`:
    ///
    /// ```compile_fail
    /// use tftools::Optional;
    ///
    /// let name: Optional<String> = Some(String::from("deeper")).into();
    /// ```
    pub const fn new(value: T) -> Self {
        Self { val: Some(value) }
    }
}

impl<T> Optional<T> {
    pub const fn none() -> Self {
        Self { val: None }
    }

    /// Access the value. Aborts if there is none
    #[track_caller]
    pub fn unwrap(&self) -> &T {
        self.expect(UNWRAP_NONE_MESSAGE)
    }

    #[track_caller]
    pub fn unwrap_mut(&mut self) -> &mut T {
        self.expect_mut(UNWRAP_NONE_MESSAGE)
    }

    /// Like [`unwrap`](Self::unwrap) but aborts with the given message
    #[track_caller]
    pub fn expect(&self, message: &str) -> &T {
        match &self.val {
            Some(val) => val,
            None => system_abort(message),
        }
    }

    #[track_caller]
    pub fn expect_mut(&mut self, message: &str) -> &mut T {
        match &mut self.val {
            Some(val) => val,
            None => system_abort(message),
        }
    }

    /// Copy the value into `target` and return true.
    /// Returns false and leaves `target` alone if there is no value
    pub fn try_unwrap(&self, target: &mut T) -> bool
    where
        T: Clone,
    {
        match &self.val {
            Some(val) => {
                target.clone_from(val);
                true
            }
            None => false,
        }
    }

    pub fn unwrap_or<'a>(&'a self, default_value: &'a T) -> &'a T {
        match &self.val {
            Some(val) => val,
            None => default_value,
        }
    }

    pub fn unwrap_or_mut<'a>(&'a mut self, default_value: &'a mut T) -> &'a mut T {
        match &mut self.val {
            Some(val) => val,
            None => default_value,
        }
    }

    /// Store a value, replacing the previous one if any
    pub fn insert(&mut self, value: T) -> &mut T {
        self.val.insert(value)
    }

    pub fn is_some(&self) -> bool {
        self.val.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.val.is_none()
    }

    /// Drop the value. Every access after this behaves as if there never was one
    pub fn clear(&mut self) {
        self.val = None;
    }

    /// Move the value out, leaving the slot empty
    pub fn take(&mut self) -> Option<T> {
        self.val.take()
    }

    pub fn as_option(&self) -> Option<&T> {
        self.val.as_ref()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

// Holds a value right away, so it is gated like new()
impl<T: Copy> From<Option<T>> for Optional<T> {
    fn from(val: Option<T>) -> Self {
        Self { val }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.val
    }
}
