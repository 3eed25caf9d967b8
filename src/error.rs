use core::fmt;

/// Errors of the fallible conversions into other time libraries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The target type can not represent negative durations
    Negative,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Negative => write!(f, "negative duration can not be converted to an unsigned one"),
        }
    }
}

impl core::error::Error for Error {}
