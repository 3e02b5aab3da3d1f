// glplatform/src/error.rs
//
//! Various errors that methods can produce.

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

/// Various errors that methods can produce.
///
/// Detection itself never fails; these only arise when reading back the stable text forms of
/// versions, drivers and chip classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The text is not of the form `major.minor[.patch]`, or a component is out of range.
    MalformedVersion,
    /// No driver has this display name.
    UnknownDriver,
    /// No chip class has this display name.
    UnknownChipClass,
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            Error::MalformedVersion => formatter.write_str("malformed version number"),
            Error::UnknownDriver => formatter.write_str("unknown driver name"),
            Error::UnknownChipClass => formatter.write_str("unknown chip class name"),
        }
    }
}

impl StdError for Error {}
