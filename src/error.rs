// SPDX-License-Identifier: MIT

//! Error type shared by every CTR_DRBG operation.
use crate::entropy;

use core::{
    fmt,
    fmt::{Display, Formatter},
};

/// Identifies which caller input violated its configured bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    EntropyInput,
    Nonce,
    Personalization,
    AdditionalInput,
    /// The number of bytes requested from a single generate call.
    Request,
}

/// Error returned by the CTR_DRBG operations.
///
/// Each lifecycle failure has its own variant so that a generator
/// that merely needs fresh entropy ([`Error::ReseedRequired`]) can be
/// told apart from a malformed request ([`Error::InvalidLength`]).
#[derive(Debug)]
pub enum Error {
    /// An input is outside the bounds fixed at instantiation.
    InvalidLength(Input),
    /// The operation requires an instantiated generator.
    NotInstantiated,
    /// Instantiate was called on a live generator.
    AlreadyInstantiated,
    /// The reseed interval is exhausted, or prediction resistance was
    /// requested, and no fresh entropy could be obtained.
    ReseedRequired,
    /// The requested security strength exceeds what the configured
    /// block cipher can deliver.
    UnsupportedStrength,
    /// The configuration is outside what SP 800-90A permits.
    InvalidConfig,
    /// The entropy source failed.
    Entropy(entropy::Error),
    /// Internal length contract violated. Unreachable with correct
    /// callers.
    Internal,
}

impl From<entropy::Error> for Error {
    fn from(error: entropy::Error) -> Self {
        Error::Entropy(error)
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Input::EntropyInput => "entropy input",
            Input::Nonce => "nonce",
            Input::Personalization => "personalization string",
            Input::AdditionalInput => "additional input",
            Input::Request => "requested length",
        };
        f.write_str(name)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::InvalidLength(input) => write!(f, "invalid length: {}", input),
            Error::NotInstantiated => f.write_str("drbg is not instantiated"),
            Error::AlreadyInstantiated => f.write_str("drbg is already instantiated"),
            Error::ReseedRequired => f.write_str("drbg must be reseeded"),
            Error::UnsupportedStrength => f.write_str("unsupported security strength"),
            Error::InvalidConfig => f.write_str("invalid drbg configuration"),
            Error::Entropy(e) => write!(f, "{}", e),
            Error::Internal => f.write_str("internal drbg error"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        entropy,
        error::{Error, Input},
    };
    use alloc::string::ToString;
    use core::error::Error as _;

    #[test]
    fn display_names_the_input() {
        let e = Error::InvalidLength(Input::Request);
        assert_eq!(e.to_string(), "invalid length: requested length");
    }

    #[test]
    fn entropy_error_is_source() {
        let e: Error = entropy::Error::new("depleted").into();
        assert_eq!(e.to_string(), "entropy error: depleted");
        assert!(e.source().is_some());
        assert!(Error::ReseedRequired.source().is_none());
    }
}
