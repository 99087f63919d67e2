// SPDX-License-Identifier: MIT

//! An implementation of the crypographic random number generator
//! CTR_DRBG as defined by NIST [SP 800-90A
//! Rev. 1](https://csrc.nist.gov/publications/detail/sp/800-90a/rev-1/final).
//!
//! CTR_DRBG is a Cryptographically Secure Pseudorandom Number
//! Generator (CSPRNG) that may be used for generating sensitive data
//! such as encryption keys. The implementation uses an AES block
//! cipher (128, 192 or 256 bit keys) with or without the derivation
//! function to generate random bytes.
//!
//! # Quick Example
//!
//! A simple way to obtain crypographic random random data is to use
//! the
//! [`LocalCtrDrbg::default()`](crate::thread::LocalCtrDrbg::default())
//! function. This returns a handle to a thread-local instance of
//! [`CtrDrbg`](ctr::CtrDrbg) pre-allocated to use entropy supplied by
//! the OS. The `std` feature is required for this approach.
//!
//! ```
//! # #[cfg(feature = "std")]
//! use ctr_drbg::thread::LocalCtrDrbg;
//!
//! # use ctr_drbg::Error;
//! #
//! # fn main() -> Result<(),Error> {
//! #
//! # #[cfg(feature = "std")]
//! let drbg = LocalCtrDrbg::default();
//! let mut random_data = [0u8; 32];
//! # #[cfg(feature = "std")]
//! drbg.fill_bytes(&mut random_data, None)?;
//! #
//! # Ok(())
//! # }
//! ```
//!
//! Otherwise an instance may be constructed by hand using the
//! [`CtrBuilder`](ctr::CtrBuilder) class. This approach doesn't
//! require the `std` feature. It also allows the caller to configure
//! the instance with different input parameters, or to supply the
//! entropy input and nonce directly.
//!
//! # Features
//!
//! - `std` (default): the thread-local [`LocalCtrDrbg`](crate::thread::LocalCtrDrbg).
//! - `rand_core`: `TryRngCore` and `TryCryptoRng` implementations.
//!
//! Lifecycle events are reported through the [`log`] facade. Secret
//! state is never logged.
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod cipher;
pub mod config;
pub mod ctr;
mod df;
pub mod entropy;
pub mod error;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod thread;

pub use error::{Error, Input};
