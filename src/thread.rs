// SPDX-License-Identifier: MIT

//! A thread-local interface for the CTR_DRBG algorithm.
use crate::{
    cipher::CipherVariant,
    config::CtrConfig,
    ctr::{CtrBuilder, CtrDrbg},
    entropy::OsEntropy,
    error::Error,
};

use std::{
    cell::RefCell,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
    thread_local,
};

#[cfg(feature = "rand_core")]
use rand_core::{TryCryptoRng, TryRngCore};

/// A thread-local instance of CTR_DRBG.
///
/// [`LocalCtrDrbg::default()`] returns a handle to the calling
/// thread's instance, created on first use from [`LOCAL_CONFIG`]:
/// AES-256 with the derivation function at 256 bit strength, no
/// prediction resistance, and a reseed interval of 2^14. Once the
/// interval is exhausted the next generate reseeds from
/// [`OsEntropy`]. Each instance is personalized with a process-wide
/// counter so no two threads start from the same seed material.
///
/// Handles are neither `Send` nor `Sync`; every handle on a thread
/// drives the same generator.
///
/// # Example
///
/// ```
/// # use ctr_drbg::Error;
/// use ctr_drbg::thread::LocalCtrDrbg;
///
/// # fn main() -> Result<(),Error> {
/// let drbg = LocalCtrDrbg::default();
/// let mut random_data = [0u8; 32];
/// drbg.fill_bytes(&mut random_data, None)?;
/// # Ok(())
/// # }
/// ```
pub struct LocalCtrDrbg {
    rng: Rc<RefCell<CtrDrbg<OsEntropy>>>,
}

/// Configuration of every thread-local instance.
pub const LOCAL_CONFIG: CtrConfig = CtrConfig {
    cipher: CipherVariant::Aes256,
    derivation_function: true,
    prediction_resistance: false,
    reseed_interval: 1 << 14,
};

static NEXT_LOCAL_ID: AtomicU64 = AtomicU64::new(0);

thread_local!(
    static LOCAL_RNG: Rc<RefCell<CtrDrbg<OsEntropy>>> = {
        let id = NEXT_LOCAL_ID.fetch_add(1, Ordering::Relaxed);
        let drbg = CtrBuilder::new(OsEntropy::default())
            .config(LOCAL_CONFIG)
            .personal(&id.to_be_bytes())
            .build()
            .expect("thread-local CTR_DRBG instantiation failed");
        Rc::new(RefCell::new(drbg))
    }
);

impl Default for LocalCtrDrbg {
    fn default() -> Self {
        Self {
            rng: LOCAL_RNG.with(|v| v.clone()),
        }
    }
}

impl LocalCtrDrbg {
    /// See [`fill_bytes`](crate::ctr::CtrDrbg::fill_bytes) for details.
    pub fn fill_bytes(&self, bytes: &mut [u8], additional: Option<&[u8]>) -> Result<(), Error> {
        self.rng.borrow_mut().fill_bytes(bytes, additional)
    }

    /// See [`generate`](crate::ctr::CtrDrbg::generate) for details.
    pub fn generate(
        &self,
        bytes: &mut [u8],
        additional: Option<&[u8]>,
        prediction_resistance: bool,
    ) -> Result<(), Error> {
        self.rng
            .borrow_mut()
            .generate(bytes, additional, prediction_resistance)
    }

    /// See [`reseed`](crate::ctr::CtrDrbg::reseed) for details.
    pub fn reseed(&self, additional: Option<&[u8]>) -> Result<(), Error> {
        self.rng.borrow_mut().reseed(additional)
    }

    /// See [`reseed_counter`](crate::ctr::CtrDrbg::reseed_counter) for details.
    pub fn reseed_counter(&self) -> Option<u64> {
        self.rng.borrow().reseed_counter()
    }
}

#[cfg(feature = "rand_core")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl TryCryptoRng for LocalCtrDrbg where LocalCtrDrbg: TryRngCore {}

#[cfg(feature = "rand_core")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl TryRngCore for LocalCtrDrbg {
    type Error = Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        self.rng.borrow_mut().try_next_u32()
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        self.rng.borrow_mut().try_next_u64()
    }

    fn try_fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Self::Error> {
        self.rng.borrow_mut().try_fill_bytes(bytes)
    }
}
