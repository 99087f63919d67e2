// SPDX-License-Identifier: MIT

//! Instance configuration and the per-instance bounds derived from it.
//!
//! A [`CtrConfig`] is fixed when a [`CtrDrbg`](crate::ctr::CtrDrbg)
//! handle is constructed. The [`Limits`] are derived from it and the
//! requested security strength at instantiation and stay fixed until
//! the instance is uninstantiated.
use crate::{
    cipher::CipherVariant,
    error::{Error, Input},
};

/// Largest number of bytes a single generate call may return.
pub const MAX_BYTE_REQUEST: usize = 1 << 16;
/// Largest reseed interval permitted for CTR_DRBG.
pub const MAX_RESEED_INTERVAL: u64 = 1 << 48;

const MAX_INPUT_LEN: u64 = 1 << 32;
const STRENGTHS: [u32; 3] = [128, 192, 256];

/// The recognized configuration options of a CTR_DRBG instance.
///
/// ```
/// use ctr_drbg::{cipher::CipherVariant, config::CtrConfig};
///
/// let config = CtrConfig {
///     cipher: CipherVariant::Aes128,
///     reseed_interval: 1 << 20,
///     ..CtrConfig::default()
/// };
/// assert!(config.derivation_function);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CtrConfig {
    pub cipher: CipherVariant,
    /// Condition seed material through `Block_Cipher_df`. Without it
    /// entropy input must be full entropy of exactly the seed length.
    pub derivation_function: bool,
    /// Reseed before every generate call.
    pub prediction_resistance: bool,
    /// Number of generate calls allowed between reseeds, `1..=2^48`.
    pub reseed_interval: u64,
}

impl Default for CtrConfig {
    fn default() -> Self {
        Self {
            cipher: CipherVariant::Aes256,
            derivation_function: true,
            prediction_resistance: false,
            reseed_interval: MAX_RESEED_INTERVAL,
        }
    }
}

impl CtrConfig {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.reseed_interval == 0 || self.reseed_interval > MAX_RESEED_INTERVAL {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}

/// Input bounds of an instantiated generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    security_strength: u32,
    seed_len: usize,
    derivation_function: bool,
    min_entropy_input_len: u64,
    max_entropy_input_len: u64,
    min_nonce_len: u64,
    max_personalization_len: u64,
    max_additional_input_len: u64,
    max_request_len: usize,
}

fn within(len: usize, min: u64, max: u64, input: Input) -> Result<(), Error> {
    let len = len as u64;
    if len < min || len > max {
        return Err(Error::InvalidLength(input));
    }
    Ok(())
}

impl Limits {
    /// Derive the bounds for `config` at `requested_strength` bits.
    pub(crate) fn new(config: &CtrConfig, requested_strength: u32) -> Result<Self, Error> {
        let security_strength = STRENGTHS
            .into_iter()
            .find(|s| *s >= requested_strength)
            .ok_or(Error::UnsupportedStrength)?;
        if security_strength > config.cipher.max_strength() {
            return Err(Error::UnsupportedStrength);
        }

        let seed_len = config.cipher.seed_len();
        let min_entropy_input_len = u64::from(security_strength / 8);
        let limits = if config.derivation_function {
            Self {
                security_strength,
                seed_len,
                derivation_function: true,
                min_entropy_input_len,
                max_entropy_input_len: MAX_INPUT_LEN,
                min_nonce_len: u64::from(security_strength / 16),
                max_personalization_len: MAX_INPUT_LEN,
                max_additional_input_len: MAX_INPUT_LEN,
                max_request_len: MAX_BYTE_REQUEST,
            }
        } else {
            Self {
                security_strength,
                seed_len,
                derivation_function: false,
                min_entropy_input_len,
                max_entropy_input_len: seed_len as u64,
                min_nonce_len: 0,
                max_personalization_len: seed_len as u64,
                max_additional_input_len: seed_len as u64,
                max_request_len: MAX_BYTE_REQUEST,
            }
        };
        Ok(limits)
    }

    /// Instantiated security strength in bits.
    pub fn security_strength(&self) -> u32 {
        self.security_strength
    }

    pub fn min_entropy_input_len(&self) -> u64 {
        self.min_entropy_input_len
    }

    pub fn max_entropy_input_len(&self) -> u64 {
        self.max_entropy_input_len
    }

    pub fn min_nonce_len(&self) -> u64 {
        self.min_nonce_len
    }

    pub fn max_personalization_len(&self) -> u64 {
        self.max_personalization_len
    }

    pub fn max_additional_input_len(&self) -> u64 {
        self.max_additional_input_len
    }

    pub fn max_request_len(&self) -> usize {
        self.max_request_len
    }

    pub(crate) fn seed_len(&self) -> usize {
        self.seed_len
    }

    pub(crate) fn derivation_function(&self) -> bool {
        self.derivation_function
    }

    /// Bytes of entropy input to draw from the entropy source.
    pub(crate) fn entropy_draw_len(&self) -> usize {
        if self.derivation_function {
            self.min_entropy_input_len as usize
        } else {
            self.seed_len
        }
    }

    /// Bytes of nonce to draw from the entropy source at instantiation.
    pub(crate) fn nonce_draw_len(&self) -> usize {
        self.min_nonce_len as usize
    }

    pub(crate) fn check_personalization(&self, len: usize) -> Result<(), Error> {
        within(len, 0, self.max_personalization_len, Input::Personalization)
    }

    pub(crate) fn check_additional_input(&self, len: usize) -> Result<(), Error> {
        within(len, 0, self.max_additional_input_len, Input::AdditionalInput)
    }

    pub(crate) fn check_request(&self, len: usize) -> Result<(), Error> {
        within(len, 0, self.max_request_len as u64, Input::Request)
    }

    pub(crate) fn check_instantiate(&self, entropy_len: usize, nonce_len: usize) -> Result<(), Error> {
        within(
            entropy_len,
            self.min_entropy_input_len,
            self.max_entropy_input_len,
            Input::EntropyInput,
        )?;
        if self.derivation_function {
            within(nonce_len, self.min_nonce_len, MAX_INPUT_LEN, Input::Nonce)
        } else if entropy_len + nonce_len != self.seed_len {
            // entropy input || nonce is used directly as seed material
            Err(Error::InvalidLength(Input::Nonce))
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_reseed(&self, entropy_len: usize) -> Result<(), Error> {
        if self.derivation_function {
            within(
                entropy_len,
                self.min_entropy_input_len,
                self.max_entropy_input_len,
                Input::EntropyInput,
            )
        } else {
            within(
                entropy_len,
                self.seed_len as u64,
                self.seed_len as u64,
                Input::EntropyInput,
            )
        }
    }
}
