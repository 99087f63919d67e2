//
// Copyright (c) 2023 Daniel Ottavio
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE
//
//! A module to facilitate the CTR_DRBG algorithm.
//!
//! The CTR_DRBG algorithm is implemented via the [`CtrDrbg`]
//! type. This type may be instantiated using the builder class
//! [`CtrBuilder`], or constructed uninstantiated with
//! [`CtrDrbg::new`] and driven through its lifecycle by hand:
//!
//! ```text
//! Uninstantiated --instantiate--> Instantiated --generate--> Instantiated
//!                                      |                          |
//!                                      |          reseed interval exhausted
//!                                      |                          v
//!                                      +<------reseed------ ReseedRequired
//!                                      |
//!                                 uninstantiate --> Uninstantiated
//! ```
//!
use crate::{
    cipher::{inc_bytes, BlockCipher, CipherVariant, SeedBuf, BLOCK_LEN, MAX_KEY_LEN},
    config::{CtrConfig, Limits},
    df::cipher_df,
    entropy::Entropy,
    error::{Error, Input},
};

use aes::Block;
use core::{fmt, iter::zip};
use log::{debug, trace, warn};
use zeroize::Zeroize;

#[cfg(feature = "rand_core")]
use rand_core::{TryCryptoRng, TryRngCore};

/// Key and V of an instantiated generator together with the reseed
/// counter. Only the update function and the generate engine write
/// `key` and `v_blk`.
#[derive(Clone)]
struct WorkingState {
    cipher: CipherVariant,
    key: [u8; MAX_KEY_LEN],
    v_blk: [u8; BLOCK_LEN],
    reseed_ctr: u64,
}

/// A live instance: working state plus the bounds fixed when it was
/// instantiated.
struct Instance {
    state: WorkingState,
    limits: Limits,
    reseed_required: bool,
}

/// Implementation of CTR_DRBG using AES and, optionally, the
/// derivation function outlined by [SP 800-90A
/// Rev. 1](https://csrc.nist.gov/publications/detail/sp/800-90a/rev-1/final). Instantiation
/// of this type is usually performed using the builder class [`CtrBuilder`].
///
/// The handle owns the working state exclusively. It is not `Clone`,
/// and the key and V are wiped when the instance is uninstantiated or
/// the handle is dropped.
///
/// # Example
///
/// ```
/// use ctr_drbg::{ctr::CtrBuilder, entropy::OsEntropy};
///
/// # use ctr_drbg::Error;
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// // Build a new instance
/// let mut drbg = CtrBuilder::new(OsEntropy::default()).build()?;
///
/// // Generate random data
/// let mut random_data = [0u8; 32];
/// drbg.fill_bytes(&mut random_data, None)?;
///
/// // Reseed the instance
/// drbg.reseed(None)?;
/// #
/// # Ok(())
/// # }
/// ```
pub struct CtrDrbg<E> {
    config: CtrConfig,
    instance: Option<Instance>,
    entropy: E,
}

/// Builder class for allocating `CtrDrbg` instances.
///
/// Unless an entropy source other than
/// [`OsEntropy`](crate::entropy::OsEntropy) is required, it is
/// recommended to use the thread-local instance provided by
/// [`LocalCtrDrbg`](crate::thread::LocalCtrDrbg), rather than allocate this
/// type by hand.
///
/// New instances use AES-256 with the derivation function at 256 bit
/// security strength by default.
///
/// # Example
/// ```
/// use ctr_drbg::{ctr::CtrBuilder, entropy::OsEntropy};
///
/// # use ctr_drbg::Error;
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let my_info = 0u32;
/// let mut drbg = CtrBuilder::new(OsEntropy::default())
///     .personal(&my_info.to_be_bytes())
///     .reseed_interval(1 << 14)
///     .build()?;
/// #
/// # Ok(())
/// # }
/// ```
///
/// Caller supplied entropy, as used for known-answer testing:
///
/// ```
/// use ctr_drbg::{ctr::CtrBuilder, entropy::NoEntropy};
///
/// # use ctr_drbg::Error;
/// #
/// # fn main() -> Result<(), Error> {
/// let entropy = [0x5au8; 32];
/// let nonce = [0xa5u8; 16];
/// let mut drbg = CtrBuilder::new(NoEntropy)
///     .entropy_input(&entropy)
///     .nonce(&nonce)
///     .personal(b"DRBG_PERS")
///     .build()?;
///
/// let mut out = [0u8; 16];
/// drbg.generate(&mut out, None, false)?;
/// # Ok(())
/// # }
/// ```
pub struct CtrBuilder<'a, E> {
    personal: Option<&'a [u8]>,
    nonce: Option<&'a [u8]>,
    entropy_input: Option<&'a [u8]>,
    security_strength: Option<u32>,
    config: CtrConfig,
    entropy: E,
}

impl WorkingState {
    fn new(cipher: CipherVariant) -> Self {
        Self {
            cipher,
            key: [0u8; MAX_KEY_LEN],
            v_blk: [0u8; BLOCK_LEN],
            reseed_ctr: 0,
        }
    }

    fn key(&self) -> &[u8] {
        &self.key[..self.cipher.key_len()]
    }

    fn block_cipher(&self) -> Result<BlockCipher, Error> {
        BlockCipher::new(self.cipher, self.key())
    }

    /// The CTR_DRBG update function.
    ///
    /// `data` must be exactly one seed length. Key and V are only
    /// written once the whole temporary buffer has been produced.
    fn update(&mut self, data: &[u8]) -> Result<(), Error> {
        let cipher = self.block_cipher()?;
        self.update_with_cipher(&cipher, data)
    }

    fn update_with_cipher(&mut self, cipher: &BlockCipher, data: &[u8]) -> Result<(), Error> {
        let seed_len = self.cipher.seed_len();
        if data.len() != seed_len {
            return Err(Error::Internal);
        }
        let mut v_blk = self.v_blk;
        let mut tmp_buf = SeedBuf::zeroed(seed_len.next_multiple_of(BLOCK_LEN));
        for tmp_blk in tmp_buf.chunks_mut(BLOCK_LEN) {
            inc_bytes(&mut v_blk);
            tmp_blk.copy_from_slice(&v_blk);
            cipher.encrypt_block(Block::from_mut_slice(tmp_blk));
        }
        for (i, j) in zip(tmp_buf.iter_mut(), data) {
            *i ^= *j
        }
        let keylen = self.cipher.key_len();
        self.key[..keylen].copy_from_slice(&tmp_buf[0..keylen]);
        self.v_blk.copy_from_slice(&tmp_buf[keylen..seed_len]);
        v_blk.zeroize();
        Ok(())
    }

    /// Fill `bytes` with the encryptions of successive values of V.
    fn output_blocks(&mut self, cipher: &BlockCipher, bytes: &mut [u8]) {
        let mut tmp_blk = Block::default();
        for blk in bytes.chunks_mut(BLOCK_LEN) {
            inc_bytes(&mut self.v_blk);
            tmp_blk.copy_from_slice(&self.v_blk);
            cipher.encrypt_block(&mut tmp_blk);
            blk.copy_from_slice(&tmp_blk[0..blk.len()]);
        }
        tmp_blk.as_mut_slice().zeroize();
    }
}

impl Drop for WorkingState {
    fn drop(&mut self) {
        self.key.zeroize();
        self.v_blk.zeroize();
    }
}

impl<'a, E> CtrBuilder<'a, E>
where
    E: Entropy,
{
    pub fn new(entropy: E) -> Self {
        Self {
            personal: None,
            nonce: None,
            entropy_input: None,
            security_strength: None,
            config: CtrConfig::default(),
            entropy,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CtrConfig) -> CtrBuilder<'a, E> {
        self.config = config;
        self
    }

    /// Select the AES key size. By default, this is AES-256.
    pub fn cipher(mut self, cipher: CipherVariant) -> CtrBuilder<'a, E> {
        self.config.cipher = cipher;
        self
    }

    /// Enable or disable the derivation function. It is enabled by
    /// default.
    ///
    /// Without it, entropy input and nonce together must be exactly
    /// one seed length (key length plus 16 bytes) of full entropy,
    /// and personalization and additional input may not exceed one
    /// seed length.
    pub fn derivation_function(mut self, enabled: bool) -> CtrBuilder<'a, E> {
        self.config.derivation_function = enabled;
        self
    }

    /// Reseed from the entropy source before every generate call.
    /// Disabled by default.
    pub fn prediction_resistance(mut self, enabled: bool) -> CtrBuilder<'a, E> {
        self.config.prediction_resistance = enabled;
        self
    }

    /// Request a security strength in bits. The instance runs at the
    /// smallest of 128, 192 and 256 that is at least `bits`.
    ///
    /// By default, this is the highest strength the cipher supports.
    pub fn security_strength(mut self, bits: u32) -> CtrBuilder<'a, E> {
        self.security_strength = Some(bits);
        self
    }

    /// Specify the nonce used to initialize the CTR_DRBG instance.
    ///
    /// With the derivation function the nonce should have a minimum
    /// length of half the security strength, 16 bytes at 256 bits.
    ///
    /// By default, the nonce is read from the `Entropy` source.
    pub fn nonce(mut self, nonce: &'a [u8]) -> CtrBuilder<'a, E> {
        self.nonce = Some(nonce);
        self
    }

    /// Specify the entropy input used to initialize the CTR_DRBG
    /// instance instead of reading it from the `Entropy` source.
    ///
    /// The caller is responsible for the freshness of these bytes.
    /// Only their length is validated.
    pub fn entropy_input(mut self, entropy_input: &'a [u8]) -> CtrBuilder<'a, E> {
        self.entropy_input = Some(entropy_input);
        self
    }

    /// Specify the reseed interval for the CTR_DRBG instance.
    ///
    /// This interval represents the number of calls to the underlying
    /// generation function before new entropy must be added. This
    /// happens automatically when the entropy source can supply
    /// it. Lowering this value increases security at the cost of
    /// more frequent calls to the entropy source.
    ///
    /// By default, this value is 2^48, which is also the maximum.
    pub fn reseed_interval(mut self, reseed_itr: u64) -> CtrBuilder<'a, E> {
        self.config.reseed_interval = reseed_itr;
        self
    }

    /// Specify the personalization info used to initialize the
    /// CTR_DRBG instance.
    ///
    /// By default, this value is empty.
    pub fn personal(mut self, personal: &'a [u8]) -> CtrBuilder<'a, E> {
        self.personal = Some(personal);
        self
    }

    /// Build and return a new, instantiated [`CtrDrbg`] instance.
    ///
    /// Entropy input and nonce not given to the builder are read
    /// from the `Entropy` source.
    ///
    /// # Error
    ///
    /// Returns an error when the configuration or any input is out of
    /// bounds, or when there is a problem reading from the entropy
    /// source. No handle is returned in that case.
    pub fn build(self) -> Result<CtrDrbg<E>, Error> {
        let strength = self
            .security_strength
            .unwrap_or(self.config.cipher.max_strength());
        let mut drbg = CtrDrbg::new(self.config, self.entropy)?;
        match self.entropy_input {
            Some(entropy_input) => drbg.instantiate_with_entropy(
                entropy_input,
                self.nonce.unwrap_or(&[]),
                self.personal,
                strength,
            )?,
            None => drbg.instantiate_from_source(self.nonce, self.personal, strength)?,
        }
        Ok(drbg)
    }
}

impl<E> CtrDrbg<E> {
    /// Create an uninstantiated handle.
    ///
    /// # Error
    ///
    /// Returns [`Error::InvalidConfig`] if the reseed interval is not
    /// within `1..=2^48`.
    pub fn new(config: CtrConfig, entropy: E) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            instance: None,
            entropy,
        })
    }

    /// Instantiate with caller supplied entropy input and nonce.
    ///
    /// `security_strength` is the requested strength in bits. The
    /// instance is only marked instantiated if every check passes.
    ///
    /// # Error
    ///
    /// Returns [`Error::AlreadyInstantiated`] on a live instance,
    /// [`Error::UnsupportedStrength`] if the cipher cannot provide the
    /// strength, and [`Error::InvalidLength`] for out of bound inputs.
    pub fn instantiate_with_entropy(
        &mut self,
        entropy_input: &[u8],
        nonce: &[u8],
        personal: Option<&[u8]>,
        security_strength: u32,
    ) -> Result<(), Error> {
        let personal = personal.unwrap_or(&[]);
        let limits = self.instantiate_limits(personal, security_strength)?;
        limits.check_instantiate(entropy_input.len(), nonce.len())?;
        self.instantiate_algorithm(limits, entropy_input, nonce, personal)
    }

    /// Reseed with caller supplied entropy input. Optional
    /// `additional` data is mixed in with it.
    ///
    /// Without the derivation function `entropy_input` must be
    /// exactly one seed length.
    pub fn reseed_with_entropy(
        &mut self,
        entropy_input: &[u8],
        additional: Option<&[u8]>,
    ) -> Result<(), Error> {
        let limits = self.limits().ok_or(Error::NotInstantiated)?;
        let add_bytes = additional.unwrap_or(&[]);
        limits.check_reseed(entropy_input.len())?;
        limits.check_additional_input(add_bytes.len())?;
        self.reseed_algorithm(entropy_input, add_bytes)
    }

    /// Wipe the working state. The handle may be instantiated again
    /// afterwards.
    pub fn uninstantiate(&mut self) {
        if self.instance.take().is_some() {
            debug!("uninstantiated {:?}", self.config.cipher);
        }
    }

    pub fn is_instantiated(&self) -> bool {
        self.instance.is_some()
    }

    /// The configuration fixed at construction.
    pub fn config(&self) -> &CtrConfig {
        &self.config
    }

    /// The bounds fixed at instantiation, `None` while uninstantiated.
    pub fn limits(&self) -> Option<Limits> {
        self.instance.as_ref().map(|i| i.limits)
    }

    /// Instantiated security strength in bits.
    pub fn security_strength(&self) -> Option<u32> {
        self.limits().map(|l| l.security_strength())
    }

    /// Number of generate calls since the last (re)seed, plus one.
    pub fn reseed_counter(&self) -> Option<u64> {
        self.instance.as_ref().map(|i| i.state.reseed_ctr)
    }

    pub fn reseed_interval(&self) -> u64 {
        self.config.reseed_interval
    }

    /// Whether the reseed interval is exhausted. Generate will only
    /// succeed again after a reseed.
    pub fn is_reseed_required(&self) -> bool {
        self.instance.as_ref().is_some_and(|i| i.reseed_required)
    }

    pub fn prediction_resistance(&self) -> bool {
        self.config.prediction_resistance
    }

    fn instantiate_limits(&self, personal: &[u8], security_strength: u32) -> Result<Limits, Error> {
        if self.instance.is_some() {
            return Err(Error::AlreadyInstantiated);
        }
        let limits = Limits::new(&self.config, security_strength)?;
        limits.check_personalization(personal.len())?;
        Ok(limits)
    }

    fn instantiate_algorithm(
        &mut self,
        limits: Limits,
        entropy_input: &[u8],
        nonce: &[u8],
        personal: &[u8],
    ) -> Result<(), Error> {
        let cipher = self.config.cipher;
        let seed = if limits.derivation_function() {
            cipher_df(cipher, &[entropy_input, nonce, personal], Input::Personalization)?
        } else {
            let mut seed = SeedBuf::zeroed(limits.seed_len());
            let (e, n) = seed.split_at_mut(entropy_input.len());
            e.copy_from_slice(entropy_input);
            n.copy_from_slice(nonce);
            seed.xor_in(personal)?;
            seed
        };

        let mut state = WorkingState::new(cipher);
        state.update(&seed)?;
        state.reseed_ctr = 1;
        self.instance = Some(Instance {
            state,
            limits,
            reseed_required: false,
        });
        debug!(
            "instantiated {:?} at {} bits, derivation function {}, prediction resistance {}",
            cipher,
            limits.security_strength(),
            limits.derivation_function(),
            self.config.prediction_resistance
        );
        Ok(())
    }

    fn reseed_algorithm(&mut self, entropy_input: &[u8], additional: &[u8]) -> Result<(), Error> {
        let inst = self.instance.as_mut().ok_or(Error::NotInstantiated)?;
        let seed = if inst.limits.derivation_function() {
            cipher_df(
                inst.state.cipher,
                &[entropy_input, additional],
                Input::AdditionalInput,
            )?
        } else {
            let mut seed = SeedBuf::padded(entropy_input, inst.limits.seed_len())?;
            seed.xor_in(additional)?;
            seed
        };

        inst.state.update(&seed)?;
        inst.state.reseed_ctr = 1;
        inst.reseed_required = false;
        debug!("reseeded {:?}", inst.state.cipher);
        Ok(())
    }

    fn generate_algorithm(&mut self, bytes: &mut [u8], additional: &[u8]) -> Result<(), Error> {
        let reseed_itr = self.config.reseed_interval;
        let inst = self.instance.as_mut().ok_or(Error::NotInstantiated)?;
        if inst.reseed_required {
            return Err(Error::ReseedRequired);
        }
        let seed_len = inst.limits.seed_len();
        let seed = match (additional.len(), inst.limits.derivation_function()) {
            (0, _) => SeedBuf::zeroed(seed_len),
            (_, true) => cipher_df(inst.state.cipher, &[additional], Input::AdditionalInput)?,
            (_, false) => SeedBuf::padded(additional, seed_len)?,
        };

        // Work on a copy so a failure leaves the instance untouched.
        let mut state = inst.state.clone();
        if !additional.is_empty() {
            state.update(&seed)?;
        }
        let cipher = state.block_cipher()?;
        state.output_blocks(&cipher, bytes);
        state.update_with_cipher(&cipher, &seed)?;
        state.reseed_ctr += 1;

        inst.state = state;
        if inst.state.reseed_ctr > reseed_itr {
            warn!("reseed interval of {} exhausted", reseed_itr);
            inst.reseed_required = true;
        }
        Ok(())
    }
}

impl<E> CtrDrbg<E>
where
    E: Entropy,
{
    /// Instantiate with entropy input and nonce read from the
    /// `Entropy` source.
    ///
    /// # Error
    ///
    /// As [`instantiate_with_entropy`](Self::instantiate_with_entropy),
    /// plus [`Error::Entropy`] when the source fails.
    pub fn instantiate(&mut self, personal: Option<&[u8]>, security_strength: u32) -> Result<(), Error> {
        self.instantiate_from_source(None, personal, security_strength)
    }

    fn instantiate_from_source(
        &mut self,
        nonce: Option<&[u8]>,
        personal: Option<&[u8]>,
        security_strength: u32,
    ) -> Result<(), Error> {
        let personal = personal.unwrap_or(&[]);
        let limits = self.instantiate_limits(personal, security_strength)?;

        let entropy_len = match nonce {
            // The drawn entropy fills what the nonce leaves of the seed.
            Some(nonce) if !limits.derivation_function() => {
                match limits.seed_len().checked_sub(nonce.len()) {
                    Some(len) if len as u64 >= limits.min_entropy_input_len() => len,
                    _ => return Err(Error::InvalidLength(Input::Nonce)),
                }
            }
            _ => limits.entropy_draw_len(),
        };
        let mut drawn_nonce = match nonce {
            Some(_) => SeedBuf::zeroed(0),
            None => SeedBuf::zeroed(limits.nonce_draw_len()),
        };
        let nonce_len = nonce.map_or(drawn_nonce.len(), <[u8]>::len);
        limits.check_instantiate(entropy_len, nonce_len)?;

        let mut entropy_input = SeedBuf::zeroed(entropy_len);
        self.entropy.fill_bytes(&mut entropy_input)?;
        if nonce.is_none() {
            self.entropy.fill_bytes(&mut drawn_nonce)?;
        }
        let nonce = nonce.unwrap_or(&drawn_nonce[..]);
        self.instantiate_algorithm(limits, &entropy_input, nonce, personal)
    }

    /// Reseed with new entropy from the `Entropy` source. Optional
    /// `additional` data may be provided, which is mixed in with the
    /// entropy input.
    ///
    /// # Error
    ///
    /// Returns [`Error::NotInstantiated`] before instantiation,
    /// [`Error::InvalidLength`] if `additional` is too long, and
    /// [`Error::Entropy`] when there is a problem reading from the
    /// entropy source.
    pub fn reseed(&mut self, additional: Option<&[u8]>) -> Result<(), Error> {
        let limits = self.limits().ok_or(Error::NotInstantiated)?;
        let add_bytes = additional.unwrap_or(&[]);
        limits.check_additional_input(add_bytes.len())?;

        let mut entropy_input = SeedBuf::zeroed(limits.entropy_draw_len());
        self.entropy.fill_bytes(&mut entropy_input)?;
        self.reseed_algorithm(&entropy_input, add_bytes)
    }

    /// Fill `bytes` with random data in a single generate request.
    ///
    /// Optional `additional` data is mixed into the working state
    /// before and after the output is produced.
    ///
    /// Before producing output the instance reseeds from the
    /// `Entropy` source if the reseed interval is exhausted, if
    /// `prediction_resistance` is set, or if the instance was
    /// configured with prediction resistance. The additional data is
    /// then consumed by that reseed.
    ///
    /// # Error
    ///
    /// - [`Error::NotInstantiated`] before instantiation.
    /// - [`Error::InvalidLength`] if `bytes` exceeds the maximum
    ///   request length or `additional` is too long.
    /// - [`Error::ReseedRequired`] if a reseed is needed and the
    ///   entropy source cannot supply fresh entropy. The instance is
    ///   left as it was.
    ///
    /// On error no byte of `bytes` is valid output; it is zeroed.
    pub fn generate(
        &mut self,
        bytes: &mut [u8],
        additional: Option<&[u8]>,
        prediction_resistance: bool,
    ) -> Result<(), Error> {
        let result = self.try_generate(bytes, additional, prediction_resistance);
        if result.is_err() {
            bytes.zeroize();
        }
        result
    }

    fn try_generate(
        &mut self,
        bytes: &mut [u8],
        additional: Option<&[u8]>,
        prediction_resistance: bool,
    ) -> Result<(), Error> {
        let inst = self.instance.as_ref().ok_or(Error::NotInstantiated)?;
        let mut add_bytes = additional.unwrap_or(&[]);
        inst.limits.check_request(bytes.len())?;
        inst.limits.check_additional_input(add_bytes.len())?;

        if inst.reseed_required || prediction_resistance || self.config.prediction_resistance {
            match self.reseed(Some(add_bytes)) {
                Ok(()) => add_bytes = &[],
                Err(Error::Entropy(e)) => {
                    warn!("reseed before generate failed: {}", e);
                    return Err(Error::ReseedRequired);
                }
                Err(e) => return Err(e),
            }
        }
        trace!("generate {} bytes", bytes.len());
        self.generate_algorithm(bytes, add_bytes)
    }

    /// Fill the slice `bytes` with random data. Optional `additional`
    /// data may be provided, which is passed to every underlying
    /// generate request.
    ///
    /// There is no limit to the length of `bytes`. The standard does
    /// specify a limit of 2^16 bytes per request, so `bytes` is
    /// passed to the underlying generate function in chunks no larger
    /// than the limit.
    ///
    /// # Error
    ///
    /// See [`generate`](Self::generate). If any chunk fails, the whole
    /// of `bytes` is zeroed, including chunks already generated.
    pub fn fill_bytes(&mut self, bytes: &mut [u8], additional: Option<&[u8]>) -> Result<(), Error> {
        let limits = self.limits().ok_or(Error::NotInstantiated)?;
        let result = bytes
            .chunks_mut(limits.max_request_len())
            .try_for_each(|blk| self.generate(blk, additional, false));
        if result.is_err() {
            bytes.zeroize();
        }
        result
    }
}

impl<E> fmt::Debug for CtrDrbg<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CtrDrbg")
            .field("config", &self.config)
            .field("limits", &self.limits())
            .field("reseed_counter", &self.reseed_counter())
            .field("reseed_required", &self.is_reseed_required())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "rand_core")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl<E> TryCryptoRng for CtrDrbg<E> where E: Entropy {}

#[cfg(feature = "rand_core")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl<E> TryRngCore for CtrDrbg<E>
where
    E: Entropy,
{
    type Error = Error;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf, None)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf, None)?;
        Ok(u64::from_le_bytes(buf))
    }

    fn try_fill_bytes(&mut self, bytes: &mut [u8]) -> Result<(), Self::Error> {
        self.fill_bytes(bytes, None)
    }
}
