// SPDX-License-Identifier: MIT

//! Block cipher plumbing shared by the update function, the generate
//! engine and the derivation function.
use crate::error::Error;

use aes::{
    cipher::{BlockEncrypt, KeyInit},
    Aes128Enc, Aes192Enc, Aes256Enc, Block,
};
use core::ops::{Deref, DerefMut};
use zeroize::Zeroize;

/// Cipher block length in bytes, the length of `V`.
pub(crate) const BLOCK_LEN: usize = 16;
pub(crate) const MAX_KEY_LEN: usize = 32;
pub(crate) const MAX_SEED_LEN: usize = MAX_KEY_LEN + BLOCK_LEN;

/// The AES key size a CTR_DRBG instance runs on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CipherVariant {
    Aes128,
    Aes192,
    #[default]
    Aes256,
}

impl CipherVariant {
    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            CipherVariant::Aes128 => 16,
            CipherVariant::Aes192 => 24,
            CipherVariant::Aes256 => 32,
        }
    }

    /// Length of the seed material fed to the update function, i.e.
    /// key length plus block length.
    pub const fn seed_len(self) -> usize {
        self.key_len() + BLOCK_LEN
    }

    /// Highest security strength in bits this variant supports.
    pub const fn max_strength(self) -> u32 {
        match self {
            CipherVariant::Aes128 => 128,
            CipherVariant::Aes192 => 192,
            CipherVariant::Aes256 => 256,
        }
    }
}

/// A keyed AES encryptor of any supported size.
pub(crate) enum BlockCipher {
    Aes128(Aes128Enc),
    Aes192(Aes192Enc),
    Aes256(Aes256Enc),
}

impl BlockCipher {
    pub(crate) fn new(variant: CipherVariant, key: &[u8]) -> Result<Self, Error> {
        let cipher = match variant {
            CipherVariant::Aes128 => {
                BlockCipher::Aes128(Aes128Enc::new_from_slice(key).map_err(|_| Error::Internal)?)
            }
            CipherVariant::Aes192 => {
                BlockCipher::Aes192(Aes192Enc::new_from_slice(key).map_err(|_| Error::Internal)?)
            }
            CipherVariant::Aes256 => {
                BlockCipher::Aes256(Aes256Enc::new_from_slice(key).map_err(|_| Error::Internal)?)
            }
        };
        Ok(cipher)
    }

    pub(crate) fn encrypt_block(&self, block: &mut Block) {
        match self {
            BlockCipher::Aes128(c) => c.encrypt_block(block),
            BlockCipher::Aes192(c) => c.encrypt_block(block),
            BlockCipher::Aes256(c) => c.encrypt_block(block),
        }
    }
}

/// Increment a slice of bytes by 1 in big-endian order, wrapping to
/// zero on overflow.
pub(crate) fn inc_bytes(block: &mut [u8]) {
    for bit in block.iter_mut().rev() {
        if *bit == 0xff {
            *bit = 0;
        } else {
            *bit += 1;
            break;
        }
    }
}

/// Fixed capacity buffer for secret material no longer than one seed
/// length. The contents are wiped on drop.
pub(crate) struct SeedBuf {
    bytes: [u8; MAX_SEED_LEN],
    len: usize,
}

impl SeedBuf {
    /// A zero filled buffer of `len` bytes.
    pub(crate) fn zeroed(len: usize) -> Self {
        debug_assert!(len <= MAX_SEED_LEN);
        Self {
            bytes: [0u8; MAX_SEED_LEN],
            len,
        }
    }

    /// `data` zero padded on the right to `len` bytes.
    pub(crate) fn padded(data: &[u8], len: usize) -> Result<Self, Error> {
        if data.len() > len {
            return Err(Error::Internal);
        }
        let mut buf = Self::zeroed(len);
        buf.bytes[..data.len()].copy_from_slice(data);
        Ok(buf)
    }

    /// XOR `data` into the leading bytes of the buffer.
    pub(crate) fn xor_in(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.len() > self.len {
            return Err(Error::Internal);
        }
        for (b, d) in self.bytes.iter_mut().zip(data) {
            *b ^= *d;
        }
        Ok(())
    }
}

impl Deref for SeedBuf {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl DerefMut for SeedBuf {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }
}

impl Drop for SeedBuf {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use crate::cipher::{inc_bytes, BlockCipher, CipherVariant, SeedBuf, BLOCK_LEN};
    use aes::Block;

    #[test]
    fn inc_bytes_carries() {
        let mut v = [0u8; BLOCK_LEN];
        inc_bytes(&mut v);
        assert_eq!(v[BLOCK_LEN - 1], 1);

        v[BLOCK_LEN - 1] = 0xff;
        inc_bytes(&mut v);
        assert_eq!(v[BLOCK_LEN - 1], 0);
        assert_eq!(v[BLOCK_LEN - 2], 1);

        let mut v = [0xffu8; BLOCK_LEN];
        inc_bytes(&mut v);
        assert_eq!(v, [0u8; BLOCK_LEN]);
    }

    #[test]
    fn variant_lengths() {
        assert_eq!(CipherVariant::Aes128.seed_len(), 32);
        assert_eq!(CipherVariant::Aes192.seed_len(), 40);
        assert_eq!(CipherVariant::Aes256.seed_len(), 48);
        assert_eq!(CipherVariant::default(), CipherVariant::Aes256);
    }

    #[test]
    fn cipher_rejects_wrong_key_len() {
        assert!(BlockCipher::new(CipherVariant::Aes256, &[0u8; 16]).is_err());
        assert!(BlockCipher::new(CipherVariant::Aes128, &[0u8; 16]).is_ok());
    }

    // FIPS-197 Appendix C.3
    #[test]
    fn aes_256_known_answer() {
        let key = hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
            .unwrap();
        let plain = hex::decode("00112233445566778899aabbccddeeff").unwrap();
        let cipher = BlockCipher::new(CipherVariant::Aes256, &key).unwrap();
        let mut block = Block::clone_from_slice(&plain);
        cipher.encrypt_block(&mut block);
        assert_eq!(
            hex::encode(block.as_slice()),
            "8ea2b7ca516745bfeafc49904b496089"
        );
    }

    #[test]
    fn seed_buf_pad_and_xor() {
        let mut buf = SeedBuf::padded(&[1, 2, 3], 8).unwrap();
        assert_eq!(&buf[..], &[1, 2, 3, 0, 0, 0, 0, 0]);
        buf.xor_in(&[1, 1]).unwrap();
        assert_eq!(&buf[..], &[0, 3, 3, 0, 0, 0, 0, 0]);
        assert!(buf.xor_in(&[0u8; 9]).is_err());
        assert!(SeedBuf::padded(&[0u8; 9], 8).is_err());
    }
}
