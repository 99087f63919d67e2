// SPDX-License-Identifier: MIT

//! The `Block_Cipher_df` derivation function of SP 800-90A section
//! 10.3.2, used to condition arbitrary length inputs into seed
//! material.
use crate::{
    cipher::{inc_bytes, BlockCipher, CipherVariant, SeedBuf, BLOCK_LEN},
    error::{Error, Input},
};

use aes::Block;
use alloc::vec::Vec;
use zeroize::Zeroizing;

/// Derive `variant.seed_len()` bytes from the concatenation of
/// `inputs`.
///
/// `overflow` names the input blamed when the combined length does
/// not fit the 32-bit length field.
pub(crate) fn cipher_df(
    variant: CipherVariant,
    inputs: &[&[u8]],
    overflow: Input,
) -> Result<SeedBuf, Error> {
    let key_len = variant.key_len();
    let mut output = SeedBuf::zeroed(variant.seed_len());
    let input_len: usize = inputs.iter().map(|i| i.len()).sum();
    let l = u32::try_from(input_len).map_err(|_| Error::InvalidLength(overflow))?;
    let n = output.len() as u32;
    // Build the S buffer which is a concatenation of the IV and input
    // values. Make sure the length is BLOCK_LEN aligned.
    let len = ((BLOCK_LEN + 8 + input_len + 1).div_ceil(BLOCK_LEN)) * BLOCK_LEN;
    let mut s = Zeroizing::new(Vec::with_capacity(len));
    // padding for the IV
    s.resize(BLOCK_LEN, 0);
    s.extend_from_slice(&l.to_be_bytes());
    s.extend_from_slice(&n.to_be_bytes());
    for input in inputs {
        s.extend_from_slice(input);
    }
    s.push(0x80);
    // pad to block len
    s.resize(len, 0);

    let k = b"\x00\x01\x02\x03\x04\x05\x06\x07\x08\x09\x0a\x0b\x0c\x0d\x0e\x0f\
              \x10\x11\x12\x13\x14\x15\x16\x17\x18\x19\x1a\x1b\x1c\x1d\x1e\x1f";
    //
    // Build the initial buffer that contains the derived K and X
    // values.
    //
    let cipher = BlockCipher::new(variant, &k[..key_len])?;
    let mut tmp_buf = SeedBuf::zeroed(variant.seed_len().next_multiple_of(BLOCK_LEN));
    for blk in tmp_buf.chunks_mut(BLOCK_LEN) {
        cipher_bcc(&cipher, &s, Block::from_mut_slice(blk));
        // increment the IV
        inc_bytes(&mut s[0..4]);
    }
    // K
    let cipher = BlockCipher::new(variant, &tmp_buf[..key_len])?;
    // X
    let x_blk = Block::from_mut_slice(&mut tmp_buf[key_len..key_len + BLOCK_LEN]);
    for blk in output.chunks_mut(BLOCK_LEN) {
        cipher.encrypt_block(x_blk);
        blk.copy_from_slice(&x_blk[0..blk.len()]);
    }
    Ok(output)
}

/// Block chaining function used by derivation function.
fn cipher_bcc(cipher: &BlockCipher, input: &[u8], output: &mut Block) {
    debug_assert_eq!(input.len() % BLOCK_LEN, 0);
    for blk in input.chunks(BLOCK_LEN) {
        for (o, b) in output.iter_mut().zip(blk) {
            *o ^= *b;
        }
        cipher.encrypt_block(output);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        cipher::CipherVariant,
        df::cipher_df,
        error::Input,
    };

    #[test]
    fn output_is_seed_len() {
        for variant in [
            CipherVariant::Aes128,
            CipherVariant::Aes192,
            CipherVariant::Aes256,
        ] {
            let out = cipher_df(variant, &[&b"abc"[..]], Input::AdditionalInput).unwrap();
            assert_eq!(out.len(), variant.seed_len());
        }
    }

    #[test]
    fn split_inputs_match_concatenation() {
        let joined = cipher_df(CipherVariant::Aes256, &[&b"entropy-nonce"[..]], Input::Nonce).unwrap();
        let split =
            cipher_df(CipherVariant::Aes256, &[&b"entropy"[..], &b"-"[..], &b"nonce"[..]], Input::Nonce).unwrap();
        assert_eq!(&joined[..], &split[..]);

        let other = cipher_df(CipherVariant::Aes256, &[&b"entropy+nonce"[..]], Input::Nonce).unwrap();
        assert_ne!(&joined[..], &other[..]);
    }
}
