//! Binary BCH (Bose–Chaudhuri–Hocquenghem) forward error correction.
//!
//! Systematic BCH codes over GF(2^m) for 3 ≤ m ≤ 16: codeword length
//! N = 2^m − 1, up to `t` correctable bit errors. Ported from the aff3ct
//! BCH tool chain (Galois / BCH_polynomial_generator / Encoder_BCH /
//! Decoder_BCH_std) for bit-compatibility with its codewords.
//!
//! Two API granularities share one codec:
//!
//! - **Bit-granular** ([`Bch::encode_bits`], [`Bch::decode_bits`]): one
//!   element per bit, codeword layout `[parity | message]`. The reference
//!   path.
//! - **Byte-granular** ([`Bch::encode_bytes`], [`Bch::decode_bytes`]):
//!   packed buffers driven by 8-bit-parallel lookup tables. Produces the
//!   exact same codewords, an order of magnitude faster.
//!
//! The codec holds only immutable tables after construction, so a single
//! instance can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use bch_rs::Bch;
//!
//! // BCH(31, 16): m = 5, corrects up to 3 errors
//! let bch = Bch::new(31, 3).unwrap();
//! assert_eq!(bch.k(), 16);
//!
//! let msg: Vec<u8> = (0..16).map(|i| (i % 3 == 0) as u8).collect();
//! let codeword = bch.encode_bits(&msg).unwrap();
//!
//! let mut received = codeword.clone();
//! received[2] ^= 1;
//! received[19] ^= 1;
//! received[30] ^= 1;
//!
//! let decoded = bch.decode_bits(&received).unwrap();
//! assert_eq!(decoded, msg);
//! ```

mod codec;
mod decoder;
mod encoder;
mod galois;
mod genpoly;

pub use codec::Bch;

/// Errors reported by codec construction and encoding.
///
/// Decoding does not use this type: an uncorrectable received word is an
/// expected runtime outcome, reported as `None` by the decode calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("codeword length {0} is not 2^m - 1 for any m in 3..=16")]
    InvalidLength(usize),

    #[error("correction capacity t = {t} is out of range for N = {n} (need t >= 1 and 2t < N)")]
    InvalidCapacity { t: usize, n: usize },

    #[error("primitive polynomial needs {expected} coefficients, got {got}")]
    PolynomialSize { expected: usize, got: usize },

    #[error("primitive polynomial coefficients must be 0 or 1 with p[0] = p[m] = 1")]
    PolynomialForm,

    #[error("polynomial does not generate the multiplicative group of GF(2^{m})")]
    NotPrimitive { m: usize },

    #[error("t = {t} leaves no message bits in an N = {n} codeword")]
    NoDataCapacity { t: usize, n: usize },

    #[error("message has {got} bits, expected K = {expected}")]
    MessageSize { expected: usize, got: usize },

    #[error("buffer has {got} bytes, expected {expected}")]
    BufferSize { expected: usize, got: usize },

    #[error("generator polynomial coefficient at degree {degree} is {value:#x}, not binary")]
    NonBinaryGenerator { degree: usize, value: i32 },
}
