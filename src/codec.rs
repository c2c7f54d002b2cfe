//! Codec facade: dimensions, field tables, and the acceleration LUTs.

use crate::galois::{default_polynomial, GaloisField};
use crate::genpoly::generator_poly;
use crate::Error;

/// A systematic binary BCH codec for a fixed (N, t, primitive polynomial).
///
/// Construction derives the GF(2^m) tables, the generator polynomial and
/// the byte-parallel lookup tables once; everything is immutable afterwards
/// and all encode/decode calls take `&self`.
///
/// Codeword layout is `[parity | message]` in the bit domain: bit i of the
/// parity region is the coefficient of x^i of the remainder, and the K
/// message bits follow in input order. The byte-granular calls pack the
/// message MSB-first (message bit 0 in the highest stream position) and the
/// parity LSB-first; see [`Bch::encode_bytes`].
#[derive(Clone)]
pub struct Bch {
    pub(crate) n: usize,
    pub(crate) k: usize,
    pub(crate) t: usize,
    /// deg(g): number of parity bits.
    pub(crate) parity_bits: usize,
    /// ceil(parity_bits / 8): size of a packed parity buffer.
    pub(crate) ecc_bytes: usize,
    /// ceil(parity_bits / 32): parity register size in 32-bit words.
    pub(crate) ecc_words: usize,
    pub(crate) gf: GaloisField,
    /// Generator polynomial, binary coefficients, g[0] = g[deg] = 1.
    pub(crate) gen: Vec<u8>,
    /// encode_lut[b]: remainder delta of feeding byte b through 8 LFSR
    /// steps, packed little-endian into ecc_words words.
    pub(crate) encode_lut: Vec<Vec<u32>>,
    /// syndrome_lut[i][b]: the i-th syndrome contribution of byte b,
    /// Σ α^(i·p) over the set bits p of b. Row 0 is unused.
    pub(crate) syndrome_lut: Vec<Vec<i32>>,
}

impl Bch {
    /// Creates a codec for codeword length `n` = 2^m − 1 and correction
    /// capacity `t`, using the built-in primitive polynomial for m.
    pub fn new(n: usize, t: usize) -> Result<Self, Error> {
        Self::build(n, t, None)
    }

    /// Creates a codec with a caller-supplied primitive polynomial
    /// (coefficient of x^i at position i, length m + 1). The polynomial is
    /// rejected if it does not generate the full multiplicative group.
    pub fn with_polynomial(n: usize, t: usize, p: &[u8]) -> Result<Self, Error> {
        Self::build(n, t, Some(p.to_vec()))
    }

    fn build(n: usize, t: usize, poly: Option<Vec<u8>>) -> Result<Self, Error> {
        let m = (3..=16)
            .find(|&m| (1usize << m) - 1 == n)
            .ok_or(Error::InvalidLength(n))?;
        if t < 1 || 2 * t >= n {
            return Err(Error::InvalidCapacity { t, n });
        }

        let poly = match poly {
            Some(p) => {
                if p.len() != m + 1 {
                    return Err(Error::PolynomialSize {
                        expected: m + 1,
                        got: p.len(),
                    });
                }
                p
            }
            None => default_polynomial(m),
        };

        let gf = GaloisField::new(m, poly)?;
        let gen = generator_poly(&gf, t)?;

        let parity_bits = gen.len() - 1;
        if parity_bits >= n {
            return Err(Error::NoDataCapacity { t, n });
        }
        let k = n - parity_bits;
        let ecc_bytes = (parity_bits + 7) / 8;
        let ecc_words = (parity_bits + 31) / 32;

        let encode_lut = build_encode_lut(&gen, parity_bits, ecc_words);
        let syndrome_lut = build_syndrome_lut(&gf, t);

        Ok(Self {
            n,
            k,
            t,
            parity_bits,
            ecc_bytes,
            ecc_words,
            gf,
            gen,
            encode_lut,
            syndrome_lut,
        })
    }

    /// Codeword length in bits (2^m − 1).
    pub fn n(&self) -> usize {
        self.n
    }

    /// GF(2^m) extension degree.
    pub fn m(&self) -> usize {
        self.gf.m
    }

    /// Message length in bits.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Correction capacity in bits.
    pub fn t(&self) -> usize {
        self.t
    }

    /// Number of parity bits, deg(g).
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Size of a packed parity buffer in bytes.
    pub fn ecc_bytes(&self) -> usize {
        self.ecc_bytes
    }

    /// The primitive polynomial the field was built from, coefficient of
    /// x^i at position i.
    pub fn polynomial(&self) -> &[u8] {
        &self.gf.poly
    }
}

/// For every input byte, the remainder pattern after 8 serial LFSR steps
/// from a cleared register, fed MSB-first. Bit i of the register lands in
/// word i/32, bit i%32.
fn build_encode_lut(gen: &[u8], parity_bits: usize, ecc_words: usize) -> Vec<Vec<u32>> {
    let r = parity_bits;
    let mut lut = vec![vec![0u32; ecc_words]; 256];
    let mut rem = vec![0u8; r];

    for (value, row) in lut.iter_mut().enumerate() {
        rem.fill(0);
        for bit in (0..8).rev() {
            let input = ((value >> bit) & 1) as u8;
            let feedback = input ^ rem[r - 1];
            for k in (1..r).rev() {
                rem[k] = rem[k - 1] ^ (gen[k] & feedback);
            }
            rem[0] = gen[0] & feedback;
        }
        for (i, &bit) in rem.iter().enumerate() {
            if bit != 0 {
                row[i / 32] |= 1 << (i % 32);
            }
        }
    }
    lut
}

/// syndrome_lut[i][b] = XOR of α^(i·p mod n) over the set bits p ∈ [0, 8)
/// of b, in polynomial form.
fn build_syndrome_lut(gf: &GaloisField, t: usize) -> Vec<Vec<i32>> {
    let n = gf.n;
    let mut lut = vec![vec![0i32; 256]; 2 * t + 1];
    for (i, row) in lut.iter_mut().enumerate().skip(1) {
        for (b, entry) in row.iter_mut().enumerate() {
            let mut value = 0i32;
            for p in 0..8 {
                if (b >> p) & 1 != 0 {
                    value ^= gf.alpha_to[(i * p) % n];
                }
            }
            *entry = value;
        }
    }
    lut
}
