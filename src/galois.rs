//! GF(2^m) construction: antilog/log tables from a primitive polynomial.
//!
//! Field elements are polynomials of degree < m over GF(2), stored as the
//! integer whose bit i is the coefficient of x^i. `alpha_to[i]` is α^i in
//! that representation and `index_of[x]` is the discrete log of x, with
//! `index_of[0] = -1` as the log-of-zero sentinel used throughout decoding.

use crate::Error;

/// Built-in primitive polynomial of degree `m`, coefficient of x^i at
/// position i. Minimum-weight polynomials from the standard tables.
pub(crate) fn default_polynomial(m: usize) -> Vec<u8> {
    let taps: &[usize] = match m {
        3 | 4 | 6 | 7 | 15 => &[1],
        5 | 11 => &[2],
        9 => &[4],
        10 => &[3],
        12 => &[3, 4, 7],
        13 => &[1, 3, 4],
        8 => &[4, 5, 6],
        14 => &[1, 11, 12],
        16 => &[2, 3, 5],
        _ => unreachable!("field degree validated to 3..=16"),
    };
    let mut p = vec![0u8; m + 1];
    p[0] = 1;
    p[m] = 1;
    for &i in taps {
        p[i] = 1;
    }
    p
}

/// Log/antilog tables for GF(2^m), fixed at construction.
#[derive(Clone)]
pub(crate) struct GaloisField {
    pub(crate) m: usize,
    /// Multiplicative group order, 2^m - 1.
    pub(crate) n: usize,
    /// Primitive polynomial, coefficient of x^i at position i.
    pub(crate) poly: Vec<u8>,
    /// alpha_to[i] = α^i for i in [0, n).
    pub(crate) alpha_to: Vec<i32>,
    /// index_of[x] = log_α(x) for x in [1, 2^m); index_of[0] = -1.
    pub(crate) index_of: Vec<i32>,
}

impl GaloisField {
    /// Builds the tables, verifying along the way that `poly` is primitive:
    /// the powers of α must visit every nonzero field element before
    /// wrapping, so a reducible or non-primitive polynomial leaves gaps.
    pub(crate) fn new(m: usize, poly: Vec<u8>) -> Result<Self, Error> {
        debug_assert!((3..=16).contains(&m));
        let n = (1usize << m) - 1;

        if poly.len() != m + 1 {
            return Err(Error::PolynomialSize {
                expected: m + 1,
                got: poly.len(),
            });
        }
        if poly.iter().any(|&c| c > 1) || poly[0] != 1 || poly[m] != 1 {
            return Err(Error::PolynomialForm);
        }

        let mut alpha_to = vec![0i32; n];
        let mut index_of = vec![-1i32; n + 1];

        // α^0 .. α^(m-1) are the monomials; α^m is the polynomial tail
        // x^m ≡ p(x) - x^m (mod p).
        let mut high = 0i32;
        let mut mask = 1i32;
        for (i, &coeff) in poly.iter().take(m).enumerate() {
            alpha_to[i] = mask;
            index_of[mask as usize] = i as i32;
            if coeff != 0 {
                high ^= mask;
            }
            mask <<= 1;
        }
        alpha_to[m] = high;
        index_of[high as usize] = m as i32;

        // Repeated multiplication by x, reducing by p when the degree
        // reaches m.
        let top = 1i32 << (m - 1);
        for i in m + 1..n {
            let prev = alpha_to[i - 1];
            alpha_to[i] = if prev >= top {
                high ^ ((prev ^ top) << 1)
            } else {
                prev << 1
            };
            index_of[alpha_to[i] as usize] = i as i32;
        }

        for x in 1..=n {
            if index_of[x] == -1 {
                return Err(Error::NotPrimitive { m });
            }
        }
        index_of[0] = -1;

        Ok(Self {
            m,
            n,
            poly,
            alpha_to,
            index_of,
        })
    }
}
