//! Generator polynomial construction.
//!
//! g(x) is the product of the minimal polynomials of α^1 .. α^(2t): the
//! 2-cyclotomic cosets of ℤ/Nℤ that intersect {1, .., 2t} supply the root
//! exponents, and multiplying out (x − α^root) over GF(2^m) collapses to a
//! polynomial with coefficients in GF(2). deg(g) is the parity bit count.

use crate::galois::GaloisField;
use crate::Error;

/// Exponents of all roots of g(x): the union of the 2-cyclotomic cosets
/// mod n that contain an element of [1, d). Cosets are visited by
/// increasing representative, elements in doubling order.
fn root_exponents(n: usize, d: usize) -> Vec<usize> {
    let mut seen = vec![false; n];
    seen[0] = true;

    let mut roots = Vec::new();
    for rep in 1..n {
        if seen[rep] {
            continue;
        }
        let mut coset = vec![rep];
        seen[rep] = true;
        let mut next = (rep * 2) % n;
        while next != rep {
            seen[next] = true;
            coset.push(next);
            next = (next * 2) % n;
        }
        if coset.iter().any(|&e| e < d) {
            roots.extend_from_slice(&coset);
        }
    }
    roots
}

/// Multiplies out g(x) = ∏ (x − α^root) with log/antilog arithmetic and
/// checks the result collapsed to GF(2). A non-binary coefficient can only
/// come from a construction bug and is surfaced, never masked.
pub(crate) fn generator_poly(gf: &GaloisField, t: usize) -> Result<Vec<u8>, Error> {
    let n = gf.n;
    let d = 2 * t + 1;
    let alpha = &gf.alpha_to;
    let index = &gf.index_of;

    let roots = root_exponents(n, d);
    let rdncy = roots.len();

    let mut g = vec![0i32; rdncy + 1];
    g[0] = alpha[roots[0]];
    g[1] = 1;
    for i in 2..=rdncy {
        let root = roots[i - 1];
        g[i] = 1;
        for j in (1..i).rev() {
            g[j] = if g[j] != 0 {
                g[j - 1] ^ alpha[(index[g[j] as usize] as usize + root) % n]
            } else {
                g[j - 1]
            };
        }
        g[0] = alpha[(index[g[0] as usize] as usize + root) % n];
    }

    let mut out = Vec::with_capacity(rdncy + 1);
    for (degree, &value) in g.iter().enumerate() {
        if value != 0 && value != 1 {
            return Err(Error::NonBinaryGenerator { degree, value });
        }
        out.push(value as u8);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois::default_polynomial;

    fn genpoly(m: usize, t: usize) -> Vec<u8> {
        let gf = GaloisField::new(m, default_polynomial(m)).unwrap();
        generator_poly(&gf, t).unwrap()
    }

    #[test]
    fn test_hamming_7_4() {
        // x^3 + x + 1
        assert_eq!(genpoly(3, 1), vec![1, 1, 0, 1]);
    }

    #[test]
    fn test_bch_15_known_generators() {
        // t=1: x^4 + x + 1 (the primitive polynomial itself)
        assert_eq!(genpoly(4, 1), vec![1, 1, 0, 0, 1]);
        // t=2: (x^4+x+1)(x^4+x^3+x^2+x+1) = x^8 + x^7 + x^6 + x^4 + 1
        assert_eq!(genpoly(4, 2), vec![1, 0, 0, 0, 1, 0, 1, 1, 1]);
        // t=3: further multiplied by (x^2+x+1)
        assert_eq!(genpoly(4, 3), vec![1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn test_bch_31_generators() {
        // t=1: the minimal polynomial of α, x^5 + x^2 + 1
        assert_eq!(genpoly(5, 1), vec![1, 0, 1, 0, 0, 1]);
        // t=2: times the minimal polynomial of α^3, degree 10
        assert_eq!(genpoly(5, 2), vec![1, 0, 0, 1, 0, 1, 1, 0, 1, 1, 1]);
    }

    #[test]
    fn test_generator_is_monic_with_unit_constant() {
        for (m, t) in [(5, 3), (6, 4), (8, 10), (10, 20)] {
            let g = genpoly(m, t);
            assert_eq!(g[0], 1, "m={m} t={t}: g(0) must be 1");
            assert_eq!(*g.last().unwrap(), 1, "m={m} t={t}: g must be monic");
            assert!(g.iter().all(|&c| c <= 1));
        }
    }

    #[test]
    fn test_degree_bounded_by_mt() {
        for (m, t) in [(5, 3), (7, 5), (10, 50), (13, 60)] {
            let g = genpoly(m, t);
            assert!(
                g.len() - 1 <= m * t,
                "m={m} t={t}: deg(g) = {} exceeds m*t",
                g.len() - 1
            );
        }
    }

    #[test]
    fn test_generator_divides_x_n_plus_one() {
        // Synthetic division of x^n + 1 by g over GF(2) must leave no
        // remainder: the code is cyclic.
        for (m, t) in [(4, 2), (5, 3), (6, 3), (8, 5)] {
            let n = (1usize << m) - 1;
            let g = genpoly(m, t);
            let deg = g.len() - 1;

            let mut rem = vec![0u8; n + 1];
            rem[0] = 1;
            rem[n] = 1;
            for i in (deg..=n).rev() {
                if rem[i] != 0 {
                    for (j, &c) in g.iter().enumerate() {
                        rem[i - deg + j] ^= c;
                    }
                }
            }
            assert!(
                rem.iter().all(|&c| c == 0),
                "m={m} t={t}: g does not divide x^n + 1"
            );
        }
    }

    #[test]
    fn test_coset_union_sizes() {
        // N=15, d=5 selects C1 (size 4) and C3 (size 4)
        assert_eq!(root_exponents(15, 5).len(), 8);
        // N=31: all odd-representative cosets have size 5
        assert_eq!(root_exponents(31, 3).len(), 5);
        assert_eq!(root_exponents(31, 7).len(), 15);
    }

    #[test]
    fn test_roots_closed_under_doubling() {
        let roots = root_exponents(63, 9);
        for &r in &roots {
            assert!(
                roots.contains(&((r * 2) % 63)),
                "root set not conjugate-closed at {r}"
            );
        }
    }
}
