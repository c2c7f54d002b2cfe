//! Bounded-distance decoding: syndromes, Berlekamp–Massey, Chien search.
//!
//! The bit path evaluates the received polynomial at α^1 .. α^2t directly.
//! The byte path re-encodes the received data and evaluates only the XOR
//! difference of the two parity blocks — the message portion contributes
//! a multiple of g(x) plus the recomputed parity, so the difference carries
//! the complete syndrome information at a fraction of the work.
//!
//! Syndromes and locator coefficients move between polynomial and log form
//! as the iteration proceeds; −1 is the log of zero and must never be
//! conflated with log 0 = α^0 = 1.

use crate::codec::Bch;

impl Bch {
    /// Decodes an N-bit received word (one element per bit), correcting up
    /// to t errors. Returns the corrected K-bit message, or `None` when
    /// the error pattern is beyond the correction capability.
    ///
    /// # Panics
    ///
    /// Panics if `received.len() != N`.
    pub fn decode_bits(&self, received: &[u8]) -> Option<Vec<u8>> {
        assert_eq!(received.len(), self.n, "received word must be N bits");
        let t2 = 2 * self.t;
        let n = self.n;

        let mut synd = vec![0i32; t2 + 1];
        let mut clean = true;
        for (i, s) in synd.iter_mut().enumerate().skip(1) {
            let mut acc = 0i32;
            for (j, &bit) in received.iter().enumerate() {
                if bit != 0 {
                    acc ^= self.gf.alpha_to[(i * j) % n];
                }
            }
            if acc != 0 {
                clean = false;
            }
            *s = self.gf.index_of[acc as usize];
        }
        if clean {
            return Some(received[self.parity_bits..].to_vec());
        }

        let locations = self.error_locations(&synd)?;
        let mut corrected = received.to_vec();
        for &loc in &locations {
            corrected[loc] ^= 1;
        }
        Some(corrected[self.parity_bits..].to_vec())
    }

    /// Decodes a packed codeword in place: `data` holds the message bytes
    /// (MSB-first stream order), `ecc` the parity bytes (LSB-first). Both
    /// buffers are corrected. Returns the number of corrected bit errors,
    /// or `None` when uncorrectable (buffers are then left unmodified).
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != ceil(K / 8)` or `ecc.len() != ecc_bytes`.
    pub fn decode_bytes(&self, data: &mut [u8], ecc: &mut [u8]) -> Option<usize> {
        assert_eq!(data.len(), (self.k + 7) / 8, "data must be ceil(K/8) bytes");
        assert_eq!(ecc.len(), self.ecc_bytes, "ecc must be ecc_bytes bytes");
        let t2 = 2 * self.t;
        let n = self.n;

        // Re-encode the received data; the diff against the received
        // parity is the polynomial we take syndromes of.
        let mut diff = vec![0u8; self.ecc_bytes];
        self.encode_ecc(data, &mut diff);
        for (d, &received) in diff.iter_mut().zip(ecc.iter()) {
            *d ^= received;
        }

        // Horner over the diff bytes, highest byte first: each step
        // multiplies the accumulator by α^(8i) and folds in one byte via
        // the syndrome table.
        let mut step = vec![0usize; t2 + 1];
        for (i, s) in step.iter_mut().enumerate().skip(1) {
            *s = (8 * i) % n;
        }

        let mut synd = vec![0i32; t2 + 1];
        for byte_idx in (0..self.ecc_bytes).rev() {
            let mut b = diff[byte_idx];
            if byte_idx == self.ecc_bytes - 1 {
                let valid = self.parity_bits % 8;
                if valid != 0 {
                    b &= (1 << valid) - 1;
                }
            }
            for i in 1..=t2 {
                if synd[i] != 0 {
                    let idx = (self.gf.index_of[synd[i] as usize] as usize + step[i]) % n;
                    synd[i] = self.gf.alpha_to[idx];
                }
                synd[i] ^= self.syndrome_lut[i][b as usize];
            }
        }

        let mut clean = true;
        for s in synd.iter_mut().skip(1) {
            if *s != 0 {
                clean = false;
            }
            *s = self.gf.index_of[*s as usize];
        }
        if clean {
            return Some(0);
        }

        let locations = self.error_locations(&synd)?;
        for &loc in &locations {
            if loc >= self.parity_bits {
                // Message bit: degree offset → MSB-first stream position.
                let stream_pos = self.k - 1 - (loc - self.parity_bits);
                data[stream_pos / 8] ^= 1 << (7 - (stream_pos % 8));
            } else {
                ecc[loc / 8] ^= 1 << (loc % 8);
            }
        }
        Some(locations.len())
    }

    /// Berlekamp–Massey followed by Chien search. `synd` is in log form
    /// (−1 for a zero syndrome) and must not be all-sentinel. Returns the
    /// bit positions of the errors when the locator degree stays within t
    /// and splits completely over the field; `None` otherwise.
    fn error_locations(&self, synd: &[i32]) -> Option<Vec<usize>> {
        let t = self.t;
        let t2 = 2 * t;
        let n = self.n as i32;
        let alpha = &self.gf.alpha_to;
        let index = &self.gf.index_of;

        // Per-step history: elp[u] is the locator candidate at step u
        // (polynomial form while live, log form once retired), disc[u] the
        // discrepancy in log form, deg[u] the locator degree, gap[u] the
        // step/degree slack u − deg[u] used to pick the best fallback row.
        let rows = t2 + 2;
        let mut elp = vec![vec![0i32; rows]; rows];
        let mut disc = vec![0i32; rows];
        let mut deg = vec![0usize; rows];
        let mut gap = vec![0i32; rows];

        disc[0] = 0;
        disc[1] = synd[1];
        elp[0][0] = 0;
        elp[1][0] = 1;
        for i in 1..t2 {
            elp[0][i] = -1;
            elp[1][i] = 0;
        }
        deg[0] = 0;
        deg[1] = 0;
        gap[0] = -1;
        gap[1] = 0;

        let mut u = 0usize;
        loop {
            u += 1;
            if disc[u] == -1 {
                // Zero discrepancy: carry the locator forward unchanged.
                let (head, tail) = elp.split_at_mut(u + 1);
                let (prev, next) = (&mut head[u], &mut tail[0]);
                deg[u + 1] = deg[u];
                for i in 0..=deg[u] {
                    next[i] = prev[i];
                    prev[i] = index[prev[i] as usize];
                }
            } else {
                // Most recent earlier step with a nonzero discrepancy,
                // preferring the largest slack; ties keep the lowest q.
                let mut q = u - 1;
                while disc[q] == -1 && q > 0 {
                    q -= 1;
                }
                if q > 0 {
                    let mut j = q;
                    loop {
                        j -= 1;
                        if disc[j] != -1 && gap[q] < gap[j] {
                            q = j;
                        }
                        if j == 0 {
                            break;
                        }
                    }
                }

                deg[u + 1] = deg[u].max(deg[q] + u - q);

                let (head, tail) = elp.split_at_mut(u + 1);
                let next = &mut tail[0];
                {
                    let prev_q = &head[q];
                    for i in 0..=deg[q] {
                        if prev_q[i] != -1 {
                            let e = (disc[u] - disc[q] + n + prev_q[i]) % n;
                            next[i + u - q] = alpha[e as usize];
                        }
                    }
                }
                let prev_u = &mut head[u];
                for i in 0..=deg[u] {
                    next[i] ^= prev_u[i];
                    prev_u[i] = index[prev_u[i] as usize];
                }
            }
            gap[u + 1] = u as i32 - deg[u + 1] as i32;

            if u < t2 {
                let mut d = if synd[u + 1] != -1 {
                    alpha[synd[u + 1] as usize]
                } else {
                    0
                };
                for i in 1..=deg[u + 1] {
                    if synd[u + 1 - i] != -1 && elp[u + 1][i] != 0 {
                        let e = (synd[u + 1 - i] + index[elp[u + 1][i] as usize]) % n;
                        d ^= alpha[e as usize];
                    }
                }
                disc[u + 1] = index[d as usize];
            }

            if !(u < t2 && deg[u + 1] <= t) {
                break;
            }
        }

        u += 1;
        if deg[u] > t {
            return None;
        }

        for i in 0..=deg[u] {
            elp[u][i] = index[elp[u][i] as usize];
        }

        // Chien search: step every register by its own degree and collect
        // the exponents where the locator evaluates to zero.
        let l = deg[u];
        let mut reg = vec![0i32; l + 1];
        reg[1..].copy_from_slice(&elp[u][1..=l]);
        let mut locations = Vec::with_capacity(l);
        for i in 1..=self.n {
            let mut q = 1i32;
            for (j, r) in reg.iter_mut().enumerate().skip(1) {
                if *r != -1 {
                    let mut val = *r + j as i32;
                    if val >= n {
                        val -= n;
                    }
                    *r = val;
                    q ^= alpha[val as usize];
                }
            }
            if q == 0 {
                locations.push(self.n - i);
            }
        }

        if locations.len() == l {
            Some(locations)
        } else {
            None
        }
    }
}
