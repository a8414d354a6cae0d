//! Integer combinatorial primitives and a lexicographic k-combination
//! generator.
//!
//! All arithmetic is over `u64`. The counts used as loop bounds elsewhere
//! (S = 2^F systems, D = 2^S difference ids) grow double-exponentially, so
//! callers guard F before trusting these helpers; see
//! [`Taxonomy::build`][crate::taxonomy::Taxonomy::build].

use crate::error::{Error, Result};

/// Returns the product of all integers in the range `[from, to]`.
///
/// Returns 0 if either bound is 0.
pub fn product(from: u64, to: u64) -> u64 {
    if from == 0 || to == 0 {
        return 0;
    }
    let mut result = 1;
    let mut to = to;
    while from <= to {
        result *= to;
        to -= 1;
    }
    result
}

/// Returns `n!`, with `0! == 1`.
pub fn factorial(n: u64) -> u64 {
    if n == 0 {
        1
    } else {
        product(1, n)
    }
}

/// Returns the binomial coefficient `C(n, k)`.
pub fn combinations(n: u64, k: u64) -> u64 {
    product(n + 1 - k, n) / factorial(k)
}

/// Returns the sum of `C(n, i)` for all sample sizes `i` in `[k, n]`.
pub fn sum_of_combinations(n: u64, k: u64) -> u64 {
    let mut result = 0;
    let mut k = k;
    while k <= n {
        result += combinations(n, k);
        k += 1;
    }
    result
}

/// Returns `base` to the power of `exponent`.
pub fn power(base: u64, exponent: u64) -> u64 {
    let mut result = 1;
    let mut exponent = exponent;
    while exponent > 0 {
        result *= base;
        exponent -= 1;
    }
    result
}

/// Returns `2^exponent`.
pub fn power2(exponent: u64) -> u64 {
    power(2, exponent)
}

/// Integer division of `x` by `y`, rounded towards positive infinity.
pub fn ceil_div(x: u64, y: u64) -> u64 {
    x / y + u64::from(x % y != 0)
}

/// Lazy generator of all k-combinations of `n` symbol indices in strict
/// lexicographic order.
///
/// The state holds `k` strictly increasing indices into `0..n`. The first
/// combination is `[0, 1, .., k-1]`; each advance finds the rightmost
/// position that can be incremented without pushing the positions to its
/// right past the `n` boundary, increments it, and resets the following
/// positions to consecutive successors.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    state: Vec<usize>,
    exhausted: bool,
    started: bool,
}

impl Combinations {
    /// Creates the generator positioned at the first combination.
    ///
    /// Errors when `k > n` or `n == 0`.
    pub fn new(n: usize, k: usize) -> Result<Self> {
        if n == 0 || k == 0 || k > n {
            return Err(Error::CombinationSize { n, k });
        }
        Ok(Combinations {
            n,
            k,
            state: (0..k).collect(),
            exhausted: false,
            started: false,
        })
    }

    /// Returns the sample size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the number of symbols.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the current combination as a slice of indices.
    pub fn current(&self) -> &[usize] {
        &self.state
    }

    /// Mutates to the next lexicographic combination.
    ///
    /// Returns false once all combinations have been produced.
    pub fn advance(&mut self) -> bool {
        for i in (0..self.state.len()).rev() {
            // Position i may advance as long as the positions to its right
            // still fit below n.
            if self.state[i] + 1 + (self.k - 1 - i) < self.n {
                self.state[i] += 1;
                for j in i + 1..self.state.len() {
                    self.state[j] = self.state[j - 1] + 1;
                }
                return true;
            }
        }
        self.exhausted = true;
        false
    }

    /// Restarts the generator at the first combination.
    pub fn reset(&mut self) {
        self.state = (0..self.k).collect();
        self.exhausted = false;
        self.started = false;
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started && !self.advance() {
            return None;
        }
        self.started = true;
        Some(self.state.clone())
    }
}
