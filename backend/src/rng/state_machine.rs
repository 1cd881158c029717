//! Generator state machine
//!
//! Each slot of `mult_x` is an independent multiplicative accumulator
//! (`x = a * x + b mod 2^64`). Draws round-robin over the L slots via
//! `idx_mult`, and every output is XORed with the current XOR-feedback
//! accumulator `xor_x[idx_xor]`. One full sweep of `idx_mult` advances that
//! accumulator once and moves `idx_xor` to the next slot.

use serde::{Deserialize, Serialize};

use crate::conditioning::ParameterSet;
use crate::core::PrngError;

/// Mask keeping the low 53 bits of a draw (f64 mantissa width)
pub const F64_MANTISSA_MASK: u64 = (1u64 << 53) - 1;

/// Scale mapping a 53-bit integer onto [0, 1)
pub const F64_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Live generator state: parameter arrays plus cursor indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGeneratorState")]
pub struct GeneratorState {
    params: ParameterSet,
    idx_mult: usize,
    idx_xor: usize,
}

/// Unchecked wire form; cursors are range-checked by `from_parts`
#[derive(Deserialize)]
struct RawGeneratorState {
    params: ParameterSet,
    idx_mult: usize,
    idx_xor: usize,
}

impl TryFrom<RawGeneratorState> for GeneratorState {
    type Error = PrngError;

    fn try_from(raw: RawGeneratorState) -> Result<Self, Self::Error> {
        GeneratorState::from_parts(raw.params, raw.idx_mult, raw.idx_xor)
    }
}

impl GeneratorState {
    /// Start a generator from freshly derived parameters, cursors at 0
    ///
    /// # Errors
    /// [`PrngError::InconsistentState`] if the arrays differ in length, are
    /// empty, or break a parity invariant.
    pub fn new(params: ParameterSet) -> Result<Self, PrngError> {
        Self::from_parts(params, 0, 0)
    }

    /// Rebuild a generator at arbitrary cursor positions
    pub fn from_parts(
        params: ParameterSet,
        idx_mult: usize,
        idx_xor: usize,
    ) -> Result<Self, PrngError> {
        params.validate()?;
        let len = params.len();
        if idx_mult >= len || idx_xor >= len {
            return Err(PrngError::InconsistentState(format!(
                "cursor ({}, {}) out of range for {} slots",
                idx_mult, idx_xor, len
            )));
        }
        Ok(Self {
            params,
            idx_mult,
            idx_xor,
        })
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Number of slots per array (L)
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn idx_mult(&self) -> usize {
        self.idx_mult
    }

    pub fn idx_xor(&self) -> usize {
        self.idx_xor
    }

    /// Draw the next u64 and advance the state
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let len = self.params.len();
        let p = &mut self.params;
        let im = self.idx_mult;
        let ix = self.idx_xor;

        let value = p.mult_a[im]
            .wrapping_mul(p.mult_x[im])
            .wrapping_add(p.mult_b[im])
            ^ p.xor_x[ix];
        p.mult_x[im] = value;

        self.idx_mult += 1;
        if self.idx_mult == len {
            self.idx_mult = 0;

            p.xor_x[ix] = (p.xor_a[ix] ^ p.xor_x[ix]).wrapping_add(p.xor_b[ix]);

            self.idx_xor += 1;
            if self.idx_xor == len {
                self.idx_xor = 0;
            }
        }

        value
    }

    /// Draw the next f64 in [0, 1) with 53 bits of resolution
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() & F64_MANTISSA_MASK) as f64 * F64_SCALE
    }

    /// Draw `amount` u64 values in call order
    pub fn generate_u64(&mut self, amount: usize) -> Vec<u64> {
        (0..amount).map(|_| self.next_u64()).collect()
    }

    /// Draw `amount` f64 values in call order
    pub fn generate_f64(&mut self, amount: usize) -> Vec<f64> {
        (0..amount).map(|_| self.next_f64()).collect()
    }
}
