//! Parameter derivation
//!
//! Six diffuse-then-extract cycles turn the conditioned buffer into the six
//! parameter arrays. Each cycle continues from the buffer left by the
//! previous one, so later arrays are derived from earlier ones.
//!
//! The multiplier and increment arrays are then forced into the parities a
//! full-period multiplicative step needs:
//!
//! | array    | correction        | guarantees       |
//! |----------|-------------------|------------------|
//! | `mult_a` | `(v & !3) \| 1`   | `v % 4 == 1`     |
//! | `mult_b` | `(v & !1) \| 1`   | odd              |
//! | `xor_a`  | `v & !1`          | even             |
//! | `xor_b`  | `(v & !1) \| 1`   | odd              |

use serde::{Deserialize, Serialize};

use super::StateConditioner;
use crate::core::PrngError;

/// The six parameter arrays of a generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParameterSet")]
pub struct ParameterSet {
    /// Multiplicative accumulators (evolving)
    pub mult_x: Vec<u64>,
    /// Multipliers, `≡ 1 (mod 4)`
    pub mult_a: Vec<u64>,
    /// Increments, odd
    pub mult_b: Vec<u64>,
    /// XOR-feedback accumulators (evolving)
    pub xor_x: Vec<u64>,
    /// XOR masks, even
    pub xor_a: Vec<u64>,
    /// XOR-feedback increments, odd
    pub xor_b: Vec<u64>,
}

/// Unchecked wire form; only reaches callers through `validate`
#[derive(Deserialize)]
struct RawParameterSet {
    mult_x: Vec<u64>,
    mult_a: Vec<u64>,
    mult_b: Vec<u64>,
    xor_x: Vec<u64>,
    xor_a: Vec<u64>,
    xor_b: Vec<u64>,
}

impl TryFrom<RawParameterSet> for ParameterSet {
    type Error = PrngError;

    fn try_from(raw: RawParameterSet) -> Result<Self, Self::Error> {
        let params = ParameterSet {
            mult_x: raw.mult_x,
            mult_a: raw.mult_a,
            mult_b: raw.mult_b,
            xor_x: raw.xor_x,
            xor_a: raw.xor_a,
            xor_b: raw.xor_b,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Run the six extraction cycles and apply parity corrections
///
/// # Example
/// ```
/// use prng_core_rs::conditioning::{derive_parameters, StateConditioner};
///
/// let mut cond = StateConditioner::new(64, &[0x00]).unwrap();
/// let params = derive_parameters(&mut cond);
/// assert_eq!(params.len(), 8);
/// assert!(params.mult_a.iter().all(|a| a % 4 == 1));
/// ```
pub fn derive_parameters(conditioner: &mut StateConditioner) -> ParameterSet {
    let mut next_array = || {
        conditioner.diffuse();
        conditioner.extract_u64()
    };

    let mut params = ParameterSet {
        mult_x: next_array(),
        mult_a: next_array(),
        mult_b: next_array(),
        xor_x: next_array(),
        xor_a: next_array(),
        xor_b: next_array(),
    };
    params.apply_parity_corrections();
    params
}

impl ParameterSet {
    /// Array length L (all six arrays share it)
    pub fn len(&self) -> usize {
        self.mult_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mult_x.is_empty()
    }

    /// Force multiplier/increment parities in place
    pub fn apply_parity_corrections(&mut self) {
        for v in self.mult_a.iter_mut() {
            *v = (*v & !3) | 1;
        }
        for v in self.mult_b.iter_mut() {
            *v = (*v & !1) | 1;
        }
        for v in self.xor_a.iter_mut() {
            *v &= !1;
        }
        for v in self.xor_b.iter_mut() {
            *v = (*v & !1) | 1;
        }
    }

    /// Check equal non-zero lengths and all parity invariants
    pub fn validate(&self) -> Result<(), PrngError> {
        let len = self.len();
        if len == 0 {
            return Err(PrngError::InconsistentState(
                "parameter arrays are empty".to_string(),
            ));
        }

        let arrays: [(&str, &[u64]); 6] = [
            ("mult_x", &self.mult_x),
            ("mult_a", &self.mult_a),
            ("mult_b", &self.mult_b),
            ("xor_x", &self.xor_x),
            ("xor_a", &self.xor_a),
            ("xor_b", &self.xor_b),
        ];
        for (name, values) in arrays {
            if values.len() != len {
                return Err(PrngError::InconsistentState(format!(
                    "{} has length {}, expected {}",
                    name,
                    values.len(),
                    len
                )));
            }
        }

        check_parity("mult_a", &self.mult_a, |v| v % 4 == 1, "≡ 1 mod 4")?;
        check_parity("mult_b", &self.mult_b, |v| v % 2 == 1, "odd")?;
        check_parity("xor_a", &self.xor_a, |v| v % 2 == 0, "even")?;
        check_parity("xor_b", &self.xor_b, |v| v % 2 == 1, "odd")?;
        Ok(())
    }
}

fn check_parity(
    name: &str,
    values: &[u64],
    holds: impl Fn(u64) -> bool,
    rule: &str,
) -> Result<(), PrngError> {
    match values.iter().position(|&v| !holds(v)) {
        Some(i) => Err(PrngError::InconsistentState(format!(
            "{}[{}] = {:016X} is not {}",
            name, i, values[i], rule
        ))),
        None => Ok(()),
    }
}
