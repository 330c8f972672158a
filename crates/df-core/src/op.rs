//! The closed four-operator set under test.

use serde::{Deserialize, Serialize};

use crate::bits::{bits_to_float, float_to_bits};

/// Arithmetic operator tag. Pure dispatch key, no state.
///
/// The set is closed: the verifier exists to compare exactly these four
/// operations, so dispatch is a match with no catch-all arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Canonical sweep order. Generate and verify both walk operators in
    /// this order for every input pair, so truth-file line order is fixed.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Infix symbol for diagnostics.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Apply the platform's native IEEE-754 single-precision arithmetic
    /// (default round-to-nearest-even) to two bit patterns.
    ///
    /// Division by a zero pattern is deliberately not special-cased; the
    /// comparator downstream is what detects any divergence in inf/NaN
    /// propagation.
    pub fn apply_native(self, a: u32, b: u32) -> u32 {
        let x = bits_to_float(a);
        let y = bits_to_float(b);
        let result = match self {
            Operator::Add => x + y,
            Operator::Sub => x - y,
            Operator::Mul => x * y,
            Operator::Div => x / y,
        };
        float_to_bits(result)
    }
}
