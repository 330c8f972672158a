//! Soft-float backend seam.
//!
//! The deterministic float library is an external capability: four entry
//! points, each taking two bit patterns and returning one, guaranteed
//! bit-identical across platforms. The verifier only routes to the right
//! entry point by operator; the trait keeps the binding swappable so tests
//! can substitute a backend that intentionally diverges.

use crate::bits::{bits_to_float, float_to_bits};
use crate::op::Operator;

/// Deterministic soft-float primitive: four entry points, bits in, bits out.
pub trait SoftFloat {
    fn add(&self, a: u32, b: u32) -> u32;
    fn sub(&self, a: u32, b: u32) -> u32;
    fn mul(&self, a: u32, b: u32) -> u32;
    fn div(&self, a: u32, b: u32) -> u32;

    /// Route to the entry point matching `op`, passing bits through unchanged.
    fn apply(&self, op: Operator, a: u32, b: u32) -> u32 {
        match op {
            Operator::Add => self.add(a, b),
            Operator::Sub => self.sub(a, b),
            Operator::Mul => self.mul(a, b),
            Operator::Div => self.div(a, b),
        }
    }
}

/// The shipped backend: a Rust rendition of the deterministic float library
/// (`float_add`/`float_sub`/`float_mul`/`float_div` over raw bit patterns).
/// Its cross-platform determinism is the property under test, not something
/// re-derived here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceSoftFloat;

impl SoftFloat for ReferenceSoftFloat {
    fn add(&self, a: u32, b: u32) -> u32 {
        float_to_bits(bits_to_float(a) + bits_to_float(b))
    }

    fn sub(&self, a: u32, b: u32) -> u32 {
        float_to_bits(bits_to_float(a) - bits_to_float(b))
    }

    fn mul(&self, a: u32, b: u32) -> u32 {
        float_to_bits(bits_to_float(a) * bits_to_float(b))
    }

    fn div(&self, a: u32, b: u32) -> u32 {
        float_to_bits(bits_to_float(a) / bits_to_float(b))
    }
}

/// Result pair for one `(a, b, op)` case. Transient: the two fields are
/// written to two separate truth streams, never persisted as a struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationResult {
    /// Bit pattern produced by the platform float unit.
    pub native: u32,
    /// Bit pattern produced by the deterministic soft-float backend.
    pub soft: u32,
}

/// Run one case through both implementations.
pub fn operate<B: SoftFloat>(backend: &B, a: u32, b: u32, op: Operator) -> OperationResult {
    OperationResult {
        native: op.apply_native(a, b),
        soft: backend.apply(op, a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{HALF, POS_INF, ZERO, is_nan_bits};

    #[test]
    fn dispatcher_runs_both_implementations() {
        let r = operate(&ReferenceSoftFloat, HALF, HALF, Operator::Add);
        assert_eq!(r.native, float_to_bits(1.0));
        assert_eq!(r.soft, float_to_bits(1.0));
    }

    #[test]
    fn dispatcher_is_deterministic_within_process() {
        let backend = ReferenceSoftFloat;
        for op in Operator::ALL {
            let first = operate(&backend, 0xDEAD_BEEF, 0x0000_0001, op);
            let second = operate(&backend, 0xDEAD_BEEF, 0x0000_0001, op);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn zero_div_half_example() {
        let r = operate(&ReferenceSoftFloat, ZERO, HALF, Operator::Div);
        assert_eq!(r.native, ZERO);
        assert_eq!(r.soft, ZERO);
    }

    #[test]
    fn inf_sub_inf_produces_nan_in_both() {
        let r = operate(&ReferenceSoftFloat, POS_INF, POS_INF, Operator::Sub);
        assert!(is_nan_bits(r.native));
        assert!(is_nan_bits(r.soft));
    }

    #[test]
    fn apply_routes_by_operator() {
        let backend = ReferenceSoftFloat;
        assert_eq!(
            backend.apply(Operator::Mul, HALF, HALF),
            float_to_bits(0.25)
        );
        assert_eq!(backend.apply(Operator::Sub, HALF, HALF), ZERO);
    }
}
