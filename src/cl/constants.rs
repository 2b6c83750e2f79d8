use crate::bn::BigNumber;

/// Bit length of the fixed lower bound of the signature exponent `e`.
pub const LARGE_E_START: usize = 596;
/// Number of squares in the range proof decomposition.
pub const ITERATION: usize = 4;
pub const DELTA: &str = "DELTA";

// Constants that are used throughout the CL signatures code, so avoiding recomputation.
lazy_static! {
    pub static ref LARGE_E_START_VALUE: BigNumber = BigNumber::power_of_two(LARGE_E_START);
}
