//! Decimal constants supplied by the arbitrary-precision layer.
//!
//! Only the constants the rewrite passes consume live here; arithmetic on
//! them belongs to the optimizer.

/// 2^256 - 1, the reserved maximum word value. Also stands for "no upper
/// bound" in operator arities and "no explicit index" in storage paths.
pub const TT256M1: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";
