//! This module provides temporary types for the bn254 curve until Stellar
//! introduces native precompiles.
//!
//! The `Fr`, `G1Affine`, and `G2Affine` types from the ark crate cannot be
//! directly used because they lack XDR (de)serialization support. As a
//! workaround, points travel as fixed-size byte strings and are parsed into
//! their ark equivalents here, with full validation: coordinates must be
//! canonical field elements, points must lie on the curve and G2 points must
//! sit in the prime-order subgroup. Once Stellar's bn254 precompiles become
//! available, this parsing can be replaced with the native implementations.

pub mod bn254;
