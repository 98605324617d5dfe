use soroban_sdk::{BytesN, contracttype};

/// A public input to the identity-query circuit (32-byte big-endian scalar).
pub type PublicSignal = BytesN<32>;

/// A root of the registration accumulator (32 bytes).
pub type RegistrationRoot = BytesN<32>;

/// Byte length of a scalar field element.
pub const SCALAR_SIZE: usize = 32;

/// Byte length of an uncompressed G1 point: `x || y`, big-endian coordinates.
pub const G1_SIZE: usize = SCALAR_SIZE * 2;

/// Byte length of an uncompressed G2 point: `x_0 || x_1 || y_0 || y_1`,
/// big-endian coordinates.
pub const G2_SIZE: usize = SCALAR_SIZE * 4;

/// A Groth16 proof over BN254, as produced by the off-chain prover.
///
/// Points are uncompressed big-endian coordinate strings. An all-zero
/// encoding denotes the point at infinity.
#[derive(Clone)]
#[contracttype]
pub struct ProofPoints {
    pub a: BytesN<64>,
    pub b: BytesN<128>,
    pub c: BytesN<64>,
}
