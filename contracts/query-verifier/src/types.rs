use soroban_sdk::{BytesN, Vec, contracttype};

/// Groth16 verification key for BN254 curve.
///
/// Contains the public parameters needed to verify a Groth16 proof:
/// - `alpha`, `beta`, `gamma`, `delta`: Fixed elliptic curve points from the trusted setup
/// - `ic`: One G1 point per public signal plus one, used for computing the
///   public input component
///
/// Points use the same encoding as proof points: uncompressed big-endian
/// coordinates, an all-zero encoding meaning the point at infinity. The key
/// is handed to the constructor at deployment and kept in instance storage,
/// so one wasm serves whichever circuit a deployment pairs it with.
#[derive(Clone)]
#[contracttype]
pub struct VerificationKey {
    pub alpha: BytesN<64>,
    pub beta: BytesN<128>,
    pub gamma: BytesN<128>,
    pub delta: BytesN<128>,
    pub ic: Vec<BytesN<64>>,
}
