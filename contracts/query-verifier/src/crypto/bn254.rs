use alloc::vec::Vec;

use ark_bn254::{Fq, Fq2, Fr as AFr, G1Affine as AG1Affine, G2Affine as AG2Affine};
use ark_ff::{BigInteger256, PrimeField, Zero};
use claim_interface::ProofPoints;

use crate::Groth16Error;
use crate::types::VerificationKey;

/// Groth16 proof parsed into arkworks points.
pub struct ArkProof {
    pub a: AG1Affine,
    pub b: AG2Affine,
    pub c: AG1Affine,
}

impl TryFrom<&ProofPoints> for ArkProof {
    type Error = Groth16Error;

    fn try_from(points: &ProofPoints) -> Result<Self, Self::Error> {
        Ok(Self {
            a: g1_from_bytes(&points.a.to_array()).ok_or(Groth16Error::MalformedProofPoints)?,
            b: g2_from_bytes(&points.b.to_array()).ok_or(Groth16Error::MalformedProofPoints)?,
            c: g1_from_bytes(&points.c.to_array()).ok_or(Groth16Error::MalformedProofPoints)?,
        })
    }
}

/// Verification key parsed into arkworks points.
pub struct ArkVerificationKey {
    pub alpha: AG1Affine,
    pub beta: AG2Affine,
    pub gamma: AG2Affine,
    pub delta: AG2Affine,
    pub ic: Vec<AG1Affine>,
}

impl TryFrom<&VerificationKey> for ArkVerificationKey {
    type Error = Groth16Error;

    fn try_from(vk: &VerificationKey) -> Result<Self, Self::Error> {
        if vk.ic.is_empty() {
            return Err(Groth16Error::MalformedVerificationKey);
        }

        let mut ic = Vec::with_capacity(vk.ic.len() as usize);
        for point in vk.ic.iter() {
            ic.push(
                g1_from_bytes(&point.to_array())
                    .ok_or(Groth16Error::MalformedVerificationKey)?,
            );
        }

        Ok(Self {
            alpha: g1_from_bytes(&vk.alpha.to_array())
                .ok_or(Groth16Error::MalformedVerificationKey)?,
            beta: g2_from_bytes(&vk.beta.to_array())
                .ok_or(Groth16Error::MalformedVerificationKey)?,
            gamma: g2_from_bytes(&vk.gamma.to_array())
                .ok_or(Groth16Error::MalformedVerificationKey)?,
            delta: g2_from_bytes(&vk.delta.to_array())
                .ok_or(Groth16Error::MalformedVerificationKey)?,
            ic,
        })
    }
}

/// Parses a G1 point from `x || y` big-endian coordinates.
///
/// An all-zero encoding is the point at infinity. Any other encoding must
/// have canonical coordinates and lie on the curve.
pub fn g1_from_bytes(bytes: &[u8; 64]) -> Option<AG1Affine> {
    let x = fq_from_bytes(bytes[..32].try_into().ok()?)?;
    let y = fq_from_bytes(bytes[32..].try_into().ok()?)?;

    if x.is_zero() && y.is_zero() {
        return Some(AG1Affine::identity());
    }

    let point = AG1Affine::new_unchecked(x, y);
    point.is_on_curve().then_some(point)
}

/// Parses a G2 point from `x_0 || x_1 || y_0 || y_1` big-endian coordinates.
///
/// An all-zero encoding is the point at infinity. Any other encoding must
/// have canonical coordinates, lie on the twist and sit in the prime-order
/// subgroup; the pairing is only defined on the subgroup, so unchecked
/// twist points would let malformed proofs through.
pub fn g2_from_bytes(bytes: &[u8; 128]) -> Option<AG2Affine> {
    let x_0 = fq_from_bytes(bytes[..32].try_into().ok()?)?;
    let x_1 = fq_from_bytes(bytes[32..64].try_into().ok()?)?;
    let y_0 = fq_from_bytes(bytes[64..96].try_into().ok()?)?;
    let y_1 = fq_from_bytes(bytes[96..].try_into().ok()?)?;

    let x = Fq2::new(x_0, x_1);
    let y = Fq2::new(y_0, y_1);

    if x.is_zero() && y.is_zero() {
        return Some(AG2Affine::identity());
    }

    let point = AG2Affine::new_unchecked(x, y);
    (point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve()).then_some(point)
}

/// Parses a scalar field element, rejecting values at or above the field
/// modulus so that every scalar has exactly one accepted encoding.
pub fn fr_from_bytes(bytes: &[u8; 32]) -> Option<AFr> {
    AFr::from_bigint(bytes_to_limbs(bytes))
}

fn fq_from_bytes(bytes: &[u8; 32]) -> Option<Fq> {
    Fq::from_bigint(bytes_to_limbs(bytes))
}

/// Converts 32 bytes in big-endian format to a 4-limb little-endian representation.
///
/// This helper function performs the endianness conversion required by the
/// arkworks library. It takes a 32-byte big-endian array and converts it to
/// a `BigInteger256` with four u64 limbs in little-endian order.
fn bytes_to_limbs(bytes: &[u8; 32]) -> BigInteger256 {
    let mut limbs = [0u64; 4];
    for i in 0..4 {
        let start = i * 8;
        limbs[3 - i] = u64::from_be_bytes(bytes[start..start + 8].try_into().unwrap());
    }
    BigInteger256::new(limbs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{G1Projective, G2Projective};
    use ark_ec::Group;
    use ark_ff::{BigInt, BigInteger, PrimeField};

    #[test]
    fn test_fr_conversion_known_value() {
        // Create a known scalar value
        let expected = AFr::from(42u64);
        let bigint: BigInt<4> = expected.into_bigint();

        // Convert to big-endian bytes
        let bytes: [u8; 32] = bigint.to_bytes_be().try_into().unwrap();

        assert_eq!(fr_from_bytes(&bytes), Some(expected));
    }

    #[test]
    fn test_fr_rejects_non_canonical_value() {
        // The scalar field modulus itself is the smallest non-canonical encoding
        let modulus: [u8; 32] =
            hex::decode("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001")
                .unwrap()
                .try_into()
                .unwrap();

        assert_eq!(fr_from_bytes(&modulus), None);
    }

    #[test]
    fn test_g1_conversion_generator() {
        // BN254 G1 generator point
        let generator = AG1Affine::from(G1Projective::generator());
        let (x_bigint, y_bigint) = (generator.x.into_bigint(), generator.y.into_bigint());

        // Convert to big-endian bytes
        let x_bytes: [u8; 32] = x_bigint.to_bytes_be().try_into().unwrap();
        let y_bytes: [u8; 32] = y_bigint.to_bytes_be().try_into().unwrap();

        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&x_bytes);
        bytes[32..].copy_from_slice(&y_bytes);

        assert_eq!(g1_from_bytes(&bytes), Some(generator));
    }

    #[test]
    fn test_g1_zero_bytes_is_infinity() {
        let point = g1_from_bytes(&[0u8; 64]).unwrap();
        assert!(point.infinity);
    }

    #[test]
    fn test_g1_rejects_point_off_curve() {
        // (1, 1) does not satisfy y^2 = x^3 + 3
        let mut bytes = [0u8; 64];
        bytes[31] = 1;
        bytes[63] = 1;

        assert_eq!(g1_from_bytes(&bytes), None);
    }

    #[test]
    fn test_g1_rejects_non_canonical_coordinate() {
        // x = base field modulus, y = 2: x is not a canonical encoding
        let modulus: [u8; 32] =
            hex::decode("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47")
                .unwrap()
                .try_into()
                .unwrap();

        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&modulus);
        bytes[63] = 2;

        assert_eq!(g1_from_bytes(&bytes), None);
    }

    #[test]
    fn test_g2_conversion_generator() {
        // BN254 G2 generator point
        let generator = AG2Affine::from(G2Projective::generator());
        let (x, y) = (generator.x, generator.y);

        // Convert Fq2 coordinates to bytes
        let x0_bytes: [u8; 32] = x.c0.into_bigint().to_bytes_be().try_into().unwrap();
        let x1_bytes: [u8; 32] = x.c1.into_bigint().to_bytes_be().try_into().unwrap();
        let y0_bytes: [u8; 32] = y.c0.into_bigint().to_bytes_be().try_into().unwrap();
        let y1_bytes: [u8; 32] = y.c1.into_bigint().to_bytes_be().try_into().unwrap();

        let mut bytes = [0u8; 128];
        bytes[..32].copy_from_slice(&x0_bytes);
        bytes[32..64].copy_from_slice(&x1_bytes);
        bytes[64..96].copy_from_slice(&y0_bytes);
        bytes[96..].copy_from_slice(&y1_bytes);

        assert_eq!(g2_from_bytes(&bytes), Some(generator));
    }

    #[test]
    fn test_g2_zero_bytes_is_infinity() {
        let point = g2_from_bytes(&[0u8; 128]).unwrap();
        assert!(point.infinity);
    }

    #[test]
    fn test_g2_rejects_point_off_curve() {
        let mut bytes = [0u8; 128];
        bytes[31] = 1;
        bytes[127] = 1;

        assert_eq!(g2_from_bytes(&bytes), None);
    }
}
