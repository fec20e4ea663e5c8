//! # Proofs of Knowledge
//!
//! A proof is what unlocks a box: evidence that the spender knows the secret
//! behind the box's proposition, bound to a specific message (the
//! transaction being authorized).
//!
//! [`Signature25519`] is the only proof scheme. It is a fixed-length value
//! type. The bytes are checked for length when the value is built and for
//! cryptographic validity only when [`Signature25519::is_valid`] is called
//! with a proposition and message. Constructing a proof never tells you
//! whether it is any good.
//!
//! ## Two ways in
//!
//! - [`Signature25519::new`] / `TryFrom` is for callers who hold bytes they
//!   believe are well-formed. A length mismatch is a caller bug.
//! - [`Signature25519::parse_bytes`] is for bytes that came from outside
//!   (disk, network, JSON). Malformed input is expected there, so it is
//!   logged at debug level and returned as an ordinary error.
//!
//! Neither path panics.

use ed25519_dalek::Signature as DalekSignature;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use super::keys::PublicKey25519Proposition;
use crate::config::SIGNATURE_LENGTH;

/// Errors raised when decoding a proof from bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("incorrect signature length, {} expected, {found} found", SIGNATURE_LENGTH)]
    InvalidLength { found: usize },

    #[error("signature is not valid hex: {0}")]
    InvalidHex(String),
}

/// Evidence that the holder of a secret authorized a message.
///
/// Implementors are immutable values. `is_valid` must be pure: same inputs,
/// same answer, no side effects.
pub trait ProofOfKnowledge {
    /// The public condition this proof is checked against.
    type Proposition;

    fn is_valid(&self, proposition: &Self::Proposition, message: &[u8]) -> bool;

    /// An owned copy of the proof's encoding.
    fn bytes(&self) -> Vec<u8>;
}

/// A 64-byte Ed25519 signature used as a proof of knowledge.
///
/// Equality is structural: two proofs are equal iff their bytes are.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature25519 {
    bytes: [u8; SIGNATURE_LENGTH],
}

impl Signature25519 {
    /// Builds a proof from raw bytes, copying them.
    ///
    /// # Errors
    ///
    /// [`SignatureError::InvalidLength`] unless `bytes.len() == SIGNATURE_LENGTH`.
    pub fn new(bytes: &[u8]) -> Result<Self, SignatureError> {
        let bytes: [u8; SIGNATURE_LENGTH] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidLength { found: bytes.len() })?;
        Ok(Self { bytes })
    }

    pub(crate) fn from_array(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Decodes a proof at a deserialization boundary.
    ///
    /// Identical to [`new`](Self::new) in outcome; use this where malformed
    /// input is an expected, recoverable condition.
    pub fn parse_bytes(raw: &[u8]) -> Result<Self, SignatureError> {
        Self::new(raw).map_err(|err| {
            debug!(len = raw.len(), "rejecting malformed signature bytes");
            err
        })
    }

    /// Verifies this proof against `proposition` and `message`.
    ///
    /// Uses strict Ed25519 verification, which rejects small-order keys and
    /// non-canonical encodings. A proposition whose bytes are not a curve
    /// point yields `false`.
    pub fn is_valid(&self, proposition: &PublicKey25519Proposition, message: &[u8]) -> bool {
        let Ok(verifying_key) = proposition.to_verifying_key() else {
            return false;
        };
        let signature = DalekSignature::from_bytes(&self.bytes);
        verifying_key.verify_strict(message, &signature).is_ok()
    }

    /// Returns a copy of the signature bytes.
    ///
    /// The copy is independent: mutating it does not affect this proof.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.bytes
    }

    /// Hex encoding, 128 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    pub fn from_hex(s: &str) -> Result<Self, SignatureError> {
        let raw = hex::decode(s).map_err(|e| SignatureError::InvalidHex(e.to_string()))?;
        Self::parse_bytes(&raw)
    }
}

impl ProofOfKnowledge for Signature25519 {
    type Proposition = PublicKey25519Proposition;

    fn is_valid(&self, proposition: &PublicKey25519Proposition, message: &[u8]) -> bool {
        Signature25519::is_valid(self, proposition, message)
    }

    fn bytes(&self) -> Vec<u8> {
        Signature25519::bytes(self)
    }
}

impl TryFrom<&[u8]> for Signature25519 {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl TryFrom<Vec<u8>> for Signature25519 {
    type Error = SignatureError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(&bytes)
    }
}

impl Serialize for Signature25519 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature25519 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

impl fmt::Display for Signature25519 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Signature25519 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        write!(f, "Signature25519({}...{})", &hex_str[..8], &hex_str[120..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::PrivateKey25519;

    const MESSAGE: &[u8] = b"spend box 0x01 to alice, fee 5";

    fn fixture_key() -> PrivateKey25519 {
        PrivateKey25519::from_seed(&[0x11; 32])
    }

    #[test]
    fn valid_for_signer_and_message() {
        let key = fixture_key();
        let proof = key.sign(MESSAGE);
        assert!(proof.is_valid(&key.public_image(), MESSAGE));
    }

    #[test]
    fn flipping_any_message_byte_invalidates() {
        let key = fixture_key();
        let proposition = key.public_image();
        let proof = key.sign(MESSAGE);

        for i in 0..MESSAGE.len() {
            let mut tampered = MESSAGE.to_vec();
            tampered[i] ^= 0x01;
            assert!(
                !proof.is_valid(&proposition, &tampered),
                "flip at byte {} still validated",
                i
            );
        }
    }

    #[test]
    fn wrong_proposition_is_invalid() {
        let proof = fixture_key().sign(MESSAGE);
        let other = PrivateKey25519::from_seed(&[0x22; 32]).public_image();
        assert!(!proof.is_valid(&other, MESSAGE));
    }

    #[test]
    fn small_order_proposition_is_invalid() {
        let proof = fixture_key().sign(MESSAGE);
        // Identity point: small order, rejected by strict verification.
        let mut identity = [0u8; 32];
        identity[0] = 1;
        let bogus = PublicKey25519Proposition::from_bytes(identity);
        assert!(!proof.is_valid(&bogus, MESSAGE));
    }

    #[test]
    fn is_valid_is_deterministic() {
        let key = fixture_key();
        let proof = key.sign(MESSAGE);
        let prop = key.public_image();
        assert_eq!(proof.is_valid(&prop, MESSAGE), proof.is_valid(&prop, MESSAGE));
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        for len in [0usize, 1, 32, 63, 65, 128] {
            let raw = vec![0xAB; len];
            assert_eq!(
                Signature25519::new(&raw),
                Err(SignatureError::InvalidLength { found: len })
            );
            assert!(Signature25519::parse_bytes(&raw).is_err());
            assert!(Signature25519::try_from(raw).is_err());
        }
    }

    #[test]
    fn parse_bytes_roundtrip() {
        let proof = fixture_key().sign(MESSAGE);
        assert_eq!(Signature25519::parse_bytes(&proof.bytes()), Ok(proof));

        let arbitrary = [0x5A; SIGNATURE_LENGTH];
        let parsed = Signature25519::parse_bytes(&arbitrary).unwrap();
        assert_eq!(parsed.bytes(), arbitrary.to_vec());
    }

    #[test]
    fn construction_copies_the_buffer() {
        let mut raw = vec![0x01; SIGNATURE_LENGTH];
        let proof = Signature25519::new(&raw).unwrap();
        raw[0] = 0xFF;
        assert_eq!(proof.as_bytes()[0], 0x01);
    }

    #[test]
    fn bytes_returns_an_independent_copy() {
        let proof = Signature25519::new(&[0x02; SIGNATURE_LENGTH]).unwrap();
        let mut out = proof.bytes();
        out[10] = 0xEE;
        assert_eq!(proof.bytes(), vec![0x02; SIGNATURE_LENGTH]);
    }

    #[test]
    fn equality_is_structural() {
        let a = Signature25519::new(&[0x03; SIGNATURE_LENGTH]).unwrap();
        let b = Signature25519::new(&[0x03; SIGNATURE_LENGTH]).unwrap();
        let mut other = [0x03; SIGNATURE_LENGTH];
        other[63] = 0x04;
        let c = Signature25519::new(&other).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn trait_object_view_matches_inherent_methods() {
        let key = fixture_key();
        let proof = key.sign(MESSAGE);
        let pok: &dyn ProofOfKnowledge<Proposition = PublicKey25519Proposition> = &proof;
        assert!(pok.is_valid(&key.public_image(), MESSAGE));
        assert_eq!(pok.bytes(), proof.bytes());
    }

    #[test]
    fn json_uses_hex_and_rejects_bad_length() {
        let proof = fixture_key().sign(MESSAGE);
        let json = serde_json::to_string(&proof).unwrap();
        assert_eq!(json, format!("\"{}\"", proof.to_hex()));
        let back: Signature25519 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, proof);

        let short = format!("\"{}\"", hex::encode([0u8; 10]));
        assert!(serde_json::from_str::<Signature25519>(&short).is_err());
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(matches!(
            Signature25519::from_hex("zz"),
            Err(SignatureError::InvalidHex(_))
        ));
    }
}
