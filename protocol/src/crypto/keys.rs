//! # Key Material
//!
//! Ed25519 secrets and the propositions (public keys) boxes are locked to.
//!
//! A [`PublicKey25519Proposition`] is the condition written on a box: only
//! whoever knows the matching [`PrivateKey25519`] can produce a proof that
//! unlocks it. Secrets live in the wallet; this crate only borrows them long
//! enough to sign.
//!
//! ## Security considerations
//!
//! - Private keys are zeroized on drop (ed25519-dalek does this for us).
//! - `PrivateKey25519` has no serde impls. Exporting a secret must be an
//!   explicit call to [`PrivateKey25519::to_bytes`].
//! - Debug output never contains secret bytes.

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::signature::Signature25519;
use crate::config::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};

/// Errors that can occur while decoding key material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("invalid secret key bytes: wrong length or malformed hex")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,
}

// ---------------------------------------------------------------------------
// PublicKey25519Proposition
// ---------------------------------------------------------------------------

/// The public half of an Ed25519 keypair, used as a spending condition.
///
/// Boxes name one of these as their owner. Equality and hashing are over the
/// raw 32 bytes, so a proposition can key a `HashMap` of secrets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PublicKey25519Proposition {
    #[serde(with = "hex_bytes")]
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl PublicKey25519Proposition {
    /// Wraps raw bytes without checking that they decode to a curve point.
    ///
    /// Verification against an invalid point simply fails, so this is safe,
    /// but prefer [`try_from_slice`](Self::try_from_slice) for untrusted input.
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Parses and validates a proposition from a byte slice.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] =
            slice.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        let proposition = Self { bytes };
        proposition.to_verifying_key()?;
        Ok(proposition)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// Convert to a dalek `VerifyingKey`. Fails if the bytes are not a point.
    pub fn to_verifying_key(&self) -> Result<VerifyingKey, KeyError> {
        VerifyingKey::from_bytes(&self.bytes).map_err(|_| KeyError::InvalidPublicKey)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parses a hex-encoded proposition, validating the curve point.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::try_from_slice(&bytes)
    }

    /// Base58 form, the compact encoding shown to users as an address.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.bytes).into_string()
    }
}

impl fmt::Display for PublicKey25519Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey25519Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey25519Proposition({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// PrivateKey25519
// ---------------------------------------------------------------------------

/// An Ed25519 secret able to unlock boxes owned by its public image.
pub struct PrivateKey25519 {
    signing_key: SigningKey,
}

impl PrivateKey25519 {
    /// Generate a fresh secret from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Builds a secret deterministically from a 32-byte seed.
    ///
    /// A weak seed gives a weak key. Tests use this for fixed fixtures.
    pub fn from_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Reconstruct a secret from its hex encoding.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidSecretKey)?;
        let seed: [u8; SECRET_KEY_LENGTH] =
            bytes.as_slice().try_into().map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_seed(&seed))
    }

    /// The proposition this secret can satisfy.
    pub fn public_image(&self) -> PublicKey25519Proposition {
        PublicKey25519Proposition {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// Returns `true` if this secret unlocks boxes locked to `proposition`.
    pub fn owns(&self, proposition: &PublicKey25519Proposition) -> bool {
        self.public_image() == *proposition
    }

    /// Signs `message`, producing a proof bound to this secret's public image.
    ///
    /// Ed25519 signing is deterministic: same key, same message, same proof.
    pub fn sign(&self, message: &[u8]) -> Signature25519 {
        Signature25519::from_array(self.signing_key.sign(message).to_bytes())
    }

    /// Exports the raw 32-byte secret. Don't log it.
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.signing_key.to_bytes()
    }
}

impl Clone for PrivateKey25519 {
    fn clone(&self) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&self.signing_key.to_bytes()),
        }
    }
}

impl PartialEq for PrivateKey25519 {
    /// Compares public images, never secret bytes.
    fn eq(&self, other: &Self) -> bool {
        self.public_image() == other.public_image()
    }
}

impl Eq for PrivateKey25519 {}

impl fmt::Debug for PrivateKey25519 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey25519(pub={})", self.public_image().to_hex())
    }
}

/// Serde adapter: fixed-size byte arrays as lowercase hex strings.
pub(crate) mod hex_bytes {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S, const N: usize>(bytes: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = hex::decode(&s).map_err(D::Error::custom)?;
        raw.as_slice()
            .try_into()
            .map_err(|_| D::Error::invalid_length(raw.len(), &"a fixed-length hex string"))
    }
}
