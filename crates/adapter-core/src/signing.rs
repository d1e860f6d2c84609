//! # Signing Identity (secp256k1 + Keccak-256)
//!
//! A single long-lived secp256k1 key that endorses deal commitments.
//!
//! ## Interoperability notes
//!
//! - Hashing is Keccak-256 with the original padding (`sha3::Keccak256`),
//!   NOT NIST SHA3-256. The on-chain verifier computes the same digest;
//!   any mismatch makes verification revert with no diagnostic.
//! - Signing is RFC 6979 deterministic with low-S normalization
//!   (EIP-2), so the (v, r, s) triple for a given key and digest is
//!   reproducible across processes and platforms.
//! - The recovery byte `v` is normalized to {27, 28} as the verifying
//!   contract expects.

use crate::domain::deal::{Bytes32, SignatureParts};
use crate::domain::errors::AdapterError;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use sha3::{Digest, Keccak256};
use zeroize::Zeroize;

/// A 32-byte digest.
pub type Hash32 = [u8; 32];

/// Keccak-256 over an arbitrary byte sequence.
pub fn keccak256(data: &[u8]) -> Hash32 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&hasher.finalize());
    hash
}

/// A recoverable ECDSA signature over a 32-byte digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// First scalar component.
    pub r: [u8; 32],
    /// Second scalar component, low-S normalized.
    pub s: [u8; 32],
    /// Raw recovery id (0 or 1).
    pub recovery_id: u8,
}

impl RecoverableSignature {
    /// Decompose into the (v, r, s) convention the on-chain verifier
    /// expects: `v` in {27, 28}, `r` and `s` as 32-byte words.
    pub fn split(&self) -> SignatureParts {
        SignatureParts {
            v: 27 + self.recovery_id,
            r: Bytes32(self.r),
            s: Bytes32(self.s),
        }
    }

    /// Flat 65-byte encoding: r || s || v.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = 27 + self.recovery_id;
        out
    }

    /// Flat encoding as `0x`-prefixed hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

/// Wraps the adapter's long-lived private key. Immutable after
/// construction and safe to share across request handlers.
pub struct SigningIdentity {
    signing_key: SigningKey,
}

impl SigningIdentity {
    /// Construct from a hex-encoded 32-byte private key (`0x` prefix
    /// optional). Any failure here is a process misconfiguration and
    /// should abort startup.
    pub fn from_hex(key_hex: &str) -> Result<Self, AdapterError> {
        let stripped = key_hex.strip_prefix("0x").unwrap_or(key_hex);
        let mut bytes = hex::decode(stripped).map_err(|e| AdapterError::Signing {
            reason: format!("private key is not valid hex: {e}"),
        })?;
        if bytes.len() != 32 {
            bytes.zeroize();
            return Err(AdapterError::Signing {
                reason: format!("private key must be 32 bytes, got {}", bytes.len()),
            });
        }
        let result = Self::from_bytes(&bytes);
        bytes.zeroize();
        result
    }

    /// Construct from raw key bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AdapterError> {
        let signing_key = SigningKey::from_slice(bytes).map_err(|_| AdapterError::Signing {
            reason: "invalid secp256k1 private key".into(),
        })?;
        Ok(Self { signing_key })
    }

    /// Sign a 32-byte digest, producing a recoverable signature.
    ///
    /// Deterministic (RFC 6979): the same digest always yields the
    /// same signature under this key. No I/O, no RNG.
    pub fn sign(&self, digest: &Hash32) -> Result<RecoverableSignature, AdapterError> {
        let (signature, recovery_id): (Signature, RecoveryId) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| AdapterError::Signing {
                reason: format!("signing rejected digest: {e}"),
            })?;

        let bytes: [u8; 64] = signature.to_bytes().into();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(RecoverableSignature {
            r,
            s,
            recovery_id: recovery_id.to_byte(),
        })
    }

    /// The identity's Ethereum-style address: Keccak-256 of the
    /// uncompressed public key (without the 0x04 prefix), last 20
    /// bytes.
    pub fn address(&self) -> [u8; 20] {
        let verifying_key = self.signing_key.verifying_key();
        let point = verifying_key.to_encoded_point(false);
        let hash = keccak256(&point.as_bytes()[1..]);
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        address
    }

    /// Address as `0x`-prefixed hex, for logs and health responses.
    pub fn address_hex(&self) -> String {
        format!("0x{}", hex::encode(self.address()))
    }
}

impl Drop for SigningIdentity {
    fn drop(&mut self) {
        let mut bytes: [u8; 32] = self.signing_key.to_bytes().into();
        bytes.zeroize();
    }
}

/// Recover the signer address from a digest and signature parts.
///
/// Test-facing counterpart of [`SigningIdentity::address`]: reassembles
/// (v, r, s) and asks the curve who signed.
pub fn recover_address(digest: &Hash32, parts: &SignatureParts) -> Result<[u8; 20], AdapterError> {
    let recovery_id = match parts.v {
        27 | 28 => RecoveryId::from_byte(parts.v - 27),
        v @ 0 | v @ 1 => RecoveryId::from_byte(v),
        _ => None,
    }
    .ok_or_else(|| AdapterError::Decoding {
        reason: format!("invalid recovery byte {}", parts.v),
    })?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(parts.r.as_bytes());
    sig_bytes[32..].copy_from_slice(parts.s.as_bytes());
    let signature = Signature::from_slice(&sig_bytes).map_err(|_| AdapterError::Decoding {
        reason: "malformed signature scalars".into(),
    })?;

    let recovered = VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)
        .map_err(|_| AdapterError::Decoding {
            reason: "public key recovery failed".into(),
        })?;

    let point = recovered.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}
