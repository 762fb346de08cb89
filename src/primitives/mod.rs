//! Adapters over the external cryptographic libraries.
//!
//! Nothing here implements cryptography; each type wraps one library call
//! so the harness can time it.

pub mod aead;
pub mod asymmetric;

pub use aead::{AeadRoundTrip, KeyedCipher, SymmetricCipher};
pub use asymmetric::{KeyAlgorithm, KeyPair, OaepRoundTrip, SignatureRoundTrip};
