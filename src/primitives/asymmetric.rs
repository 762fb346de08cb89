//! RSA, DSA and EC key pairs over OpenSSL.
//!
//! Operations:
//! - Key generation (RSA with e = 65537, DSA with OpenSSL's default q, EC on a named curve)
//! - RSA-OAEP encryption (SHA-256, MGF1-SHA-256, empty label)
//! - Signatures: RSA-PSS (maximum salt length), DSA and ECDSA, all over SHA-256
//!
//! The public half is exported to DER and re-imported, so encryption and
//! verification never touch private key material.

use core::fmt;

use openssl::bn::BigNum;
use openssl::dsa::Dsa;
use openssl::ec::{EcGroup, EcKey};
use openssl::encrypt::{Decrypter, Encrypter};
use openssl::hash::MessageDigest;
use openssl::pkey::{PKey, Private, Public};
use openssl::rsa::{Padding, Rsa};
use openssl::sign::{RsaPssSaltlen, Signer, Verifier};

use crate::error::CryptoError;
use crate::harness::RoundTrip;
use crate::params::{EcCurve, RSA_PUBLIC_EXPONENT};

/// Key-pair family and size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAlgorithm {
    Rsa { bits: u32 },
    Dsa { bits: u32 },
    Ec(EcCurve),
}

impl KeyAlgorithm {
    /// Key-generation table label.
    pub fn name(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa { .. } => "RSA",
            KeyAlgorithm::Dsa { .. } => "DSA",
            KeyAlgorithm::Ec(_) => "ECC",
        }
    }

    /// Signature table label.
    pub fn signature_name(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa { .. } => "RSA-PSS",
            KeyAlgorithm::Dsa { .. } => "DSA",
            KeyAlgorithm::Ec(_) => "ECDSA",
        }
    }

    /// Modulus size or curve name.
    pub fn param(&self) -> String {
        match self {
            KeyAlgorithm::Rsa { bits } | KeyAlgorithm::Dsa { bits } => bits.to_string(),
            KeyAlgorithm::Ec(curve) => curve.name().to_string(),
        }
    }

    /// Generate a private key only; the measured operation of the
    /// key-generation suite.
    pub fn generate_private(&self) -> Result<PKey<Private>, CryptoError> {
        let key = match self {
            KeyAlgorithm::Rsa { bits } => {
                let e = BigNum::from_u32(RSA_PUBLIC_EXPONENT)?;
                PKey::from_rsa(Rsa::generate_with_e(*bits, &e)?)?
            }
            KeyAlgorithm::Dsa { bits } => PKey::from_dsa(Dsa::generate(*bits)?)?,
            KeyAlgorithm::Ec(curve) => {
                let group = EcGroup::from_curve_name(curve.nid())?;
                PKey::from_ec_key(EcKey::generate(&group)?)?
            }
        };
        Ok(key)
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.param())
    }
}

/// A private key with its detached public half.
pub struct KeyPair {
    algorithm: KeyAlgorithm,
    private: PKey<Private>,
    public: PKey<Public>,
}

impl KeyPair {
    pub fn generate(algorithm: KeyAlgorithm) -> Result<Self, CryptoError> {
        let private = algorithm.generate_private()?;
        let public = PKey::public_key_from_der(&private.public_key_to_der()?)?;
        Ok(Self {
            algorithm,
            private,
            public,
        })
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    fn require_rsa(&self, operation: &'static str) -> Result<(), CryptoError> {
        match self.algorithm {
            KeyAlgorithm::Rsa { .. } => Ok(()),
            other => Err(CryptoError::Unsupported {
                operation,
                algorithm: other.name().to_string(),
            }),
        }
    }

    /// RSA-OAEP encrypt with the public key.
    pub fn encrypt_oaep(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.require_rsa("OAEP encryption")?;
        let mut encrypter = Encrypter::new(&self.public)?;
        encrypter.set_rsa_padding(Padding::PKCS1_OAEP)?;
        encrypter.set_rsa_oaep_md(MessageDigest::sha256())?;
        encrypter.set_rsa_mgf1_md(MessageDigest::sha256())?;

        let mut ciphertext = vec![0u8; encrypter.encrypt_len(message)?];
        let len = encrypter.encrypt(message, &mut ciphertext)?;
        ciphertext.truncate(len);
        Ok(ciphertext)
    }

    /// RSA-OAEP decrypt with the private key.
    pub fn decrypt_oaep(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.require_rsa("OAEP decryption")?;
        let mut decrypter = Decrypter::new(&self.private)?;
        decrypter.set_rsa_padding(Padding::PKCS1_OAEP)?;
        decrypter.set_rsa_oaep_md(MessageDigest::sha256())?;
        decrypter.set_rsa_mgf1_md(MessageDigest::sha256())?;

        let mut plaintext = vec![0u8; decrypter.decrypt_len(ciphertext)?];
        let len = decrypter.decrypt(ciphertext, &mut plaintext)?;
        plaintext.truncate(len);
        Ok(plaintext)
    }

    /// Sign `message` with SHA-256 (PSS padding for RSA keys).
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut signer = Signer::new(MessageDigest::sha256(), &self.private)?;
        if let KeyAlgorithm::Rsa { .. } = self.algorithm {
            signer.set_rsa_padding(Padding::PKCS1_PSS)?;
            signer.set_rsa_pss_saltlen(RsaPssSaltlen::MAXIMUM_LENGTH)?;
            signer.set_rsa_mgf1_md(MessageDigest::sha256())?;
        }
        signer.update(message)?;
        Ok(signer.sign_to_vec()?)
    }

    /// Verify with the public key. An invalid signature is an error.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let mut verifier = Verifier::new(MessageDigest::sha256(), &self.public)?;
        if let KeyAlgorithm::Rsa { .. } = self.algorithm {
            verifier.set_rsa_padding(Padding::PKCS1_PSS)?;
            verifier.set_rsa_pss_saltlen(RsaPssSaltlen::MAXIMUM_LENGTH)?;
            verifier.set_rsa_mgf1_md(MessageDigest::sha256())?;
        }
        verifier.update(message)?;
        if verifier.verify(signature)? {
            Ok(())
        } else {
            Err(CryptoError::SignatureRejected)
        }
    }
}

/// RSA-OAEP encrypt/decrypt of one message under a fixed key pair.
pub struct OaepRoundTrip<'a> {
    pub keys: &'a KeyPair,
    pub message: &'a [u8],
}

impl RoundTrip for OaepRoundTrip<'_> {
    type Prepared = ();
    type Forward = Vec<u8>;
    type Inverse = Vec<u8>;

    fn prepare(&self) -> Result<(), CryptoError> {
        Ok(())
    }

    fn forward(&self, _: &()) -> Result<Vec<u8>, CryptoError> {
        self.keys.encrypt_oaep(self.message)
    }

    fn inverse(&self, _: &(), ciphertext: &Vec<u8>) -> Result<Vec<u8>, CryptoError> {
        self.keys.decrypt_oaep(ciphertext)
    }

    fn round_trips(&self, recovered: &Vec<u8>) -> bool {
        recovered.as_slice() == self.message
    }
}

/// Sign/verify of one message under a fixed key pair.
pub struct SignatureRoundTrip<'a> {
    pub keys: &'a KeyPair,
    pub message: &'a [u8],
}

impl RoundTrip for SignatureRoundTrip<'_> {
    type Prepared = ();
    type Forward = Vec<u8>;
    type Inverse = ();

    fn prepare(&self) -> Result<(), CryptoError> {
        Ok(())
    }

    fn forward(&self, _: &()) -> Result<Vec<u8>, CryptoError> {
        self.keys.sign(self.message)
    }

    fn inverse(&self, _: &(), signature: &Vec<u8>) -> Result<(), CryptoError> {
        self.keys.verify(self.message, signature)
    }
}
