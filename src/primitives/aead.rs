//! AEAD ciphers: AES-GCM (128/192/256) and ChaCha20-Poly1305.

use aes_gcm::aes::cipher::consts::U12;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, Nonce};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};
use chacha20poly1305::ChaCha20Poly1305;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::harness::RoundTrip;
use crate::params::{AEAD_NONCE_LEN, CHACHA20_KEY_BITS};

type Aes192Gcm = AesGcm<Aes192, U12>;

/// Symmetric cipher under test.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SymmetricCipher {
    AesGcm { key_bits: u16 },
    ChaCha20Poly1305,
}

impl SymmetricCipher {
    /// Label written to result tables.
    pub fn name(&self) -> &'static str {
        match self {
            SymmetricCipher::AesGcm { .. } => "AES-GCM",
            SymmetricCipher::ChaCha20Poly1305 => "ChaCha20",
        }
    }

    pub fn key_bits(&self) -> u16 {
        match self {
            SymmetricCipher::AesGcm { key_bits } => *key_bits,
            SymmetricCipher::ChaCha20Poly1305 => CHACHA20_KEY_BITS,
        }
    }

    /// Fresh random key of the cipher's size.
    pub fn generate_key(&self) -> Zeroizing<Vec<u8>> {
        let mut key = Zeroizing::new(vec![0u8; usize::from(self.key_bits() / 8)]);
        OsRng.fill_bytes(&mut key);
        key
    }

    /// Instantiate the cipher with `key`.
    pub fn keyed(&self, key: &[u8]) -> Result<KeyedCipher, CryptoError> {
        let bad_len = |_| CryptoError::InvalidKeyLength(key.len());
        let cipher = match self {
            SymmetricCipher::AesGcm { key_bits: 128 } => {
                KeyedCipher::Aes128(Aes128Gcm::new_from_slice(key).map_err(bad_len)?)
            }
            SymmetricCipher::AesGcm { key_bits: 192 } => {
                KeyedCipher::Aes192(Aes192Gcm::new_from_slice(key).map_err(bad_len)?)
            }
            SymmetricCipher::AesGcm { key_bits: 256 } => {
                KeyedCipher::Aes256(Aes256Gcm::new_from_slice(key).map_err(bad_len)?)
            }
            SymmetricCipher::AesGcm { key_bits } => {
                return Err(CryptoError::InvalidKeyLength(usize::from(*key_bits / 8)))
            }
            SymmetricCipher::ChaCha20Poly1305 => {
                KeyedCipher::ChaCha20(ChaCha20Poly1305::new_from_slice(key).map_err(bad_len)?)
            }
        };
        Ok(cipher)
    }
}

/// Cipher instance bound to one key.
pub enum KeyedCipher {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
    ChaCha20(ChaCha20Poly1305),
}

fn seal<A: Aead + AeadCore<NonceSize = U12>>(
    cipher: &A,
    nonce: &[u8; AEAD_NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    Ok(cipher.encrypt(Nonce::<A>::from_slice(nonce), plaintext)?)
}

fn open<A: Aead + AeadCore<NonceSize = U12>>(
    cipher: &A,
    nonce: &[u8; AEAD_NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    Ok(cipher.decrypt(Nonce::<A>::from_slice(nonce), ciphertext)?)
}

impl KeyedCipher {
    /// Encrypt with no associated data; output carries the 16-byte tag.
    pub fn encrypt(&self, nonce: &[u8; AEAD_NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self {
            KeyedCipher::Aes128(c) => seal(c, nonce, plaintext),
            KeyedCipher::Aes192(c) => seal(c, nonce, plaintext),
            KeyedCipher::Aes256(c) => seal(c, nonce, plaintext),
            KeyedCipher::ChaCha20(c) => seal(c, nonce, plaintext),
        }
    }

    pub fn decrypt(&self, nonce: &[u8; AEAD_NONCE_LEN], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self {
            KeyedCipher::Aes128(c) => open(c, nonce, ciphertext),
            KeyedCipher::Aes192(c) => open(c, nonce, ciphertext),
            KeyedCipher::Aes256(c) => open(c, nonce, ciphertext),
            KeyedCipher::ChaCha20(c) => open(c, nonce, ciphertext),
        }
    }
}

pub fn random_nonce() -> [u8; AEAD_NONCE_LEN] {
    let mut nonce = [0u8; AEAD_NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Per-run state: a freshly keyed cipher and nonce.
pub struct AeadSession {
    pub cipher: KeyedCipher,
    pub nonce: [u8; AEAD_NONCE_LEN],
}

/// Encrypt/decrypt of a fixed plaintext, re-keyed every run.
pub struct AeadRoundTrip<'a> {
    pub cipher: SymmetricCipher,
    pub plaintext: &'a [u8],
}

impl RoundTrip for AeadRoundTrip<'_> {
    type Prepared = AeadSession;
    type Forward = Vec<u8>;
    type Inverse = Vec<u8>;

    fn prepare(&self) -> Result<AeadSession, CryptoError> {
        let key = self.cipher.generate_key();
        Ok(AeadSession {
            cipher: self.cipher.keyed(&key)?,
            nonce: random_nonce(),
        })
    }

    fn forward(&self, session: &AeadSession) -> Result<Vec<u8>, CryptoError> {
        session.cipher.encrypt(&session.nonce, self.plaintext)
    }

    fn inverse(&self, session: &AeadSession, ciphertext: &Vec<u8>) -> Result<Vec<u8>, CryptoError> {
        session.cipher.decrypt(&session.nonce, ciphertext)
    }

    fn round_trips(&self, recovered: &Vec<u8>) -> bool {
        recovered.as_slice() == self.plaintext
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ciphers_round_trip() {
        let plaintext = b"attack at dawn".to_vec();
        for cipher in [
            SymmetricCipher::AesGcm { key_bits: 128 },
            SymmetricCipher::AesGcm { key_bits: 192 },
            SymmetricCipher::AesGcm { key_bits: 256 },
            SymmetricCipher::ChaCha20Poly1305,
        ] {
            let key = cipher.generate_key();
            assert_eq!(key.len() * 8, usize::from(cipher.key_bits()));
            let keyed = cipher.keyed(&key).unwrap();
            let nonce = random_nonce();
            let ct = keyed.encrypt(&nonce, &plaintext).unwrap();
            assert_eq!(ct.len(), plaintext.len() + 16);
            assert_eq!(keyed.decrypt(&nonce, &ct).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_tampered_ciphertext_rejected() {
        let cipher = SymmetricCipher::ChaCha20Poly1305;
        let keyed = cipher.keyed(&cipher.generate_key()).unwrap();
        let nonce = random_nonce();
        let mut ct = keyed.encrypt(&nonce, b"payload").unwrap();
        ct[0] ^= 0xFF;
        assert!(matches!(keyed.decrypt(&nonce, &ct), Err(CryptoError::Aead)));
    }

    #[test]
    fn test_wrong_key_length() {
        let cipher = SymmetricCipher::AesGcm { key_bits: 256 };
        assert!(matches!(cipher.keyed(&[0u8; 16]), Err(CryptoError::InvalidKeyLength(16))));
        let odd = SymmetricCipher::AesGcm { key_bits: 160 };
        assert!(odd.keyed(&[0u8; 20]).is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(SymmetricCipher::AesGcm { key_bits: 192 }.name(), "AES-GCM");
        assert_eq!(SymmetricCipher::ChaCha20Poly1305.name(), "ChaCha20");
        assert_eq!(SymmetricCipher::ChaCha20Poly1305.key_bits(), 256);
    }
}
