//! Security-level parameter tables.
//!
//! Every algorithm family is placed on a common axis of nominal security
//! strengths (80 to 256 bits, NIST SP 800-57 equivalences). A level with no
//! standard parameter set for a family maps to `None`; suites skip those
//! cells instead of recording them as failures.

use core::fmt;
use openssl::nid::Nid;
use serde::{Deserialize, Serialize};

/// Nominal symmetric-equivalent security strength.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum SecurityLevel {
    Bits80,
    Bits112,
    Bits128,
    Bits192,
    Bits256,
}

impl SecurityLevel {
    /// All levels, weakest first.
    pub const ALL: [SecurityLevel; 5] = [
        SecurityLevel::Bits80,
        SecurityLevel::Bits112,
        SecurityLevel::Bits128,
        SecurityLevel::Bits192,
        SecurityLevel::Bits256,
    ];

    /// Strength in bits.
    pub fn bits(&self) -> u16 {
        match self {
            SecurityLevel::Bits80 => 80,
            SecurityLevel::Bits112 => 112,
            SecurityLevel::Bits128 => 128,
            SecurityLevel::Bits192 => 192,
            SecurityLevel::Bits256 => 256,
        }
    }

    pub fn from_bits(bits: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.bits() == bits)
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl TryFrom<u16> for SecurityLevel {
    type Error = String;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or_else(|| format!("unsupported security level: {} bits", bits))
    }
}

impl From<SecurityLevel> for u16 {
    fn from(level: SecurityLevel) -> Self {
        level.bits()
    }
}

/// Named prime-field curves used for EC key generation and ECDSA.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EcCurve {
    Secp192r1,
    Secp224r1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
}

impl EcCurve {
    pub const ALL: [EcCurve; 5] = [
        EcCurve::Secp192r1,
        EcCurve::Secp224r1,
        EcCurve::Secp256r1,
        EcCurve::Secp384r1,
        EcCurve::Secp521r1,
    ];

    /// SEC 2 curve name, as written to result tables.
    pub fn name(&self) -> &'static str {
        match self {
            EcCurve::Secp192r1 => "secp192r1",
            EcCurve::Secp224r1 => "secp224r1",
            EcCurve::Secp256r1 => "secp256r1",
            EcCurve::Secp384r1 => "secp384r1",
            EcCurve::Secp521r1 => "secp521r1",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|curve| curve.name() == name)
    }

    /// OpenSSL identifier for the curve group.
    pub fn nid(&self) -> Nid {
        match self {
            EcCurve::Secp192r1 => Nid::X9_62_PRIME192V1,
            EcCurve::Secp224r1 => Nid::SECP224R1,
            EcCurve::Secp256r1 => Nid::X9_62_PRIME256V1,
            EcCurve::Secp384r1 => Nid::SECP384R1,
            EcCurve::Secp521r1 => Nid::SECP521R1,
        }
    }
}

impl fmt::Display for EcCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable mapping from security level to an optional parameter.
#[derive(Debug)]
pub struct ParameterTable<T: 'static> {
    entries: &'static [(SecurityLevel, Option<T>)],
}

impl<T: Copy + PartialEq + 'static> ParameterTable<T> {
    pub const fn new(entries: &'static [(SecurityLevel, Option<T>)]) -> Self {
        Self { entries }
    }

    /// Parameter defined for `level`, if any.
    pub fn get(&self, level: SecurityLevel) -> Option<T> {
        self.entries
            .iter()
            .find(|(entry_level, _)| *entry_level == level)
            .and_then(|(_, param)| *param)
    }

    /// Level a parameter belongs to (reverse lookup).
    pub fn level_of(&self, param: T) -> Option<SecurityLevel> {
        self.entries
            .iter()
            .find(|(_, entry)| *entry == Some(param))
            .map(|(level, _)| *level)
    }
}

/// RSA modulus size in bits per level.
pub const RSA_MODULUS_BITS: ParameterTable<u32> = ParameterTable::new(&[
    (SecurityLevel::Bits80, Some(1024)),
    (SecurityLevel::Bits112, Some(2048)),
    (SecurityLevel::Bits128, Some(3072)),
    (SecurityLevel::Bits192, Some(4096)),
    (SecurityLevel::Bits256, Some(8192)),
]);

/// DSA modulus size in bits per level. No standard DSA domain parameters
/// reach 192 or 256 bits of strength.
pub const DSA_MODULUS_BITS: ParameterTable<u32> = ParameterTable::new(&[
    (SecurityLevel::Bits80, Some(1024)),
    (SecurityLevel::Bits112, Some(2048)),
    (SecurityLevel::Bits128, Some(3072)),
    (SecurityLevel::Bits192, None),
    (SecurityLevel::Bits256, None),
]);

/// Elliptic curve per level.
pub const EC_CURVES: ParameterTable<EcCurve> = ParameterTable::new(&[
    (SecurityLevel::Bits80, Some(EcCurve::Secp192r1)),
    (SecurityLevel::Bits112, Some(EcCurve::Secp224r1)),
    (SecurityLevel::Bits128, Some(EcCurve::Secp256r1)),
    (SecurityLevel::Bits192, Some(EcCurve::Secp384r1)),
    (SecurityLevel::Bits256, Some(EcCurve::Secp521r1)),
]);

/// AES key sizes benchmarked by the symmetric suite.
pub const AES_KEY_BITS: [u16; 3] = [128, 192, 256];

/// ChaCha20-Poly1305 only has a 256-bit key.
pub const CHACHA20_KEY_BITS: u16 = 256;

/// Public exponent for every generated RSA key.
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;

/// AEAD nonce length in bytes (96-bit nonces for both ciphers).
pub const AEAD_NONCE_LEN: usize = 12;
