use crate::errors::prelude::*;

use num_bigint::{BigInt, BigUint};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{Num, One, ToPrimitive, Zero};
use sha2::{Digest, Sha256};

#[cfg(feature = "serde")]
use serde::de::{Deserialize, Deserializer, Error as DError, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{Serialize, Serializer};

use std::fmt;

/// Canonical hex strings are padded to whole 256-bit words.
const ENCODING_WORD_DIGITS: usize = 64;
const ENCODING_PREFIX: &str = "0x";

#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNumber {
    bn: BigUint,
}

impl BigNumber {
    pub fn new_context(modulus: &BigNumber) -> ClResult<BigNumberContext> {
        BigNumberContext::new(modulus)
    }

    pub fn new() -> ClResult<BigNumber> {
        Ok(BigNumber::default())
    }

    pub fn from_u32(n: u32) -> ClResult<BigNumber> {
        Ok(BigNumber {
            bn: BigUint::from(n),
        })
    }

    pub fn from_u64(n: u64) -> ClResult<BigNumber> {
        Ok(BigNumber {
            bn: BigUint::from(n),
        })
    }

    pub fn power_of_two(exponent: usize) -> BigNumber {
        BigNumber {
            bn: BigUint::one() << exponent,
        }
    }

    pub fn from_dec(dec: &str) -> ClResult<BigNumber> {
        if dec.is_empty() || !dec.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err_msg(
                ClErrorKind::MalformedEncoding,
                format!("Invalid decimal string '{}'", dec),
            ));
        }

        Ok(BigNumber {
            bn: BigUint::from_str_radix(dec, 10)?,
        })
    }

    pub fn from_hex(hex: &str) -> ClResult<BigNumber> {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err_msg(
                ClErrorKind::MalformedEncoding,
                format!("Invalid hex string '{}'", hex),
            ));
        }

        Ok(BigNumber {
            bn: BigUint::from_str_radix(hex, 16)?,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> ClResult<BigNumber> {
        Ok(BigNumber {
            bn: BigUint::from_bytes_be(bytes),
        })
    }

    pub fn to_dec(&self) -> ClResult<String> {
        Ok(self.bn.to_str_radix(10))
    }

    pub fn to_hex(&self) -> ClResult<String> {
        Ok(self.bn.to_str_radix(16))
    }

    /// Minimal big-endian bytes. Zero is a single `0x00` byte.
    pub fn to_bytes(&self) -> ClResult<Vec<u8>> {
        Ok(self.bn.to_bytes_be())
    }

    /// `0x` followed by lower-case hex, left-padded to a multiple of 64 digits.
    pub fn encode(&self) -> String {
        let digits = self.bn.to_str_radix(16);
        let words = (digits.len() + ENCODING_WORD_DIGITS - 1) / ENCODING_WORD_DIGITS;
        let width = words.max(1) * ENCODING_WORD_DIGITS;

        format!("{}{:0>width$}", ENCODING_PREFIX, digits, width = width)
    }

    pub fn decode(encoded: &str) -> ClResult<BigNumber> {
        let digits = encoded.strip_prefix(ENCODING_PREFIX).ok_or_else(|| {
            err_msg(
                ClErrorKind::MalformedEncoding,
                "Encoded number must start with '0x'",
            )
        })?;

        if digits.is_empty() || digits.len() % ENCODING_WORD_DIGITS != 0 {
            return Err(err_msg(
                ClErrorKind::MalformedEncoding,
                format!(
                    "Encoded number must carry a positive multiple of {} digits, got {}",
                    ENCODING_WORD_DIGITS,
                    digits.len()
                ),
            ));
        }

        BigNumber::from_hex(digits)
    }

    pub fn hash_array(nums: &[Vec<u8>]) -> ClResult<Vec<u8>> {
        let mut hasher = Sha256::new();

        for num in nums.iter() {
            hasher.update(num);
        }

        Ok(hasher.finalize().to_vec())
    }

    pub fn num_bits(&self) -> ClResult<usize> {
        Ok(self.bn.bits() as usize)
    }

    pub fn is_zero(&self) -> bool {
        self.bn.is_zero()
    }

    pub fn is_odd(&self) -> bool {
        self.bn.is_odd()
    }

    pub fn add(&self, a: &BigNumber) -> ClResult<BigNumber> {
        Ok(BigNumber { bn: &self.bn + &a.bn })
    }

    pub fn sub(&self, a: &BigNumber) -> ClResult<BigNumber> {
        if self.bn < a.bn {
            return Err(err_msg(
                ClErrorKind::Underflow,
                "Subtraction result would be negative",
            ));
        }

        Ok(BigNumber { bn: &self.bn - &a.bn })
    }

    pub fn mul(&self, a: &BigNumber) -> ClResult<BigNumber> {
        Ok(BigNumber { bn: &self.bn * &a.bn })
    }

    pub fn modulus(&self, n: &BigNumber) -> ClResult<BigNumber> {
        if n.is_zero() {
            return Err(err_msg(ClErrorKind::InvalidModulus, "Modulus is zero"));
        }

        Ok(BigNumber { bn: &self.bn % &n.bn })
    }

    pub fn mod_mul(&self, a: &BigNumber, n: &BigNumber) -> ClResult<BigNumber> {
        self.mul(a)?.modulus(n)
    }

    pub fn mod_exp(&self, a: &BigNumber, n: &BigNumber) -> ClResult<BigNumber> {
        BigNumberContext::new(n)?.mod_exp(self, a)
    }

    /// Plain integer power with a small exponent.
    pub fn exp(&self, a: &BigNumber) -> ClResult<BigNumber> {
        if self.bn.is_zero() {
            return Ok(BigNumber::default());
        }

        match a.bn.to_u32() {
            Some(num) => Ok(BigNumber {
                bn: self.bn.pow(num),
            }),
            None => Err(err_msg(
                ClErrorKind::InvalidState,
                "Exponent cannot be held in u32",
            )),
        }
    }

    pub fn inverse(&self, n: &BigNumber) -> ClResult<BigNumber> {
        if n.bn <= BigUint::one() {
            return Err(err_msg(
                ClErrorKind::InvalidModulus,
                "Modulus must be greater than one",
            ));
        }

        let modulus = BigInt::from(n.bn.clone());
        let ExtendedGcd { gcd, x, .. } = BigInt::from(&self.bn % &n.bn).extended_gcd(&modulus);

        if !gcd.is_one() {
            return Err(err_msg(
                ClErrorKind::NotInvertible,
                "Value and modulus are not coprime",
            ));
        }

        x.mod_floor(&modulus)
            .to_biguint()
            .map(|bn| BigNumber { bn })
            .ok_or_else(|| err_msg(ClErrorKind::InvalidState, "Negative inverse"))
    }

    pub fn mod_div(&self, b: &BigNumber, n: &BigNumber) -> ClResult<BigNumber> {
        self.mod_mul(&b.inverse(n)?, n)
    }

    pub fn increment(&self) -> ClResult<BigNumber> {
        self.add(&BIGNUMBER_1)
    }

    pub fn decrement(&self) -> ClResult<BigNumber> {
        self.sub(&BIGNUMBER_1)
    }
}

/// Arithmetic modulo one fixed modulus.
///
/// The modulus is validated once at construction. The context is never mutated
/// afterwards and can be shared between threads.
#[derive(Debug, Clone)]
pub struct BigNumberContext {
    modulus: BigNumber,
}

impl BigNumberContext {
    pub fn new(modulus: &BigNumber) -> ClResult<BigNumberContext> {
        if modulus.bn <= BigUint::one() {
            return Err(err_msg(
                ClErrorKind::InvalidModulus,
                "Modulus must be greater than one",
            ));
        }

        Ok(BigNumberContext {
            modulus: modulus.clone(),
        })
    }

    pub fn modulus(&self) -> &BigNumber {
        &self.modulus
    }

    /// `base^exp mod n`. `exp = 0` gives `1`.
    pub fn mod_exp(&self, base: &BigNumber, exp: &BigNumber) -> ClResult<BigNumber> {
        Ok(BigNumber {
            bn: base.bn.modpow(&exp.bn, &self.modulus.bn),
        })
    }

    pub fn mod_mul(&self, a: &BigNumber, b: &BigNumber) -> ClResult<BigNumber> {
        a.mod_mul(b, &self.modulus)
    }

    pub fn inverse(&self, a: &BigNumber) -> ClResult<BigNumber> {
        a.inverse(&self.modulus)
    }

    /// `a * b^-1 mod n`.
    pub fn mod_div(&self, a: &BigNumber, b: &BigNumber) -> ClResult<BigNumber> {
        a.mod_div(b, &self.modulus)
    }
}

impl fmt::Debug for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigNumber {{ bn: {} }}", self.bn.to_str_radix(10))
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.bn.to_str_radix(10))
    }
}

#[cfg(feature = "serde")]
impl Serialize for BigNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

#[cfg(feature = "serde")]
impl<'a> Deserialize<'a> for BigNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'a>,
    {
        struct BigNumberVisitor;

        impl<'a> Visitor<'a> for BigNumberVisitor {
            type Value = BigNumber;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("canonical 0x-prefixed hex or a decimal string")
            }

            fn visit_str<E>(self, value: &str) -> Result<BigNumber, E>
            where
                E: DError,
            {
                if value.starts_with(ENCODING_PREFIX) {
                    BigNumber::decode(value).map_err(DError::custom)
                } else {
                    BigNumber::from_dec(value).map_err(DError::custom)
                }
            }
        }

        deserializer.deserialize_str(BigNumberVisitor)
    }
}

// Constants that are used throughout the code, so avoiding recomputation.
lazy_static! {
    pub static ref BIGNUMBER_1: BigNumber = BigNumber { bn: BigUint::one() };
    pub static ref BIGNUMBER_2: BigNumber = BigNumber {
        bn: BigUint::from(2u32)
    };
}
