pub mod constants;
pub mod hash;
pub mod helpers;
#[cfg(test)]
pub(crate) mod mocks;
pub mod verifier;

use crate::bn::BigNumber;
use crate::encoding::hex::bin2hex;
use crate::errors::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Issuer public key for the primary credential.
///
/// `r` maps every attribute name the issuer signs (including the link secret)
/// to its generator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CredentialPrimaryPublicKey {
    n: BigNumber,
    s: BigNumber,
    r: HashMap<String, BigNumber>,
    rctxt: BigNumber,
    z: BigNumber,
}

impl CredentialPrimaryPublicKey {
    pub fn new(
        n: BigNumber,
        s: BigNumber,
        z: BigNumber,
        rctxt: BigNumber,
        r: HashMap<String, BigNumber>,
    ) -> ClResult<CredentialPrimaryPublicKey> {
        if n.num_bits()? < 2 {
            return Err(err_msg(
                ClErrorKind::InvalidModulus,
                "Public key modulus must be greater than one",
            ));
        }

        Ok(CredentialPrimaryPublicKey { n, s, r, rctxt, z })
    }

    pub fn n(&self) -> &BigNumber {
        &self.n
    }

    pub fn s(&self) -> &BigNumber {
        &self.s
    }

    pub fn z(&self) -> &BigNumber {
        &self.z
    }

    pub fn rctxt(&self) -> &BigNumber {
        &self.rctxt
    }

    pub fn r(&self) -> &HashMap<String, BigNumber> {
        &self.r
    }

    pub(crate) fn attr_generator(&self, attr: &str) -> ClResult<&BigNumber> {
        self.r.get(attr).ok_or_else(|| {
            err_msg(
                ClErrorKind::SchemaError,
                format!("Value by key '{}' not found in pk.r", attr),
            )
        })
    }
}

/// Proof of knowledge of a signature over the hidden attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrimaryEqualProof {
    a_prime: BigNumber,
    e: BigNumber,
    v: BigNumber,
    m: HashMap<String, BigNumber>,
    m2: BigNumber,
    unrevealed_attrs: BTreeSet<String>,
}

impl PrimaryEqualProof {
    pub fn new(
        a_prime: BigNumber,
        e: BigNumber,
        v: BigNumber,
        m: HashMap<String, BigNumber>,
        m2: BigNumber,
        unrevealed_attrs: BTreeSet<String>,
    ) -> PrimaryEqualProof {
        PrimaryEqualProof {
            a_prime,
            e,
            v,
            m,
            m2,
            unrevealed_attrs,
        }
    }

    pub fn a_prime(&self) -> &BigNumber {
        &self.a_prime
    }

    pub fn m(&self) -> &HashMap<String, BigNumber> {
        &self.m
    }

    pub fn unrevealed_attrs(&self) -> &BTreeSet<String> {
        &self.unrevealed_attrs
    }
}

/// Range proof for one predicate over a hidden attribute.
///
/// `u` is keyed by "0".."3", `r` and `t` additionally carry "DELTA".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrimaryPredicateInequalityProof {
    u: HashMap<String, BigNumber>,
    r: HashMap<String, BigNumber>,
    mj: BigNumber,
    alpha: BigNumber,
    t: HashMap<String, BigNumber>,
    predicate: Predicate,
}

impl PrimaryPredicateInequalityProof {
    pub fn new(
        u: HashMap<String, BigNumber>,
        r: HashMap<String, BigNumber>,
        mj: BigNumber,
        alpha: BigNumber,
        t: HashMap<String, BigNumber>,
        predicate: Predicate,
    ) -> PrimaryPredicateInequalityProof {
        PrimaryPredicateInequalityProof {
            u,
            r,
            mj,
            alpha,
            t,
            predicate,
        }
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

/// Predicate on an attribute, e.g. `age GE 18`.
#[derive(Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Predicate {
    attr_name: String,
    p_type: PredicateType,
    value: i32,
}

impl Predicate {
    pub fn new(attr_name: &str, p_type: &str, value: i32) -> ClResult<Predicate> {
        Ok(Predicate {
            attr_name: attr_name.to_owned(),
            p_type: p_type.parse()?,
            value,
        })
    }

    pub fn attr_name(&self) -> &str {
        &self.attr_name
    }

    pub fn p_type(&self) -> &PredicateType {
        &self.p_type
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Bound actually used in the verification algebra. Can be negative for `LT 0`.
    pub fn get_delta_prime(&self) -> i64 {
        let value = i64::from(self.value);

        match self.p_type {
            PredicateType::GE | PredicateType::LE => value,
            PredicateType::GT => value + 1,
            PredicateType::LT => value - 1,
        }
    }

    pub fn is_less(&self) -> bool {
        match self.p_type {
            PredicateType::GE | PredicateType::GT => false,
            PredicateType::LE | PredicateType::LT => true,
        }
    }
}

/// Condition type
#[derive(Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PredicateType {
    GE,
    LE,
    GT,
    LT,
}

impl FromStr for PredicateType {
    type Err = ClError;

    fn from_str(p_type: &str) -> ClResult<PredicateType> {
        match p_type {
            "GE" => Ok(PredicateType::GE),
            "LE" => Ok(PredicateType::LE),
            "GT" => Ok(PredicateType::GT),
            "LT" => Ok(PredicateType::LT),
            p_type => Err(err_msg(
                ClErrorKind::SchemaError,
                format!("Invalid predicate type: {:?}", p_type),
            )),
        }
    }
}

/// Fiat-Shamir challenge claimed by the prover and the commitments it hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregatedProof {
    c_hash: BigNumber,
    c_list: Vec<BigNumber>,
}

impl AggregatedProof {
    pub fn new(c_hash: BigNumber, c_list: Vec<BigNumber>) -> AggregatedProof {
        AggregatedProof { c_hash, c_list }
    }

    pub fn c_hash(&self) -> &BigNumber {
        &self.c_hash
    }

    pub fn c_list(&self) -> &[BigNumber] {
        &self.c_list
    }
}

/// Everything proved about one credential.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubProof {
    eq_proof: PrimaryEqualProof,
    revealed_attrs: BTreeMap<String, BigNumber>,
    #[cfg_attr(feature = "serde", serde(rename = "ge_proofs"))]
    ne_proofs: Vec<PrimaryPredicateInequalityProof>,
}

impl SubProof {
    pub fn new(
        eq_proof: PrimaryEqualProof,
        revealed_attrs: BTreeMap<String, BigNumber>,
        ne_proofs: Vec<PrimaryPredicateInequalityProof>,
    ) -> SubProof {
        SubProof {
            eq_proof,
            revealed_attrs,
            ne_proofs,
        }
    }

    pub fn eq_proof(&self) -> &PrimaryEqualProof {
        &self.eq_proof
    }

    pub fn revealed_attrs(&self) -> &BTreeMap<String, BigNumber> {
        &self.revealed_attrs
    }

    pub fn ne_proofs(&self) -> &[PrimaryPredicateInequalityProof] {
        &self.ne_proofs
    }
}

/// Proof is complex crypto structure created by prover over multiple credentials that allows to prove that prover:
/// 1) Knows signature over credentials issued with specific issuer keys
/// 2) Credential contains attributes with specific values that prover wants to disclose
/// 3) Credential contains attributes with valid predicates that verifier wants the prover to satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Proof {
    nonce: Nonce,
    aggregated_proof: AggregatedProof,
    proofs: Vec<SubProof>,
}

impl Proof {
    pub fn new(nonce: Nonce, aggregated_proof: AggregatedProof, proofs: Vec<SubProof>) -> Proof {
        Proof {
            nonce,
            aggregated_proof,
            proofs,
        }
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    pub fn aggregated_proof(&self) -> &AggregatedProof {
        &self.aggregated_proof
    }

    pub fn proofs(&self) -> &[SubProof] {
        &self.proofs
    }
}

/// Verifier-issued freshness value, hashed as raw bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Nonce(Vec<u8>);

impl Nonce {
    pub fn from_bytes(bytes: &[u8]) -> Nonce {
        Nonce(bytes.to_vec())
    }

    /// Minimal big-endian bytes of a decimal integer.
    pub fn from_dec(dec: &str) -> ClResult<Nonce> {
        Ok(Nonce(BigNumber::from_dec(dec)?.to_bytes()?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Nonce({})", bin2hex(&self.0))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Nonce {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&bin2hex(&self.0))
    }
}

#[cfg(feature = "serde")]
impl<'a> Deserialize<'a> for Nonce {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let hex = String::deserialize(deserializer)?;
        crate::encoding::hex::hex2bin(&hex)
            .map(Nonce)
            .map_err(serde::de::Error::custom)
    }
}

/// Some conditions that the verifier wants the prover to satisfy for one credential.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubProofRequest {
    revealed_attrs: BTreeSet<String>,
    predicates: BTreeSet<Predicate>,
}

impl SubProofRequest {
    pub fn revealed_attrs(&self) -> &BTreeSet<String> {
        &self.revealed_attrs
    }

    pub fn predicates(&self) -> &BTreeSet<Predicate> {
        &self.predicates
    }
}

/// Builder of "Sub proof request".
#[derive(Debug)]
pub struct SubProofRequestBuilder {
    value: SubProofRequest,
}

impl SubProofRequestBuilder {
    pub fn new() -> ClResult<SubProofRequestBuilder> {
        Ok(SubProofRequestBuilder {
            value: SubProofRequest {
                revealed_attrs: BTreeSet::new(),
                predicates: BTreeSet::new(),
            },
        })
    }

    pub fn add_revealed_attr(&mut self, attr: &str) -> ClResult<()> {
        self.value.revealed_attrs.insert(attr.to_owned());
        Ok(())
    }

    pub fn add_predicate(&mut self, attr_name: &str, p_type: &str, value: i32) -> ClResult<()> {
        let predicate = Predicate::new(attr_name, p_type, value)?;

        self.value.predicates.insert(predicate);
        Ok(())
    }

    pub fn finalize(self) -> ClResult<SubProofRequest> {
        Ok(self.value)
    }
}
