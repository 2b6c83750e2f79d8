use crate::bn::{BigNumber, BigNumberContext};
use crate::cl::constants::{DELTA, ITERATION, LARGE_E_START_VALUE};
use crate::cl::hash::get_hash_as_int;
use crate::cl::helpers::{calc_teq, calc_tne, get_map_value};
use crate::cl::*;
use crate::errors::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Instant;

/// Party that wants to check that prover has some credentials provided by issuer.
pub struct Verifier {}

impl Verifier {
    /// Creates and returns sub proof request entity builder.
    /// Part of proof request related to a particular schema-key.
    ///
    /// # Example
    /// ```
    /// use cl_verifier::cl::verifier::Verifier;
    ///
    /// let mut sub_proof_request_builder = Verifier::new_sub_proof_request_builder().unwrap();
    /// sub_proof_request_builder.add_revealed_attr("name").unwrap();
    /// sub_proof_request_builder.add_predicate("age", "GE", 18).unwrap();
    /// let _sub_proof_request = sub_proof_request_builder.finalize().unwrap();
    /// ```
    pub fn new_sub_proof_request_builder() -> ClResult<SubProofRequestBuilder> {
        SubProofRequestBuilder::new()
    }

    /// Creates and returns proof verifier.
    pub fn new_proof_verifier<'a>() -> ClResult<ProofVerifier<'a>> {
        Ok(ProofVerifier {
            credentials: Vec::new(),
            common_attributes: BTreeSet::new(),
        })
    }
}

#[derive(Debug)]
struct VerifiableCredential<'a> {
    pub_key: &'a CredentialPrimaryPublicKey,
    sub_proof_request: Option<SubProofRequest>,
}

/// Outcome of a verification together with the values the verdict was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub valid: bool,
    /// Challenge recomputed from `tau_list`, `c_list` and the nonce.
    pub c_hash: BigNumber,
    pub tau_list: Vec<BigNumber>,
}

#[derive(Debug)]
pub struct ProofVerifier<'a> {
    credentials: Vec<VerifiableCredential<'a>>,
    common_attributes: BTreeSet<String>,
}

impl<'a> ProofVerifier<'a> {
    /// Attributes that are supposed to have same value across all subproofs.
    /// Their blinded responses (`m_hat`s) must be identical in every sub proof.
    pub fn add_common_attribute(&mut self, attr_name: &str) -> ClResult<()> {
        self.common_attributes.insert(attr_name.to_owned());
        Ok(())
    }

    /// Add sub proof request to proof verifier.
    /// The order of sub-proofs is important: both Prover and Verifier should use the same order.
    pub fn add_sub_proof_request(
        &mut self,
        sub_proof_request: &SubProofRequest,
        credential_pub_key: &'a CredentialPrimaryPublicKey,
    ) -> ClResult<()> {
        ProofVerifier::_check_add_sub_proof_request_params_consistency(
            sub_proof_request,
            credential_pub_key,
        )?;

        self.credentials.push(VerifiableCredential {
            pub_key: credential_pub_key,
            sub_proof_request: Some(sub_proof_request.clone()),
        });

        Ok(())
    }

    /// Verifies proof against the registered sub proof requests.
    ///
    /// A challenge mismatch is `Ok(false)`. Structural problems are errors.
    pub fn verify(&self, proof: &Proof) -> ClResult<bool> {
        trace!("ProofVerifier::verify: >>> proof: {:?}", proof);

        let valid = self.verify_with_details(proof)?.valid;

        trace!("ProofVerifier::verify: <<< valid: {:?}", valid);

        Ok(valid)
    }

    pub fn verify_with_details(&self, proof: &Proof) -> ClResult<VerificationResult> {
        trace!("ProofVerifier::verify_with_details: >>> proof: {:?}", proof);

        ProofVerifier::_check_verify_params_consistency(&self.credentials, proof)?;
        self._check_common_attributes(proof)?;

        let pairs = self
            .credentials
            .iter()
            .map(|credential| credential.pub_key)
            .zip(proof.proofs.iter())
            .collect::<Vec<(&CredentialPrimaryPublicKey, &SubProof)>>();

        let result = ProofVerifier::_verify_proofs(&pairs, proof)?;

        trace!(
            "ProofVerifier::verify_with_details: <<< result: {:?}",
            result
        );

        Ok(result)
    }

    fn _check_add_sub_proof_request_params_consistency(
        sub_proof_request: &SubProofRequest,
        pub_key: &CredentialPrimaryPublicKey,
    ) -> ClResult<()> {
        trace!("ProofVerifier::_check_add_sub_proof_request_params_consistency: >>> sub_proof_request: {:?}", sub_proof_request);

        if let Some(attr) = sub_proof_request
            .revealed_attrs
            .iter()
            .find(|attr| !pub_key.r.contains_key(*attr))
        {
            return Err(err_msg(
                ClErrorKind::SchemaError,
                format!("Credential doesn't contain requested attribute '{}'", attr),
            ));
        }

        if let Some(predicate) = sub_proof_request
            .predicates
            .iter()
            .find(|predicate| !pub_key.r.contains_key(&predicate.attr_name))
        {
            return Err(err_msg(
                ClErrorKind::SchemaError,
                format!(
                    "Credential doesn't contain attribute '{}' requested in predicate",
                    predicate.attr_name
                ),
            ));
        }

        trace!("ProofVerifier::_check_add_sub_proof_request_params_consistency: <<<");

        Ok(())
    }

    fn _check_verify_params_consistency(
        credentials: &[VerifiableCredential],
        proof: &Proof,
    ) -> ClResult<()> {
        trace!(
            "ProofVerifier::_check_verify_params_consistency: >>> credentials: {:?}, proof: {:?}",
            credentials,
            proof
        );

        if proof.proofs.len() != credentials.len() {
            return Err(err_msg(
                ClErrorKind::ProofRejected,
                format!(
                    "Invalid proof length: expected {} sub proofs, got {}",
                    credentials.len(),
                    proof.proofs.len()
                ),
            ));
        }

        for (proof_for_credential, credential) in proof.proofs.iter().zip(credentials) {
            let sub_proof_request = match credential.sub_proof_request {
                Some(ref sub_proof_request) => sub_proof_request,
                None => continue,
            };

            let proof_revealed_attrs = proof_for_credential
                .revealed_attrs
                .keys()
                .cloned()
                .collect::<BTreeSet<String>>();

            if proof_revealed_attrs != sub_proof_request.revealed_attrs {
                return Err(err_msg(
                    ClErrorKind::ProofRejected,
                    "Proof revealed attributes not correspond to requested attributes",
                ));
            }

            let proof_predicates = proof_for_credential
                .ne_proofs
                .iter()
                .map(|ne_proof| ne_proof.predicate.clone())
                .collect::<BTreeSet<Predicate>>();

            if proof_predicates != sub_proof_request.predicates {
                return Err(err_msg(
                    ClErrorKind::ProofRejected,
                    "Proof predicates not correspond to requested predicates",
                ));
            }
        }

        trace!("ProofVerifier::_check_verify_params_consistency: <<<");

        Ok(())
    }

    /// Checks that `m_hat`s of all common attributes are present and equal in every sub proof.
    fn _check_common_attributes(&self, proof: &Proof) -> ClResult<()> {
        let mut m_hats: HashMap<&str, &BigNumber> = HashMap::new();

        for sub_proof in proof.proofs.iter() {
            for attr_name in self.common_attributes.iter() {
                let m_hat = sub_proof.eq_proof.m.get(attr_name).ok_or_else(|| {
                    err_msg(
                        ClErrorKind::ProofRejected,
                        format!(
                            "Blinded value for common attribute '{}' not found in proof.m",
                            attr_name
                        ),
                    )
                })?;

                match m_hats.get(attr_name.as_str()) {
                    Some(first) if *first != m_hat => {
                        return Err(err_msg(
                            ClErrorKind::ProofRejected,
                            format!(
                                "Blinded value for common attribute '{}' different across sub proofs",
                                attr_name
                            ),
                        ));
                    }
                    Some(_) => (),
                    // For first subproof
                    None => {
                        m_hats.insert(attr_name, m_hat);
                    }
                }
            }
        }

        Ok(())
    }

    /// Reconstructs every tau value, in sub proof order, and recomputes the challenge.
    fn _verify_proofs(
        credentials: &[(&CredentialPrimaryPublicKey, &SubProof)],
        proof: &Proof,
    ) -> ClResult<VerificationResult> {
        let start = Instant::now();
        let c_hash = &proof.aggregated_proof.c_hash;

        let mut bound = true;
        for (_, sub_proof) in credentials.iter() {
            let sub_proof_bound = ProofVerifier::_check_predicate_bindings(sub_proof)?;
            bound = bound && sub_proof_bound;
        }

        let sub_tau_lists = cfg_iter!(credentials)
            .map(|(pub_key, sub_proof)| {
                ProofVerifier::_verify_primary_proof(pub_key, c_hash, sub_proof)
            })
            .collect::<ClResult<Vec<Vec<BigNumber>>>>()?;

        let tau_list: Vec<BigNumber> = sub_tau_lists.into_iter().flatten().collect();

        debug!(
            "ProofVerifier::_verify_proofs: reconstructed {} tau values from {} sub proofs in {:?}",
            tau_list.len(),
            credentials.len(),
            start.elapsed()
        );

        let mut values: Vec<Vec<u8>> =
            Vec::with_capacity(tau_list.len() + proof.aggregated_proof.c_list.len() + 1);
        for tau in tau_list.iter() {
            values.push(tau.to_bytes()?);
        }
        for c in proof.aggregated_proof.c_list.iter() {
            values.push(c.to_bytes()?);
        }
        values.push(proof.nonce.as_bytes().to_vec());

        let c_hver = get_hash_as_int(&values)?;
        let valid = bound && c_hver == *c_hash;

        info!(
            "Verifier verify proof -> done, valid: {}, took {:?}",
            valid,
            start.elapsed()
        );

        Ok(VerificationResult {
            valid,
            c_hash: c_hver,
            tau_list,
        })
    }

    fn _verify_primary_proof(
        p_pub_key: &CredentialPrimaryPublicKey,
        c_hash: &BigNumber,
        sub_proof: &SubProof,
    ) -> ClResult<Vec<BigNumber>> {
        trace!(
            "ProofVerifier::_verify_primary_proof: >>> p_pub_key: {:?}, c_hash: {:?}, sub_proof: {:?}",
            p_pub_key,
            c_hash,
            sub_proof
        );

        let ctx = BigNumber::new_context(&p_pub_key.n)?;

        let mut t_hat: Vec<BigNumber> = vec![ProofVerifier::_verify_equality(
            p_pub_key,
            &sub_proof.eq_proof,
            &sub_proof.revealed_attrs,
            c_hash,
            &ctx,
        )?];

        let ne_tau_lists = cfg_iter!(sub_proof.ne_proofs)
            .map(|ne_proof| ProofVerifier::_verify_ne_predicate(p_pub_key, ne_proof, c_hash, &ctx))
            .collect::<ClResult<Vec<Vec<BigNumber>>>>()?;

        t_hat.extend(ne_tau_lists.into_iter().flatten());

        trace!(
            "ProofVerifier::_verify_primary_proof: <<< t_hat: {:?}",
            t_hat
        );

        Ok(t_hat)
    }

    /// A predicate proof only speaks about an attribute when its `mj` is the
    /// equality proof's response for that attribute. A mismatch makes the proof
    /// invalid, a predicate over an attribute absent from `proof.m` is malformed.
    fn _check_predicate_bindings(sub_proof: &SubProof) -> ClResult<bool> {
        for ne_proof in sub_proof.ne_proofs.iter() {
            let attr_name = &ne_proof.predicate.attr_name;
            let m_hat = get_map_value(&sub_proof.eq_proof.m, attr_name, "proof.m")?;

            if *m_hat != ne_proof.mj {
                debug!(
                    "ProofVerifier::_check_predicate_bindings: predicate response for '{}' differs from the equality proof",
                    attr_name
                );
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn _verify_equality(
        p_pub_key: &CredentialPrimaryPublicKey,
        proof: &PrimaryEqualProof,
        revealed_attrs: &BTreeMap<String, BigNumber>,
        c_hash: &BigNumber,
        ctx: &BigNumberContext,
    ) -> ClResult<BigNumber> {
        trace!("ProofVerifier::_verify_equality: >>> p_pub_key: {:?}, proof: {:?}, revealed_attrs: {:?}, c_hash: {:?}",
               p_pub_key, proof, revealed_attrs, c_hash);

        let m_attrs = proof.m.keys().cloned().collect::<BTreeSet<String>>();

        if m_attrs != proof.unrevealed_attrs {
            return Err(err_msg(
                ClErrorKind::SchemaError,
                format!(
                    "Unrevealed attributes {:?} not correspond to responses in proof.m {:?}",
                    proof.unrevealed_attrs, m_attrs
                ),
            ));
        }

        if let Some(attr) = revealed_attrs
            .keys()
            .find(|attr| proof.unrevealed_attrs.contains(*attr))
        {
            return Err(err_msg(
                ClErrorKind::SchemaError,
                format!("Attribute '{}' is both revealed and unrevealed", attr),
            ));
        }

        let t1: BigNumber = calc_teq(
            p_pub_key,
            &proof.a_prime,
            &proof.e,
            &proof.v,
            &proof.m,
            &proof.m2,
            &proof.unrevealed_attrs,
            Some(ctx),
        )?;

        let mut rar = ctx.mod_exp(&proof.a_prime, &LARGE_E_START_VALUE)?;

        for (attr, encoded_value) in revealed_attrs.iter() {
            let cur_r = p_pub_key.attr_generator(attr)?;

            rar = ctx.mod_mul(&ctx.mod_exp(cur_r, encoded_value)?, &rar)?;
        }

        let t2: BigNumber = ctx.mod_exp(
            &ctx.inverse(&ctx.mod_div(&p_pub_key.z, &rar)?)?,
            c_hash,
        )?;

        let t: BigNumber = ctx.mod_mul(&t1, &t2)?;

        trace!("ProofVerifier::_verify_equality: <<< t: {:?}", t);

        Ok(t)
    }

    fn _check_ne_proof_keys(proof: &PrimaryPredicateInequalityProof) -> ClResult<()> {
        let u_keys = (0..ITERATION)
            .map(|i| i.to_string())
            .collect::<BTreeSet<String>>();
        let mut r_keys = u_keys.clone();
        r_keys.insert(DELTA.to_string());

        let check = |map: &HashMap<String, BigNumber>, expected: &BTreeSet<String>, name: &str| {
            let keys = map.keys().cloned().collect::<BTreeSet<String>>();
            if keys == *expected {
                Ok(())
            } else {
                Err(err_msg(
                    ClErrorKind::SchemaError,
                    format!("Keys of proof.{} must be {:?}, got {:?}", name, expected, keys),
                ))
            }
        };

        check(&proof.u, &u_keys, "u")?;
        check(&proof.r, &r_keys, "r")?;
        check(&proof.t, &r_keys, "t")
    }

    fn _verify_ne_predicate(
        p_pub_key: &CredentialPrimaryPublicKey,
        proof: &PrimaryPredicateInequalityProof,
        c_hash: &BigNumber,
        ctx: &BigNumberContext,
    ) -> ClResult<Vec<BigNumber>> {
        trace!(
            "ProofVerifier::_verify_ne_predicate: >>> p_pub_key: {:?}, proof: {:?}, c_hash: {:?}",
            p_pub_key,
            proof,
            c_hash
        );

        ProofVerifier::_check_ne_proof_keys(proof)?;

        let mut tau_list = calc_tne(
            p_pub_key,
            &proof.u,
            &proof.r,
            &proof.mj,
            &proof.alpha,
            &proof.t,
            proof.predicate.is_less(),
            Some(ctx),
        )?;

        for (i, tau) in tau_list.iter_mut().take(ITERATION).enumerate() {
            let cur_t = get_map_value(&proof.t, &i.to_string(), "proof.t")?;

            *tau = ctx.mod_mul(&ctx.inverse(&ctx.mod_exp(cur_t, c_hash)?)?, tau)?;
        }

        let delta = get_map_value(&proof.t, DELTA, "proof.t")?;

        let delta_prime = if proof.predicate.is_less() {
            ctx.inverse(delta)?
        } else {
            delta.clone()
        };

        // z^delta', a negative bound goes through z^-1
        let bound = proof.predicate.get_delta_prime();
        let bound_abs = BigNumber::from_u64(bound.unsigned_abs())?;
        let z_bound = if bound < 0 {
            ctx.mod_exp(&ctx.inverse(&p_pub_key.z)?, &bound_abs)?
        } else {
            ctx.mod_exp(&p_pub_key.z, &bound_abs)?
        };

        tau_list[ITERATION] = ctx.mod_mul(
            &ctx.inverse(&ctx.mod_exp(&ctx.mod_mul(&z_bound, &delta_prime)?, c_hash)?)?,
            &tau_list[ITERATION],
        )?;

        tau_list[ITERATION + 1] = ctx.mod_mul(
            &ctx.inverse(&ctx.mod_exp(delta, c_hash)?)?,
            &tau_list[ITERATION + 1],
        )?;

        trace!(
            "ProofVerifier::_verify_ne_predicate: <<< tau_list: {:?}",
            tau_list
        );

        Ok(tau_list)
    }
}

/// Verifies `proof` without a sub proof request.
///
/// `pub_keys` holds one key per sub proof, or a single key shared by all of them.
pub fn verify(pub_keys: &[&CredentialPrimaryPublicKey], proof: &Proof) -> ClResult<bool> {
    trace!(
        "verify: >>> pub_keys: {:?}, proof: {:?}",
        pub_keys,
        proof
    );

    let pub_keys: Vec<&CredentialPrimaryPublicKey> = match pub_keys {
        [pub_key] => vec![*pub_key; proof.proofs.len()],
        _ => pub_keys.to_vec(),
    };

    let credentials = pub_keys
        .iter()
        .map(|&pub_key| VerifiableCredential {
            pub_key,
            sub_proof_request: None,
        })
        .collect::<Vec<VerifiableCredential>>();

    ProofVerifier::_check_verify_params_consistency(&credentials, proof)?;

    let pairs = pub_keys
        .into_iter()
        .zip(proof.proofs.iter())
        .collect::<Vec<(&CredentialPrimaryPublicKey, &SubProof)>>();

    let valid = ProofVerifier::_verify_proofs(&pairs, proof)?.valid;

    trace!("verify: <<< valid: {:?}", valid);

    Ok(valid)
}
