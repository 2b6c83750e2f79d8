use crate::bn::{BigNumber, BigNumberContext, BIGNUMBER_1};
use crate::cl::constants::{DELTA, ITERATION};
use crate::cl::CredentialPrimaryPublicKey;
use crate::errors::prelude::*;

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

/// Returns a context bound to `p_pub_key.n`, reusing `ctx` when provided.
pub(crate) fn context_for<'a>(
    p_pub_key: &CredentialPrimaryPublicKey,
    ctx: Option<&'a BigNumberContext>,
) -> ClResult<Cow<'a, BigNumberContext>> {
    match ctx {
        Some(ctx) if ctx.modulus() == p_pub_key.n() => Ok(Cow::Borrowed(ctx)),
        Some(_) => Err(err_msg(
            ClErrorKind::InvalidState,
            "Arithmetic context is bound to a different modulus",
        )),
        None => Ok(Cow::Owned(BigNumber::new_context(p_pub_key.n())?)),
    }
}

pub(crate) fn get_map_value<'a>(
    map: &'a HashMap<String, BigNumber>,
    key: &str,
    map_name: &str,
) -> ClResult<&'a BigNumber> {
    map.get(key).ok_or_else(|| {
        err_msg(
            ClErrorKind::SchemaError,
            format!("Value by key '{}' not found in {}", key, map_name),
        )
    })
}

/// Equality commitment `a'^e * prod(r_i^m_i) * s^v * rctxt^m2 mod n` over `unrevealed_attrs`.
#[allow(clippy::too_many_arguments)]
pub fn calc_teq(
    p_pub_key: &CredentialPrimaryPublicKey,
    a_prime: &BigNumber,
    e: &BigNumber,
    v: &BigNumber,
    m_tilde: &HashMap<String, BigNumber>,
    m2tilde: &BigNumber,
    unrevealed_attrs: &BTreeSet<String>,
    ctx: Option<&BigNumberContext>,
) -> ClResult<BigNumber> {
    trace!(
        "Helpers::calc_teq: >>> p_pub_key: {:?}, a_prime: {:?}, e: {:?}, v: {:?}, m_tilde: {:?}, m2tilde: {:?}, unrevealed_attrs: {:?}",
        p_pub_key,
        a_prime,
        e,
        v,
        secret!(m_tilde),
        secret!(m2tilde),
        unrevealed_attrs
    );

    let ctx = context_for(p_pub_key, ctx)?;

    // a_prime^e % p_pub_key.n
    let mut result: BigNumber = ctx.mod_exp(a_prime, e)?;

    for k in unrevealed_attrs.iter() {
        let cur_r = p_pub_key.attr_generator(k)?;
        let cur_m = get_map_value(m_tilde, k, "m_tilde")?;

        // result = result * (cur_r^cur_m % p_pub_key.n) % p_pub_key.n
        result = ctx.mod_mul(&ctx.mod_exp(cur_r, cur_m)?, &result)?;
    }

    result = ctx.mod_mul(&ctx.mod_exp(p_pub_key.s(), v)?, &result)?;
    result = ctx.mod_mul(&ctx.mod_exp(p_pub_key.rctxt(), m2tilde)?, &result)?;

    trace!("Helpers::calc_teq: <<< t: {:?}", result);

    Ok(result)
}

/// The six predicate commitments: four `z^u_i * s^r_i`, then `z^mj * s^(+-r_DELTA)`,
/// then `prod(t_i^u_i) * s^alpha`, all modulo `n`.
#[allow(clippy::too_many_arguments)]
pub fn calc_tne(
    p_pub_key: &CredentialPrimaryPublicKey,
    u: &HashMap<String, BigNumber>,
    r: &HashMap<String, BigNumber>,
    mj: &BigNumber,
    alpha: &BigNumber,
    t: &HashMap<String, BigNumber>,
    is_less: bool,
    ctx: Option<&BigNumberContext>,
) -> ClResult<Vec<BigNumber>> {
    trace!(
        "Helpers::calc_tne: >>> p_pub_key: {:?}, u: {:?}, r: {:?}, mj: {:?}, alpha: {:?}, t: {:?}, is_less: {:?}",
        p_pub_key,
        secret!(u),
        secret!(r),
        secret!(mj),
        secret!(alpha),
        t,
        is_less
    );

    let ctx = context_for(p_pub_key, ctx)?;
    let mut tau_list: Vec<BigNumber> = Vec::with_capacity(ITERATION + 2);

    for i in 0..ITERATION {
        let key = i.to_string();
        let cur_u = get_map_value(u, &key, "u")?;
        let cur_r = get_map_value(r, &key, "r")?;

        let t_tau = ctx.mod_mul(
            &ctx.mod_exp(p_pub_key.z(), cur_u)?,
            &ctx.mod_exp(p_pub_key.s(), cur_r)?,
        )?;

        tau_list.push(t_tau);
    }

    let delta = get_map_value(r, DELTA, "r")?;

    // s^(-delta) is evaluated as (s^-1)^delta
    let s_delta = if is_less {
        ctx.mod_exp(&ctx.inverse(p_pub_key.s())?, delta)?
    } else {
        ctx.mod_exp(p_pub_key.s(), delta)?
    };

    tau_list.push(ctx.mod_mul(&ctx.mod_exp(p_pub_key.z(), mj)?, &s_delta)?);

    let mut q: BigNumber = BIGNUMBER_1.clone();

    for i in 0..ITERATION {
        let key = i.to_string();
        let cur_t = get_map_value(t, &key, "t")?;
        let cur_u = get_map_value(u, &key, "u")?;

        q = ctx.mod_mul(&ctx.mod_exp(cur_t, cur_u)?, &q)?;
    }

    q = ctx.mod_mul(&ctx.mod_exp(p_pub_key.s(), alpha)?, &q)?;

    tau_list.push(q);

    trace!("Helpers::calc_tne: <<< tau_list: {:?}", tau_list);

    Ok(tau_list)
}
