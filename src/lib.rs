//! Verifier for Camenisch-Lysyanskaya anonymous credential proofs.
//!
//! A proof covers one or more credentials. For each of them the verifier rebuilds the
//! equality commitment and the six commitments of every range predicate from the
//! public key, hashes them together with the prover's commitment list and the nonce and
//! compares the result with the challenge embedded in the proof.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

// To use macros from util inside of other modules it must be loaded first.
#[macro_use]
pub mod utils;

#[path = "bn/rust.rs"]
pub mod bn;
pub mod cl;
pub mod encoding;
pub mod errors;
