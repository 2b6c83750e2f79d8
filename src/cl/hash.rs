use crate::bn::BigNumber;
use crate::errors::prelude::*;

/// SHA-256 over the concatenation of `nums`, read back as a big-endian integer.
pub fn get_hash_as_int(nums: &[Vec<u8>]) -> ClResult<BigNumber> {
    trace!("Helpers::get_hash_as_int: >>> nums: {:?}", nums);

    let hash = BigNumber::from_bytes(&BigNumber::hash_array(nums)?);

    trace!("Helpers::get_hash_as_int: <<< hash: {:?}", hash);

    hash
}
