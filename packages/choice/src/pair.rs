//! Deterministic pair address derivation.
//!
//! Pairs are instantiated by the factory with `Instantiate2`, salted by the
//! sorted token pair, so any contract knowing the factory and the pair code
//! checksum can compute a pair's address without querying the factory. The
//! pair contract doubles as the CW20 pool-share token.

use cosmwasm_std::{instantiate2_address, Addr, Api, Binary, CanonicalAddr, StdError, StdResult};
use sha2::{Digest, Sha256};

/// Orders two tokens by their canonical bytes.
pub fn sort_tokens(
    api: &dyn Api,
    token_a: &Addr,
    token_b: &Addr,
) -> StdResult<(CanonicalAddr, CanonicalAddr)> {
    let canonical_a = api.addr_canonicalize(token_a.as_str())?;
    let canonical_b = api.addr_canonicalize(token_b.as_str())?;

    if canonical_a == canonical_b {
        return Err(StdError::generic_err("Identical token addresses"));
    }

    if canonical_a.as_slice() < canonical_b.as_slice() {
        Ok((canonical_a, canonical_b))
    } else {
        Ok((canonical_b, canonical_a))
    }
}

/// Salt used by the factory when instantiating the pair of two sorted tokens.
pub fn pair_salt(token0: &CanonicalAddr, token1: &CanonicalAddr) -> Binary {
    let mut hasher = Sha256::new();
    for token in [token0, token1] {
        hasher.update([token.as_slice().len() as u8]);
        hasher.update(token.as_slice());
    }
    Binary::from(hasher.finalize().to_vec())
}

/// Address of the pair for `token_a` and `token_b`, in either order.
pub fn compute_pair_address(
    api: &dyn Api,
    factory: &Addr,
    pair_code_checksum: &[u8],
    token_a: &Addr,
    token_b: &Addr,
) -> StdResult<Addr> {
    let (token0, token1) = sort_tokens(api, token_a, token_b)?;
    let salt = pair_salt(&token0, &token1);
    let creator = api.addr_canonicalize(factory.as_str())?;

    let canonical = instantiate2_address(pair_code_checksum, &creator, salt.as_slice())
        .map_err(|e| StdError::generic_err(format!("Pair address derivation failed: {}", e)))?;

    api.addr_humanize(&canonical)
}
