use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use choice::asset::AssetInfo;
use cosmwasm_std::{Addr, HexBinary, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use crate::msg::FarmVersion;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    /// The only account allowed to deposit.
    pub owner: Addr,
    pub proposed_owner: Option<Addr>,
    pub wrapped_native: Addr,
    pub native_denom: String,
    pub router: Addr,
    pub farm_v1: Addr,
    pub farm_v2: Addr,
    pub pair_factory: Addr,
    pub pair_code_checksum: HexBinary,
}

/// A deposit between dispatching the router call and handling its reply.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct PendingDeposit {
    pub depositor: Addr,
    pub farm: FarmVersion,
    pub pool_id: u64,
    /// The pair, which is also the pool-share token.
    pub lp_token: Addr,
    pub assets: [AssetInfo; 2],
    pub amounts_desired: [Uint128; 2],
    pub balances_before: [Uint128; 2],
    pub lp_balance_before: Uint128,
}

/// The contract's configuration.
pub const CONFIG: Item<Config> = Item::new("config");

/// Cumulative liquidity staked by this wallet, keyed by farm version and pool id.
pub const POOL_LIQUIDITY: Map<(&str, u64), Uint128> = Map::new("pool_liquidity");

pub const PENDING_DEPOSIT: Item<PendingDeposit> = Item::new("pending_deposit");

pub fn load_pool_liquidity(
    storage: &dyn Storage,
    farm: FarmVersion,
    pool_id: u64,
) -> StdResult<Uint128> {
    Ok(POOL_LIQUIDITY
        .may_load(storage, (farm.as_str(), pool_id))?
        .unwrap_or_default())
}

/// Adds `amount` to the ledger entry and returns the new total.
pub fn increase_pool_liquidity(
    storage: &mut dyn Storage,
    farm: FarmVersion,
    pool_id: u64,
    amount: Uint128,
) -> StdResult<Uint128> {
    POOL_LIQUIDITY.update(
        storage,
        (farm.as_str(), pool_id),
        |liquidity| -> StdResult<Uint128> {
            Ok(liquidity.unwrap_or_default().checked_add(amount)?)
        },
    )
}
