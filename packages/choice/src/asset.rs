use std::fmt;

use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::querier::{query_balance, query_token_balance};

/// AssetInfo names either a CW20 token contract or a bank denom.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetInfo {
    Token { contract_addr: String },
    NativeToken { denom: String },
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetInfo::NativeToken { denom } => write!(f, "{}", denom),
            AssetInfo::Token { contract_addr } => write!(f, "{}", contract_addr),
        }
    }
}

impl AssetInfo {
    /// Balance of this asset held by `account`.
    pub fn query_balance(&self, querier: &QuerierWrapper, account: &Addr) -> StdResult<Uint128> {
        match self {
            AssetInfo::Token { contract_addr } => {
                query_token_balance(querier, Addr::unchecked(contract_addr), account.clone())
            }
            AssetInfo::NativeToken { denom } => {
                query_balance(querier, account.clone(), denom.clone())
            }
        }
    }
}
