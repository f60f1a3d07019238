//! Pool registry checks and staking for the two farm generations.

use choice::masterchef::{v1, v2, UserInfoResponse};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::msg::FarmVersion;
use crate::state::Config;

/// Calling convention of one farm contract.
pub trait Farm {
    fn version(&self) -> FarmVersion;

    /// The staking token registered for `pool_id`.
    fn registered_lp_token(&self, querier: &QuerierWrapper, pool_id: u64) -> StdResult<Addr>;

    /// Messages staking `amount` of `lp_token` held by `staker` into `pool_id`.
    /// The whole amount is staked or the messages fail.
    fn stake_msgs(
        &self,
        lp_token: &Addr,
        pool_id: u64,
        amount: Uint128,
        staker: &Addr,
    ) -> StdResult<Vec<CosmosMsg>>;

    /// Amount the farm records as staked by `staker` in `pool_id`.
    fn staked_amount(
        &self,
        querier: &QuerierWrapper,
        pool_id: u64,
        staker: &Addr,
    ) -> StdResult<Uint128>;
}

pub struct MasterChefV1 {
    pub contract: Addr,
}

impl Farm for MasterChefV1 {
    fn version(&self) -> FarmVersion {
        FarmVersion::V1
    }

    fn registered_lp_token(&self, querier: &QuerierWrapper, pool_id: u64) -> StdResult<Addr> {
        let pool: v1::PoolInfoResponse = querier
            .query_wasm_smart(self.contract.clone(), &v1::QueryMsg::PoolInfo { pid: pool_id })?;
        Ok(pool.lp_token)
    }

    // V1 pulls the stake, so it needs an allowance first.
    fn stake_msgs(
        &self,
        lp_token: &Addr,
        pool_id: u64,
        amount: Uint128,
        _staker: &Addr,
    ) -> StdResult<Vec<CosmosMsg>> {
        Ok(vec![
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: lp_token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.contract.to_string(),
                    amount,
                    expires: None,
                })?,
                funds: vec![],
            }),
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: self.contract.to_string(),
                msg: to_json_binary(&v1::ExecuteMsg::Deposit {
                    pid: pool_id,
                    amount,
                })?,
                funds: vec![],
            }),
        ])
    }

    fn staked_amount(
        &self,
        querier: &QuerierWrapper,
        pool_id: u64,
        staker: &Addr,
    ) -> StdResult<Uint128> {
        let user: UserInfoResponse = querier.query_wasm_smart(
            self.contract.clone(),
            &v1::QueryMsg::UserInfo {
                pid: pool_id,
                user: staker.to_string(),
            },
        )?;
        Ok(user.amount)
    }
}

pub struct MasterChefV2 {
    pub contract: Addr,
}

impl Farm for MasterChefV2 {
    fn version(&self) -> FarmVersion {
        FarmVersion::V2
    }

    fn registered_lp_token(&self, querier: &QuerierWrapper, pool_id: u64) -> StdResult<Addr> {
        let res: v2::LpTokenResponse = querier
            .query_wasm_smart(self.contract.clone(), &v2::QueryMsg::LpToken { pid: pool_id })?;
        Ok(res.lp_token)
    }

    fn stake_msgs(
        &self,
        lp_token: &Addr,
        pool_id: u64,
        amount: Uint128,
        staker: &Addr,
    ) -> StdResult<Vec<CosmosMsg>> {
        Ok(vec![CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: lp_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Send {
                contract: self.contract.to_string(),
                amount,
                msg: to_json_binary(&v2::Cw20HookMsg::Deposit {
                    pid: pool_id,
                    to: staker.to_string(),
                })?,
            })?,
            funds: vec![],
        })])
    }

    fn staked_amount(
        &self,
        querier: &QuerierWrapper,
        pool_id: u64,
        staker: &Addr,
    ) -> StdResult<Uint128> {
        let user: UserInfoResponse = querier.query_wasm_smart(
            self.contract.clone(),
            &v2::QueryMsg::UserInfo {
                pid: pool_id,
                user: staker.to_string(),
            },
        )?;
        Ok(user.amount)
    }
}

pub fn select_farm(config: &Config, version: FarmVersion) -> Box<dyn Farm> {
    match version {
        FarmVersion::V1 => Box::new(MasterChefV1 {
            contract: config.farm_v1.clone(),
        }),
        FarmVersion::V2 => Box::new(MasterChefV2 {
            contract: config.farm_v2.clone(),
        }),
    }
}

/// Fails with `PoolIdMismatch` unless `pool_id` of the farm stakes `expected_pair`.
pub fn validate_pool(
    querier: &QuerierWrapper,
    farm: &dyn Farm,
    pool_id: u64,
    expected_pair: &Addr,
) -> Result<(), ContractError> {
    let registered = farm.registered_lp_token(querier, pool_id)?;
    if registered != *expected_pair {
        return Err(ContractError::PoolIdMismatch {
            farm: farm.version().as_str().to_string(),
            pool_id,
            expected: expected_pair.to_string(),
            registered: registered.to_string(),
        });
    }

    Ok(())
}
