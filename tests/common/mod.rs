#![allow(dead_code)]

use cosmwasm_std::testing::MockApi;
use cosmwasm_std::{coins, Addr, Coin, Empty, StdResult, Uint128};
use cw_multi_test::{App, AppBuilder, AppResponse, Contract, ContractWrapper, Executor};
use nft_exchange::msg::{
    ExecuteMsg as ExchangeExecuteMsg, InstantiateMsg as ExchangeInstantiateMsg,
    OwnerOfResponse, QueryMsg as ExchangeQueryMsg, UnitsResponse,
};
use nft_exchange::state::PaymentPolicy;
use trustful_oracle::msg::{
    ExecuteMsg as OracleExecuteMsg, InitialPrice, InstantiateMsg as OracleInstantiateMsg,
    MedianPriceResponse, QueryMsg as OracleQueryMsg,
};

pub const DENOM: &str = "wei";
pub const SYMBOL: &str = "DVNFT";

pub const ETHER: u128 = 1_000_000_000_000_000_000;
pub const EXCHANGE_INITIAL_BALANCE: u128 = 9_990 * ETHER;
pub const INITIAL_NFT_PRICE: u128 = 999 * ETHER;
pub const ATTACKER_INITIAL_BALANCE: u128 = ETHER / 10;

fn oracle_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        trustful_oracle::contract::execute,
        trustful_oracle::contract::instantiate,
        trustful_oracle::contract::query,
    ))
}

fn exchange_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        nft_exchange::contract::execute,
        nft_exchange::contract::instantiate,
        nft_exchange::contract::query,
    ))
}

/// Deployment mirroring the challenge: three trusted sources reporting 999
/// ETH, an exchange holding 9990 ETH, and an attacker with 0.1 ETH.
pub struct Scenario {
    pub app: App,
    pub deployer: Addr,
    pub attacker: Addr,
    pub sources: Vec<Addr>,
    pub oracle: Addr,
    pub exchange: Addr,
    exchange_code_id: u64,
}

impl Scenario {
    pub fn new(policy: PaymentPolicy) -> Self {
        let api = MockApi::default();
        let deployer = api.addr_make("deployer");
        let attacker = api.addr_make("attacker");
        let sources: Vec<Addr> = (1..=3)
            .map(|i| api.addr_make(&format!("trusted_source_{i}")))
            .collect();

        let mut app = AppBuilder::new().build(|router, _, storage| {
            router
                .bank
                .init_balance(storage, &deployer, coins(EXCHANGE_INITIAL_BALANCE, DENOM))
                .unwrap();
            router
                .bank
                .init_balance(storage, &attacker, coins(ATTACKER_INITIAL_BALANCE, DENOM))
                .unwrap();
        });

        let oracle_code_id = app.store_code(oracle_contract());
        let exchange_code_id = app.store_code(exchange_contract());

        let oracle = app
            .instantiate_contract(
                oracle_code_id,
                deployer.clone(),
                &OracleInstantiateMsg {
                    sources: sources.iter().map(Addr::to_string).collect(),
                    initial_prices: sources
                        .iter()
                        .map(|source| InitialPrice {
                            source: source.to_string(),
                            symbol: SYMBOL.to_string(),
                            price: Uint128::new(INITIAL_NFT_PRICE),
                        })
                        .collect(),
                },
                &[],
                "trustful-oracle",
                None,
            )
            .unwrap();

        let exchange = instantiate_exchange(
            &mut app,
            exchange_code_id,
            &deployer,
            &oracle,
            SYMBOL,
            policy,
            &coins(EXCHANGE_INITIAL_BALANCE, DENOM),
        )
        .unwrap();

        Scenario {
            app,
            deployer,
            attacker,
            sources,
            oracle,
            exchange,
            exchange_code_id,
        }
    }

    /// Deploys another exchange against the same oracle.
    pub fn instantiate_exchange(
        &mut self,
        symbol: &str,
        policy: PaymentPolicy,
        funds: &[Coin],
    ) -> anyhow::Result<Addr> {
        instantiate_exchange(
            &mut self.app,
            self.exchange_code_id,
            &self.deployer,
            &self.oracle,
            symbol,
            policy,
            funds,
        )
    }

    pub fn post_price(&mut self, sender: &Addr, price: u128) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.oracle.clone(),
            &OracleExecuteMsg::PostPrice {
                symbol: SYMBOL.to_string(),
                price: Uint128::new(price),
            },
            &[],
        )
    }

    /// Posts `price` from the two sources whose keys leaked, logging the
    /// median after each post.
    pub fn post_from_compromised(&mut self, price: u128) {
        for i in 0..2 {
            let source = self.sources[i].clone();
            self.post_price(&source, price).unwrap();
            println!(
                "[ORACLE] source {} posted {} -> median {}",
                i + 1,
                price,
                self.median().unwrap()
            );
        }
    }

    pub fn median(&self) -> StdResult<u128> {
        let res: MedianPriceResponse = self.app.wrap().query_wasm_smart(
            self.oracle.as_str(),
            &OracleQueryMsg::MedianPrice {
                symbol: SYMBOL.to_string(),
            },
        )?;
        Ok(res.price.u128())
    }

    pub fn balance(&self, addr: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(addr.as_str(), DENOM)
            .unwrap()
            .amount
            .u128()
    }

    pub fn buy(&mut self, buyer: &Addr, paid: u128) -> anyhow::Result<AppResponse> {
        let exchange = self.exchange.clone();
        self.buy_from(&exchange, buyer, paid)
    }

    pub fn buy_from(
        &mut self,
        exchange: &Addr,
        buyer: &Addr,
        paid: u128,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            buyer.clone(),
            exchange.clone(),
            &ExchangeExecuteMsg::BuyOne {},
            &funds(paid),
        )
    }

    pub fn approve_exchange(&mut self, owner: &Addr, unit_id: u64) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            owner.clone(),
            self.exchange.clone(),
            &ExchangeExecuteMsg::Approve {
                spender: self.exchange.to_string(),
                unit_id,
            },
            &[],
        )
    }

    pub fn sell(&mut self, seller: &Addr, unit_id: u64) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            seller.clone(),
            self.exchange.clone(),
            &ExchangeExecuteMsg::SellOne { unit_id },
            &[],
        )
    }

    /// Every unit `owner` holds, following pages until the listing runs out.
    pub fn units_of(&self, owner: &Addr) -> Vec<u64> {
        let mut units = vec![];
        loop {
            let page = self.units_page(owner, units.last().copied(), None);
            if page.is_empty() {
                return units;
            }
            units.extend(page);
        }
    }

    pub fn units_page(
        &self,
        owner: &Addr,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> Vec<u64> {
        let res: UnitsResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.exchange.as_str(),
                &ExchangeQueryMsg::UnitsOf {
                    owner: owner.to_string(),
                    start_after,
                    limit,
                },
            )
            .unwrap();
        res.units
    }

    pub fn owner_of(&self, unit_id: u64) -> OwnerOfResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.exchange.as_str(),
                &ExchangeQueryMsg::OwnerOf { unit_id },
            )
            .unwrap()
    }
}

fn instantiate_exchange(
    app: &mut App,
    code_id: u64,
    deployer: &Addr,
    oracle: &Addr,
    symbol: &str,
    policy: PaymentPolicy,
    funds: &[Coin],
) -> anyhow::Result<Addr> {
    app.instantiate_contract(
        code_id,
        deployer.clone(),
        &ExchangeInstantiateMsg {
            oracle: oracle.to_string(),
            symbol: symbol.to_string(),
            denom: DENOM.to_string(),
            payment_policy: Some(policy),
        },
        funds,
        "nft-exchange",
        None,
    )
}

fn funds(amount: u128) -> Vec<Coin> {
    if amount == 0 {
        vec![]
    } else {
        coins(amount, DENOM)
    }
}

/// Value of the first attribute named `key` on the wasm event `ty`.
pub fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|event| event.ty == format!("wasm-{ty}"))
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
}
