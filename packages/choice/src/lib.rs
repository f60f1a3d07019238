pub mod asset;
pub mod masterchef;
pub mod pair;
pub mod querier;
pub mod router;
