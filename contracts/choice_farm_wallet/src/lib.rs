pub mod contract;
pub mod error;
pub mod farm;
pub mod msg;
pub mod state;
