//! Buyer parties: records, the autocompletion directory, and its persistence.
//!
//! `buyer` is pure domain logic; `repository` is the only place that touches
//! storage, behind the injectable `BuyerRepository` trait.

pub mod buyer;
pub mod repository;

pub use buyer::{BuyerDirectory, BuyerRecord};
pub use repository::{
    BUYER_DIRECTORY_KEY, BuyerRepository, InMemoryBuyerRepository, JsonFileBuyerRepository,
    RepositoryError,
};
