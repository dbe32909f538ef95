pub mod accounts_models;
pub mod common;
pub mod transaction_models;
