pub mod accounts_controllers;
pub mod transaction_controllers;
