use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::AppState;
use crate::controllers::transaction_controllers::{
    deposit_money, get_account_transactions, withdraw_money,
};

pub fn transaction_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/deposit", post(deposit_money))
        .route("/withdraw", post(withdraw_money))
        .route("/{account_id}", get(get_account_transactions))
}
