use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::AppState;
use crate::controllers::accounts_controllers::{
    create_account, get_account_details, get_accounts,
};

pub fn accounts_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_accounts).post(create_account))
        .route("/{account_id}", get(get_account_details))
}
