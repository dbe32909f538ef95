use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::models::accounts_models::{Account, NewAccount};
use crate::models::common::LedgerError;

pub async fn create_account(
    State(app_state): State<Arc<AppState>>,
    Json(new_account): Json<NewAccount>,
) -> Result<(StatusCode, Json<Account>), LedgerError> {
    tracing::info!("Creates a new account");

    // A missing field gets the same 400 as an invalid one.
    let (Some(client_name), Some(initial_balance)) =
        (new_account.client_name, new_account.initial_balance)
    else {
        return Err(LedgerError::Validation(
            "Nombre de cliente y saldo inicial válido son requeridos.".into(),
        ));
    };

    let account = app_state
        .ledger
        .create_account(&client_name, initial_balance)?;
    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn get_account_details(
    State(app_state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> Result<Json<Account>, LedgerError> {
    tracing::info!("Get account details of the specific account");
    let account = app_state.ledger.get_account(&account_id)?;
    Ok(Json(account))
}

pub async fn get_accounts(State(app_state): State<Arc<AppState>>) -> Json<Vec<Account>> {
    tracing::info!("Get all accounts");
    Json(app_state.ledger.list_accounts())
}
