use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use crate::AppState;
use crate::models::common::LedgerError;
use crate::models::transaction_models::{DepositRequest, Transaction, WithdrawRequest};

pub async fn deposit_money(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<DepositRequest>,
) -> Result<Json<Transaction>, LedgerError> {
    tracing::info!("Deposit money to an account");

    let (Some(account_id), Some(amount)) = (req.account_id, req.amount) else {
        return Err(LedgerError::Validation(
            "ID de cuenta y monto de depósito válido son requeridos.".into(),
        ));
    };

    let transaction = app_state.ledger.deposit(&account_id, amount)?;
    Ok(Json(transaction))
}

pub async fn withdraw_money(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<WithdrawRequest>,
) -> Result<Json<Transaction>, LedgerError> {
    tracing::info!("Withdraw money from an account");

    let (Some(account_id), Some(amount)) = (req.account_id, req.amount) else {
        return Err(LedgerError::Validation(
            "ID de cuenta y monto de retiro válido son requeridos.".into(),
        ));
    };

    let transaction = app_state.ledger.withdraw(&account_id, amount)?;
    Ok(Json(transaction))
}

pub async fn get_account_transactions(
    State(app_state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> Result<Json<Vec<Transaction>>, LedgerError> {
    tracing::info!("Get all transactions of an account");
    let transactions = app_state.ledger.list_transactions(&account_id)?;
    Ok(Json(transactions))
}
