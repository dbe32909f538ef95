use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::accounts_models::Account;
use crate::models::common::LedgerError;
use crate::models::transaction_models::{Transaction, TransactionType};

/// In-memory holder of all accounts and transactions. Lives for the whole
/// process and is shared between handlers through `AppState`.
///
/// The mutex is held for the full duration of each operation and never across
/// an await point, so every deposit/withdraw is atomic with respect to
/// concurrent requests. State is lost on restart.
pub struct LedgerStore {
    inner: Mutex<Inner>,
}

struct Inner {
    accounts: HashMap<String, Account>,
    transactions: Vec<Transaction>,
}

impl LedgerStore {
    pub fn new() -> LedgerStore {
        LedgerStore {
            inner: Mutex::new(Inner {
                accounts: HashMap::new(),
                transactions: Vec::new(),
            }),
        }
    }

    pub fn create_account(
        &self,
        client_name: &str,
        initial_balance: Decimal,
    ) -> Result<Account, LedgerError> {
        if client_name.trim().is_empty() || initial_balance < Decimal::ZERO {
            return Err(LedgerError::Validation(
                "Nombre de cliente y saldo inicial válido son requeridos.".into(),
            ));
        }

        let account = Account {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.to_string(),
            balance: initial_balance,
            created_at: Utc::now(),
        };

        let mut inner = self.inner.lock().unwrap();
        inner.accounts.insert(account.id.clone(), account.clone());
        tracing::info!("created account {} for {}", account.id, account.client_name);
        Ok(account)
    }

    pub fn get_account(&self, id: &str) -> Result<Account, LedgerError> {
        let inner = self.inner.lock().unwrap();
        inner
            .accounts
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound("Cuenta no encontrada.".into()))
    }

    pub fn list_accounts(&self) -> Vec<Account> {
        let inner = self.inner.lock().unwrap();
        inner.accounts.values().cloned().collect()
    }

    pub fn deposit(&self, account_id: &str, amount: Decimal) -> Result<Transaction, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(
                "ID de cuenta y monto de depósito válido son requeridos.".into(),
            ));
        }

        let mut inner = self.inner.lock().unwrap();
        let account = inner
            .accounts
            .get_mut(account_id)
            .ok_or_else(|| LedgerError::NotFound("Cuenta no encontrada.".into()))?;

        // checked_add keeps an overflowing amount from panicking with the
        // lock held, which would poison the store for every later request.
        account.balance = account.balance.checked_add(amount).ok_or_else(|| {
            LedgerError::Validation("ID de cuenta y monto de depósito válido son requeridos.".into())
        })?;
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            account_id: account_id.to_string(),
            txn_type: TransactionType::Deposit,
            amount,
            timestamp: Utc::now(),
            current_balance: account.balance,
        };
        tracing::info!("deposit of {} to account {}", amount, account_id);

        inner.transactions.push(transaction.clone());
        Ok(transaction)
    }

    pub fn withdraw(&self, account_id: &str, amount: Decimal) -> Result<Transaction, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(
                "ID de cuenta y monto de retiro válido son requeridos.".into(),
            ));
        }

        let mut inner = self.inner.lock().unwrap();
        let account = inner
            .accounts
            .get_mut(account_id)
            .ok_or_else(|| LedgerError::NotFound("Cuenta no encontrada.".into()))?;

        if account.balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }

        account.balance = account.balance.checked_sub(amount).ok_or_else(|| {
            LedgerError::Validation("ID de cuenta y monto de retiro válido son requeridos.".into())
        })?;
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            account_id: account_id.to_string(),
            txn_type: TransactionType::Withdraw,
            amount,
            timestamp: Utc::now(),
            current_balance: account.balance,
        };
        tracing::info!("withdrawal of {} from account {}", amount, account_id);

        inner.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// History of an account, most recent first. An account with no
    /// transactions yet is reported as not found, matching the API contract.
    pub fn list_transactions(&self, account_id: &str) -> Result<Vec<Transaction>, LedgerError> {
        let inner = self.inner.lock().unwrap();
        let mut history: Vec<Transaction> = inner
            .transactions
            .iter()
            .filter(|tx| tx.account_id == account_id)
            .cloned()
            .collect();

        if history.is_empty() {
            return Err(LedgerError::NotFound(
                "No se encontraron transacciones para esta cuenta.".into(),
            ));
        }

        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(history)
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn create_account_returns_unique_ids_and_exact_balance() {
        let store = LedgerStore::new();
        let a = store.create_account("Ana", dec("100")).unwrap();
        let b = store.create_account("Ana", dec("100")).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.balance, dec("100"));
        assert_eq!(a.client_name, "Ana");
    }

    #[test]
    fn create_account_rejects_empty_name_and_negative_balance() {
        let store = LedgerStore::new();

        assert!(matches!(
            store.create_account("", dec("10")),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            store.create_account("   ", dec("10")),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            store.create_account("Ana", dec("-1")),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn create_account_allows_zero_balance() {
        let store = LedgerStore::new();
        let account = store.create_account("Ana", Decimal::ZERO).unwrap();
        assert_eq!(account.balance, Decimal::ZERO);
    }

    #[test]
    fn get_account_unknown_id_is_not_found() {
        let store = LedgerStore::new();
        assert!(matches!(
            store.get_account("missing"),
            Err(LedgerError::NotFound(_))
        ));
    }

    #[test]
    fn deposit_adds_amount_and_snapshots_balance() {
        let store = LedgerStore::new();
        let account = store.create_account("Ana", dec("100")).unwrap();

        let tx = store.deposit(&account.id, dec("50.5")).unwrap();
        assert_eq!(tx.txn_type, TransactionType::Deposit);
        assert_eq!(tx.current_balance, dec("150.5"));
        assert_eq!(store.get_account(&account.id).unwrap().balance, dec("150.5"));
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let store = LedgerStore::new();
        let account = store.create_account("Ana", dec("100")).unwrap();

        assert!(matches!(
            store.deposit(&account.id, Decimal::ZERO),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            store.deposit(&account.id, dec("-5")),
            Err(LedgerError::Validation(_))
        ));
        assert_eq!(store.get_account(&account.id).unwrap().balance, dec("100"));
    }

    #[test]
    fn deposit_to_unknown_account_is_not_found() {
        let store = LedgerStore::new();
        assert!(matches!(
            store.deposit("missing", dec("10")),
            Err(LedgerError::NotFound(_))
        ));
    }

    #[test]
    fn withdraw_beyond_balance_fails_and_leaves_balance_untouched() {
        let store = LedgerStore::new();
        let account = store.create_account("Ana", dec("100")).unwrap();

        assert!(matches!(
            store.withdraw(&account.id, dec("200")),
            Err(LedgerError::InsufficientFunds)
        ));
        assert_eq!(store.get_account(&account.id).unwrap().balance, dec("100"));
        assert!(store.list_transactions(&account.id).is_err());
    }

    #[test]
    fn withdraw_of_full_balance_is_allowed() {
        let store = LedgerStore::new();
        let account = store.create_account("Ana", dec("100")).unwrap();

        let tx = store.withdraw(&account.id, dec("100")).unwrap();
        assert_eq!(tx.current_balance, Decimal::ZERO);
        assert_eq!(store.get_account(&account.id).unwrap().balance, Decimal::ZERO);
    }

    #[test]
    fn history_is_sorted_most_recent_first() {
        let store = LedgerStore::new();
        let account = store.create_account("Ana", dec("100")).unwrap();

        store.deposit(&account.id, dec("10")).unwrap();
        store.withdraw(&account.id, dec("5")).unwrap();
        store.deposit(&account.id, dec("20")).unwrap();

        let history = store.list_transactions(&account.id).unwrap();
        assert_eq!(history.len(), 3);
        assert!(history.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert_eq!(history[0].txn_type, TransactionType::Deposit);
        assert_eq!(history[0].amount, dec("20"));
    }

    #[test]
    fn history_of_account_without_transactions_is_not_found() {
        let store = LedgerStore::new();
        let account = store.create_account("Ana", dec("100")).unwrap();

        assert!(matches!(
            store.list_transactions(&account.id),
            Err(LedgerError::NotFound(_))
        ));
    }

    #[test]
    fn overflowing_deposit_is_rejected_and_store_stays_usable() {
        let store = LedgerStore::new();
        let account = store.create_account("Ana", Decimal::MAX).unwrap();

        assert!(matches!(
            store.deposit(&account.id, Decimal::MAX),
            Err(LedgerError::Validation(_))
        ));

        // The failed deposit left no trace and later operations still work.
        let fetched = store.get_account(&account.id).unwrap();
        assert_eq!(fetched.balance, Decimal::MAX);
        assert!(store.list_transactions(&account.id).is_err());

        let tx = store.withdraw(&account.id, dec("1")).unwrap();
        assert_eq!(tx.current_balance, Decimal::MAX - dec("1"));
    }

    #[test]
    fn signed_transaction_amounts_sum_to_balance_delta() {
        let store = LedgerStore::new();
        let account = store.create_account("Ana", dec("100")).unwrap();

        store.deposit(&account.id, dec("40")).unwrap();
        store.deposit(&account.id, dec("2.25")).unwrap();
        store.withdraw(&account.id, dec("17.5")).unwrap();

        let history = store.list_transactions(&account.id).unwrap();
        let delta: Decimal = history
            .iter()
            .map(|tx| match tx.txn_type {
                TransactionType::Deposit => tx.amount,
                TransactionType::Withdraw => -tx.amount,
            })
            .sum();

        let balance = store.get_account(&account.id).unwrap().balance;
        assert_eq!(delta, balance - dec("100"));
    }
}
