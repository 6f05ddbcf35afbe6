use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use bank_ledger::{Account, Amount, Balance, BankReport, Ledger, Transaction};

use crate::error::ServerError;

/// The one ledger instance, shared by every handler.
pub(crate) type SharedLedger = Arc<Mutex<Ledger>>;

type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AccountBalance {
    name: String,
    amount: Balance,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddFunds {
    name: String,
    amount: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoveFunds {
    name_from: String,
    name_to: String,
    amount: serde_json::Value,
}

/// Amounts may arrive as form-style text; text holding an integer counts as that integer.
/// Anything else is passed on for the ledger to reject.
fn coerce_amount(amount: serde_json::Value) -> serde_json::Value {
    match amount {
        serde_json::Value::String(text) => match text.trim().parse::<Amount>() {
            Ok(parsed) => parsed.into(),
            Err(_) => serde_json::Value::String(text),
        },
        other => other,
    }
}

pub(crate) fn app(ledger: Ledger) -> Router {
    Router::new()
        .route("/accounts", get(list_accounts))
        .route("/accounts/:name", post(create_account).get(get_account))
        .route("/transactions", get(list_transactions))
        .route("/money", post(add_funds))
        .route("/money/move", post(move_funds))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(Mutex::new(ledger)))
}

async fn create_account(
    State(ledger): State<SharedLedger>,
    Path(name): Path<String>,
) -> Json<Account> {
    let mut ledger = ledger.lock().await;
    Json(ledger.create_account(&name))
}

async fn get_account(
    State(ledger): State<SharedLedger>,
    Path(name): Path<String>,
) -> ServerResult<Json<AccountBalance>> {
    let ledger = ledger.lock().await;
    let account = ledger.get_account(&name)?;
    let amount = BankReport::new(&ledger).get_balance(&name)?;
    Ok(Json(AccountBalance { name: account.name().to_owned(), amount }))
}

async fn list_accounts(State(ledger): State<SharedLedger>) -> Json<Vec<Account>> {
    let ledger = ledger.lock().await;
    Json(ledger.list_accounts().into_iter().collect())
}

async fn list_transactions(State(ledger): State<SharedLedger>) -> Json<Vec<Transaction>> {
    let ledger = ledger.lock().await;
    Json(ledger.list_transactions())
}

async fn add_funds(
    State(ledger): State<SharedLedger>,
    payload: Result<Json<AddFunds>, JsonRejection>,
) -> ServerResult<StatusCode> {
    let Json(body) = payload?;
    let mut ledger = ledger.lock().await;
    ledger.add_funds(&body.name, coerce_amount(body.amount))?;
    Ok(StatusCode::OK)
}

async fn move_funds(
    State(ledger): State<SharedLedger>,
    payload: Result<Json<MoveFunds>, JsonRejection>,
) -> ServerResult<StatusCode> {
    let Json(body) = payload?;
    let mut ledger = ledger.lock().await;
    ledger.move_funds(&body.name_from, &body.name_to, coerce_amount(body.amount))?;
    Ok(StatusCode::OK)
}
