use crate::{
    common::{
        Error,
        types::{Method, PayoutRequest, PayoutResult, STATUS_PROCESSING, STATUS_UNKNOWN},
    },
    rest::{Client, Transport},
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use tracing::{debug, info};

pub const WITHDRAWALS_PATH: &str = "/v1/withdrawals";

pub trait Withdrawals {
    /// Start a blockchain withdrawal for one payout row.
    fn create_payout(
        &self,
        payout: &PayoutRequest,
    ) -> impl Future<Output = Result<PayoutResult, Error>>;

    /// Fetch the provider's current status string for a withdrawal.
    ///
    /// The id is placed in the signed path as-is, so it must be URL-safe.
    fn sync_status(
        &self,
        external_id: impl Display,
    ) -> impl Future<Output = Result<String, Error>>;
}

impl<T: Transport> Withdrawals for Client<T> {
    async fn create_payout(&self, payout: &PayoutRequest) -> Result<PayoutResult, Error> {
        let body = CreateWithdrawal::from(payout);
        let payload = self
            .signed_request(Method::Post, WITHDRAWALS_PATH, Some(&body))
            .await?;

        let result = PayoutResult {
            external_id: text_field(&payload, "id"),
            status: text_field(&payload, "status").unwrap_or_else(|| STATUS_PROCESSING.into()),
            raw: serde_json::to_string(&payload)?,
        };

        info!(
            "Payout {} => withdrawal {:?} {}",
            payout.id, result.external_id, result.status
        );

        Ok(result)
    }

    async fn sync_status(&self, external_id: impl Display) -> Result<String, Error> {
        let path = format!("{WITHDRAWALS_PATH}/{external_id}");
        let payload = self
            .signed_request::<Value>(Method::Get, &path, None)
            .await?;
        let status = text_field(&payload, "status").unwrap_or_else(|| STATUS_UNKNOWN.into());

        debug!("Withdrawal {external_id} => {status}");

        Ok(status)
    }
}

/// The PayPlay withdrawal body. Field order is the order on the wire.
#[derive(Debug, Serialize)]
struct CreateWithdrawal<'a> {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    asset: &'a str,
    address: &'a str,
    external_id: &'a str,
    callback_url: &'a str,
}

impl<'a> From<&'a PayoutRequest> for CreateWithdrawal<'a> {
    fn from(payout: &'a PayoutRequest) -> Self {
        Self {
            amount: payout.amount,
            asset: payout.currency.as_str(),
            address: payout.wallet.as_str(),
            external_id: payout.id.as_str(),
            callback_url: payout.callback_url(),
        }
    }
}

/// Read a payload field as text. Numbers are stringified; other types count as missing.
fn text_field(payload: &Value, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
