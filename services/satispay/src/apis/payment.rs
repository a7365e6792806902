use super::segment;
use crate::CurrencyTable;
use http::Method;
use paysign_core::{CallDescriptor, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

const PAYMENTS_PATH: &str = "/v1/payments";

/// How a payment is initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFlow {
    /// The consumer scans a code.
    MatchCode,
    /// The shop requests the payment from a known consumer.
    MatchUser,
    /// Refund of an earlier payment.
    Refund,
    /// Payment charged against a pre-authorized token.
    PreAuthorized,
}

/// Action applied to a pending payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentAction {
    /// Accept the payment.
    Accept,
    /// Cancel the payment.
    Cancel,
    /// Cancel the payment, or refund it if already accepted.
    CancelOrRefund,
}

/// Body of a payment creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePayment {
    pub flow: PaymentFlow,
    pub amount_unit: i64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_authorized_payments_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_payment_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

impl CreatePayment {
    /// A payment of `amount_unit` minor units.
    pub fn new(flow: PaymentFlow, amount_unit: i64, currency: impl Into<String>) -> Self {
        Self {
            flow,
            amount_unit,
            currency: currency.into(),
            pre_authorized_payments_token: None,
            parent_payment_uid: None,
            consumer_uid: None,
            external_code: None,
            callback_url: None,
            redirect_url: None,
            metadata: None,
            expiration_date: None,
        }
    }

    /// A payment of `amount` in major units, converted with `currencies`.
    pub fn with_amount(
        currencies: &CurrencyTable,
        flow: PaymentFlow,
        currency: &str,
        amount: Decimal,
    ) -> Result<Self> {
        let amount_unit = currencies.to_minor_units(Some(currency), amount)?;
        Ok(Self::new(flow, amount_unit, currency.to_uppercase()))
    }
}

/// Body of a payment update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePayment {
    pub action: PaymentAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_unit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl UpdatePayment {
    /// An update applying `action`.
    pub fn new(action: PaymentAction) -> Self {
        Self {
            action,
            amount_unit: None,
            metadata: None,
        }
    }
}

/// A payment as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Payment {
    pub id: String,
    #[serde(default)]
    pub code_identifier: Option<String>,
    #[serde(default)]
    pub amount_unit: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub expired: Option<bool>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub insert_date: Option<String>,
    #[serde(default)]
    pub expire_date: Option<String>,
    #[serde(default)]
    pub external_code: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

/// Create a payment.
pub fn create(body: &CreatePayment) -> Result<CallDescriptor<Payment>> {
    CallDescriptor::json(Method::POST, PAYMENTS_PATH, body)
}

/// Get a payment by id.
pub fn get(id: &str) -> CallDescriptor<Payment> {
    CallDescriptor::get(format!("{PAYMENTS_PATH}/{}", segment(id)))
}

/// Update a payment.
pub fn update(id: &str, body: &UpdatePayment) -> Result<CallDescriptor<Payment>> {
    CallDescriptor::json(
        Method::PUT,
        format!("{PAYMENTS_PATH}/{}", segment(id)),
        body,
    )
}
