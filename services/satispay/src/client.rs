use crate::apis::{authorization, consumer, payment, signature_test};
use crate::{Config, Credential, CurrencyTable, DefaultCredentialProvider, RequestSigner};
use log::debug;
use paysign_core::{
    CallDescriptor, CallHandle, CallStream, Client, Context, ProvideCredential, Result, Signer,
};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Client for the Satispay business gateway.
///
/// Wraps a generic [`Client`] configured with the Satispay signer, endpoint
/// and identification headers. Calls are built with the resource helpers
/// and dispatched with [`call`](Self::call), [`queue`](Self::queue) or
/// [`stream`](Self::stream).
#[derive(Debug, Clone)]
pub struct SatispayClient {
    inner: Client<Credential>,
    currencies: CurrencyTable,
}

impl SatispayClient {
    /// Create a client loading credentials from `provider`.
    pub fn new(
        ctx: Context,
        config: &Config,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let endpoint = config.environment.endpoint()?;
        debug!("satispay client targets {endpoint}");

        let signer = Signer::new(ctx.clone(), provider, RequestSigner::new());
        let inner = Client::new(ctx, signer, endpoint)
            .with_default_headers(config.client_info.headers()?);

        Ok(Self {
            inner,
            currencies: CurrencyTable::default(),
        })
    }

    /// Create a client with the default credential chain for `config`.
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        Self::new(ctx, config, DefaultCredentialProvider::with_config(config))
    }

    /// Replace the currency table used for amount conversion.
    pub fn with_currencies(mut self, currencies: CurrencyTable) -> Self {
        self.currencies = currencies;
        self
    }

    /// The underlying generic client.
    pub fn inner(&self) -> &Client<Credential> {
        &self.inner
    }

    /// Currency table used for amount conversion.
    pub fn currencies(&self) -> &CurrencyTable {
        &self.currencies
    }

    /// Payment calls.
    pub fn payments(&self) -> Payments<'_> {
        Payments { client: self }
    }

    /// Pre-authorization calls.
    pub fn authorizations(&self) -> Authorizations {
        Authorizations {}
    }

    /// Consumer calls.
    pub fn consumers(&self) -> Consumers {
        Consumers {}
    }

    /// Signature self-check call.
    pub fn signature_test(&self) -> CallDescriptor<signature_test::SignatureTest> {
        signature_test::test_signature()
    }

    /// Sign, send and resolve a call.
    pub async fn send<T: DeserializeOwned>(&self, call: &CallDescriptor<T>) -> Result<T> {
        self.inner.send(call).await
    }

    /// See [`Client::call`].
    pub fn call<T: DeserializeOwned>(&self, call: &CallDescriptor<T>) -> Result<T> {
        self.inner.call(call)
    }

    /// See [`Client::queue`].
    pub fn queue<T>(&self, call: &CallDescriptor<T>) -> Result<CallHandle<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.inner.queue(call)
    }

    /// See [`Client::stream`].
    pub fn stream<T>(&self, call: &CallDescriptor<T>) -> CallStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.inner.stream(call)
    }
}

/// Builds payment calls.
#[derive(Debug, Clone, Copy)]
pub struct Payments<'a> {
    client: &'a SatispayClient,
}

impl Payments<'_> {
    /// Create a payment.
    pub fn create(&self, body: &payment::CreatePayment) -> Result<CallDescriptor<payment::Payment>> {
        payment::create(body)
    }

    /// Create a payment of `amount` major units of `currency`.
    pub fn create_amount(
        &self,
        flow: payment::PaymentFlow,
        currency: &str,
        amount: Decimal,
    ) -> Result<CallDescriptor<payment::Payment>> {
        let body =
            payment::CreatePayment::with_amount(&self.client.currencies, flow, currency, amount)?;
        payment::create(&body)
    }

    /// Get a payment.
    pub fn get(&self, id: &str) -> CallDescriptor<payment::Payment> {
        payment::get(id)
    }

    /// Update a payment.
    pub fn update(
        &self,
        id: &str,
        body: &payment::UpdatePayment,
    ) -> Result<CallDescriptor<payment::Payment>> {
        payment::update(id, body)
    }
}

/// Builds pre-authorization calls.
#[derive(Debug, Clone, Copy)]
pub struct Authorizations {}

impl Authorizations {
    /// Request a pre-authorization.
    pub fn create(
        &self,
        body: &authorization::CreateAuthorization,
    ) -> Result<CallDescriptor<authorization::Authorization>> {
        authorization::create(body)
    }

    /// Get a pre-authorization.
    pub fn get(&self, id: &str) -> CallDescriptor<authorization::Authorization> {
        authorization::get(id)
    }

    /// Update a pre-authorization.
    pub fn update(
        &self,
        id: &str,
        body: &authorization::UpdateAuthorization,
    ) -> Result<CallDescriptor<authorization::Authorization>> {
        authorization::update(id, body)
    }
}

/// Builds consumer calls.
#[derive(Debug, Clone, Copy)]
pub struct Consumers {}

impl Consumers {
    /// Look up a consumer by phone number.
    pub fn retrieve(&self, phone_number: &str) -> CallDescriptor<consumer::Consumer> {
        consumer::retrieve(phone_number)
    }
}
