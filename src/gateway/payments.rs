//! Payments gateway
//!
//! Payments cannot be changed once created, so there is no update call.

use super::{fetch, send_validated};
use crate::client::{encode_segment, Transport};
use crate::types::{CreatePaymentData, ListQuery, Payment, PaymentList, PaymentListQuery};
use crate::Result;
use http::Method;
use std::sync::Arc;

/// Operations on `/payments`
#[derive(Clone)]
pub struct PaymentsGateway {
    transport: Arc<dyn Transport>,
}

impl PaymentsGateway {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Validate and create a payment
    pub async fn create_payment(&self, data: &CreatePaymentData) -> Result<Payment> {
        send_validated(self.transport.as_ref(), Method::POST, "payments", data).await
    }

    pub async fn retrieve_payment(&self, payment_token: &str) -> Result<Payment> {
        let path = format!("payments/{}", encode_segment(payment_token));
        fetch(self.transport.as_ref(), Method::GET, &path, None, String::new()).await
    }

    pub async fn list_payments(&self, query: &PaymentListQuery) -> Result<PaymentList> {
        let pairs = query.to_query();
        fetch(
            self.transport.as_ref(),
            Method::GET,
            "payments",
            Some(&pairs),
            String::new(),
        )
        .await
    }
}
