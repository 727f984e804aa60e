use serde::{Deserialize, Serialize};

use crate::enums::{PaymentChannel, PaymentType};
use crate::Params;

/// 通用支付失败事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFailedEvent {
    payment_type: PaymentType,
    order_number: String,
    order_id: u64,
    fail_reason: String,
    #[serde(default)]
    raw_data: Params,
}

impl PaymentFailedEvent {
    pub fn new(
        payment_type: PaymentType,
        order_number: impl Into<String>,
        order_id: u64,
        fail_reason: impl Into<String>,
    ) -> Self {
        Self {
            payment_type,
            order_number: order_number.into(),
            order_id,
            fail_reason: fail_reason.into(),
            raw_data: Params::new(),
        }
    }

    pub fn with_raw_data(mut self, raw_data: Params) -> Self {
        self.raw_data = raw_data;
        self
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn channel(&self) -> PaymentChannel {
        self.payment_type.channel()
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn order_id(&self) -> u64 {
        self.order_id
    }

    pub fn fail_reason(&self) -> &str {
        &self.fail_reason
    }

    pub fn raw_data(&self) -> &Params {
        &self.raw_data
    }
}
