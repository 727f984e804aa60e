use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{PaymentChannel, PaymentType};
use crate::Params;

/// 通用支付成功事件
///
/// 解耦支付模块与订单模块，支付成功后发布此事件。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccessEvent {
    payment_type: PaymentType,
    order_number: String,
    order_id: u64,
    /// 第三方交易号
    transaction_id: String,
    /// 实际支付金额
    amount: Decimal,
    pay_time: DateTime<FixedOffset>,
    /// 原始回调数据
    #[serde(default)]
    raw_data: Params,
}

impl PaymentSuccessEvent {
    pub fn new(
        payment_type: PaymentType,
        order_number: impl Into<String>,
        order_id: u64,
        transaction_id: impl Into<String>,
        amount: Decimal,
        pay_time: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            payment_type,
            order_number: order_number.into(),
            order_id,
            transaction_id: transaction_id.into(),
            amount,
            pay_time,
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

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn pay_time(&self) -> &DateTime<FixedOffset> {
        &self.pay_time
    }

    pub fn raw_data(&self) -> &Params {
        &self.raw_data
    }
}
