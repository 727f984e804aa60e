use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::enums::PaymentType;
use crate::error::{ContractError, Result};
use crate::Params;

/// 支付参数请求的可选描述字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentRequestDetails {
    pub order_id: Option<u64>,
    pub order_state: Option<String>,
    pub request_time: Option<String>,
    pub app_id: Option<String>,
    pub mch_id: Option<String>,
    pub description: Option<String>,
    pub attach: Option<String>,
    pub open_id: Option<String>,
    pub notify_url: Option<String>,
    pub payment_type_enum: Option<PaymentType>,
}

/// 支付参数响应槽位，只允许从未设置变为已设置一次
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PaymentParams {
    #[default]
    Unset,
    Set(Params),
}

impl PaymentParams {
    pub fn params(&self) -> Option<&Params> {
        match self {
            Self::Unset => None,
            Self::Set(params) => Some(params),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

/// 支付参数请求事件
///
/// 支付流程发布此事件，由监听者填充真实的支付网关参数，发布方再读回。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentParametersRequestedEvent {
    /// 支付类型 (如: alipay, wechat_pay, bank_card)，保留字符串以兼容旧调用方
    payment_type: String,
    amount: Decimal,
    order_number: String,
    #[serde(flatten)]
    details: PaymentRequestDetails,
    #[serde(skip)]
    payment_params: PaymentParams,
}

impl PaymentParametersRequestedEvent {
    pub fn new(
        payment_type: impl Into<String>,
        amount: Decimal,
        order_number: impl Into<String>,
    ) -> Self {
        Self {
            payment_type: payment_type.into(),
            amount,
            order_number: order_number.into(),
            details: PaymentRequestDetails::default(),
            payment_params: PaymentParams::Unset,
        }
    }

    pub fn with_details(mut self, details: PaymentRequestDetails) -> Self {
        self.details = details;
        self
    }

    pub fn payment_type(&self) -> &str {
        &self.payment_type
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn details(&self) -> &PaymentRequestDetails {
        &self.details
    }

    pub fn order_id(&self) -> Option<u64> {
        self.details.order_id
    }

    pub fn order_state(&self) -> Option<&str> {
        self.details.order_state.as_deref()
    }

    pub fn request_time(&self) -> Option<&str> {
        self.details.request_time.as_deref()
    }

    pub fn app_id(&self) -> Option<&str> {
        self.details.app_id.as_deref()
    }

    pub fn mch_id(&self) -> Option<&str> {
        self.details.mch_id.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.details.description.as_deref()
    }

    pub fn attach(&self) -> Option<&str> {
        self.details.attach.as_deref()
    }

    pub fn open_id(&self) -> Option<&str> {
        self.details.open_id.as_deref()
    }

    pub fn notify_url(&self) -> Option<&str> {
        self.details.notify_url.as_deref()
    }

    pub fn payment_type_enum(&self) -> Option<PaymentType> {
        self.details.payment_type_enum
    }

    /// 解析后的支付类型，优先使用显式枚举
    pub fn resolved_payment_type(&self) -> Option<PaymentType> {
        self.details
            .payment_type_enum
            .or_else(|| PaymentType::from_value(&self.payment_type))
    }

    /// 额外参数，只包含已设置的可选字段
    pub fn extra_params(&self) -> Params {
        let details = &self.details;
        let mut params = Params::new();

        let mut put = |key: &str, value: Option<Value>| {
            if let Some(value) = value {
                params.insert(key.to_string(), value);
            }
        };

        put("orderId", details.order_id.map(Value::from));
        put("orderState", details.order_state.clone().map(Value::String));
        put("requestTime", details.request_time.clone().map(Value::String));
        put("appId", details.app_id.clone().map(Value::String));
        put("mchId", details.mch_id.clone().map(Value::String));
        put("description", details.description.clone().map(Value::String));
        put("attach", details.attach.clone().map(Value::String));
        put("openId", details.open_id.clone().map(Value::String));
        put("notifyUrl", details.notify_url.clone().map(Value::String));
        put("paymentType", details.payment_type_enum.map(|t| Value::from(t.value())));

        params
    }

    /// 网关请求参数：必填字段加上已设置的可选字段
    pub fn request_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("paymentType".to_string(), Value::from(self.payment_type.as_str()));
        params.insert("amount".to_string(), Value::from(self.amount.to_string()));
        params.insert("orderNumber".to_string(), Value::from(self.order_number.as_str()));

        // 可选字段中的 paymentType 为枚举取值，覆盖原始字符串
        params.extend(self.extra_params());
        params
    }

    /// 设置支付参数响应，重复设置返回错误并保留首次结果
    pub fn set_payment_params(&mut self, params: Params) -> Result<()> {
        if self.payment_params.is_set() {
            warn!(order_number = %self.order_number, "支付参数已设置，忽略重复写入");
            return Err(ContractError::PaymentParamsAlreadySet {
                order_number: self.order_number.clone(),
            });
        }

        self.payment_params = PaymentParams::Set(params);
        Ok(())
    }

    /// 消费事件并返回已填充参数的新事件
    pub fn fulfill(mut self, params: Params) -> Result<Self> {
        self.set_payment_params(params)?;
        Ok(self)
    }

    pub fn payment_params(&self) -> Option<&Params> {
        self.payment_params.params()
    }

    pub fn has_payment_params(&self) -> bool {
        self.payment_params.is_set()
    }
}
