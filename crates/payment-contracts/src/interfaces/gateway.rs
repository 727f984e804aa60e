use tracing::debug;

use crate::enums::PaymentType;
use crate::error::{ContractError, Result};
use crate::events::{PaymentEventListener, PaymentParametersRequestedEvent};
use crate::Params;

/// 支付网关
///
/// 由具体的支付渠道模块实现，本库只定义能力。
pub trait PaymentGateway: Send + Sync {
    /// 根据支付请求参数生成支付参数
    fn payment_params(&self, params: &Params) -> Result<Params>;

    /// 支持的支付类型
    fn supported_payment_type(&self) -> PaymentType;

    /// 使用前校验支付请求参数
    fn validate_payment_params(&self, params: &Params) -> bool;
}

/// 把网关适配为参数请求事件的监听者
///
/// 只处理支付类型与网关一致、且尚未被其他监听者填充的事件。
pub struct GatewayListener<G> {
    gateway: G,
}

impl<G: PaymentGateway> GatewayListener<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn accepts(&self, event: &PaymentParametersRequestedEvent) -> bool {
        let supported = self.gateway.supported_payment_type();
        event.payment_type() == supported.value() || event.payment_type_enum() == Some(supported)
    }
}

impl<G: PaymentGateway> PaymentEventListener for GatewayListener<G> {
    fn on_parameters_requested(&self, event: &mut PaymentParametersRequestedEvent) -> Result<()> {
        if !self.accepts(event) {
            debug!(
                payment_type = event.payment_type(),
                supported = %self.gateway.supported_payment_type(),
                "支付类型不匹配，跳过"
            );
            return Ok(());
        }

        if event.has_payment_params() {
            debug!(order_number = event.order_number(), "支付参数已由其他监听者填充");
            return Ok(());
        }

        let request = event.request_params();
        if !self.gateway.validate_payment_params(&request) {
            return Err(ContractError::InvalidPaymentParams(format!(
                "订单 {} 的支付请求参数校验失败",
                event.order_number()
            )));
        }

        let params = self.gateway.payment_params(&request)?;
        event.set_payment_params(params)
    }
}
