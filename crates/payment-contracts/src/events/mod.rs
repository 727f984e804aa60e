pub mod parameters_requested;
pub mod payment_failed;
pub mod payment_success;

pub use parameters_requested::{
    PaymentParametersRequestedEvent, PaymentParams, PaymentRequestDetails,
};
pub use payment_failed::PaymentFailedEvent;
pub use payment_success::PaymentSuccessEvent;

use crate::error::Result;

/// 支付事件监听者
///
/// 由外部事件总线同步调用。参数请求事件要求监听者在返回前填充支付参数，
/// 成功/失败事件为通知型，默认忽略。
pub trait PaymentEventListener: Send + Sync {
    fn on_parameters_requested(&self, event: &mut PaymentParametersRequestedEvent) -> Result<()>;

    fn on_payment_success(&self, _event: &PaymentSuccessEvent) {}

    fn on_payment_failed(&self, _event: &PaymentFailedEvent) {}
}
