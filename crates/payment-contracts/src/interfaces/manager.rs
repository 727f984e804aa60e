use crate::error::Result;
use crate::Params;

/// 支付管理器
pub trait PaymentManager: Send + Sync {
    /// 发起支付
    fn initiate_payment(&self, payment_data: &Params) -> Result<Params>;

    /// 查询支付状态
    fn payment_status(&self, payment_id: &str) -> Result<String>;

    /// 取消支付
    fn cancel_payment(&self, payment_id: &str) -> Result<bool>;
}
