use thiserror::Error;

/// 无效附加数据的默认提示
pub const DEFAULT_INVALID_ATTACH_MESSAGE: &str = "无效的附加数据格式";

#[derive(Error, Debug)]
pub enum ContractError {
    /// attach 字段为空、格式错误或缺少必需字段
    #[error("{0}")]
    InvalidAttachData(String),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("支付参数已设置: 订单 {order_number}")]
    PaymentParamsAlreadySet { order_number: String },

    #[error("无效的支付参数: {0}")]
    InvalidPaymentParams(String),

    #[error("不支持的支付类型: {0}")]
    UnsupportedPaymentType(String),

    #[error("支付网关错误: {0}")]
    Gateway(String),
}

pub type Result<T> = std::result::Result<T, ContractError>;

impl ContractError {
    pub fn invalid_attach_data(message: impl Into<String>) -> Self {
        Self::InvalidAttachData(message.into())
    }

    pub fn invalid_attach_data_default() -> Self {
        Self::InvalidAttachData(DEFAULT_INVALID_ATTACH_MESSAGE.to_string())
    }

    /// 业务错误码，供上层 HTTP 接口映射响应
    pub fn code(&self) -> u16 {
        match self {
            Self::Serialization(_) => 1006,
            Self::InvalidPaymentParams(_) => 3001,
            Self::InvalidAttachData(_) => 4010,
            Self::PaymentParamsAlreadySet { .. } => 4011,
            Self::UnsupportedPaymentType(_) => 4012,
            Self::Gateway(_) => 5000,
        }
    }

    pub fn is_invalid_attach_data(&self) -> bool {
        matches!(self, Self::InvalidAttachData(_))
    }
}
