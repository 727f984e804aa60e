use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::EnumItem;

/// 支付渠道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentChannel {
    Wechat,
    Alipay,
    Bank,
    Balance,
}

impl PaymentChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wechat => "wechat",
            Self::Alipay => "alipay",
            Self::Bank => "bank",
            Self::Balance => "balance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Wechat => "微信支付",
            Self::Alipay => "支付宝",
            Self::Bank => "银行卡",
            Self::Balance => "余额",
        }
    }

    /// 是否由外部支付网络完成
    pub fn is_third_party(&self) -> bool {
        matches!(self, Self::Wechat | Self::Alipay)
    }
}

impl EnumItem for PaymentChannel {
    fn item_value(&self) -> &'static str {
        self.as_str()
    }

    fn item_label(&self) -> &'static str {
        self.label()
    }
}
