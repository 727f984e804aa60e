use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::{EnumItem, PaymentChannel};

/// 支付类型
///
/// 统一管理所有支付渠道类型，线上取值一经发布不可修改。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum PaymentType {
    #[serde(rename = "wechat_mini_program")]
    #[strum(serialize = "wechat_mini_program")]
    WechatMiniProgram,
    #[serde(rename = "wechat_official_account")]
    #[strum(serialize = "wechat_official_account")]
    WechatOfficialAccount,
    #[serde(rename = "wechat_jsapi")]
    #[strum(serialize = "wechat_jsapi")]
    WechatJsapi,
    #[serde(rename = "wechat_app")]
    #[strum(serialize = "wechat_app")]
    WechatApp,
    #[serde(rename = "alipay_h5")]
    #[strum(serialize = "alipay_h5")]
    AlipayH5,
    #[serde(rename = "alipay_app")]
    #[strum(serialize = "alipay_app")]
    AlipayApp,

    // 兼容旧版本的支付方式
    #[serde(rename = "wechat_pay")]
    #[strum(serialize = "wechat_pay")]
    LegacyWechatPay,
    #[serde(rename = "alipay")]
    #[strum(serialize = "alipay")]
    LegacyAlipay,
    #[serde(rename = "bank_card")]
    #[strum(serialize = "bank_card")]
    BankCard,
    #[serde(rename = "balance")]
    #[strum(serialize = "balance")]
    Balance,
}

impl PaymentType {
    pub fn value(&self) -> &'static str {
        match self {
            Self::WechatMiniProgram => "wechat_mini_program",
            Self::WechatOfficialAccount => "wechat_official_account",
            Self::WechatJsapi => "wechat_jsapi",
            Self::WechatApp => "wechat_app",
            Self::AlipayH5 => "alipay_h5",
            Self::AlipayApp => "alipay_app",
            Self::LegacyWechatPay => "wechat_pay",
            Self::LegacyAlipay => "alipay",
            Self::BankCard => "bank_card",
            Self::Balance => "balance",
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.value()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WechatMiniProgram => "微信小程序支付",
            Self::WechatOfficialAccount => "微信公众号支付",
            Self::WechatJsapi => "微信JSAPI支付",
            Self::WechatApp => "微信APP支付",
            Self::AlipayH5 => "支付宝H5支付",
            Self::AlipayApp => "支付宝APP支付",
            Self::LegacyWechatPay => "微信支付（通用）",
            Self::LegacyAlipay => "支付宝（通用）",
            Self::BankCard => "银行卡支付",
            Self::Balance => "余额支付",
        }
    }

    /// 支付渠道标识
    pub fn channel(&self) -> PaymentChannel {
        match self {
            Self::WechatMiniProgram
            | Self::WechatOfficialAccount
            | Self::WechatJsapi
            | Self::WechatApp
            | Self::LegacyWechatPay => PaymentChannel::Wechat,
            Self::AlipayH5 | Self::AlipayApp | Self::LegacyAlipay => PaymentChannel::Alipay,
            Self::BankCard => PaymentChannel::Bank,
            Self::Balance => PaymentChannel::Balance,
        }
    }

    /// 是否为微信支付相关类型
    pub fn is_wechat_payment(&self) -> bool {
        self.channel() == PaymentChannel::Wechat
    }

    /// 是否为支付宝相关类型
    pub fn is_alipay_payment(&self) -> bool {
        self.channel() == PaymentChannel::Alipay
    }

    /// 是否为第三方支付
    pub fn is_third_party_payment(&self) -> bool {
        self.is_wechat_payment() || self.is_alipay_payment()
    }

    /// 从字符串值查找支付类型，未知取值返回 `None`
    pub fn from_value(value: &str) -> Option<Self> {
        Self::iter().find(|payment_type| payment_type.value() == value)
    }

    /// 全部取值，按声明顺序
    pub fn all_values() -> Vec<&'static str> {
        Self::iter().map(|payment_type| payment_type.value()).collect()
    }

    /// 指定渠道下的所有支付类型
    pub fn by_channel(channel: PaymentChannel) -> impl Iterator<Item = Self> {
        Self::iter().filter(move |payment_type| payment_type.channel() == channel)
    }
}

impl EnumItem for PaymentType {
    fn item_value(&self) -> &'static str {
        self.value()
    }

    fn item_label(&self) -> &'static str {
        self.label()
    }
}
