pub mod payment_channel;
pub mod payment_type;

pub use payment_channel::PaymentChannel;
pub use payment_type::PaymentType;

use serde::{Deserialize, Serialize};
use serde_json::json;
use strum::IntoEnumIterator;

/// 下拉选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub text: String,
    pub value: String,
    pub name: String,
}

/// 带字符串值和中文标签的枚举
pub trait EnumItem: IntoEnumIterator + Copy {
    /// 稳定的线上取值
    fn item_value(&self) -> &'static str;

    /// 中文名称
    fn item_label(&self) -> &'static str;

    /// 转换为 `{"value": .., "label": ..}`
    fn to_item(&self) -> serde_json::Value {
        json!({
            "value": self.item_value(),
            "label": self.item_label(),
        })
    }

    fn to_option(&self) -> SelectOption {
        SelectOption {
            label: self.item_label().to_string(),
            text: self.item_label().to_string(),
            value: self.item_value().to_string(),
            name: self.item_label().to_string(),
        }
    }

    /// 按声明顺序生成全部选项
    fn options() -> Vec<SelectOption> {
        Self::iter().map(|item| item.to_option()).collect()
    }
}
