use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ContractError, Result};

/// 默认数据类型
pub const DEFAULT_ATTACH_TYPE: &str = "order";

// 旧格式：order_id_123
static LEGACY_ATTACH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^order_id_([0-9]+)$").expect("legacy attach pattern is valid"));

/// 支付附加数据
///
/// 标准化支付请求中的 attach 字段。构建支付请求时编码写入 attach，
/// 支付回调时从 attach 还原出原始订单。
///
/// 结构化格式：
///
/// ```json
/// {"order_id":123,"order_sn":"ORD001","type":"order","extra":{"key":"value"}}
/// ```
///
/// `extra` 为空时不输出。旧格式为纯字符串 `order_id_123`，没有订单编号。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct AttachData {
    order_id: u64,
    order_sn: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    extra: Map<String, Value>,
}

impl AttachData {
    pub fn new(order_id: u64, order_sn: impl Into<String>) -> Self {
        Self {
            order_id,
            order_sn: order_sn.into(),
            kind: DEFAULT_ATTACH_TYPE.to_string(),
            extra: Map::new(),
        }
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    pub fn order_id(&self) -> u64 {
        self.order_id
    }

    pub fn order_sn(&self) -> &str {
        &self.order_sn
    }

    /// 数据类型，默认为 `order`
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// 同 [`AttachData::kind`]，对应 JSON 中的 `type` 字段
    pub fn r#type(&self) -> &str {
        &self.kind
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// 旧格式没有订单编号，需要调用方自行查询
    pub fn is_legacy(&self) -> bool {
        self.order_sn.is_empty()
    }

    /// 编码为 JSON 字符串
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 从 JSON 字符串解码
    pub fn decode(attach: &str) -> Result<Self> {
        if attach.is_empty() {
            return Err(ContractError::invalid_attach_data("Attach data cannot be empty"));
        }

        let value: Value = serde_json::from_str(attach).map_err(|e| {
            ContractError::invalid_attach_data(format!("Malformed attach data: {}", e))
        })?;

        Self::try_from(value)
    }

    /// 从旧格式的 attach 字符串解析，格式：`order_id_123`
    pub fn from_legacy_format(attach: &str) -> Option<Self> {
        let captures = LEGACY_ATTACH.captures(attach)?;
        // 超出 u64 范围的数字视为不匹配
        let order_id = captures[1].parse::<u64>().ok()?;

        Some(Self::new(order_id, ""))
    }

    /// 优先按新格式解析，失败则尝试旧格式
    pub fn parse(attach: &str) -> Option<Self> {
        match Self::decode(attach) {
            Ok(data) => Some(data),
            Err(ContractError::InvalidAttachData(reason)) => {
                debug!(%reason, "attach 不是结构化格式，尝试旧格式");
                Self::from_legacy_format(attach)
            }
            Err(e) => {
                debug!(error = %e, "attach 解码失败");
                None
            }
        }
    }
}

impl TryFrom<Value> for AttachData {
    type Error = ContractError;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(mut data) = value else {
            return Err(ContractError::invalid_attach_data(
                "Malformed attach data: expected a JSON object",
            ));
        };

        let order_id = data
            .get("order_id")
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                ContractError::invalid_attach_data("Missing or invalid order_id in attach data")
            })?;

        let order_sn = match data.remove("order_sn") {
            Some(Value::String(order_sn)) => order_sn,
            _ => {
                return Err(ContractError::invalid_attach_data(
                    "Missing or invalid order_sn in attach data",
                ));
            }
        };

        let kind = match data.remove("type") {
            None | Some(Value::Null) => DEFAULT_ATTACH_TYPE.to_string(),
            Some(Value::String(kind)) => kind,
            Some(_) => {
                return Err(ContractError::invalid_attach_data("Invalid type in attach data"));
            }
        };

        let extra = match data.remove("extra") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(extra)) => extra,
            Some(Value::Array(items)) if items.is_empty() => Map::new(),
            Some(_) => {
                return Err(ContractError::invalid_attach_data("Invalid extra in attach data"));
            }
        };

        Ok(Self {
            order_id,
            order_sn,
            kind,
            extra,
        })
    }
}

impl FromStr for AttachData {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl fmt::Display for AttachData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.encode().map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}
