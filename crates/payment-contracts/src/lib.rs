//! payment-contracts - 支付模块共享契约
//!
//! 提供支付类型枚举、支付领域事件、网关/管理器接口，
//! 以及用于支付请求 attach 字段的附加数据值对象。

pub mod enums;
pub mod error;
pub mod events;
pub mod interfaces;
pub mod value_object;

/// 通用参数结构（支付参数、原始回调数据等）
pub type Params = serde_json::Map<String, serde_json::Value>;

// 重新导出关键组件，便于外部调用
pub use enums::{EnumItem, PaymentChannel, PaymentType, SelectOption};
pub use error::{ContractError, Result};
pub use events::{
    PaymentEventListener, PaymentFailedEvent, PaymentParams, PaymentParametersRequestedEvent,
    PaymentRequestDetails, PaymentSuccessEvent,
};
pub use interfaces::{GatewayListener, PaymentGateway, PaymentManager};
pub use value_object::AttachData;
