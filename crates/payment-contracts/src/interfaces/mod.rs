pub mod gateway;
pub mod manager;

pub use gateway::{GatewayListener, PaymentGateway};
pub use manager::PaymentManager;
