pub mod attach_data;

pub use attach_data::{AttachData, DEFAULT_ATTACH_TYPE};
