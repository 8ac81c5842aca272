pub mod error;
pub mod log;
pub mod method;
pub mod receipt;

pub use error::DeliveryError;
pub use log::LogDelivery;
pub use method::{DeliveryMethod, DynDeliveryMethod};
pub use receipt::{DeliveryReceipt, Settings};
