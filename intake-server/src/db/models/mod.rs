//! Row types for the three tables

pub mod event;
pub mod order;
pub mod payment;

pub use event::{EventKind, EventRecord};
pub use order::Order;
pub use payment::Payment;
