mod types;

pub use types::{PaymentMethod, Quote};
