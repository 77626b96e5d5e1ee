//! Domain layer: identifiers, records, rates and the payout rules.
//!
//! Nothing in here performs I/O. The ports describe what the application
//! layer needs from the outside world.

pub mod money;
pub mod payout;
pub mod ports;
pub mod rates;
pub mod record;
