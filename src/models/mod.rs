// Re-export model modules
mod currency;
mod observation;

pub use currency::*;
pub use observation::*;
