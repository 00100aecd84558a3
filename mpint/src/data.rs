mod int;
#[cfg(feature = "serde_support")]
mod serde;

pub use int::{Int, Sign};
