pub mod envelope;
pub mod frame;
pub mod types;

pub use envelope::*;
pub use frame::*;
pub use types::*;
