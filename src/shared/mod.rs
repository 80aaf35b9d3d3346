pub mod errors;
pub mod retry;
pub mod shutdown;
pub mod validations;

pub use errors::*;
pub use retry::*;
pub use validations::*;
