mod error;
mod handlers;
mod store;
mod types;

pub use error::*;
pub use handlers::*;
pub use store::*;
pub use types::*;
