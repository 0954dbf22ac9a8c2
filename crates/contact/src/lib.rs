mod driver;
mod form;
mod handler;
mod submission;
mod types;

pub use driver::*;
pub use form::*;
pub use handler::*;
pub use submission::*;
pub use types::*;
