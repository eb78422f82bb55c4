pub mod contact;
pub mod error;
pub mod form;

pub use contact::*;
pub use error::*;
pub use form::*;
