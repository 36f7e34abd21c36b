//! Domain value objects and types.
//!
//! The fields a contact is built from. Each value object validates at
//! construction time, so a `Name` or `Phone` that exists is always valid.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
