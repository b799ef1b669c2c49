//! Validation profiles and their resolution.
//!
//! Profiles are loaded once, up front, by the composition root and then
//! handed to a [`ConfigurationResolver`]. Nothing in here is global.

pub mod profile;
pub mod resolver;

pub use profile::{is_default_name, EmailProfile, PhoneProfile, ProfileSet};
pub use resolver::ConfigurationResolver;
