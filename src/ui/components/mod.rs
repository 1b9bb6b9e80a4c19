//! Reusable UI components.
//!
//! # Components
//!
//! - [`Logo`]: Flight Data aircraft mark
//! - [`icons`]: SVG icon components

mod icons;
mod logo;

pub use icons::*;
pub use logo::{DEFAULT_LOGO_CLASS, Logo};
