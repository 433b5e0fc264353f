//! The `@validator` directive: grammar, argument extraction and resolution.
//!
//! - [`declaration`]: kind and filter enumerations plus the SDL
//! - [`arguments`]: permissive extraction of a parameter record
//! - [`resolve`]: strict resolution into a [`ValidatorDirective`]

pub mod declaration;
pub mod arguments;
pub mod resolve;

pub use declaration::{directive_definition, FilterName, ValidatorName, DIRECTIVE_NAME};
pub use arguments::{ExtractedValue, ValidatorArguments};
pub use resolve::{DefaultValue, FieldFilter, MembershipList, ValidatorDirective};
