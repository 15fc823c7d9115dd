//! Playcaps-Common: Shared error type and wire enums.
//!
//! This crate provides functionality used across playcaps:
//!
//! - **Error Handling**: The common [`Error`] type and [`Result`] alias
//! - **Wire Enums**: Profile types, condition operators and properties,
//!   encoding contexts and subtitle delivery methods, serialized with the
//!   exact strings the media server matches on
//!
//! # Examples
//!
//! ```
//! use playcaps_common::{ProfileConditionType, ProfileConditionValue, Error, Result};
//!
//! assert_eq!(ProfileConditionType::LessThanEqual.to_string(), "LessThanEqual");
//! assert_eq!(ProfileConditionValue::AudioChannels.to_string(), "AudioChannels");
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_input("unknown canPlayType answer"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
