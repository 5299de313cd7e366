//! keydig: safe keypath traversal into nested JSON maps and arrays.
//!
//! The core is [`dig`]: walk an ordered keypath of member names and
//! (possibly negative) indices into a [`serde_json::Value`] and report
//! whether it resolved, substituting a default on a miss. The remaining
//! modules carry the command-line front end.

pub mod config;
pub mod dig;
pub mod error;
pub mod key;
pub mod logger;
pub mod source;

pub use dig::{Dug, dig, resolve};
pub use error::AppError;
pub use key::{Key, parse_keypath};
