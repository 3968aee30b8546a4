//! # Attribute Mirror
//!
//! A widget is driven and observed only through a handful of string
//! attributes. This module defines those keys and the codec for their values;
//! the inbound and outbound logic lives in [`crate::commands::inbound`] and
//! [`crate::commands::outbound`].
//!
//! | Key | Kind | Direction | Meaning |
//! |-----|------|-----------|---------|
//! | `tags` | id list | in + out | the available pool |
//! | `assigned` | id list | in | ids to show as already assigned |
//! | `id` | text | in + out | candidate id |
//! | `name` | text | in + out | candidate display name |
//! | `type` | text | in + out | candidate type |
//! | `target` | text | in | locator of the container for assigned tags |
//!
//! Externally, names carry a configurable prefix (`data-tags`, ...).

mod spec;
mod value;

pub use spec::{AttrKey, AttributeKind, AttributeSpec, ATTRIBUTES};
pub use value::{parse_id_list, serialize_id_list, AttrWrite, Attributes};
