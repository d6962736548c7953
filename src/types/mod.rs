//! NBT tag types and the decoded tree.

mod id;
mod value;

pub use id::TagId;
pub use value::{List, Payload, Tag};
