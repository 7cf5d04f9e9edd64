//! Custom request extractors.

mod validated_json;

pub use validated_json::{KnownFields, ValidatedJson};
