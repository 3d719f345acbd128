use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::hash::Hash;

/// Trait for record identifier types
pub trait RecordId:
    Clone
    + PartialEq
    + Eq
    + Hash
    + Serialize
    + DeserializeOwned
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Render the id as a string (row keys, log lines)
    fn as_string(&self) -> String {
        self.to_string()
    }
}
