use thiserror::Error;

use crate::tree::SlotPath;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("token tree root must be an object")]
    RootNotAnObject,
    #[error("invalid slot path {0:?}")]
    InvalidSlotPath(String),
    #[error("slot {0} does not exist")]
    MissingSlot(SlotPath),
    #[error("slot {0} is not an object")]
    NotAnObject(SlotPath),
    #[error("slot {slot} does not hold valid color properties")]
    InvalidProperties {
        slot: SlotPath,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed token json")]
    Json(#[from] serde_json::Error),
}
