use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Tutorial primary keys are UUIDs, generated once at creation.
pub type TutorialId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// How the drawing subject was supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// A photo was uploaded; the subject is extracted by the vision model.
    Image,
    /// A free-text topic names the subject directly.
    Topic,
}

impl InputType {
    /// Database/wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Topic => "topic",
        }
    }

    /// Parse from the database `input_type` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "image" => Ok(Self::Image),
            "topic" => Ok(Self::Topic),
            other => Err(CoreError::Validation(format!(
                "Unknown input type '{other}'. Must be one of: image, topic"
            ))),
        }
    }
}
