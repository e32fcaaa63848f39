use serde::{Deserialize, Serialize};

/// Number of stored objects sharing one exact type string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTypeCount {
    pub object_type: String,
    pub count: u64,
}

impl ObjectTypeCount {
    pub fn new(object_type: impl Into<String>, count: u64) -> Self {
        Self { object_type: object_type.into(), count }
    }
}
