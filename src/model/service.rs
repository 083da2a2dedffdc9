use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(flatten)]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    /// Duration in minutes.
    #[serde(default)]
    pub duration: Option<u32>,
}

impl Record for Service {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
