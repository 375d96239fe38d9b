use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// A list of short strings stored as a JSON array column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl StringList {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
