use serde::{Deserialize, Serialize};

/// A stored note. The `id` is assigned by the store on create and never changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// Create candidate. Any `id` sent by a client is ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewNote {
    pub title: String,
    pub body: String,
}

impl NewNote {
    pub fn into_note(self, id: i64) -> Note {
        Note {
            id,
            title: self.title,
            body: self.body,
        }
    }
}
