// Shared test fixtures for notes.

use crate::modules::notes::core::note::{NewNote, Note};

pub struct NewNoteBuilder {
    inner: NewNote,
}

impl Default for NewNoteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewNoteBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewNote {
                title: "Groceries".to_string(),
                body: "Milk, eggs".to_string(),
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn body(mut self, v: impl Into<String>) -> Self {
        self.inner.body = v.into();
        self
    }

    pub fn build(self) -> NewNote {
        self.inner
    }
}

pub struct NoteBuilder {
    inner: Note,
}

impl Default for NoteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NoteBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewNoteBuilder::new().build().into_note(1),
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn body(mut self, v: impl Into<String>) -> Self {
        self.inner.body = v.into();
        self
    }

    pub fn build(self) -> Note {
        self.inner
    }
}

#[cfg(test)]
mod note_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let note = NoteBuilder::new().id(7).title("t").body("b").build();
        assert_eq!(
            note,
            Note {
                id: 7,
                title: "t".into(),
                body: "b".into(),
            }
        );
    }
}
