//! Pre-show checklist. Each item's flag lives under its own `todo_<id>` key,
//! separate from the settings record.

use crate::i18n::Label;
use crate::storage::{Storage, StorageError};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoId {
    PrepareScript,
    SetSpeed,
    AdjustFontSize,
    TestRun,
}

impl TodoId {
    pub const ALL: [TodoId; 4] = [
        TodoId::PrepareScript,
        TodoId::SetSpeed,
        TodoId::AdjustFontSize,
        TodoId::TestRun,
    ];

    pub fn storage_key(self) -> &'static str {
        match self {
            TodoId::PrepareScript => "todo_todo1",
            TodoId::SetSpeed => "todo_todo2",
            TodoId::AdjustFontSize => "todo_todo3",
            TodoId::TestRun => "todo_todo4",
        }
    }

    pub fn label(self) -> Label {
        match self {
            TodoId::PrepareScript => Label::Todo1,
            TodoId::SetSpeed => Label::Todo2,
            TodoId::AdjustFontSize => Label::Todo3,
            TodoId::TestRun => Label::Todo4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    done: [bool; 4],
}

impl TodoList {
    pub fn load(storage: &dyn Storage) -> Self {
        let mut list = TodoList::default();
        for (slot, id) in list.done.iter_mut().zip(TodoId::ALL) {
            *slot = match storage.get_item(id.storage_key()) {
                Ok(value) => value.as_deref() == Some("true"),
                Err(err) => {
                    warn!(key = id.storage_key(), "Failed to read todo flag: {err}");
                    false
                }
            };
        }
        list
    }

    pub fn is_done(&self, id: TodoId) -> bool {
        self.done[Self::index(id)]
    }

    pub fn set(
        &mut self,
        storage: &mut dyn Storage,
        id: TodoId,
        done: bool,
    ) -> Result<(), StorageError> {
        self.done[Self::index(id)] = done;
        storage.set_item(id.storage_key(), if done { "true" } else { "false" })
    }

    pub fn completed(&self) -> usize {
        self.done.iter().filter(|done| **done).count()
    }

    fn index(id: TodoId) -> usize {
        match id {
            TodoId::PrepareScript => 0,
            TodoId::SetSpeed => 1,
            TodoId::AdjustFontSize => 2,
            TodoId::TestRun => 3,
        }
    }
}
