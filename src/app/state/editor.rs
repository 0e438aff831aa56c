use crate::i18n::Label;
use iced::widget::text_editor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Success,
    Error,
}

/// Transient message under the upload control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StatusLine {
    pub(crate) label: Label,
    pub(crate) kind: StatusKind,
}

pub(in crate::app) struct EditorState {
    pub(in crate::app) content: text_editor::Content,
    pub(in crate::app) import_path: String,
    pub(in crate::app) importing: bool,
    pub(in crate::app) status: Option<StatusLine>,
    /// Bumped on every status change so a stale clear timer is ignored.
    pub(in crate::app) status_generation: u64,
}

impl EditorState {
    pub(in crate::app) fn new(script: &str) -> Self {
        Self {
            content: text_editor::Content::with_text(script),
            import_path: String::new(),
            importing: false,
            status: None,
            status_generation: 0,
        }
    }

    /// Editor text with the trailing newline `text_editor` appends removed.
    pub(in crate::app) fn script_text(&self) -> String {
        let mut text = self.content.text();
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }

    pub(in crate::app) fn replace_script(&mut self, script: &str) {
        self.content = text_editor::Content::with_text(script);
    }
}
