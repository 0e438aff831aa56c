use super::messages::Message;
use super::prompter::PrompterCanvas;
use super::state::{
    AUTHOR, App, CONTROL_SPACING, EDITOR_TEXT_SIZE, FOOTER_TEXT_SIZE, GO_BACK_INSET,
    LABEL_TEXT_SIZE, LINE_SPACING_STEP, PANEL_PADDING, SECTION_SPACING, SETTINGS_PANEL_WIDTH,
    StatusKind, TITLE_TEXT_SIZE,
};
use crate::i18n::Label;
use crate::settings::{
    Align, MAX_FONT_SIZE, MAX_LINE_SPACING, MAX_MARGIN, MAX_SPEED, MIN_FONT_SIZE,
    MIN_LINE_SPACING, MIN_MARGIN, MIN_SPEED,
};
use crate::todo::TodoId;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::Shaping;
use iced::widget::{
    Column, Row, Text, button, canvas, checkbox, column, container, horizontal_space, row,
    scrollable, slider, stack, text, text_editor, text_input,
};
use iced::{Color, Element, Length};

const SUCCESS_COLOR: Color = Color::from_rgb(0.29, 0.78, 0.47);
const ERROR_COLOR: Color = Color::from_rgb(0.94, 0.33, 0.33);

/// Text that can render Bengali: complex scripts need the advanced shaper.
fn label<'a>(content: impl ToString) -> Text<'a> {
    text(content.to_string()).shaping(Shaping::Advanced)
}

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        if self.prompter.playback.in_display() {
            self.prompter_view()
        } else {
            self.editor_view()
        }
    }

    fn editor_view(&self) -> Element<'_, Message> {
        let header = row![
            label(self.tr(Label::Title)).size(TITLE_TEXT_SIZE),
            horizontal_space(),
            button(label(self.language().switch_caption())).on_press(Message::ToggleLanguage),
        ]
        .align_y(Vertical::Center)
        .spacing(CONTROL_SPACING);

        let body = row![
            self.script_panel(),
            container(scrollable(self.settings_panel())).width(Length::Fixed(SETTINGS_PANEL_WIDTH)),
        ]
        .spacing(SECTION_SPACING)
        .height(Length::Fill);

        let footer = column![
            label(format!("© 2025 {AUTHOR}")).size(FOOTER_TEXT_SIZE),
            label(format!("{} {AUTHOR}", self.tr(Label::DevelopedBy))).size(FOOTER_TEXT_SIZE),
        ]
        .align_x(Horizontal::Center)
        .width(Length::Fill);

        container(
            column![header, body, footer]
                .spacing(SECTION_SPACING)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .padding(PANEL_PADDING)
        .into()
    }

    fn script_panel(&self) -> Element<'_, Message> {
        let editor = text_editor(&self.editor.content)
            .placeholder(self.tr(Label::ScriptPlaceholder))
            .on_action(Message::ScriptEdited)
            .size(EDITOR_TEXT_SIZE)
            .height(Length::Fill);

        let upload_button = button(label(self.tr(Label::UploadText))).on_press_maybe(
            (!self.editor.importing && !self.editor.import_path.trim().is_empty())
                .then_some(Message::ImportRequested),
        );
        let upload = row![
            text_input(self.tr(Label::UploadPlaceholder), &self.editor.import_path)
                .on_input(Message::ImportPathChanged)
                .on_submit(Message::ImportRequested),
            upload_button,
        ]
        .spacing(CONTROL_SPACING)
        .align_y(Vertical::Center);

        let mut panel: Column<'_, Message> = column![
            label(self.tr(Label::ScriptLabel)).size(LABEL_TEXT_SIZE),
            editor,
            upload,
        ]
        .spacing(CONTROL_SPACING)
        .width(Length::Fill)
        .height(Length::Fill);

        if let Some(status) = self.editor.status {
            let mut line = label(self.tr(status.label)).size(LABEL_TEXT_SIZE);
            match status.kind {
                StatusKind::Info => {}
                StatusKind::Success => line = line.color(SUCCESS_COLOR),
                StatusKind::Error => line = line.color(ERROR_COLOR),
            }
            panel = panel.push(line);
        }

        panel.into()
    }

    fn settings_panel(&self) -> Column<'_, Message> {
        let s = self.settings.settings();

        let speed = column![
            label(format!("{}: {}", self.tr(Label::SpeedLabel), s.speed)).size(LABEL_TEXT_SIZE),
            slider(MIN_SPEED as f32..=MAX_SPEED as f32, s.speed as f32, |value| {
                Message::SpeedChanged(value.round() as u32)
            }),
        ]
        .spacing(4);

        let font_size = column![
            label(format!("{}: {}px", self.tr(Label::FontSizeLabel), s.font_size))
                .size(LABEL_TEXT_SIZE),
            slider(
                MIN_FONT_SIZE as f32..=MAX_FONT_SIZE as f32,
                s.font_size as f32,
                |value| Message::FontSizeChanged(value.round() as u32),
            ),
        ]
        .spacing(4);

        let line_spacing = column![
            label(format!(
                "{}: {:.1}",
                self.tr(Label::LineSpacingLabel),
                s.line_spacing
            ))
            .size(LABEL_TEXT_SIZE),
            slider(
                MIN_LINE_SPACING..=MAX_LINE_SPACING,
                s.line_spacing,
                Message::LineSpacingChanged,
            )
            .step(LINE_SPACING_STEP),
        ]
        .spacing(4);

        let margin = column![
            label(format!("{}: {}%", self.tr(Label::MarginLabel), s.margin)).size(LABEL_TEXT_SIZE),
            slider(MIN_MARGIN as f32..=MAX_MARGIN as f32, s.margin as f32, |value| {
                Message::MarginChanged(value.round() as u32)
            }),
        ]
        .spacing(4);

        let align_buttons = Row::with_children(Align::ALL.into_iter().map(|align| {
            let style = if align == s.align {
                button::primary
            } else {
                button::secondary
            };
            button(label(self.tr(align.label())))
                .style(style)
                .on_press(Message::AlignSelected(align))
                .into()
        }))
        .spacing(8);
        let align = column![
            label(self.tr(Label::AlignLabel)).size(LABEL_TEXT_SIZE),
            align_buttons
        ]
        .spacing(4);

        let mirror = checkbox(self.tr(Label::MirrorLabel), s.mirror)
            .on_toggle(Message::MirrorToggled)
            .text_shaping(Shaping::Advanced);

        let todos = Column::with_children(TodoId::ALL.into_iter().map(|id| {
            checkbox(self.tr(id.label()), self.todos.is_done(id))
                .on_toggle(move |done| Message::TodoToggled(id, done))
                .text_shaping(Shaping::Advanced)
                .into()
        }))
        .spacing(6);
        let todo_section = column![
            label(format!(
                "{} ({}/{})",
                self.tr(Label::TodoLabel),
                self.todos.completed(),
                TodoId::ALL.len()
            ))
            .size(LABEL_TEXT_SIZE),
            todos,
        ]
        .spacing(6);

        let start = button(
            label(self.tr(Label::StartBtn))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .style(button::success)
        .on_press_maybe((!self.script_is_blank()).then_some(Message::StartPrompter));

        column![
            label(self.tr(Label::SettingsTitle)).size(LABEL_TEXT_SIZE + 4.0),
            speed,
            font_size,
            line_spacing,
            margin,
            align,
            mirror,
            todo_section,
            start,
        ]
        .spacing(SECTION_SPACING)
        .padding(iced::Padding::from([0, 12]))
    }

    fn prompter_view(&self) -> Element<'_, Message> {
        let s = self.settings.settings();
        let Some(layout) = self.prompter.layout.as_ref() else {
            return container(horizontal_space()).into();
        };

        let display = canvas(PrompterCanvas {
            layout,
            offset: self.prompter.playback.offset() as f32,
            align: s.align,
            mirror: s.mirror,
            indicator: self.prompter.indicator,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let go_back = container(
            button(label(self.tr(Label::GoBackText)))
                .style(button::secondary)
                .on_press(Message::GoBack),
        )
        .padding(GO_BACK_INSET);

        stack![display, go_back].into()
    }
}
