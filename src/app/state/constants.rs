/// Layout metrics for the editor view.
pub(crate) const SETTINGS_PANEL_WIDTH: f32 = 360.0;
pub(crate) const PANEL_PADDING: u16 = 16;
pub(crate) const CONTROL_SPACING: f32 = 12.0;
pub(crate) const SECTION_SPACING: f32 = 20.0;
pub(crate) const TITLE_TEXT_SIZE: f32 = 28.0;
pub(crate) const LABEL_TEXT_SIZE: f32 = 14.0;
pub(crate) const FOOTER_TEXT_SIZE: f32 = 12.0;
pub(crate) const EDITOR_TEXT_SIZE: f32 = 16.0;
pub(crate) const GO_BACK_INSET: u16 = 20;
pub(crate) const LINE_SPACING_STEP: f32 = 0.1;
pub(crate) const AUTHOR: &str = "Ashis Rahman";
