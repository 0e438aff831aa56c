//! Display-mode canvas: scrolled script, reading guide and play/pause badge.

use super::messages::Message;
use super::state::Indicator;
use crate::layout::PrompterLayout;
use crate::settings::Align;
use crate::theme::prompter as palette;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::text::{LineHeight, Shaping};
use iced::{Pixels, Point, Rectangle, Renderer, Size, Theme, Vector};

pub(super) struct PrompterCanvas<'a> {
    pub(super) layout: &'a PrompterLayout,
    pub(super) offset: f32,
    pub(super) align: Align,
    pub(super) mirror: bool,
    pub(super) indicator: Option<Indicator>,
}

impl PrompterCanvas<'_> {
    fn draw_script(&self, frame: &mut Frame, size: Size) {
        let layout = self.layout;
        let (anchor_x, horizontal) = match self.align {
            Align::Left => (layout.column_x, Horizontal::Left),
            Align::Center => (layout.column_x + layout.column_width / 2.0, Horizontal::Center),
            Align::Right => (layout.column_x + layout.column_width, Horizontal::Right),
        };

        for (idx, line) in layout.lines.iter().enumerate() {
            let y = self.offset + idx as f32 * layout.line_height;
            if y + layout.line_height < 0.0 {
                continue;
            }
            if y > size.height {
                break;
            }
            if line.is_empty() {
                continue;
            }
            frame.fill_text(canvas::Text {
                content: line.clone(),
                position: Point::new(anchor_x, y),
                color: palette::TEXT,
                size: Pixels(layout.font_size),
                line_height: LineHeight::Absolute(Pixels(layout.line_height)),
                horizontal_alignment: horizontal,
                vertical_alignment: Vertical::Top,
                shaping: Shaping::Advanced,
                ..canvas::Text::default()
            });
        }
    }

    fn draw_guide(&self, frame: &mut Frame, size: Size) {
        let mid = size.height / 2.0;
        let guide = Path::line(Point::new(0.0, mid), Point::new(size.width, mid));
        frame.stroke(
            &guide,
            Stroke::default()
                .with_color(palette::GUIDE)
                .with_width(palette::GUIDE_WIDTH),
        );
    }

    fn draw_indicator(&self, frame: &mut Frame, size: Size, indicator: Indicator) {
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        frame.fill(
            &Path::circle(center, palette::INDICATOR_RADIUS),
            palette::INDICATOR_BACKDROP,
        );
        let glyph = match indicator {
            Indicator::Play => "▶",
            Indicator::Pause => "⏸",
        };
        frame.fill_text(canvas::Text {
            content: glyph.to_string(),
            position: center,
            color: palette::TEXT,
            size: Pixels(palette::INDICATOR_RADIUS),
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Center,
            shaping: Shaping::Advanced,
            ..canvas::Text::default()
        });
    }
}

impl canvas::Program<Message> for PrompterCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);
        frame.fill_rectangle(Point::ORIGIN, size, palette::BACKGROUND);

        if self.mirror {
            frame.with_save(|frame| {
                frame.translate(Vector::new(size.width, 0.0));
                frame.scale_nonuniform(Vector::new(-1.0, 1.0));
                self.draw_script(frame, size);
            });
        } else {
            self.draw_script(&mut frame, size);
        }

        self.draw_guide(&mut frame, size);
        if let Some(indicator) = self.indicator {
            self.draw_indicator(&mut frame, size, indicator);
        }

        vec![frame.into_geometry()]
    }
}
