//! Line layout for the display canvas.
//!
//! Glyph widths are approximated from the font size, the same trade-off a
//! fixed-chars-per-line pager makes: deterministic, cheap and good enough to
//! decide where a line breaks and how tall the text block is. The auto-pause
//! rule in playback compares the scroll offset against [`PrompterLayout::text_height`].

use crate::settings::Settings;

/// Average advance of one glyph as a fraction of the font size.
pub const GLYPH_WIDTH_RATIO: f32 = 0.55;

#[derive(Debug, Clone, PartialEq)]
pub struct PrompterLayout {
    pub lines: Vec<String>,
    pub font_size: f32,
    pub line_height: f32,
    /// Left edge of the text column.
    pub column_x: f32,
    pub column_width: f32,
}

impl PrompterLayout {
    pub fn for_settings(settings: &Settings, viewport_width: f32) -> Self {
        Self::compute(
            &settings.script,
            settings.font_size as f32,
            settings.line_spacing,
            settings.margin as f32,
            viewport_width,
        )
    }

    /// Wrap `script` into a column inset by `margin_percent` of the viewport
    /// width on each side.
    pub fn compute(
        script: &str,
        font_size: f32,
        line_spacing: f32,
        margin_percent: f32,
        viewport_width: f32,
    ) -> Self {
        let font_size = font_size.max(1.0);
        let margin = viewport_width.max(0.0) * margin_percent.clamp(0.0, 50.0) / 100.0;
        let column_width = (viewport_width - 2.0 * margin).max(0.0);
        let glyph = font_size * GLYPH_WIDTH_RATIO;
        let max_chars = ((column_width / glyph).floor() as usize).max(1);

        let mut lines = Vec::new();
        for paragraph in script.lines() {
            wrap_paragraph(paragraph, max_chars, &mut lines);
        }

        Self {
            lines,
            font_size,
            line_height: font_size * line_spacing.max(1.0),
            column_x: margin,
            column_width,
        }
    }

    /// Rendered height of the whole text block in pixels.
    pub fn text_height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }
}

/// Greedy word wrap. Blank source lines survive as empty lines; words longer
/// than a full line are split by characters.
fn wrap_paragraph(paragraph: &str, max_chars: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in paragraph.split_whitespace() {
        let mut word_chars: Vec<char> = word.chars().collect();

        let needed = if current.is_empty() {
            word_chars.len()
        } else {
            current_len + 1 + word_chars.len()
        };
        if needed <= max_chars {
            if !current.is_empty() {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_chars.len();
            continue;
        }

        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }
        while word_chars.len() > max_chars {
            let rest = word_chars.split_off(max_chars);
            out.push(word_chars.into_iter().collect());
            word_chars = rest;
        }
        current_len = word_chars.len();
        current = word_chars.into_iter().collect();
    }

    out.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width_for_chars(chars: usize, font_size: f32) -> f32 {
        chars as f32 * font_size * GLYPH_WIDTH_RATIO + 0.5
    }

    #[test]
    fn wraps_words_at_column_width() {
        let layout = PrompterLayout::compute(
            "the quick brown fox",
            20.0,
            1.0,
            0.0,
            width_for_chars(10, 20.0),
        );
        assert_eq!(layout.lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn keeps_blank_lines_between_paragraphs() {
        let layout = PrompterLayout::compute("one\n\ntwo", 20.0, 1.0, 0.0, 1000.0);
        assert_eq!(layout.lines, vec!["one", "", "two"]);
    }

    #[test]
    fn splits_words_longer_than_a_line() {
        let layout =
            PrompterLayout::compute("abcdefghij", 20.0, 1.0, 0.0, width_for_chars(4, 20.0));
        assert_eq!(layout.lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn margin_narrows_the_column() {
        let wide = PrompterLayout::compute("a b c d e f g h", 20.0, 1.0, 0.0, 200.0);
        let narrow = PrompterLayout::compute("a b c d e f g h", 20.0, 1.0, 30.0, 200.0);
        assert!(narrow.lines.len() > wide.lines.len());
        assert_eq!(narrow.column_x, 60.0);
        assert_eq!(narrow.column_width, 80.0);
    }

    #[test]
    fn height_grows_with_lines_font_and_spacing() {
        let base = PrompterLayout::compute("a\nb", 20.0, 1.0, 0.0, 1000.0);
        assert_eq!(base.text_height(), 40.0);

        let more_lines = PrompterLayout::compute("a\nb\nc", 20.0, 1.0, 0.0, 1000.0);
        let bigger_font = PrompterLayout::compute("a\nb", 40.0, 1.0, 0.0, 1000.0);
        let wider_spacing = PrompterLayout::compute("a\nb", 20.0, 2.0, 0.0, 1000.0);
        assert!(more_lines.text_height() > base.text_height());
        assert!(bigger_font.text_height() > base.text_height());
        assert_eq!(wider_spacing.text_height(), 80.0);
    }

    #[test]
    fn empty_script_has_no_height() {
        let layout = PrompterLayout::compute("", 52.0, 1.5, 5.0, 800.0);
        assert!(layout.lines.is_empty());
        assert_eq!(layout.text_height(), 0.0);
    }

    #[test]
    fn uses_settings_values() {
        let settings = Settings::default();
        let layout = PrompterLayout::for_settings(&settings, 1280.0);
        assert_eq!(layout.line_height, 52.0 * 1.5);
        assert_eq!(layout.column_x, 64.0);
        assert!(!layout.lines.is_empty());
    }
}
