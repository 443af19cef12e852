//! Reusable clickable UI components.
//!
//! Components co-locate rendering and click-target registration so a
//! region's visual position and its hit region can never drift apart.
//!
//! # Components
//!
//! - [`ChipBar`] — a wrapping row of clickable "chips" (the suggested
//!   topics under the search box).

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::Style;
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

/// Computed position of one chip after wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipPos {
    /// Line index within the chip area (0-based).
    pub line: u16,
    /// Column offset within the area.
    pub x: u16,
    /// Display width of the padded label.
    pub width: u16,
    pub action_id: u16,
}

/// A wrapping row of clickable chips.
///
/// Labels are laid out greedily left-to-right and wrap to a new line when
/// the area width is exhausted, like an inline-flex row. Each chip
/// registers a click target matching its rendered rectangle.
///
/// # Example
/// ```ignore
/// ChipBar::new(1)
///     .chip("Electromagnetism", chip_style, SUGGESTION_BASE)
///     .chip("Thermodynamics", chip_style, SUGGESTION_BASE + 1)
///     .render(f, area, &mut cs);
/// ```
pub struct ChipBar {
    chips: Vec<(String, Style, u16)>,
    /// Columns between adjacent chips on the same line.
    gap: u16,
}

impl ChipBar {
    pub fn new(gap: u16) -> Self {
        Self {
            chips: Vec::new(),
            gap,
        }
    }

    /// Add a chip with its label, style, and action ID. The label is
    /// padded with one space on each side when rendered.
    pub fn chip(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.chips.push((label.into(), style, action_id));
        self
    }

    /// Greedy wrap layout for the given content width. Pure, so the exact
    /// chip rectangles are testable without a frame.
    pub fn layout(&self, width: u16) -> Vec<ChipPos> {
        let mut out = Vec::with_capacity(self.chips.len());
        let mut line: u16 = 0;
        let mut cursor: u16 = 0;

        for (label, _, action_id) in &self.chips {
            let padded = format!(" {} ", label);
            let w = Line::from(padded.as_str()).width() as u16;

            let needed = if cursor == 0 { w } else { cursor + self.gap + w };
            if cursor > 0 && needed > width {
                line += 1;
                cursor = 0;
            }
            let x = if cursor == 0 { 0 } else { cursor + self.gap };
            out.push(ChipPos {
                line,
                x,
                width: w,
                action_id: *action_id,
            });
            cursor = x + w;
        }
        out
    }

    /// Number of lines the chips occupy at the given width.
    pub fn rows(&self, width: u16) -> u16 {
        self.layout(width).last().map(|p| p.line + 1).unwrap_or(0)
    }

    /// Render the chips and register one click target per chip. Chips
    /// that wrap past the bottom of `area` are clipped and not
    /// registered.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let positions = self.layout(area.width);

        let row_count = positions.last().map(|p| p.line + 1).unwrap_or(0);
        let mut rows: Vec<Vec<Span>> = vec![Vec::new(); row_count as usize];
        let mut cursors: Vec<u16> = vec![0; row_count as usize];

        for (pos, (label, style, _)) in positions.iter().zip(self.chips.iter()) {
            if pos.line >= area.height {
                continue;
            }
            let spans = &mut rows[pos.line as usize];
            let cursor = &mut cursors[pos.line as usize];
            if pos.x > *cursor {
                spans.push(Span::raw(" ".repeat((pos.x - *cursor) as usize)));
            }
            spans.push(Span::styled(format!(" {} ", label), *style));
            *cursor = pos.x + pos.width;

            cs.add_click_target(
                Rect::new(
                    area.x + pos.x,
                    area.y + pos.line,
                    pos.width.min(area.width.saturating_sub(pos.x)),
                    1,
                ),
                pos.action_id,
            );
        }

        let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
        f.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(labels: &[&str]) -> ChipBar {
        let mut bar = ChipBar::new(1);
        for (i, label) in labels.iter().enumerate() {
            bar = bar.chip(*label, Style::default(), 100 + i as u16);
        }
        bar
    }

    // ── layout ─────────────────────────────────────────────────────

    #[test]
    fn single_line_when_everything_fits() {
        // " ab " = 4 cols, " cde " = 5 cols, gap 1 → total 10
        let positions = bar(&["ab", "cde"]).layout(20);
        assert_eq!(
            positions,
            vec![
                ChipPos { line: 0, x: 0, width: 4, action_id: 100 },
                ChipPos { line: 0, x: 5, width: 5, action_id: 101 },
            ]
        );
    }

    #[test]
    fn wraps_when_width_exhausted() {
        // Each padded chip is 4 cols; width 9 fits two (4+1+4) but not three.
        let positions = bar(&["ab", "cd", "ef"]).layout(9);
        assert_eq!(positions[0].line, 0);
        assert_eq!(positions[1].line, 0);
        assert_eq!(positions[2].line, 1);
        assert_eq!(positions[2].x, 0);
    }

    #[test]
    fn oversized_chip_gets_its_own_line() {
        let positions = bar(&["ab", "a-very-long-topic-label"]).layout(10);
        assert_eq!(positions[0].line, 0);
        assert_eq!(positions[1].line, 1);
        // Still placed (clipped at render time), never dropped.
        assert_eq!(positions[1].x, 0);
    }

    #[test]
    fn rows_counts_wrapped_lines() {
        let chips = bar(&["ab", "cd", "ef", "gh"]);
        assert_eq!(chips.rows(100), 1);
        let chips = bar(&["ab", "cd", "ef", "gh"]);
        assert_eq!(chips.rows(9), 2);
        assert_eq!(ChipBar::new(1).rows(40), 0);
    }

    #[test]
    fn suggested_topics_fit_three_rows_on_narrow_screens() {
        let chips = bar(&crate::app::SUGGESTED_TOPICS);
        assert!(chips.rows(40) <= 3);
        let chips = bar(&crate::app::SUGGESTED_TOPICS);
        assert_eq!(chips.rows(120), 1);
    }
}
