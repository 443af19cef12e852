//! Horizontal salary bar chart.
//!
//! One bar per career in array order: the title's first word as the axis
//! label, salary as the value, alternating fill color by index parity,
//! and the full currency-formatted value at the end of the bar (the
//! always-visible stand-in for a hover tooltip).

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::Style;
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::model::{first_word, format_inr, Career};
use crate::theme::Palette;

/// Widest label column the chart will allocate.
const LABEL_CAP: u16 = 12;

/// Scale a salary to bar cells. The maximum salary fills `width`; any
/// positive salary gets at least one cell so no bar disappears.
pub fn bar_cells(value: f64, max: f64, width: u16) -> u16 {
    if width == 0 || max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let frac = (value / max).clamp(0.0, 1.0);
    (((frac * width as f64).round() as u16).max(1)).min(width)
}

/// Width of the label column: the widest first word, capped.
pub fn label_column_width(careers: &[Career]) -> u16 {
    careers
        .iter()
        .map(|c| first_word(&c.title).chars().count() as u16)
        .max()
        .unwrap_or(0)
        .min(LABEL_CAP)
}

fn truncate_label(label: &str, width: u16) -> String {
    label.chars().take(width as usize).collect()
}

pub fn render(careers: &[Career], f: &mut Frame, area: Rect, colors: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(Span::styled(
            " Salary Potential (INR) ",
            Style::default().fg(colors.accent),
        ));
    let inner = block.inner(area);

    let max_salary = careers.iter().map(|c| c.salary).fold(0.0_f64, f64::max);
    let label_w = label_column_width(careers);
    let values: Vec<String> = careers
        .iter()
        .map(|c| format!("₹{}", format_inr(c.salary)))
        .collect();
    let value_w = values.iter().map(|v| v.chars().count()).max().unwrap_or(0) as u16;

    // label + space + bar + space + value
    let bar_budget = inner.width.saturating_sub(label_w + value_w + 2);

    let lines: Vec<Line> = careers
        .iter()
        .enumerate()
        .map(|(i, career)| {
            let fill = if i % 2 == 0 {
                colors.bar_even
            } else {
                colors.bar_odd
            };
            let cells = bar_cells(career.salary, max_salary, bar_budget);
            let label = truncate_label(first_word(&career.title), label_w);
            Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", label, width = label_w as usize),
                    Style::default().fg(colors.dim),
                ),
                Span::styled("█".repeat(cells as usize), Style::default().fg(fill)),
                Span::styled(
                    format!(" {}", values[i]),
                    Style::default().fg(colors.text),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Rows the chart occupies: one per career plus the border.
pub fn height(careers: &[Career]) -> u16 {
    careers.len() as u16 + 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_career, sample_data};
    use crate::theme::{palette, Theme};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    // ── scaling ────────────────────────────────────────────────────

    #[test]
    fn max_salary_fills_the_budget() {
        assert_eq!(bar_cells(1_500_000.0, 1_500_000.0, 20), 20);
    }

    #[test]
    fn positive_salaries_get_at_least_one_cell() {
        assert_eq!(bar_cells(1.0, 1_500_000.0, 20), 1);
    }

    #[test]
    fn zero_and_degenerate_inputs_get_no_cells() {
        assert_eq!(bar_cells(0.0, 1_500_000.0, 20), 0);
        assert_eq!(bar_cells(100.0, 0.0, 20), 0);
        assert_eq!(bar_cells(100.0, 200.0, 0), 0);
    }

    #[test]
    fn bars_are_monotonic_in_salary() {
        let budget = 24;
        let max = 1_500_000.0;
        let a = bar_cells(650_000.0, max, budget);
        let b = bar_cells(900_000.0, max, budget);
        let c = bar_cells(1_200_000.0, max, budget);
        assert!(a <= b && b <= c);
    }

    // ── label column ───────────────────────────────────────────────

    #[test]
    fn label_width_is_widest_first_word_capped() {
        let careers = vec![
            sample_career("RF Engineer", 1.0, &[]),
            sample_career("Electrical Engineer", 1.0, &[]),
        ];
        assert_eq!(label_column_width(&careers), 10); // "Electrical"

        let careers = vec![sample_career("Magnetohydrodynamicist Supreme", 1.0, &[])];
        assert_eq!(label_column_width(&careers), LABEL_CAP);
    }

    // ── rendering ──────────────────────────────────────────────────

    fn draw(careers: &[Career], width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(careers, f, area, &palette(Theme::Screen));
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_one_bar_per_career_with_values() {
        let data = sample_data("Electromagnetism");
        let text = draw(&data.careers, 64, 8);
        for label in ["Electrical", "MRI", "RF", "Power"] {
            assert!(text.contains(label), "missing label {}\n{}", label, text);
        }
        assert!(text.contains("₹12,00,000"));
        assert!(text.contains("₹6,50,000"));
        assert!(text.matches('█').count() > 0);
    }

    #[test]
    fn chart_height_tracks_career_count() {
        let data = sample_data("Electromagnetism");
        assert_eq!(height(&data.careers), 6);
    }
}
