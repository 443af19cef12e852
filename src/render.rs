//! Presentation layer — a pure function of the session state.
//!
//! Four mutually exclusive branches keyed by the loading state, plus the
//! always-present header and search/suggestion region. The print variant
//! drops the chrome and switches to the light palette; everything else is
//! identical between screen and print.
//!
//! No function here touches the DOM: rendering goes through ratatui
//! frames only, so every branch is testable against a `TestBackend`
//! (`tests/lint_render.rs` enforces this).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::app::{
    AppState, LoadingState, PRINT_INFOGRAPHIC, RETRY_FETCH, SUBMIT_SEARCH, SUGGESTED_TOPICS,
    SUGGESTION_BASE,
};
use crate::chart;
use crate::input::{is_narrow_layout, ClickState};
use crate::model::{
    format_growth, format_inr, hashtag, skill_intersection, Career, InfographicData,
};
use crate::theme::{palette, Palette, Theme};
use crate::widgets::ChipBar;

pub fn render(state: &AppState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let theme = if state.print_palette_active() {
        Theme::Print
    } else {
        Theme::Screen
    };
    let colors = palette(theme);

    if theme == Theme::Print {
        // Print variant: no header, no search, no chips.
        render_content(state, f, area, &colors, click_state);
        return;
    }

    let chip_width = area.width.saturating_sub(4);
    let chip_rows = suggestion_chips(&colors).rows(chip_width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Header bar
            Constraint::Length(4 + chip_rows),     // Search box + chips
            Constraint::Min(8),                    // Branch content
        ])
        .split(area);

    render_header(f, chunks[0], &colors, click_state);
    render_controls(state, f, chunks[1], &colors, click_state);
    render_content(state, f, chunks[2], &colors, click_state);
}

fn render_content(
    state: &AppState,
    f: &mut Frame,
    area: Rect,
    colors: &Palette,
    click_state: &Rc<RefCell<ClickState>>,
) {
    match state.status {
        // Idle renders the same shell as loading; it only exists before
        // the first fetch is triggered.
        LoadingState::Idle | LoadingState::Loading => {
            render_skeleton(f, area, colors, state.pulse.bright());
        }
        LoadingState::Error => render_error(state, f, area, colors, click_state),
        LoadingState::Success => match &state.data {
            Some(data) => render_infographic(data, f, area, colors),
            None => render_skeleton(f, area, colors, state.pulse.bright()),
        },
    }
}

// ── Header / controls (hidden on print) ────────────────────────────────

const PRINT_LABEL: &str = "[ Print Infographic ]";

fn render_header(
    f: &mut Frame,
    area: Rect,
    colors: &Palette,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);

    let brand = " ⚛ PhysicsNexus";
    let brand_w = Line::from(brand).width() as u16;
    let print_w = Line::from(PRINT_LABEL).width() as u16;
    let pad = inner
        .width
        .saturating_sub(brand_w + print_w + 1)
        .max(1) as usize;

    let line = Line::from(vec![
        Span::styled(
            brand,
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad)),
        Span::styled(PRINT_LABEL, Style::default().fg(colors.dim)),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);

    // The print control is tappable across the full header height.
    let mut cs = click_state.borrow_mut();
    let target_x = inner.x + inner.width.saturating_sub(print_w);
    cs.add_click_target(
        Rect::new(target_x, area.y, print_w, area.height.max(1)),
        PRINT_INFOGRAPHIC,
    );
}

fn suggestion_chips(colors: &Palette) -> ChipBar {
    let style = Style::default().fg(colors.text).bg(colors.border);
    let mut chips = ChipBar::new(1);
    for (i, topic) in SUGGESTED_TOPICS.iter().enumerate() {
        chips = chips.chip(*topic, style, SUGGESTION_BASE + i as u16);
    }
    chips
}

fn render_controls(
    state: &AppState,
    f: &mut Frame,
    area: Rect,
    colors: &Palette,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // Chips
        ])
        .split(area);

    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(Span::styled(
            " Search a physics topic — tap to generate ",
            Style::default().fg(colors.dim),
        ));
    let search_line = if state.input.is_empty() {
        Line::from(vec![
            Span::styled("▸ ", Style::default().fg(colors.accent)),
            Span::styled(
                "Enter a topic (e.g., Circular Motion)",
                Style::default().fg(colors.dim),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("▸ ", Style::default().fg(colors.accent)),
            Span::styled(state.input.as_str(), Style::default().fg(colors.text)),
            Span::styled("▌", Style::default().fg(colors.accent)),
        ])
    };
    f.render_widget(Paragraph::new(search_line).block(search_block), chunks[0]);

    {
        let mut cs = click_state.borrow_mut();
        cs.add_click_target(chunks[0], SUBMIT_SEARCH);
    }

    let chip_area = Rect::new(
        chunks[1].x + 2,
        chunks[1].y,
        chunks[1].width.saturating_sub(4),
        chunks[1].height,
    );
    let mut cs = click_state.borrow_mut();
    suggestion_chips(colors).render(f, chip_area, &mut cs);
}

// ── Loading skeleton ───────────────────────────────────────────────────

fn skeleton_fill(f: &mut Frame, area: Rect, colors: &Palette, bright: bool) {
    let shade = if bright {
        colors.skeleton_bright
    } else {
        colors.skeleton_dim
    };
    let lines: Vec<Line> = (0..area.height)
        .map(|_| {
            Line::from(Span::styled(
                "░".repeat(area.width as usize),
                Style::default().fg(shade),
            ))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

fn render_skeleton(f: &mut Frame, area: Rect, colors: &Palette, bright: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title placeholder
            Constraint::Length(1),
            Constraint::Min(6), // Card placeholders
        ])
        .split(area);

    // Centered title-sized bar, one third of the width.
    let bar_w = (area.width / 3).max(8).min(chunks[0].width);
    let bar_x = chunks[0].x + (chunks[0].width - bar_w) / 2;
    skeleton_fill(f, Rect::new(bar_x, chunks[0].y, bar_w, 3), colors, bright);

    if is_narrow_layout(area.width) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Length(1), Constraint::Length(7)])
            .split(chunks[2]);
        skeleton_fill(f, rows[0], colors, bright);
        skeleton_fill(f, rows[2], colors, bright);
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(49),
            Constraint::Percentage(2),
            Constraint::Percentage(49),
        ])
        .split(chunks[2]);
    for col in [cols[0], cols[2]] {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Length(1), Constraint::Length(7)])
            .split(col);
        skeleton_fill(f, rows[0], colors, bright);
        skeleton_fill(f, rows[2], colors, bright);
    }
}

// ── Error panel ────────────────────────────────────────────────────────

const RETRY_LABEL: &str = "[ Try Again ]";

fn render_error(
    state: &AppState,
    f: &mut Frame,
    area: Rect,
    colors: &Palette,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let message = state
        .error
        .as_ref()
        .map(|notice| notice.message.clone())
        .unwrap_or_else(|| "Generation failed. Please try again.".to_string());

    let panel_w = area.width.saturating_sub(4).min(64).max(20);
    let inner_w = panel_w.saturating_sub(2);
    let message_h = wrapped_height(&message, inner_w);
    // headline + blank + message + blank + retry + kind, plus borders
    let panel_h = (message_h + 7).min(area.height);
    let panel = Rect::new(
        area.x + area.width.saturating_sub(panel_w) / 2,
        area.y + 1,
        panel_w,
        panel_h,
    );

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "⚠  Generation failed",
            Style::default()
                .fg(colors.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(colors.text))),
        Line::from(""),
        Line::from(Span::styled(
            RETRY_LABEL,
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(notice) = &state.error {
        lines.push(Line::from(Span::styled(
            format!("({})", notice.kind),
            Style::default().fg(colors.dim),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.error));
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        panel,
    );

    // The retry row sits after the headline, a blank, the wrapped message,
    // and another blank.
    let retry_row = panel.y + 1 + 2 + message_h + 1;
    let mut cs = click_state.borrow_mut();
    cs.add_row_target(panel, retry_row, RETRY_FETCH);
}

// ── The infographic (success branch) ───────────────────────────────────

fn render_infographic(data: &InfographicData, f: &mut Frame, area: Rect, colors: &Palette) {
    let summary_h = wrapped_height(&data.summary, area.width.saturating_sub(8));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3 + summary_h), // Topic header
            Constraint::Min(8),                // Columns
            Constraint::Length(1),             // Footer
        ])
        .split(area);

    render_topic_header(data, f, chunks[0], colors);

    if is_narrow_layout(area.width) {
        render_single_column(data, f, chunks[1], colors);
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(58),
                Constraint::Percentage(2),
                Constraint::Percentage(40),
            ])
            .split(chunks[1]);
        render_career_column(data, f, cols[0], colors);
        render_analytics_column(data, f, cols[2], colors);
    }

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Generated by PhysicsNexus AI • Linking Classroom Theory to Future Reality",
            Style::default().fg(colors.dim),
        )))
        .alignment(Alignment::Center),
        chunks[2],
    );
}

fn render_topic_header(data: &InfographicData, f: &mut Frame, area: Rect, colors: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "CURRICULUM CONNECTION",
            Style::default().fg(colors.accent),
        )),
        Line::from(Span::styled(
            data.topic.as_str(),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            data.summary.as_str(),
            Style::default().fg(colors.text),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_single_column(data: &InfographicData, f: &mut Frame, area: Rect, colors: &Palette) {
    let mut constraints = vec![Constraint::Length(1)];
    let card_w = area.width;
    for career in &data.careers {
        constraints.push(Constraint::Length(card_height(career, card_w)));
    }
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_section_title(f, chunks[0], colors, "★ Career Pathways");
    for (i, career) in data.careers.iter().enumerate() {
        render_card(career, i, f, chunks[i + 1], colors);
    }
    render_analytics_column(data, f, chunks[data.careers.len() + 1], colors);
}

fn render_career_column(data: &InfographicData, f: &mut Frame, area: Rect, colors: &Palette) {
    let mut constraints = vec![Constraint::Length(1)];
    for career in &data.careers {
        constraints.push(Constraint::Length(card_height(career, area.width)));
    }
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_section_title(f, chunks[0], colors, "★ Career Pathways");
    for (i, career) in data.careers.iter().enumerate() {
        render_card(career, i, f, chunks[i + 1], colors);
    }
}

fn render_analytics_column(data: &InfographicData, f: &mut Frame, area: Rect, colors: &Palette) {
    let inner_w = area.width.saturating_sub(2);
    let blurb = blurb_text(&data.topic);
    let blurb_h = wrapped_height(&blurb, inner_w) + 2;
    let tags = skill_tag_line(&data.careers);
    let tags_h = wrapped_height(&tags, inner_w) + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(blurb_h),
            Constraint::Length(1),
            Constraint::Length(chart::height(&data.careers)),
            Constraint::Length(1),
            Constraint::Length(tags_h),
            Constraint::Min(0),
        ])
        .split(area);

    let blurb_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(Span::styled(
            " Why It Matters ",
            Style::default().fg(colors.secondary),
        ));
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            blurb,
            Style::default().fg(colors.text),
        )))
        .block(blurb_block)
        .wrap(Wrap { trim: false }),
        chunks[0],
    );

    chart::render(&data.careers, f, chunks[2], colors);

    let tags_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(Span::styled(
            " Common Skill Intersection ",
            Style::default().fg(colors.accent),
        ));
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            tags,
            Style::default().fg(colors.dim),
        )))
        .block(tags_block)
        .wrap(Wrap { trim: false }),
        chunks[4],
    );
}

fn blurb_text(topic: &str) -> String {
    format!(
        "Understanding {} opens doors to industries driving the future \
         economy. The careers listed here represent a mix of research, \
         engineering, and practical application.",
        topic
    )
}

fn skill_tag_line(careers: &[Career]) -> String {
    skill_intersection(careers)
        .iter()
        .map(|s| hashtag(s))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_section_title(f: &mut Frame, area: Rect, colors: &Palette, title: &str) {
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ))),
        area,
    );
}

// ── Career cards ───────────────────────────────────────────────────────

fn card_height(career: &Career, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    let quote = format!("\"{}\"", career.classroom_activity);
    // title + description + stats + link label + quote + skills + borders
    1 + wrapped_height(&career.description, inner)
        + 1
        + 1
        + wrapped_height(&quote, inner)
        + 1
        + 2
}

fn render_card(career: &Career, index: usize, f: &mut Frame, area: Rect, colors: &Palette) {
    let icon_color = if index % 2 == 0 {
        colors.accent
    } else {
        colors.secondary
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);

    let badge = format!("[{}]", career.degree_level);
    let title_w = Line::from(career.title.as_str()).width() as u16;
    let badge_w = Line::from(badge.as_str()).width() as u16;
    let pad = inner.width.saturating_sub(2 + title_w + badge_w).max(1) as usize;

    let mut lines = vec![
        Line::from(vec![
            Span::styled("◆ ", Style::default().fg(icon_color)),
            Span::styled(
                career.title.as_str(),
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(pad)),
            Span::styled(badge, Style::default().fg(colors.dim)),
        ]),
        Line::from(Span::styled(
            career.description.as_str(),
            Style::default().fg(colors.text),
        )),
        Line::from(vec![
            Span::styled("Avg Salary ", Style::default().fg(colors.dim)),
            Span::styled(
                format!("₹{}", format_inr(career.salary)),
                Style::default()
                    .fg(colors.money)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Growth ", Style::default().fg(colors.dim)),
            Span::styled(
                format_growth(career.growth),
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "▍CLASSROOM LINK",
            Style::default().fg(colors.link),
        )),
        Line::from(Span::styled(
            format!("\"{}\"", career.classroom_activity),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let mut skill_spans: Vec<Span> = Vec::new();
    for (i, skill) in career.skills.iter().enumerate() {
        if i > 0 {
            skill_spans.push(Span::raw("  "));
        }
        skill_spans.push(Span::styled(
            skill.as_str(),
            Style::default().fg(colors.secondary),
        ));
    }
    lines.push(Line::from(skill_spans));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

// ── Helpers ────────────────────────────────────────────────────────────

/// Estimated visual rows for `text` wrapped at `width`. Uses display
/// width, like the wrap estimate the layout budgets with; word wrapping
/// can occasionally use one more row than this.
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let w = Line::from(text).width() as u16;
    if w == 0 {
        1
    } else {
        w.div_ceil(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::gemini::GenerateError;
    use crate::model::{sample_career, sample_data};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &AppState, width: u16, height: u16) -> (String, ClickState) {
        let click_state = Rc::new(RefCell::new(ClickState::new()));
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                {
                    let mut cs = click_state.borrow_mut();
                    cs.terminal_cols = area.width;
                    cs.terminal_rows = area.height;
                    cs.clear_targets();
                }
                render(state, f, area, &click_state);
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
        let cs = Rc::try_unwrap(click_state).ok().unwrap().into_inner();
        (out, cs)
    }

    fn success_state(topic: &str) -> AppState {
        let mut app = AppState::new();
        let token = app.begin_fetch(topic);
        app.apply_success(token, sample_data(topic));
        app
    }

    // ── shell ──────────────────────────────────────────────────────

    #[test]
    fn header_and_controls_are_always_present() {
        let (text, cs) = draw(&AppState::new(), 100, 40);
        assert!(text.contains("PhysicsNexus"));
        assert!(text.contains("Print Infographic"));
        assert!(text.contains("Search a physics topic"));
        for topic in SUGGESTED_TOPICS {
            assert!(text.contains(topic), "chip {} missing", topic);
        }
        assert!(cs.targets.iter().any(|t| t.action_id == SUBMIT_SEARCH));
        assert!(cs.targets.iter().any(|t| t.action_id == PRINT_INFOGRAPHIC));
        for i in 0..6u16 {
            assert!(
                cs.targets.iter().any(|t| t.action_id == SUGGESTION_BASE + i),
                "chip target {} missing",
                i
            );
        }
    }

    #[test]
    fn search_box_shows_placeholder_then_typed_text() {
        let mut app = AppState::new();
        let (text, _) = draw(&app, 100, 40);
        assert!(text.contains("Enter a topic"));

        app.input = "Circular Motion".into();
        let (text, _) = draw(&app, 100, 40);
        assert!(text.contains("Circular Motion▌"));
        assert!(!text.contains("Enter a topic"));
    }

    // ── idle / loading ─────────────────────────────────────────────

    #[test]
    fn idle_renders_the_same_shell_as_loading() {
        let idle = AppState::new();
        let mut loading = AppState::new();
        loading.begin_fetch(crate::app::DEFAULT_TOPIC);
        let (idle_text, _) = draw(&idle, 100, 40);
        let (loading_text, _) = draw(&loading, 100, 40);
        assert_eq!(idle_text, loading_text);
    }

    #[test]
    fn loading_shows_skeleton_not_content() {
        let mut app = AppState::new();
        app.begin_fetch("Optics & Light");
        let (text, _) = draw(&app, 100, 40);
        assert!(text.contains("░"));
        assert!(!text.contains("Career Pathways"));
        assert!(!text.contains("Try Again"));
    }

    #[test]
    fn skeleton_shimmer_changes_with_pulse_phase() {
        let mut app = AppState::new();
        app.begin_fetch("Optics & Light");
        let (dim, _) = draw(&app, 100, 40);
        for _ in 0..crate::time::FRAMES_PER_PHASE {
            app.pulse.advance();
        }
        let (bright, _) = draw(&app, 100, 40);
        // Same glyphs, different colors — the text content is identical.
        assert_eq!(dim, bright);
    }

    // ── error ──────────────────────────────────────────────────────

    #[test]
    fn error_branch_shows_message_kind_and_retry() {
        let mut app = AppState::new();
        let token = app.begin_fetch("Fluid Dynamics");
        app.apply_error(token, &GenerateError::EmptyResponse);
        let (text, cs) = draw(&app, 100, 40);
        assert!(text.contains("Generation failed"));
        assert!(text.contains("empty response"));
        assert!(text.contains("Try Again"));
        assert!(text.contains("(empty-response)"));
        assert!(cs.targets.iter().any(|t| t.action_id == RETRY_FETCH));
    }

    #[test]
    fn retry_target_sits_on_the_retry_row() {
        let mut app = AppState::new();
        let token = app.begin_fetch("Fluid Dynamics");
        app.apply_error(token, &GenerateError::Api { status: 503 });
        let (_, cs) = draw(&app, 100, 40);
        let target = cs
            .targets
            .iter()
            .find(|t| t.action_id == RETRY_FETCH)
            .unwrap();
        assert!(cs.hit_test(target.rect.x + 1, target.rect.y) == Some(RETRY_FETCH));
    }

    // ── success ────────────────────────────────────────────────────

    #[test]
    fn success_renders_four_cards_and_a_four_bar_chart() {
        let app = success_state("Electromagnetism");
        let (text, _) = draw(&app, 120, 60);

        assert!(text.contains("CURRICULUM CONNECTION"));
        assert!(text.contains("Electromagnetism"));
        assert!(text.contains("Career Pathways"));
        for title in [
            "Electrical Engineer",
            "MRI Technologist",
            "RF Engineer",
            "Power Systems Analyst",
        ] {
            assert!(text.contains(title), "card {} missing", title);
        }
        assert!(text.contains("[Bachelors]"));
        assert!(text.contains("₹12,00,000"));
        assert!(text.contains("+12%"));
        assert!(text.contains("CLASSROOM LINK"));
        assert!(text.contains("Salary Potential (INR)"));
        assert!(text.contains("Why It Matters"));
        assert!(text.contains("Common Skill Intersection"));
    }

    #[test]
    fn skill_tags_are_deduplicated_hashtags() {
        let mut app = AppState::new();
        let token = app.begin_fetch("Optics & Light");
        let mut data = sample_data("Optics & Light");
        data.careers = vec![
            sample_career("A Career", 100.0, &["Math", "Math", "CAD"]),
            sample_career("B Career", 200.0, &["CAD", "Physics"]),
        ];
        app.apply_success(token, data);
        let (text, _) = draw(&app, 120, 60);
        assert!(text.contains("#Math #CAD #Physics"));
        assert_eq!(text.matches("#Math").count(), 1);
    }

    #[test]
    fn rendering_is_idempotent() {
        let app = success_state("Electromagnetism");
        let (first, _) = draw(&app, 120, 60);
        let (second, _) = draw(&app, 120, 60);
        assert_eq!(first, second);
    }

    #[test]
    fn careers_without_ids_render_in_array_order() {
        let mut app = AppState::new();
        let token = app.begin_fetch("Optics & Light");
        let data = sample_data("Optics & Light"); // sample careers carry no ids
        app.apply_success(token, data);
        let (text, _) = draw(&app, 120, 60);
        let first = text.find("Electrical Engineer").unwrap();
        let second = text.find("MRI Technologist").unwrap();
        let third = text.find("RF Engineer").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn narrow_layout_stacks_into_one_column() {
        let app = success_state("Electromagnetism");
        let (text, _) = draw(&app, 50, 90);
        assert!(text.contains("Career Pathways"));
        assert!(text.contains("Salary Potential (INR)"));
    }

    // ── print variant ──────────────────────────────────────────────

    #[test]
    fn print_variant_drops_the_chrome() {
        let mut app = success_state("Electromagnetism");
        app.request_print();
        let (text, cs) = draw(&app, 120, 60);
        assert!(!text.contains("Search a physics topic"));
        assert!(!text.contains("Print Infographic"));
        assert!(text.contains("Electromagnetism"));
        assert!(text.contains("Career Pathways"));
        assert!(cs.targets.is_empty());
    }
}
