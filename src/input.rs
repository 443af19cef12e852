//! Shared input handling: normalized events, click targets, and
//! pixel→cell coordinate conversion.
//!
//! Rendering registers a rectangular click target for every interactive
//! region on each frame; the mouse handler converts DOM pixel coordinates
//! to terminal cells and hit-tests them here. Keyboard input is normalized
//! into search-box edits and a submit action.

use ratzilla::ratatui::layout::Rect;

/// All input the app reacts to, normalized from keyboard, mouse, and
/// touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable character typed into the search box.
    Char(char),
    /// Backspace in the search box.
    Backspace,
    /// Enter — submits the search box.
    Enter,
    /// A click/tap on a registered target, identified by its action ID
    /// (constants in `app.rs`).
    Click(u16),
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// The rectangular region (in terminal cell coordinates) for hit testing.
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared state between the render loop and the click handler. Targets are
/// cleared and re-registered on every frame, so they always match what is
/// actually on screen.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a click target with a rectangular hit region.
    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Convenience: register a full-row click target at the given row
    /// within an area. Rows outside the area are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Hit-test a terminal cell coordinate. Later-registered (topmost)
    /// targets win when regions overlap.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Determine whether a screen width (in columns) should use the stacked
/// single-column layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 70
}

/// Convert a pixel Y coordinate (relative to the grid container's top
/// edge) to a terminal row index. `None` when outside the grid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }
    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;
    if row >= terminal_rows {
        return None;
    }
    Some(row)
}

/// Convert a pixel X coordinate to a terminal column index.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols {
        None
    } else {
        Some(col)
    }
}
