mod app;
mod chart;
mod gemini;
mod input;
mod model;
mod render;
mod theme;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use app::{
    AppState, DEFAULT_TOPIC, PRINT_INFOGRAPHIC, RETRY_FETCH, SUBMIT_SEARCH, SUGGESTED_TOPICS,
    SUGGESTION_BASE,
};
use gemini::GeminiClient;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};

/// Query the grid container's bounding rect and convert pixel coordinates
/// to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// Kick off one generation request. The token handed out by `begin_fetch`
/// travels with the spawned future, so a completion that has been
/// superseded by a newer request is discarded on arrival.
fn start_fetch(app: &Rc<RefCell<AppState>>, client: &GeminiClient, topic: String) {
    let token = app.borrow_mut().begin_fetch(&topic);
    log::info!("generating infographic for {:?} (request {})", topic, token);

    #[cfg(target_arch = "wasm32")]
    {
        let app = app.clone();
        let client = client.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match client.generate(&topic).await {
                Ok(data) => app.borrow_mut().apply_success(token, data),
                Err(err) => app.borrow_mut().apply_error(token, &err),
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (client, token);
}

fn dispatch(app: &Rc<RefCell<AppState>>, client: &GeminiClient, event: InputEvent) {
    match event {
        InputEvent::Char(c) => {
            app.borrow_mut().input.push(c);
        }
        InputEvent::Backspace => {
            app.borrow_mut().input.pop();
        }
        InputEvent::Enter | InputEvent::Click(SUBMIT_SEARCH) => {
            let submitted = app.borrow_mut().submit();
            if let Some(topic) = submitted {
                start_fetch(app, client, topic);
            }
        }
        InputEvent::Click(RETRY_FETCH) => {
            let topic = app.borrow().retry_topic();
            start_fetch(app, client, topic);
        }
        InputEvent::Click(PRINT_INFOGRAPHIC) => {
            app.borrow_mut().request_print();
        }
        InputEvent::Click(id)
            if (SUGGESTION_BASE..SUGGESTION_BASE + SUGGESTED_TOPICS.len() as u16)
                .contains(&id) =>
        {
            let chosen = app
                .borrow_mut()
                .choose_suggestion((id - SUGGESTION_BASE) as usize);
            if let Some(topic) = chosen {
                start_fetch(app, client, topic);
            }
        }
        InputEvent::Click(_) => {}
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let app = Rc::new(RefCell::new(AppState::new()));
    let client = GeminiClient::from_build_env();
    let click_state = Rc::new(RefCell::new(ClickState::new()));

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let client = client.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let action = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                .and_then(|(col, row)| cs.hit_test(col, row));
            drop(cs);

            if let Some(id) = action {
                dispatch(&app, &client, InputEvent::Click(id));
            }
        }
    });

    // Keyboard handler — everything printable edits the search box.
    terminal.on_key_event({
        let app = app.clone();
        let client = client.clone();
        move |key_event| match key_event.code {
            KeyCode::Char(c) => dispatch(&app, &client, InputEvent::Char(c)),
            KeyCode::Backspace => dispatch(&app, &client, InputEvent::Backspace),
            KeyCode::Enter => dispatch(&app, &client, InputEvent::Enter),
            _ => {}
        }
    });

    // Initial load: exactly one automatic fetch with the default topic.
    start_fetch(&app, &client, DEFAULT_TOPIC.to_string());

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            {
                let mut state = app.borrow_mut();
                state.pulse.advance();
                if state.advance_print() {
                    // A print-palette frame is already on screen.
                    #[cfg(target_arch = "wasm32")]
                    if let Some(window) = web_sys::window() {
                        let _ = window.print();
                    }
                }
            }

            let state = app.borrow();
            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }
            render::render(&state, f, size, &click_state);
        }
    });

    Ok(())
}
