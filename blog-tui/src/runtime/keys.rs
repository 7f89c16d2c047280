use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::ApiClient;
use crate::app::{App, Focus, TextInput};

use super::SearchTx;

pub(super) fn handle_key(key: KeyEvent, app: &mut App, client: &ApiClient, search_tx: &SearchTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    if app.detail_open {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.detail_open = false;
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.running = false,
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Enter => match app.focus {
            Focus::Results => {
                if app.selected_article().is_some() {
                    app.detail_open = true;
                }
            }
            _ => dispatch_search(app, client, search_tx),
        },
        KeyCode::Up => match app.focus {
            Focus::Results => app.select_prev(),
            _ => app.focus = app.focus.prev(),
        },
        KeyCode::Down => match app.focus {
            Focus::Results => app.select_next(),
            _ => app.focus = app.focus.next(),
        },
        KeyCode::Left => match app.focus {
            Focus::Category => app.cycle_category(false),
            Focus::SubCategory => app.cycle_sub_category(false),
            _ => {
                if let Some(input) = focused_input(app) {
                    input.move_left();
                }
            }
        },
        KeyCode::Right => match app.focus {
            Focus::Category => app.cycle_category(true),
            Focus::SubCategory => app.cycle_sub_category(true),
            _ => {
                if let Some(input) = focused_input(app) {
                    input.move_right();
                }
            }
        },
        KeyCode::Home => {
            if let Some(input) = focused_input(app) {
                input.home();
            }
        }
        KeyCode::End => {
            if let Some(input) = focused_input(app) {
                input.end();
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = focused_input(app) {
                input.backspace();
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = focused_input(app) {
                input.clear();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = focused_input(app) {
                input.insert(c);
            }
        }
        _ => {}
    }
}

fn focused_input(app: &mut App) -> Option<&mut TextInput> {
    match app.focus {
        Focus::DateStart => Some(&mut app.form.date_start),
        Focus::DateEnd => Some(&mut app.form.date_end),
        Focus::Author => Some(&mut app.form.author),
        Focus::Title => Some(&mut app.form.title),
        _ => None,
    }
}

/// Fire off the search without blocking the event loop. The sequence
/// number allocated here lets [`App::apply_search`] discard responses
/// that a later search has superseded.
fn dispatch_search(app: &mut App, client: &ApiClient, search_tx: &SearchTx) {
    let seq = app.begin_search();
    let filter = app.form.to_filter();
    let client = client.clone();
    let search_tx = search_tx.clone();

    tokio::spawn(async move {
        let outcome = client.search(&filter).await.map_err(|e| format!("{e:#}"));
        // A closed receiver just means the app is shutting down.
        let _ = search_tx.send((seq, outcome));
    });
}
