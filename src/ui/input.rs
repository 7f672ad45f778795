use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::route::Route;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc | KeyCode::Backspace => {
            app.back();
        }
        KeyCode::Char('h') => {
            if *app.route() != Route::Home {
                app.open(Route::Home);
            }
        }
        KeyCode::Char('f') => {
            if *app.route() != Route::Favorites {
                app.open(Route::Favorites);
            }
        }
        KeyCode::Char('r') => {
            // Re-enter the current route: fresh page state, fresh fetches.
            let route = app.route().clone();
            app.open(route);
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Tab => app.next_tab(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char(' ') => app.toggle_favorite(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected_favorite(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
