use std::time::Duration;

use anyhow::Context;
use tokio::runtime::Handle;

use crate::api::ApiClient;
use crate::config::Config;
use crate::favorites::FavoritesStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetch::Fetcher;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::route::Route;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(120);

pub fn run(
    config: &Config,
    favorites: FavoritesStore,
    initial: Route,
    handle: Handle,
) -> anyhow::Result<()> {
    let api = ApiClient::new(&config.api).context("failed to build HTTP client")?;

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    let fetcher = Fetcher::new(api, handle, events.sender());
    let mut app = App::new(favorites, fetcher, initial);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::Fetch { route, update }) => app.on_fetch(route, update),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
