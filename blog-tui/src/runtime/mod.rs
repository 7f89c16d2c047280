mod keys;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::ApiClient;
use crate::app::App;
use crate::ui;
use blogapi::domain::Article;

/// Outcome of a dispatched search: the sequence number allocated at
/// dispatch time plus the result. Errors are reduced to strings here;
/// the controller replaces them with its fixed user-facing message.
pub type SearchOutcome = (u64, Result<Vec<Article>, String>);

type SearchTx = UnboundedSender<SearchOutcome>;
type SearchRx = UnboundedReceiver<SearchOutcome>;

/// Draw, handle one batch of input, drain finished searches, repeat.
/// All state mutation happens on this task; spawned searches only
/// report back through the channel.
pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &ApiClient,
) -> Result<()> {
    let (search_tx, mut search_rx): (SearchTx, SearchRx) = mpsc::unbounded_channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                keys::handle_key(key, app, client, &search_tx);
            }
        }

        while let Ok((seq, outcome)) = search_rx.try_recv() {
            app.apply_search(seq, outcome);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
