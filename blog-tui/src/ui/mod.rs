mod filter_form;
mod results;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Filter form
            Constraint::Length(1), // Status line
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    filter_form::render_filter_form(frame, app, chunks[1]);
    render_status(frame, app, chunks[2]);
    results::render_results(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);

    if app.detail_open {
        results::render_detail(frame, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Blog Scraper",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" — Recherche d'Articles"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(error) = &app.error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if app.is_loading {
        Line::from(Span::styled(
            "Recherche en cours…",
            Style::default().fg(Color::Yellow),
        ))
    } else if app.searched {
        Line::from(Span::styled(
            format!("{} article(s) trouvé(s)", app.articles.len()),
            Style::default().fg(Color::Gray),
        ))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help = match app.focus {
        Focus::Results => "↑/↓ sélection · Entrée détails · Tab champs · Esc quitter",
        Focus::Category | Focus::SubCategory => {
            "←/→ choix · Tab champ suivant · Entrée rechercher · Esc quitter"
        }
        _ => "Tab champ suivant · Entrée rechercher · Esc quitter",
    };

    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        area,
    );
}
