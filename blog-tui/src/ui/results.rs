use super::*;
use ratatui::widgets::{Clear, List, ListItem, ListState, Padding, Wrap};

pub(super) fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.searched {
        format!(" Résultats ({}) ", app.articles.len())
    } else {
        " Résultats ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(title, Style::default().fg(Color::White)))
        .padding(Padding::horizontal(1));

    if app.articles.is_empty() {
        let message = if app.searched {
            "Aucun article trouvé."
        } else {
            "Renseignez les filtres puis appuyez sur Entrée pour lancer la recherche."
        };
        let empty = Paragraph::new(Span::styled(
            message,
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .articles
        .iter()
        .map(|article| {
            let meta = format!(
                "par {} · {} · {}",
                article.author, article.published, article.category
            );
            ListItem::new(vec![
                Line::from(Span::styled(
                    article.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(meta, Style::default().fg(Color::Gray))),
                Line::from(article.summary.clone()),
                Line::from(""),
            ])
        })
        .collect();

    let highlight = if app.focus == Focus::Results {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let list = List::new(items).highlight_style(highlight).block(block);
    let mut state = ListState::default();
    state.select(Some(app.selected.min(app.articles.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Overlay with the full card for the selected article.
pub(super) fn render_detail(frame: &mut Frame, app: &App) {
    let Some(article) = app.selected_article() else {
        return;
    };

    let area = centered_rect(80, 70, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "par {} · {} · {}",
                article.author, article.published, article.category
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            article.url.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(article.summary.clone()),
    ];

    if let Some(thumbnail) = &article.thumbnail {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Vignette : {}", thumbnail)));
    }
    if !article.images.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Images ({}) :", article.images.len())));
        for (name, image) in &article.images {
            lines.push(Line::from(format!(
                "  {} — {} ({})",
                name, image.description, image.url
            )));
        }
    }

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightBlue))
            .title(Span::styled(" Article ", Style::default().fg(Color::White)))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(detail, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
