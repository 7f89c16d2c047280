use super::*;
use crate::app::TextInput;
use ratatui::layout::Position;

pub(super) fn render_filter_form(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);
    let top = thirds(rows[0]);
    let bottom = thirds(rows[1]);

    render_text_field(
        frame,
        app,
        "Date de début",
        &app.form.date_start,
        Focus::DateStart,
        top[0],
    );
    render_text_field(
        frame,
        app,
        "Date de fin",
        &app.form.date_end,
        Focus::DateEnd,
        top[1],
    );
    render_text_field(frame, app, "Auteur", &app.form.author, Focus::Author, top[2]);

    render_choice_field(
        frame,
        app,
        "Catégorie",
        &app.form.category,
        Focus::Category,
        bottom[0],
    );
    render_choice_field(
        frame,
        app,
        "Sous-catégorie",
        &app.form.sub_category,
        Focus::SubCategory,
        bottom[1],
    );
    render_text_field(frame, app, "Titre", &app.form.title, Focus::Title, bottom[2]);
}

fn thirds(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area)
}

fn field_block(label: &str, focused: bool, invalid: bool) -> Block<'static> {
    let border_style = if invalid {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::LightBlue)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", label),
            Style::default().fg(Color::White),
        ))
}

fn render_text_field(
    frame: &mut Frame,
    app: &App,
    label: &str,
    input: &TextInput,
    focus: Focus,
    area: Rect,
) {
    let focused = app.focus == focus;
    let invalid = app.form.date_input_invalid(input)
        && matches!(focus, Focus::DateStart | Focus::DateEnd);
    let block = field_block(label, focused, invalid);
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(input.value.as_str()).block(block), area);

    if focused {
        let x = inner.x + (input.cursor_chars() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

fn render_choice_field(
    frame: &mut Frame,
    app: &App,
    label: &str,
    selection: &str,
    focus: Focus,
    area: Rect,
) {
    let focused = app.focus == focus;
    let block = field_block(label, focused, false);

    let content = if selection.is_empty() {
        Span::styled("(toutes)", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(selection)
    };

    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}
