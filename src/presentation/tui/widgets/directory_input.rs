use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Directory field. Shows the edit buffer with a cursor while editing.
pub fn render_directory_input(
    frame: &mut Frame,
    current: Option<&str>,
    buffer: &str,
    editing: bool,
    area: Rect,
) {
    let border_color = if editing { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .title("Log directory (d to change)")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let line = if editing {
        Line::from(vec![
            Span::raw(buffer.to_owned()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else {
        match current {
            Some(dir) => Line::from(Span::raw(dir.to_owned())),
            None => Line::from(Span::styled(
                "No directory selected",
                Style::default().fg(Color::DarkGray),
            )),
        }
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
