use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};

pub fn render_file_list(frame: &mut Frame, files: &[String], list_state: &mut ListState, area: Rect) {
    let block = Block::default()
        .title(format!("Log files ({})", files.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let items: Vec<ListItem<'_>> = if files.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No log files",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        files
            .iter()
            .map(|name| ListItem::new(Line::from(Span::raw(name.as_str()))))
            .collect()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, list_state);
}
