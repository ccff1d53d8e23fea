use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::tui::event::{InputMode, ShellState, StatusKind};

const fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Info => Color::White,
        StatusKind::Success => Color::Green,
        StatusKind::Error => Color::Red,
    }
}

/// Last message above the key hints. Unavailable actions are dimmed.
pub fn render_status_line(
    frame: &mut Frame,
    message: &str,
    kind: StatusKind,
    state: ShellState,
    mode: InputMode,
    area: Rect,
) {
    let [message_area, keys_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(status_color(kind)),
        ))),
        message_area,
    );

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let off_style = Style::default().fg(Color::Gray);
    let pick = |enabled: bool| if enabled { key_style } else { off_style };

    let hints = match mode {
        InputMode::EditingDirectory => Line::from(vec![
            Span::styled(" Enter", key_style),
            Span::raw(":confirm "),
            Span::styled("Esc", key_style),
            Span::raw(":cancel"),
        ]),
        InputMode::Normal => Line::from(vec![
            Span::styled(" q", key_style),
            Span::raw(":quit "),
            Span::styled("d", key_style),
            Span::raw(":directory "),
            Span::styled("g", pick(state.can_generate())),
            Span::raw(":generate "),
            Span::styled("v", pick(state.can_view())),
            Span::raw(":view "),
            Span::styled("r", pick(state.can_generate())),
            Span::raw(":rescan "),
            Span::styled("j/k", key_style),
            Span::raw(":nav"),
        ]),
    };

    frame.render_widget(
        Paragraph::new(hints).style(Style::default().bg(Color::DarkGray)),
        keys_area,
    );
}
