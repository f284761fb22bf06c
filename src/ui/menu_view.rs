use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::MENU_ITEMS;

pub fn render_menu(frame: &mut Frame, cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title
            Constraint::Min(8),    // Menu items
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Connect Four",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Connect four discs to win!"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let mut lines = vec![Line::from("")];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let line = if i == cursor {
            Line::from(Span::styled(
                format!("> {} <", item),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::raw(item.to_string()))
        };
        lines.push(line);
        lines.push(Line::from(""));
    }
    let menu = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    let controls = Paragraph::new("↑/↓: Select  |  Enter: Confirm  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[2]);
}

pub fn render_how_to_play(frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(16), Constraint::Length(3)])
        .split(frame.area());

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let text = vec![
        Line::from(Span::styled("Game Objective", bold)),
        Line::from("Be the first to form a horizontal, vertical, or diagonal"),
        Line::from("line of four of your own discs."),
        Line::from(""),
        Line::from(Span::styled("Game Rules", bold)),
        Line::from("- Players take turns dropping discs into a 7x6 grid."),
        Line::from("  Red always goes first, and Yellow goes second."),
        Line::from("- Discs fall to the lowest free cell in the chosen column."),
        Line::from("- The first player to connect four discs wins."),
        Line::from("- If the grid fills up without a winner, the game is a draw."),
        Line::from(""),
        Line::from(Span::styled("Game Modes", bold)),
        Line::from("Single Player: challenge the computer. You start as Red;"),
        Line::from("sides alternate with each rematch."),
        Line::from("Two Player: take turns with a friend at the same keyboard."),
        Line::from(""),
        Line::from(Span::styled("Tips", bold)),
        Line::from("- Control the center columns; they open the most lines."),
        Line::from("- Watch for the opponent's three-in-a-rows and block them."),
        Line::from("- Double threats force a block on one line while you"),
        Line::from("  complete another."),
    ];

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("How to Play"));
    frame.render_widget(body, chunks[0]);

    let controls = Paragraph::new("Esc/Enter: Back to menu  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[1]);
}
