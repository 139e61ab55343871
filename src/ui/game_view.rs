use crate::config::AppConfig;
use crate::game::{GameStatus, Player, Session};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &Session,
    cursor: usize,
    message: &Option<String>,
    config: &AppConfig,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Board + move list
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(26)])
        .split(chunks[1]);

    render_header(frame, session, config, chunks[0]);
    render_board_pane(frame, session, cursor, config, middle[0]);
    render_move_list(frame, session, middle[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_name(config: &AppConfig, player: Player) -> &str {
    match player {
        Player::X => &config.players.x_name,
        Player::O => &config.players.o_name,
    }
}

fn render_header(frame: &mut Frame, session: &Session, config: &AppConfig, area: Rect) {
    let (mut status, color) = match session.status() {
        GameStatus::Won(player) => (
            format!("Winner: {}", player_name(config, player)),
            player_color(player),
        ),
        GameStatus::Drawn => ("It's a draw!".to_string(), Color::Gray),
        GameStatus::InProgress(player) => (
            format!("Next player: {}", player_name(config, player)),
            player_color(player),
        ),
    };

    let history = session.history();
    if !history.is_at_latest() {
        status.push_str(&format!(
            "  (viewing move {} of {})",
            history.move_number(),
            history.len() - 1
        ));
    }

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"));

    frame.render_widget(header, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Red,
        Player::O => Color::Yellow,
    }
}

fn render_board_pane(
    frame: &mut Frame,
    session: &Session,
    cursor: usize,
    config: &AppConfig,
    area: Rect,
) {
    let winning = if config.ui.highlight_winning_line {
        session.winning_line().map(|(_, line)| line)
    } else {
        None
    };

    // Only show the cursor while there is something to play
    let cursor = match session.status() {
        GameStatus::InProgress(_) => Some(cursor),
        _ => None,
    };

    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Center the fixed-height grid vertically
    let grid = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .split(inner)[1];

    super::board_widget::render_board(frame, session.board(), cursor, winning, grid);
}

fn render_move_list(frame: &mut Frame, session: &Session, area: Rect) {
    let history = session.history();

    let items: Vec<ListItem> = (0..history.len())
        .map(|move_number| {
            let description = if move_number > 0 {
                format!("Go to move #{}", move_number)
            } else {
                "Go to game start".to_string()
            };
            ListItem::new(description)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Moves"))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    let mut state = ListState::default().with_selected(Some(history.move_number()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "←↑↓→: Move  |  Enter/1-9: Place  |  [ / ]: Time travel  |  R: Restart  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
