use crate::game::{Board, Mark, SIDE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the 3x3 grid into the given area.
///
/// `cursor` highlights the cell under the selection; `winning` highlights
/// the completed line. Empty cells show their key number in dim text.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    cursor: Option<usize>,
    winning: Option<[usize; 3]>,
    area: Rect,
) {
    let mut lines = Vec::new();

    for row in 0..SIDE {
        let mut spans = Vec::new();
        for col in 0..SIDE {
            let cell = row * SIDE + col;
            spans.push(cell_span(board, cell, cursor, winning));
            if col < SIDE - 1 {
                spans.push(Span::raw("│"));
            }
        }
        lines.push(Line::from(spans));

        if row < SIDE - 1 {
            lines.push(Line::from("───┼───┼───"));
        }
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn cell_span(
    board: &Board,
    cell: usize,
    cursor: Option<usize>,
    winning: Option<[usize; 3]>,
) -> Span<'static> {
    let (symbol, color) = match board.get(cell) {
        // Empty cells show which digit key places a mark there
        Mark::Empty => (format!(" {} ", cell + 1), Color::DarkGray),
        Mark::X => (" X ".to_string(), Color::Red),
        Mark::O => (" O ".to_string(), Color::Yellow),
    };

    let mut style = Style::default().fg(color);
    if winning.is_some_and(|line| line.contains(&cell)) {
        style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    }
    if cursor == Some(cell) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Span::styled(symbol, style)
}
