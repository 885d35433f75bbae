use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::machine::QuizState;

use super::centered;

pub fn render(frame: &mut Frame, area: Rect, state: &QuizState) {
    let percentage = state.percentage();
    let grade_color = get_grade_color(percentage);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("You scored ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.score.to_string(),
                Style::default().fg(grade_color).bold(),
            ),
            Span::styled(
                format!(
                    " out of {} ({}%)",
                    state.total_possible_points(),
                    percentage
                ),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(""),
        Line::from(""),
        Line::from("q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, centered(area, 9));
}

fn get_grade_color(percentage: u32) -> Color {
    match percentage {
        90.. => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}
