use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::machine::QuizState;
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let Some(question) = state.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], state);
    render_counters(frame, chunks[1], state);
    render_question_text(frame, chunks[3], &question.text);
    render_options(
        frame,
        chunks[4],
        question,
        state.selected_answer,
        app.highlighted_option(),
    );
    render_controls(frame, chunks[5], state);
}

fn render_progress(frame: &mut Frame, area: Rect, state: &QuizState) {
    let count = state.question_count().max(1);
    let ratio = state.answered_count() as f64 / count as f64;

    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(ratio.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(widget, area);
}

fn render_counters(frame: &mut Frame, area: Rect, state: &QuizState) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let position = Line::from(vec![
        Span::styled("Question ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.current_question_number().to_string(),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled(
            format!(" / {}", state.question_count()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(position), halves[0]);

    let points = Paragraph::new(format!(
        "{} / {}",
        state.score,
        state.total_possible_points()
    ))
    .alignment(Alignment::Right)
    .fg(Color::DarkGray);
    frame.render_widget(points, halves[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    answer: Option<usize>,
    highlighted: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let (marker, style) = option_style(question, answer, highlighted, index);

        let mut spans = vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(option.as_str(), style),
        ];
        if answer == Some(index) {
            spans.push(Span::styled("  (your answer)", Style::default().fg(Color::DarkGray)));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, area);
}

/// Before answering, the cursor is highlighted. Afterwards the correct option
/// is green and a wrong pick is red.
fn option_style(
    question: &Question,
    answer: Option<usize>,
    highlighted: usize,
    index: usize,
) -> (&'static str, Style) {
    match answer {
        None if index == highlighted => (">", Style::default().fg(Color::Cyan).bold()),
        None => (" ", Style::default().fg(Color::Gray)),
        Some(_) if question.is_correct(index) => ("+", Style::default().fg(Color::Green).bold()),
        Some(chosen) if chosen == index => ("-", Style::default().fg(Color::Red).bold()),
        Some(_) => (" ", Style::default().fg(Color::DarkGray)),
    }
}

fn render_controls(frame: &mut Frame, area: Rect, state: &QuizState) {
    let text = match state.selected_answer {
        None => "j/k navigate  ·  enter select  ·  1-9 pick  ·  q quit",
        Some(_) if state.is_last_question() => "enter finish  ·  q quit",
        Some(_) => "enter next  ·  q quit",
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
