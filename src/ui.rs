use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Feedback};
use crate::core::round::{Direction, GuessOutcome};
use crate::core::score::ScoreBackend;

const ACCENT: Color = Color::Cyan;
const SUCCESS: Color = Color::Green;
const ERROR: Color = Color::Red;

/// Text and colour of the result line.
pub fn feedback_line(feedback: &Feedback, max_number: u32) -> (String, Color) {
    match feedback {
        Feedback::Welcome => (format!("Guess a number between 1 and {max_number}"), Color::White),
        Feedback::Outcome { outcome, new_best } => match outcome {
            GuessOutcome::Win { attempts } if *new_best => (
                format!("🎉 New High Score! You guessed it in {attempts} attempts!"),
                SUCCESS,
            ),
            GuessOutcome::Win { attempts } => (
                format!("🎉 Congratulations! You guessed it in {attempts} attempts!"),
                SUCCESS,
            ),
            GuessOutcome::Lose { target } => (
                format!("Game Over! The number was {target}. Better luck next time!"),
                ERROR,
            ),
            GuessOutcome::Hint {
                direction,
                lives_remaining,
            } => {
                let hint = match direction {
                    Direction::Higher => "Higher! Try a bigger number.",
                    Direction::Lower => "Lower! Try a smaller number.",
                };
                (
                    format!("Incorrect! {hint} You have {lives_remaining} lives left."),
                    ERROR,
                )
            }
        },
        Feedback::Rejected(e) => (format!("⚠ {e}"), Color::Yellow),
    }
}

pub fn render<B: ScoreBackend>(f: &mut Frame, app: &App<B>) {
    let round = app.round();
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(1), // best score
            Constraint::Length(1), // difficulty
            Constraint::Length(3), // lives gauge
            Constraint::Length(3), // input
            Constraint::Min(3),    // result
            Constraint::Length(1), // help
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new(" NUMBER GUESSING GAME ")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let best = app
        .best()
        .map_or_else(|| "N/A".to_string(), |best| best.to_string());
    f.render_widget(
        Paragraph::new(format!("Best Score: {best}")).alignment(Alignment::Center),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(format!(
            "Difficulty: ◀ {} ▶   (1-{}, {} lives)",
            round.difficulty(),
            round.max_number(),
            round.max_lives()
        ))
        .style(Style::default().fg(ACCENT))
        .alignment(Alignment::Center),
        chunks[2],
    );

    let ratio = f64::from(round.lives_remaining()) / f64::from(round.max_lives());
    f.render_widget(
        Gauge::default()
            .block(
                Block::default()
                    .title(format!(" Lives Left: {} ", round.lives_remaining()))
                    .borders(Borders::ALL),
            )
            .gauge_style(Style::default().fg(ACCENT))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{}/{}", round.lives_remaining(), round.max_lives())),
        chunks[3],
    );

    let prompt = if round.is_finished() {
        "Press Enter for a new game".to_string()
    } else {
        format!("> {}_", app.input())
    };
    f.render_widget(
        Paragraph::new(prompt).block(
            Block::default()
                .title(" Enter your guess ")
                .borders(Borders::ALL),
        ),
        chunks[4],
    );

    let (text, color) = feedback_line(app.feedback(), round.max_number());
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center),
        chunks[5],
    );

    f.render_widget(
        Paragraph::new("[Enter] Guess  [Tab] Difficulty  [Ctrl-N] New Game  [Esc] Quit")
            .alignment(Alignment::Center),
        chunks[6],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::difficulty::Difficulty;
    use crate::core::round::Round;
    use crate::core::score::{MemoryBackend, ScoreStore};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App<MemoryBackend>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_missing_best_as_na() {
        let round = Round::with_target(Difficulty::Medium, 42).unwrap();
        let app = App::with_round(round, ScoreStore::new(MemoryBackend::new()));
        let text = screen_text(&app);
        assert!(text.contains("Best Score: N/A"));
        assert!(text.contains("Guess a number between 1 and 100"));
        assert!(text.contains("Lives Left: 7"));
    }

    #[test]
    fn shows_hint_after_wrong_guess() {
        let round = Round::with_target(Difficulty::Medium, 42).unwrap();
        let mut app = App::with_round(round, ScoreStore::new(MemoryBackend::with_record("3")));
        app.submit("50").unwrap();
        let text = screen_text(&app);
        assert!(text.contains("Best Score: 3"));
        assert!(text.contains("Lower!"));
        assert!(text.contains("Lives Left: 6"));
    }

    #[test]
    fn feedback_messages() {
        let lose = Feedback::Outcome {
            outcome: GuessOutcome::Lose { target: 10 },
            new_best: false,
        };
        assert_eq!(
            feedback_line(&lose, 50),
            ("Game Over! The number was 10. Better luck next time!".to_string(), ERROR)
        );

        let win = Feedback::Outcome {
            outcome: GuessOutcome::Win { attempts: 2 },
            new_best: true,
        };
        assert!(feedback_line(&win, 100).0.contains("New High Score! You guessed it in 2 attempts"));
    }
}
