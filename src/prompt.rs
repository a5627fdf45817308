/// Line-based front end for terminals where the full-screen UI is unwanted.
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::app::App;
use crate::core::difficulty::Difficulty;
use crate::core::score::ScoreBackend;
use crate::ui::feedback_line;

enum NextStep {
    PlayAgain,
    ChangeDifficulty,
    Quit,
}

pub fn run<B: ScoreBackend>(app: &mut App<B>) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("🔢 Number Guessing Game");
    println!();

    let difficulty = select_difficulty(&theme, app.round().difficulty())?;
    app.set_difficulty(difficulty);

    loop {
        play_round(&theme, app)?;

        match next_step(&theme)? {
            NextStep::PlayAgain => app.restart(),
            NextStep::ChangeDifficulty => {
                let difficulty = select_difficulty(&theme, app.round().difficulty())?;
                app.set_difficulty(difficulty);
            }
            NextStep::Quit => {
                println!("👋 Goodbye!");
                return Ok(());
            }
        }
    }
}

fn play_round<B: ScoreBackend>(theme: &ColorfulTheme, app: &mut App<B>) -> Result<()> {
    let best = app
        .best()
        .map_or_else(|| "N/A".to_string(), |best| best.to_string());
    println!("Best Score: {best}");
    println!(
        "Guess a number between 1 and {} ({} lives)",
        app.round().max_number(),
        app.round().max_lives()
    );

    while !app.round().is_finished() {
        let raw: String = Input::with_theme(theme)
            .with_prompt(format!("Your guess [{} lives left]", app.round().lives_remaining()))
            .allow_empty(true)
            .interact_text()?;

        // Rejections land in `feedback` like every other outcome.
        let _ = app.submit(&raw);
        let (text, _) = feedback_line(app.feedback(), app.round().max_number());
        println!("{text}");
    }
    println!();
    Ok(())
}

fn select_difficulty(theme: &ColorfulTheme, current: Difficulty) -> Result<Difficulty> {
    let items: Vec<String> = Difficulty::ALL
        .iter()
        .map(|d| format!("{d} - 1 to {}, {} lives", d.max_number(), d.max_lives()))
        .collect();
    let default = Difficulty::ALL
        .iter()
        .position(|d| *d == current)
        .unwrap_or_default();

    let selection = Select::with_theme(theme)
        .with_prompt("Select Difficulty")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(Difficulty::ALL[selection])
}

fn next_step(theme: &ColorfulTheme) -> Result<NextStep> {
    let options = ["🔁 Play again", "🎚 Change difficulty", "🚪 Quit"];
    let selection = Select::with_theme(theme)
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => NextStep::PlayAgain,
        1 => NextStep::ChangeDifficulty,
        _ => NextStep::Quit,
    })
}
