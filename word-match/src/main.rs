use config::Config;
use dictionary::Dictionary;
use game::GameState;
use scoring::{Scoreboard, Target, Verdict};
use tracing_subscriber::EnvFilter;
use utilities::{input, str_to_bool};

mod config;
mod game;
mod scoring;
mod utilities;

enum RoundOutcome {
    Finished,
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = Config::from_env();
    let dict = Dictionary::with_config(config.dictionary.clone())?;
    let policy = config.retry_policy();
    let mut scoreboard = Scoreboard::default();

    loop {
        println!("Looking for a new word...");
        match GameState::initialize(&dict, &dict, &policy).await {
            Ok(state) => {
                if let RoundOutcome::Quit = play_round(&state, &config, &mut scoreboard)? {
                    break;
                }
            }
            Err(error) => {
                println!("Couldn't start a round: {error}");
            }
        }
        let again = input("Next word? (Y/n): ")?;
        if !str_to_bool(&again).unwrap_or(true) {
            break;
        }
    }

    println!(
        "Final score: {} ({} correct, {} wrong, {} skipped)",
        scoreboard.score, scoreboard.correct, scoreboard.incorrect, scoreboard.skipped
    );
    Ok(())
}

fn play_round(
    state: &GameState,
    config: &Config,
    scoreboard: &mut Scoreboard,
) -> anyhow::Result<RoundOutcome> {
    println!("========================================");
    println!("Word: {}", state.current_word());
    let menu = Target::all()
        .enumerate()
        .map(|(index, target)| format!("[{}] {target}", index + 1))
        .collect::<Vec<String>>()
        .join("  ");
    println!("{menu}");
    println!("Type a category for each definition, ':hint' for a free one, ':next' or ':quit'.");

    let hand = state.deal(config.definitions_per_round, &mut rand::thread_rng());
    for (index, definition) in hand.iter().enumerate() {
        println!("----------------------------------------");
        println!("({}/{}) {definition}", index + 1, hand.len());
        loop {
            let answer = input("> ")?;
            match &answer.to_lowercase()[..] {
                ":q" | ":quit" => return Ok(RoundOutcome::Quit),
                ":n" | ":next" => return Ok(RoundOutcome::Finished),
                ":h" | ":hint" => {
                    if let Some(pick) = state.random_definition(&mut rand::thread_rng()) {
                        println!("  Hint, a {}: {}", pick.part_of_speech, pick.definition);
                    } else {
                        println!("  No definitions found.");
                    }
                    continue;
                }
                _ => {}
            }
            let Some(target) = Target::from_input(&answer) else {
                println!("Couldn't understand your answer, please try again.");
                continue;
            };
            let verdict = state.classify(definition, target);
            let points = scoreboard.record(verdict);
            match verdict {
                Verdict::Correct => {
                    println!("Correct! {points:+} (score {})", scoreboard.score);
                    break;
                }
                Verdict::Skipped => {
                    println!("Skipped. (score {})", scoreboard.score);
                    break;
                }
                Verdict::Incorrect => {
                    println!("Not a {target}. {points:+} (score {})", scoreboard.score);
                }
            }
        }
    }

    println!("----------------------------------------");
    for (part_of_speech, definitions) in state.all_definitions().iter() {
        println!("    {part_of_speech}:");
        for definition in definitions {
            println!("        {definition}");
        }
    }
    println!("Score: {}", scoreboard.score);
    Ok(RoundOutcome::Finished)
}
