mod common;

use common::{CaptureOutput, ScriptedInput};
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    AutoGunner, GameError, NullOutput, Prompt, Session, StopReason, BOARD_SIZE, MAX_GAMES,
    SHIP_LENGTH,
};

fn session(seed: u64) -> Session<SmallRng> {
    Session::new(SmallRng::seed_from_u64(seed))
}

#[test]
fn stops_when_player_declines() -> Result<(), GameError> {
    let mut input = ScriptedInput::new("0 0 y 0 0 n");
    let mut output = CaptureOutput::default();
    let summary = session(1).run(&mut input, &mut output)?;

    assert_eq!(summary.stop, StopReason::Declined);
    assert_eq!(summary.games.len(), 2);
    assert_eq!(summary.games[0].game, 1);
    assert_eq!(summary.games[1].game, 2);
    assert_eq!(
        input.prompts,
        vec![
            Prompt::Row,
            Prompt::Column,
            Prompt::Replay,
            Prompt::Row,
            Prompt::Column,
            Prompt::Replay,
        ]
    );
    assert!(output.text.contains("Thanks for playing!"));
    Ok(())
}

#[test]
fn replay_answer_is_case_insensitive() -> Result<(), GameError> {
    let mut input = ScriptedInput::new("0 0 Y 0 0 YES 0 0 N");
    let summary = session(2).run(&mut input, &mut CaptureOutput::default())?;
    assert_eq!(summary.games.len(), 3);
    assert_eq!(summary.stop, StopReason::Declined);
    Ok(())
}

#[test]
fn stops_after_max_games_without_asking() -> Result<(), GameError> {
    let mut input = ScriptedInput::new("0 0 y 0 0 y");
    let summary = session(3).max_games(2).run(&mut input, &mut CaptureOutput::default())?;

    assert_eq!(summary.stop, StopReason::MaxGames);
    assert_eq!(summary.games.len(), 2);
    assert_eq!(input.prompts.len(), 5);
    assert_eq!(input.remaining(), 1);
    Ok(())
}

#[test]
fn default_limit_is_max_games() -> Result<(), GameError> {
    let script = "0 0 y ".repeat(MAX_GAMES as usize + 2);
    let mut input = ScriptedInput::new(&script);
    let summary = session(4).run(&mut input, &mut NullOutput)?;
    assert_eq!(summary.games.len(), MAX_GAMES as usize);
    assert_eq!(summary.stop, StopReason::MaxGames);
    Ok(())
}

#[test]
fn gives_up_after_bad_answers() -> Result<(), GameError> {
    let mut input = ScriptedInput::new("0 0 maybe ? 7 y");
    let mut output = CaptureOutput::default();
    let summary = session(5).run(&mut input, &mut output)?;

    assert_eq!(summary.stop, StopReason::RetriesExhausted);
    assert_eq!(summary.games.len(), 1);
    assert_eq!(output.text.matches("Please answer y or n.").count(), 3);
    assert_eq!(input.remaining(), 1);
    Ok(())
}

#[test]
fn retry_bound_is_configurable() -> Result<(), GameError> {
    let mut input = ScriptedInput::new("0 0 z y");
    let summary = session(6)
        .max_prompt_retries(1)
        .run(&mut input, &mut CaptureOutput::default())?;
    assert_eq!(summary.stop, StopReason::RetriesExhausted);
    Ok(())
}

#[test]
fn closed_input_ends_session() -> Result<(), GameError> {
    let mut input = ScriptedInput::new("0 0");
    let summary = session(7).run(&mut input, &mut CaptureOutput::default())?;
    assert_eq!(summary.stop, StopReason::InputClosed);
    assert_eq!(summary.games.len(), 1);
    Ok(())
}

#[test]
fn auto_gunner_sinks_every_ship() -> Result<(), GameError> {
    let mut gunner = AutoGunner::new(SmallRng::seed_from_u64(11));
    let summary = session(12).max_games(5).run(&mut gunner, &mut NullOutput)?;

    assert_eq!(summary.stop, StopReason::MaxGames);
    assert_eq!(summary.games.len(), 5);
    for game in &summary.games {
        assert!(game.sunk);
        assert_eq!(game.hits as usize, SHIP_LENGTH);
        assert!(game.shots as usize <= BOARD_SIZE * BOARD_SIZE);
    }
    Ok(())
}

#[test]
fn summary_serializes_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = ScriptedInput::new("0 0 n");
    let summary = session(8).run(&mut input, &mut NullOutput)?;
    let json = serde_json::to_value(&summary)?;
    assert_eq!(json["stop"], "declined");
    assert_eq!(json["games"][0]["game"], 1);
    assert_eq!(json["games"][0]["shots"], 0);
    assert_eq!(json["games"][0]["sunk"], false);
    Ok(())
}
