use guessterm::games::guess::rules::{Band, Clue, Parity, Tier};
use guessterm::games::guess::{FixedSecrets, GameEngine, GuessResult, HintResult, RandomSecrets};

fn engine_with(secret: u8) -> GameEngine<FixedSecrets> {
    GameEngine::new(FixedSecrets::new([secret]).unwrap())
}

#[test]
fn secret_50_win_on_fifth_guess() {
    let mut engine = engine_with(50);

    assert_eq!(engine.submit_guess("10"), GuessResult::TooLow { tier: Tier::Far });
    assert_eq!(engine.submit_guess("90"), GuessResult::TooHigh { tier: Tier::Far });
    assert_eq!(engine.submit_guess("52"), GuessResult::TooHigh { tier: Tier::VeryClose });
    assert_eq!(engine.submit_guess("45"), GuessResult::TooLow { tier: Tier::VeryClose });
    assert_eq!(engine.attempts(), 4);
    assert_eq!(engine.current_score(), 96);
    assert_eq!(
        engine.submit_guess("50"),
        GuessResult::Correct { secret: 50, final_score: 95 }
    );
    assert_eq!(engine.attempts(), 5);
    assert!(engine.is_over());
}

#[test]
fn secret_50_far_far_close_win() {
    let mut engine = engine_with(50);
    let results: Vec<_> = ["10", "90", "52", "50"]
        .iter()
        .map(|g| engine.submit_guess(g))
        .collect();

    assert_eq!(
        results,
        vec![
            GuessResult::TooLow { tier: Tier::Far },
            GuessResult::TooHigh { tier: Tier::Far },
            GuessResult::TooHigh { tier: Tier::VeryClose },
            GuessResult::Correct { secret: 50, final_score: 96 },
        ]
    );
    assert_eq!(engine.attempts(), 4);
}

#[test]
fn close_tier_boundaries() {
    let mut engine = engine_with(50);
    assert_eq!(engine.submit_guess("44"), GuessResult::TooLow { tier: Tier::Close });
    assert_eq!(engine.submit_guess("65"), GuessResult::TooHigh { tier: Tier::Close });
    assert_eq!(engine.submit_guess("66"), GuessResult::TooHigh { tier: Tier::Far });
    assert_eq!(engine.submit_guess("55"), GuessResult::TooHigh { tier: Tier::VeryClose });
}

#[test]
fn first_guess_win_scores_100() {
    let mut engine = engine_with(7);
    assert_eq!(
        engine.submit_guess("7"),
        GuessResult::Correct { secret: 7, final_score: 100 }
    );
    assert_eq!(engine.attempts(), 1);
}

#[test]
fn hint_sequence_for_7() {
    let mut engine = engine_with(7);

    let hints: Vec<_> = (0..4).map(|_| engine.request_hint()).collect();
    assert_eq!(
        hints,
        vec![
            HintResult::Hint { level: 1, clue: Clue::Parity(Parity::Odd) },
            HintResult::Hint { level: 2, clue: Clue::Band(Band::UpTo25) },
            HintResult::Hint { level: 3, clue: Clue::SingleDigit },
            HintResult::Unavailable,
        ]
    );
    assert!(hints[0].text().unwrap().contains("odd"));
    assert!(hints[1].text().unwrap().contains("25 or less"));
    assert!(hints[2].text().unwrap().contains("single digit"));
    assert_eq!(hints[3].text(), None);
    assert_eq!(engine.hints_used(), 3);
    assert_eq!(engine.current_score(), 85);
}

#[test]
fn hint_sequence_for_64() {
    let mut engine = engine_with(64);
    assert_eq!(engine.request_hint().text().unwrap(), "The number is even!");
    assert_eq!(engine.request_hint().text().unwrap(), "The number is between 51-75!");
    assert_eq!(engine.request_hint().text().unwrap(), "The first digit is 6!");
}

#[test]
fn hints_after_win_are_unavailable() {
    let mut engine = engine_with(20);
    engine.submit_guess("20");
    assert_eq!(engine.request_hint(), HintResult::Unavailable);
    assert_eq!(engine.hints_used(), 0);
}

#[test]
fn hints_lower_the_final_score() {
    let mut engine = engine_with(80);
    engine.request_hint();
    engine.request_hint();
    engine.submit_guess("50");
    engine.submit_guess("79");
    assert_eq!(
        engine.submit_guess("80"),
        GuessResult::Correct { secret: 80, final_score: 87 }
    );
}

#[test]
fn restart_resets_everything() {
    let mut engine = GameEngine::new(FixedSecrets::new([30u8, 70]).unwrap());
    engine.request_hint();
    engine.submit_guess("1");
    engine.submit_guess("30");
    assert!(engine.is_over());

    engine.restart();
    assert_eq!(engine.attempts(), 0);
    assert_eq!(engine.hints_used(), 0);
    assert!(!engine.is_over());
    assert_eq!(engine.current_score(), 100);
    assert_eq!(engine.final_score(), None);
    assert_eq!(engine.round(), 2);

    // New secret is 70
    assert_eq!(engine.submit_guess("30"), GuessResult::TooLow { tier: Tier::Far });
    assert_eq!(
        engine.submit_guess("70"),
        GuessResult::Correct { secret: 70, final_score: 98 }
    );
}

#[test]
fn restart_mid_game_is_a_fresh_session() {
    let mut engine = GameEngine::new(FixedSecrets::new([30u8, 30]).unwrap());
    engine.submit_guess("10");
    engine.request_hint();
    engine.restart();
    assert_eq!(
        engine.submit_guess("30"),
        GuessResult::Correct { secret: 30, final_score: 100 }
    );
}

#[test]
fn seeded_engines_agree() {
    let mut a = GameEngine::new(RandomSecrets::seeded(1234));
    let mut b = GameEngine::new(RandomSecrets::seeded(1234));
    for round in 0..20 {
        for g in 0..=100u8 {
            let guess = g.to_string();
            let ra = a.submit_guess(&guess);
            assert_eq!(ra, b.submit_guess(&guess), "round {round} guess {g}");
            if matches!(ra, GuessResult::Correct { .. }) {
                break;
            }
        }
        assert!(a.is_over());
        a.restart();
        b.restart();
    }
}

#[test]
fn malformed_text_after_win_is_game_over() {
    let mut engine = engine_with(50);
    engine.submit_guess("50");
    assert_eq!(engine.submit_guess(""), GuessResult::GameAlreadyOver);
    assert_eq!(engine.submit_guess("abc"), GuessResult::GameAlreadyOver);
    assert_eq!(engine.submit_guess("101"), GuessResult::GameAlreadyOver);
    assert_eq!(engine.attempts(), 1);
}
