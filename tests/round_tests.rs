//! Round flow tests.
//!
//! These drive whole turns through `Round` with a stacked deck and a
//! scripted table, checking turn order, win detection and notifications.

use love_letter::cards::{Card, CardKind};
use love_letter::core::{PlayerId, RoundConfig, TieBreak};
use love_letter::effects::EffectOutcome;
use love_letter::rules::{Round, RoundError, RoundResult, TurnPhase};
use love_letter::table::{ChancellorChoice, RoundEvent, ScriptedTable};

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

/// Deal from `deck` in the given order: seat 0 gets the top card.
fn stacked(player_count: usize, deck: &[CardKind]) -> Round {
    let names: Vec<String> = (0..player_count).map(|i| format!("P{i}")).collect();
    let cards = deck.iter().copied().map(Card::new);
    Round::with_deck(RoundConfig::new(names), cards).unwrap()
}

/// Test that the round ends on the second elimination with 3 players.
#[test]
fn test_last_standing_three_players() {
    use CardKind::*;
    let mut round = stacked(3, &[Guard, Priest, Priest, Guard, Spy, Guard, King, Baron]);
    let mut table = ScriptedTable::new()
        .play(Guard)
        .play(Spy)
        .play(Guard)
        .target(p(1))
        .target(p(2))
        .guess(Priest)
        .guess(Priest);

    let first = round.play_turn(&mut table).unwrap();
    assert_eq!(first.result, None);
    assert!(round.player(p(1)).is_eliminated());

    let second = round.play_turn(&mut table).unwrap();
    assert_eq!(second.player, p(2));
    assert_eq!(second.result, None);

    let third = round.play_turn(&mut table).unwrap();
    assert_eq!(third.result, Some(RoundResult::LastStanding(p(0))));
    assert_eq!(round.result().and_then(RoundResult::sole_winner), Some(p(0)));

    // Ended with cards left to draw and no turn started after the win.
    assert_eq!(round.deck_len(), 2);
    assert_eq!(round.turn_number(), 3);
    assert_eq!(round.phase(), TurnPhase::RoundOver);
    assert_eq!(
        table.events.last(),
        Some(&RoundEvent::RoundOver(RoundResult::LastStanding(p(0))))
    );
    let turns = table
        .events
        .iter()
        .filter(|e| matches!(e, RoundEvent::TurnStarted { .. }))
        .count();
    assert_eq!(turns, 3);
    assert!(!table.events.contains(&RoundEvent::DeckExhausted));
}

/// Test that a Countess held with a King blocks the King.
#[test]
fn test_countess_blocks_king() {
    use CardKind::*;
    let mut round = stacked(2, &[King, Guard, Countess, Spy, Priest]);
    let mut table = ScriptedTable::new();

    round.start_turn(&mut table).unwrap();

    let err = round.play(King, &mut table).unwrap_err();
    assert_eq!(err, RoundError::MustPlayCountess { player: p(0), attempted: King });
    assert!(err.is_rule_violation());
    assert_eq!(round.player(p(0)).hand().len(), 2);
    assert!(round.discard_pile().is_empty());

    round.play(Countess, &mut table).unwrap();
    assert_eq!(round.player(p(0)).hand(), &[Card::new(King)]);
}

/// Test that a Countess without a King or Prince may be kept.
#[test]
fn test_countess_with_princess_is_free() {
    use CardKind::*;
    let mut round = stacked(2, &[Countess, Guard, Princess, Spy]);
    let mut table = ScriptedTable::new();

    round.start_turn(&mut table).unwrap();

    assert_eq!(round.playable_cards(), vec![Countess, Princess]);
}

/// Test the Guard cannot knock out a Guard.
#[test]
fn test_guard_immunity() {
    use CardKind::*;
    let mut round = stacked(2, &[Guard, Guard, Guard, Spy]);
    let mut table = ScriptedTable::new().play(Guard).target(p(1)).guess(Guard);

    let report = round.play_turn(&mut table).unwrap();

    assert_eq!(
        report.outcomes,
        vec![EffectOutcome::GuardImmune { player: p(0), target: p(1) }]
    );
    assert!(round.player(p(1)).is_active());
}

/// Test that equal ranks under the Baron eliminate nobody.
#[test]
fn test_baron_tie() {
    use CardKind::*;
    let mut round = stacked(2, &[Baron, Prince, Prince, Spy]);
    let mut table = ScriptedTable::new().play(Baron).target(p(1));

    let report = round.play_turn(&mut table).unwrap();

    assert!(matches!(
        report.outcomes.as_slice(),
        [EffectOutcome::Compared { loser: None, .. }]
    ));
    assert!(round.player(p(0)).is_active());
    assert!(round.player(p(1)).is_active());
}

/// Test a Prince forcing out a Princess.
#[test]
fn test_prince_forces_princess_discard() {
    use CardKind::*;
    let mut round = stacked(2, &[Prince, Princess, Guard, Spy, Priest]);
    let mut table = ScriptedTable::new().play(Prince).target(p(1));

    let report = round.play_turn(&mut table).unwrap();

    assert_eq!(
        report.outcomes,
        vec![
            EffectOutcome::Discarded {
                player: p(0),
                target: p(1),
                cards: vec![Card::new(Princess)],
                replacement: None,
            },
            EffectOutcome::Eliminated {
                player: p(1),
                by: Prince,
                cards: vec![],
            },
        ]
    );
    assert!(round.player(p(1)).hand().is_empty());
    // Nothing drawn for the eliminated player.
    assert_eq!(round.deck_len(), 2);
    assert_eq!(report.result, Some(RoundResult::LastStanding(p(0))));
}

/// Test the Chancellor keeps one card and returns the rest in order.
#[test]
fn test_chancellor_keep_baron() {
    use CardKind::*;
    let mut round = stacked(2, &[King, Guard, Chancellor, Baron, Priest, Spy]);
    let mut table = ScriptedTable::new().chancellor(ChancellorChoice::new(Baron, [King, Priest]));

    round.start_turn(&mut table).unwrap();
    let deck_before = round.deck_len();
    round.play(Chancellor, &mut table).unwrap();

    assert_eq!(round.player(p(0)).hand(), &[Card::new(Baron)]);
    assert_eq!(round.deck_len(), deck_before);
    let deck: Vec<CardKind> = round.deck().iter().map(|c| c.kind()).collect();
    assert_eq!(deck, vec![Spy, King, Priest]);
    assert_eq!(table.chancellor_requests[0].len(), 3);
}

/// Test Handmaid protection lasts until the protected player's next turn.
#[test]
fn test_handmaid_until_next_turn() {
    use CardKind::*;
    let mut round = stacked(2, &[Handmaid, Guard, Spy, Guard, Priest, Baron]);
    let mut table = ScriptedTable::new().play(Handmaid).play(Guard);

    round.play_turn(&mut table).unwrap();
    assert!(round.player(p(0)).is_protected());

    let report = round.play_turn(&mut table).unwrap();
    assert!(matches!(
        report.outcomes.as_slice(),
        [EffectOutcome::Fizzled { .. }]
    ));
    assert!(table.target_requests.is_empty());

    round.start_turn(&mut table).unwrap();
    assert!(!round.player(p(0)).is_protected());
}

/// Test that a bad target leaves the round untouched.
#[test]
fn test_invalid_target_rolls_back() {
    use CardKind::*;
    let mut round = stacked(3, &[Guard, Priest, Baron, King, Spy, Spy]);
    let mut table = ScriptedTable::new().target(p(0));

    round.start_turn(&mut table).unwrap();
    let events_before = table.events.len();
    let players_before = round.players().clone();

    let err = round.play(King, &mut table).unwrap_err();

    assert_eq!(err, RoundError::InvalidTarget { card: King, target: p(0) });
    assert_eq!(round.players(), &players_before);
    assert!(round.discard_pile().is_empty());
    assert_eq!(round.phase(), TurnPhase::AwaitingPlay);
    assert_eq!(table.events.len(), events_before);

    // The turn can still be completed.
    let mut table = ScriptedTable::new().target(p(2));
    round.play(King, &mut table).unwrap();
    assert_eq!(round.player(p(0)).hand(), &[Card::new(Baron)]);
    assert_eq!(round.player(p(2)).hand(), &[Card::new(Guard)]);
}

/// Test notification order for a single play.
#[test]
fn test_event_order() {
    use CardKind::*;
    let mut round = stacked(2, &[Guard, Priest, Priest, Spy, Baron]);
    let mut table = ScriptedTable::new().play(Priest).target(p(1));

    round.play_turn(&mut table).unwrap();

    assert_eq!(
        table.events,
        vec![
            RoundEvent::TurnStarted { player: p(0), turn: 1 },
            RoundEvent::CardDrawn { player: p(0), card: Card::new(Priest) },
            RoundEvent::CardPlayed { player: p(0), card: Card::new(Priest) },
            RoundEvent::Effect(EffectOutcome::Revealed {
                viewer: p(0),
                target: p(1),
                cards: vec![Card::new(Priest)],
            }),
        ]
    );
    assert_eq!(table.events[1].private_to(), Some(p(0)));
    assert_eq!(table.events[3].private_to(), Some(p(0)));
}

/// Test deck exhaustion with a shared showdown.
#[test]
fn test_deck_exhaustion_shared_win() {
    use CardKind::*;
    let mut round = stacked(3, &[King, Spy, King, Handmaid]);
    let mut table = ScriptedTable::new().play(Handmaid);

    let report = round.play_turn(&mut table).unwrap();

    let expected = RoundResult::Showdown { winners: vec![p(0), p(2)] };
    assert_eq!(report.result, Some(expected.clone()));
    assert!(expected.is_winner(p(2)));
    assert!(!expected.is_winner(p(1)));

    let tail: Vec<&RoundEvent> = table.events.iter().rev().take(2).collect();
    assert_eq!(tail[0], &RoundEvent::RoundOver(expected));
    assert_eq!(tail[1], &RoundEvent::DeckExhausted);
}

/// Test the discard-total tie-break picks a single winner.
#[test]
fn test_deck_exhaustion_discard_total() {
    use CardKind::*;
    let config = RoundConfig::new(["A", "B", "C"]).with_tie_break(TieBreak::DiscardTotal);
    let deck = [King, Spy, King, Handmaid].map(Card::new);
    let mut round = Round::with_deck(config, deck).unwrap();
    let mut table = ScriptedTable::new().play(Handmaid);

    let report = round.play_turn(&mut table).unwrap();

    assert_eq!(report.result, Some(RoundResult::Showdown { winners: vec![p(0)] }));
}

/// Test full rounds in 2 to 6 player games.
#[test]
fn test_full_rounds_n_players() {
    for player_count in 2..=6 {
        let names: Vec<String> = (0..player_count).map(|i| format!("P{i}")).collect();
        for seed in 0..10 {
            let mut round = Round::new(RoundConfig::new(names.clone()).with_seed(seed)).unwrap();
            let mut table = ScriptedTable::new();

            let result = round.play_out(&mut table).unwrap();

            assert_eq!(round.cards_in_play(), 21);
            assert_eq!(round.phase(), TurnPhase::RoundOver);
            for winner in result.winners() {
                assert!(round.player(*winner).is_active());
            }
            assert_eq!(table.events.last(), Some(&RoundEvent::RoundOver(result)));
        }
    }
}

/// Test the same seed and answers replay the same round.
#[test]
fn test_seeded_replay() {
    let config = RoundConfig::new(["A", "B", "C", "D"]).with_seed(2024);

    let mut first = Round::new(config.clone()).unwrap();
    let mut first_table = ScriptedTable::new();
    let first_result = first.play_out(&mut first_table).unwrap();

    let mut second = Round::new(config).unwrap();
    let mut second_table = ScriptedTable::new();
    let second_result = second.play_out(&mut second_table).unwrap();

    assert_eq!(first_result, second_result);
    assert_eq!(first_table.events, second_table.events);
}
