//! End-to-end rule scenarios on rigged decks.
//!
//! Two-player deal order from the top of the deck: burned card, p1, p2,
//! then p1's first draw, p2's first draw, and so on.

use love_letter::cards::{build_deck, Card, Rank};
use love_letter::core::{
    Action, CardPlay, GameRng, GameState, PlayerId, PlayerView, RuleError, TurnPhase, VisibleCard,
};
use love_letter::effects::EffectOutcome;
use love_letter::rules::{RoundEngine, RulesEngine};
use love_letter::DECK_SIZE;

/// A full deck with the named cards on top, `top[0]` drawn first.
fn rigged(top: &[&str]) -> Vec<Card> {
    let mut deck: Vec<Card> = build_deck()
        .into_iter()
        .filter(|c| !top.contains(&c.id.as_str()))
        .collect();
    for id in top.iter().rev() {
        let card = build_deck()
            .into_iter()
            .find(|c| c.id.as_str() == *id)
            .expect("card id in deck");
        deck.push(card);
    }
    deck
}

fn p(id: &str) -> PlayerId {
    PlayerId::new(id)
}

/// Two players dealt from `top`, with p1 already holding their draw.
fn duel(top: &[&str]) -> (RoundEngine, GameState) {
    let engine = RoundEngine::default();
    let state = engine
        .initialize_game_with_deck(&["p1", "p2"], &["Ada", "Bo"], rigged(top), GameRng::new(1))
        .unwrap();
    let state = engine.draw_card(&state, &p("p1")).unwrap();
    (engine, state)
}

/// Strip the log so two states can be compared on game content.
fn without_log(state: &GameState) -> GameState {
    let mut state = state.clone();
    state.game_log.clear();
    state
}

#[test]
fn test_initial_deal_two_players() {
    let engine = RoundEngine::default();
    let state = engine
        .initialize_game(&["p1", "p2"], &["A", "B"], GameRng::new(2024))
        .unwrap();

    assert_eq!(state.deck.len(), DECK_SIZE - 2 - 1);
    assert!(state.players.iter().all(|pl| pl.hand.len() == 1));
    assert_eq!(state.turn_phase, TurnPhase::Draw);
    assert_eq!(state.round_number, 1);
    assert_eq!(state.current_player_index, 0);
    assert!(!state.is_game_over);
}

#[test]
fn test_guard_correct_guess_wins_round() {
    let (engine, state) = duel(&["princess-1", "guard-1", "priest-1", "baron-1"]);

    let play = CardPlay::new("guard-1").targeting("p2").guessing(Rank::Priest);
    let state = engine.play_card(&state, &p("p1"), &play).unwrap();

    assert!(state.players[1].is_eliminated);
    assert!(!state.players[0].is_eliminated);
    assert_eq!(state.turn_phase, TurnPhase::RoundEnd);
    assert_eq!(state.round_winner, Some(p("p1")));
    assert_eq!(state.players[0].tokens, 1);
}

#[test]
fn test_guard_wrong_guess_changes_nothing() {
    let (engine, state) = duel(&["princess-1", "guard-1", "priest-1", "baron-1"]);

    let play = CardPlay::new("guard-1").targeting("p2").guessing(Rank::King);
    let next = engine.play_card(&state, &p("p1"), &play).unwrap();

    assert!(next.players.iter().all(|pl| !pl.is_eliminated));
    assert_eq!(next.current_player_index, 1);
    assert_eq!(next.turn_phase, TurnPhase::Draw);
}

#[test]
fn test_guard_cannot_guess_guard_or_self() {
    let (engine, state) = duel(&["princess-1", "guard-1", "priest-1", "baron-1"]);

    let err = engine
        .play_card(&state, &p("p1"), &CardPlay::new("guard-1").targeting("p2").guessing(Rank::Guard))
        .unwrap_err();
    assert_eq!(err.reason, RuleError::GuardGuess);

    let err = engine
        .play_card(&state, &p("p1"), &CardPlay::new("guard-1").targeting("p1").guessing(Rank::Baron))
        .unwrap_err();
    assert_eq!(err.reason, RuleError::SelfTarget { rank: Rank::Guard });
    assert_eq!(without_log(&err.into_state()), without_log(&state));
}

#[test]
fn test_baron_tie_keeps_both_players() {
    let (engine, state) = duel(&["princess-1", "handmaid-1", "handmaid-2", "baron-1"]);

    let state = engine
        .play_card(&state, &p("p1"), &CardPlay::new("baron-1").targeting("p2"))
        .unwrap();

    assert!(state.players.iter().all(|pl| !pl.is_eliminated));
    assert_eq!(state.turn_phase, TurnPhase::Draw);
}

#[test]
fn test_countess_lock() {
    let (engine, state) = duel(&["princess-1", "countess-1", "guard-1", "king-1"]);

    let err = engine
        .play_card(&state, &p("p1"), &CardPlay::new("king-1").targeting("p2"))
        .unwrap_err();
    assert_eq!(err.reason, RuleError::CountessRequired { held: Rank::King });
    let rejected = err.into_state();
    assert!(rejected.players[0].hand.has_rank(Rank::Countess));
    assert_eq!(without_log(&rejected), without_log(&state));
    assert_eq!(rejected.game_log.len(), state.game_log.len() + 1);

    let state = engine
        .play_card(&state, &p("p1"), &CardPlay::new("countess-1"))
        .unwrap();
    assert_eq!(state.players[0].discard_pile[0].rank, Rank::Countess);
    assert!(state.players[0].hand.has_rank(Rank::King));
}

#[test]
fn test_discarding_princess_eliminates() {
    let (engine, state) = duel(&["king-1", "princess-1", "guard-1", "guard-2"]);

    let state = engine
        .play_card(&state, &p("p1"), &CardPlay::new("princess-1"))
        .unwrap();

    assert!(state.players[0].is_eliminated);
    assert_eq!(state.round_winner, Some(p("p2")));
}

#[test]
fn test_prince_forcing_princess_discard_eliminates() {
    let (engine, state) = duel(&["king-1", "prince-1", "princess-1", "guard-1"]);

    let state = engine
        .play_card(&state, &p("p1"), &CardPlay::new("prince-1").targeting("p2"))
        .unwrap();

    assert!(state.players[1].is_eliminated);
    assert_eq!(state.players[1].discard_pile[0].rank, Rank::Princess);
    assert_eq!(state.turn_phase, TurnPhase::RoundEnd);
    assert_eq!(state.players[0].tokens, 1);
}

#[test]
fn test_prince_on_baron_holder_continues_round() {
    let (engine, state) = duel(&["king-1", "princess-1", "baron-1", "prince-1"]);
    let deck_before = state.deck.len();

    let state = engine
        .play_card(&state, &p("p1"), &CardPlay::new("prince-1").targeting("p2"))
        .unwrap();

    assert!(!state.players[1].is_eliminated);
    assert_eq!(state.players[1].discard_pile[0].rank, Rank::Baron);
    assert_eq!(state.players[1].hand.len(), 1);
    assert_eq!(state.deck.len(), deck_before - 1);
    assert!(state.players[0].hand.has_rank(Rank::Princess));
    assert_eq!(state.turn_phase, TurnPhase::Draw);
    assert_eq!(state.current_player().id, p("p2"));
}

#[test]
fn test_handmaid_protection_lasts_one_round_trip() {
    let (engine, state) = duel(&["princess-1", "guard-1", "baron-1", "handmaid-1", "guard-2"]);

    let state = engine
        .play_card(&state, &p("p1"), &CardPlay::new("handmaid-1"))
        .unwrap();
    assert!(state.players[0].is_protected);

    let state = engine.draw_card(&state, &p("p2")).unwrap();
    let state = engine
        .play_card(
            &state,
            &p("p2"),
            &CardPlay::new("guard-2").targeting("p1").guessing(Rank::Priest),
        )
        .unwrap();

    assert!(!state.players[0].is_eliminated);
    assert!(state.game_log.iter().any(|line| line.contains("protected")));
    assert_eq!(state.current_player().id, p("p1"));
    assert!(!state.players[0].is_protected);
}

#[test]
fn test_legal_actions_offer_untargeted_play_when_all_protected() {
    let (engine, state) = duel(&["princess-1", "guard-1", "baron-1", "handmaid-1", "guard-2"]);
    let state = engine
        .play_card(&state, &p("p1"), &CardPlay::new("handmaid-1"))
        .unwrap();
    let state = engine.draw_card(&state, &p("p2")).unwrap();

    let actions = engine.legal_actions(&state, &p("p2"));

    assert!(actions.contains(&Action::Play(CardPlay::new("guard-2"))));
    assert!(actions.contains(&Action::Play(CardPlay::new("baron-1"))));
    let outcome = engine.play_card(&state, &p("p2"), &CardPlay::new("baron-1"));
    assert!(outcome.is_ok());
}

#[test]
fn test_out_of_turn_is_rejected_without_change() {
    let (engine, state) = duel(&["princess-1", "guard-1", "priest-1", "baron-1"]);

    for action in [Action::Draw, Action::Play(CardPlay::new("priest-1"))] {
        let err = engine.apply_action(&state, &p("p2"), &action).unwrap_err();
        assert!(matches!(err.reason, RuleError::NotYourTurn { .. }));
        assert_eq!(without_log(&err.into_state()), without_log(&state));
    }

    let err = engine.draw_card(&state, &p("p1")).unwrap_err();
    assert!(matches!(err.reason, RuleError::WrongPhase { .. }));

    let err = engine
        .play_card(&state, &p("p1"), &CardPlay::new("priest-1"))
        .unwrap_err();
    assert_eq!(err.reason, RuleError::CardNotInHand("priest-1".into()));
}

#[test]
fn test_priest_reveal_is_private() {
    let (engine, state) = duel(&["princess-1", "guard-1", "king-1", "priest-1"]);

    let state = engine
        .play_card(&state, &p("p1"), &CardPlay::new("priest-1").targeting("p2"))
        .unwrap();

    let mine = PlayerView::for_player(&state, &p("p1"));
    assert_eq!(mine.known_cards.len(), 1);
    assert_eq!(mine.known_cards[0].card.rank, Rank::King);
    assert_eq!(mine.players[1].hand, vec![VisibleCard::Hidden]);

    let theirs = PlayerView::for_player(&state, &p("p2"));
    assert!(theirs.known_cards.is_empty());
    assert!(state.game_log.iter().all(|line| !line.contains("King")));
}

#[test]
fn test_king_swaps_hands() {
    let (engine, state) = duel(&["princess-1", "guard-1", "countess-1", "king-1"]);

    let state = engine
        .play_card(&state, &p("p1"), &CardPlay::new("king-1").targeting("p2"))
        .unwrap();

    assert!(state.players[0].hand.has_rank(Rank::Countess));
    assert!(state.players[1].hand.has_rank(Rank::Guard));
}

#[test]
fn test_token_threshold_ends_match() {
    let (engine, mut state) = duel(&["princess-1", "guard-1", "priest-1", "baron-1"]);
    state.players[0].tokens = 6;

    let play = CardPlay::new("guard-1").targeting("p2").guessing(Rank::Priest);
    let state = engine.play_card(&state, &p("p1"), &play).unwrap();

    assert!(state.is_game_over);
    assert_eq!(state.winner, Some(p("p1")));
    assert_eq!(state.turn_phase, TurnPhase::GameEnd);
    assert_eq!(engine.is_terminal(&state).map(|r| r.winner), Some(p("p1")));

    assert_eq!(engine.start_new_round(&state).unwrap_err().reason, RuleError::GameOver);
    assert_eq!(
        engine.draw_card(&state, &p("p2")).unwrap_err().reason,
        RuleError::GameOver
    );
    assert!(engine.legal_actions(&state, &p("p1")).is_empty());
}

#[test]
fn test_new_round_after_win() {
    let (engine, state) = duel(&["princess-1", "guard-1", "priest-1", "baron-1"]);
    let play = CardPlay::new("guard-1").targeting("p2").guessing(Rank::Priest);
    let ended = engine.play_card(&state, &p("p1"), &play).unwrap();

    assert_eq!(engine.legal_actions(&ended, &p("p2")), vec![Action::StartNewRound]);
    let next = engine
        .apply_action(&ended, &p("p2"), &Action::StartNewRound)
        .unwrap();

    assert_eq!(next.round_number, 2);
    assert_eq!(next.players[0].tokens, 1);
    assert!(next.players.iter().all(|pl| pl.discard_pile.is_empty() && pl.hand.len() == 1));
    assert_eq!(next.card_count(), DECK_SIZE);
    assert!(next.game_log.len() > ended.game_log.len());
    assert!(next.game_log.iter().take(ended.game_log.len()).eq(ended.game_log.iter()));
}

#[test]
fn test_deck_exhaustion_goes_to_showdown() {
    let (engine, mut state) = duel(&["guard-1", "priest-1", "handmaid-1", "countess-1"]);
    // p1's draw was the last card.
    state.deck.clear();

    let state = engine
        .play_card(&state, &p("p1"), &CardPlay::new("countess-1"))
        .unwrap();
    assert_eq!(state.turn_phase, TurnPhase::Draw);

    let state = engine.draw_card(&state, &p("p2")).unwrap();
    assert_eq!(state.turn_phase, TurnPhase::RoundEnd);
    assert!(state.game_log.iter().any(|line| line.contains("deck is empty")));
    assert!(state.players[1].hand.len() == 1);
    assert_eq!(state.round_winner, Some(p("p2")));
    assert_eq!(state.players[1].tokens, 1);
}

#[test]
fn test_effect_outcome_serializes_with_kind() {
    let outcome = EffectOutcome::Swapped { target: p("p2") };
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        serde_json::json!({ "kind": "swapped", "target": "p2" })
    );
}

#[test]
fn test_state_survives_json_round_trip() {
    let (_, state) = duel(&["princess-1", "guard-1", "priest-1", "baron-1"]);

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
}
