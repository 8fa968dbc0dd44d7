//! Property tests: invariants that hold in every reachable state.
//!
//! Properties tested:
//! - All 16 cards are accounted for at every step
//! - The current seat is valid and still in the round while it is running
//! - Only the current player ever holds two cards
//! - Tokens never decrease, and the match ends exactly at the threshold
//! - Out-of-turn actions are rejected without touching the state

use proptest::prelude::*;

use love_letter::ai::{Agent, RandomAgent};
use love_letter::core::{Action, GameRng, GameState, MatchConfig, TurnPhase};
use love_letter::rules::{RoundEngine, RulesEngine};
use love_letter::DECK_SIZE;

fn check_invariants(state: &GameState, config: &MatchConfig) -> Result<(), TestCaseError> {
    prop_assert_eq!(state.card_count(), DECK_SIZE);
    prop_assert!(state.current_player_index < state.player_count());

    if !state.is_round_over() {
        prop_assert!(!state.current_player().is_eliminated);
    }

    for (seat, player) in state.players.iter().enumerate() {
        let holding_two = seat == state.current_player_index && state.turn_phase == TurnPhase::Play;
        let limit = if holding_two { 2 } else { 1 };
        prop_assert!(player.hand.len() <= limit, "seat {} holds {}", seat, player.hand.len());
        prop_assert!(!(player.is_protected && player.is_eliminated));
    }

    if state.is_game_over {
        let needed = config.tokens_to_win(state.player_count());
        let winner = state.winner.as_ref().and_then(|id| state.player(id));
        prop_assert!(winner.is_some_and(|p| p.tokens >= needed));
    }
    Ok(())
}

fn roster(n: usize) -> (Vec<String>, Vec<String>) {
    (
        (0..n).map(|i| format!("p{i}")).collect(),
        (0..n).map(|i| format!("Player {i}")).collect(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_random_matches_keep_invariants(seed in any::<u64>(), players in 2usize..=4) {
        let engine = RoundEngine::default();
        let (ids, names) = roster(players);
        let mut state = engine.initialize_game(&ids, &names, GameRng::new(seed)).unwrap();
        let mut agents: Vec<RandomAgent> = (0..players)
            .map(|i| RandomAgent::new(seed.wrapping_add(i as u64)))
            .collect();

        check_invariants(&state, engine.config())?;

        for _ in 0..5_000 {
            if engine.is_terminal(&state).is_some() {
                break;
            }

            let seat = state.current_player_index;
            let actor = state.current_player().id.clone();
            let action = agents[seat].choose_action(&engine, &state, &actor);
            prop_assert!(action.is_some(), "{} had nothing to do", actor);
            let Some(action) = action else { break };

            let tokens_before: Vec<u32> = state.players.iter().map(|p| p.tokens).collect();
            let next = engine.apply_action(&state, &actor, &action);
            prop_assert!(next.is_ok(), "legal action {:?} was rejected", action);
            let Ok(next) = next else { break };

            for (before, after) in tokens_before.iter().zip(next.players.iter()) {
                prop_assert!(after.tokens >= *before);
            }
            prop_assert!(next.game_log.len() > state.game_log.len());
            check_invariants(&next, engine.config())?;
            state = next;
        }

        prop_assert!(state.is_game_over);
    }

    #[test]
    fn prop_out_of_turn_actions_change_nothing(seed in any::<u64>(), steps in 0usize..40) {
        let engine = RoundEngine::default();
        let (ids, names) = roster(3);
        let mut state = engine.initialize_game(&ids, &names, GameRng::new(seed)).unwrap();
        let mut agent = RandomAgent::new(seed);

        for _ in 0..steps {
            if state.is_round_over() {
                break;
            }
            let actor = state.current_player().id.clone();
            let Some(action) = agent.choose_action(&engine, &state, &actor) else { break };
            state = engine.apply_action(&state, &actor, &action).unwrap();
        }
        prop_assume!(!state.is_round_over());

        let bystander = state.players[(state.current_player_index + 1) % 3].id.clone();
        for action in [Action::Draw, Action::StartNewRound] {
            let rejected = engine.apply_action(&state, &bystander, &action);
            prop_assert!(rejected.is_err());
            let Err(rejection) = rejected else { continue };

            let mut logged = rejection.into_state();
            prop_assert_eq!(logged.game_log.len(), state.game_log.len() + 1);
            logged.game_log = state.game_log.clone();
            prop_assert_eq!(&logged, &state);
        }
    }

    #[test]
    fn prop_same_seed_same_match(seed in any::<u64>()) {
        let engine = RoundEngine::default();
        let (ids, names) = roster(2);
        let a = engine.initialize_game(&ids, &names, GameRng::new(seed)).unwrap();
        let b = engine.initialize_game(&ids, &names, GameRng::new(seed)).unwrap();
        prop_assert_eq!(&a, &b);

        let deck: Vec<_> = a.deck.iter().map(|c| c.id.clone()).collect();
        let mut sorted = deck.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), deck.len());
    }
}
