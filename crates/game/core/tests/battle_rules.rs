use duel_core::{
    ActionChoice, ActionKind, Archetype, BattleConfig, BattleEngine, BattleState, CharacterId,
    CharacterSpec, Playstyle, TurnOutcome,
};

const ROGUE: CharacterId = CharacterId(0);
const MAGE: CharacterId = CharacterId(1);

fn rogue_vs_mage(rogue: Playstyle, mage: Playstyle, seed: u64) -> BattleState {
    BattleState::duel(
        &BattleConfig::with_seed(seed),
        CharacterSpec::new("Sophia", Archetype::Rogue, rogue),
        CharacterSpec::new("Mike", Archetype::Mage, mage),
    )
    .expect("duel setup")
}

fn assert_in_bounds(state: &BattleState) {
    for character in state.roster.iter() {
        assert!(character.hp() <= BattleConfig::MAX_HEALTH, "{character}");
        assert!(character.sp() <= BattleConfig::MAX_RESOURCE, "{character}");
    }
}

#[test]
fn rogue_attack_on_mage() {
    let mut state = rogue_vs_mage(Playstyle::Manual, Playstyle::Manual, 0);

    let outcome = BattleEngine::new(&mut state).perform_attack(ROGUE).unwrap();

    assert_eq!(state.character(MAGE).unwrap().hp(), 93);
    assert_eq!(state.character(ROGUE).unwrap().sp(), 97);
    assert_eq!(outcome.cost, 3);
    assert_eq!(state.queue.tail(1), vec![ROGUE]);
}

#[test]
fn rogue_special_costs_ten_and_queues_twice() {
    let mut state = rogue_vs_mage(Playstyle::Manual, Playstyle::Manual, 0);
    let entries_before = state.queue.entry_count();

    BattleEngine::new(&mut state).perform_special(ROGUE).unwrap();

    assert_eq!(state.character(ROGUE).unwrap().sp(), 90);
    assert_eq!(state.queue.entry_count(), entries_before + 2);
    assert_eq!(state.queue.tail(2), vec![ROGUE, ROGUE]);
}

#[test]
fn mage_special_on_rogue_queues_opponent_first() {
    let mut state = rogue_vs_mage(Playstyle::Manual, Playstyle::Manual, 0);

    BattleEngine::new(&mut state).perform_special(MAGE).unwrap();

    assert_eq!(state.character(ROGUE).unwrap().hp(), 70);
    assert_eq!(state.character(MAGE).unwrap().sp(), 70);
    assert_eq!(state.queue.tail(2), vec![ROGUE, MAGE]);
}

#[test]
fn empty_means_nobody_can_act() {
    let mut state = rogue_vs_mage(Playstyle::Manual, Playstyle::Manual, 0);
    assert!(!state.is_empty());
    assert_eq!(state.is_empty(), state.first_actionable().is_none());

    state.roster.get_mut(ROGUE).unwrap().resource.set(2);
    state.roster.get_mut(MAGE).unwrap().resource.set(4);

    assert_eq!(state.queue.entry_count(), 2);
    assert!(state.is_empty());
    assert_eq!(state.is_empty(), state.first_actionable().is_none());
}

#[test]
fn dequeue_skips_broke_actor_without_removing_it() {
    let mut state = rogue_vs_mage(Playstyle::Manual, Playstyle::Manual, 0);
    state.roster.get_mut(ROGUE).unwrap().resource.set(1);

    let next = state.queue.dequeue(&state.roster);

    assert_eq!(next, Some(MAGE));
    assert_eq!(state.queue.entries().collect::<Vec<_>>(), vec![ROGUE]);

    let snapshot = state.queue.clone();
    assert_eq!(state.queue.dequeue(&state.roster), None);
    assert_eq!(state.queue, snapshot);
}

#[test]
fn knockout_ends_battle_while_others_can_act() {
    let mut state = rogue_vs_mage(Playstyle::Manual, Playstyle::Manual, 0);
    state.roster.get_mut(MAGE).unwrap().health.set(0);

    assert!(state.first_actionable().is_some());
    assert!(state.is_over());
    assert_eq!(state.winner(), Some(ROGUE));
}

#[test]
fn no_winner_while_running() {
    let state = rogue_vs_mage(Playstyle::Manual, Playstyle::Manual, 0);
    assert!(!state.is_over());
    assert_eq!(state.winner(), None);
}

#[test]
fn random_rogue_with_five_points_only_attacks() {
    let mut state = rogue_vs_mage(Playstyle::Random, Playstyle::Random, 0);
    state.roster.get_mut(ROGUE).unwrap().resource.set(5);

    for seed in 0..32 {
        state.seed = seed;
        for nonce in 0..8 {
            state.nonce = nonce;
            assert_eq!(
                Playstyle::Random.select_action(&state, None),
                ActionChoice::Attack
            );
        }
    }
}

#[test]
fn resources_stay_in_bounds_under_repeated_specials() {
    let mut state = rogue_vs_mage(Playstyle::Manual, Playstyle::Manual, 0);
    let mut engine = BattleEngine::new(&mut state);

    for _ in 0..10 {
        engine.perform_special(MAGE).unwrap();
        engine.perform_special(ROGUE).unwrap();
    }

    let state = engine.state();
    assert_in_bounds(state);
    assert_eq!(state.character(MAGE).unwrap().sp(), 0);
    assert_eq!(state.character(ROGUE).unwrap().sp(), 0);
    assert_eq!(state.character(ROGUE).unwrap().hp(), 0);
    assert_eq!(state.character(MAGE).unwrap().hp(), 0);
}

#[test]
fn manual_duel_plays_in_queue_order() {
    let mut state = rogue_vs_mage(Playstyle::Manual, Playstyle::Manual, 0);
    let mut engine = BattleEngine::new(&mut state);

    // Rogue (front) specials: queue becomes [mage, rogue, rogue].
    let TurnOutcome::Resolved(first) = engine.play_turn(Some("S")).unwrap() else {
        panic!("rogue should act first");
    };
    assert_eq!((first.actor, first.kind), (ROGUE, ActionKind::Special));

    // Mage specials: queue becomes [rogue, rogue, rogue, mage].
    let TurnOutcome::Resolved(second) = engine.play_turn(Some("special")).unwrap() else {
        panic!("mage should act second");
    };
    assert_eq!(second.actor, MAGE);
    assert_eq!(
        engine.state().queue.entries().collect::<Vec<_>>(),
        vec![ROGUE, ROGUE, ROGUE, MAGE]
    );

    // A bad key leaves the rogue up.
    assert_eq!(
        engine.play_turn(Some("x")).unwrap(),
        TurnOutcome::Rejected {
            actor: ROGUE,
            choice: ActionChoice::Invalid
        }
    );
    assert_eq!(engine.state().peek(), Some(ROGUE));
}

#[test]
fn random_duels_always_finish_with_consistent_winner() {
    for seed in 0..25 {
        let mut state = rogue_vs_mage(Playstyle::Random, Playstyle::Random, seed);
        let outcome = BattleEngine::new(&mut state).run(500).unwrap();

        let Some(TurnOutcome::Finished { winner }) = outcome else {
            panic!("seed {seed}: battle did not finish: {outcome:?}");
        };
        assert!(state.is_over());
        assert_in_bounds(&state);
        if let Some(id) = winner {
            assert!(state.character(id).unwrap().is_alive());
        }
    }
}

#[test]
fn same_seed_replays_identically() {
    let mut a = rogue_vs_mage(Playstyle::Random, Playstyle::Random, 77);
    let mut b = rogue_vs_mage(Playstyle::Random, Playstyle::Random, 77);

    BattleEngine::new(&mut a).run(500).unwrap();
    BattleEngine::new(&mut b).run(500).unwrap();

    assert_eq!(a, b);
}

#[cfg(feature = "serde")]
#[test]
fn battle_state_snapshots_through_json() {
    let mut state = rogue_vs_mage(Playstyle::Manual, Playstyle::Random, 3);
    BattleEngine::new(&mut state).perform_special(MAGE).unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let restored: BattleState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
}
