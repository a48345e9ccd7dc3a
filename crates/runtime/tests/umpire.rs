mod common;

use common::{Fixture, RULES, admiral, script};
use wargame_content::OracleScript;
use wargame_core::{
    ActionResponse, Actor, MechanicError, MechanicKind, Modifier, OracleError, ResourceChange,
    Turn, WinVerdict,
};
use wargame_runtime::{AgentProvider, RuntimeError, ScriptedInput, TurnOutcome};

fn umpire_turn() -> Turn {
    Turn::umpire("Describe the opening situation")
}

fn admiral_turn() -> Turn {
    Turn::for_participant("Blue", "Admiral", "Respond to the blockade")
}

fn envoy_turn() -> Turn {
    Turn::for_participant("Red", "Envoy", "Open negotiations")
}

// ============================================================================
// Dispatch and resolution
// ============================================================================

#[test]
fn umpire_target_never_resolves_a_team() {
    let (mut umpire, _) = Fixture::new(Vec::new()).umpire();

    let outcome = umpire.resolve_turn(&umpire_turn()).expect("umpire turn");
    assert_eq!(outcome, TurnOutcome::Accepted(ActionResponse::new("proceed")));

    // A bogus team next to the umpire sentinel is ignored.
    let turn = Turn::new(Some("Ghost fleet"), "Umpire", "Announce weather");
    assert!(umpire.resolve_turn(&turn).expect("umpire turn").is_accepted());

    assert_eq!(umpire.actions().len(), 2);
    assert_eq!(umpire.actions()[0].actor, Actor::Umpire);
    assert_eq!(umpire.actions()[1].sequence, 1);
}

#[test]
fn unresolvable_targets_fail_without_logging() {
    let (mut umpire, oracles) = Fixture::new(Vec::new()).umpire();

    let unknown = [
        Turn::for_participant("Green", "Admiral", "x"),
        Turn::for_participant("Blue", "Nobody", "x"),
        Turn::for_participant("Blue", "Envoy", "x"),
        Turn::new(None, "Admiral", "x"),
    ];
    for turn in &unknown {
        match umpire.resolve_turn(turn) {
            Err(RuntimeError::Resolution { team, target }) => {
                assert_eq!(team, turn.team);
                assert_eq!(target, turn.target);
            }
            other => panic!("expected resolution error, got {other:?}"),
        }
    }

    assert!(umpire.actions().is_empty());
    assert_eq!(oracles.calls().actions(), 0);
}

#[test]
fn participants_resolve_by_identity_or_name() {
    let (mut umpire, _) = Fixture::new(Vec::new()).umpire();
    let by_identity = Turn::for_participant("Blue", admiral().identity(), "Patrol");

    assert!(umpire.resolve_turn(&by_identity).expect("agent turn").is_accepted());
    assert!(umpire.resolve_turn(&admiral_turn()).expect("agent turn").is_accepted());
    assert_eq!(
        umpire.actions()[0].actor,
        Actor::Agent {
            team: "Blue".into(),
            participant: "Admiral".into()
        }
    );
}

// ============================================================================
// Legality retry protocol
// ============================================================================

#[test]
fn legality_retry_stops_on_first_acceptance() {
    let (mut umpire, oracles) = Fixture::new(Vec::new())
        .script(script().legality([false, false, true]))
        .umpire();

    assert!(umpire.resolve_turn(&umpire_turn()).expect("umpire turn").is_accepted());

    let calls = oracles.calls();
    assert_eq!(calls.legality, 3);
    assert_eq!(calls.actions(), 3);
    assert!(calls.action_prompts[0].starts_with("Following the rules of this game"));
    assert!(
        calls.action_prompts[1]
            .starts_with("Your last action was deemed not legal in the game rules.")
    );
    assert!(calls.action_prompts[1].contains(RULES));
    assert_eq!(umpire.actions()[0].attempt, 3);
}

#[test]
fn umpire_exhaustion_is_fatal() {
    let (mut umpire, oracles) = Fixture::new(Vec::new())
        .script(script().legality([false; 5]))
        .umpire();

    match umpire.resolve_turn(&umpire_turn()) {
        Err(RuntimeError::LegalityExhausted { activity, attempts }) => {
            assert_eq!(activity, "Describe the opening situation");
            assert_eq!(attempts, 5);
        }
        other => panic!("expected legality exhaustion, got {other:?}"),
    }
    assert_eq!(oracles.calls().legality, 5);
    assert!(umpire.actions().is_empty());
}

#[test]
fn configured_attempts_bound_the_loop() {
    let mut fixture = Fixture::new(Vec::new()).script(script().legality([false; 5]));
    fixture.config = fixture.config.clone().with_max_attempts(2);
    let (mut umpire, oracles) = fixture.umpire();

    assert!(matches!(
        umpire.resolve_turn(&umpire_turn()),
        Err(RuntimeError::LegalityExhausted { attempts: 2, .. })
    ));
    assert_eq!(oracles.calls().legality, 2);
}

// ============================================================================
// AI participants
// ============================================================================

#[test]
fn agent_out_of_character_every_time_is_soft_failure() {
    let (mut umpire, oracles) = Fixture::new(Vec::new())
        .script(script().in_character([false; 5]))
        .umpire();

    let outcome = umpire.resolve_turn(&admiral_turn()).expect("soft failure");
    assert_eq!(outcome, TurnOutcome::NoValidAction);

    let calls = oracles.calls();
    assert_eq!(calls.in_character, 5);
    assert_eq!(calls.legality, 0);
    assert_eq!(
        calls.action_prompts[0],
        "Scenario: It is your turn in the game. Respond to the blockade"
    );
    assert!(calls.action_prompts[1].starts_with(AgentProvider::OUT_OF_CHARACTER));
    assert!(umpire.actions().is_empty());
    assert!(
        umpire
            .game()
            .participant("Blue", "Admiral")
            .unwrap()
            .action_history()
            .is_empty()
    );
}

#[test]
fn agent_illegal_action_is_reformulated_then_accepted() {
    let (mut umpire, oracles) = Fixture::new(Vec::new())
        .script(
            script()
                .action(ActionResponse::new("mine the strait"))
                .action(ActionResponse::new("escort tankers"))
                .legality([false, true]),
        )
        .umpire();

    let outcome = umpire.resolve_turn(&admiral_turn()).expect("agent turn");
    assert_eq!(outcome.action().map(|a| a.action.as_str()), Some("escort tankers"));

    let calls = oracles.calls();
    assert_eq!(calls.legality, 2);
    assert!(
        calls.action_prompts[1]
            .starts_with("Scenario: Your last action was deemed not legal in the game rules.")
    );

    let record = &umpire.actions()[0];
    assert_eq!(record.attempt, 2);
    assert_eq!(record.activity, "Respond to the blockade");
}

#[test]
fn agent_legality_exhaustion_is_soft_failure() {
    let (mut umpire, oracles) = Fixture::new(Vec::new())
        .script(script().legality([false; 5]))
        .umpire();

    let outcome = umpire.resolve_turn(&admiral_turn()).expect("soft failure");
    assert_eq!(outcome, TurnOutcome::NoValidAction);
    assert_eq!(oracles.calls().legality, 5);
    assert!(umpire.actions().is_empty());
}

// ============================================================================
// Human participants
// ============================================================================

#[test]
fn human_json_reply_is_accepted() {
    let input = ScriptedInput::new([
        r#"{"action": "propose talks", "rationale": "avoid escalation", "targets": ["Blue"]}"#,
    ]);
    let (umpire, _) = Fixture::new(Vec::new()).umpire();
    let mut umpire = umpire.with_human_input(input);

    let outcome = umpire.resolve_turn(&envoy_turn()).expect("human turn");
    let action = outcome.action().expect("accepted");
    assert_eq!(action.action, "propose talks");
    assert_eq!(action.targets, vec!["Blue"]);

    assert_eq!(
        umpire.actions()[0].actor,
        Actor::Human {
            team: "Red".into(),
            participant: "Envoy".into()
        }
    );
    let envoy = umpire.game().participant("Red", "Envoy").unwrap();
    assert_eq!(envoy.action_history().len(), 1);
}

#[test]
fn human_illegal_every_time_is_soft_failure() {
    let (umpire, oracles) = Fixture::new(Vec::new())
        .script(script().legality([false; 5]))
        .umpire();
    let input = ScriptedInput::new(["a", "b", "c", "d", "e"]);
    let mut umpire = umpire.with_human_input(input.clone());

    let outcome = umpire.resolve_turn(&envoy_turn()).expect("soft failure");
    assert_eq!(outcome, TurnOutcome::NoValidAction);
    assert_eq!(oracles.calls().legality, 5);

    let prompts = input.prompts();
    assert_eq!(prompts.len(), 5);
    assert!(!prompts[0].starts_with("Your last action was deemed not legal"));
    for prompt in &prompts[1..] {
        assert!(prompt.starts_with("Your last action was deemed not legal in the game rules."));
        assert!(prompt.contains(RULES));
    }
    assert!(umpire.actions().is_empty());
}

#[test]
fn human_turn_without_input_bridge_is_an_error() {
    let (mut umpire, _) = Fixture::new(Vec::new()).umpire();
    assert!(matches!(
        umpire.resolve_turn(&envoy_turn()),
        Err(RuntimeError::ProviderNotSet { .. })
    ));
}

#[test]
fn closed_human_input_is_an_input_error() {
    let (umpire, _) = Fixture::new(Vec::new()).umpire();
    let mut umpire = umpire.with_human_input(ScriptedInput::new(Vec::<String>::new()));
    assert!(matches!(
        umpire.resolve_turn(&envoy_turn()),
        Err(RuntimeError::Input(_))
    ));
}

// ============================================================================
// Sub-mechanics
// ============================================================================

#[test]
fn dice_roll_is_fixed_across_retries() {
    let (mut umpire, oracles) = Fixture::new(Vec::new())
        .dice()
        .script(script().dice("2d6").legality([false, true]))
        .umpire();

    assert!(umpire.resolve_turn(&umpire_turn()).expect("umpire turn").is_accepted());

    let calls = oracles.calls();
    assert_eq!(calls.necessity, vec![MechanicKind::Dice]);

    let first = &calls.action_prompts[0];
    let start = first
        .find(" A '2d6' was rolled and the result was '")
        .expect("dice fact in prompt");
    let fact = &first[start..];
    assert!(calls.action_prompts[1].ends_with(fact));

    let total: u64 = fact
        .trim_start_matches(" A '2d6' was rolled and the result was '")
        .trim_end_matches("'.")
        .parse()
        .expect("numeric total");
    assert!((2..=12).contains(&total));
}

#[test]
fn dice_are_not_queried_when_disabled() {
    let (mut umpire, oracles) = Fixture::new(Vec::new())
        .script(script().dice("2d6"))
        .umpire();

    umpire.resolve_turn(&umpire_turn()).expect("umpire turn");
    assert!(oracles.calls().necessity.is_empty());
    assert!(!oracles.calls().action_prompts[0].contains("was rolled"));
}

#[test]
fn malformed_dice_spec_is_an_oracle_error() {
    let (mut umpire, _) = Fixture::new(Vec::new())
        .dice()
        .script(script().dice("a handful"))
        .umpire();

    assert!(matches!(
        umpire.resolve_turn(&umpire_turn()),
        Err(RuntimeError::Oracle(OracleError::Mechanic(
            MechanicError::InvalidDiceSpec(_)
        )))
    ));
    assert!(umpire.actions().is_empty());
}

#[test]
fn oversized_dice_spec_is_an_oracle_error() {
    let (mut umpire, oracles) = Fixture::new(Vec::new())
        .dice()
        .script(script().dice("4000000000d6"))
        .umpire();

    assert!(matches!(
        umpire.resolve_turn(&umpire_turn()),
        Err(RuntimeError::Oracle(OracleError::Mechanic(
            MechanicError::InvalidDiceSpec(_)
        )))
    ));
    assert!(oracles.calls().action_prompts.is_empty());
}

#[test]
fn lowest_face_above_sides_is_rejected_not_rolled() {
    let mut fixture = Fixture::new(Vec::new())
        .dice()
        .script(script().dice("2d6"));
    fixture.config.lowest_face = 10;
    let (mut umpire, oracles) = fixture.umpire();

    assert!(matches!(
        umpire.resolve_turn(&umpire_turn()),
        Err(RuntimeError::Oracle(OracleError::Mechanic(
            MechanicError::FloorAboveSides { lowest: 10, sides: 6 }
        )))
    ));
    assert!(oracles.calls().action_prompts.is_empty());
    assert!(umpire.actions().is_empty());
}

#[test]
fn card_draw_removes_drawn_cards() {
    let (mut umpire, oracles) = Fixture::new(Vec::new())
        .deck(&["Storm", "Calm", "Fog"])
        .script(script().cards(2))
        .umpire();

    umpire.resolve_turn(&umpire_turn()).expect("umpire turn");

    assert_eq!(umpire.game().deck().map(|d| d.len()), Some(1));
    assert!(
        oracles.calls().action_prompts[0]
            .contains(" 2 cards were drawn with the following results: ")
    );
}

#[test]
fn oversized_draw_empties_deck_and_stops_card_queries() {
    let (mut umpire, oracles) = Fixture::new(Vec::new())
        .deck(&["Storm", "Calm", "Fog"])
        .script(script().cards(5))
        .umpire();

    umpire.resolve_turn(&umpire_turn()).expect("first turn");
    assert_eq!(umpire.game().deck().map(|d| d.len()), Some(0));
    assert!(oracles.calls().action_prompts[0].contains(" 3 cards were drawn"));

    umpire.resolve_turn(&umpire_turn()).expect("second turn");
    assert_eq!(oracles.calls().necessity, vec![MechanicKind::Card]);
}

#[test]
fn dice_are_queried_before_cards() {
    let (mut umpire, oracles) = Fixture::new(Vec::new())
        .dice()
        .deck(&["Storm"])
        .script(script().dice("1d4").cards(1))
        .umpire();

    umpire.resolve_turn(&umpire_turn()).expect("umpire turn");

    assert_eq!(
        oracles.calls().necessity,
        vec![MechanicKind::Dice, MechanicKind::Card]
    );
    let prompt = &oracles.calls().action_prompts[0];
    let dice = prompt.find("was rolled").expect("dice fact");
    let cards = prompt.find("cards were drawn").expect("card fact");
    assert!(dice < cards);
}

// ============================================================================
// Resource ledger
// ============================================================================

#[test]
fn ledger_get_or_insert_zero_semantics() {
    let (mut umpire, _) = Fixture::new(Vec::new()).umpire();

    assert_eq!(umpire.resource("Blue", "Admiral", "ships"), Some(12));

    assert_eq!(umpire.add_resource("Blue", "Admiral", "fuel", 5), 5);
    assert_eq!(umpire.subtract_resource("Blue", "Admiral", "fuel", 3), 2);
    assert_eq!(umpire.resource("Blue", "Admiral", "fuel"), Some(2));

    assert_eq!(umpire.subtract_resource("Red", "Envoy", "credit", 4), -4);

    let entries = umpire.ledger().len();
    assert_eq!(umpire.resource("Red", "Envoy", "gold"), None);
    assert_eq!(umpire.ledger().len(), entries);
}

#[test]
fn declared_resource_changes_are_not_applied_by_turns() {
    let resupply = ActionResponse::new("resupply the fleet").with_resources(vec![
        ResourceChange::new("ships", Modifier::Add(3)),
        ResourceChange::new("fuel", Modifier::Subtract(2)),
    ]);
    let (mut umpire, _) = Fixture::new(Vec::new())
        .script(script().action(resupply))
        .umpire();

    let outcome = umpire.resolve_turn(&admiral_turn()).expect("agent turn");
    assert_eq!(umpire.resource("Blue", "Admiral", "ships"), Some(12));

    let changes = outcome.action().expect("accepted").resources.clone();
    let balances = umpire.apply_resource_changes("Blue", "Admiral", &changes);
    assert_eq!(balances, vec![15, -2]);
}

// ============================================================================
// Status and reports
// ============================================================================

#[test]
fn status_snapshot_reflects_log_teams_and_ledger() {
    let (mut umpire, _) = Fixture::new(Vec::new()).umpire();
    umpire.resolve_turn(&umpire_turn()).expect("umpire turn");

    let status = umpire.game_status();
    assert_eq!(status.actions.len(), 1);
    assert_eq!(status.teams.len(), 2);
    assert_eq!(status.resources.len(), 1);

    let json = status.to_json().expect("status json");
    assert!(json.contains("\"proceed\""));
    assert!(json.contains("\"ships\""));
    assert!(json.contains("\"Admiral\""));
}

#[test]
fn reports_consult_the_report_oracle() {
    let (umpire, oracles) = Fixture::new(Vec::new())
        .script(
            OracleScript::new()
                .summary("Blue kept the strait open.")
                .winner(WinVerdict {
                    team: Some("Blue".into()),
                    player: None,
                }),
        )
        .umpire();

    assert_eq!(
        umpire.produce_summary().expect("summary"),
        "Blue kept the strait open."
    );
    assert_eq!(
        umpire.deduce_winner().expect("winner").team.as_deref(),
        Some("Blue")
    );
    let calls = oracles.calls();
    assert_eq!((calls.summary, calls.winner), (1, 1));
}
