use showdown_engine::errors::GameError;
use showdown_engine::rules::{validate_action, ValidatedAction};
use showdown_engine::seat::Action as A;

#[test]
fn check_is_legal_only_when_level() {
    let va = validate_action(1_000, /*committed*/ 0, /*highest*/ 0, A::Check).unwrap();
    assert_eq!(va, ValidatedAction::Check);

    let err = validate_action(1_000, 0, 50, A::Check).unwrap_err();
    match err {
        GameError::InvalidAction { .. } => {}
        _ => panic!("expected InvalidAction"),
    }
}

#[test]
fn call_of_zero_is_rejected() {
    let err = validate_action(1_000, 0, 0, A::Call).unwrap_err();
    match err {
        GameError::InvalidAction { .. } => {}
        _ => panic!("expected InvalidAction"),
    }

    // Already level with the highest bet: nothing left to call.
    let err = validate_action(1_000, 50, 50, A::Call).unwrap_err();
    match err {
        GameError::InvalidAction { .. } => {}
        _ => panic!("expected InvalidAction"),
    }
}

#[test]
fn call_resolves_the_owed_amount() {
    let va = validate_action(1_000, 20, 50, A::Call).unwrap();
    assert_eq!(
        va,
        ValidatedAction::Call {
            amount: 30,
            all_in: false
        }
    );
}

#[test]
fn short_call_goes_all_in_for_less() {
    let va = validate_action(60, 0, 100, A::Call).unwrap();
    assert_eq!(
        va,
        ValidatedAction::Call {
            amount: 60,
            all_in: true
        }
    );
}

#[test]
fn bet_zero_is_invalid() {
    let err = validate_action(10_000, 0, 0, A::Bet(0)).unwrap_err();
    match err {
        GameError::InvalidAction { .. } => {}
        _ => panic!("expected InvalidAction"),
    }
}

#[test]
fn bet_over_stack_is_rejected() {
    let err = validate_action(50, 0, 0, A::Bet(100)).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientFunds {
            required: 100,
            stack: 50
        }
    );
}

#[test]
fn bet_for_exactly_the_stack_is_all_in() {
    let va = validate_action(50, 0, 0, A::Bet(50)).unwrap();
    assert_eq!(
        va,
        ValidatedAction::RaiseTo {
            total: 50,
            all_in: true
        }
    );
}

#[test]
fn bet_into_an_open_bet_is_rejected() {
    let err = validate_action(1_000, 0, 50, A::Bet(100)).unwrap_err();
    match err {
        GameError::InvalidAction { .. } => {}
        _ => panic!("expected InvalidAction"),
    }
}

#[test]
fn raise_without_an_open_bet_is_rejected() {
    let err = validate_action(1_000, 0, 0, A::Raise(100)).unwrap_err();
    match err {
        GameError::InvalidAction { .. } => {}
        _ => panic!("expected InvalidAction"),
    }
}

#[test]
fn raise_must_exceed_the_highest_bet() {
    let err = validate_action(1_000, 0, 100, A::Raise(100)).unwrap_err();
    match err {
        GameError::InvalidAction { .. } => {}
        _ => panic!("expected InvalidAction"),
    }
}

#[test]
fn raise_to_a_covered_total_is_exact() {
    let va = validate_action(1_000, 50, 100, A::Raise(300)).unwrap();
    assert_eq!(
        va,
        ValidatedAction::RaiseTo {
            total: 300,
            all_in: false
        }
    );
}

#[test]
fn short_raise_is_capped_at_all_in() {
    // Raise to 500 with only 130 behind: total caps at 100+130.
    let va = validate_action(130, 100, 200, A::Raise(500)).unwrap();
    assert_eq!(
        va,
        ValidatedAction::RaiseTo {
            total: 230,
            all_in: true
        }
    );
}

#[test]
fn capped_raise_may_land_below_the_highest_bet() {
    // The cap can leave the total short of the bet it faced. The round
    // treats that as a call for less and must not reopen the action.
    let va = validate_action(60, 0, 100, A::Raise(200)).unwrap();
    assert_eq!(
        va,
        ValidatedAction::RaiseTo {
            total: 60,
            all_in: true
        }
    );
}
