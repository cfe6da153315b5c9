use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use futures::executor::block_on;
use shared::constants::{FORTUNE_EMPTY_FALLBACK, GATE_KEY};
use shared::*;

type Store = Rc<RefCell<HashMap<String, String>>>;

fn new_controller(store: &Store, script: Vec<usize>) -> SpinController<ScriptedIndex, KeyedGate<Store>> {
    SpinController::new(
        PRIZES.clone(),
        SpinConfig::default(),
        ScriptedIndex::new(script),
        KeyedGate::new(store.clone(), GATE_KEY),
    )
}

#[test]
fn test_full_spin_persists_gate_across_reload() {
    let store: Store = Rc::default();
    let clock = ManualClock::new();
    let teller = CannedTeller::answering("Selamat atas kemenangan Anda.");

    let mut controller = new_controller(&store, vec![3]);
    assert!(controller.can_spin());

    let plan = controller.spin().expect("first spin should start");
    assert_eq!(plan.prize.label, "700K");
    assert_eq!(plan.stop_angle, 220.0);

    let outcome = block_on(reveal(&plan, &clock, &teller, controller.config().reveal_delay()));
    assert!(controller.settle(outcome));
    assert_eq!(controller.status(), SpinStatus::Won);
    assert_eq!(controller.fortune(), Some("Selamat atas kemenangan Anda."));

    assert_eq!(clock.requested(), vec![Duration::from_millis(10_500)]);
    assert_eq!(teller.asked(), vec!["700K".to_string()]);
    assert_eq!(store.borrow().get(GATE_KEY).map(String::as_str), Some("true"));

    // Same storage, fresh page.
    let mut reloaded = new_controller(&store, vec![0]);
    assert!(reloaded.has_spun_before());
    assert!(reloaded.spin().is_none());
    assert_eq!(reloaded.status(), SpinStatus::Idle);
    assert_eq!(reloaded.rotation(), 0.0);
}

#[test]
fn test_stale_gate_value_does_not_lock() {
    let store: Store = Rc::default();
    store.borrow_mut().insert(GATE_KEY.to_string(), "false".to_string());

    let mut controller = new_controller(&store, vec![8]);
    assert!(!controller.has_spun_before());

    let plan = controller.spin().unwrap();
    assert_eq!(plan.stop_angle, 20.0);
    assert_eq!(controller.geometry().segment_under_pointer(plan.rotation), 8);
}

#[test]
fn test_empty_fortune_uses_fallback() {
    let store: Store = Rc::default();
    let mut controller = new_controller(&store, vec![6]);
    let plan = controller.spin().unwrap();

    let outcome = block_on(reveal(
        &plan,
        &ManualClock::new(),
        &CannedTeller::answering(""),
        controller.config().reveal_delay(),
    ));
    assert_eq!(outcome.fortune, FORTUNE_EMPTY_FALLBACK);
    assert!(controller.settle(outcome));
    assert_eq!(controller.selected_prize().map(|p| p.label.as_str()), Some("750K"));
}

#[test]
fn test_gate_write_failure_still_reveals() {
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), GateError> {
            Err(GateError::Unavailable)
        }
    }

    let mut controller = SpinController::new(
        PRIZES.clone(),
        SpinConfig::default(),
        RngIndex::seeded(7),
        KeyedGate::new(BrokenStore, GATE_KEY),
    );
    let plan = controller.spin().unwrap();
    assert!(plan.prize_index < PRIZES.len());

    let outcome = block_on(reveal(
        &plan,
        &ManualClock::new(),
        &CannedTeller::failing(FortuneError::MissingApiKey),
        Duration::from_millis(0),
    ));
    assert!(controller.settle(outcome));
    assert!(controller.has_spun_before());
    assert!(controller.spin().is_none());
}
