use super::*;

const THRESHOLD: Duration = Duration::from_millis(500);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn first_activation_is_first() {
    let mut gesture = GestureDebouncer::split(THRESHOLD);
    assert_eq!(gesture.classify(Some(BlockId::next()), Instant::now()), Activation::First);
    assert!(gesture.last.is_some());
}

#[test]
fn repeat_within_threshold() {
    let mut gesture = GestureDebouncer::split(THRESHOLD);
    let id = BlockId::next();
    let t0 = Instant::now();

    gesture.classify(Some(id), t0);
    assert_eq!(gesture.classify(Some(id), t0 + ms(200)), Activation::Repeat);
}

#[test]
fn threshold_is_inclusive() {
    let mut gesture = GestureDebouncer::split(THRESHOLD);
    let id = BlockId::next();
    let t0 = Instant::now();

    gesture.classify(Some(id), t0);
    assert_eq!(gesture.classify(Some(id), t0 + THRESHOLD), Activation::Repeat);
}

#[test]
fn gap_beyond_threshold_is_first_but_rearms() {
    let mut gesture = GestureDebouncer::split(THRESHOLD);
    let id = BlockId::next();
    let t0 = Instant::now();

    gesture.classify(Some(id), t0);
    let t1 = t0 + ms(501);
    assert_eq!(gesture.classify(Some(id), t1), Activation::First);
    assert_eq!(gesture.classify(Some(id), t1 + ms(100)), Activation::Repeat);
}

#[test]
fn split_ignores_subject() {
    let mut gesture = GestureDebouncer::split(THRESHOLD);
    let t0 = Instant::now();

    gesture.classify(Some(BlockId::next()), t0);
    assert_eq!(
        gesture.classify(Some(BlockId::next()), t0 + ms(100)),
        Activation::Repeat
    );
}

#[test]
fn select_all_requires_same_subject() {
    let mut gesture = GestureDebouncer::select_all(THRESHOLD);
    let a = BlockId::next();
    let b = BlockId::next();
    let t0 = Instant::now();

    gesture.classify(Some(a), t0);
    assert_eq!(gesture.classify(Some(b), t0 + ms(100)), Activation::First);
    // The mismatched activation still became the record.
    assert_eq!(gesture.classify(Some(b), t0 + ms(200)), Activation::Repeat);
}

#[test]
fn reset_forgets_last_activation() {
    let mut gesture = GestureDebouncer::split(THRESHOLD);
    let id = BlockId::next();
    let t0 = Instant::now();

    gesture.classify(Some(id), t0);
    gesture.reset();
    assert!(gesture.last.is_none());
    assert_eq!(gesture.classify(Some(id), t0 + ms(10)), Activation::First);
}

#[test]
fn earlier_timestamp_never_repeats() {
    let mut gesture = GestureDebouncer::split(THRESHOLD);
    let id = BlockId::next();
    let t0 = Instant::now() + ms(1000);

    gesture.classify(Some(id), t0);
    assert_eq!(gesture.classify(Some(id), t0 - ms(10)), Activation::First);
}

#[test]
fn custom_threshold_narrows_window() {
    let mut gesture = GestureDebouncer::new("quick", SubjectPolicy::Same, ms(50));
    let id = BlockId::next();
    let t0 = Instant::now();

    gesture.classify(Some(id), t0);
    assert_eq!(gesture.classify(Some(id), t0 + ms(100)), Activation::First);
    assert_eq!(gesture.classify(Some(id), t0 + ms(150)), Activation::Repeat);
}
