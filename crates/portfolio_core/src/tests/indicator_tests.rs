use super::*;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn hidden_until_triggered() {
    let indicator = SectionIndicator::default();
    let now = Instant::now();
    assert!(!indicator.is_visible(now));
    assert_eq!(indicator.time_until_hide(now), None);
}

#[test]
fn visible_for_exactly_the_duration() {
    let mut indicator = SectionIndicator::default();
    let start = Instant::now();
    indicator.trigger(start);

    assert!(indicator.is_visible(start));
    assert!(indicator.is_visible(start + ms(1999)));
    assert!(!indicator.is_visible(start + ms(2000)));
    assert_eq!(indicator.time_until_hide(start + ms(500)), Some(ms(1500)));
}

#[test]
fn later_trigger_extends_visibility_past_first_deadline() {
    let mut indicator = SectionIndicator::default();
    let start = Instant::now();
    indicator.trigger(start);
    indicator.trigger(start + ms(1500));

    // The first trigger's deadline has passed but the label must stay up.
    assert!(!indicator.expire(start + ms(2000)));
    assert!(indicator.is_visible(start + ms(2000)));
    assert!(indicator.is_visible(start + ms(3499)));
    assert!(!indicator.is_visible(start + ms(3500)));
}

#[test]
fn frequent_triggers_keep_indicator_visible_continuously() {
    let mut indicator = SectionIndicator::default();
    let start = Instant::now();
    for step in 0..10u64 {
        let at = start + ms(step * 1900);
        indicator.trigger(at);
        assert!(indicator.is_visible(at + ms(1899)));
    }
    let last = start + ms(9 * 1900);
    assert!(!indicator.is_visible(last + ms(2000)));
}

#[test]
fn stale_trigger_never_pulls_deadline_earlier() {
    let mut indicator = SectionIndicator::default();
    let start = Instant::now();
    indicator.trigger(start + ms(1000));
    indicator.trigger(start);
    assert!(indicator.is_visible(start + ms(2999)));
}

#[test]
fn expire_reports_hide_edge_once() {
    let mut indicator = SectionIndicator::new(ms(250));
    let start = Instant::now();
    indicator.trigger(start);

    assert!(!indicator.expire(start + ms(100)));
    assert!(indicator.expire(start + ms(250)));
    assert!(!indicator.expire(start + ms(300)));
    assert!(!indicator.is_visible(start + ms(300)));
}
