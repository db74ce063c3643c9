use proptest::prelude::*;

use hand_gesture::{extract, ClassifierConfig, GestureClassifier, GestureEvent};
use hand_stream::{HandFrame, Landmark, LANDMARK_COUNT};

fn arb_landmark() -> impl Strategy<Value = Landmark> {
    (0.0_f32..=1.0, 0.0_f32..=1.0).prop_map(|(x, y)| Landmark::new(x, y))
}

fn arb_frame() -> impl Strategy<Value = HandFrame> {
    proptest::collection::vec(arb_landmark(), LANDMARK_COUNT)
        .prop_map(|points| HandFrame::from_points(&points).unwrap())
}

proptest! {
    #[test]
    fn pt_no_hand_never_mutates_gesture_state(
        frames in proptest::collection::vec(arb_frame(), 1..8),
    ) {
        let mut c = GestureClassifier::new(ClassifierConfig::default());
        for f in &frames {
            c.process(Some(f));
        }
        let active = c.state().active;
        let anchor = c.state().scroll_anchor;

        let out = c.process(None);
        prop_assert_eq!(out.cursor, None);
        prop_assert_eq!(out.event, None);
        prop_assert_eq!(c.state().active, active);
        prop_assert_eq!(c.state().scroll_anchor, anchor);
    }

    #[test]
    fn pt_scroll_posture_never_emits_click_family(
        prev in arb_frame(),
        frame in arb_frame(),
    ) {
        let cfg = ClassifierConfig::default();
        let f = extract(&frame, &cfg);
        prop_assume!(
            f.index_up && f.middle_up
                && f.index_middle_separation > cfg.separation_threshold
        );

        let mut c = GestureClassifier::new(cfg);
        c.process(Some(&prev));
        match c.process(Some(&frame)).event {
            None | Some(GestureEvent::Scroll { .. }) => {}
            other => prop_assert!(false, "click-family event in scroll posture: {:?}", other),
        }
    }

    #[test]
    fn pt_identical_frames_emit_at_most_one_event(
        frame in arb_frame(),
        reps in 2_usize..12,
    ) {
        let mut c = GestureClassifier::new(ClassifierConfig::default());
        let mut events = 0;
        for _ in 0..reps {
            if c.process(Some(&frame)).event.is_some() {
                events += 1;
            }
        }
        prop_assert!(events <= 1, "{} events from a held posture", events);
    }

    #[test]
    fn pt_cursor_stays_on_screen(frame in arb_frame()) {
        let mut c = GestureClassifier::new(ClassifierConfig::for_screen(1920.0, 1080.0));
        let cursor = c.process(Some(&frame)).cursor.unwrap();
        prop_assert!((0.0..=1920.0).contains(&cursor.x));
        prop_assert!((0.0..=1080.0).contains(&cursor.y));
    }
}
