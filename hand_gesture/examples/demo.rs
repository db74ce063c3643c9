//! Drives the classifier through a scripted posture sequence and prints
//! every cursor update and event.

use hand_gesture::{ClassifierConfig, GestureClassifier};
use hand_stream::{HandFrame, Landmark, INDEX_TIP, MIDDLE_TIP, THUMB_TIP};

fn open_hand() -> Vec<Landmark> {
    [
        (0.50, 0.80),
        (0.42, 0.72),
        (0.38, 0.66),
        (0.35, 0.60),
        (0.33, 0.55),
        (0.44, 0.60),
        (0.43, 0.48),
        (0.43, 0.40),
        (0.43, 0.33),
        (0.50, 0.59),
        (0.50, 0.46),
        (0.50, 0.38),
        (0.50, 0.30),
        (0.56, 0.60),
        (0.56, 0.48),
        (0.56, 0.41),
        (0.56, 0.34),
        (0.61, 0.62),
        (0.62, 0.52),
        (0.62, 0.46),
        (0.62, 0.41),
    ]
    .iter()
    .map(|&(x, y)| Landmark::new(x, y))
    .collect()
}

fn frame_with(edits: &[(usize, f32, f32)]) -> HandFrame {
    let mut points = open_hand();
    for &(i, x, y) in edits {
        points[i] = Landmark::new(x, y);
    }
    HandFrame::from_points(&points).unwrap()
}

fn main() {
    println!("\n=== hand_gesture demo ===\n");

    let mut classifier = GestureClassifier::new(ClassifierConfig::for_screen(1920.0, 1080.0));

    let script: Vec<(&str, Option<HandFrame>)> = vec![
        ("index raised (move)", Some(frame_with(&[(MIDDLE_TIP, 0.50, 0.52)]))),
        ("index raised (move)", Some(frame_with(&[(MIDDLE_TIP, 0.50, 0.52)]))),
        (
            "thumb–index pinch",
            Some(frame_with(&[(MIDDLE_TIP, 0.50, 0.52), (THUMB_TIP, 0.45, 0.36)])),
        ),
        (
            "pinch held",
            Some(frame_with(&[(MIDDLE_TIP, 0.50, 0.52), (THUMB_TIP, 0.45, 0.36)])),
        ),
        ("release", Some(frame_with(&[(MIDDLE_TIP, 0.50, 0.52)]))),
        ("scroll posture", Some(frame_with(&[(INDEX_TIP, 0.43, 0.40)]))),
        ("hand moves down", Some(frame_with(&[(INDEX_TIP, 0.43, 0.45)]))),
        ("tracking lost", None),
        ("tracking lost", None),
        ("hand moves down", Some(frame_with(&[(INDEX_TIP, 0.43, 0.47)]))),
        (
            "thumb–ring pinch",
            Some(frame_with(&[(MIDDLE_TIP, 0.50, 0.52), (THUMB_TIP, 0.55, 0.35)])),
        ),
    ];

    for (label, hand) in &script {
        let out = classifier.process(hand.as_ref());
        let cursor = match out.cursor {
            Some(c) => format!("({:6.1}, {:6.1})", c.x, c.y),
            None => "      —       ".to_string(),
        };
        let event = match out.event {
            Some(e) => format!("{:?}", e),
            None => String::new(),
        };
        println!("  {:20}  cursor {}  {}", label, cursor, event);
    }
    println!();
}
