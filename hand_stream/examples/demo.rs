//! Demonstrates frame construction, validation, and the geometry helpers.

use hand_stream::{HandFrame, Landmark, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP};

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

fn main() {
    println!("\n=== hand_stream demo ===\n");

    // ── 1. A valid open hand ──────────────────────────────────────────────
    println!("1. Open hand, palm to camera");
    let frame = HandFrame::from_points(&open_hand()).unwrap();
    let thumb = frame.thumb_tip();
    println!(
        "   index up: {}   middle up: {}",
        frame.finger_up(INDEX_TIP, INDEX_PIP),
        frame.finger_up(MIDDLE_TIP, MIDDLE_PIP),
    );
    println!(
        "   thumb–index {:.3}  thumb–middle {:.3}  thumb–ring {:.3}",
        thumb.distance_to(&frame.index_tip()),
        thumb.distance_to(&frame.middle_tip()),
        thumb.distance_to(&frame.ring_tip()),
    );
    println!();

    // ── 2. Ingest validation rejects broken tracker output ────────────────
    println!("2. Ingest validation");
    let mut short = open_hand();
    short.pop();
    println!("   20 points  → {}", HandFrame::from_points(&short).unwrap_err());

    let mut wild = open_hand();
    wild[INDEX_TIP] = Landmark::new(3.2, -0.1);
    println!("   wild point → {}", HandFrame::from_points(&wild).unwrap_err());
    println!();
}
