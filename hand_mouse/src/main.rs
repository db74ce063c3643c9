//! hand_mouse — interactive entry point.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use hand_gesture::ClassifierConfig;
use hand_mouse::app::{run, AppConfig, SinkConfig, SourceConfig};
use hand_mouse::script::{clicks_script, demo_script, scroll_script, ScriptStep};
use hand_mouse::source::{Pacing, TrackerConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Hand Mouse — Gesture-Driven Pointer Classifier        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let cfg = match parse_args() {
        Ok(Some(cfg)) => cfg,
        Ok(None) => configure_interactively(),
        Err(msg) => {
            eprintln!("Error: {}", msg);
            print_usage();
            std::process::exit(2);
        }
    };

    if let Err(e) = run(cfg) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  hand_mouse replay <capture.jsonl> [--fps N | --unpaced] [options]");
    println!("  hand_mouse script [demo|clicks|scroll] [options]");
    println!();
    println!("Options:");
    println!("  --screen WxH   Target screen size (default 1920x1080)");
    println!("  --smooth N     Cursor smoothing factor ≥ 1 (default 1 = off)");
    println!("  --dropout N    Clear the scroll anchor after N lost frames");
    println!("  --motion       Include the cursor stream in JSON output");
    println!("  --log          Log events instead of printing JSON lines");
    println!("  --quiet        Discard all output (timing runs)");
}

/// Parse the command line; `Ok(None)` means no subcommand was given and the
/// interactive prompts take over.
fn parse_args() -> Result<Option<AppConfig>, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return Ok(None);
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        std::process::exit(0);
    }

    let mut classifier = ClassifierConfig::default();
    let mut sink = SinkConfig::Jsonl { motion: false };
    let mut motion = false;
    let mut pacing = Pacing::Recorded;
    let mut fps: Option<u32> = None;

    let mut it = args.iter().peekable();

    let source = match it.next().map(String::as_str) {
        Some("replay") => {
            let path = it
                .next()
                .ok_or_else(|| "replay needs a capture file".to_string())?;
            SourceConfig::Replay {
                path: PathBuf::from(path),
                pacing: Pacing::Recorded, // updated below once flags are read
            }
        }
        Some("script") => {
            let name = it
                .peek()
                .filter(|a| !a.starts_with("--"))
                .map(|a| a.to_string());
            if name.is_some() {
                it.next();
            }
            let steps = script_by_name(name.as_deref().unwrap_or("demo"))?;
            SourceConfig::Script { steps, fps: 0 }
        }
        Some(other) => return Err(format!("unknown command '{}'", other)),
        None => return Ok(None),
    };

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--fps" => {
                let n: u32 = next_value(&mut it, "--fps")?;
                fps = Some(n.max(1));
            }
            "--unpaced" => pacing = Pacing::Unpaced,
            "--screen" => {
                let wh: String = next_value(&mut it, "--screen")?;
                let (w, h) = wh
                    .split_once('x')
                    .ok_or_else(|| "--screen expects WxH, e.g. 1920x1080".to_string())?;
                classifier.screen_width = w
                    .parse()
                    .map_err(|_| format!("bad screen width '{}'", w))?;
                classifier.screen_height = h
                    .parse()
                    .map_err(|_| format!("bad screen height '{}'", h))?;
            }
            "--smooth" => classifier.cursor_smoothing = next_value(&mut it, "--smooth")?,
            "--dropout" => {
                classifier.anchor_dropout_frames = Some(next_value(&mut it, "--dropout")?)
            }
            "--motion" => motion = true,
            "--log" => sink = SinkConfig::Trace,
            "--quiet" => sink = SinkConfig::Null,
            other => return Err(format!("unknown option '{}'", other)),
        }
    }

    if let SinkConfig::Jsonl { .. } = sink {
        sink = SinkConfig::Jsonl { motion };
    }

    // Apply the pacing flags to whichever source was chosen.
    let source = match source {
        SourceConfig::Replay { path, .. } => {
            let pacing = match fps {
                Some(n) => Pacing::Fixed(n),
                None => pacing,
            };
            SourceConfig::Replay { path, pacing }
        }
        SourceConfig::Script { steps, .. } => SourceConfig::Script {
            steps,
            fps: fps.unwrap_or(0),
        },
    };

    Ok(Some(AppConfig {
        classifier,
        tracker: TrackerConfig::default(),
        source,
        sink,
    }))
}

fn next_value<'a, T: std::str::FromStr>(
    it: &mut std::iter::Peekable<std::slice::Iter<'a, String>>,
    flag: &str,
) -> Result<T, String> {
    it.next()
        .ok_or_else(|| format!("{} needs a value", flag))?
        .parse()
        .map_err(|_| format!("bad value for {}", flag))
}

fn script_by_name(name: &str) -> Result<Vec<ScriptStep>, String> {
    match name {
        "demo" => Ok(demo_script()),
        "clicks" => Ok(clicks_script()),
        "scroll" => Ok(scroll_script()),
        other => Err(format!(
            "unknown script '{}' (available: demo, clicks, scroll)",
            other
        )),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Interactive configuration
// ════════════════════════════════════════════════════════════════════════════

fn configure_interactively() -> AppConfig {
    println!("  Frame source:");
    println!("    1. Posture script (no hardware needed)");
    println!("    2. Recorded capture (JSON lines)");
    let source = match read_line("  Choice (1–2, default 1): ").trim() {
        "2" => {
            let path = read_line("  Capture path: ").trim().to_string();
            SourceConfig::Replay {
                path: PathBuf::from(path),
                pacing: Pacing::Recorded,
            }
        }
        _ => {
            println!("  Script: 1=demo  2=clicks  3=scroll");
            let steps = match read_line("  Choice (default 1): ").trim() {
                "2" => clicks_script(),
                "3" => scroll_script(),
                _ => demo_script(),
            };
            SourceConfig::Script { steps, fps: 30 }
        }
    };

    let mut classifier = ClassifierConfig::default();
    let screen = read_line("  Screen WxH (default 1920x1080): ");
    if let Some((w, h)) = screen.trim().split_once('x') {
        if let (Ok(w), Ok(h)) = (w.parse(), h.parse()) {
            classifier.screen_width = w;
            classifier.screen_height = h;
        }
    }
    classifier.cursor_smoothing = read_line("  Cursor smoothing ≥ 1 (default 1 = off): ")
        .trim()
        .parse()
        .unwrap_or(1.0);

    println!();
    println!("  Events print as JSON lines; logs go to stderr.");
    println!();

    AppConfig {
        classifier,
        tracker: TrackerConfig::default(),
        source,
        sink: SinkConfig::Jsonl { motion: false },
    }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
