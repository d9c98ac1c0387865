use std::collections::VecDeque;

use tincan::{
    Ack, AckSource, DiagnosticSink, Glyph, Lcd, NullDiagnostics, NullLcd, RoundReport,
    ScriptedSampler, Session, SessionConfig,
};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Clear,
    Show(usize, usize, Glyph),
    Print(usize, usize, String),
    Hold(u32),
}

#[derive(Default)]
struct RecordingLcd {
    events: Vec<Event>,
}

impl Lcd for RecordingLcd {
    fn clear(&mut self) {
        self.events.push(Event::Clear);
    }
    fn show(&mut self, row: usize, col: usize, glyph: Glyph) {
        self.events.push(Event::Show(row, col, glyph));
    }
    fn print(&mut self, row: usize, col: usize, text: &str) {
        self.events.push(Event::Print(row, col, text.to_string()));
    }
    fn hold(&mut self, ms: u32) {
        self.events.push(Event::Hold(ms));
    }
}

#[derive(Default)]
struct RecordingDiagnostics {
    lines: Vec<String>,
}

impl DiagnosticSink for RecordingDiagnostics {
    fn round_completed(&mut self, report: &RoundReport) {
        self.lines.push(report.to_string());
    }
}

struct ScriptedAck {
    answers: VecDeque<Ack>,
    waits: usize,
}

impl AckSource for ScriptedAck {
    fn wait_for_ack(&mut self) -> anyhow::Result<Ack> {
        self.waits += 1;
        Ok(self.answers.pop_front().unwrap_or(Ack::Closed))
    }
}

fn config(rounds: u32) -> SessionConfig {
    SessionConfig {
        rounds_per_batch: rounds,
        shot_hold_ms: 0,
        report_hold_ms: 0,
    }
}

// Clears a 1x2 grid in three shots: hit, repeat, hit.
const THREE_SHOTS: [(usize, usize); 3] = [(0, 0), (0, 0), (0, 1)];

#[test]
fn test_round_report_goes_to_display_and_diagnostics() {
    let mut session = Session::<_, _, 1, 2>::new(
        config(2),
        RecordingLcd::default(),
        RecordingDiagnostics::default(),
    )
    .unwrap();
    let mut sampler = ScriptedSampler::new(&THREE_SHOTS);

    let summary = session.run_batch(&mut sampler).unwrap();
    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.total_shots, 6);
    assert_eq!((summary.min_shots, summary.max_shots), (3, 3));
    assert_eq!(summary.mean_shots, 3.0);

    let (stats, lcd, diagnostics) = session.into_parts();
    assert_eq!(stats.total_rounds(), 2);
    assert_eq!(stats.total_shots(), 6);
    assert_eq!(
        diagnostics.lines,
        vec![
            "Shots = 3, Rounds = 1, Total = 3, Mean = 3",
            "Shots = 3, Rounds = 2, Total = 6, Mean = 3",
        ]
    );
    assert!(lcd
        .events
        .contains(&Event::Print(0, 0, "S:     3 R:   2".to_string())));
    assert!(lcd
        .events
        .contains(&Event::Print(1, 0, "Σ:     6 M:   3".to_string())));
}

#[test]
fn test_each_round_starts_with_all_cans_drawn() {
    let mut session =
        Session::<_, _, 1, 2>::new(config(1), RecordingLcd::default(), NullDiagnostics).unwrap();
    let mut sampler = ScriptedSampler::new(&THREE_SHOTS);
    session.play_round(&mut sampler).unwrap();

    let events = &session.lcd().events;
    assert_eq!(events[0], Event::Show(0, 0, Glyph::Can));
    assert_eq!(events[1], Event::Show(0, 1, Glyph::Can));
    assert_eq!(events[2], Event::Show(0, 0, Glyph::Ball(1)));
    assert_eq!(events.last(), Some(&Event::Hold(0)));
}

#[test]
fn test_stats_accumulate_across_batches_until_input_closes() {
    let mut session = Session::<_, _, 1, 2>::new(config(3), NullLcd, NullDiagnostics).unwrap();
    let mut sampler = ScriptedSampler::new(&THREE_SHOTS);
    let mut ack = ScriptedAck {
        answers: VecDeque::from([Ack::Restart, Ack::Restart, Ack::Closed]),
        waits: 0,
    };

    session.run(&mut sampler, &mut ack).unwrap();

    assert_eq!(ack.waits, 3);
    assert_eq!(session.stats().total_rounds(), 9);
    assert_eq!(session.stats().total_shots(), 27);
    assert_eq!(session.stats().mean_shots_per_round(), Some(3));
}

#[test]
fn test_restart_prompt_position() {
    let mut four_rows =
        Session::<_, _, 4, 2>::new(config(0), RecordingLcd::default(), NullDiagnostics).unwrap();
    let mut sampler = ScriptedSampler::new(&[(0, 0)]);
    let mut ack = ScriptedAck {
        answers: VecDeque::new(),
        waits: 0,
    };
    four_rows.run(&mut sampler, &mut ack).unwrap();
    assert_eq!(
        four_rows.lcd().events,
        vec![
            Event::Print(2, 0, "Push button to".to_string()),
            Event::Print(3, 0, "start new round".to_string()),
        ]
    );

    let mut two_rows =
        Session::<_, _, 2, 2>::new(config(0), RecordingLcd::default(), NullDiagnostics).unwrap();
    two_rows.run(&mut sampler, &mut ack).unwrap();
    assert_eq!(
        two_rows.lcd().events[0],
        Event::Print(0, 0, "Push button to".to_string())
    );
}

#[test]
fn test_empty_batch_summary() {
    let mut session = Session::<_, _, 2, 16>::new(config(0), NullLcd, NullDiagnostics).unwrap();
    let mut sampler = ScriptedSampler::new(&[(0, 0)]);
    let summary = session.run_batch(&mut sampler).unwrap();
    assert_eq!(summary.rounds, 0);
    assert_eq!(summary.total_shots, 0);
    assert_eq!((summary.min_shots, summary.max_shots), (0, 0));
    assert_eq!(summary.mean_shots, 0.0);
    assert_eq!(session.stats().mean_shots_per_round(), None);
}

#[test]
fn test_summary_serializes_to_json() {
    let mut session = Session::<_, _, 1, 2>::new(config(1), NullLcd, NullDiagnostics).unwrap();
    let mut sampler = ScriptedSampler::new(&THREE_SHOTS);
    let summary = session.run_batch(&mut sampler).unwrap();
    let v: serde_json::Value = serde_json::to_value(&summary).unwrap();
    assert_eq!(v["rows"], 1);
    assert_eq!(v["columns"], 2);
    assert_eq!(v["total_shots"], 3);
    assert_eq!(v["expected_shots"], 3.0);
}

#[test]
fn test_greeting_loads_ball_glyphs() {
    #[derive(Default)]
    struct GlyphSlots(Vec<u8>);
    impl Lcd for GlyphSlots {
        fn clear(&mut self) {}
        fn show(&mut self, _: usize, _: usize, _: Glyph) {}
        fn print(&mut self, _: usize, _: usize, _: &str) {}
        fn hold(&mut self, _: u32) {}
        fn create_char(&mut self, slot: u8, _bitmap: &[u8; 8]) {
            self.0.push(slot);
        }
    }

    let mut session =
        Session::<_, _, 2, 16>::new(config(1), GlyphSlots::default(), NullDiagnostics).unwrap();
    session.greet();
    assert_eq!(session.lcd().0, vec![0, 1, 2]);
}
