//! Integration tests for the Sequencer and the default show

mod common;
use common::*;

use palette::Srgb;
use strip_animator::pattern::{self, Pattern};
use strip_animator::{colors, AnimationEngine, Cue, Sequencer, Show};

#[test]
fn run_cycle_plays_entries_in_order_with_repeats_and_pauses() {
    let mut strip = MockStrip::new(2);
    let mut delay = MockDelay::new();
    let engine = AnimationEngine::new(&mut strip, &mut delay, 2);

    let show = Show::<4>::builder()
        .entry(
            Cue::Pixel {
                index: 0,
                color: colors::RED,
            },
            1,
            100,
        )
        .unwrap()
        .pattern(Pattern::Clear, 2)
        .unwrap()
        .build()
        .unwrap();

    let mut sequencer = Sequencer::new(engine, show);
    sequencer.run_cycle().unwrap();
    drop(sequencer);

    assert_eq!(
        strip.writes,
        vec![
            (0, colors::RED),
            (0, colors::BLACK),
            (1, colors::BLACK),
            (0, colors::BLACK),
            (1, colors::BLACK),
        ]
    );
    assert_eq!(delay.pauses_ms, vec![100]);
}

#[test]
fn zero_repeats_skips_the_entry() {
    let mut strip = MockStrip::new(2);
    let mut delay = MockDelay::new();
    let engine = AnimationEngine::new(&mut strip, &mut delay, 2);

    let show = Show::<4>::builder()
        .pattern(Pattern::SolidRed, 0)
        .unwrap()
        .pattern(Pattern::Clear, 1)
        .unwrap()
        .build()
        .unwrap();

    let mut sequencer = Sequencer::new(engine, show);
    sequencer.run_cycle().unwrap();
    drop(sequencer);

    // Only the clear ran.
    assert_eq!(
        strip.writes,
        vec![(0, colors::BLACK), (1, colors::BLACK)]
    );
}

#[test]
fn default_show_cycle_issues_stages_in_reference_order() {
    let n = 2;
    let mut strip = MockStrip::new(n);
    let mut delay = MockDelay::new();
    let engine = AnimationEngine::new(&mut strip, &mut delay, n);

    let mut sequencer = Sequencer::new(engine, Show::default_show());
    sequencer.run_cycle().unwrap();
    drop(sequencer);

    // Write counts per stage on a two-pixel strip:
    // startup pulse 1, four static patterns at 2 each, clear 2, pixel blink
    // 12, blink sequence 6, grow-and-shrink 4x4, ping-pong 4x2 (endpoints
    // only), barber pole 200, seesaw 4x4, wipe 4x24, final clear 2.
    assert_eq!(strip.writes.len(), 367);

    // Startup pulse.
    assert_eq!(strip.writes[0], (0, colors::RED));

    // The five static looks.
    assert_eq!(&strip.writes[1..3], &[(0, colors::RED), (1, colors::RED)][..]);
    assert_eq!(
        &strip.writes[3..5],
        &[(0, pattern::RAINBOW8[0]), (1, pattern::RAINBOW8[1])][..]
    );
    assert_eq!(&strip.writes[5..7], &[(0, colors::RED), (1, colors::BLUE)][..]);
    assert_eq!(
        &strip.writes[7..9],
        &[(0, Srgb::new(255, 0, 0)), (1, Srgb::new(0, 255, 0))][..]
    );
    assert_eq!(
        &strip.writes[9..11],
        &[(0, colors::BLACK), (1, colors::BLACK)][..]
    );

    // Stage openers for the animated stretch.
    assert_eq!(strip.writes[11], (0, colors::RED)); // pixel-0 blink on
    assert_eq!(strip.writes[23], (0, colors::DIM_WHITE)); // blink sequence
    assert_eq!(strip.writes[29], (0, colors::DIM_GREEN)); // grow and shrink
    assert_eq!(strip.writes[45], (0, colors::YELLOW)); // ping-pong endpoint
    assert_eq!(strip.writes[53], (0, pattern::barber_stripe(0, 0))); // barber pole
    assert_eq!(strip.writes[253], (0, colors::ORANGE)); // seesaw
    assert_eq!(strip.writes[269], (0, pattern::WIPE_PALETTE[0])); // wipe head

    // Final clear leaves the strip black.
    assert_eq!(
        &strip.writes[365..],
        &[(0, colors::BLACK), (1, colors::BLACK)][..]
    );
    assert!(strip.is_all_black());

    // The first five stages each hold their look for 3 s.
    assert_eq!(&delay.pauses_ms[..5], &[3000u64; 5][..]);
    assert_eq!(delay.pauses_ms.len(), 203);
}

#[test]
fn accessors_expose_show_and_engine() {
    let mut strip = MockStrip::new(2);
    let mut delay = MockDelay::new();
    let engine = AnimationEngine::new(&mut strip, &mut delay, 2);

    let sequencer = Sequencer::new(engine, Show::default_show());
    assert_eq!(sequencer.show().len(), strip_animator::DEFAULT_SHOW_LEN);
    assert_eq!(sequencer.engine().len(), 2);

    let (engine, show) = sequencer.into_parts();
    assert_eq!(engine.len(), 2);
    assert!(!show.is_empty());
}
