//! Show runner: plays a [`Show`] through an [`AnimationEngine`] in a loop.

use crate::engine::{AnimationEngine, EngineError, PixelSink};
use crate::show::Show;
use crate::time::Delay;
use core::convert::Infallible;

/// Plays show entries in order, honoring repeat counts and trailing pauses.
///
/// The sequencer has no internal stop condition: [`Sequencer::run`] cycles
/// the show until the process is cancelled externally or a write fails.
/// Single-cycle playback is available through [`Sequencer::run_cycle`] for
/// hosts that drive the loop themselves.
///
/// # Type Parameters
/// * `S` - Pixel sink implementation
/// * `P` - Delay provider for frame pacing
/// * `M` - Maximum number of entries in the show
pub struct Sequencer<S: PixelSink, P: Delay, const M: usize> {
    engine: AnimationEngine<S, P>,
    show: Show<M>,
}

impl<S: PixelSink, P: Delay, const M: usize> Sequencer<S, P, M> {
    /// Creates a sequencer from an engine and a show.
    pub fn new(engine: AnimationEngine<S, P>, show: Show<M>) -> Self {
        Self { engine, show }
    }

    /// Plays every entry of the show once, in order.
    ///
    /// # Errors
    /// Propagates the first write failure; the cycle is abandoned at that
    /// point rather than retried.
    pub fn run_cycle(&mut self) -> Result<(), EngineError> {
        for idx in 0..self.show.len() {
            let entry = self.show.entries()[idx];
            for _ in 0..entry.repeats {
                self.engine.run_cue(&entry.cue)?;
            }
            if entry.delay_after_ms > 0 {
                self.engine.pause(entry.delay_after_ms);
            }
        }
        Ok(())
    }

    /// Cycles the show forever.
    ///
    /// Returns only if a write fails; normal termination is an external,
    /// whole-process concern.
    pub fn run(&mut self) -> Result<Infallible, EngineError> {
        loop {
            self.run_cycle()?;
        }
    }

    /// Returns the show being played.
    pub fn show(&self) -> &Show<M> {
        &self.show
    }

    /// Returns the engine driving the strip.
    pub fn engine(&self) -> &AnimationEngine<S, P> {
        &self.engine
    }

    /// Consumes the sequencer, handing back the engine and show.
    pub fn into_parts(self) -> (AnimationEngine<S, P>, Show<M>) {
        (self.engine, self.show)
    }
}
