//! Cancelable geometry transitions.

use std::time::{Duration, Instant};

use typeahead_core::Rect;

use super::easing::{Easing, ease};

/// Progress of the current move.
#[derive(Debug, Clone, Copy)]
enum Progress {
    /// No target has ever been set.
    Unset,
    /// Sitting on the target, no move in flight.
    Settled,
    /// Moving since the given instant.
    Moving(Instant),
}

/// Animates the panel between geometries.
///
/// A transition always has exactly one target: calling
/// [`retarget`](Self::retarget) while a move is in flight supersedes it,
/// restarting from the currently interpolated rect toward the new target.
/// There is no queued chain of moves; the most recent target wins.
#[derive(Debug, Clone)]
pub struct GeometryTransition {
    /// Easing function applied to progress.
    easing: Easing,
    /// Duration of a full move.
    duration: Duration,
    /// Geometry the current move started from.
    from: Rect,
    /// Geometry the current move is heading to.
    to: Rect,
    /// Where the transition is in its current move.
    progress: Progress,
}

impl GeometryTransition {
    /// Create a transition with the given duration and easing.
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            easing,
            duration,
            from: Rect::ZERO,
            to: Rect::ZERO,
            progress: Progress::Unset,
        }
    }

    /// Get the transition duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Get the easing function.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The geometry the transition is heading to.
    #[inline]
    pub fn target(&self) -> Rect {
        self.to
    }

    /// Whether a move is still in flight.
    pub fn is_running(&self) -> bool {
        match self.progress {
            Progress::Moving(started) => started.elapsed() < self.duration,
            Progress::Unset | Progress::Settled => false,
        }
    }

    /// Aim the transition at a new target geometry.
    ///
    /// The very first target is applied instantly (there is nothing to
    /// animate from). Subsequent targets start a move from the currently
    /// interpolated geometry, canceling any move still in flight.
    pub fn retarget(&mut self, to: Rect) {
        match self.progress {
            Progress::Unset => {
                // First placement: snap, don't animate.
                self.from = to;
                self.to = to;
                self.progress = Progress::Settled;
            }
            Progress::Settled | Progress::Moving(_) => {
                if to == self.to {
                    return;
                }
                self.from = self.current();
                self.to = to;
                self.progress = Progress::Moving(Instant::now());
            }
        }
    }

    /// Settle the transition on its target immediately.
    pub fn finish(&mut self) {
        if !matches!(self.progress, Progress::Unset) {
            self.from = self.to;
            self.progress = Progress::Settled;
        }
    }

    /// The geometry at this instant, interpolated with the configured
    /// easing.
    ///
    /// Returns the target once the move has completed, or `Rect::ZERO` if
    /// no target has ever been set.
    pub fn current(&self) -> Rect {
        let started = match self.progress {
            Progress::Unset => return Rect::ZERO,
            Progress::Settled => return self.to,
            Progress::Moving(started) => started,
        };

        if self.duration.is_zero() {
            return self.to;
        }

        let t = started.elapsed().as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease(self.easing, t))
    }
}
