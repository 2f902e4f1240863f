//! Click vs long-press disambiguation for mouse-driven UI elements.
//!
//! A [`PressTracker`] owns at most one press session at a time. A session is
//! armed by a primary-button press over an interactive element and resolves
//! to exactly one outcome: activate (a tap), hold (a sustained press), or
//! nothing (cancelled by movement or by leaving the element). The hold timer
//! is realized the same way the rest of the event loop handles timeouts:
//! record the press `Instant`, then resolve expiry on each tick and at
//! release time.

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

/// Default sustained-press duration before a hold fires.
pub const DEFAULT_HOLD_MS: u64 = 500;

/// Movement slack, in terminal cells, before a press is cancelled.
/// Moving more than this far from the press origin on either axis means the
/// user is dragging, not pressing.
pub const MOVE_THRESHOLD_CELLS: u16 = 1;

/// A resolved press interaction on the element tagged `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press<T> {
    /// The element was tapped: pressed and released before the hold duration.
    Activate(T),
    /// The element was held past the hold duration without moving.
    Hold(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Press started, no outcome yet.
    Armed,
    /// The hold outcome already fired; the eventual release must not also
    /// activate.
    HoldFired,
    /// Cancelled by movement or by leaving the element; fires nothing.
    Cancelled,
}

#[derive(Debug)]
struct Session<T> {
    target: T,
    /// Bounds of the pressed element; leaving them cancels the session.
    rect: Rect,
    origin: Position,
    pressed_at: Instant,
    phase: Phase,
}

/// Tracks one press session at a time and resolves it to a [`Press`] outcome.
///
/// Each tracker value is fully independent; elements that need separate
/// sessions get separate trackers. All methods take an explicit `now` so the
/// timer logic is deterministic under test.
#[derive(Debug)]
pub struct PressTracker<T> {
    hold_duration: Duration,
    session: Option<Session<T>>,
}

impl<T: Copy> PressTracker<T> {
    pub fn new(hold_duration: Duration) -> Self {
        Self {
            hold_duration,
            session: None,
        }
    }

    /// Arm a new session for a primary-button press at `(col, row)` over the
    /// element `target` occupying `rect`. Any previous unresolved session is
    /// discarded without firing (a second press implies the first never got
    /// its release event).
    pub fn press(&mut self, target: T, rect: Rect, col: u16, row: u16, now: Instant) {
        self.session = Some(Session {
            target,
            rect,
            origin: Position::new(col, row),
            pressed_at: now,
            phase: Phase::Armed,
        });
    }

    /// Feed pointer movement. An armed session is cancelled if the pointer
    /// leaves the element or strays more than [`MOVE_THRESHOLD_CELLS`] from
    /// the press origin. A cancelled session fires neither outcome but is
    /// kept until release so the eventual button-up is swallowed.
    pub fn motion(&mut self, col: u16, row: u16) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase != Phase::Armed {
            return;
        }
        let pos = Position::new(col, row);
        let dx = col.abs_diff(session.origin.x);
        let dy = row.abs_diff(session.origin.y);
        if !session.rect.contains(pos) || dx.max(dy) > MOVE_THRESHOLD_CELLS {
            session.phase = Phase::Cancelled;
        }
    }

    /// Advance the hold timer. Returns `Press::Hold` exactly once per
    /// session, when an armed session has been held for the full duration.
    /// The session stays resident (suppressed) until release.
    pub fn tick(&mut self, now: Instant) -> Option<Press<T>> {
        let session = self.session.as_mut()?;
        if session.phase == Phase::Armed && now.duration_since(session.pressed_at) >= self.hold_duration
        {
            session.phase = Phase::HoldFired;
            return Some(Press::Hold(session.target));
        }
        None
    }

    /// Resolve the session on button release. An armed session activates,
    /// unless the hold duration has already elapsed — then the hold wins
    /// even if no tick observed it first. Hold-fired and cancelled sessions
    /// resolve silently.
    pub fn release(&mut self, now: Instant) -> Option<Press<T>> {
        let session = self.session.take()?;
        match session.phase {
            Phase::Armed => {
                if now.duration_since(session.pressed_at) >= self.hold_duration {
                    Some(Press::Hold(session.target))
                } else {
                    Some(Press::Activate(session.target))
                }
            }
            Phase::HoldFired | Phase::Cancelled => None,
        }
    }

    /// Teardown: drop any pending session without firing. Covers pointer
    /// leave, focus loss, resize, and element removal. No-op when the
    /// session has already resolved.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Whether an unresolved session exists (armed or suppressed).
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}
