//! The background scheduling worker.
//!
//! Owns the double buffer and all timing state. Sleeps in a timed condvar
//! wait: an early wake means the shared state changed and the schedule must
//! be recomputed; a timeout means the next onset arrived and the active
//! buffer is emitted.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use tc_notes::EqualTemperament;
use tc_synth::{find_next, render_tone_into, RenderedTone, MIN_DELAY};

use crate::preview::SharedState;

/// Seconds the local position advances past a fired onset before rescanning,
/// so the scan does not immediately re-select the note that just played.
pub(crate) const RESCAN_ADVANCE: f64 = 0.2;

/// Minimum delay scheduled right after an onset fires.
///
/// Must cover at least RESCAN_ADVANCE of lookahead: the advance is not
/// guaranteed to clear the played note's duration, and without this floor
/// the same note could re-fire in a tight loop until the next update
/// corrects the position.
pub(crate) const RETRIGGER_COOLDOWN: f64 = 1.0;

enum Wake {
    /// Woken early: shared state changed (or a spurious wake, treated alike)
    Update,
    /// The timed wait expired: the pending note's onset arrived
    Onset,
}

pub(crate) struct Worker {
    shared: Arc<SharedState>,
    tones: Sender<RenderedTone>,
    scale: EqualTemperament,
    /// Double buffer; allocated once, content reassigned per render pass
    buffers: [Vec<u8>; 2],
    /// Index of the slot the renderer writes and the next emit sends
    active: usize,
    /// Worker's snapshot of the playback position
    position: f64,
    /// Seconds until the pending onset; always positive
    delay: f64,
    /// Onset of the note in the most recent render, None before the first
    last_onset: Option<f64>,
}

impl Worker {
    pub(crate) fn new(shared: Arc<SharedState>, tones: Sender<RenderedTone>) -> Self {
        Self {
            shared,
            tones,
            scale: EqualTemperament::default(),
            buffers: [Vec::new(), Vec::new()],
            active: 0,
            position: 0.0,
            delay: tc_synth::INDEFINITE_DELAY,
            last_onset: None,
        }
    }

    /// Thread runs here.
    pub(crate) fn run(mut self) {
        self.reschedule(true);

        loop {
            let wake = match self.wait() {
                Some(wake) => wake,
                None => return,
            };

            match wake {
                Wake::Update => self.reschedule(true),
                Wake::Onset => {
                    self.emit();
                    self.active = (self.active + 1) % 2;
                    self.position += RESCAN_ADVANCE;
                    self.reschedule(false);
                    self.delay = self.delay.max(RETRIGGER_COOLDOWN);
                }
            }
        }
    }

    /// Sleep until the pending delay expires or an update arrives.
    ///
    /// Returns None on shutdown. A tick that landed while the worker was
    /// rescheduling had no waiter to notify; the updated flag catches it
    /// here before the wait starts.
    fn wait(&self) -> Option<Wake> {
        let state = self.shared.state.lock().unwrap();
        if state.shutdown {
            return None;
        }
        if state.updated {
            return Some(Wake::Update);
        }

        let timeout = Duration::from_secs_f64(self.delay);
        let (state, result) = self.shared.wake.wait_timeout(state, timeout).unwrap();
        if state.shutdown {
            return None;
        }

        if result.timed_out() {
            Some(Wake::Onset)
        } else {
            Some(Wake::Update)
        }
    }

    /// Run a schedule pass: pick the next note, render its tone if the onset
    /// changed, and compute the corrected delay.
    ///
    /// With `refresh_position` the pass adopts the foreground's position and
    /// consumes the update flag; without it (right after an onset) the pass
    /// keeps the locally advanced position but still reads fresh notes.
    fn reschedule(&mut self, refresh_position: bool) {
        let started = Instant::now();

        let next = {
            let mut state = self.shared.state.lock().unwrap();
            if refresh_position {
                self.position = state.position;
                state.updated = false;
            }
            find_next(self.position, &state.notes, self.last_onset)
        };

        self.delay = next.delay;
        let Some(note) = next.note else {
            return;
        };

        if next.needs_render {
            self.last_onset = Some(note.onset);
            render_tone_into(
                &mut self.buffers[self.active],
                note.pitch_class(),
                note.duration,
                &self.scale,
            );
            // The sleep target reflects real elapsed time, not just the
            // position delta
            self.delay -= started.elapsed().as_secs_f64();
        }

        if self.delay <= MIN_DELAY {
            self.delay = MIN_DELAY;
        }
    }

    /// Hand the active buffer to the consumer as an owned copy.
    fn emit(&self) {
        let tone = RenderedTone {
            wav: self.buffers[self.active].clone(),
        };
        // The foreground may have dropped the receiver; nothing to do then
        let _ = self.tones.send(tone);
    }
}
