//! Foreground surface: the update gateway and worker lifecycle.

use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tc_notes::NoteSequence;
use tc_synth::RenderedTone;

use crate::worker::Worker;

/// State shared between the foreground and the worker, guarded by one lock,
/// plus the condvar the worker sleeps on.
pub(crate) struct SharedState {
    pub(crate) state: Mutex<PlaybackState>,
    pub(crate) wake: Condvar,
}

pub(crate) struct PlaybackState {
    /// Latest reported playback position in seconds
    pub(crate) position: f64,
    /// Latest reported note list, sorted ascending by onset by the caller
    pub(crate) notes: NoteSequence,
    /// Set by tick, cleared by a position-refreshing schedule pass; the
    /// condvar wait predicate, so updates landing between waits are not lost
    pub(crate) updated: bool,
    pub(crate) shutdown: bool,
}

/// Cursor-following note preview engine.
///
/// The worker thread starts lazily on the first [`tick`](Self::tick) and runs
/// until [`stop`](Self::stop) or drop. Rendered tones arrive on the receiver
/// returned by [`new`](Self::new); the consumer owns each buffer outright.
pub struct NotePreview {
    shared: Arc<SharedState>,
    tones: Sender<RenderedTone>,
    worker: Option<JoinHandle<()>>,
}

impl NotePreview {
    /// Create the engine and the receiving end of the emission channel.
    pub fn new() -> (Self, Receiver<RenderedTone>) {
        let (tones, receiver) = unbounded();
        let shared = Arc::new(SharedState {
            state: Mutex::new(PlaybackState {
                position: 0.0,
                notes: NoteSequence::new(),
                updated: false,
                shutdown: false,
            }),
            wake: Condvar::new(),
        });

        let preview = Self {
            shared,
            tones,
            worker: None,
        };
        (preview, receiver)
    }

    /// Report the playback position and the active note list.
    ///
    /// Replaces the shared snapshot under the lock and wakes the worker,
    /// starting it on the first call. Never blocks beyond the lock; no
    /// rendering happens on this path.
    pub fn tick(&mut self, position: f64, notes: NoteSequence) {
        {
            let mut state = self.shared.state.lock().unwrap();
            state.position = position;
            state.notes = notes;
            state.updated = true;
        }

        if self.worker.is_some() {
            self.shared.wake.notify_one();
        } else {
            let worker = Worker::new(self.shared.clone(), self.tones.clone());
            self.worker = Some(std::thread::spawn(move || worker.run()));
        }
    }

    /// Request shutdown and wait for the worker to exit. Idempotent.
    ///
    /// The worker checks the flag immediately after any wake, so a pending
    /// onset is skipped rather than emitted.
    pub fn stop(&mut self) {
        {
            let mut state = self.shared.state.lock().unwrap();
            state.shutdown = true;
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for NotePreview {
    fn drop(&mut self) {
        self.stop();
    }
}
