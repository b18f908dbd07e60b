/// Fixed-interval frame pacing on a millisecond clock.
///
/// Stands in for a display's vertical sync: the runner asks how long to wait
/// (spending that time polling input) and then asks whether the next frame is
/// due. A runner that falls behind skips the missed slots instead of bursting
/// frames to catch up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval_ms: u64,
    next_due_ms: u64,
    started: bool,
}

impl FramePacer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due_ms: 0,
            started: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Milliseconds until the next frame is due (0 when due now).
    pub fn wait_ms(&self, now_ms: u64) -> u64 {
        if !self.started {
            return 0;
        }
        self.next_due_ms.saturating_sub(now_ms)
    }

    /// Decide whether to render a frame now, claiming the slot if so.
    pub fn frame_due(&mut self, now_ms: u64) -> bool {
        if !self.started {
            self.started = true;
            self.next_due_ms = now_ms + self.interval_ms;
            return true;
        }

        if now_ms < self.next_due_ms {
            return false;
        }

        let late_by = now_ms - self.next_due_ms;
        if late_by >= self.interval_ms {
            // Dropped at least one slot: realign to now.
            self.next_due_ms = now_ms + self.interval_ms;
        } else {
            self.next_due_ms += self.interval_ms;
        }
        true
    }
}
