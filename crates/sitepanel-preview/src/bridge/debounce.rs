use std::time::{Duration, Instant};

/// Fires once after `delay` passes with no further [`touch`](Self::touch).
#[derive(Debug, Clone)]
pub struct ReloadDebouncer {
    delay: Duration,
    last_touch: Option<Instant>,
}

impl ReloadDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_touch: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm, or re-arm, the debouncer.
    pub fn touch(&mut self, now: Instant) {
        self.last_touch = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_touch.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.last_touch.map(|t| t + self.delay)
    }

    /// True, and disarmed, if the quiet period has elapsed at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(deadline) if now >= deadline => {
                self.last_touch = None;
                true
            }
            _ => false,
        }
    }

    /// Sleep until the pending reload is due, then disarm. Returns `false`
    /// immediately if nothing is pending.
    pub async fn wait_due(&mut self) -> bool {
        let Some(deadline) = self.deadline() else {
            return false;
        };
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        self.take_due(Instant::now())
    }
}
