//! Zeitgesteuerte Aktionen, getrieben durch Frame-Ticks.

use std::time::{Duration, Instant};

/// Einmal-Timer, der bei jedem `schedule` neu startet (kein Aufsummieren).
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    /// Erstellt einen inaktiven Timer mit fester Verzögerung.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Startet den Timer ab `now` (neu).
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Verwirft einen ausstehenden Timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Gibt `true` zurück, solange der Timer aussteht.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Löst aus, wenn die Frist erreicht ist. Liefert `true` genau einmal.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut debounce = Debounce::new(Duration::from_millis(100));
        debounce.schedule(start);

        assert!(!debounce.fire_if_due(start + Duration::from_millis(99)));
        assert!(debounce.fire_if_due(start + Duration::from_millis(100)));
        assert!(!debounce.fire_if_due(start + Duration::from_millis(500)));
    }

    #[test]
    fn reschedule_resets_deadline() {
        let start = Instant::now();
        let mut debounce = Debounce::new(Duration::from_millis(100));
        debounce.schedule(start);
        debounce.schedule(start + Duration::from_millis(80));

        assert!(!debounce.fire_if_due(start + Duration::from_millis(150)));
        assert!(debounce.fire_if_due(start + Duration::from_millis(180)));
    }

    #[test]
    fn cancel_prevents_firing() {
        let start = Instant::now();
        let mut debounce = Debounce::new(Duration::from_millis(10));
        debounce.schedule(start);
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert!(!debounce.fire_if_due(start + Duration::from_secs(1)));
    }
}
