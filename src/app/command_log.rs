//! Begrenzter Verlauf der ausgeführten Commands (Diagnose).

use super::AppCommand;
use std::collections::VecDeque;

/// Ringpuffer der zuletzt ausgeführten Commands.
///
/// Hochfrequente Commands (Frame-Ticks, Hover, Drag-Bewegungen,
/// Viewport-Größe) werden nicht aufgezeichnet.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    const CAPACITY: usize = 500;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    fn is_noise(command: &AppCommand) -> bool {
        matches!(
            command,
            AppCommand::Tick { .. }
                | AppCommand::SetHoveredVertex { .. }
                | AppCommand::DragVertexTo { .. }
                | AppCommand::SetViewportSize { .. }
        )
    }

    /// Zeichnet einen ausgeführten Command auf; der älteste fällt heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if Self::is_noise(command) {
            return;
        }
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Zuletzt aufgezeichneter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;
    use std::time::Instant;

    #[test]
    fn high_frequency_commands_are_skipped() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::Tick {
            now: Instant::now(),
        });
        log.record(&AppCommand::DragVertexTo {
            point: GeoPoint::new(1.0, 2.0),
        });
        log.record(&AppCommand::SetHoveredVertex { vertex: None });
        log.record(&AppCommand::Undo);

        assert_eq!(log.entries.len(), 1);
        assert!(matches!(log.last(), Some(AppCommand::Undo)));
    }

    #[test]
    fn oldest_entry_falls_out_when_full() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::Undo);
        for _ in 1..CommandLog::CAPACITY {
            log.record(&AppCommand::Redo);
        }
        assert!(matches!(log.entries.front(), Some(AppCommand::Undo)));

        log.record(&AppCommand::ZoomIn);

        assert_eq!(log.entries.len(), CommandLog::CAPACITY);
        assert!(log.entries.iter().all(|c| !matches!(c, AppCommand::Undo)));
        assert!(matches!(log.last(), Some(AppCommand::ZoomIn)));
    }
}
