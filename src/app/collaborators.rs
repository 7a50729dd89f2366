//! Schmale Schnittstellen zu externen Kollaborateuren (Karte, Ortung).

use crate::core::GeoPoint;
use thiserror::Error;

/// Steuerung der Karte durch den Editor.
pub trait MapSurface {
    /// Schaltet Verschieben, Zoomen und Scroll-Zoom der Karte.
    fn set_interaction_enabled(&mut self, pan: bool, zoom: bool, scroll: bool);

    /// Zentriert die Karte auf einen Punkt.
    fn pan_to(&mut self, point: GeoPoint);

    /// Setzt die Zoomstufe.
    fn set_zoom(&mut self, level: f64);
}

/// Parameter einer Standortabfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeolocationOptions {
    /// Zeitlimit in Millisekunden
    pub timeout_ms: u64,
    /// Hohe Genauigkeit anfordern
    pub high_accuracy: bool,
}

/// Fehler einer Standortabfrage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// Zugriff auf den Standort verweigert
    #[error("Standortzugriff verweigert")]
    PermissionDenied,
    /// Kein Ortungsdienst verfügbar
    #[error("Standort nicht verfügbar")]
    Unavailable,
    /// Zeitlimit überschritten
    #[error("Zeitüberschreitung bei der Standortabfrage")]
    Timeout,
}

/// Asynchrone Standortabfrage, per Polling abgefragt.
pub trait GeolocationProvider {
    /// Startet eine Abfrage. Eine laufende Abfrage wird ersetzt.
    fn request(&mut self, options: &GeolocationOptions);

    /// Liefert das Ergebnis, sobald es vorliegt (`None` = noch ausstehend).
    fn poll(&mut self) -> Option<Result<GeoPoint, GeolocationError>>;
}

/// Ortung über einen fest konfigurierten Standort.
///
/// Ohne Standort antwortet jede Abfrage mit [`GeolocationError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct FixedGeolocation {
    position: Option<GeoPoint>,
    pending: bool,
}

impl FixedGeolocation {
    /// Erstellt den Provider mit optionalem festem Standort.
    pub fn new(position: Option<GeoPoint>) -> Self {
        Self {
            position,
            pending: false,
        }
    }
}

impl GeolocationProvider for FixedGeolocation {
    fn request(&mut self, _options: &GeolocationOptions) {
        self.pending = true;
    }

    fn poll(&mut self) -> Option<Result<GeoPoint, GeolocationError>> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.position.ok_or(GeolocationError::Unavailable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: GeolocationOptions = GeolocationOptions {
        timeout_ms: 1000,
        high_accuracy: true,
    };

    #[test]
    fn fixed_position_answers_once_per_request() {
        let home = GeoPoint::new(51.0, 7.0);
        let mut provider = FixedGeolocation::new(Some(home));
        assert_eq!(provider.poll(), None);

        provider.request(&OPTIONS);
        assert_eq!(provider.poll(), Some(Ok(home)));
        assert_eq!(provider.poll(), None);
    }

    #[test]
    fn without_position_reports_unavailable() {
        let mut provider = FixedGeolocation::new(None);
        provider.request(&OPTIONS);
        assert_eq!(provider.poll(), Some(Err(GeolocationError::Unavailable)));
    }
}
