//! Core Types für die LED-Port-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::traits::LedError;

/// Anzahl der LEDs in einem 16-Bit Port
pub const LED_COUNT: u8 = 16;

/// Registerwert bei dem alle LEDs leuchten
pub const ALL_LEDS_ON: u16 = 0xFFFF;

/// 1-basierter LED-Index innerhalb des 16-Bit Ports
///
/// Gültige Werte: 1 bis 16. Bit-Position im Register = Index - 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct LedIndex(u8);

impl LedIndex {
    /// Erste LED des Ports (Bit 0)
    pub const MIN: LedIndex = LedIndex(1);

    /// Letzte LED des Ports (Bit 15)
    pub const MAX: LedIndex = LedIndex(LED_COUNT);

    /// Erstellt einen validierten LED-Index
    ///
    /// Gibt `LedError::InvalidLed` zurück wenn der Wert außerhalb
    /// von 1..=16 liegt.
    pub const fn new(led: u8) -> Result<Self, LedError> {
        if led >= 1 && led <= LED_COUNT {
            Ok(Self(led))
        } else {
            Err(LedError::InvalidLed)
        }
    }

    /// Roher Indexwert (1..=16)
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Einzelbit-Maske der LED im Register
    pub const fn mask(self) -> u16 {
        1 << (self.0 - 1)
    }
}

impl core::convert::TryFrom<u8> for LedIndex {
    type Error = LedError;

    fn try_from(led: u8) -> Result<Self, Self::Error> {
        Self::new(led)
    }
}

impl From<LedIndex> for u8 {
    fn from(led: LedIndex) -> Self {
        led.get()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedIndex {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LED{}", self.0);
    }
}
