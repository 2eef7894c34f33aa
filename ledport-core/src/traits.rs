//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Fehler-Typ für LED-Port-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedError {
    /// Operation auf einem Port ohne angehängtes Register
    UninitializedPort,
    /// LED-Index außerhalb von 1..=16
    InvalidLed,
    /// Hardware-Zugriff beim Spiegeln des Registers fehlgeschlagen
    WriteFailed,
}

impl core::fmt::Display for LedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedError::UninitializedPort => f.write_str("port is not initialized"),
            LedError::InvalidLed => f.write_str("led index out of range"),
            LedError::WriteFailed => f.write_str("hardware write failed"),
        }
    }
}

/// Trait für Port-Writer
///
/// Abstrahiert das Spiegeln des Registerinhalts auf echte LEDs.
/// Ermöglicht Mock-Implementierungen für Tests.
///
/// # Implementierungen
/// - **Production:** GpioPortWriter (ESP32 GPIO-Pins)
/// - **Testing:** MockPortWriter (in-memory Mock)
pub trait LedPortWriter: Send {
    /// Schreibt eine Registermaske auf die LED-Hardware
    ///
    /// Bit i-1 der Maske steuert LED i.
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, mask: u16) -> Result<(), LedError>;
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::UninitializedPort => defmt::write!(fmt, "UninitializedPort"),
            LedError::InvalidLed => defmt::write!(fmt, "InvalidLed"),
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}
