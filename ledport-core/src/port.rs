//! LED-Port: Register-Wrapper mit Attach/Detach-Lebenszyklus

use crate::traits::LedError;
use crate::types::{ALL_LEDS_ON, LedIndex};

/// Bitmask-adressierbarer LED-Port über einem 16-Bit Register
///
/// Das Register gehört dem Aufrufer (z.B. eine memory-mapped Adresse oder
/// eine simulierte Speicherstelle). Der Port hält nur eine Referenz solange
/// er angehängt ist.
///
/// Invariante: solange angehängt ist Register-Bit i-1 genau dann 1,
/// wenn LED i an ist.
///
/// # Beispiele
///
/// ```
/// # use ledport_core::LedPort;
/// let mut register: u16 = 0xFFFF;
/// let mut port = LedPort::new();
/// port.init(&mut register);                     // alle LEDs aus
/// port.turn_on(3).unwrap();
/// assert_eq!(port.status_all().unwrap(), 0x0004);
/// ```
pub struct LedPort<'a> {
    /// Angehängtes Register, None = unattached
    register: Option<&'a mut u16>,
}

impl<'a> LedPort<'a> {
    /// Erstellt einen Port im unattached Zustand
    ///
    /// Vor `init()` schlägt jede Operation mit
    /// `LedError::UninitializedPort` fehl.
    pub const fn new() -> Self {
        Self { register: None }
    }

    /// Hängt den Port an das Register an und löscht alle LEDs
    ///
    /// Der vorherige Registerinhalt wird verworfen. Ein bereits
    /// angehängter Port wechselt auf das neue Register.
    pub fn init(&mut self, register: &'a mut u16) {
        *register = 0x0000;
        self.register = Some(register);
    }

    /// Löscht das Register und trennt den Port
    ///
    /// Ohne angehängtes Register ein No-op.
    pub fn deinit(&mut self) {
        if let Some(register) = self.register.take() {
            *register = 0x0000;
        }
    }

    /// Ob der Port aktuell ein Register hält
    pub const fn is_attached(&self) -> bool {
        self.register.is_some()
    }

    /// Schaltet eine einzelne LED an (Index 1..=16)
    pub fn turn_on(&mut self, led: u8) -> Result<(), LedError> {
        let register = self.attached_mut()?;
        *register |= LedIndex::new(led)?.mask();
        Ok(())
    }

    /// Schaltet eine einzelne LED aus (Index 1..=16)
    pub fn turn_off(&mut self, led: u8) -> Result<(), LedError> {
        let register = self.attached_mut()?;
        *register &= !LedIndex::new(led)?.mask();
        Ok(())
    }

    /// Fragt ab ob eine einzelne LED an ist (Index 1..=16)
    pub fn is_on(&self, led: u8) -> Result<bool, LedError> {
        let register = self.attached()?;
        Ok(*register & LedIndex::new(led)?.mask() != 0)
    }

    /// Schaltet alle LEDs des Ports an
    pub fn turn_on_all(&mut self) -> Result<(), LedError> {
        *self.attached_mut()? = ALL_LEDS_ON;
        Ok(())
    }

    /// Schaltet alle LEDs des Ports aus
    pub fn turn_off_all(&mut self) -> Result<(), LedError> {
        *self.attached_mut()? = 0x0000;
        Ok(())
    }

    /// Liefert die rohe Registermaske des Ports
    pub fn status_all(&self) -> Result<u16, LedError> {
        self.attached().copied()
    }

    // Der Attach-Guard kommt vor der Index-Validierung: ohne Register
    // meldet jede Operation UninitializedPort, auch bei ungültigem Index.
    fn attached(&self) -> Result<&u16, LedError> {
        self.register.as_deref().ok_or(LedError::UninitializedPort)
    }

    fn attached_mut(&mut self) -> Result<&mut u16, LedError> {
        self.register
            .as_deref_mut()
            .ok_or(LedError::UninitializedPort)
    }
}

impl Default for LedPort<'_> {
    fn default() -> Self {
        Self::new()
    }
}
