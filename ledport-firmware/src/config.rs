// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// LED-Port Konfiguration
// ============================================================================

/// Anzahl der am Devkit verdrahteten LED-Pins
///
/// Der Port ist 16 Bit breit, am Breadboard sind aber nur die unteren
/// 8 Bits mit LEDs bestückt. Höhere Bits existieren nur im Register.
pub const LED_PIN_COUNT: usize = 8;

/// Schrittintervall des Lauflichts in Millisekunden
pub const CHASER_INTERVAL_MS: u64 = 250;
