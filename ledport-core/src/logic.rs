//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{LED_COUNT, LedIndex};

/// Rotiert den Lauflicht-Cursor zyklisch: LED1 → LED2 → … → LED16 → LED1
///
/// # Beispiele
///
/// ```
/// # use ledport_core::{LedIndex, next_led};
/// let led = LedIndex::new(1).unwrap();      // LED1
/// let led = next_led(led);                  // → LED2
/// assert_eq!(led.get(), 2);
/// assert_eq!(next_led(LedIndex::MAX), LedIndex::MIN);
/// ```
pub fn next_led(led: LedIndex) -> LedIndex {
    // led % 16 + 1 bildet 16 auf 1 ab, alle anderen auf den Nachfolger
    LedIndex::new(led.get() % LED_COUNT + 1).unwrap_or(LedIndex::MIN)
}
