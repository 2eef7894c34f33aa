// GPIO Port Writer - spiegelt das LED-Register auf GPIO-Pins
//
// Implementiert den LedPortWriter Trait aus ledport-core
// für die am Devkit verdrahteten LEDs.

use esp_hal::gpio::{Level, Output};
use ledport_core::{LedError, LedPortWriter};

use crate::config::LED_PIN_COUNT;

/// GPIO-backed Port Writer
///
/// Spiegelt die unteren Bits der Registermaske auf Push-Pull-Outputs.
/// Bits oberhalb von LED_PIN_COUNT haben keine verdrahtete LED und
/// werden ignoriert.
pub struct GpioPortWriter {
    pins: [Output<'static>; LED_PIN_COUNT],
}

impl GpioPortWriter {
    /// Erstellt einen Writer über den verdrahteten LED-Pins
    ///
    /// Reihenfolge im Array = Bit-Reihenfolge: pins[0] ist LED1 (Bit 0).
    pub fn new(pins: [Output<'static>; LED_PIN_COUNT]) -> Self {
        Self { pins }
    }
}

impl LedPortWriter for GpioPortWriter {
    fn write(&mut self, mask: u16) -> Result<(), LedError> {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            let level = if mask & (1 << bit) != 0 {
                Level::High
            } else {
                Level::Low
            };
            pin.set_level(level);
        }
        Ok(())
    }
}
