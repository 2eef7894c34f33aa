// LED Chaser Task - Lauflicht über den 16-Bit LED-Port
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use ledport_core::{LedIndex, LedPort, LedPortWriter, next_led};

use crate::config::CHASER_INTERVAL_MS;
use crate::hal::GpioPortWriter;

/// Chaser Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Lässt eine einzelne LED zyklisch über den Port wandern:
/// LED1 → LED2 → … → LED16 → LED1. Nach jedem Schritt wird die
/// aktuelle Registermaske über den Writer auf die Hardware gespiegelt.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `W: LedPortWriter` ermöglicht:
/// - Real Hardware (GpioPortWriter) im Production-Code
/// - Mock Implementation (MockPortWriter) in Tests
///
/// # Parameter
/// - `port`: angehängter LED-Port (hält das Register)
/// - `writer`: Port Writer (Hardware oder Mock)
pub async fn chaser_logic<W: LedPortWriter>(mut port: LedPort<'_>, mut writer: W) -> ! {
    // Lauflicht-Cursor: starte bei LED1
    let mut current = LedIndex::MIN;
    if let Err(e) = port.turn_on(current.get()) {
        error!("Failed to turn on {}: {}", current, e);
    }

    // Hauptschleife: Lauflicht endlos
    loop {
        // Registermaske auf die LED-Hardware spiegeln
        match port.status_all() {
            Ok(mask) => {
                info!("Port mask: {=u16:#x}", mask);
                if let Err(e) = writer.write(mask) {
                    error!("Failed to write to LED port: {}", e);
                }
            }
            Err(e) => error!("Failed to read port status: {}", e),
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(CHASER_INTERVAL_MS)).await;

        // Cursor weiterschalten (alte LED aus, Nachfolger an)
        let next = next_led(current);
        if let Err(e) = port
            .turn_off(current.get())
            .and_then(|()| port.turn_on(next.get()))
        {
            error!("Failed to advance chaser: {}", e);
        }
        current = next;
    }
}

/// LED Chaser Task - Embassy Task für parallele Ausführung
///
/// Dieser Task hängt den Port an das statische Register an und ruft dann
/// die testbare `chaser_logic()` Funktion auf.
///
/// # Parameter
/// - `register`: simuliertes 16-Bit Port-Register
/// - `writer`: GPIO-backed Port Writer
#[embassy_executor::task]
pub async fn led_chaser_task(register: &'static mut u16, writer: GpioPortWriter) {
    // Port anhängen (löscht alle LEDs, egal was vorher im Register stand)
    let mut port = LedPort::new();
    port.init(register);

    // Business Logic aufrufen (testbar!)
    chaser_logic(port, writer).await
}
