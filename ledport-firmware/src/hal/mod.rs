// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter Traits,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod port_writer;

pub use port_writer::GpioPortWriter;
