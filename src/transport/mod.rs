//! # Printer Transport Layer
//!
//! Delivers compiled receipts to hardware.
//!
//! ## Available Transports
//!
//! - [`device`]: device node writer (USB, serial, Bluetooth RFCOMM)

pub mod device;

pub use device::DeviceTransport;
