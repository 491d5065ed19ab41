//! Serial console adapter.
//!
//! Implements [`ConsolePort`] over the fixed-baud UART0 console.
//!
//! Writes are fire-and-forget: bytes go to the driver's TX FIFO and any
//! transport failure is swallowed here, never surfaced to the domain. The
//! monitor has no backpressure concept — a reply that cannot be sent is a
//! reply that is lost.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: polls the UART0 RX FIFO via hw_init (non-blocking).
//! On host/test: a reader thread drains stdin into a channel so
//! `poll_byte` stays non-blocking; output goes to stdout.

use crate::app::ports::ConsolePort;

#[cfg(not(target_os = "espidf"))]
use std::io::{Read, Write};
#[cfg(not(target_os = "espidf"))]
use std::sync::mpsc::{self, Receiver, TryRecvError};

pub struct SerialConsole {
    #[cfg(not(target_os = "espidf"))]
    rx: Receiver<u8>,
}

impl SerialConsole {
    #[cfg(target_os = "espidf")]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        // Detached reader: blocks on stdin so the monitor loop never has
        // to. Exits when stdin closes or the receiver is dropped.
        std::thread::spawn(move || {
            let mut byte = [0u8; 1];
            let mut stdin = std::io::stdin();
            while let Ok(1) = stdin.read(&mut byte) {
                if tx.send(byte[0]).is_err() {
                    break;
                }
            }
        });
        Self { rx }
    }
}

impl Default for SerialConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for SerialConsole {
    #[cfg(target_os = "espidf")]
    fn poll_byte(&mut self) -> Option<u8> {
        crate::drivers::hw_init::uart_read_byte()
    }

    #[cfg(not(target_os = "espidf"))]
    fn poll_byte(&mut self) -> Option<u8> {
        match self.rx.try_recv() {
            Ok(byte) => Some(byte),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    #[cfg(target_os = "espidf")]
    fn write_str(&mut self, s: &str) {
        crate::drivers::hw_init::uart_write(s.as_bytes());
    }

    #[cfg(not(target_os = "espidf"))]
    fn write_str(&mut self, s: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(s.as_bytes());
        let _ = stdout.flush();
    }
}
