//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific slice of the
//! monitor against mock adapters. All tests run on the host (x86_64) with
//! no real hardware required.

mod console_tests;
mod mock_hw;
mod monitor_tests;
