//! Frontend glue for rs9x
//!
//! Ties the configuration, the display driver and the emulation-core
//! boundary together into the single-threaded frame and event loop.

mod runner;

pub use runner::Runner;
