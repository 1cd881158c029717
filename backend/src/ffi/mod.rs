//! Python bindings (feature `pyo3`)
//!
//! Exposes [`RandomNumberDevice`](crate::RandomNumberDevice) as a Python
//! class so the same stream can be consumed from Python code.

pub mod device;
