//! PyO3 wrapper for RandomNumberDevice

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::PrngError;
use crate::rng::RandomNumberDevice as RustDevice;

fn to_py_err(err: PrngError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for the Rust device
///
/// # Example (from Python)
///
/// ```python
/// from prng_core_rs import RandomNumberDevice
///
/// rnd = RandomNumberDevice(bytes([0x00]), 64)
/// values = rnd.generate_u64(10)
/// rnd.restore_state()          # back to the post-seed baseline
/// assert rnd.generate_u64(10) == values
/// ```
#[pyclass(name = "RandomNumberDevice")]
pub struct PyRandomNumberDevice {
    inner: RustDevice,
}

#[pymethods]
impl PyRandomNumberDevice {
    /// Create a device from seed bytes and a state size in bytes
    ///
    /// Raises ValueError if the size is not a multiple of 32 greater than 32,
    /// or the seed is empty.
    #[new]
    fn new(seed: Vec<u8>, length_u8: usize) -> PyResult<Self> {
        let inner = RustDevice::new(&seed, length_u8).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.next_f64()
    }

    fn generate_u64(&mut self, amount: usize) -> Vec<u64> {
        self.inner.generate_u64(amount)
    }

    fn generate_f64(&mut self, amount: usize) -> Vec<f64> {
        self.inner.generate_f64(amount)
    }

    fn save_state(&mut self) {
        self.inner.save_state();
    }

    fn restore_state(&mut self) {
        self.inner.restore_state();
    }

    /// Nine-line text dump of the current state
    fn state_dump(&self) -> String {
        self.inner.state_dump()
    }

    /// JSON checkpoint of the device
    fn checkpoint_json(&self) -> PyResult<String> {
        self.inner
            .checkpoint()
            .and_then(|cp| cp.to_json())
            .map_err(to_py_err)
    }

    /// Rebuild a device from a JSON checkpoint
    #[staticmethod]
    fn from_checkpoint_json(json: &str) -> PyResult<Self> {
        let checkpoint = crate::checkpoint::DeviceCheckpoint::from_json(json).map_err(to_py_err)?;
        let inner = RustDevice::from_checkpoint(checkpoint).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn length_u8(&self) -> usize {
        self.inner.length_u8()
    }

    #[getter]
    fn idx_values_mult(&self) -> usize {
        self.inner.current_state().idx_mult()
    }

    #[getter]
    fn idx_values_xor(&self) -> usize {
        self.inner.current_state().idx_xor()
    }
}
