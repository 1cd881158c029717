//! Text dump format
//!
//! A state dump is nine `key:value` lines:
//!
//! ```text
//! v_state_u8:<N bytes, 2-digit uppercase hex>
//! v_x_mult:<L words, 16-digit uppercase hex>
//! v_a_mult:...
//! v_b_mult:...
//! v_x_xor:...
//! v_a_xor:...
//! v_b_xor:...
//! idx_values_mult:<decimal>
//! idx_values_xor:<decimal>
//! ```
//!
//! A run writes one dump after construction, then for every request a
//! `v_vec_u64:` or `v_vec_f64:` line followed by another dump.

use std::fmt::Write as _;
use std::io::Write;

use crate::core::PrngError;
use crate::request::{GenerationRequest, ValueKind};
use crate::rng::{GeneratorState, RandomNumberDevice};

const SEPARATOR: &str = ",";

/// Digits after the decimal point for f64 values
pub const F64_PRECISION: usize = 17;

pub fn join_u8_hex(values: &[u8]) -> String {
    join_with(values, |out, v| write!(out, "{:02X}", v))
}

pub fn join_u64_hex(values: &[u64]) -> String {
    join_with(values, |out, v| write!(out, "{:016X}", v))
}

pub fn join_f64(values: &[f64]) -> String {
    join_with(values, |out, v| write!(out, "{:.*}", F64_PRECISION, v))
}

fn join_with<T: Copy>(
    values: &[T],
    mut fmt_one: impl FnMut(&mut String, T) -> std::fmt::Result,
) -> String {
    let mut out = String::new();
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        // writing into a String never fails
        let _ = fmt_one(&mut out, v);
    }
    out
}

/// Render the nine dump lines for a buffer and generator state
pub fn format_state_dump(state_bytes: &[u8], state: &GeneratorState) -> String {
    let p = state.params();
    let mut out = String::new();
    // writing into a String never fails
    let _ = writeln!(out, "v_state_u8:{}", join_u8_hex(state_bytes));
    let _ = writeln!(out, "v_x_mult:{}", join_u64_hex(&p.mult_x));
    let _ = writeln!(out, "v_a_mult:{}", join_u64_hex(&p.mult_a));
    let _ = writeln!(out, "v_b_mult:{}", join_u64_hex(&p.mult_b));
    let _ = writeln!(out, "v_x_xor:{}", join_u64_hex(&p.xor_x));
    let _ = writeln!(out, "v_a_xor:{}", join_u64_hex(&p.xor_a));
    let _ = writeln!(out, "v_b_xor:{}", join_u64_hex(&p.xor_b));
    let _ = writeln!(out, "idx_values_mult:{}", state.idx_mult());
    let _ = writeln!(out, "idx_values_xor:{}", state.idx_xor());
    out
}

/// Run one request against the device and render its value line
pub fn format_request(device: &mut RandomNumberDevice, request: &GenerationRequest) -> String {
    match request.kind {
        ValueKind::U64 => {
            let values = device.generate_u64(request.count);
            format!("v_vec_u64:{}\n", join_u64_hex(&values))
        }
        ValueKind::F64 => {
            let values = device.generate_f64(request.count);
            format!("v_vec_f64:{}\n", join_f64(&values))
        }
    }
}

/// Render a full run: the initial dump, then each request and its dump
///
/// Requests are served strictly in order.
///
/// # Example
/// ```
/// use prng_core_rs::output::render_session;
/// use prng_core_rs::request::parse_requests;
/// use prng_core_rs::RandomNumberDevice;
///
/// let mut device = RandomNumberDevice::new(&[0x00], 64).unwrap();
/// let requests = parse_requests("u64:1").unwrap();
/// let text = render_session(&mut device, &requests);
/// assert_eq!(text.lines().count(), 9 + 1 + 9);
/// ```
pub fn render_session(device: &mut RandomNumberDevice, requests: &[GenerationRequest]) -> String {
    let mut out = device.state_dump();
    for request in requests {
        out.push_str(&format_request(device, request));
        out.push_str(&device.state_dump());
    }
    out
}

/// Same as [`render_session`], streamed into `writer`
pub fn write_session<W: Write>(
    device: &mut RandomNumberDevice,
    requests: &[GenerationRequest],
    writer: &mut W,
) -> Result<(), PrngError> {
    device.write_state_dump(writer)?;
    for request in requests {
        writer.write_all(format_request(device, request).as_bytes())?;
        device.write_state_dump(writer)?;
    }
    Ok(())
}
