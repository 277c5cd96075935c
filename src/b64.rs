//! File-oriented base64 encode/decode used by the `b64` binary.

use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Direction of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    /// Resolve the mode from the two CLI flags. Decode is the default;
    /// asking for both at once is an error.
    ///
    /// # Errors
    ///
    /// Returns an error when both `encode` and `decode` are set.
    pub fn from_flags(encode: bool, decode: bool) -> Result<Self> {
        if encode && decode {
            anyhow::bail!("Can not encode and decode simultaneously.");
        }
        if encode { Ok(Self::Encode) } else { Ok(Self::Decode) }
    }
}

/// Apply the transform to a byte buffer.
///
/// # Errors
///
/// Returns an error when decoding malformed input.
pub fn transform(mode: Mode, bytes: &[u8]) -> Result<Vec<u8>> {
    match mode {
        Mode::Encode => Ok(STANDARD.encode(bytes).into_bytes()),
        Mode::Decode => STANDARD.decode(bytes).context("input is not valid base64"),
    }
}

/// Read `input`, transform it, and write the result to `output`.
///
/// # Errors
///
/// Returns an error if either file access fails or decoding rejects the
/// input.
pub fn transform_file(mode: Mode, input: &Path, output: &Path) -> Result<()> {
    let bytes = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let result = transform(mode, &bytes)?;
    std::fs::write(output, result).with_context(|| format!("writing {}", output.display()))
}
