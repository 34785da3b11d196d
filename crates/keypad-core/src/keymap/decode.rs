use tracing::debug;

use super::{KeyIndex, COLS, ROWS};

/// Encoding that resolved a raw scancode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeScheme {
    /// `raw = row * 10 + col + 1`, emitted by older controller firmware.
    Decimal,
    /// `row` in bits 4–6, `col` in bits 0–3.
    Bitfield,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedKey {
    pub key: KeyIndex,
    pub scheme: DecodeScheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("raw key 0x{raw:02X} is outside the {ROWS}x{COLS} grid (row={row} col={col})")]
    OutOfGrid { raw: u8, row: i32, col: i32 },
}

/// Map a raw scancode to a key index, trying decimal packing first.
pub fn decode(raw: u8) -> Result<DecodedKey, DecodeError> {
    let value = i32::from(raw);

    // Truncating division, as the controller's decimal codes are 1-based.
    let row = (value - 1) / 10;
    let mut col = (value - 1) % 10;
    if col < 0 {
        col += 10;
    }
    if let Some(key) = in_grid(row, col) {
        debug!(raw, index = key.get(), "decimal decode");
        return Ok(DecodedKey {
            key,
            scheme: DecodeScheme::Decimal,
        });
    }

    let row = (value >> 4) & 0x07;
    let col = value & 0x0F;
    match in_grid(row, col) {
        Some(key) => {
            debug!(raw, index = key.get(), "bitfield decode");
            Ok(DecodedKey {
                key,
                scheme: DecodeScheme::Bitfield,
            })
        }
        None => Err(DecodeError::OutOfGrid { raw, row, col }),
    }
}

fn in_grid(row: i32, col: i32) -> Option<KeyIndex> {
    let row = u8::try_from(row).ok()?;
    let col = u8::try_from(col).ok()?;
    if row < ROWS && col < COLS {
        KeyIndex::from_row_col(row, col)
    } else {
        None
    }
}
