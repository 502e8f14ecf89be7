//! Value formatting helpers shared by the property renderers.

mod bitmask;
mod mem;

pub use bitmask::decode_bitmask;
pub use mem::format_mem;

/// `cl_bool` as `Yes` / `No`.
pub const fn bool_str(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Lowercase hexadecimal with a `0x` prefix.
pub fn hex_str(value: u64) -> String {
    format!("{value:#x}")
}
