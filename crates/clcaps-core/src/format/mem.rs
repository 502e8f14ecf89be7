//! Byte counts with a binary-unit approximation.

const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// `"<bytes> (<approx><unit>)"`, the approximation printed with four
/// significant digits, trailing zeros dropped.
///
/// The value is divided by 1024 while it is at least 1024 and a larger unit
/// exists, so exactly 1024 bytes reads `1KiB`.
#[allow(clippy::cast_precision_loss)]
pub fn format_mem(bytes: u64) -> String {
    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{bytes} ({}{})", significant(scaled, 4), UNITS[unit])
}

/// Fixed-point rendering with `digits` significant digits, like `%.4g`
/// without the exponent form.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn significant(value: f64, digits: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    let text = format!("{value:.decimals$}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
