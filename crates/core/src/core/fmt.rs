//! Number formatting for style values and text nodes.
//!
//! Float `format!` has had wasm-facing panics in some toolchain/browser
//! combinations, so these helpers scale and round into an `i64` and format
//! integers only.

/// Format `v` with at most `max_decimals` fractional digits, trailing zeros
/// trimmed (`33.3333`, `50`, `-0.8`). Non-finite values render as `0`.
pub fn fmt_trimmed(v: f64, max_decimals: u32) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let decimals = max_decimals.min(9);
    let scale_i64 = 10_i64.pow(decimals);
    let scaled = (v * scale_i64 as f64).round();
    if !scaled.is_finite() || scaled.abs() > (i64::MAX as f64) {
        return "0".to_string();
    }

    let scaled_i = scaled as i64;
    let abs_i = scaled_i.unsigned_abs();
    let int_part = abs_i / scale_i64 as u64;
    let mut frac_part = abs_i % scale_i64 as u64;

    let mut out = String::new();
    if scaled_i < 0 {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if frac_part == 0 {
        return out;
    }

    let mut width = decimals as usize;
    while frac_part % 10 == 0 {
        frac_part /= 10;
        width -= 1;
    }
    let frac_str = frac_part.to_string();
    out.push('.');
    for _ in 0..width.saturating_sub(frac_str.len()) {
        out.push('0');
    }
    out.push_str(&frac_str);
    out
}

/// CSS percentage, e.g. `"37.5%"`.
pub fn css_pct(pct: f64) -> String {
    let mut s = fmt_trimmed(pct, 4);
    s.push('%');
    s
}

/// CSS percentage rounded to a whole number, e.g. `"38%"`.
pub fn css_pct_whole(pct: f64) -> String {
    let mut s = fmt_trimmed(pct, 0);
    s.push('%');
    s
}
