//! SUI amount formatting.

/// MIST per SUI (9 decimal places).
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// Format a MIST amount as SUI, trimming trailing zeros.
pub fn format_sui(mist: u64) -> String {
    let whole = mist / MIST_PER_SUI;
    let frac = mist % MIST_PER_SUI;
    if frac == 0 {
        return format!("{whole} SUI");
    }
    let frac = format!("{frac:09}");
    format!("{whole}.{} SUI", frac.trim_end_matches('0'))
}
