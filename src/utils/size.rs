pub mod unit_multiplier {
    // order matters here, bytes have to be last because all other end with it
    pub const BYTE_UNITS: [&str; 4] = ["GB", "MB", "KB", "B"];
    pub const B: u64 = 1;
    pub const KB: u64 = 1024;
    pub const MB: u64 = 1024 * 1024;
    pub const GB: u64 = 1024 * 1024 * 1024;

    pub fn from_str(unit: &str) -> Option<u64> {
        match unit {
            "GB" => Some(GB),
            "MB" => Some(MB),
            "KB" => Some(KB),
            "B" => Some(B),
            _ => None,
        }
    }
}

/// Largest whole unit that fits, `10MB`, `512KB`...
pub fn user_friendly_size(size: u64) -> String {
    for unit in unit_multiplier::BYTE_UNITS {
        let Some(factor) = unit_multiplier::from_str(unit) else {
            continue;
        };

        if size < factor {
            continue;
        }

        return format!("{}{unit}", size / factor);
    }

    String::from("0B")
}

/// Size in kilobytes with two decimals, the way file pickers show it.
pub fn kilobytes(size: u64) -> String {
    format!("{:.2} KB", size as f64 / unit_multiplier::KB as f64)
}
