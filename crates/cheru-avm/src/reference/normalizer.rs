use std::collections::HashMap;
use std::sync::OnceLock;

static AMENITY_ALIASES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Lookup key for area names: trimmed, whitespace collapsed, lower-cased.
pub fn normalize_area_name(value: &str) -> String {
    collapse(value).to_lowercase()
}

/// Canonical amenity key, e.g. `"Solar Panels"` → `solar`, `"Backup Generator"` → `backup_generator`.
pub fn normalize_amenity_name(value: &str) -> String {
    let cleaned = collapse(&value.replace('_', " ")).to_lowercase();
    match amenity_aliases().get(cleaned.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => cleaned.replace(' ', "_"),
    }
}

fn collapse(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn amenity_aliases() -> &'static HashMap<&'static str, &'static str> {
    AMENITY_ALIASES.get_or_init(|| {
        const ALIASES: &[(&str, &str)] = &[
            ("solar panels", "solar"),
            ("solar panel", "solar"),
            ("backup generator", "backup_generator"),
            ("generator", "backup_generator"),
            ("elevator", "lift"),
            ("swimming pool", "pool"),
            ("car park", "parking"),
            ("staff quarters", "staff_quarters"),
            ("dsq", "staff_quarters"),
        ];
        ALIASES.iter().copied().collect()
    })
}
