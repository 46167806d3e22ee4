//! Canonical hashing and seed derivation.
//!
//! - Catalogs are hashed as BLAKE3 over sorted-key, whitespace-free JSON.
//! - Each sound gets its own noise seed derived from the base seed and its
//!   filename, so adding or reordering sounds never changes another sound.

use crate::catalog::Catalog;
use crate::error::SpecError;

/// Computes the canonical BLAKE3 hash of a catalog.
///
/// ```text
/// catalog_hash = hex(BLAKE3(canonical_json(catalog)))
/// ```
///
/// # Example
/// ```
/// use sfxforge_spec::{Catalog, Edition};
/// use sfxforge_spec::hash::catalog_hash;
///
/// let hash = catalog_hash(&Catalog::builtin(Edition::Modern)).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn catalog_hash(catalog: &Catalog) -> Result<String, SpecError> {
    let value = catalog.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Canonicalizes a JSON value: object keys sorted, no whitespace, integral
/// floats printed without a fraction.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_number(n),
        serde_json::Value::String(s) => format_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| format!("{}:{}", format_string(k), canonicalize_json(v)))
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if !f.is_finite() => "null".to_string(),
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => format!("{}", f),
        None => "null".to_string(),
    }
}

fn format_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Derives the noise seed for one sound.
///
/// ```text
/// sound_seed = truncate_u32(BLAKE3(base_seed_le || filename_utf8))
/// ```
pub fn derive_sound_seed(base_seed: u32, filename: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + filename.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(filename.as_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Edition;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_hash_stability() {
        let a = catalog_hash(&Catalog::builtin(Edition::Modern)).unwrap();
        let b = catalog_hash(&Catalog::builtin(Edition::Modern)).unwrap();
        assert_eq!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));

        let retro = catalog_hash(&Catalog::builtin(Edition::Retro)).unwrap();
        assert_ne!(a, retro);
    }

    #[test]
    fn test_catalog_hash_tracks_edits() {
        let mut catalog = Catalog::builtin(Edition::Modern);
        let before = catalog_hash(&catalog).unwrap();
        catalog.sounds[0].duration = 0.2;
        assert_ne!(before, catalog_hash(&catalog).unwrap());
    }

    #[test]
    fn test_canonicalize_object_ordering() {
        let value = serde_json::json!({"z": 1, "a": [1.5, 2.0], "m": "x\ny"});
        assert_eq!(canonicalize_json(&value), r#"{"a":[1.5,2],"m":"x\ny","z":1}"#);
    }

    #[test]
    fn test_derive_sound_seed() {
        let click = derive_sound_seed(42, "click.mp3");
        assert_eq!(click, derive_sound_seed(42, "click.mp3"));
        assert_ne!(click, derive_sound_seed(42, "tick.mp3"));
        assert_ne!(click, derive_sound_seed(43, "click.mp3"));
    }
}
