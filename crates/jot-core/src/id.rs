//! Record identifiers
//!
//! An id is the creation time in milliseconds, base36 encoded, followed by a
//! five character random suffix. Ids sort roughly by creation time and are
//! short enough to type as a prefix.

use chrono::Utc;
use uuid::Uuid;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix
const SUFFIX_LEN: usize = 5;

/// Generate a new record id
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let random = Uuid::new_v4().as_u128() as u64;

    let mut id = to_base36(millis);
    let suffix = to_base36(random % 36u64.pow(SUFFIX_LEN as u32));
    // Pad small values so the suffix length is fixed
    id.extend(std::iter::repeat('0').take(SUFFIX_LEN - suffix.len()));
    id.push_str(&suffix);
    id
}

/// Generate an id that does not collide with any of `existing`
pub fn generate_unique_id<'a, I>(existing: I) -> String
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    loop {
        let id = generate_id();
        if !existing.clone().into_iter().any(|e| e == id) {
            return id;
        }
    }
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_295), "zz");
    }

    #[test]
    fn test_id_shape() {
        let id = generate_id();
        assert!(id.len() > SUFFIX_LEN);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_ids_are_unique_in_a_burst() {
        let ids: HashSet<String> = (0..100).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_generate_unique_id_avoids_existing() {
        let existing = vec![generate_id(), generate_id()];
        let id = generate_unique_id(existing.iter().map(String::as_str));
        assert!(!existing.contains(&id));
    }
}
