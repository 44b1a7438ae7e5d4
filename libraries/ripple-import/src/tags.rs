//! Tag mapper - reads indexed metadata items from the decode session and
//! writes normalized key/value pairs into the host's tag store
//!
//! Two dialect behaviors are distinguished: APEv2 text values may hold
//! several NUL-separated sub-values, which are rewritten with a visible `\`
//! delimiter before storage; ID3v1 values cannot embed NULs and pass through
//! untouched.

use crate::{ImportError, Result};
use ripple_core::{DecodeSession, TagStore, TAG_YEAR};

/// Read all tag items from `session` into `store`
///
/// No-op when the session has no valid tag block or no items. Otherwise the
/// store is cleared first and every item is upserted in index order, so a
/// later item under the same final key overwrites an earlier one.
///
/// Key normalization: an item keyed "DATE" (case-insensitive) whose value is
/// exactly four characters parsing as an integer is stored under the
/// canonical "Year" key instead, unless the store already has a "Year"
/// entry. Anything else is stored verbatim, empty values included.
///
/// Returns the number of items written.
pub fn map_tags(session: &dyn DecodeSession, store: &mut dyn TagStore) -> Result<usize> {
    let dialect = session.tag_dialect();
    if dialect == ripple_core::TagDialect::None {
        return Ok(0);
    }

    let count = session.tag_item_count();
    if count == 0 {
        return Ok(0);
    }

    store.clear();

    // One growable scratch buffer for every key and value read; released
    // when this call returns, whichever path is taken
    let mut scratch: Vec<u8> = Vec::new();
    let mut written = 0;

    for index in 0..count {
        let key_len = session
            .tag_key_len(index)
            .ok_or_else(|| ImportError::Tag(format!("tag item {index} out of range")))?;
        if key_len == 0 {
            tracing::debug!(index, "skipping tag item with empty key");
            continue;
        }

        scratch.clear();
        scratch.resize(key_len, 0);
        let read = session.read_tag_key(index, &mut scratch);
        let key = String::from_utf8_lossy(&scratch[..read]).into_owned();

        let value_len = session.tag_value_len(key.as_bytes());
        scratch.clear();
        scratch.resize(value_len, 0);
        let read = session.read_tag_value(key.as_bytes(), &mut scratch);
        if dialect.is_multi_value() {
            // APEv2 text tags can have multiple NUL separated string values
            for byte in &mut scratch[..read] {
                if *byte == 0 {
                    *byte = b'\\';
                }
            }
        }
        let value = String::from_utf8_lossy(&scratch[..read]).into_owned();

        let key = normalize_key(key, &value, store);
        store.set(&key, &value);
        written += 1;
    }

    tracing::debug!(?dialect, written, "mapped tag block");
    Ok(written)
}

/// Apply the DATE -> Year remap rule
fn normalize_key(key: String, value: &str, store: &dyn TagStore) -> String {
    if key.eq_ignore_ascii_case("DATE")
        && !store.contains(TAG_YEAR)
        && value.chars().count() == 4
        && value.parse::<i64>().is_ok()
    {
        TAG_YEAR.to_string()
    } else {
        key
    }
}
