//! Conversion between logical (`snake_case`) and wire (`PascalCase`) names.
//!
//! Words are separated by `_` on the logical side and by an upper-case
//! initial on the wire side. A word is an ASCII lower-case letter followed
//! by lower-case letters or digits; names built from such words round-trip
//! in both directions. Wire names the server spells irregularly (`IsHD`)
//! are declared as serde renames on the field and pass through [`to_wire`]
//! unchanged.

/// Logical name to wire name: `parent_index_number` → `ParentIndexNumber`.
pub fn to_wire(logical: &str) -> String {
    let mut out = String::with_capacity(logical.len());
    for word in logical.split('_') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out
}

/// Wire name to logical name: `TotalRecordCount` → `total_record_count`.
///
/// camelCase input is accepted too (`versionStr` → `version_str`).
pub fn to_logical(wire: &str) -> String {
    let mut out = String::with_capacity(wire.len() + 4);
    for (i, c) in wire.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_to_wire() {
        assert_eq!(to_wire("start_index"), "StartIndex");
        assert_eq!(to_wire("recursive"), "Recursive");
        assert_eq!(to_wire("parent_index_number"), "ParentIndexNumber");
        assert_eq!(to_wire("min_date_last_saved_for_user"), "MinDateLastSavedForUser");
    }

    #[test]
    fn wire_to_logical() {
        assert_eq!(to_logical("TotalRecordCount"), "total_record_count");
        assert_eq!(to_logical("Id"), "id");
        assert_eq!(to_logical("versionStr"), "version_str");
    }

    #[test]
    fn explicit_wire_names_pass_through() {
        assert_eq!(to_wire("IsHD"), "IsHD");
        assert_eq!(to_wire("Is3D"), "Is3D");
        assert_eq!(to_wire("StartIndex"), "StartIndex");
    }

    #[test]
    fn digits_stay_inside_their_word() {
        assert_eq!(to_wire("is4k_filter"), "Is4kFilter");
        assert_eq!(to_logical("Is4kFilter"), "is4k_filter");
    }

    #[test]
    fn round_trips_both_ways() {
        for logical in ["id", "is_in_network", "has_pending_restart", "web_socket_port_number"] {
            assert_eq!(to_logical(&to_wire(logical)), logical);
        }
        for wire in ["Id", "IsInNetwork", "HasPendingRestart", "WebSocketPortNumber"] {
            assert_eq!(to_wire(&to_logical(wire)), wire);
        }
    }

    #[test]
    fn empty_name() {
        assert_eq!(to_wire(""), "");
        assert_eq!(to_logical(""), "");
    }
}
