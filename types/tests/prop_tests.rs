use proptest::prelude::*;

use souffl3_types::{ObjectId, PublicKey, SignatureScheme, SuiAddress};

proptest! {
    /// Display -> parse roundtrip for object ids.
    #[test]
    fn object_id_display_parse(bytes in prop::array::uniform20(0u8..)) {
        let id = ObjectId::new(bytes);
        let parsed: ObjectId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }

    /// Rendered addresses are always `0x` + 40 lowercase hex digits.
    #[test]
    fn address_rendering_is_fixed_width(bytes in prop::array::uniform20(0u8..)) {
        let s = SuiAddress::new(bytes).to_string();
        prop_assert_eq!(s.len(), 42);
        prop_assert!(s.starts_with("0x"));
        prop_assert!(s[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    /// Only flags 0, 1 and 2 name a signature scheme.
    #[test]
    fn scheme_flags(flag in any::<u8>()) {
        let parsed = SignatureScheme::try_from(flag);
        prop_assert_eq!(parsed.is_ok(), flag <= 2);
        if let Ok(scheme) = parsed {
            prop_assert_eq!(scheme.flag(), flag);
        }
    }

    /// Public keys accept exactly 32 bytes.
    #[test]
    fn public_key_length(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(PublicKey::from_bytes(&bytes).is_ok(), bytes.len() == 32);
    }
}
