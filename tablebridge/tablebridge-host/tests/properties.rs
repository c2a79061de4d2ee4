use proptest::prelude::*;
use tablebridge_core::{ElementType, MAX_LENGTH, SourceField, SourceType};
use tablebridge_host::{CHAR_MAX_LENGTH, HostType, VARCHAR_MAX_LENGTH, translate};

fn leaf_type() -> impl Strategy<Value = SourceType> {
    prop_oneof![
        prop::sample::select(vec![
            SourceType::Boolean,
            SourceType::TinyInt,
            SourceType::SmallInt,
            SourceType::Int,
            SourceType::BigInt,
            SourceType::Float,
            SourceType::Double,
            SourceType::Date,
        ]),
        any::<u32>().prop_map(SourceType::Char),
        any::<u32>().prop_map(SourceType::VarChar),
        (1u32..=MAX_LENGTH).prop_map(SourceType::Binary),
        (1u32..=MAX_LENGTH).prop_map(SourceType::VarBinary),
        (1u8..=38)
            .prop_flat_map(|precision| (Just(precision), 0..=precision))
            .prop_map(|(precision, scale)| SourceType::Decimal { precision, scale }),
        (0u8..=9).prop_map(SourceType::Time),
        (0u8..=9).prop_map(SourceType::Timestamp),
        (0u8..=9).prop_map(SourceType::LocalZonedTimestamp),
    ]
}

fn source_type() -> impl Strategy<Value = SourceType> {
    leaf_type().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), any::<bool>()).prop_map(|(t, nullable)| {
                SourceType::Array(Box::new(ElementType::new(t, nullable)))
            }),
            (inner.clone(), inner.clone()).prop_map(|(k, v)| SourceType::map(k, v)),
            inner.clone().prop_map(SourceType::multiset),
            prop::collection::vec(inner, 0..4).prop_map(|types| {
                SourceType::row(
                    types
                        .into_iter()
                        .enumerate()
                        .map(|(i, t)| SourceField::new(format!("f{i}"), t, true))
                        .collect::<Vec<_>>(),
                )
            }),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn supported_types_always_translate_identically(source in source_type()) {
        let first = translate(&source);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, translate(&source));
    }

    #[test]
    fn array_of_translatable_element(element in source_type()) {
        prop_assert_eq!(
            translate(&SourceType::array(element.clone())).unwrap(),
            HostType::array(translate(&element).unwrap())
        );
    }

    #[test]
    fn multiset_equals_map_with_int_count(element in source_type()) {
        prop_assert_eq!(
            translate(&SourceType::multiset(element.clone())),
            translate(&SourceType::map(element, SourceType::Int))
        );
    }

    #[test]
    fn string_lengths_never_exceed_host_limits(n in any::<u32>()) {
        prop_assert_eq!(
            translate(&SourceType::Char(n)).unwrap(),
            HostType::Char(n.min(CHAR_MAX_LENGTH))
        );
        prop_assert_eq!(
            translate(&SourceType::VarChar(n)).unwrap(),
            HostType::Varchar(n.min(VARCHAR_MAX_LENGTH))
        );
    }

    #[test]
    fn timestamp_precision_is_always_millis(p in 0u8..=9) {
        prop_assert_eq!(translate(&SourceType::Timestamp(p)).unwrap(), HostType::TIMESTAMP_MILLIS);
        prop_assert_eq!(translate(&SourceType::Time(p)).unwrap(), HostType::TIME_MILLIS);
        prop_assert_eq!(
            translate(&SourceType::LocalZonedTimestamp(p)).unwrap(),
            HostType::TIMESTAMP_TZ_MILLIS
        );
    }
}
