use tablebridge_core::{ElementType, SourceField, SourceType, parse_type};
use tablebridge_host::{
    CHAR_MAX_LENGTH, HostType, RowField, TranslateError, VARCHAR_MAX_LENGTH, translate,
    translate_schema,
};

#[test]
fn primitives_map_one_to_one() -> Result<(), TranslateError> {
    let cases = [
        (SourceType::Boolean, HostType::Boolean),
        (SourceType::TinyInt, HostType::TinyInt),
        (SourceType::SmallInt, HostType::SmallInt),
        (SourceType::Int, HostType::Integer),
        (SourceType::BigInt, HostType::BigInt),
        (SourceType::Float, HostType::Real),
        (SourceType::Double, HostType::Double),
        (SourceType::Date, HostType::Date),
    ];
    for (source, expected) in cases {
        assert_eq!(translate(&source)?, expected, "{source}");
    }
    Ok(())
}

#[test]
fn char_lengths_are_clamped_to_host_maximum() -> Result<(), TranslateError> {
    assert_eq!(translate(&SourceType::Char(10))?, HostType::Char(10));
    assert_eq!(
        translate(&SourceType::Char(CHAR_MAX_LENGTH + 1))?,
        HostType::Char(CHAR_MAX_LENGTH)
    );
    assert_eq!(
        translate(&SourceType::Char(u32::MAX))?,
        HostType::Char(CHAR_MAX_LENGTH)
    );
    Ok(())
}

#[test]
fn varchar_lengths_are_clamped_to_host_maximum() -> Result<(), TranslateError> {
    assert_eq!(translate(&SourceType::VarChar(5))?, HostType::Varchar(5));
    assert_eq!(
        translate(&SourceType::VarChar(VARCHAR_MAX_LENGTH + 1000))?,
        translate(&SourceType::VarChar(VARCHAR_MAX_LENGTH))?
    );
    assert_eq!(
        translate(&SourceType::STRING)?,
        HostType::Varchar(VARCHAR_MAX_LENGTH)
    );
    Ok(())
}

#[test]
fn binary_variants_collapse_to_varbinary() -> Result<(), TranslateError> {
    assert_eq!(translate(&SourceType::Binary(16))?, HostType::Varbinary);
    assert_eq!(translate(&SourceType::VarBinary(3))?, HostType::Varbinary);
    assert_eq!(translate(&SourceType::BYTES)?, HostType::Varbinary);
    Ok(())
}

#[test]
fn decimal_parameters_pass_through_unchecked() -> Result<(), TranslateError> {
    assert_eq!(
        translate(&SourceType::decimal(38, 18))?,
        HostType::Decimal {
            precision: 38,
            scale: 18
        }
    );
    // Out-of-range values are left for the host to reject.
    assert_eq!(
        translate(&SourceType::decimal(60, 70))?,
        HostType::Decimal {
            precision: 60,
            scale: 70
        }
    );
    Ok(())
}

#[test]
fn temporal_types_are_truncated_to_millis() -> Result<(), TranslateError> {
    assert_eq!(
        translate(&SourceType::Timestamp(9))?,
        translate(&SourceType::Timestamp(3))?
    );
    assert_eq!(translate(&SourceType::Timestamp(0))?, HostType::Timestamp(3));
    assert_eq!(translate(&SourceType::Time(9))?, HostType::TIME_MILLIS);
    assert_eq!(translate(&SourceType::Time(0))?, HostType::Time(3));
    assert_eq!(
        translate(&SourceType::LocalZonedTimestamp(6))?,
        HostType::TimestampWithTimeZone(3)
    );
    Ok(())
}

#[test]
fn multiset_is_translated_as_map_to_int_count() -> Result<(), TranslateError> {
    assert_eq!(
        translate(&SourceType::multiset(SourceType::Int))?,
        translate(&SourceType::map(SourceType::Int, SourceType::Int))?
    );
    assert_eq!(
        translate(&SourceType::multiset(SourceType::VarChar(5)))?,
        HostType::map(HostType::Varchar(5), HostType::Integer)
    );
    Ok(())
}

#[test]
fn row_fields_keep_names_and_order() -> Result<(), TranslateError> {
    let source = SourceType::row(vec![
        SourceField::new("a", SourceType::Int, true),
        SourceField::new("b", SourceType::VarChar(5), false),
    ]);
    assert_eq!(
        translate(&source)?,
        HostType::Row(vec![
            RowField::new("a", HostType::Integer),
            RowField::new("b", HostType::Varchar(5)),
        ])
    );
    Ok(())
}

#[test]
fn composites_equal_parent_of_translated_children() -> Result<(), TranslateError> {
    let element = SourceType::row(vec![
        SourceField::new("ts", SourceType::Timestamp(6), true),
        SourceField::new("tags", SourceType::multiset(SourceType::STRING), true),
    ]);
    let translated_element = translate(&element)?;

    assert_eq!(
        translate(&SourceType::array(element.clone()))?,
        HostType::array(translated_element.clone())
    );
    assert_eq!(
        translate(&SourceType::map(SourceType::Char(4), element.clone()))?,
        HostType::map(HostType::Char(4), translated_element.clone())
    );
    assert_eq!(
        translate(&SourceType::row(vec![SourceField::new("inner", element, true)]))?,
        HostType::row([RowField::new("inner", translated_element)])
    );
    Ok(())
}

#[test]
fn nullability_does_not_affect_translation() -> Result<(), TranslateError> {
    let nullable = SourceType::Array(Box::new(ElementType::nullable(SourceType::Int)));
    let not_null = SourceType::Array(Box::new(ElementType::not_null(SourceType::Int)));
    assert_eq!(translate(&nullable)?, translate(&not_null)?);
    Ok(())
}

#[test]
fn translating_twice_yields_equal_results() -> Result<(), Box<dyn std::error::Error>> {
    let source = parse_type(
        "ROW<id BIGINT NOT NULL, m MAP<STRING, ARRAY<DECIMAL(12, 2)>>, s MULTISET<TIME(6)>>",
    )?;
    assert_eq!(
        translate(&source.data_type)?,
        translate(&source.data_type)?
    );
    Ok(())
}

#[test]
fn unsupported_type_fails_without_result() {
    assert_eq!(
        translate(&SourceType::Variant),
        Err(TranslateError::UnsupportedType {
            type_name: "VARIANT".to_string()
        })
    );
}

#[test]
fn unsupported_type_nested_anywhere_fails_the_tree() {
    let nested = SourceType::map(
        SourceType::STRING,
        SourceType::row(vec![SourceField::new(
            "v",
            SourceType::array(SourceType::Variant),
            true,
        )]),
    );
    assert!(matches!(
        translate(&nested),
        Err(TranslateError::UnsupportedType { .. })
    ));
    assert!(translate(&SourceType::multiset(SourceType::Variant)).is_err());
}

#[test]
fn host_type_signatures() -> Result<(), TranslateError> {
    let source = SourceType::row(vec![
        SourceField::new("a", SourceType::Int, true),
        SourceField::new("b", SourceType::VarChar(5), true),
        SourceField::new("Mixed Case", SourceType::decimal(10, 2), true),
        SourceField::new("tz", SourceType::LocalZonedTimestamp(9), true),
        SourceField::new("m", SourceType::multiset(SourceType::Binary(2)), true),
    ]);
    assert_eq!(
        translate(&source)?.to_string(),
        "row(a integer, b varchar(5), \"Mixed Case\" decimal(10,2), \
         tz timestamp(3) with time zone, m map(varbinary, integer))"
    );
    Ok(())
}

#[test]
fn schema_translation_keeps_column_metadata() -> Result<(), TranslateError> {
    let fields = vec![
        SourceField::new("id", SourceType::BigInt, false).with_description("key"),
        SourceField::new("name", SourceType::VarChar(32), true),
    ];
    let columns = translate_schema(&fields)?;

    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].name, "id");
    assert_eq!(columns[0].host_type, HostType::BigInt);
    assert!(!columns[0].nullable);
    assert_eq!(columns[0].comment.as_deref(), Some("key"));
    assert_eq!(columns[1].name, "name");
    assert_eq!(columns[1].host_type, HostType::Varchar(32));
    assert!(columns[1].nullable);
    Ok(())
}

#[test]
fn schema_translation_aborts_on_first_unsupported_column() {
    let fields = vec![
        SourceField::new("ok", SourceType::Int, true),
        SourceField::new("doc", SourceType::Variant, true),
        SourceField::new("also_ok", SourceType::Date, true),
    ];
    let err = translate_schema(&fields).unwrap_err();
    assert_eq!(
        err,
        TranslateError::Column {
            column: "doc".to_string(),
            source: Box::new(TranslateError::UnsupportedType {
                type_name: "VARIANT".to_string()
            }),
        }
    );
    assert_eq!(err.to_string(), "column 'doc': Unsupported type: VARIANT");
}
