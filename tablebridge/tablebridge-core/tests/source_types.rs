use tablebridge_core::{ElementType, MAX_LENGTH, SourceField, SourceType};

#[test]
fn source_field_new_sets_all_fields() {
    let field = SourceField::new("count", SourceType::BigInt, false);
    assert_eq!(field.name, "count");
    assert_eq!(field.element.data_type, SourceType::BigInt);
    assert!(!field.element.nullable);
    assert_eq!(field.description, None);
}

#[test]
fn composite_constructors_use_nullable_children() {
    match SourceType::map(SourceType::Int, SourceType::Double) {
        SourceType::Map { key, value } => {
            assert_eq!(*key, ElementType::nullable(SourceType::Int));
            assert_eq!(*value, ElementType::nullable(SourceType::Double));
        }
        other => panic!("expected map, got {other:?}"),
    }
    assert_eq!(
        SourceType::multiset(SourceType::Date),
        SourceType::Multiset(Box::new(ElementType::new(SourceType::Date, true)))
    );
}

#[test]
fn string_and_bytes_are_max_length_variable_types() {
    assert_eq!(SourceType::STRING, SourceType::VarChar(MAX_LENGTH));
    assert_eq!(SourceType::BYTES, SourceType::VarBinary(MAX_LENGTH));
}

#[test]
fn primitive_classification() {
    assert!(SourceType::Decimal { precision: 10, scale: 2 }.is_primitive());
    assert!(SourceType::Variant.is_primitive());
    assert!(!SourceType::array(SourceType::Int).is_primitive());
    assert!(!SourceType::multiset(SourceType::Int).is_primitive());
    assert!(!SourceType::row(vec![]).is_primitive());
}

#[test]
fn display_renders_canonical_type_strings() {
    let ty = SourceType::row(vec![
        SourceField::new("a`b", SourceType::Int, false),
        SourceField::new("ts", SourceType::LocalZonedTimestamp(3), true).with_description("it's"),
        SourceField::new(
            "m",
            SourceType::Map {
                key: Box::new(ElementType::not_null(SourceType::VarChar(5))),
                value: Box::new(ElementType::nullable(SourceType::array(SourceType::decimal(
                    10, 2,
                )))),
            },
            true,
        ),
    ]);

    assert_eq!(
        ty.to_string(),
        "ROW<`a``b` INT NOT NULL, `ts` TIMESTAMP(3) WITH LOCAL TIME ZONE 'it''s', \
         `m` MAP<VARCHAR(5) NOT NULL, ARRAY<DECIMAL(10, 2)>>>"
    );
}
