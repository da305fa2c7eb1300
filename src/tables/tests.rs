//! Tests for table definitions

use super::*;
use crate::api::{DetailRecord, NamedResource};
use crate::error::Error;
use crate::types::{ColumnType, ResourceKind};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashSet;
use test_case::test_case;

#[test]
fn test_all_tables_registered() {
    let names: Vec<&str> = all_tables().iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["pokemon_berry", "pokemon_pokemon", "pokemon_type"]);
}

#[test_case(ResourceKind::Berry ; "berry")]
#[test_case(ResourceKind::Pokemon ; "pokemon")]
#[test_case(ResourceKind::Type ; "type")]
fn test_table_shape(kind: ResourceKind) {
    let table = table_for(kind);
    assert_eq!(table.kind, kind);
    assert_eq!(table.name, kind.table_name());

    // name and id come from the listing
    assert_eq!(table.column("name").unwrap().source, ColumnSource::List);
    assert_eq!(table.column("id").unwrap().source, ColumnSource::List);
    assert_eq!(table.column("id").unwrap().column_type, ColumnType::Int);

    let unique: HashSet<&str> = table.columns.iter().map(|c| c.name).collect();
    assert_eq!(unique.len(), table.columns.len());
}

#[test_case(ResourceKind::Berry ; "berry")]
#[test_case(ResourceKind::Pokemon ; "pokemon")]
#[test_case(ResourceKind::Type ; "type")]
fn test_every_column_is_a_detail_field(kind: ResourceKind) {
    let record = DetailRecord::decode(kind, r#"{"id": 1, "name": "x"}"#).unwrap();
    let fields = record.to_object().unwrap();

    for column in table_for(kind).columns {
        assert!(
            fields.contains_key(column.name),
            "{} has no field for column {}",
            kind,
            column.name
        );
    }
}

#[test]
fn test_resolve_columns() {
    let table = table_for(ResourceKind::Type);

    let all = table.resolve_columns::<&str>(&[]).unwrap();
    assert_eq!(all.len(), table.columns.len());
    assert!(TableDefinition::needs_detail(&all));

    let listed = table.resolve_columns(&["name", "id"]).unwrap();
    assert!(!TableDefinition::needs_detail(&listed));

    let detailed = table.resolve_columns(&["name", "generation"]).unwrap();
    assert!(TableDefinition::needs_detail(&detailed));

    let err = table.resolve_columns(&["name", "colour"]).unwrap_err();
    match err {
        Error::ColumnNotFound { table, column } => {
            assert_eq!(table, "pokemon_type");
            assert_eq!(column, "colour");
        }
        other => panic!("Expected ColumnNotFound, got {other:?}"),
    }
}

#[test]
fn test_build_row_from_summary() {
    let table = table_for(ResourceKind::Type);
    let columns = table.resolve_columns(&["id", "name"]).unwrap();
    let summary = NamedResource::new("fire", "https://pokeapi.co/api/v2/type/10/");

    let row = TableDefinition::build_row(&columns, Some(&summary), None);

    assert_eq!(serde_json::Value::Object(row), json!({"id": 10, "name": "fire"}));
}

#[test]
fn test_build_row_from_detail() {
    let table = table_for(ResourceKind::Type);
    let columns = table.resolve_columns(&["name", "id", "generation"]).unwrap();
    let summary = NamedResource::new("fire", "https://pokeapi.co/api/v2/type/10/");
    let detail = DetailRecord::decode(
        ResourceKind::Type,
        r#"{"id": 10, "name": "fire", "generation": {"name": "generation-i"}}"#,
    )
    .unwrap()
    .to_object()
    .unwrap();

    let row = TableDefinition::build_row(&columns, Some(&summary), Some(&detail));

    assert_eq!(row.len(), 3);
    assert_eq!(
        serde_json::Value::Object(row),
        json!({"name": "fire", "id": 10, "generation": {"name": "generation-i"}})
    );
}

#[test]
fn test_build_row_summary_without_id() {
    let table = table_for(ResourceKind::Berry);
    let columns = table.resolve_columns(&["id", "growth_time"]).unwrap();
    let summary = NamedResource::new("cheri", "not-a-url");

    let row = TableDefinition::build_row(&columns, Some(&summary), None);
    assert!(row["id"].is_null());
    assert!(row["growth_time"].is_null());
}
