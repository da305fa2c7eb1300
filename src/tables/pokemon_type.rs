//! `pokemon_type` table

use super::types::{ColumnDefinition, TableDefinition};
use crate::types::{ColumnType, ResourceKind};

const COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::list("name", ColumnType::String, "The name for this resource."),
    ColumnDefinition::list("id", ColumnType::Int, "The identifier for this resource."),
    ColumnDefinition::detail(
        "damage_relations",
        ColumnType::Json,
        "A detail of how effective this type is toward others and vice versa.",
    ),
    ColumnDefinition::detail(
        "past_damage_relations",
        ColumnType::Json,
        "A list of details of how effective this type was toward others and vice versa in previous generations.",
    ),
    ColumnDefinition::detail(
        "game_indices",
        ColumnType::Json,
        "A list of game indices relevent to this item by generation.",
    ),
    ColumnDefinition::detail(
        "generation",
        ColumnType::Json,
        "The generation this type was introduced in.",
    ),
    ColumnDefinition::detail(
        "move_damage_class",
        ColumnType::Json,
        "The class of damage inflicted by this type.",
    ),
    ColumnDefinition::detail(
        "names",
        ColumnType::Json,
        "The name of this resource listed in different languages.",
    ),
    ColumnDefinition::detail(
        "pokemon",
        ColumnType::Json,
        "A list of details of Pokémon that have this type.",
    ),
    ColumnDefinition::detail("moves", ColumnType::Json, "A list of moves that have this type."),
];

/// Types are properties for Pokémon and their moves
pub fn table() -> TableDefinition {
    TableDefinition {
        name: ResourceKind::Type.table_name(),
        description: "Types are properties for Pokémon and their moves. Each type has three properties: which types of Pokémon it is super effective against, which types of Pokémon it is not very effective against, and which types of Pokémon it is completely ineffective against.",
        kind: ResourceKind::Type,
        columns: COLUMNS,
    }
}
