//! `pokemon_pokemon` table

use super::types::{ColumnDefinition, TableDefinition};
use crate::types::{ColumnType, ResourceKind};

const COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::list("name", ColumnType::String, "The name for this resource."),
    ColumnDefinition::list("id", ColumnType::Int, "The identifier for this resource."),
    ColumnDefinition::detail(
        "base_experience",
        ColumnType::Int,
        "The base experience gained for defeating this Pokémon.",
    ),
    ColumnDefinition::detail(
        "height",
        ColumnType::Int,
        "The height of this Pokémon in decimetres.",
    ),
    ColumnDefinition::detail(
        "is_default",
        ColumnType::Bool,
        "Set for exactly one Pokémon used as the default for each species.",
    ),
    ColumnDefinition::detail(
        "order",
        ColumnType::Int,
        "Order for sorting. Almost national order, except families are grouped together.",
    ),
    ColumnDefinition::detail(
        "weight",
        ColumnType::Int,
        "The weight of this Pokémon in hectograms.",
    ),
    ColumnDefinition::detail(
        "abilities",
        ColumnType::Json,
        "A list of abilities this Pokémon could potentially have.",
    ),
    ColumnDefinition::detail(
        "forms",
        ColumnType::Json,
        "A list of forms this Pokémon can take on.",
    ),
    ColumnDefinition::detail(
        "game_indices",
        ColumnType::Json,
        "A list of game indices relevent to Pokémon item by generation.",
    ),
    ColumnDefinition::detail(
        "held_items",
        ColumnType::Json,
        "A list of items this Pokémon may be holding when encountered.",
    ),
    ColumnDefinition::detail(
        "location_area_encounters",
        ColumnType::String,
        "A link to a list of location areas, as well as encounter details pertaining to specific versions.",
    ),
    ColumnDefinition::detail(
        "moves",
        ColumnType::Json,
        "A list of moves along with learn methods and level details pertaining to specific version groups.",
    ),
    ColumnDefinition::detail(
        "species",
        ColumnType::Json,
        "The species this Pokémon belongs to.",
    ),
    ColumnDefinition::detail(
        "sprites",
        ColumnType::Json,
        "A set of sprites used to depict this Pokémon in the game.",
    ),
    ColumnDefinition::detail(
        "stats",
        ColumnType::Json,
        "A list of base stat values for this Pokémon.",
    ),
    ColumnDefinition::detail(
        "types",
        ColumnType::Json,
        "A list of details showing types this Pokémon has.",
    ),
];

/// Pokémon are the creatures that inhabit the world of the Pokémon games
pub fn table() -> TableDefinition {
    TableDefinition {
        name: ResourceKind::Pokemon.table_name(),
        description: "Pokémon are the creatures that inhabit the world of the Pokémon games.",
        kind: ResourceKind::Pokemon,
        columns: COLUMNS,
    }
}
