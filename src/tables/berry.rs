//! `pokemon_berry` table

use super::types::{ColumnDefinition, TableDefinition};
use crate::types::{ColumnType, ResourceKind};

const COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::list("name", ColumnType::String, "The name for this resource."),
    ColumnDefinition::list("id", ColumnType::Int, "The identifier for this resource."),
    ColumnDefinition::detail(
        "growth_time",
        ColumnType::Int,
        "Time it takes the tree to grow one stage, in hours.",
    ),
    ColumnDefinition::detail(
        "max_harvest",
        ColumnType::Int,
        "The maximum number of these berries that can grow on one tree.",
    ),
    ColumnDefinition::detail(
        "natural_gift_power",
        ColumnType::Int,
        "The power of the move Natural Gift when used with this berry.",
    ),
    ColumnDefinition::detail("size", ColumnType::Int, "The size of this berry, in millimeters."),
    ColumnDefinition::detail(
        "smoothness",
        ColumnType::Int,
        "The smoothness of this berry, used in making Pokéblocks or Poffins.",
    ),
    ColumnDefinition::detail(
        "soil_dryness",
        ColumnType::Int,
        "The speed at which this berry dries out the soil as it grows.",
    ),
    ColumnDefinition::detail("firmness", ColumnType::Json, "The firmness of this berry."),
    ColumnDefinition::detail(
        "flavors",
        ColumnType::Json,
        "A list of references to each flavor a berry can have and the potency of each.",
    ),
    ColumnDefinition::detail(
        "item",
        ColumnType::Json,
        "Berries are actually items. This is a reference to the item specific data for this berry.",
    ),
    ColumnDefinition::detail(
        "natural_gift_type",
        ColumnType::Json,
        "The type inherited by Natural Gift when used with this berry.",
    ),
];

/// Berries are small fruits that can provide HP and status condition restoration
pub fn table() -> TableDefinition {
    TableDefinition {
        name: ResourceKind::Berry.table_name(),
        description: "Berries are small fruits that can provide HP and status condition restoration, stat enhancement, and even damage negation when eaten by Pokémon.",
        kind: ResourceKind::Berry,
        columns: COLUMNS,
    }
}
