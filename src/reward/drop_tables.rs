use super::models::{Rarity, Variant};
use super::sampler::WeightTable;

// Rarity tables per score bucket. Entries are cumulative thresholds over a
// roll in [0,100), checked mythic -> legendary -> epic -> rare, with common
// as the fall-through floor.

const RARITY_95_PLUS: WeightTable<Rarity> = WeightTable::new(
    &[
        (Rarity::Mythic, 20.0),
        (Rarity::Legendary, 60.0),
        (Rarity::Epic, 100.0),
    ],
    Rarity::Common,
);

const RARITY_80_TO_94: WeightTable<Rarity> = WeightTable::new(
    &[
        (Rarity::Mythic, 5.0),
        (Rarity::Legendary, 30.0),
        (Rarity::Epic, 70.0),
        (Rarity::Rare, 100.0),
    ],
    Rarity::Common,
);

const RARITY_60_TO_79: WeightTable<Rarity> = WeightTable::new(
    &[
        (Rarity::Epic, 40.0),
        (Rarity::Rare, 80.0),
        (Rarity::Common, 100.0),
    ],
    Rarity::Common,
);

const RARITY_40_TO_59: WeightTable<Rarity> = WeightTable::new(
    &[
        (Rarity::Epic, 10.0),
        (Rarity::Rare, 50.0),
        (Rarity::Common, 100.0),
    ],
    Rarity::Common,
);

const RARITY_BELOW_40: WeightTable<Rarity> =
    WeightTable::new(&[(Rarity::Rare, 20.0), (Rarity::Common, 100.0)], Rarity::Common);

// Variant tables per rarity, same cumulative semantics with standard as the
// floor. Common cards are always standard.

const VARIANT_MYTHIC: WeightTable<Variant> = WeightTable::new(
    &[
        (Variant::Animated, 50.0),
        (Variant::Holographic, 80.0),
        (Variant::Shiny, 100.0),
    ],
    Variant::Standard,
);

const VARIANT_LEGENDARY: WeightTable<Variant> = WeightTable::new(
    &[
        (Variant::Animated, 20.0),
        (Variant::Holographic, 50.0),
        (Variant::Shiny, 80.0),
        (Variant::Standard, 100.0),
    ],
    Variant::Standard,
);

const VARIANT_EPIC: WeightTable<Variant> = WeightTable::new(
    &[(Variant::Holographic, 10.0), (Variant::Shiny, 40.0)],
    Variant::Standard,
);

const VARIANT_RARE: WeightTable<Variant> =
    WeightTable::new(&[(Variant::Shiny, 20.0)], Variant::Standard);

const VARIANT_COMMON: WeightTable<Variant> = WeightTable::new(&[], Variant::Standard);

/// Weight table for the score bucket this performance lands in
pub fn rarity_table_for_score(score: f64) -> &'static WeightTable<Rarity> {
    if score >= 95.0 {
        &RARITY_95_PLUS
    } else if score >= 80.0 {
        &RARITY_80_TO_94
    } else if score >= 60.0 {
        &RARITY_60_TO_79
    } else if score >= 40.0 {
        &RARITY_40_TO_59
    } else {
        &RARITY_BELOW_40
    }
}

pub fn variant_table_for_rarity(rarity: Rarity) -> &'static WeightTable<Variant> {
    match rarity {
        Rarity::Mythic => &VARIANT_MYTHIC,
        Rarity::Legendary => &VARIANT_LEGENDARY,
        Rarity::Epic => &VARIANT_EPIC,
        Rarity::Rare => &VARIANT_RARE,
        Rarity::Common => &VARIANT_COMMON,
    }
}

/// One weighted random draw keyed by score bucket
pub fn draw_rarity(score: f64) -> Rarity {
    rarity_table_for_score(score).draw()
}

/// One weighted random draw keyed by rarity
pub fn draw_variant(rarity: Rarity) -> Variant {
    variant_table_for_rarity(rarity).draw()
}
