use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use voxtone_grid::Tone;

use crate::error::PlaceError;

/// One palette slot: a block identifier, or a set of equally weighted
/// alternatives to pick from at placement time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteEntry {
    /// A single block identifier.
    Single(String),
    /// Equally weighted alternatives.
    Choice(Vec<String>),
}

impl PaletteEntry {
    /// Resolves the entry to a concrete block identifier.
    ///
    /// # Errors
    ///
    /// Fails on an empty alternative set.
    pub fn pick<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> Result<&'a str, PlaceError> {
        match self {
            PaletteEntry::Single(id) => Ok(id),
            PaletteEntry::Choice(ids) => ids
                .choose(rng)
                .map(String::as_str)
                .ok_or(PlaceError::EmptyChoice),
        }
    }
}

fn single(id: &str) -> PaletteEntry {
    PaletteEntry::Single(id.to_string())
}

fn choice(ids: &[&str]) -> PaletteEntry {
    PaletteEntry::Choice(ids.iter().map(|id| id.to_string()).collect())
}

/// A tone-indexed block palette: exactly one entry per [`Tone`], index 0
/// being the background identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PaletteEntry>", into = "Vec<PaletteEntry>")]
pub struct Palette {
    entries: [PaletteEntry; Tone::COUNT],
}

impl Palette {
    /// Builds a palette from one entry per tone.
    pub fn new(entries: [PaletteEntry; Tone::COUNT]) -> Self {
        Self { entries }
    }

    /// The entry for a tone.
    pub fn entry(&self, tone: Tone) -> &PaletteEntry {
        &self.entries[tone.value() as usize]
    }

    /// Plain build: cobblestone fill, plank walls, log pillars.
    pub fn classic() -> Self {
        Self::new([
            single("minecraft:air"),
            single("minecraft:cobblestone"),
            single("minecraft:oak_planks"),
            single("minecraft:oak_log"),
        ])
    }

    /// Weathered stone with mossy variants.
    pub fn ruins() -> Self {
        Self::new([
            single("minecraft:air"),
            choice(&["minecraft:cobblestone", "minecraft:mossy_cobblestone"]),
            single("minecraft:spruce_log"),
            choice(&[
                "minecraft:cracked_stone_bricks",
                "minecraft:stone_bricks",
                "minecraft:chiseled_stone_bricks",
                "minecraft:mossy_stone_bricks",
            ]),
        ])
    }

    /// Sandstone family.
    pub fn desert_oasis() -> Self {
        Self::new([
            single("minecraft:air"),
            choice(&["minecraft:sandstone", "minecraft:cut_sandstone"]),
            choice(&["minecraft:cut_red_sandstone", "minecraft:red_sandstone"]),
            single("minecraft:chiseled_sandstone"),
        ])
    }

    /// Quartz and glass.
    pub fn modern() -> Self {
        Self::new([
            single("minecraft:air"),
            single("minecraft:quartz_block"),
            single("minecraft:glass"),
            single("minecraft:stone_bricks"),
        ])
    }
}

impl TryFrom<Vec<PaletteEntry>> for Palette {
    type Error = PlaceError;

    fn try_from(entries: Vec<PaletteEntry>) -> Result<Self, Self::Error> {
        let got = entries.len();
        let entries: [PaletteEntry; Tone::COUNT] =
            entries
                .try_into()
                .map_err(|_| PlaceError::InvalidPaletteSize {
                    got,
                    expected: Tone::COUNT,
                })?;
        Ok(Self { entries })
    }
}

impl From<Palette> for Vec<PaletteEntry> {
    fn from(palette: Palette) -> Self {
        palette.entries.into()
    }
}
