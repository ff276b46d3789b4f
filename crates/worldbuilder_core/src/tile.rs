//! Tile values and layer identifiers

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One of the three independent tile layers composited at a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Block,
    Liquid,
    Interactable,
}

/// The content of a single grid coordinate.
///
/// Each layer holds an index into that layer's tile-set, or `None` when the
/// layer is empty. In the world file a missing field means `None`; older files
/// may also write the sentinel `-1`, which is read as `None` as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    #[serde(
        default,
        deserialize_with = "deserialize_layer_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub block: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_layer_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub liquid: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_layer_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub interactable: Option<u32>,
}

impl Tile {
    /// The tile with no layer present
    pub const EMPTY: Self = Tile {
        block: None,
        liquid: None,
        interactable: None,
    };

    /// Create a tile from its three layer indices
    pub const fn new(block: Option<u32>, liquid: Option<u32>, interactable: Option<u32>) -> Self {
        Self {
            block,
            liquid,
            interactable,
        }
    }

    /// Create a tile with only a block
    pub const fn block(index: u32) -> Self {
        Self::new(Some(index), None, None)
    }

    /// Create a tile with only a liquid
    pub const fn liquid(index: u32) -> Self {
        Self::new(None, Some(index), None)
    }

    /// Create a tile with only an interactable
    pub const fn interactable(index: u32) -> Self {
        Self::new(None, None, Some(index))
    }

    /// True if no layer is present
    pub fn is_empty(&self) -> bool {
        self.block.is_none() && self.liquid.is_none() && self.interactable.is_none()
    }

    /// Get the index stored on a layer
    pub fn layer(&self, layer: Layer) -> Option<u32> {
        match layer {
            Layer::Block => self.block,
            Layer::Liquid => self.liquid,
            Layer::Interactable => self.interactable,
        }
    }

    /// Copy of this tile with one layer replaced
    pub fn with_layer(mut self, layer: Layer, index: Option<u32>) -> Self {
        match layer {
            Layer::Block => self.block = index,
            Layer::Liquid => self.liquid = index,
            Layer::Interactable => self.interactable = index,
        }
        self
    }

    /// Overlay `other` onto this tile: layers set in `other` win, the rest are kept
    pub fn overlaid_with(self, other: Tile) -> Self {
        Self {
            block: other.block.or(self.block),
            liquid: other.liquid.or(self.liquid),
            interactable: other.interactable.or(self.interactable),
        }
    }
}

/// Accepts integers, floats (`2.0`), `null` and negative sentinels.
/// Negatives and `null` become `None`; fractional values are truncated.
/// Indices past `u32::MAX` are rejected.
fn deserialize_layer_index<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        Some(v) if v.is_nan() => Err(D::Error::custom("layer index is not a number")),
        Some(v) if v < 0.0 => Ok(None),
        Some(v) if v.trunc() > f64::from(u32::MAX) => Err(D::Error::custom(format!(
            "layer index {} exceeds {}",
            v,
            u32::MAX
        ))),
        Some(v) => Ok(Some(v.trunc() as u32)),
        None => Ok(None),
    }
}
