//! Minimap encoder: condenses text into a small grid of block glyphs.
//!
//! The pipeline has three pure stages:
//!
//! 1. **Mask building** - text lines to a boolean occupancy grid
//! 2. **Rescaling** - shrink the grid to whole blocks with OR-aggregation
//! 3. **Encoding** - pack every block into a glyph from a [`SymbolTable`]
//!
//! # Symbol families
//!
//! Built-in tables are available via [`symbols::get`]:
//! - `Block` - half blocks, quadrants and sextants
//! - `Dot` - six- and eight-dot braille
//! - `Shade` - shade ramp for two-cell blocks

mod encode;
mod error;
mod mask;
mod options;
mod rescale;
mod shape;
pub mod symbols;

pub use encode::{encode, encode_mask, trim_trailing_blank};
pub use error::{ConfigurationError, EncodeError};
pub use mask::{is_blank, OccupancyMask, DEFAULT_TAB_WIDTH};
pub use options::EncodingOptions;
pub use rescale::{axis_map, rescale, target_len};
pub use shape::{BlockShape, MAX_BLOCK_BITS};
pub use symbols::{SymbolFamily, SymbolTable};
