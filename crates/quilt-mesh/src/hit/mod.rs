//! Hit testing: mapping rect-local points back into sprite texture space and
//! sampling alpha against a threshold.
//!
//! The mesh builders stretch and tile the sprite's middle regions; a screen
//! point over the component therefore does not correspond 1:1 to a source
//! texel. [`map_sliced`] and [`map_tiled`] invert the border math so the
//! input collaborator can ask "which texel is under this point" and gate
//! events on its alpha via [`alpha_hit`].

mod alpha;
mod map;

pub use alpha::{AlphaSource, TextureReadError, alpha_hit};
pub use map::{map_sliced, map_tiled};
