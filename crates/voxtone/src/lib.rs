#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use voxtone_grid as grid;

#[doc(inline)]
pub use voxtone_morph as morph;

#[doc(inline)]
pub use voxtone_place as place;
