//! Content schema definitions
//!
//! The concrete field trees this crate ships: the hero section, the media
//! block, and the shared pieces they compose (links, livestream fields, the
//! theme select, the standard block wrapper). Everything here is plain data
//! built through the `Field` builders; registration and validation live in
//! the sibling modules.

mod hero;
mod link;
mod livestream;
mod media;

pub use hero::hero;
pub use link::{link, link_group};
pub use livestream::livestream_fields;
pub use media::media_block;

use crate::field::{Choice, Field};

/// The standard theme select shared by heroes and block wrappers.
pub fn theme_field() -> Field {
	Field::select(
		"theme",
		vec![Choice::new("Light", "light"), Choice::new("Dark", "dark")],
	)
	.with_label("Theme")
}

/// Wrap block content in a named group carrying the standard block fields
/// (currently the theme select) ahead of the block's own.
pub fn block_fields(name: impl Into<String>, fields: Vec<Field>) -> Field {
	let mut all = vec![theme_field()];
	all.extend(fields);
	Field::group(name, all)
}
