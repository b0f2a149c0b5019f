//! Media block
//!
//! A reusable block for placing an uploaded asset into block-based content:
//! position, the asset itself, and an optional rich text caption, wrapped in
//! the standard block field group.

use crate::blocks::BlockDef;
use crate::field::{Choice, Field};
use crate::schemas::block_fields;

/// The `mediaBlock` block definition.
///
/// # Examples
///
/// ```
/// use content_schema::schemas::media_block;
///
/// let block = media_block();
/// assert_eq!(block.slug, "mediaBlock");
/// ```
pub fn media_block() -> BlockDef {
	BlockDef::new(
		"mediaBlock",
		vec![block_fields(
			"mediaBlockFields",
			vec![
				Field::select(
					"position",
					vec![Choice::new("Default", "default"), Choice::new("Wide", "wide")],
				)
				.with_default("default"),
				Field::upload("media", "media").required(),
				Field::rich_text("caption"),
			],
		)],
	)
}
