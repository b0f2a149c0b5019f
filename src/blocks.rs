//! Reusable named block sub-schemas
//!
//! A [`BlockDef`] is a named field subtree selectable by slug. A `blocks`
//! field owns a [`BlockSet`]: the closed set of blocks an editor may insert
//! at that position. Selecting a slug at data-entry time activates exactly
//! that block's field subtree for validation; entries carry their slug in a
//! `blockType` key next to the block's field values.

use crate::field::{Field, Labels};
use serde::{Deserialize, Serialize};

/// Key under which a blocks entry stores its slug in the value document.
pub const BLOCK_TYPE_KEY: &str = "blockType";

/// A named, reusable field subschema selectable by slug.
///
/// # Examples
///
/// ```
/// use content_schema::blocks::BlockDef;
/// use content_schema::field::Field;
///
/// let block = BlockDef::new("command", vec![Field::text("command").required()])
///     .with_labels("Command Line", "Command Lines");
/// assert_eq!(block.slug, "command");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDef {
	/// Unique identifier within the owning block set
	pub slug: String,
	/// Ordered field subtree activated when this block is selected
	pub fields: Vec<Field>,
	/// Display labels for entries of this block
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub labels: Option<Labels>,
}

impl BlockDef {
	/// Create a block with the given slug and field subtree.
	pub fn new(slug: impl Into<String>, fields: Vec<Field>) -> Self {
		Self {
			slug: slug.into(),
			fields,
			labels: None,
		}
	}

	/// Set singular/plural display labels.
	pub fn with_labels(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
		self.labels = Some(Labels::new(singular, plural));
		self
	}
}

/// The closed set of blocks selectable inside a single `blocks` field.
///
/// Slug uniqueness is enforced when the owning schema is registered, not
/// here; a `BlockSet` is just the ordered collection plus slug lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockSet {
	blocks: Vec<BlockDef>,
}

impl BlockSet {
	/// Create a block set from an ordered list of blocks.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::blocks::{BlockDef, BlockSet};
	/// use content_schema::field::Field;
	///
	/// let set = BlockSet::new(vec![
	///     BlockDef::new("link", vec![Field::text("label")]),
	///     BlockDef::new("command", vec![Field::text("command")]),
	/// ]);
	/// assert!(set.get("command").is_some());
	/// assert!(set.get("video").is_none());
	/// ```
	pub fn new(blocks: Vec<BlockDef>) -> Self {
		Self { blocks }
	}

	/// Look up a block by slug.
	pub fn get(&self, slug: &str) -> Option<&BlockDef> {
		self.blocks.iter().find(|b| b.slug == slug)
	}

	/// All blocks, in declaration order.
	pub fn blocks(&self) -> &[BlockDef] {
		&self.blocks
	}

	/// Slugs in declaration order.
	pub fn slugs(&self) -> impl Iterator<Item = &str> {
		self.blocks.iter().map(|b| b.slug.as_str())
	}

	/// Number of blocks in the set.
	pub fn len(&self) -> usize {
		self.blocks.len()
	}

	/// Whether the set is empty.
	pub fn is_empty(&self) -> bool {
		self.blocks.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn sample_set() -> BlockSet {
		BlockSet::new(vec![
			BlockDef::new("link", vec![Field::text("label").required()])
				.with_labels("Link", "Links"),
			BlockDef::new("command", vec![Field::text("command").required()])
				.with_labels("Command Line", "Command Lines"),
		])
	}

	#[rstest]
	fn test_lookup_by_slug() {
		// Arrange
		let set = sample_set();

		// Act
		let block = set.get("command");

		// Assert
		assert!(block.is_some());
		assert_eq!(block.unwrap().fields.len(), 1);
	}

	#[rstest]
	fn test_lookup_unknown_slug() {
		let set = sample_set();

		assert!(set.get("video").is_none());
	}

	#[rstest]
	fn test_slugs_keep_declaration_order() {
		let set = sample_set();

		let slugs: Vec<&str> = set.slugs().collect();

		assert_eq!(slugs, vec!["link", "command"]);
	}

	#[rstest]
	fn test_labels() {
		let set = sample_set();

		let labels = set.get("command").unwrap().labels.as_ref().unwrap();

		assert_eq!(labels.singular, "Command Line");
		assert_eq!(labels.plural, "Command Lines");
	}
}
