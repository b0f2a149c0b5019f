//! Error types for schema definition and document validation
//!
//! Two distinct taxonomies live here. [`SchemaError`] covers defects in the
//! schema definition itself; these are fatal at registration time and the
//! offending schema never becomes available. [`ValidationError`] covers
//! problems with a submitted value document; these are collected per field
//! path, block save, and leave the editing session intact.

use thiserror::Error;

/// Errors raised while registering a schema definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
	/// Two sibling fields share a name within the same scope
	#[error("duplicate sibling field name '{name}' at '{path}'")]
	DuplicateSiblingName { path: String, name: String },

	/// Two blocks share a slug within the same blocks field
	#[error("duplicate block slug '{slug}' in blocks field '{path}'")]
	DuplicateBlockSlug { path: String, slug: String },

	/// A condition references a field name that is neither a sibling nor
	/// an ancestor of the field it is attached to
	#[error("condition on '{path}' references unknown field '{referenced}'")]
	UnknownConditionField { path: String, referenced: String },

	/// A select or radio field declares an empty option list
	#[error("field '{path}' declares no options")]
	EmptyOptions { path: String },

	/// A schema with the same name is already registered
	#[error("schema '{0}' is already registered")]
	DuplicateSchemaName(String),
}

/// Result type for schema registration
pub type SchemaResult<T> = Result<T, SchemaError>;

/// A single validation failure on a submitted value document.
///
/// Collected into a [`ValidationReport`](crate::validate::ValidationReport)
/// keyed by field path; validation never aborts on the first failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	/// A required field has no value (missing, null, or empty string)
	#[error("missing required field")]
	MissingRequiredField,

	/// An array field holds fewer entries than its `minRows` constraint
	#[error("requires at least {min_rows} rows (found {actual})")]
	InsufficientRows { min_rows: usize, actual: usize },

	/// An upload or relationship field holds an id the resolver cannot find
	#[error("reference into '{collection}' cannot be resolved: {id}")]
	DanglingReference { collection: String, id: String },

	/// A blocks entry names a slug outside the field's block set
	#[error("unknown block slug '{slug}'")]
	UnknownBlockSlug { slug: String },
}
