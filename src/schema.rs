//! Schema registration
//!
//! [`Schema::register`] turns an ordered list of top-level fields into an
//! immutable, validated schema. All definition-time invariants are enforced
//! here, fatally: duplicate sibling names, duplicate block slugs, empty
//! option lists, and conditions referencing names that are neither siblings
//! nor ancestors. A [`SchemaRegistry`] maps unique schema names to their
//! registered trees for the host framework to consume.
//!
//! Registration is the only constructor; a `Schema` in hand is always a
//! valid tree and is never mutated afterwards.

use crate::condition::Scope;
use crate::error::{SchemaError, SchemaResult};
use crate::field::{Field, FieldKind, data_fields};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// An immutable, validated field schema tree.
///
/// # Examples
///
/// ```
/// use content_schema::field::Field;
/// use content_schema::schema::Schema;
///
/// let schema = Schema::register(
///     "posts",
///     vec![
///         Field::text("title").required(),
///         Field::rich_text("body"),
///     ],
/// )
/// .unwrap();
/// assert_eq!(schema.name(), "posts");
/// assert!(schema.field("title").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
	name: String,
	fields: Vec<Field>,
}

impl Schema {
	/// Validate and register a field tree under the given name.
	///
	/// Returns a [`SchemaError`] on the first definition-time defect found.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::error::SchemaError;
	/// use content_schema::field::Field;
	/// use content_schema::schema::Schema;
	///
	/// let err = Schema::register(
	///     "posts",
	///     vec![Field::text("title"), Field::text("title")],
	/// )
	/// .unwrap_err();
	/// assert!(matches!(err, SchemaError::DuplicateSiblingName { .. }));
	/// ```
	pub fn register(name: impl Into<String>, fields: Vec<Field>) -> SchemaResult<Self> {
		let name = name.into();
		check_fields(&name, &fields, &[])?;
		debug!(schema = %name, fields = fields.len(), "registered content schema");
		Ok(Self { name, fields })
	}

	/// Schema name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Top-level fields in declaration order.
	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	/// Look up a top-level data field by name, seeing through layout-only
	/// collapsible wrappers.
	pub fn field(&self, name: &str) -> Option<&Field> {
		data_fields(&self.fields).into_iter().find(|f| f.name == name)
	}

	/// The top-level data fields currently visible under the given value
	/// mapping, in declaration order.
	///
	/// A hidden collapsible hides all of its children.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::condition::Condition;
	/// use content_schema::field::Field;
	/// use content_schema::schema::Schema;
	/// use serde_json::{Map, json};
	///
	/// let schema = Schema::register(
	///     "hero",
	///     vec![
	///         Field::checkbox("enableAnnouncement"),
	///         Field::text("announcement")
	///             .with_condition(Condition::is_true("enableAnnouncement")),
	///     ],
	/// )
	/// .unwrap();
	///
	/// let mut values = Map::new();
	/// values.insert("enableAnnouncement".to_string(), json!(true));
	/// let visible: Vec<&str> = schema
	///     .visible_fields(&values)
	///     .iter()
	///     .map(|f| f.name.as_str())
	///     .collect();
	/// assert_eq!(visible, vec!["enableAnnouncement", "announcement"]);
	/// ```
	pub fn visible_fields(&self, values: &Map<String, Value>) -> Vec<&Field> {
		let scope = Scope::new(values);
		let mut out = Vec::new();
		collect_visible(&self.fields, &scope, &mut out);
		out
	}
}

fn collect_visible<'s>(fields: &'s [Field], scope: &Scope<'_>, out: &mut Vec<&'s Field>) {
	for field in fields {
		if !field.is_visible(scope) {
			continue;
		}
		if let FieldKind::Collapsible { fields: inner } = &field.kind {
			collect_visible(inner, scope, out);
		} else {
			out.push(field);
		}
	}
}

/// Registry of named schemas exposed to the host framework.
///
/// # Examples
///
/// ```
/// use content_schema::field::Field;
/// use content_schema::schema::{Schema, SchemaRegistry};
///
/// let mut registry = SchemaRegistry::new();
/// let schema = Schema::register("pages", vec![Field::text("title")]).unwrap();
/// registry.register(schema).unwrap();
/// assert!(registry.get("pages").is_some());
/// ```
#[derive(Debug, Default)]
pub struct SchemaRegistry {
	schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self {
			schemas: HashMap::new(),
		}
	}

	/// Register a schema under its name.
	///
	/// Fails with [`SchemaError::DuplicateSchemaName`] when the name is
	/// already taken; the existing schema is left untouched.
	pub fn register(&mut self, schema: Schema) -> SchemaResult<()> {
		if self.schemas.contains_key(schema.name()) {
			return Err(SchemaError::DuplicateSchemaName(schema.name().to_string()));
		}
		debug!(schema = %schema.name(), "schema added to registry");
		self.schemas.insert(schema.name().to_string(), schema);
		Ok(())
	}

	/// Look up a schema by name.
	pub fn get(&self, name: &str) -> Option<&Schema> {
		self.schemas.get(name)
	}

	/// Registered schema names, in no particular order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.schemas.keys().map(String::as_str)
	}

	/// Number of registered schemas.
	pub fn len(&self) -> usize {
		self.schemas.len()
	}

	/// Whether the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.schemas.is_empty()
	}
}

/// Check one sibling scope: name uniqueness (with collapsible children
/// hoisted), then every field's condition references and children.
fn check_fields(path: &str, fields: &[Field], ancestors: &[&HashSet<String>]) -> SchemaResult<()> {
	let mut names: HashSet<String> = HashSet::new();
	for field in data_fields(fields) {
		if !names.insert(field.name.clone()) {
			return Err(SchemaError::DuplicateSiblingName {
				path: path.to_string(),
				name: field.name.clone(),
			});
		}
	}

	let mut chain: Vec<&HashSet<String>> = ancestors.to_vec();
	chain.push(&names);
	visit_fields(path, fields, &chain)
}

fn visit_fields(
	path: &str,
	fields: &[Field],
	chain: &[&HashSet<String>],
) -> SchemaResult<()> {
	for field in fields {
		let field_path = if field.name.is_empty() {
			path.to_string()
		} else {
			format!("{path}.{}", field.name)
		};

		let mut refs = Vec::new();
		field.condition.referenced_fields(&mut refs);
		for referenced in refs {
			if !chain.iter().any(|scope| scope.contains(referenced)) {
				return Err(SchemaError::UnknownConditionField {
					path: field_path,
					referenced: referenced.to_string(),
				});
			}
		}

		match &field.kind {
			FieldKind::Select { options } | FieldKind::Radio { options }
				if options.is_empty() =>
			{
				return Err(SchemaError::EmptyOptions { path: field_path });
			}
			// Same sibling scope: collapsibles are layout only
			FieldKind::Collapsible { fields: inner } => {
				visit_fields(path, inner, chain)?;
			}
			FieldKind::Group { fields: inner } | FieldKind::Array { fields: inner, .. } => {
				check_fields(&field_path, inner, chain)?;
			}
			FieldKind::Blocks { blocks, .. } => {
				let mut slugs: HashSet<&str> = HashSet::new();
				for block in blocks.blocks() {
					if !slugs.insert(block.slug.as_str()) {
						return Err(SchemaError::DuplicateBlockSlug {
							path: field_path,
							slug: block.slug.clone(),
						});
					}
					let block_path = format!("{field_path}.{}", block.slug);
					check_fields(&block_path, &block.fields, chain)?;
				}
			}
			_ => {}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::blocks::BlockDef;
	use crate::condition::Condition;
	use crate::field::Choice;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_register_valid_tree() {
		// Arrange
		let fields = vec![
			Field::select(
				"type",
				vec![Choice::new("Default", "default"), Choice::new("Home", "home")],
			)
			.required(),
			Field::checkbox("enableAnnouncement")
				.with_condition(Condition::equals("type", "home")),
		];

		// Act
		let schema = Schema::register("hero", fields);

		// Assert
		assert!(schema.is_ok());
	}

	#[rstest]
	fn test_duplicate_sibling_names_rejected() {
		// Arrange
		let fields = vec![Field::text("title"), Field::checkbox("title")];

		// Act
		let err = Schema::register("posts", fields).unwrap_err();

		// Assert
		assert_eq!(
			err,
			SchemaError::DuplicateSiblingName {
				path: "posts".to_string(),
				name: "title".to_string(),
			}
		);
	}

	#[rstest]
	fn test_duplicate_name_via_collapsible_rejected() {
		// A collapsible child collides with a sibling outside the wrapper
		let fields = vec![
			Field::checkbox("enable"),
			Field::collapsible("Settings", vec![Field::text("enable")]),
		];

		let err = Schema::register("posts", fields).unwrap_err();

		assert!(matches!(err, SchemaError::DuplicateSiblingName { name, .. } if name == "enable"));
	}

	#[rstest]
	fn test_duplicate_names_allowed_across_scopes() {
		// `label` appears in two different groups; that is fine
		let fields = vec![
			Field::group("primary", vec![Field::text("label")]),
			Field::group("secondary", vec![Field::text("label")]),
		];

		assert!(Schema::register("nav", fields).is_ok());
	}

	#[rstest]
	fn test_duplicate_block_slugs_rejected() {
		// Arrange
		let fields = vec![Field::blocks(
			"buttons",
			vec![
				BlockDef::new("link", vec![Field::text("label")]),
				BlockDef::new("link", vec![Field::text("url")]),
			],
		)];

		// Act
		let err = Schema::register("hero", fields).unwrap_err();

		// Assert
		assert_eq!(
			err,
			SchemaError::DuplicateBlockSlug {
				path: "hero.buttons".to_string(),
				slug: "link".to_string(),
			}
		);
	}

	#[rstest]
	fn test_condition_referencing_unknown_field_rejected() {
		// Arrange
		let fields = vec![
			Field::text("title"),
			Field::checkbox("gated").with_condition(Condition::equals("typo", "x")),
		];

		// Act
		let err = Schema::register("posts", fields).unwrap_err();

		// Assert
		assert_eq!(
			err,
			SchemaError::UnknownConditionField {
				path: "posts.gated".to_string(),
				referenced: "typo".to_string(),
			}
		);
	}

	#[rstest]
	fn test_condition_may_reference_ancestor() {
		// A nested field gated on a top-level sibling of its parent
		let fields = vec![
			Field::select("type", vec![Choice::new("Home", "home")]),
			Field::group(
				"banner",
				vec![Field::text("headline").with_condition(Condition::equals("type", "home"))],
			),
		];

		assert!(Schema::register("hero", fields).is_ok());
	}

	#[rstest]
	fn test_condition_may_not_reference_descendant() {
		// The reverse direction is a registration error
		let fields = vec![
			Field::text("title").with_condition(Condition::is_true("nested")),
			Field::group("banner", vec![Field::checkbox("nested")]),
		];

		let err = Schema::register("hero", fields).unwrap_err();

		assert!(matches!(err, SchemaError::UnknownConditionField { .. }));
	}

	#[rstest]
	fn test_empty_options_rejected() {
		let fields = vec![Field::select("type", vec![])];

		let err = Schema::register("hero", fields).unwrap_err();

		assert_eq!(
			err,
			SchemaError::EmptyOptions {
				path: "hero.type".to_string(),
			}
		);
	}

	#[rstest]
	fn test_visible_fields_skips_hidden_collapsible_children() {
		// Arrange
		let schema = Schema::register(
			"hero",
			vec![
				Field::checkbox("expand"),
				Field::collapsible(
					"Extras",
					vec![Field::text("note")],
				)
				.with_condition(Condition::is_true("expand")),
			],
		)
		.unwrap();

		// Act - collapsed
		let blank = Map::new();
		let hidden: Vec<&str> = schema
			.visible_fields(&blank)
			.iter()
			.map(|f| f.name.as_str())
			.collect();

		// Act - expanded
		let mut values = Map::new();
		values.insert("expand".to_string(), json!(true));
		let shown: Vec<&str> = schema
			.visible_fields(&values)
			.iter()
			.map(|f| f.name.as_str())
			.collect();

		// Assert
		assert_eq!(hidden, vec!["expand"]);
		assert_eq!(shown, vec!["expand", "note"]);
	}

	#[rstest]
	fn test_registry_rejects_duplicate_names() {
		// Arrange
		let mut registry = SchemaRegistry::new();
		registry
			.register(Schema::register("pages", vec![Field::text("title")]).unwrap())
			.unwrap();

		// Act
		let err = registry
			.register(Schema::register("pages", vec![Field::text("slug")]).unwrap())
			.unwrap_err();

		// Assert - the first registration is preserved
		assert_eq!(err, SchemaError::DuplicateSchemaName("pages".to_string()));
		assert!(registry.get("pages").unwrap().field("title").is_some());
	}
}
