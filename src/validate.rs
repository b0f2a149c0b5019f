//! Document validation against a registered schema
//!
//! A [`Validator`] walks a value document alongside its schema tree and
//! collects every constraint failure into a [`ValidationReport`]: `required`
//! fields without a value, arrays below their `minRows`, relation ids the
//! [`RelationResolver`] cannot find, and blocks entries naming a slug outside
//! their field's block set. Errors are reported per field path and never
//! abort the walk; the caller decides whether the document may save.
//!
//! Fields whose visibility condition currently evaluates false are skipped,
//! subtree and all, unless [`ValidationOptions::validate_hidden`] opts into
//! enforcing them anyway.

use crate::blocks::BLOCK_TYPE_KEY;
use crate::condition::Scope;
use crate::error::ValidationError;
use crate::field::{Field, FieldKind};
use crate::schema::Schema;
use serde_json::{Map, Value};

/// Resolves relation ids against the host framework's collections.
///
/// Upload and relationship fields only declare a target collection name;
/// whether a given id actually exists there is the host's knowledge. The
/// validator asks through this seam.
pub trait RelationResolver {
	/// Whether `id` identifies an existing document in `collection`.
	fn exists(&self, collection: &str, id: &Value) -> bool;
}

/// Resolver that accepts any present id.
///
/// Useful when reference integrity is checked elsewhere, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl RelationResolver for AllowAll {
	fn exists(&self, _collection: &str, _id: &Value) -> bool {
		true
	}
}

static ALLOW_ALL: AllowAll = AllowAll;

/// Behavior switches for a validation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOptions {
	/// Enforce constraints on fields whose condition currently hides them.
	///
	/// Off by default: a hidden required field is exempt, matching what an
	/// editor can actually see and fill in. Turning this on treats the
	/// declarations as unconditional.
	pub validate_hidden: bool,
}

/// A single per-field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
	/// Dotted path of the offending field, rooted at the schema name
	/// (array and blocks entries carry their index: `pages.hero.images.0`)
	pub path: String,
	/// What went wrong
	pub error: ValidationError,
}

/// Every failure found in one validation run, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
	issues: Vec<FieldIssue>,
}

impl ValidationReport {
	/// Whether the document passed with no issues.
	pub fn is_valid(&self) -> bool {
		self.issues.is_empty()
	}

	/// All issues, in walk order.
	pub fn issues(&self) -> &[FieldIssue] {
		&self.issues
	}

	/// Issues recorded for one exact field path.
	pub fn issues_for<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationError> {
		self.issues
			.iter()
			.filter(move |issue| issue.path == path)
			.map(|issue| &issue.error)
	}

	fn push(&mut self, path: String, error: ValidationError) {
		self.issues.push(FieldIssue { path, error });
	}
}

/// Walks a value document against a schema and reports per-field issues.
///
/// # Examples
///
/// ```
/// use content_schema::field::Field;
/// use content_schema::schema::Schema;
/// use content_schema::validate::Validator;
/// use serde_json::json;
///
/// let schema = Schema::register("posts", vec![Field::text("title").required()]).unwrap();
///
/// let report = Validator::allow_all(&schema).validate(&json!({}));
/// assert!(!report.is_valid());
///
/// let report = Validator::allow_all(&schema).validate(&json!({"title": "Hello"}));
/// assert!(report.is_valid());
/// ```
pub struct Validator<'a, R: RelationResolver = AllowAll> {
	schema: &'a Schema,
	resolver: &'a R,
	options: ValidationOptions,
}

impl<'a> Validator<'a, AllowAll> {
	/// Validator that accepts any present relation id.
	pub fn allow_all(schema: &'a Schema) -> Self {
		Validator::new(schema, &ALLOW_ALL)
	}
}

impl<'a, R: RelationResolver> Validator<'a, R> {
	/// Validator resolving relation ids through the given resolver.
	pub fn new(schema: &'a Schema, resolver: &'a R) -> Self {
		Self {
			schema,
			resolver,
			options: ValidationOptions::default(),
		}
	}

	/// Override the default options.
	pub fn with_options(mut self, options: ValidationOptions) -> Self {
		self.options = options;
		self
	}

	/// Validate a document, collecting every issue found.
	///
	/// A non-object document is treated as an empty one: only missing-value
	/// constraints can fire.
	pub fn validate(&self, document: &Value) -> ValidationReport {
		let empty = Map::new();
		let values = document.as_object().unwrap_or(&empty);
		let mut report = ValidationReport::default();
		let scope = Scope::new(values);
		self.check_fields(self.schema.name(), self.schema.fields(), &scope, &mut report);
		report
	}

	fn check_fields(
		&self,
		path: &str,
		fields: &[Field],
		scope: &Scope<'_>,
		report: &mut ValidationReport,
	) {
		for field in fields {
			if !field.is_visible(scope) && !self.options.validate_hidden {
				continue;
			}

			// Layout wrapper: children validate in the same scope
			if let FieldKind::Collapsible { fields: inner } = &field.kind {
				self.check_fields(path, inner, scope, report);
				continue;
			}

			let field_path = format!("{path}.{}", field.name);
			let value = scope.values().get(&field.name);

			if field.required && is_unset(value) {
				report.push(field_path.clone(), ValidationError::MissingRequiredField);
			}

			match &field.kind {
				FieldKind::Upload { relation_to } | FieldKind::Relationship { relation_to } => {
					if let Some(id) = value
						&& !is_unset(Some(id))
						&& !self.resolver.exists(relation_to, id)
					{
						report.push(
							field_path,
							ValidationError::DanglingReference {
								collection: relation_to.clone(),
								id: render_id(id),
							},
						);
					}
				}
				FieldKind::Group { fields: inner } => {
					let empty = Map::new();
					let child_values = value.and_then(Value::as_object).unwrap_or(&empty);
					let child_scope = scope.child(child_values);
					self.check_fields(&field_path, inner, &child_scope, report);
				}
				FieldKind::Array {
					fields: inner,
					min_rows,
				} => {
					let rows = value.and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[]);
					if let Some(min) = min_rows
						&& rows.len() < *min
					{
						report.push(
							field_path.clone(),
							ValidationError::InsufficientRows {
								min_rows: *min,
								actual: rows.len(),
							},
						);
					}
					for (index, row) in rows.iter().enumerate() {
						let empty = Map::new();
						let row_values = row.as_object().unwrap_or(&empty);
						let row_scope = scope.child(row_values);
						let row_path = format!("{field_path}.{index}");
						self.check_fields(&row_path, inner, &row_scope, report);
					}
				}
				FieldKind::Blocks { blocks, .. } => {
					let entries =
						value.and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[]);
					for (index, entry) in entries.iter().enumerate() {
						let empty = Map::new();
						let entry_values = entry.as_object().unwrap_or(&empty);
						let entry_path = format!("{field_path}.{index}");
						let slug = entry_values
							.get(BLOCK_TYPE_KEY)
							.and_then(Value::as_str)
							.unwrap_or_default();
						match blocks.get(slug) {
							Some(block) => {
								let entry_scope = scope.child(entry_values);
								self.check_fields(
									&entry_path,
									&block.fields,
									&entry_scope,
									report,
								);
							}
							None => {
								report.push(
									entry_path,
									ValidationError::UnknownBlockSlug {
										slug: slug.to_string(),
									},
								);
							}
						}
					}
				}
				_ => {}
			}
		}
	}
}

/// Missing, null, and empty-string values all count as unset.
fn is_unset(value: Option<&Value>) -> bool {
	match value {
		None | Some(Value::Null) => true,
		Some(Value::String(s)) => s.is_empty(),
		Some(_) => false,
	}
}

fn render_id(id: &Value) -> String {
	match id {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}
