//! Field descriptors for content schemas
//!
//! A [`Field`] is one node of a field schema tree: a name (unique among its
//! siblings), a [`FieldKind`] carrying kind-specific configuration, and the
//! common declarative attributes (label, required, default value, visibility
//! condition). Container kinds (`group`, `array`, `blocks`, `collapsible`)
//! own ordered child lists; ownership is tree-exclusive.
//!
//! Trees are plain data. They are built once through the constructors and
//! `with_*` builders below, validated by
//! [`Schema::register`](crate::schema::Schema::register), and never mutated
//! afterwards; only the value documents edited against them change.

use crate::blocks::{BlockDef, BlockSet};
use crate::condition::{Condition, Scope};
use crate::richtext::FeatureSelection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A (label, value) pair for select and radio options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
	/// Human-readable option label
	pub label: String,
	/// Stored option value
	pub value: String,
}

impl Choice {
	/// Create an option pair.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::field::Choice;
	///
	/// let choice = Choice::new("Centered Content", "centeredContent");
	/// assert_eq!(choice.value, "centeredContent");
	/// ```
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}
}

/// Singular/plural display labels for repeatable entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
	/// Label for one entry
	pub singular: String,
	/// Label for several entries
	pub plural: String,
}

impl Labels {
	/// Create a label pair.
	pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
		Self {
			singular: singular.into(),
			plural: plural.into(),
		}
	}
}

/// Kind tag and kind-specific configuration of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
	/// Single-line text input
	Text {
		/// Placeholder shown in the empty input
		#[serde(default, skip_serializing_if = "Option::is_none")]
		placeholder: Option<String>,
	},
	/// Multi-line text input
	Textarea {
		/// Placeholder shown in the empty input
		#[serde(default, skip_serializing_if = "Option::is_none")]
		placeholder: Option<String>,
	},
	/// Boolean toggle
	Checkbox,
	/// Single choice from a dropdown
	Select {
		/// Ordered option list
		options: Vec<Choice>,
	},
	/// Single choice from radio buttons
	Radio {
		/// Ordered option list
		options: Vec<Choice>,
	},
	/// Rich text edited by the host editor engine
	RichText {
		/// Editor feature selection, resolved against root features
		#[serde(default)]
		features: FeatureSelection,
	},
	/// Reference to an uploaded document in a media-style collection
	Upload {
		/// Target collection name
		#[serde(rename = "relationTo")]
		relation_to: String,
	},
	/// Reference to a document in another collection
	Relationship {
		/// Target collection name
		#[serde(rename = "relationTo")]
		relation_to: String,
	},
	/// Repeatable rows of the same field subtree
	Array {
		/// Field subtree of each row
		fields: Vec<Field>,
		/// Minimum number of rows required when the field is active
		#[serde(
			rename = "minRows",
			default,
			skip_serializing_if = "Option::is_none"
		)]
		min_rows: Option<usize>,
	},
	/// Named nesting level holding a fixed field subtree
	Group {
		/// Child fields, evaluated in their own sibling scope
		fields: Vec<Field>,
	},
	/// Heterogeneous repeatable entries drawn from a closed block set
	Blocks {
		/// The selectable blocks
		blocks: BlockSet,
		/// Display labels for entries
		#[serde(default, skip_serializing_if = "Option::is_none")]
		labels: Option<Labels>,
	},
	/// Layout-only wrapper; children stay in the parent's sibling scope
	Collapsible {
		/// Wrapped fields
		fields: Vec<Field>,
	},
}

/// A single node in a field schema tree.
///
/// # Examples
///
/// ```
/// use content_schema::condition::Condition;
/// use content_schema::field::{Choice, Field};
///
/// let field = Field::select(
///     "type",
///     vec![
///         Choice::new("Default", "default"),
///         Choice::new("Gradient", "gradient"),
///     ],
/// )
/// .with_default("default")
/// .required();
///
/// let gated = Field::checkbox("fullBackground")
///     .with_condition(Condition::equals("type", "gradient"));
/// assert!(!gated.condition.is_always());
/// assert_eq!(field.name, "type");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
	/// Name, unique among siblings; empty for layout-only collapsibles
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub name: String,
	/// Human-readable label shown in the admin UI
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Whether a value must be present for the document to save
	#[serde(default)]
	pub required: bool,
	/// Initial value for new documents
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default_value: Option<Value>,
	/// Visibility condition over sibling/ancestor values
	#[serde(default, skip_serializing_if = "Condition::is_always")]
	pub condition: Condition,
	/// Kind tag and kind-specific configuration
	#[serde(flatten)]
	pub kind: FieldKind,
}

impl Field {
	fn base(name: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			label: None,
			required: false,
			default_value: None,
			condition: Condition::Always,
			kind,
		}
	}

	/// Single-line text field.
	pub fn text(name: impl Into<String>) -> Self {
		Self::base(name, FieldKind::Text { placeholder: None })
	}

	/// Multi-line text field.
	pub fn textarea(name: impl Into<String>) -> Self {
		Self::base(name, FieldKind::Textarea { placeholder: None })
	}

	/// Boolean toggle field.
	pub fn checkbox(name: impl Into<String>) -> Self {
		Self::base(name, FieldKind::Checkbox)
	}

	/// Dropdown select field over an ordered option list.
	pub fn select(name: impl Into<String>, options: Vec<Choice>) -> Self {
		Self::base(name, FieldKind::Select { options })
	}

	/// Radio-button field over an ordered option list.
	pub fn radio(name: impl Into<String>, options: Vec<Choice>) -> Self {
		Self::base(name, FieldKind::Radio { options })
	}

	/// Rich text field inheriting the root editor features.
	pub fn rich_text(name: impl Into<String>) -> Self {
		Self::base(
			name,
			FieldKind::RichText {
				features: FeatureSelection::Inherit,
			},
		)
	}

	/// Upload reference into the named collection.
	pub fn upload(name: impl Into<String>, relation_to: impl Into<String>) -> Self {
		Self::base(
			name,
			FieldKind::Upload {
				relation_to: relation_to.into(),
			},
		)
	}

	/// Relationship reference into the named collection.
	pub fn relationship(name: impl Into<String>, relation_to: impl Into<String>) -> Self {
		Self::base(
			name,
			FieldKind::Relationship {
				relation_to: relation_to.into(),
			},
		)
	}

	/// Repeatable array of the given field subtree.
	pub fn array(name: impl Into<String>, fields: Vec<Field>) -> Self {
		Self::base(
			name,
			FieldKind::Array {
				fields,
				min_rows: None,
			},
		)
	}

	/// Named group holding the given field subtree.
	pub fn group(name: impl Into<String>, fields: Vec<Field>) -> Self {
		Self::base(name, FieldKind::Group { fields })
	}

	/// Blocks field over a closed set of selectable blocks.
	pub fn blocks(name: impl Into<String>, blocks: Vec<BlockDef>) -> Self {
		Self::base(
			name,
			FieldKind::Blocks {
				blocks: BlockSet::new(blocks),
				labels: None,
			},
		)
	}

	/// Layout-only collapsible wrapper.
	///
	/// Carries no data name; its children stay in the parent's sibling
	/// scope for naming, visibility, and validation.
	pub fn collapsible(label: impl Into<String>, fields: Vec<Field>) -> Self {
		let mut field = Self::base(String::new(), FieldKind::Collapsible { fields });
		field.label = Some(label.into());
		field
	}

	/// Mark the field required.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::field::Field;
	///
	/// let field = Field::text("command").required();
	/// assert!(field.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the admin UI label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the default value for new documents.
	pub fn with_default(mut self, value: impl Into<Value>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	/// Attach a visibility condition.
	pub fn with_condition(mut self, condition: Condition) -> Self {
		self.condition = condition;
		self
	}

	/// Rename the field.
	///
	/// Reusable definitions like the shared link group are declared once
	/// under a canonical name and renamed at each composition site.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::field::Field;
	/// use content_schema::schemas::link_group;
	///
	/// let buttons = link_group(false).renamed("primaryButtons");
	/// assert_eq!(buttons.name, "primaryButtons");
	/// ```
	pub fn renamed(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Set the input placeholder. Applies to text and textarea fields;
	/// other kinds are left unchanged.
	pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
		match &mut self.kind {
			FieldKind::Text { placeholder } | FieldKind::Textarea { placeholder } => {
				*placeholder = Some(text.into());
			}
			_ => {}
		}
		self
	}

	/// Set the minimum row count. Applies to array fields; other kinds are
	/// left unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::field::{Field, FieldKind};
	///
	/// let images = Field::array("images", vec![Field::upload("image", "media").required()])
	///     .with_min_rows(1);
	/// assert!(matches!(images.kind, FieldKind::Array { min_rows: Some(1), .. }));
	/// ```
	pub fn with_min_rows(mut self, rows: usize) -> Self {
		if let FieldKind::Array { min_rows, .. } = &mut self.kind {
			*min_rows = Some(rows);
		}
		self
	}

	/// Set singular/plural entry labels. Applies to blocks fields; other
	/// kinds are left unchanged.
	pub fn with_labels(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
		if let FieldKind::Blocks { labels, .. } = &mut self.kind {
			*labels = Some(Labels::new(singular, plural));
		}
		self
	}

	/// Set the rich text feature selection. Applies to rich text fields;
	/// other kinds are left unchanged.
	pub fn with_features(mut self, features: FeatureSelection) -> Self {
		if let FieldKind::RichText {
			features: current, ..
		} = &mut self.kind
		{
			*current = features;
		}
		self
	}

	/// Whether this field is rendered/active under the given value scope.
	///
	/// Fields without a condition are always visible.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::condition::{Condition, Scope};
	/// use content_schema::field::Field;
	/// use serde_json::Map;
	///
	/// let field = Field::checkbox("fullBackground")
	///     .with_condition(Condition::equals("type", "gradient"));
	///
	/// let blank = Map::new();
	/// assert!(!field.is_visible(&Scope::new(&blank)));
	/// ```
	pub fn is_visible(&self, scope: &Scope<'_>) -> bool {
		self.condition.evaluate(scope)
	}

	/// Whether this field is a layout-only wrapper without a data name.
	pub fn is_layout(&self) -> bool {
		matches!(self.kind, FieldKind::Collapsible { .. })
	}

	/// Direct children for container kinds that share or introduce a field
	/// subtree; `None` for leaf kinds and `blocks`.
	pub fn children(&self) -> Option<&[Field]> {
		match &self.kind {
			FieldKind::Array { fields, .. }
			| FieldKind::Group { fields }
			| FieldKind::Collapsible { fields } => Some(fields),
			_ => None,
		}
	}
}

/// Flatten layout-only wrappers: the data fields of a sibling scope, in
/// declaration order, with collapsible children hoisted into place.
pub(crate) fn data_fields(fields: &[Field]) -> Vec<&Field> {
	let mut out = Vec::new();
	for field in fields {
		if let FieldKind::Collapsible { fields: inner } = &field.kind {
			out.extend(data_fields(inner));
		} else {
			out.push(field);
		}
	}
	out
}
