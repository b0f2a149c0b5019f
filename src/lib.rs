//! # content-schema
//!
//! Declarative content field schemas for a CMS admin UI and rendering layer:
//! nested field descriptors with validation constraints, conditional
//! visibility, and reusable block composition.
//!
//! ## Features
//!
//! - **Field Schema Trees**: serializable descriptors (name, kind, required,
//!   default, options, labels) with pure tree composition through `group`,
//!   `array`, `blocks`, and layout-only `collapsible` fields
//! - **Conditional Visibility**: a tagged [`Condition`] language evaluated
//!   against sibling and ancestor values; total, pure, and re-evaluated on
//!   every value change by the host UI
//! - **Block Composition**: closed sets of named sub-schemas selectable by
//!   slug, dispatched by registry lookup at validation time
//! - **Document Validation**: per-field, non-fatal reporting of missing
//!   required values, under-filled arrays, dangling relation ids, and
//!   unknown block slugs
//! - **Fatal Registration Checks**: duplicate sibling names, duplicate block
//!   slugs, and unresolvable condition references never produce a usable
//!   schema
//! - **Content Definitions**: the hero section and media block schemas with
//!   their shared link, livestream, and theme helpers
//!
//! ## Architecture
//!
//! ```text
//! content-schema
//! ├── condition - visibility predicates and value scopes
//! ├── field     - field descriptors and builders
//! ├── blocks    - reusable named block sub-schemas
//! ├── richtext  - editor feature selection
//! ├── schema    - registration, invariants, registry
//! ├── validate  - document validation against a schema
//! └── schemas   - the shipped content definitions (hero, media block)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use content_schema::prelude::*;
//! use serde_json::json;
//!
//! // Register the shipped hero schema
//! let mut registry = SchemaRegistry::new();
//! let pages = Schema::register("pages", vec![hero()]).unwrap();
//! registry.register(pages).unwrap();
//!
//! // Validate an edit session's document against it
//! let schema = registry.get("pages").unwrap();
//! let document = json!({
//!     "hero": {
//!         "type": "three",
//!         "threeCTA": "buttons",
//!         "buttons": [{"blockType": "command", "command": "cargo add content-schema"}],
//!     },
//! });
//! let report = Validator::allow_all(schema).validate(&document);
//! assert!(report.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod blocks;
pub mod condition;
pub mod error;
pub mod field;
pub mod richtext;
pub mod schema;
pub mod schemas;
pub mod validate;

pub use blocks::{BLOCK_TYPE_KEY, BlockDef, BlockSet};
pub use condition::{Condition, Scope};
pub use error::{SchemaError, SchemaResult, ValidationError};
pub use field::{Choice, Field, FieldKind, Labels};
pub use richtext::FeatureSelection;
pub use schema::{Schema, SchemaRegistry};
pub use validate::{
	AllowAll, FieldIssue, RelationResolver, ValidationOptions, ValidationReport, Validator,
};

/// Convenient re-exports of commonly used items
pub mod prelude {
	pub use crate::blocks::{BlockDef, BlockSet};
	pub use crate::condition::{Condition, Scope};
	pub use crate::error::{SchemaError, ValidationError};
	pub use crate::field::{Choice, Field, FieldKind, Labels};
	pub use crate::richtext::FeatureSelection;
	pub use crate::schema::{Schema, SchemaRegistry};
	pub use crate::schemas::{hero, link, link_group, media_block};
	pub use crate::validate::{
		RelationResolver, ValidationOptions, ValidationReport, Validator,
	};
}
