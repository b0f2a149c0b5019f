//! Reusable link field group
//!
//! One canonical link definition composed all over the content schemas:
//! either an internal reference into the `pages` collection or a custom URL,
//! chosen by a radio whose value gates which target field is required.
//! Composition sites rename the group (or the wrapping array) and attach
//! their own visibility condition through the `Field` builders.

use crate::condition::Condition;
use crate::field::{Choice, Field};

/// The shared link group.
///
/// `appearances` adds the visual-style select used where links render as
/// buttons; plain inline links leave it off.
///
/// # Examples
///
/// ```
/// use content_schema::condition::Condition;
/// use content_schema::schemas::link;
///
/// let announcement = link(false)
///     .renamed("announcementLink")
///     .with_condition(Condition::is_true("enableAnnouncement"));
/// assert_eq!(announcement.name, "announcementLink");
/// ```
pub fn link(appearances: bool) -> Field {
	let mut fields = vec![
		Field::radio(
			"type",
			vec![
				Choice::new("Internal Link", "reference"),
				Choice::new("Custom URL", "custom"),
			],
		)
		.with_default("reference"),
		Field::checkbox("newTab").with_label("Open in new tab"),
		Field::relationship("reference", "pages")
			.with_label("Document to link to")
			.required()
			.with_condition(Condition::equals("type", "reference")),
		Field::text("url")
			.with_label("Custom URL")
			.required()
			.with_condition(Condition::equals("type", "custom")),
		Field::text("label").with_label("Label").required(),
	];

	if appearances {
		fields.push(
			Field::select(
				"appearance",
				vec![
					Choice::new("Default", "default"),
					Choice::new("Primary", "primary"),
					Choice::new("Secondary", "secondary"),
				],
			)
			.with_default("default"),
		);
	}

	Field::group("link", fields)
}

/// A repeatable list of links, named `links` until a composition site
/// renames it.
pub fn link_group(appearances: bool) -> Field {
	Field::array("links", vec![link(appearances)])
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldKind;
	use crate::schema::Schema;
	use crate::validate::Validator;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_link_registers_cleanly() {
		assert!(Schema::register("nav", vec![link(true)]).is_ok());
	}

	#[rstest]
	fn test_appearance_select_is_opt_in() {
		let plain = link(false);
		let styled = link(true);

		let has_appearance = |field: &Field| {
			field
				.children()
				.unwrap()
				.iter()
				.any(|f| f.name == "appearance")
		};

		assert!(!has_appearance(&plain));
		assert!(has_appearance(&styled));
	}

	#[rstest]
	fn test_link_group_wraps_link_in_array() {
		let group = link_group(false);

		assert_eq!(group.name, "links");
		assert!(matches!(group.kind, FieldKind::Array { .. }));
	}

	#[rstest]
	fn test_internal_link_requires_reference_not_url() {
		// Arrange - type picks the reference side; url stays hidden
		let schema = Schema::register("nav", vec![link(false)]).unwrap();
		let document = json!({"link": {"type": "reference", "label": "Docs"}});

		// Act
		let report = Validator::allow_all(&schema).validate(&document);

		// Assert - only the hidden-exempt url is skipped
		let paths: Vec<&str> = report.issues().iter().map(|i| i.path.as_str()).collect();
		assert_eq!(paths, vec!["nav.link.reference"]);
	}

	#[rstest]
	fn test_custom_link_requires_url_not_reference() {
		let schema = Schema::register("nav", vec![link(false)]).unwrap();
		let document = json!({"link": {"type": "custom", "label": "Docs"}});

		let report = Validator::allow_all(&schema).validate(&document);

		let paths: Vec<&str> = report.issues().iter().map(|i| i.path.as_str()).collect();
		assert_eq!(paths, vec!["nav.link.url"]);
	}
}
