//! Livestream hero fields
//!
//! The group of fields shown when a hero switches to its livestream type:
//! stream metadata plus the guest lineup. Gated as a whole on the sibling
//! `type` select.

use crate::condition::Condition;
use crate::field::Field;

/// The `livestream` group, visible only while `type == "livestream"`.
pub fn livestream_fields() -> Field {
	Field::group(
		"livestream",
		vec![
			Field::text("date")
				.with_label("Start Date")
				.with_placeholder("2026-01-01T18:00"),
			Field::checkbox("hideBreadcrumbs").with_label("Hide Breadcrumbs"),
			Field::rich_text("richText"),
			Field::array(
				"guests",
				vec![
					Field::text("name"),
					Field::text("link"),
					Field::upload("image", "media"),
				],
			)
			.with_label("Guests"),
		],
	)
	.with_condition(Condition::equals("type", "livestream"))
}
