//! Hero section schema
//!
//! The largest content definition in the crate: one group whose `type`
//! select fans out into per-variant field sets. Almost every field below is
//! gated on `type`, and the 3.0 variant adds a second gate (`threeCTA`)
//! choosing between a newsletter signup and a block-based button row.

use crate::blocks::BlockDef;
use crate::condition::Condition;
use crate::field::{Choice, Field};
use crate::schemas::link::{link, link_group};
use crate::schemas::livestream::livestream_fields;
use crate::schemas::theme_field;

/// The `hero` group field.
pub fn hero() -> Field {
	Field::group(
		"hero",
		vec![
			Field::select(
				"type",
				vec![
					Choice::new("Default", "default"),
					Choice::new("Content and Media", "contentMedia"),
					Choice::new("Centered Content", "centeredContent"),
					Choice::new("Form", "form"),
					Choice::new("Home", "home"),
					Choice::new("Livestream", "livestream"),
					Choice::new("Gradient", "gradient"),
					Choice::new("3.0", "three"),
				],
			)
			.with_label("Type")
			.with_default("default")
			.required(),
			Field::checkbox("fullBackground")
				.with_condition(Condition::equals("type", "gradient")),
			theme_field(),
			Field::collapsible(
				"Breadcrumbs Bar",
				vec![
					Field::checkbox("enableBreadcrumbsBar")
						.with_label("Enable Breadcrumbs Bar"),
					link_group(false)
						.renamed("breadcrumbsBarLinks")
						.with_condition(Condition::is_true("enableBreadcrumbsBar")),
				],
			),
			livestream_fields(),
			Field::checkbox("enableAnnouncement")
				.with_label("Enable Announcement?")
				.with_condition(Condition::equals("type", "home")),
			link(false)
				.renamed("announcementLink")
				.with_condition(Condition::is_true("enableAnnouncement")),
			Field::rich_text("richText")
				.with_condition(Condition::not_equals("type", "livestream")),
			Field::rich_text("description").with_condition(
				Condition::not_equals("type", "livestream")
					.and(Condition::not_equals("type", "centeredContent"))
					.and(Condition::not_equals("type", "three")),
			),
			link_group(false)
				.renamed("primaryButtons")
				.with_label("Primary Buttons")
				.with_condition(Condition::equals("type", "home")),
			Field::rich_text("secondaryHeading")
				.with_condition(Condition::equals("type", "home")),
			Field::rich_text("secondaryDescription")
				.with_condition(Condition::equals("type", "home")),
			link_group(true).with_condition(Condition::one_of(
				"type",
				["centeredContent", "contentMedia", "default", "gradient", "livestream"],
			)),
			Field::radio(
				"threeCTA",
				vec![
					Choice::new("Newsletter Sign Up", "newsletter"),
					Choice::new("Buttons", "buttons"),
				],
			)
			.with_label("CTA?")
			.required()
			.with_condition(Condition::equals("type", "three")),
			Field::group(
				"newsletter",
				vec![
					Field::text("placeholder").with_placeholder("Enter your email"),
					Field::textarea("description").with_placeholder(
						"Sign up to receive periodic updates and feature releases to your email.",
					),
				],
			)
			.with_condition(
				Condition::equals("type", "three")
					.and(Condition::equals("threeCTA", "newsletter")),
			),
			Field::blocks(
				"buttons",
				vec![
					BlockDef::new("link", vec![link(false)]).with_labels("Link", "Links"),
					BlockDef::new("command", vec![Field::text("command").required()])
						.with_labels("Command Line", "Command Lines"),
				],
			)
			.with_labels("Button", "Buttons")
			.with_condition(
				Condition::equals("type", "three").and(Condition::equals("threeCTA", "buttons")),
			),
			link_group(false)
				.renamed("secondaryButtons")
				.with_label("Secondary Buttons")
				.with_condition(Condition::equals("type", "home")),
			Field::array("images", vec![Field::upload("image", "media").required()])
				.with_min_rows(1)
				.with_condition(Condition::one_of("type", ["gradient"])),
			Field::upload("media", "media")
				.required()
				.with_condition(Condition::one_of(
					"type",
					["centeredContent", "contentMedia", "home"],
				)),
			Field::upload("secondaryMedia", "media")
				.required()
				.with_condition(Condition::equals("type", "home")),
			Field::upload("featureVideo", "media")
				.required()
				.with_condition(Condition::equals("type", "home")),
			Field::relationship("form", "forms")
				.with_condition(Condition::equals("type", "form")),
			Field::array(
				"logos",
				vec![
					Field::upload("logoMedia", "media")
						.with_label("Media")
						.required(),
				],
			)
			.with_condition(Condition::equals("type", "home")),
		],
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldKind;
	use crate::schema::Schema;
	use rstest::rstest;

	#[rstest]
	fn test_hero_registers_cleanly() {
		// Every name unique per scope, every condition resolvable
		assert!(Schema::register("pages", vec![hero()]).is_ok());
	}

	#[rstest]
	fn test_hero_type_options() {
		let hero = hero();
		let type_field = hero
			.children()
			.unwrap()
			.iter()
			.find(|f| f.name == "type")
			.unwrap();

		let FieldKind::Select { options } = &type_field.kind else {
			panic!("type must be a select");
		};

		let values: Vec<&str> = options.iter().map(|c| c.value.as_str()).collect();
		assert_eq!(
			values,
			vec![
				"default",
				"contentMedia",
				"centeredContent",
				"form",
				"home",
				"livestream",
				"gradient",
				"three",
			]
		);
	}

	#[rstest]
	fn test_buttons_block_set() {
		let hero = hero();
		let buttons = hero
			.children()
			.unwrap()
			.iter()
			.find(|f| f.name == "buttons")
			.unwrap();

		let FieldKind::Blocks { blocks, .. } = &buttons.kind else {
			panic!("buttons must be a blocks field");
		};

		let slugs: Vec<&str> = blocks.slugs().collect();
		assert_eq!(slugs, vec!["link", "command"]);
	}
}
