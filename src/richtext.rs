//! Rich-text editor feature selection
//!
//! Every `richText` field carries a [`FeatureSelection`] that is resolved
//! against the feature set of the host editor's root configuration. The
//! editor engine owns rendering and serialization of rich text content; this
//! crate only declares which root features a field opts into. The content
//! definitions shipped here always inherit the root features unchanged.

use serde::{Deserialize, Serialize};

/// Selection of editor features for a rich text field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureSelection {
	/// Pass the root feature set through unchanged
	#[default]
	Inherit,
	/// Keep only the named features, preserving root order
	Only(Vec<String>),
}

impl FeatureSelection {
	/// Resolve this selection against the root feature set.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::richtext::FeatureSelection;
	///
	/// let root = vec!["bold".to_string(), "italic".to_string(), "link".to_string()];
	///
	/// assert_eq!(FeatureSelection::Inherit.resolve(&root), root);
	///
	/// let only = FeatureSelection::Only(vec!["link".to_string()]);
	/// assert_eq!(only.resolve(&root), vec!["link".to_string()]);
	/// ```
	pub fn resolve(&self, root_features: &[String]) -> Vec<String> {
		match self {
			FeatureSelection::Inherit => root_features.to_vec(),
			FeatureSelection::Only(wanted) => root_features
				.iter()
				.filter(|f| wanted.contains(f))
				.cloned()
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn root() -> Vec<String> {
		["bold", "italic", "link", "upload"]
			.iter()
			.map(|s| s.to_string())
			.collect()
	}

	#[rstest]
	fn test_inherit_is_identity() {
		// Arrange
		let features = FeatureSelection::Inherit;

		// Act
		let resolved = features.resolve(&root());

		// Assert
		assert_eq!(resolved, root());
	}

	#[rstest]
	fn test_only_keeps_root_order() {
		// Arrange
		let features = FeatureSelection::Only(vec!["link".to_string(), "bold".to_string()]);

		// Act
		let resolved = features.resolve(&root());

		// Assert - root order wins over selection order
		assert_eq!(resolved, vec!["bold".to_string(), "link".to_string()]);
	}

	#[rstest]
	fn test_only_ignores_unknown_features() {
		// Arrange
		let features = FeatureSelection::Only(vec!["tables".to_string()]);

		// Act
		let resolved = features.resolve(&root());

		// Assert
		assert!(resolved.is_empty());
	}

	#[rstest]
	fn test_default_is_inherit() {
		assert_eq!(FeatureSelection::default(), FeatureSelection::Inherit);
	}
}
