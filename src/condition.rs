//! Conditional field visibility
//!
//! A [`Condition`] decides whether a field is rendered and active, given the
//! current values of its sibling fields. Conditions are a small tagged
//! predicate language rather than closures, so a registered schema stays a
//! plain serializable descriptor.
//!
//! Evaluation is pure, total, and synchronous. Missing keys never fail:
//! an unset sibling is treated as undefined, which makes `Equals` and
//! `OneOf` false and `NotEquals` true. A conjunction over partially-unset
//! state therefore evaluates to false and hides the field, which is the
//! intended behavior while upstream choices are still blank.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Visibility predicate attached to a field.
///
/// # Examples
///
/// ```
/// use content_schema::condition::{Condition, Scope};
/// use serde_json::{Map, json};
///
/// let cond = Condition::equals("type", "three").and(Condition::equals("threeCTA", "buttons"));
///
/// let mut values = Map::new();
/// values.insert("type".to_string(), json!("three"));
/// values.insert("threeCTA".to_string(), json!("buttons"));
/// assert!(cond.evaluate(&Scope::new(&values)));
///
/// // An unset upstream field hides the whole conjunction.
/// let blank = Map::new();
/// assert!(!cond.evaluate(&Scope::new(&blank)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Condition {
	/// Always visible: the implicit condition of fields without one
	Always,
	/// The named sibling equals the given value
	Equals { field: String, value: Value },
	/// The named sibling differs from the given value (true when unset)
	NotEquals { field: String, value: Value },
	/// The named sibling is one of the given values
	OneOf { field: String, values: Vec<Value> },
	/// The named sibling is truthy (set, non-null, non-zero, non-empty)
	IsTrue { field: String },
	/// Every inner condition holds
	And { all: Vec<Condition> },
}

impl Condition {
	/// Condition that the named sibling equals `value`.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::condition::{Condition, Scope};
	/// use serde_json::{Map, json};
	///
	/// let cond = Condition::equals("type", "gradient");
	/// let mut values = Map::new();
	/// values.insert("type".to_string(), json!("gradient"));
	/// assert!(cond.evaluate(&Scope::new(&values)));
	/// ```
	pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
		Condition::Equals {
			field: field.into(),
			value: value.into(),
		}
	}

	/// Condition that the named sibling differs from `value`.
	///
	/// An unset sibling satisfies this condition, matching the behavior of
	/// a strict inequality check against an undefined value.
	pub fn not_equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
		Condition::NotEquals {
			field: field.into(),
			value: value.into(),
		}
	}

	/// Condition that the named sibling is a member of `values`.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::condition::{Condition, Scope};
	/// use serde_json::{Map, json};
	///
	/// let cond = Condition::one_of("type", ["centeredContent", "contentMedia", "home"]);
	/// let mut values = Map::new();
	/// values.insert("type".to_string(), json!("home"));
	/// assert!(cond.evaluate(&Scope::new(&values)));
	/// ```
	pub fn one_of<I, V>(field: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		Condition::OneOf {
			field: field.into(),
			values: values.into_iter().map(Into::into).collect(),
		}
	}

	/// Condition that the named sibling is truthy.
	///
	/// Truthiness follows the usual form-state cast: unset and null are
	/// false, booleans are themselves, numbers are true when non-zero,
	/// strings when non-empty, arrays and objects always.
	pub fn is_true(field: impl Into<String>) -> Self {
		Condition::IsTrue {
			field: field.into(),
		}
	}

	/// Conjunction of this condition with another.
	///
	/// Flattens nested `And`s so chained calls build one flat operand list.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::condition::Condition;
	///
	/// let cond = Condition::equals("type", "three")
	///     .and(Condition::equals("threeCTA", "newsletter"));
	/// assert!(matches!(cond, Condition::And { .. }));
	/// ```
	pub fn and(self, other: Condition) -> Self {
		let mut all = match self {
			Condition::And { all } => all,
			first => vec![first],
		};
		match other {
			Condition::And { all: rest } => all.extend(rest),
			second => all.push(second),
		}
		Condition::And { all }
	}

	/// Whether this is the implicit [`Condition::Always`].
	pub fn is_always(&self) -> bool {
		matches!(self, Condition::Always)
	}

	/// Evaluate this condition against a value scope.
	///
	/// Never fails: unknown names read as undefined.
	pub fn evaluate(&self, scope: &Scope<'_>) -> bool {
		match self {
			Condition::Always => true,
			Condition::Equals { field, value } => scope.get(field).is_some_and(|v| v == value),
			Condition::NotEquals { field, value } => !scope.get(field).is_some_and(|v| v == value),
			Condition::OneOf { field, values } => {
				scope.get(field).is_some_and(|v| values.contains(v))
			}
			Condition::IsTrue { field } => scope.get(field).is_some_and(truthy),
			Condition::And { all } => all.iter().all(|c| c.evaluate(scope)),
		}
	}

	/// Collect the field names this condition reads, for registration-time
	/// reference checking.
	pub(crate) fn referenced_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
		match self {
			Condition::Always => {}
			Condition::Equals { field, .. }
			| Condition::NotEquals { field, .. }
			| Condition::OneOf { field, .. }
			| Condition::IsTrue { field } => out.push(field),
			Condition::And { all } => {
				for c in all {
					c.referenced_fields(out);
				}
			}
		}
	}
}

impl Default for Condition {
	fn default() -> Self {
		Condition::Always
	}
}

/// Value scope for condition evaluation: the sibling value mapping at one
/// nesting level, chained to its ancestors.
///
/// Lookup starts at the innermost scope and walks outward, so a nested
/// group's own `type` field shadows a `type` field on an ancestor.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
	values: &'a Map<String, Value>,
	parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
	/// Root scope over a sibling value mapping.
	///
	/// # Examples
	///
	/// ```
	/// use content_schema::condition::Scope;
	/// use serde_json::{Map, json};
	///
	/// let mut values = Map::new();
	/// values.insert("type".to_string(), json!("home"));
	/// let scope = Scope::new(&values);
	/// assert_eq!(scope.get("type"), Some(&json!("home")));
	/// assert_eq!(scope.get("missing"), None);
	/// ```
	pub fn new(values: &'a Map<String, Value>) -> Self {
		Self {
			values,
			parent: None,
		}
	}

	/// Child scope for a nested sibling mapping (a group, array row, or
	/// block entry), keeping this scope reachable as an ancestor.
	pub fn child(&'a self, values: &'a Map<String, Value>) -> Scope<'a> {
		Scope {
			values,
			parent: Some(self),
		}
	}

	/// Look up a field value, innermost scope first.
	pub fn get(&self, name: &str) -> Option<&'a Value> {
		match self.values.get(name) {
			Some(v) => Some(v),
			None => self.parent.and_then(|p| p.get(name)),
		}
	}

	/// The sibling mapping of this scope alone, without ancestors.
	pub fn values(&self) -> &'a Map<String, Value> {
		self.values
	}
}

fn truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}
