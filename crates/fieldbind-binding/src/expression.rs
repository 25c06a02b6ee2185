//! Field expression unwrapping
//!
//! Field directives carry either a selection expression relative to the
//! form's bound object (`*{address.street}`) or a variable expression that
//! names the object itself (`${user.address.street}`). Only the property
//! path is extracted; nothing is evaluated.

use crate::error::{BindingError, BindingResult};

/// A property path parsed out of a field directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldExpression {
	path: String,
}

/// One step of a property path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
	Property(&'a str),
	Index(usize),
}

impl FieldExpression {
	/// Unwrap a field directive value bound to `object_name`
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_binding::FieldExpression;
	///
	/// let selection = FieldExpression::parse("*{address.street}", "user").unwrap();
	/// assert_eq!(selection.path(), "address.street");
	///
	/// let variable = FieldExpression::parse("${user.address.street}", "user").unwrap();
	/// assert_eq!(variable.path(), "address.street");
	///
	/// assert!(FieldExpression::parse("address.street", "user").is_err());
	/// ```
	pub fn parse(raw: &str, object_name: &str) -> BindingResult<Self> {
		let trimmed = raw.trim();
		let invalid = || BindingError::InvalidExpression(raw.to_string());

		if let Some(inner) = unwrap(trimmed, "*{") {
			return Ok(Self {
				path: inner.trim().to_string(),
			});
		}

		let inner = unwrap(trimmed, "${").ok_or_else(invalid)?.trim();
		if inner == object_name {
			return Ok(Self {
				path: String::new(),
			});
		}
		inner
			.strip_prefix(object_name)
			.and_then(|rest| rest.strip_prefix('.'))
			.map(|path| Self {
				path: path.trim().to_string(),
			})
			.ok_or_else(invalid)
	}

	/// Property path relative to the bound object; empty for the object itself
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Split the path into property and index steps
	///
	/// # Examples
	///
	/// ```
	/// use fieldbind_binding::FieldExpression;
	/// use fieldbind_binding::expression::PathSegment;
	///
	/// let expression = FieldExpression::parse("*{rows[2].label}", "table").unwrap();
	/// assert_eq!(
	/// 	expression.segments().unwrap(),
	/// 	vec![
	/// 		PathSegment::Property("rows"),
	/// 		PathSegment::Index(2),
	/// 		PathSegment::Property("label"),
	/// 	]
	/// );
	/// ```
	pub fn segments(&self) -> BindingResult<Vec<PathSegment<'_>>> {
		let mut segments = Vec::new();
		if self.path.is_empty() {
			return Ok(segments);
		}
		let invalid = || BindingError::InvalidExpression(self.path.clone());

		for part in self.path.split('.') {
			let (name, mut rest) = match part.find('[') {
				Some(position) => part.split_at(position),
				None => (part, ""),
			};
			if name.is_empty() {
				return Err(invalid());
			}
			segments.push(PathSegment::Property(name));

			while !rest.is_empty() {
				let close = rest.find(']').ok_or_else(invalid)?;
				let index = rest[1..close].trim().parse().map_err(|_| invalid())?;
				segments.push(PathSegment::Index(index));
				rest = &rest[close + 1..];
				if !rest.is_empty() && !rest.starts_with('[') {
					return Err(invalid());
				}
			}
		}
		Ok(segments)
	}
}

fn unwrap<'a>(raw: &'a str, opening: &str) -> Option<&'a str> {
	raw.strip_prefix(opening)?.strip_suffix('}')
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("*{}", "")]
	#[case("*{ subscribed }", "subscribed")]
	#[case("${user}", "")]
	#[case("${user.tags[0]}", "tags[0]")]
	fn test_parse_paths(#[case] raw: &str, #[case] expected: &str) {
		let expression = FieldExpression::parse(raw, "user").unwrap();
		assert_eq!(expression.path(), expected);
	}

	#[rstest]
	#[case("subscribed")]
	#[case("${account.subscribed}")]
	#[case("${username}")]
	#[case("*{subscribed")]
	fn test_parse_rejects(#[case] raw: &str) {
		assert_eq!(
			FieldExpression::parse(raw, "user"),
			Err(BindingError::InvalidExpression(raw.to_string()))
		);
	}

	#[rstest]
	#[case("*{grid[1][3]}", vec![PathSegment::Property("grid"), PathSegment::Index(1), PathSegment::Index(3)])]
	#[case("*{a.b}", vec![PathSegment::Property("a"), PathSegment::Property("b")])]
	fn test_segments(#[case] raw: &str, #[case] expected: Vec<PathSegment<'static>>) {
		let expression = FieldExpression::parse(raw, "object").unwrap();
		assert_eq!(expression.segments().unwrap(), expected);
	}

	#[rstest]
	#[case("*{items[x]}")]
	#[case("*{items[1}")]
	#[case("*{a..b}")]
	#[case("*{items[0]name}")]
	fn test_segments_reject_malformed(#[case] raw: &str) {
		let expression = FieldExpression::parse(raw, "object").unwrap();
		assert!(expression.segments().is_err());
	}
}
