//! Dotted-path addressing into a draft's JSON form.
//!
//! Paths name object keys by their stored (camelCase) name and list elements
//! by index: `supplies.bicycle`, `villages.0.population`.

use serde_json::Value;

/// Replaces the value at `path`, inserting the final key into an object if it
/// is absent (unset optional fields are omitted from the JSON form).
pub(crate) fn set_path(root: &mut Value, path: &str, value: Value) -> Result<(), String> {
	let segments: Vec<&str> = path.split('.').collect();
	if segments.iter().any(|s| s.is_empty()) {
		return Err("empty path segment".to_string());
	}
	let (last, parents) = segments
		.split_last()
		.ok_or_else(|| "empty path".to_string())?;

	let mut current = root;
	for segment in parents {
		current = child_mut(current, segment)?;
	}

	match current {
		Value::Object(map) => {
			map.insert((*last).to_string(), value);
			Ok(())
		}
		Value::Array(items) => {
			let index = parse_index(last, items.len())?;
			items[index] = value;
			Ok(())
		}
		_ => Err(format!("'{}' is not a container", last)),
	}
}

pub(crate) fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
	path.split('.').try_fold(root, |current, segment| match current {
		Value::Object(map) => map.get(segment),
		Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
		_ => None,
	})
}

/// Whether `actual` holds what was written as `expected`.
///
/// Numbers compare by value (`3` matches `3.0`), `null` matches an omitted
/// field, and objects only need to agree on the keys that were written.
pub(crate) fn written_as(expected: &Value, actual: Option<&Value>) -> bool {
	match (expected, actual) {
		(Value::Null, None | Some(Value::Null)) => true,
		(Value::Number(a), Some(Value::Number(b))) => a.as_f64() == b.as_f64(),
		(Value::Object(expected), Some(Value::Object(actual))) => expected
			.iter()
			.all(|(key, value)| written_as(value, actual.get(key))),
		(Value::Array(expected), Some(Value::Array(actual))) => {
			expected.len() == actual.len()
				&& expected
					.iter()
					.zip(actual)
					.all(|(e, a)| written_as(e, Some(a)))
		}
		(expected, Some(actual)) => expected == actual,
		(_, None) => false,
	}
}

fn child_mut<'a>(current: &'a mut Value, segment: &str) -> Result<&'a mut Value, String> {
	match current {
		Value::Object(map) => map
			.get_mut(segment)
			.ok_or_else(|| format!("'{}' is not set", segment)),
		Value::Array(items) => {
			let index = parse_index(segment, items.len())?;
			Ok(&mut items[index])
		}
		_ => Err(format!("'{}' is not a container", segment)),
	}
}

fn parse_index(segment: &str, len: usize) -> Result<usize, String> {
	let index: usize = segment
		.parse()
		.map_err(|_| format!("'{}' is not a list index", segment))?;
	if index >= len {
		return Err(format!("index {} is out of range for a list of {}", index, len));
	}
	Ok(index)
}
