use crate::vocab::VCARD_NS;
use crate::Base;

use super::{As1Object, ConvertError};

/// Copy every vCard-namespaced property, known in advance or not, under a
/// nested `vcard` map keyed by the short property name.
pub(crate) fn copy_vcard_properties(imported: &serde_json::Value, copy: &mut As1Object) -> Result<(), ConvertError> {
	for key in imported.keys() {
		let Some(short) = key.strip_prefix(VCARD_NS) else { continue };
		// first value, scalars included, which is why this reads the raw
		// property instead of going through a node
		let value = match imported.property(&key) {
			Some(serde_json::Value::Array(arr)) => match arr.first() {
				Some(first) => first.clone(),
				None => continue,
			},
			Some(value) => value.clone(),
			None => continue,
		};
		let vcard = copy
			.entry("vcard")
			.or_insert_with(|| serde_json::Value::Object(As1Object::new()));
		if let Some(vcard) = vcard.as_object_mut() {
			vcard.insert(short.to_string(), value);
		}
	}

	Ok(())
}
