use crate::getter;

/// Read surface every ActivityStreams value exposes, no matter its type.
pub trait Base {
	fn id(&self) -> Option<&str> { None }

	/// declared type name, exactly as found on the wire: possibly namespaced
	fn type_name(&self) -> Option<&str> { None }

	/// raw value of a named property, known in advance or not
	fn property(&self, name: &str) -> Option<&serde_json::Value>;

	fn has(&self, name: &str) -> bool {
		self.property(name).is_some()
	}

	/// every property key this value declares, including namespaced ones
	fn keys(&self) -> Vec<String>;
}

impl Base for serde_json::Value {
	getter! { id -> &str }

	fn type_name(&self) -> Option<&str> {
		match self {
			// a bare uri stands for a link to something else
			serde_json::Value::String(_) => Some("Link"),
			_ => self.get("type")?.as_str(),
		}
	}

	fn property(&self, name: &str) -> Option<&serde_json::Value> {
		self.get(name)
	}

	fn keys(&self) -> Vec<String> {
		match self.as_object() {
			Some(map) => map.keys().cloned().collect(),
			None => Vec::new(),
		}
	}
}
