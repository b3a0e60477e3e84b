use crate::Base;

/// ActivityStreams 2.0 namespace, stripped off namespaced type names.
pub const AS_NS: &str = "https://www.w3.org/ns/activitystreams#";

/// vCard namespace, carrying free-form profile metadata.
pub const VCARD_NS: &str = "http://www.w3.org/2006/vcard/ns#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
	Link,
	Activity,
	Actor,
	Collection,
	Page,
	Plain,
}

/// declared type name without its namespace prefix
pub fn local_type(value: &serde_json::Value) -> Option<&str> {
	let t = value.type_name()?;
	Some(t.strip_prefix(AS_NS).unwrap_or(t))
}

/// type name the way AS1 consumers expect it: namespace stripped, lowercased
pub fn convert_type(t: &str) -> String {
	t.strip_prefix(AS_NS).unwrap_or(t).to_lowercase()
}

pub fn classify(value: &serde_json::Value) -> Classification {
	if is_link(value) {
		Classification::Link
	} else if is_activity(value) {
		Classification::Activity
	} else if is_actor(value) {
		Classification::Actor
	} else if is_collection(value) {
		Classification::Collection
	} else if is_page(value) {
		Classification::Page
	} else {
		Classification::Plain
	}
}

pub fn is_link(value: &serde_json::Value) -> bool {
	local_type(value) == Some("Link")
}

// Reserved: nothing classifies as an activity or actor yet, but the copier
// dispatch assumes both branches exist.
pub fn is_activity(_value: &serde_json::Value) -> bool {
	false
}

pub fn is_actor(_value: &serde_json::Value) -> bool {
	false
}

pub fn is_collection(value: &serde_json::Value) -> bool {
	matches!(local_type(value), Some("Collection" | "OrderedCollection"))
}

pub fn is_page(value: &serde_json::Value) -> bool {
	matches!(local_type(value), Some("CollectionPage" | "OrderedCollectionPage"))
}

/// true when a property value can stand in for a link: a bare URI, a typed
/// Link object, or an untyped object carrying an href
pub fn is_link_shaped(value: &serde_json::Value) -> bool {
	match value {
		serde_json::Value::String(_) => true,
		serde_json::Value::Object(_) => match local_type(value) {
			Some(t) => t == "Link",
			None => value.get("href").is_some(),
		},
		_ => false,
	}
}
