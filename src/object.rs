use crate::{getter, Base, Node};

/// Vocabulary-independent accessors common to every non-link value.
pub trait Object: Base {
	fn name(&self) -> Option<&str> { None }
	fn summary(&self) -> Option<&str> { None }
	fn content(&self) -> Option<&str> { None } // TODO handle language maps
	fn media_type(&self) -> Option<&str> { None }
	fn duration(&self) -> Option<&str> { None }
	fn published(&self) -> Option<chrono::DateTime<chrono::Utc>> { None }
	fn updated(&self) -> Option<chrono::DateTime<chrono::Utc>> { None }
	fn start_time(&self) -> Option<chrono::DateTime<chrono::Utc>> { None }
	fn end_time(&self) -> Option<chrono::DateTime<chrono::Utc>> { None }
	fn image(&self) -> Node<serde_json::Value> { Node::Empty }
	fn icon(&self) -> Node<serde_json::Value> { Node::Empty }
	fn url(&self) -> Node<serde_json::Value> { Node::Empty }
}

impl Object for serde_json::Value {
	getter! { name -> &str }
	getter! { summary -> &str }
	getter! { content -> &str }
	getter! { media_type::mediaType -> &str }
	getter! { duration -> &str }
	getter! { published -> chrono::DateTime<chrono::Utc> }
	getter! { updated -> chrono::DateTime<chrono::Utc> }
	getter! { start_time::startTime -> chrono::DateTime<chrono::Utc> }
	getter! { end_time::endTime -> chrono::DateTime<chrono::Utc> }
	getter! { image -> node }
	getter! { icon -> node }
	getter! { url -> node }
}
