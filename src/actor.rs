use crate::{getter, Node, Object};

/// Federation-protocol accessors: delivery endpoints and social graph.
pub trait Actor: Object {
	fn preferred_username(&self) -> Option<&str> { None }
	fn inbox(&self) -> Node<serde_json::Value> { Node::Empty }
	fn outbox(&self) -> Node<serde_json::Value> { Node::Empty }
	fn following(&self) -> Node<serde_json::Value> { Node::Empty }
	fn followers(&self) -> Node<serde_json::Value> { Node::Empty }
	fn liked(&self) -> Node<serde_json::Value> { Node::Empty }
	fn shares(&self) -> Node<serde_json::Value> { Node::Empty }
	fn likes(&self) -> Node<serde_json::Value> { Node::Empty }
}

impl Actor for serde_json::Value {
	getter! { preferred_username::preferredUsername -> &str }
	getter! { inbox -> node }
	getter! { outbox -> node }
	getter! { following -> node }
	getter! { followers -> node }
	getter! { liked -> node }
	getter! { shares -> node }
	getter! { likes -> node }
}
