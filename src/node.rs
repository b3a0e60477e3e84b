/// ActivityStreams property node, representing either nothing, a link to
/// something, one embedded object or multiple things
pub enum Node<T: crate::Base> {
	Array(std::collections::VecDeque<Node<T>>),
	Object(Box<T>),
	Link(Box<dyn crate::Link + Sync + Send>),
	Empty,
}

impl<T: crate::Base> Node<T> {
	/// reference to the embedded object (or the first one if many are present)
	pub fn get(&self) -> Option<&T> {
		match self {
			Node::Empty | Node::Link(_) => None,
			Node::Object(x) => Some(x),
			Node::Array(v) => v.iter().filter_map(|x| x.get()).next(),
		}
	}

	/// true only if Node holds nothing
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// number of contained entries (links count as entries)
	pub fn len(&self) -> usize {
		match self {
			Node::Empty => 0,
			Node::Link(_) => 1,
			Node::Object(_) => 1,
			Node::Array(v) => v.len(),
		}
	}

	/// first entry, whether it is a link or an embedded object
	pub fn first(&self) -> Option<&Node<T>> {
		match self {
			Node::Empty => None,
			// AP disallows arrays of arrays, no need to recurse
			Node::Array(v) => v.front(),
			_ => Some(self),
		}
	}

	/// id of the first entry: href for links, id for objects
	pub fn id(&self) -> Option<&str> {
		match self.first()? {
			Node::Link(uri) => uri.href(),
			Node::Object(obj) => obj.id(),
			_ => None,
		}
	}
}

impl Node<serde_json::Value> {
	/// first entry as its raw JSON value, links included
	pub fn first_value(&self) -> Option<serde_json::Value> {
		match self.first()? {
			Node::Link(uri) => Some(serde_json::Value::String(uri.href()?.to_string())),
			Node::Object(obj) => Some((**obj).clone()),
			_ => None,
		}
	}
}

impl From<serde_json::Value> for Node<serde_json::Value> {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::String(uri) => Node::Link(Box::new(uri)),
			serde_json::Value::Object(_) => Node::Object(Box::new(value)),
			serde_json::Value::Array(arr) => Node::Array(
				std::collections::VecDeque::from_iter(
					arr.into_iter()
						.map(Node::from)
				)
			),
			_ => Node::Empty,
		}
	}
}
