macro_rules! getter {
	($name:ident -> &str) => {
		fn $name(&self) -> Option<&str> {
			self.get(stringify!($name))?.as_str()
		}
	};

	($name:ident::$rename:ident -> &str) => {
		fn $name(&self) -> Option<&str> {
			self.get(stringify!($rename))?.as_str()
		}
	};

	($name:ident -> u64) => {
		fn $name(&self) -> Option<u64> {
			self.get(stringify!($name))?.as_u64()
		}
	};

	($name:ident -> chrono::DateTime<chrono::Utc>) => {
		fn $name(&self) -> Option<chrono::DateTime<chrono::Utc>> {
			Some(
				chrono::DateTime::parse_from_rfc3339(
						self
							.get(stringify!($name))?
							.as_str()?
					)
					.ok()?
					.with_timezone(&chrono::Utc)
			)
		}
	};

	($name:ident::$rename:ident -> chrono::DateTime<chrono::Utc>) => {
		fn $name(&self) -> Option<chrono::DateTime<chrono::Utc>> {
			Some(
				chrono::DateTime::parse_from_rfc3339(
						self
							.get(stringify!($rename))?
							.as_str()?
					)
					.ok()?
					.with_timezone(&chrono::Utc)
			)
		}
	};

	($name:ident -> node) => {
		fn $name(&self) -> $crate::Node<serde_json::Value> {
			match self.get(stringify!($name)) {
				Some(x) => $crate::Node::from(x.clone()),
				None => $crate::Node::Empty,
			}
		}
	};
}

pub(crate) use getter;
