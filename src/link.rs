use crate::getter;

/// A reference to something else: a bare URI or a Link-shaped object.
pub trait Link {
	fn href(&self) -> Option<&str>;
	fn width(&self) -> Option<u64> { None }
	fn height(&self) -> Option<u64> { None }
}

impl Link for String {
	fn href(&self) -> Option<&str> {
		Some(self)
	}
}

impl Link for serde_json::Value {
	fn href(&self) -> Option<&str> {
		if self.is_string() {
			self.as_str()
		} else {
			self.get("href")?.as_str()
		}
	}

	getter! { width -> u64 }
	getter! { height -> u64 }
}
