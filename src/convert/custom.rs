use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::vocab::local_type;

use super::{As1Object, ConvertError};

/// Per-type conversion strategy, invoked after every builtin copier ran.
pub trait CustomCopier: Send + Sync {
	fn copy(
		&self,
		imported: &serde_json::Value,
		copy: &mut As1Object,
	) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

impl<F> CustomCopier for F
where
	F: Fn(&serde_json::Value, &mut As1Object) -> Result<(), Box<dyn std::error::Error + Send + Sync>> + Send + Sync,
{
	fn copy(&self, imported: &serde_json::Value, copy: &mut As1Object) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		self(imported, copy)
	}
}

fn registry() -> &'static RwLock<HashMap<String, Arc<dyn CustomCopier>>> {
	static REGISTRY: OnceLock<RwLock<HashMap<String, Arc<dyn CustomCopier>>>> = OnceLock::new();
	REGISTRY.get_or_init(Default::default)
}

/// Register a copier for a local type name, to run at startup before any
/// conversion. Registering the same name twice replaces the first copier.
pub fn register_custom_copier(type_name: impl Into<String>, copier: impl CustomCopier + 'static) {
	registry()
		.write()
		.expect("custom copier registry poisoned")
		.insert(type_name.into(), Arc::new(copier));
}

pub(crate) fn copy_custom_properties(imported: &serde_json::Value, copy: &mut As1Object) -> Result<(), ConvertError> {
	let Some(type_name) = local_type(imported) else { return Ok(()) };
	let copier = registry()
		.read()
		.expect("custom copier registry poisoned")
		.get(type_name)
		.cloned();
	let Some(copier) = copier else { return Ok(()) };
	copier
		.copy(imported, copy)
		.map_err(|e| ConvertError::CustomCopierFailed {
			type_name: type_name.to_string(),
			source: e,
		})
}

#[cfg(test)]
mod test {
	use super::*;

	#[tokio::test]
	async fn registered_copier_runs_for_its_type() {
		register_custom_copier(
			"Gadget",
			|_imported: &serde_json::Value, copy: &mut As1Object| -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
				copy.insert("gadget".to_string(), serde_json::Value::Bool(true));
				Ok(())
			},
		);

		let input = serde_json::json!({
			"type": "Gadget",
			"id": "https://example.test/g",
		});

		let converted = crate::convert(&input).await.expect("conversion failed");

		assert_eq!(converted.get("gadget"), Some(&serde_json::Value::Bool(true)));
	}

	#[tokio::test]
	async fn failing_copier_aborts_the_conversion() {
		register_custom_copier(
			"Firecracker",
			|_imported: &serde_json::Value, _copy: &mut As1Object| -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
				Err("went off early".into())
			},
		);

		let input = serde_json::json!({"type": "Firecracker"});

		assert!(matches!(
			crate::convert(&input).await,
			Err(ConvertError::CustomCopierFailed { type_name, .. }) if type_name == "Firecracker"
		));
	}

	#[test]
	fn unknown_types_are_left_alone() {
		let input = serde_json::json!({"type": "Widget"});
		let mut copy = As1Object::new();

		copy_custom_properties(&input, &mut copy).expect("dispatch failed");

		assert!(copy.is_empty());
	}
}
