pub mod object;
pub mod activitypub;
pub mod vcard;
pub mod custom;

use crate::vocab::{classify, Classification};

/// AS1-shaped output: a plain nested map.
pub type As1Object = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
	#[error("input is not an ActivityStreams value")]
	InvalidInput,

	#[error("field '{0}' does not hold a valid date")]
	MalformedTimestamp(&'static str),

	#[error("failed converting embedded '{relation}' collection: {source}")]
	SubConversionFailed {
		relation: &'static str,
		#[source]
		source: Box<ConvertError>,
	},

	#[error("custom copier for type '{type_name}' failed: {source}")]
	CustomCopierFailed {
		type_name: String,
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
}

/// Downconvert one AS2 value into its AS1 map shape.
///
/// Links produce the (still empty) link mapping; everything else goes through
/// the base copier, its classification's own copier, the ActivityPub and
/// vCard extension copiers and finally any registered custom copier. Embedded
/// social-graph collections are converted recursively with this same
/// function. The first stage to fail aborts the whole conversion; partial
/// output is never returned.
#[async_recursion::async_recursion]
pub async fn convert(input: &serde_json::Value) -> Result<As1Object, ConvertError> {
	if !input.is_object() && !input.is_string() {
		tracing::error!("refusing to convert non-object input");
		return Err(ConvertError::InvalidInput);
	}

	let mut copy = As1Object::new();
	let class = classify(input);

	if class == Classification::Link {
		copy_link_properties(input, &mut copy)?;
		return Ok(copy);
	}

	object::copy_object_properties(input, &mut copy)?;

	match class {
		Classification::Activity => copy_activity_properties(input, &mut copy)?,
		Classification::Actor => copy_actor_properties(input, &mut copy)?,
		Classification::Collection => copy_collection_properties(input, &mut copy)?,
		Classification::Page => copy_page_properties(input, &mut copy)?,
		Classification::Link | Classification::Plain => {},
	}

	activitypub::copy_activitypub_properties(input, &mut copy).await?;
	vcard::copy_vcard_properties(input, &mut copy)?;
	custom::copy_custom_properties(input, &mut copy)?;

	Ok(copy)
}

/// Links don't carry anything over yet.
fn copy_link_properties(imported: &serde_json::Value, _copy: &mut As1Object) -> Result<(), ConvertError> {
	debug_assert!(classify(imported) == Classification::Link);
	// TODO href, id, name, hreflang, mediaType, rel, height, width
	Ok(())
}

fn copy_activity_properties(imported: &serde_json::Value, _copy: &mut As1Object) -> Result<(), ConvertError> {
	debug_assert!(classify(imported) == Classification::Activity);
	// TODO actor, object, target, origin, result, instrument
	Ok(())
}

fn copy_actor_properties(imported: &serde_json::Value, _copy: &mut As1Object) -> Result<(), ConvertError> {
	debug_assert!(classify(imported) == Classification::Actor);
	Ok(())
}

fn copy_collection_properties(imported: &serde_json::Value, _copy: &mut As1Object) -> Result<(), ConvertError> {
	debug_assert!(classify(imported) == Classification::Collection);
	// TODO items, orderedItems, totalItems, first, last, current
	Ok(())
}

fn copy_page_properties(imported: &serde_json::Value, _copy: &mut As1Object) -> Result<(), ConvertError> {
	debug_assert!(classify(imported) == Classification::Page);
	// TODO partOf, next, prev and the collection properties
	Ok(())
}
