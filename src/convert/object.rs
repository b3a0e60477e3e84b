use crate::vocab::{classify, convert_type, is_link_shaped, Classification};
use crate::{Base, Link, Node, Object};

use super::{As1Object, ConvertError};

/// Copy the vocabulary-independent properties every non-link value carries:
/// type name, id with its self link, text fields, timestamps and the
/// image/icon resolution.
pub(crate) fn copy_object_properties(imported: &serde_json::Value, copy: &mut As1Object) -> Result<(), ConvertError> {
	let class = classify(imported);
	let container = matches!(class, Classification::Collection | Classification::Page);

	if let Some(t) = imported.type_name() {
		if class == Classification::Activity {
			copy.insert("verb".to_string(), convert_type(t).into());
		} else if !container {
			copy.insert("objectType".to_string(), convert_type(t).into());
		}
	}

	if !container {
		if let Some(id) = imported.id() {
			copy.insert("id".to_string(), id.into());
			add_link(copy, "self", id);
		}
	}

	if let Some(name) = imported.name() {
		copy.insert("displayName".to_string(), name.into());
	}

	if let Some(summary) = imported.summary() {
		copy.insert("summary".to_string(), summary.into());
	}

	if let Some(date) = iso_date(imported, "published", |x| x.published())? {
		copy.insert("published".to_string(), date.into());
	}

	if let Some(date) = iso_date(imported, "updated", |x| x.updated())? {
		copy.insert("updated".to_string(), date.into());
	}

	if let Some(content) = imported.content() {
		copy.insert("content".to_string(), content.into());

		// mediaType only means anything as an indicator of the content media
		// type, so copy it only when content is set
		if let Some(media_type) = imported.media_type() {
			copy.insert("dc".to_string(), serde_json::json!({ "format": media_type }));
		}
	}

	if let Some(date) = iso_date(imported, "endTime", |x| x.end_time())? {
		copy.insert("endTime".to_string(), date.into());
	}

	if let Some(date) = iso_date(imported, "startTime", |x| x.start_time())? {
		copy.insert("startTime".to_string(), date.into());
	}

	if let Some(duration) = imported.duration() {
		copy.insert("duration".to_string(), duration.into());
	}

	// image first, icon only as fallback, and only ever the first entry
	for node in [imported.image(), imported.icon()] {
		let Some(first) = node.first() else { continue };
		let resolved = match first {
			Node::Link(link) => write_image(copy, link.as_ref()),
			Node::Object(obj) if is_link_shaped(obj.as_ref()) => write_image(copy, obj.as_ref()),
			Node::Object(obj) => {
				let url = obj.url();
				match url.first() {
					Some(Node::Link(link)) => write_image(copy, link.as_ref()),
					Some(Node::Object(entry)) if is_link_shaped(entry.as_ref()) => write_image(copy, entry.as_ref()),
					_ => false,
				}
			},
			_ => false,
		};
		if resolved {
			break;
		}
	}

	// TODO attachment, attributedTo, audience, context, generator, inReplyTo,
	// TODO location, preview, replies, tag, url, to, bto, cc, bcc

	Ok(())
}

/// Nest an `{href}` mapping under the given relation name, creating the
/// `links` substructure on first use.
pub(crate) fn add_link(copy: &mut As1Object, rel: &str, href: &str) {
	let links = copy
		.entry("links")
		.or_insert_with(|| serde_json::Value::Object(As1Object::new()));
	if let Some(links) = links.as_object_mut() {
		links.insert(rel.to_string(), serde_json::json!({ "href": href }));
	}
}

/// A date field that is present but unreadable fails the conversion, absent
/// ones are skipped.
fn iso_date(
	imported: &serde_json::Value,
	field: &'static str,
	get: impl Fn(&serde_json::Value) -> Option<chrono::DateTime<chrono::Utc>>,
) -> Result<Option<String>, ConvertError> {
	if !imported.has(field) {
		return Ok(None);
	}
	match get(imported) {
		Some(date) => Ok(Some(date.to_rfc3339())),
		None => Err(ConvertError::MalformedTimestamp(field)),
	}
}

fn write_image(copy: &mut As1Object, link: &dyn Link) -> bool {
	let mut image = As1Object::new();
	if let Some(href) = link.href() {
		image.insert("url".to_string(), href.into());
	}
	if let Some(width) = link.width() {
		image.insert("width".to_string(), width.into());
	}
	if let Some(height) = link.height() {
		image.insert("height".to_string(), height.into());
	}
	copy.insert("image".to_string(), serde_json::Value::Object(image));
	true
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn plain_values_link_to_themselves() {
		let input = serde_json::json!({
			"type": "Note",
			"id": "https://example.test/n/1",
		});
		let mut copy = As1Object::new();

		copy_object_properties(&input, &mut copy).expect("copy failed");

		assert_eq!(copy.get("id"), Some(&serde_json::json!("https://example.test/n/1")));
		assert_eq!(
			copy.get("links"),
			Some(&serde_json::json!({"self": {"href": "https://example.test/n/1"}}))
		);
	}

	#[test]
	fn containers_get_no_self_link() {
		for t in ["Collection", "OrderedCollection", "CollectionPage", "OrderedCollectionPage"] {
			let input = serde_json::json!({
				"type": t,
				"id": "https://example.test/c",
			});
			let mut copy = As1Object::new();

			copy_object_properties(&input, &mut copy).expect("copy failed");

			assert!(copy.get("id").is_none(), "{t} kept its id");
			assert!(copy.get("links").is_none(), "{t} got a self link");
			assert!(copy.get("objectType").is_none(), "{t} got an objectType");
		}
	}

	#[test]
	fn image_wins_over_icon() {
		let input = serde_json::json!({
			"type": "Person",
			"image": [{"href": "https://example.test/a.png"}],
			"icon": [{"href": "https://example.test/b.png"}],
		});
		let mut copy = As1Object::new();

		copy_object_properties(&input, &mut copy).expect("copy failed");

		assert_eq!(copy.get("image"), Some(&serde_json::json!({"url": "https://example.test/a.png"})));
	}

	#[test]
	fn icon_fills_in_when_image_is_missing() {
		let input = serde_json::json!({
			"type": "Person",
			"icon": [{"href": "https://example.test/b.png", "width": 64, "height": 64}],
		});
		let mut copy = As1Object::new();

		copy_object_properties(&input, &mut copy).expect("copy failed");

		assert_eq!(
			copy.get("image"),
			Some(&serde_json::json!({"url": "https://example.test/b.png", "width": 64, "height": 64}))
		);
	}

	#[test]
	fn image_resolves_one_level_through_url() {
		let input = serde_json::json!({
			"type": "Person",
			"image": [{"url": [{"href": "https://example.test/c.png", "width": 10}]}],
		});
		let mut copy = As1Object::new();

		copy_object_properties(&input, &mut copy).expect("copy failed");

		assert_eq!(
			copy.get("image"),
			Some(&serde_json::json!({"url": "https://example.test/c.png", "width": 10}))
		);
	}

	#[test]
	fn bare_uri_images_resolve_too() {
		let input = serde_json::json!({
			"type": "Person",
			"image": "https://example.test/a.png",
		});
		let mut copy = As1Object::new();

		copy_object_properties(&input, &mut copy).expect("copy failed");

		assert_eq!(copy.get("image"), Some(&serde_json::json!({"url": "https://example.test/a.png"})));
	}

	#[test]
	fn timestamps_normalize_to_utc_iso8601() {
		let input = serde_json::json!({
			"type": "Note",
			"published": "2018-06-04T19:09:20+02:00",
		});
		let mut copy = As1Object::new();

		copy_object_properties(&input, &mut copy).expect("copy failed");

		let published = copy.get("published").and_then(|x| x.as_str()).expect("published missing");
		let parsed = chrono::DateTime::parse_from_rfc3339(published).expect("not parseable back");
		assert_eq!(parsed.timestamp(), 1528132160);
	}

	#[test]
	fn unreadable_timestamps_are_an_error() {
		let input = serde_json::json!({
			"type": "Note",
			"updated": "not-a-date",
		});
		let mut copy = As1Object::new();

		assert!(matches!(
			copy_object_properties(&input, &mut copy),
			Err(ConvertError::MalformedTimestamp("updated"))
		));
	}

	#[test]
	fn media_type_is_only_kept_together_with_content() {
		let without_content = serde_json::json!({
			"type": "Note",
			"mediaType": "text/html",
		});
		let mut copy = As1Object::new();
		copy_object_properties(&without_content, &mut copy).expect("copy failed");
		assert!(copy.get("dc").is_none());

		let with_content = serde_json::json!({
			"type": "Note",
			"content": "<p>hi</p>",
			"mediaType": "text/html",
		});
		let mut copy = As1Object::new();
		copy_object_properties(&with_content, &mut copy).expect("copy failed");
		assert_eq!(copy.get("dc"), Some(&serde_json::json!({"format": "text/html"})));
	}

	#[test]
	fn name_and_summary_become_display_fields() {
		let input = serde_json::json!({
			"type": "Person",
			"name": "Al",
			"summary": "a person",
			"duration": "PT2H",
		});
		let mut copy = As1Object::new();

		copy_object_properties(&input, &mut copy).expect("copy failed");

		assert_eq!(copy.get("displayName"), Some(&serde_json::json!("Al")));
		assert_eq!(copy.get("summary"), Some(&serde_json::json!("a person")));
		assert_eq!(copy.get("duration"), Some(&serde_json::json!("PT2H")));
	}
}
