use crate::{Actor, Node};

use super::object::add_link;
use super::{convert, As1Object, ConvertError};

/// Copy the ActivityPub extension properties: delivery endpoints become
/// links, the social-graph collections get converted recursively and
/// flattened into collection properties.
pub(crate) async fn copy_activitypub_properties(imported: &serde_json::Value, copy: &mut As1Object) -> Result<(), ConvertError> {
	if let Some(href) = imported.inbox().id() {
		add_link(copy, "activity-inbox", href);
	}

	if let Some(href) = imported.outbox().id() {
		add_link(copy, "activity-outbox", href);
	}

	if let Some(username) = imported.preferred_username() {
		copy.insert("preferredUsername".to_string(), username.into());
	}

	// TODO source, streams, endpoints, proxyUrl, oauthAuthorizationEndpoint,
	// TODO oauthTokenEndpoint, provideClientKey, signClientKey, sharedInbox

	// the five relations don't depend on each other: convert them all at
	// once, then merge in fixed relation order, liked landing under the
	// favorites key
	let relations: [(&'static str, &'static str, Node<serde_json::Value>); 5] = [
		("following", "following", imported.following()),
		("followers", "followers", imported.followers()),
		("liked", "favorites", imported.liked()),
		("shares", "shares", imported.shares()),
		("likes", "likes", imported.likes()),
	];

	let conversions = futures::future::join_all(
		relations
			.into_iter()
			.map(|(relation, key, node)| convert_graph_relation(relation, key, node))
	).await;

	for conversion in conversions {
		if let (key, Some(sub)) = conversion? {
			copy.insert(key.to_string(), serde_json::Value::Object(to_collection_property(sub)));
		}
	}

	Ok(())
}

async fn convert_graph_relation(
	relation: &'static str,
	key: &'static str,
	node: Node<serde_json::Value>,
) -> Result<(&'static str, Option<As1Object>), ConvertError> {
	if node.is_empty() {
		return Ok((key, None));
	}
	let Some(first) = node.first_value() else {
		tracing::warn!("ignoring unreadable first entry of '{relation}' collection");
		return Ok((key, None));
	};
	match convert(&first).await {
		Ok(sub) => Ok((key, Some(sub))),
		Err(e) => Err(ConvertError::SubConversionFailed {
			relation,
			source: Box::new(e),
		}),
	}
}

/// Flatten a converted collection into the link-like property shape AS1
/// consumers read: the self link hoisted to `url`, the remaining links kept,
/// everything else merged except `id` and `objectType`.
pub(crate) fn to_collection_property(mut converted: As1Object) -> As1Object {
	let mut res = As1Object::new();

	let mut links = match converted.remove("links") {
		Some(serde_json::Value::Object(links)) => links,
		_ => As1Object::new(),
	};

	match links.remove("self").and_then(|s| s.get("href").cloned()) {
		Some(href) => {
			res.insert("url".to_string(), href);
		},
		None => {
			if let Some(url) = converted.get("url") {
				res.insert("url".to_string(), url.clone());
			}
		},
	}

	if !links.is_empty() {
		res.insert("links".to_string(), serde_json::Value::Object(links));
	}

	converted.remove("url");
	converted.remove("id");
	converted.remove("objectType");
	for (key, value) in converted {
		res.insert(key, value);
	}

	res
}
