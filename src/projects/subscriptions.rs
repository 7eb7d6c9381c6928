//! Second-pass decoding of the `subscriptions` graph property.
//!
//! Graph search returns this property as a JSON document serialized into a
//! string, inside an already-JSON response. It has to be decoded again on its
//! own; the first pass only ever sees a string.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A cloud subscription linked to a project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Environment labels, first one is the primary.
    #[serde(default, deserialize_with = "null_as_default")]
    pub environments: Vec<String>,
    /// Whether the subscription is shared with other projects.
    #[serde(default, deserialize_with = "null_as_default")]
    pub shared_account: bool,
    /// Resource groups scoping a shared subscription.
    #[serde(default, deserialize_with = "null_as_default")]
    pub shared_resource_groups: Vec<Value>,
    /// Tags scoping a shared subscription.
    #[serde(default, deserialize_with = "null_as_default")]
    pub shared_tags: Map<String, Value>,
    /// Link status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Provider-side subscription id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_external_id: Option<String>,
    /// Wiz subscription id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscription_id: String,
}

// An explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Subscription {
    /// The first environment label, if any.
    #[must_use]
    pub fn primary_environment(&self) -> Option<&str> {
        self.environments.first().map(String::as_str)
    }
}

/// The `subscriptions` property could not be decoded.
#[derive(Debug, Error)]
#[error("failed to decode subscriptions property: {source}")]
pub struct SubscriptionDecodeError {
    #[source]
    source: serde_json::Error,
}

/// Decodes a stringified subscriptions list.
///
/// Blank input and `null` both decode to an empty list.
///
/// # Errors
///
/// Returns [`SubscriptionDecodeError`] if `raw` is not a JSON array of
/// subscription objects.
pub fn decode_subscriptions(raw: &str) -> Result<Vec<Subscription>, SubscriptionDecodeError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let decoded: Option<Vec<Subscription>> =
        serde_json::from_str(raw).map_err(|source| SubscriptionDecodeError { source })?;
    Ok(decoded.unwrap_or_default())
}

/// Serializes subscriptions into the stringified form the API stores.
///
/// # Errors
///
/// Returns [`SubscriptionDecodeError`] if a shared tag value cannot be
/// serialized.
pub fn encode_subscriptions(
    subscriptions: &[Subscription],
) -> Result<String, SubscriptionDecodeError> {
    serde_json::to_string(subscriptions).map_err(|source| SubscriptionDecodeError { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_minimal_subscription() {
        let raw = r#"[{"subscriptionId":"s1","environments":["PROD"],"sharedAccount":true}]"#;

        let subscriptions = decode_subscriptions(raw).unwrap();

        assert_eq!(
            subscriptions,
            vec![Subscription {
                subscription_id: "s1".to_string(),
                environments: vec!["PROD".to_string()],
                shared_account: true,
                ..Subscription::default()
            }]
        );
        assert_eq!(subscriptions[0].primary_environment(), Some("PROD"));
    }

    #[test]
    fn test_decodes_full_subscription() {
        let raw = json!([{
            "environments": ["PRODUCTION", "STAGING"],
            "sharedAccount": false,
            "sharedResourceGroups": ["rg-1"],
            "sharedTags": {"team": "core"},
            "status": "ACTIVE",
            "subscriptionExternalId": "123456789012",
            "subscriptionId": "s2"
        }])
        .to_string();

        let subscriptions = decode_subscriptions(&raw).unwrap();

        assert_eq!(subscriptions.len(), 1);
        let sub = &subscriptions[0];
        assert_eq!(sub.shared_resource_groups, vec![json!("rg-1")]);
        assert_eq!(sub.shared_tags["team"], json!("core"));
        assert_eq!(sub.status.as_deref(), Some("ACTIVE"));
        assert_eq!(sub.subscription_external_id.as_deref(), Some("123456789012"));
    }

    #[test]
    fn test_blank_and_null_decode_to_empty() {
        assert!(decode_subscriptions("").unwrap().is_empty());
        assert!(decode_subscriptions("   ").unwrap().is_empty());
        assert!(decode_subscriptions("null").unwrap().is_empty());
        assert!(decode_subscriptions("[]").unwrap().is_empty());
    }

    #[test]
    fn test_null_fields_decode_to_defaults() {
        let raw = r#"[{
            "subscriptionId": "s1",
            "environments": null,
            "sharedAccount": null,
            "sharedResourceGroups": null,
            "sharedTags": null,
            "status": null,
            "subscriptionExternalId": null
        }]"#;

        let subscriptions = decode_subscriptions(raw).unwrap();

        assert_eq!(
            subscriptions,
            vec![Subscription {
                subscription_id: "s1".to_string(),
                ..Subscription::default()
            }]
        );
        assert_eq!(subscriptions[0].primary_environment(), None);
    }

    #[test]
    fn test_resource_groups_accept_objects() {
        let raw = r#"[{"subscriptionId":"s1","sharedResourceGroups":[{"name":"rg"},"rg-2"]}]"#;

        let subscriptions = decode_subscriptions(raw).unwrap();

        assert_eq!(
            subscriptions[0].shared_resource_groups,
            vec![json!({"name": "rg"}), json!("rg-2")]
        );
    }

    #[test]
    fn test_malformed_input_is_an_error_not_a_panic() {
        let err = decode_subscriptions("[{\"subscriptionId\":").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("failed to decode subscriptions property:"));

        assert!(decode_subscriptions(r#"{"subscriptionId":"s1"}"#).is_err());
        assert!(decode_subscriptions(r#"[{"environments":"PROD"}]"#).is_err());
    }

    #[test]
    fn test_encoded_list_decodes_to_same_list_in_order() {
        let original = vec![
            Subscription {
                subscription_id: "s1".to_string(),
                environments: vec!["PROD".to_string()],
                shared_account: true,
                status: Some("ACTIVE".to_string()),
                ..Subscription::default()
            },
            Subscription {
                subscription_id: "s2".to_string(),
                environments: vec!["DEV".to_string(), "TEST".to_string()],
                shared_resource_groups: vec![json!("rg"), json!({"name": "rg-2"})],
                subscription_external_id: Some("ext-2".to_string()),
                ..Subscription::default()
            },
        ];

        let encoded = encode_subscriptions(&original).unwrap();
        assert_eq!(decode_subscriptions(&encoded).unwrap(), original);
    }

    #[test]
    fn test_decode_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SubscriptionDecodeError>();
    }
}
