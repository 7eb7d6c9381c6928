//! Response shapes returned by the project operations.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::projects::input::ResourceTag;
use crate::projects::subscriptions::{decode_subscriptions, Subscription, SubscriptionDecodeError};

/// `data` of a `CreateProject` mutation.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectResponse {
    /// The mutation payload.
    pub create_project: CreateProjectPayload,
}

/// Payload of `createProject`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CreateProjectPayload {
    /// The created project.
    pub project: ProjectRef,
}

/// Reference to a project by id.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ProjectRef {
    /// Project id. The API may omit it on partial failures.
    pub id: Option<String>,
}

impl CreateProjectResponse {
    /// Id of the created project, if reported.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.create_project.project.id.as_deref()
    }
}

/// `data` of an `UpdateProject` mutation.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectResponse {
    /// The mutation payload.
    pub update_project: UpdateProjectPayload,
}

/// Payload of `updateProject`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateProjectPayload {
    /// The project after the update.
    pub project: UpdatedProject,
}

/// Project as echoed back by `updateProject`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProject {
    /// Project id.
    pub id: String,
    /// Project name.
    pub name: Option<String>,
    /// External identifiers.
    #[serde(default)]
    pub identifiers: Vec<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Owning business unit.
    pub business_unit: Option<String>,
    /// Linked cloud accounts.
    #[serde(default)]
    pub cloud_account_links: Vec<LinkedCloudAccount>,
    /// Risk profile as stored by the API.
    pub risk_profile: Option<Value>,
}

/// A cloud account link as stored by the API.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedCloudAccount {
    /// The linked account.
    pub cloud_account: ObjectId,
    /// Environment label.
    pub environment: Option<String>,
    /// Whether the account is shared.
    #[serde(default)]
    pub shared: bool,
    /// Tags scoping a shared account.
    #[serde(default)]
    pub resource_tags: Vec<ResourceTag>,
    /// Resource groups scoping a shared account.
    #[serde(default)]
    pub resource_groups: Vec<String>,
}

/// `{ id }` object reference.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ObjectId {
    /// Object id.
    pub id: String,
}

/// `data` of a `GraphSearch` query.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectResponse {
    /// Search result.
    pub graph_search: GraphSearchPage,
}

impl GetProjectResponse {
    /// First entity of the first node, if any.
    #[must_use]
    pub fn first_entity(&self) -> Option<&ProjectEntity> {
        self.graph_search
            .nodes
            .iter()
            .find_map(|node| node.entities.first())
    }

    /// Consumes the response, returning the first entity.
    #[must_use]
    pub fn into_first_entity(self) -> Option<ProjectEntity> {
        self.graph_search
            .nodes
            .into_iter()
            .find_map(|node| node.entities.into_iter().next())
    }
}

/// One page of graph search results.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphSearchPage {
    /// Total match count, present when `fetchTotalCount` was set.
    pub total_count: Option<i64>,
    /// Whether the count hit the server limit.
    pub max_count_reached: Option<bool>,
    /// Cursor information. Only the first page is ever read.
    pub page_info: PageInfo,
    /// Result nodes.
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
}

/// Pagination cursor.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the last returned node.
    pub end_cursor: Option<String>,
    /// Whether more pages exist.
    #[serde(default)]
    pub has_next_page: bool,
}

/// A graph search node.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphNode {
    /// Entities in this node.
    #[serde(default)]
    pub entities: Vec<ProjectEntity>,
}

/// A project as returned by graph search.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntity {
    /// Entity id.
    pub id: Option<String>,
    /// Entity name.
    pub name: Option<String>,
    /// Entity type, `PROJECT` for every entity read here.
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Graph properties.
    #[serde(default)]
    pub properties: ProjectProperties,
    /// The untouched source object.
    pub original_object: Option<Value>,
}

impl ProjectEntity {
    /// Decodes the stringified `subscriptions` property.
    ///
    /// An absent or empty property yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionDecodeError`] if the property is not a JSON
    /// array of subscriptions.
    pub fn subscriptions(&self) -> Result<Vec<Subscription>, SubscriptionDecodeError> {
        decode_subscriptions(self.properties.subscriptions.as_deref().unwrap_or_default())
    }
}

/// Graph properties of a project entity.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProperties {
    /// Internal graph vertex id.
    #[serde(rename = "_vertexID")]
    pub vertex_id: Option<String>,
    /// Business impact rating.
    pub business_impact: Option<String>,
    /// Owning business unit; the API may send a string or null.
    pub business_unit: Option<Value>,
    /// Description; the API may send a string or null.
    pub description: Option<Value>,
    /// External id.
    pub external_id: Option<String>,
    /// Project id.
    pub id: Option<String>,
    /// Project name.
    pub name: Option<String>,
    /// Product category.
    pub product_category: Option<String>,
    /// Product sub-category.
    pub product_sub_category: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Stringified JSON array of linked subscriptions.
    pub subscriptions: Option<String>,
    /// Last modification time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Every other property.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search_response(entities: Value) -> GetProjectResponse {
        serde_json::from_value(json!({
            "graphSearch": {
                "totalCount": 1,
                "maxCountReached": false,
                "pageInfo": {"endCursor": "c1", "hasNextPage": false},
                "nodes": [{"entities": entities}]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_create_response_exposes_id() {
        let response: CreateProjectResponse = serde_json::from_value(json!({
            "createProject": {"project": {"id": "proj-id"}}
        }))
        .unwrap();
        assert_eq!(response.project_id(), Some("proj-id"));
    }

    #[test]
    fn test_update_response_decodes_data_directly() {
        let response: UpdateProjectResponse = serde_json::from_value(json!({
            "updateProject": {
                "project": {
                    "id": "proj-id",
                    "name": "proj-b",
                    "identifiers": [],
                    "description": null,
                    "businessUnit": "",
                    "cloudAccountLinks": [{
                        "cloudAccount": {"id": "acct-1"},
                        "environment": "PRODUCTION",
                        "resourceTags": [{"key": "team", "value": "core"}],
                        "shared": true,
                        "resourceGroups": []
                    }],
                    "riskProfile": {"businessImpact": "MBI"}
                }
            }
        }))
        .unwrap();

        let project = response.update_project.project;
        assert_eq!(project.id, "proj-id");
        assert_eq!(project.cloud_account_links[0].cloud_account.id, "acct-1");
        assert_eq!(project.cloud_account_links[0].resource_tags[0].key, "team");
        assert!(project.cloud_account_links[0].shared);
    }

    #[test]
    fn test_graph_search_keeps_properties_and_extras() {
        let response = search_response(json!([{
            "id": "proj-id",
            "name": "proj-a",
            "type": "PROJECT",
            "properties": {
                "_vertexID": "v-1",
                "businessUnit": null,
                "name": "proj-a",
                "subscriptions": "[]",
                "updatedAt": "2023-03-01T10:00:00Z",
                "isFolder": false
            },
            "originalObject": null
        }]));

        let entity = response.first_entity().unwrap();
        assert_eq!(entity.entity_type, "PROJECT");
        assert_eq!(entity.properties.vertex_id.as_deref(), Some("v-1"));
        assert_eq!(
            entity.properties.updated_at.unwrap().to_rfc3339(),
            "2023-03-01T10:00:00+00:00"
        );
        assert_eq!(entity.properties.other["isFolder"], json!(false));
        assert!(entity.original_object.is_none());
    }

    #[test]
    fn test_first_entity_of_empty_search_is_none() {
        let response = search_response(json!([]));
        assert!(response.first_entity().is_none());
        assert!(response.into_first_entity().is_none());
    }

    #[test]
    fn test_missing_subscriptions_property_decodes_to_empty_list() {
        let response = search_response(json!([{
            "id": "proj-id",
            "name": "proj-a",
            "type": "PROJECT",
            "properties": {}
        }]));

        let entity = response.into_first_entity().unwrap();
        assert!(entity.subscriptions().unwrap().is_empty());
    }
}
