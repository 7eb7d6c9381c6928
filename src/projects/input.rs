//! Request shapes for the project mutations and the graph search query.
//!
//! Wire names are declared on each field. A misspelled name is not rejected
//! by the API, the value is silently dropped, so every rename here is
//! load-bearing.

use serde::{Deserialize, Serialize};

/// `CreateProject` variables: `{ input: CreateProjectInput }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateProjectRequest {
    /// The mutation input.
    pub input: CreateProjectInput,
}

/// Fields of a new project.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    /// Project name.
    pub name: String,
    /// Parent folder project, used as the parent reference in errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_project_id: Option<String>,
    /// External identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<String>>,
    /// Linked cloud organizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_organization_links: Option<Vec<CloudOrganizationLink>>,
    /// Linked cloud accounts.
    pub cloud_account_links: Vec<CloudAccountLink>,
    /// Linked repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_links: Option<Vec<RepositoryLink>>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// User ids of the security champions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_champions: Option<Vec<String>>,
    /// User ids of the project owners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_owners: Option<Vec<String>>,
    /// Owning business unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_unit: Option<String>,
    /// Risk profile.
    pub risk_profile: RiskProfile,
}

/// `UpdateProject` variables: `{ input: { id, override } }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateProjectRequest {
    /// The mutation input.
    pub input: UpdateProjectInput,
}

/// Identifies the project and carries the replacement values.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateProjectInput {
    /// Id of the project to update, used as the resource reference in errors.
    pub id: String,
    /// Values replacing the current ones.
    #[serde(rename = "override")]
    pub override_: ProjectOverride,
}

/// Replacement values for an existing project.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverride {
    /// Project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// External identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<String>>,
    /// Linked cloud organizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_organization_links: Option<Vec<CloudOrganizationLink>>,
    /// Linked cloud accounts.
    pub cloud_account_links: Vec<CloudAccountLink>,
    /// Linked repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_links: Option<Vec<RepositoryLink>>,
    /// Linked Kubernetes clusters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubernetes_cluster_links: Option<Vec<KubernetesClusterLink>>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// User ids of the security champions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_champions: Option<Vec<String>>,
    /// User ids of the project owners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_owners: Option<Vec<String>>,
    /// Owning business unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_unit: Option<String>,
    /// Risk profile.
    pub risk_profile: RiskProfile,
}

/// A cloud account attached to a project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudAccountLink {
    /// Wiz id of the cloud account.
    pub cloud_account: String,
    /// Environment label, e.g. `PRODUCTION`.
    pub environment: String,
    /// Whether the account is shared with other projects.
    pub shared: bool,
    /// Tags scoping a shared account.
    pub resource_tags: Vec<ResourceTag>,
    /// Resource groups scoping a shared account.
    pub resource_groups: Vec<String>,
}

/// A cloud organization attached to a project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudOrganizationLink {
    /// Wiz id of the cloud organization.
    pub cloud_organization: String,
    /// Environment label.
    pub environment: String,
    /// Whether the organization is shared with other projects.
    pub shared: bool,
    /// Tags scoping a shared organization.
    pub resource_tags: Vec<ResourceTag>,
    /// Resource groups scoping a shared organization.
    pub resource_groups: Vec<String>,
}

/// A repository attached to a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RepositoryLink {
    /// Wiz id of the repository.
    pub repository: String,
}

/// A Kubernetes cluster attached to a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesClusterLink {
    /// Wiz id of the cluster.
    pub kubernetes_cluster: String,
    /// Environment label.
    pub environment: String,
    /// Namespaces included in the project.
    pub namespaces: Vec<String>,
    /// Whether the cluster is shared with other projects.
    pub shared: bool,
}

/// Key/value resource tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

/// Business impact rating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum BusinessImpact {
    /// Low business impact.
    #[serde(rename = "LBI")]
    Low,
    /// Medium business impact.
    #[default]
    #[serde(rename = "MBI")]
    Medium,
    /// High business impact.
    #[serde(rename = "HBI")]
    High,
}

/// Tri-state answer used throughout the risk profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Answer {
    /// Yes.
    Yes,
    /// No.
    No,
    /// Not known.
    #[default]
    Unknown,
}

/// Categorical security posture attributes of a project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    /// Business impact rating.
    pub business_impact: BusinessImpact,
    /// Whether the application requires authentication.
    pub has_authentication: Answer,
    /// Whether the application exposes an API.
    #[serde(rename = "hasExposedAPI")]
    pub has_exposed_api: Answer,
    /// Whether the application is customer facing.
    pub is_customer_facing: Answer,
    /// Whether the application is reachable from the internet.
    pub is_internet_facing: Answer,
    /// Whether the application is under active development.
    pub is_actively_developed: Answer,
    /// Whether the application is subject to regulation.
    pub is_regulated: Answer,
    /// Kinds of sensitive data handled.
    pub sensitive_data_types: Vec<String>,
    /// Whether the application stores data.
    pub stores_data: Answer,
    /// Regulatory standards that apply.
    pub regulatory_standards: Vec<String>,
}

impl RiskProfile {
    /// The fixed profile sent for every managed project.
    ///
    /// These values are not derived from configuration.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            business_impact: BusinessImpact::Medium,
            has_authentication: Answer::Unknown,
            has_exposed_api: Answer::Yes,
            is_customer_facing: Answer::No,
            is_internet_facing: Answer::Yes,
            is_actively_developed: Answer::Unknown,
            is_regulated: Answer::Yes,
            sensitive_data_types: vec!["CUSTOMER".to_string(), "FINANCIAL".to_string()],
            stores_data: Answer::Yes,
            regulatory_standards: vec!["SOC".to_string()],
        }
    }
}

/// Entity type filter for graph search.
pub const PROJECT_ENTITY_TYPE: &str = "PROJECT";

/// `GraphSearch` variables used to read a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectRequest {
    /// Page size; only the first page is ever requested.
    pub first: i64,
    /// Entity filter.
    pub query: GraphEntityQuery,
    /// Project to search in.
    pub project_id: String,
    /// Whether to include `totalCount` and `maxCountReached`.
    pub fetch_total_count: bool,
    /// Whether to run the quick (approximate) search.
    pub quick: bool,
}

impl GetProjectRequest {
    /// Builds the standard single-entity lookup for `project_id`.
    #[must_use]
    pub fn for_project(project_id: impl Into<String>) -> Self {
        Self {
            first: 1,
            query: GraphEntityQuery {
                entity_type: vec![PROJECT_ENTITY_TYPE.to_string()],
            },
            project_id: project_id.into(),
            fetch_total_count: true,
            quick: false,
        }
    }
}

/// Graph entity query filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphEntityQuery {
    /// Entity types to match.
    #[serde(rename = "type")]
    pub entity_type: Vec<String>,
}
