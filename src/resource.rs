//! The `wiz_project` resource as seen by the provider host.
//!
//! The host owns the lifecycle and the persisted state. This module only
//! translates between [`ProjectState`] and the project operations on
//! [`WizClient`]. The client is created once by [`configure`] and passed into
//! every call.

use serde::{Deserialize, Serialize};

use crate::client::WizClient;
use crate::config::ProviderConfig;
use crate::context::Context;
use crate::error::WizError;
use crate::projects::{
    CloudAccountLink, CreateProjectInput, CreateProjectRequest, ProjectOverride, ResourceError,
    ResourceOperation, RiskProfile, Subscription, UpdateProjectInput, UpdateProjectRequest,
    PROJECT_RESOURCE,
};

/// Persisted state of one project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectState {
    /// Project id, computed by the API on create.
    #[serde(default)]
    pub id: Option<String>,
    /// Project name.
    pub name: String,
    /// Linked cloud accounts.
    #[serde(default)]
    pub cloud_account_links: Vec<CloudAccountLinkState>,
}

/// A cloud account link in state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudAccountLinkState {
    /// Wiz id of the cloud account.
    pub cloud_account_guid: String,
    /// Environment label.
    #[serde(default)]
    pub environment: String,
    /// Whether the account is shared.
    #[serde(default)]
    pub shared: bool,
}

impl From<&CloudAccountLinkState> for CloudAccountLink {
    fn from(link: &CloudAccountLinkState) -> Self {
        Self {
            cloud_account: link.cloud_account_guid.clone(),
            environment: link.environment.clone(),
            shared: link.shared,
            ..Self::default()
        }
    }
}

impl From<&Subscription> for CloudAccountLinkState {
    fn from(subscription: &Subscription) -> Self {
        Self {
            cloud_account_guid: subscription.subscription_id.clone(),
            environment: subscription
                .primary_environment()
                .unwrap_or_default()
                .to_string(),
            shared: subscription.shared_account,
        }
    }
}

impl ProjectState {
    fn account_links(&self) -> Vec<CloudAccountLink> {
        self.cloud_account_links.iter().map(Into::into).collect()
    }

    fn require_id(&self, operation: ResourceOperation) -> Result<&str, ResourceError> {
        self.id
            .as_deref()
            .ok_or_else(|| ResourceError::not_found(operation, PROJECT_RESOURCE, None))
    }
}

/// Validates the host configuration and logs in.
///
/// # Errors
///
/// Returns [`WizError::Config`] for missing or malformed values and
/// [`WizError::Authentication`] if the credentials are rejected.
pub async fn configure(ctx: &Context, config: ProviderConfig) -> Result<WizClient, WizError> {
    let config = config.into_config()?;
    WizClient::connect(ctx, &config).await
}

/// Lifecycle handlers for the `wiz_project` resource.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectResource;

impl ProjectResource {
    /// Host type name of the resource.
    pub const TYPE_NAME: &'static str = "wiz_project";

    /// Creates the project described by `plan` and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns the classified create error.
    pub async fn create(
        client: &WizClient,
        ctx: &Context,
        plan: ProjectState,
    ) -> Result<ProjectState, WizError> {
        let request = CreateProjectRequest {
            input: CreateProjectInput {
                name: plan.name.clone(),
                cloud_account_links: plan.account_links(),
                risk_profile: RiskProfile::placeholder(),
                ..CreateProjectInput::default()
            },
        };
        let response = client.create_project(ctx, &request).await?;

        Ok(ProjectState {
            id: response.project_id().map(str::to_string),
            ..plan
        })
    }

    /// Refreshes `state` from the API.
    ///
    /// A project that no longer exists is reported as an error for which
    /// [`WizError::is_not_found`] is `true`; hosts typically drop it from
    /// state.
    ///
    /// # Errors
    ///
    /// Returns the classified read error, or [`WizError::Decode`] if the
    /// subscriptions property is malformed.
    pub async fn read(
        client: &WizClient,
        ctx: &Context,
        state: &ProjectState,
    ) -> Result<ProjectState, WizError> {
        let id = state.require_id(ResourceOperation::Read)?;
        let project = client.read_project(ctx, id).await?;

        Ok(ProjectState {
            id: project.entity.id.or_else(|| state.id.clone()),
            name: project.entity.name.unwrap_or_else(|| state.name.clone()),
            cloud_account_links: project.subscriptions.iter().map(Into::into).collect(),
        })
    }

    /// Applies `plan` to the project identified by `plan.id`.
    ///
    /// # Errors
    ///
    /// Returns the classified update error.
    pub async fn update(
        client: &WizClient,
        ctx: &Context,
        plan: ProjectState,
    ) -> Result<ProjectState, WizError> {
        let id = plan.require_id(ResourceOperation::Update)?;
        let request = UpdateProjectRequest {
            input: UpdateProjectInput {
                id: id.to_string(),
                override_: ProjectOverride {
                    name: Some(plan.name.clone()),
                    cloud_account_links: plan.account_links(),
                    risk_profile: RiskProfile::placeholder(),
                    ..ProjectOverride::default()
                },
            },
        };
        client.update_project(ctx, &request).await?;
        Ok(plan)
    }

    /// Removes the project from state.
    ///
    /// No API call is made; the project is left in Wiz.
    pub fn delete(state: &ProjectState) {
        tracing::info!(
            project_id = state.id.as_deref().unwrap_or_default(),
            "Removing project from state without deleting it in Wiz"
        );
    }

    /// Starts state for an existing project from its id.
    #[must_use]
    pub fn import_state(id: impl Into<String>) -> ProjectState {
        ProjectState {
            id: Some(id.into()),
            ..ProjectState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_links_map_to_request_links() {
        let state = ProjectState {
            id: None,
            name: "proj-a".to_string(),
            cloud_account_links: vec![CloudAccountLinkState {
                cloud_account_guid: "acct-1".to_string(),
                environment: "PROD".to_string(),
                shared: true,
            }],
        };

        let links = state.account_links();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].cloud_account, "acct-1");
        assert_eq!(links[0].environment, "PROD");
        assert!(links[0].shared);
        assert!(links[0].resource_tags.is_empty());
    }

    #[test]
    fn test_subscription_maps_to_state_link() {
        let subscription = Subscription {
            subscription_id: "s1".to_string(),
            environments: vec!["PROD".to_string(), "DEV".to_string()],
            shared_account: true,
            ..Subscription::default()
        };

        let link = CloudAccountLinkState::from(&subscription);

        assert_eq!(
            link,
            CloudAccountLinkState {
                cloud_account_guid: "s1".to_string(),
                environment: "PROD".to_string(),
                shared: true,
            }
        );
    }

    #[test]
    fn test_subscription_without_environment_maps_to_empty_label() {
        let subscription = Subscription {
            subscription_id: "s1".to_string(),
            ..Subscription::default()
        };
        assert_eq!(CloudAccountLinkState::from(&subscription).environment, "");
    }

    #[test]
    fn test_import_passes_id_through() {
        let state = ProjectResource::import_state("proj-id");
        assert_eq!(state.id.as_deref(), Some("proj-id"));
        assert!(state.name.is_empty());
        assert!(state.cloud_account_links.is_empty());
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let err = ProjectState::default()
            .require_id(ResourceOperation::Update)
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "error updating project: resource not found: <none>"
        );
    }

    #[test]
    fn test_state_deserializes_with_optional_fields_missing() {
        let state: ProjectState = serde_json::from_value(serde_json::json!({
            "name": "proj-a",
            "cloud_account_links": [{"cloud_account_guid": "acct-1"}]
        }))
        .unwrap();

        assert!(state.id.is_none());
        assert_eq!(state.cloud_account_links[0].environment, "");
        assert!(!state.cloud_account_links[0].shared);
    }
}
