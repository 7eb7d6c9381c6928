//! The project operations and their `WizClient` entry points.

use crate::client::WizClient;
use crate::clients::graphql::{GraphqlError, GraphqlOperation};
use crate::context::Context;
use crate::error::WizError;
use crate::projects::entity::{
    CreateProjectResponse, GetProjectResponse, ProjectEntity, UpdateProjectResponse,
};
use crate::projects::errors::{classify, ResourceError, ResourceOperation, PROJECT_RESOURCE};
use crate::projects::input::{CreateProjectRequest, GetProjectRequest, UpdateProjectRequest};
use crate::projects::subscriptions::Subscription;

/// `CreateProject` mutation.
#[derive(Clone, Copy, Debug)]
pub struct CreateProject;

impl GraphqlOperation for CreateProject {
    const NAME: &'static str = "CreateProject";
    const DOCUMENT: &'static str = r"
mutation CreateProject($input: CreateProjectInput!) {
  createProject(input: $input) {
    project {
      id
    }
  }
}";
    type Variables = CreateProjectRequest;
    type Response = CreateProjectResponse;
}

/// `UpdateProject` mutation.
#[derive(Clone, Copy, Debug)]
pub struct UpdateProject;

impl GraphqlOperation for UpdateProject {
    const NAME: &'static str = "UpdateProject";
    const DOCUMENT: &'static str = r"
mutation UpdateProject($input: UpdateProjectInput!) {
  updateProject(input: $input) {
    project {
      id
      name
      identifiers
      description
      businessUnit
      projectOwners {
        id
        name
        email
      }
      securityChampions {
        id
        name
        email
      }
      cloudOrganizationLinks {
        cloudOrganization {
          id
        }
        environment
        resourceTags {
          key
          value
        }
        shared
        resourceGroups
      }
      cloudAccountLinks {
        cloudAccount {
          id
        }
        environment
        resourceTags {
          key
          value
        }
        shared
        resourceGroups
      }
      kubernetesClustersLinks {
        kubernetesCluster {
          id
        }
        environment
        namespaces
        shared
      }
      repositoryLinks {
        repository {
          id
        }
      }
      riskProfile {
        businessImpact
        hasAuthentication
        isInternetFacing
        hasExposedAPI
        storesData
        sensitiveDataTypes
        regulatoryStandards
        isCustomerFacing
        isRegulated
      }
    }
  }
}";
    type Variables = UpdateProjectRequest;
    type Response = UpdateProjectResponse;
}

/// `GraphSearch` query, used to read a project.
#[derive(Clone, Copy, Debug)]
pub struct GraphSearch;

impl GraphqlOperation for GraphSearch {
    const NAME: &'static str = "GraphSearch";
    const DOCUMENT: &'static str = r"
query GraphSearch(
  $query: GraphEntityQueryInput
  $controlId: ID
  $projectId: String!
  $first: Int
  $after: String
  $fetchTotalCount: Boolean!
  $quick: Boolean
) {
  graphSearch(
    query: $query
    controlId: $controlId
    projectId: $projectId
    first: $first
    after: $after
    quick: $quick
  ) {
    totalCount @include(if: $fetchTotalCount)
    maxCountReached @include(if: $fetchTotalCount)
    pageInfo {
      endCursor
      hasNextPage
    }
    nodes {
      entities {
        id
        name
        type
        properties
        originalObject
      }
    }
  }
}";
    type Variables = GetProjectRequest;
    type Response = GetProjectResponse;
}

/// A project read back from the graph, with its subscriptions decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDetails {
    /// The raw graph entity.
    pub entity: ProjectEntity,
    /// Decoded `subscriptions` property.
    pub subscriptions: Vec<Subscription>,
}

impl WizClient {
    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns [`WizError::Resource`] scoped to create. A not-found names
    /// `parentProjectId` as the missing parent. A response that carries no
    /// project id is a create error too.
    pub async fn create_project(
        &self,
        ctx: &Context,
        request: &CreateProjectRequest,
    ) -> Result<CreateProjectResponse, WizError> {
        let parent = request.input.parent_project_id.as_deref();
        let response = self
            .graphql()
            .execute::<CreateProject>(ctx, request)
            .await
            .map_err(|e| classify(ResourceOperation::Create, PROJECT_RESOURCE, parent, e))?;
        let Some(project_id) = response.project_id().filter(|id| !id.is_empty()) else {
            return Err(classify(
                ResourceOperation::Create,
                PROJECT_RESOURCE,
                parent,
                GraphqlError::MissingData,
            )
            .into());
        };
        tracing::info!(project_id, "Created project {}", request.input.name);
        Ok(response)
    }

    /// Replaces the mutable fields of a project.
    ///
    /// # Errors
    ///
    /// Returns [`WizError::Resource`] scoped to update, referencing
    /// `input.id`.
    pub async fn update_project(
        &self,
        ctx: &Context,
        request: &UpdateProjectRequest,
    ) -> Result<UpdateProjectResponse, WizError> {
        let id = request.input.id.as_str();
        let response = self
            .graphql()
            .execute::<UpdateProject>(ctx, request)
            .await
            .map_err(|e| classify(ResourceOperation::Update, PROJECT_RESOURCE, Some(id), e))?;
        tracing::info!(project_id = id, "Updated project");
        Ok(response)
    }

    /// Runs the graph search behind a project read.
    ///
    /// The result may be empty; see [`read_project`](Self::read_project) for
    /// the single-project lookup.
    ///
    /// # Errors
    ///
    /// Returns [`WizError::Resource`] scoped to read, referencing
    /// `projectId`.
    pub async fn get_project(
        &self,
        ctx: &Context,
        request: &GetProjectRequest,
    ) -> Result<GetProjectResponse, WizError> {
        let id = request.project_id.as_str();
        self.graphql()
            .execute::<GraphSearch>(ctx, request)
            .await
            .map_err(|e| classify(ResourceOperation::Read, PROJECT_RESOURCE, Some(id), e).into())
    }

    /// Reads one project and decodes its subscriptions.
    ///
    /// # Errors
    ///
    /// - [`WizError::Resource`] with a not-found kind if the search matched nothing
    /// - [`WizError::Resource`] for a failed search
    /// - [`WizError::Decode`] if the `subscriptions` property is malformed
    pub async fn read_project(
        &self,
        ctx: &Context,
        project_id: &str,
    ) -> Result<ProjectDetails, WizError> {
        let response = self
            .get_project(ctx, &GetProjectRequest::for_project(project_id))
            .await?;

        let Some(entity) = response.into_first_entity() else {
            let err =
                ResourceError::not_found(ResourceOperation::Read, PROJECT_RESOURCE, Some(project_id));
            tracing::warn!(project_id, "{err}");
            return Err(err.into());
        };

        let subscriptions = entity.subscriptions()?;
        tracing::debug!(
            project_id,
            subscriptions = subscriptions.len(),
            "Read project"
        );
        Ok(ProjectDetails {
            entity,
            subscriptions,
        })
    }
}
