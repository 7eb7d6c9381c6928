//! Wiz projects: request and response shapes, the three operations, error
//! classification and subscription decoding.
//!
//! # Overview
//!
//! - [`CreateProjectRequest`] / [`UpdateProjectRequest`] / [`GetProjectRequest`]: typed variables
//! - [`CreateProject`] / [`UpdateProject`] / [`GraphSearch`]: the GraphQL operations
//! - [`classify`]: turns a failed call into a [`ResourceError`]
//! - [`decode_subscriptions`]: second-pass decode of the `subscriptions` property
//!
//! The operations themselves are methods on [`WizClient`](crate::WizClient):
//! `create_project`, `update_project`, `get_project` and `read_project`.

mod entity;
mod errors;
mod input;
mod operations;
mod subscriptions;

pub use entity::{
    CreateProjectPayload, CreateProjectResponse, GetProjectResponse, GraphNode, GraphSearchPage,
    LinkedCloudAccount, ObjectId, PageInfo, ProjectEntity, ProjectProperties, ProjectRef,
    UpdateProjectPayload, UpdateProjectResponse, UpdatedProject,
};
pub use errors::{
    classify, is_not_found, is_not_found_message, ErrorKind, ResourceError, ResourceOperation,
    PROJECT_RESOURCE,
};
pub use input::{
    Answer, BusinessImpact, CloudAccountLink, CloudOrganizationLink, CreateProjectInput,
    CreateProjectRequest, GetProjectRequest, GraphEntityQuery, KubernetesClusterLink,
    ProjectOverride, RepositoryLink, ResourceTag, RiskProfile, UpdateProjectInput,
    UpdateProjectRequest, PROJECT_ENTITY_TYPE,
};
pub use operations::{CreateProject, GraphSearch, ProjectDetails, UpdateProject};
pub use subscriptions::{
    decode_subscriptions, encode_subscriptions, Subscription, SubscriptionDecodeError,
};
