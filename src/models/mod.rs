pub mod application;
pub mod cloud_account;
pub mod deployment;
pub mod environment;
pub mod gcp;

pub use application::{Application, ApplicationEnvironment};
pub use cloud_account::CloudAccount;
pub use deployment::{DeploymentOption, DeploymentSpace, NextPage, OptionsPage, PageMetadata};
pub use environment::Environment;
pub use gcp::{CloudAccountRequest, ServiceAccountKey, StoredCredential, UserCredentials};
