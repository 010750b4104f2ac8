pub mod application_service;
pub mod cloud_service;
pub mod deployment_service;
pub mod environment_service;
pub mod request_document;

pub use application_service::{add_application, list_applications, select_application};
pub use cloud_service::{import_accounts, list_accounts, select_account};
pub use deployment_service::{next_page_path, DeploymentWizard};
pub use environment_service::{add_environments, list_environments, select_environment};
pub use request_document::RequestDocument;
