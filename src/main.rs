use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use zop::api::ApiClient;
use zop::config;
use zop::gcp::{GcpClient, GcpEndpoints};
use zop::output;
use zop::prompt::{ListStyle, TerminalPrompt};
use zop::services::{self, environment_service, DeploymentWizard};
use zop::store::CredentialStore;
use zop::ZopError;

#[derive(Parser)]
#[command(name = "zop", version, about = "Manage cloud accounts, applications and deployments on Zop")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Echo every API request as a curl command
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage cloud accounts
    Cloud {
        #[command(subcommand)]
        sub: CloudCommands,
    },
    /// Manage applications
    Application {
        #[command(subcommand)]
        sub: ApplicationCommands,
    },
    /// Manage environments of an application
    Environment {
        #[command(subcommand)]
        sub: EnvironmentCommands,
    },
    /// Configure where an environment gets deployed
    Deployment {
        #[command(subcommand)]
        sub: DeploymentCommands,
    },
}

#[derive(Subcommand)]
enum CloudCommands {
    #[command(about = "Import cloud accounts", long_about = "Read the accounts gcloud has stored locally and register them with Zop. User logins get a service account provisioned in every reachable project.")]
    Import,
    #[command(about = "List cloud accounts")]
    List,
}

#[derive(Subcommand)]
enum ApplicationCommands {
    /// Add an application, optionally with environments
    Add {
        #[arg(long)]
        name: String,
    },
    /// List applications and their environments
    List,
}

#[derive(Subcommand)]
enum EnvironmentCommands {
    /// Add environments to an application
    Add,
    /// List the environments of an application
    List,
}

#[derive(Subcommand)]
enum DeploymentCommands {
    #[command(about = "Add a deployment space", long_about = "Pick a cloud account and an environment, then walk through the deployment space options offered for that account.")]
    Add,
}

async fn run(cli: Cli) -> Result<(), ZopError> {
    let api = ApiClient::new(&config::get_api_base_url())?.verbose(cli.verbose);
    let prompt = TerminalPrompt::new(ListStyle::default());

    match cli.command {
        Commands::Cloud { sub } => match sub {
            CloudCommands::Import => {
                let path = config::get_gcloud_credentials_path()
                    .ok_or_else(|| ZopError::Gcp("unable to locate gcloud credentials".into()))?;
                let store = CredentialStore::open(&path).await?;
                let gcp = GcpClient::new(GcpEndpoints::from_env())?;
                let n = services::import_accounts(&api, &store, &gcp).await?;
                tracing::info!(imported = n, "cloud accounts imported");
                println!("{}", yansi::Paint::new("Successfully Imported!").green());
            }
            CloudCommands::List => {
                let accounts = services::list_accounts(&api).await?;
                println!("{}", output::render_accounts(&accounts));
            }
        },
        Commands::Application { sub } => match sub {
            ApplicationCommands::Add { name } => {
                services::add_application(&api, &prompt, &name).await?;
                println!(
                    "{} {} {}",
                    yansi::Paint::new("Application").green(),
                    name,
                    yansi::Paint::new("added successfully!").green()
                );
            }
            ApplicationCommands::List => {
                let apps = services::list_applications(&api).await?;
                println!("{}", output::render_applications(&apps));
            }
        },
        Commands::Environment { sub } => match sub {
            EnvironmentCommands::Add => {
                let n = services::add_environments(&api, &prompt).await?;
                println!("{}", yansi::Paint::new(format!("{} environments added", n)).green());
            }
            EnvironmentCommands::List => {
                let app =
                    services::select_application(&api, &prompt, environment_service::LIST_APPLICATION_TITLE).await?;
                let envs = services::list_environments(&api, app.id).await?;
                println!("{}", output::render_environments(&envs));
            }
        },
        Commands::Deployment { sub } => match sub {
            DeploymentCommands::Add => {
                DeploymentWizard::new(&api, &prompt).add().await?;
                println!("{}", yansi::Paint::new("Deployment Created").green());
            }
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never mix with tables on stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    config::load_env_file(cli.env_file.as_deref());

    if let Err(e) = run(cli).await {
        tracing::error!(%e, "command failed");
        eprintln!("{}", yansi::Paint::new(e.to_string()).red());
        process::exit(1);
    }
}
