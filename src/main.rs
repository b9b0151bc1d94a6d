//! Opens the database of a local compose application in the TablePlus GUI.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bollard::Docker;
use clap::{Args, Parser, Subcommand};
use tableplus_local::{
    Client,
    launcher::{LaunchPlan, Platform},
    models::{ResolveConnectionOptions, ServiceFilter},
};

#[derive(Parser)]
#[command(
    name = "tableplus-local",
    version,
    about = "Opens the database in the TablePlus GUI"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    open: OpenArgs,

    /// Name of the compose application (defaults to the current directory's name)
    #[arg(short, long, global = true)]
    app: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the services of the application
    #[command(alias = "ls")]
    List,
}

#[derive(Args)]
struct OpenArgs {
    /// Specify the database service
    #[arg(short, long = "service", value_name = "NAME")]
    service: Vec<String>,

    /// Print the connection URI and launch plan instead of launching TablePlus
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    // Every failure surfaces here as a single diagnostic; the command never
    // panics on expected error paths
    if let Err(err) = run(cli).await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let level = match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::INFO,
        (false, 1) => tracing::Level::DEBUG,
        (false, _) => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

async fn run(cli: Cli) -> Result<()> {
    let app = match cli.app {
        Some(app) => app,
        None => default_app_name()?,
    };

    let docker = Docker::connect_with_socket_defaults().context("connecting to docker")?;
    let client = Client::new(docker);

    match cli.command {
        Some(Commands::List) => list(&client, &app).await,
        None => open(&client, &app, cli.open).await,
    }
}

async fn open(client: &Client, app: &str, args: OpenArgs) -> Result<()> {
    let options = ResolveConnectionOptions::builder()
        .app(app)
        .filter(ServiceFilter::new(args.service))
        .build();

    let descriptor = client.resolve_connection(&options).await?;
    let uri = descriptor.uri();
    tracing::debug!(%uri, "resolved database connection");

    if args.dry_run {
        println!("{uri}");
        match LaunchPlan::resolve(&Platform::current(), &uri, path_exists) {
            Ok(plan) => println!("{plan}"),
            Err(err) => tracing::warn!("{err}"),
        }
        return Ok(());
    }

    let plan = LaunchPlan::resolve(&Platform::current(), &uri, path_exists)?;
    plan.spawn().context("launching TablePlus")?;
    tracing::info!("Opening database '{}' in TablePlus", descriptor.database);

    Ok(())
}

async fn list(client: &Client, app: &str) -> Result<()> {
    let services = client.list_services(app).await.context("listing services")?;

    if services.is_empty() {
        println!("No services found for app '{app}'.");
        return Ok(());
    }

    println!("SERVICE \t STATE \t IMAGE \t PORT");
    for service in services {
        let port = service
            .port_binding
            .as_ref()
            .map(|binding| binding.port.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{} \t {} \t {} \t {}",
            service.name, service.state, service.image, port
        );
    }

    Ok(())
}

fn default_app_name() -> Result<String> {
    let current_dir = std::env::current_dir().context("resolving the current directory")?;
    current_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .context("the current directory has no name")
}

fn path_exists(path: &Path) -> bool {
    path.exists()
}
