//! # bhr-cli: A CLI for BambooHR
//!
//! This is the main entry point for the `bhr` command-line interface. It
//! talks to the BambooHR REST API and renders the employee directory as an
//! org chart, shows a single employee card, or reports how much of the
//! company reports up to someone.

use anyhow::{anyhow, Context, Result};
use bhr::{render_employee, render_org_chart, BhrError, Client, Filters, OrgChart};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about = "A command line interface for BambooHR", long_about = None)]
struct Cli {
    /// BambooHR API key, sent as the Basic auth username.
    #[arg(long, env = "BAMBOOHR_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Company subdomain of the BambooHR tenant, e.g. "acme".
    #[arg(long, env = "BAMBOOHR_COMPANY_DOMAIN")]
    company: String,

    /// Base URL override, taking the place of the hosted gateway. This is
    /// how the integration tests point the binary at a mock server.
    #[arg(long, env = "BAMBOOHR_BASE_URL", hide = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the employee directory as an indented org chart.
    #[command(visible_alias = "dir")]
    Directory(DirectoryArgs),
    /// Show the details of a single employee.
    #[command(visible_aliases = ["emp", "get"])]
    Employee(SelectorArgs),
    /// Report how much of the company reports up to an employee.
    Percent(SelectorArgs),
}

#[derive(Parser, Debug)]
struct DirectoryArgs {
    /// Only show departments matching this pattern. An empty pattern
    /// disables filtering entirely.
    #[arg(long, default_value = "")]
    department: String,

    /// Only show employees whose job title matches this pattern. Ignored
    /// unless --department is also given.
    #[arg(long, default_value = "")]
    title: String,
}

#[derive(Parser, Debug)]
struct SelectorArgs {
    /// Employee name to look up. Spaces match loosely, so "jo smith"
    /// finds "John Smith".
    #[arg(long)]
    name: Option<String>,

    /// Numeric employee id to look up.
    #[arg(long, conflicts_with = "name")]
    id: Option<u32>,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let client = match &cli.base_url {
        Some(base_url) => Client::with_base_url(cli.api_key.clone(), base_url),
        None => Client::new(cli.api_key.clone(), &cli.company),
    }?;

    match &cli.command {
        Commands::Directory(args) => handle_directory(&client, args).await,
        Commands::Employee(args) => handle_employee(&client, args).await,
        Commands::Percent(args) => handle_percent(&client, args).await,
    }
}

// --- Command Handlers ---

/// Fetches the directory and prints it as an org chart.
async fn handle_directory(client: &Client, args: &DirectoryArgs) -> Result<()> {
    // Validate the patterns before going to the network.
    let filter = Filters {
        department: args.department.clone(),
        title: args.title.clone(),
    }
    .compile()?;

    let directory = client.fetch_directory().await?;
    let chart = OrgChart::build(&directory.employees, &filter);
    println!("{}", render_org_chart(&chart)?);
    Ok(())
}

/// Looks up one employee by id or name and prints their details.
///
/// With no selector at all, id 0 is requested, which the API resolves to
/// the owner of the key.
async fn handle_employee(client: &Client, args: &SelectorArgs) -> Result<()> {
    let employee = match (args.id, args.name.as_deref().filter(|name| !name.is_empty())) {
        (Some(id), _) => client.fetch_employee(id).await?,
        (None, Some(name)) => {
            let directory = client.fetch_directory().await?;
            let record = bhr::find_by_name(&directory.employees, name)?
                .ok_or_else(|| BhrError::EmployeeNotFound(name.to_string()))?;
            let id: u32 = record.id.parse().with_context(|| {
                format!(
                    "employee '{}' has a non-numeric id '{}'",
                    record.display_name, record.id
                )
            })?;
            client.fetch_employee(id).await?
        }
        (None, None) => client.fetch_employee(0).await?,
    };

    println!();
    println!("{}", render_employee(&employee));
    Ok(())
}

/// Reports the size of an employee's subtree as a share of the company.
async fn handle_percent(client: &Client, args: &SelectorArgs) -> Result<()> {
    let directory = client.fetch_directory().await?;
    // The share is measured against the whole company, so no filters here.
    let chart = OrgChart::build(&directory.employees, &Filters::default().compile()?);

    let display_name = match (args.id, args.name.as_deref().filter(|name| !name.is_empty())) {
        (Some(id), _) => client.fetch_employee(id).await?.display_name,
        (None, Some(name)) => bhr::find_by_name(&directory.employees, name)?
            .ok_or_else(|| BhrError::EmployeeNotFound(name.to_string()))?
            .display_name
            .clone(),
        (None, None) => client.fetch_employee(0).await?.display_name,
    };

    let index = chart
        .index_of(&display_name)
        .ok_or_else(|| anyhow!("employee '{display_name}' is not in the directory"))?;
    let reports = chart.subtree_size(index);
    let total = chart.len();
    let percent = reports as f64 * 100.0 / total as f64;
    println!("{display_name}: {reports} of {total} employees ({percent:.1}%)");
    Ok(())
}
