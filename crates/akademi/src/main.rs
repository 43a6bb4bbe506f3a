//! `akademi` - CLI for the akademi content API
//!
//! This binary runs the HTTP server and provides shell access to the stored
//! site content.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use akademi::cli::{
    Cli, Command, ConfigCommand, ListCommand, OutputFormat, SeedCommand, ServeCommand,
};
use akademi::content::{ContactInfo, Resource};
use akademi::storage::seed::seed_defaults;
use akademi::{api, init_logging, Config, ContentStore, ResourceKind};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    // Execute the command
    match cli.command {
        Command::Serve(serve_cmd) => handle_serve(config, serve_cmd),
        Command::List(list_cmd) => handle_list(&config, &list_cmd),
        Command::Status(status_cmd) => handle_status(&config, status_cmd.json),
        Command::Seed(seed_cmd) => handle_seed(&config, &seed_cmd),
        Command::Config(config_cmd) => handle_config(&config, cli.config, config_cmd),
    }
}

fn open_store(dir: &Path) -> anyhow::Result<ContentStore> {
    ContentStore::open(dir)
        .with_context(|| format!("failed to open data directory {}", dir.display()))
}

fn data_dir(config: &Config, flag: Option<&PathBuf>) -> PathBuf {
    flag.cloned()
        .unwrap_or_else(|| config.data_dir().to_path_buf())
}

fn handle_serve(mut config: Config, cmd: ServeCommand) -> anyhow::Result<()> {
    if let Some(bind) = cmd.bind {
        config.server.bind_address = bind.to_string();
    }
    if let Some(port) = cmd.port {
        config.server.port = port;
    }
    if let Some(dir) = cmd.data_dir {
        config.storage.data_dir = dir;
    }
    config.validate()?;
    let addr = config.socket_addr()?;

    let store = open_store(config.data_dir())?;
    if config.storage.seed_on_start {
        seed_defaults(&store, false).context("failed to seed default content")?;
    }
    let router = api::build_router(&store, &config.server);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async move {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        api::serve(listener, router, api::shutdown_signal()).await?;
        Ok::<(), anyhow::Error>(())
    })
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let store = open_store(&data_dir(config, cmd.data_dir.as_ref()))?;

    match ResourceKind::from(cmd.resource) {
        ResourceKind::Trainings => {
            print_records(&store.trainings.list()?, cmd.format, |t| t.title.as_str())
        }
        ResourceKind::Testimonials => {
            print_records(&store.testimonials.list()?, cmd.format, |t| t.company_name.as_str())
        }
        ResourceKind::Faqs => print_records(&store.faqs.list()?, cmd.format, |f| f.question.as_str()),
        ResourceKind::LinkedInContents => {
            print_records(&store.linkedin_contents.list()?, cmd.format, |c| c.title.as_str())
        }
        ResourceKind::Contact => match store.contact.load()? {
            Some(contact) => print_contact(&contact, cmd.format),
            None => {
                println!("No contact info stored. Run `akademi seed` to write the defaults.");
                Ok(())
            }
        },
    }
}

fn print_records<T: Resource>(
    records: &[T],
    format: OutputFormat,
    summary: impl Fn(&T) -> &str,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        OutputFormat::Plain => {
            for record in records {
                println!("{}\t{}", record.id(), summary(record));
            }
        }
        OutputFormat::Table => {
            let width = records
                .iter()
                .map(|r| r.id().len())
                .max()
                .unwrap_or(0)
                .max(2);
            println!("{:<width$}  {}", "ID", T::LABEL.to_uppercase());
            println!("{:-<width$}  {:-<40}", "", "");
            for record in records {
                println!("{:<width$}  {}", record.id(), summary(record));
            }
            println!();
            println!("{} {}", records.len(), T::PLURAL);
        }
    }
    Ok(())
}

fn print_contact(contact: &ContactInfo, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(contact)?);
        return Ok(());
    }

    println!("Address:   {}", contact.address);
    println!("           {}", contact.address_detail);
    println!("Phone:     {} ({})", contact.phone, contact.phone_hours);
    println!("Email:     {} ({})", contact.email, contact.email_response);
    println!("WhatsApp:  {}", contact.whatsapp);
    println!("Hours:     {}", contact.working_hours.weekdays);
    println!("           {}", contact.working_hours.saturday);
    println!("           {}", contact.working_hours.sunday);
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = open_store(config.data_dir())?;
    let stats = store.stats()?;

    if json {
        let status = serde_json::json!({
            "data_dir": store.data_dir(),
            "listen": format!("{}:{}", config.server.bind_address, config.server.port),
            "api_base": config.server.api_base,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("akademi status");
        println!("--------------");
        println!("Data directory:    {}", store.data_dir().display());
        println!(
            "Listen address:    {}:{}{}",
            config.server.bind_address, config.server.port, config.server.api_base
        );
        println!();
        println!("Trainings:         {}", stats.trainings);
        println!("Testimonials:      {}", stats.testimonials);
        println!("FAQs:              {}", stats.faqs);
        println!("LinkedIn contents: {}", stats.linkedin_contents);
        println!(
            "Contact info:      {}",
            if stats.contact_present { "present" } else { "missing" }
        );
        println!("Total records:     {}", stats.total_records());
    }
    Ok(())
}

fn handle_seed(config: &Config, cmd: &SeedCommand) -> anyhow::Result<()> {
    let store = open_store(&data_dir(config, cmd.data_dir.as_ref()))?;
    let report = seed_defaults(&store, cmd.force)?;

    for kind in &report.written {
        println!("wrote   {}", store.data_dir().join(kind.file_name()).display());
    }
    for kind in &report.skipped {
        println!("kept    {}", store.data_dir().join(kind.file_name()).display());
    }
    if !report.skipped.is_empty() && !cmd.force {
        println!();
        println!("Use --force to overwrite existing files.");
    }
    Ok(())
}

fn handle_config(
    config: &Config,
    config_path: Option<PathBuf>,
    cmd: ConfigCommand,
) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Bind address:       {}", config.server.bind_address);
                println!("  Port:               {}", config.server.port);
                println!("  API base:           {}", config.server.api_base);
                println!("  Max body (bytes):   {}", config.server.max_body_bytes);
                println!();
                println!("[Storage]");
                println!("  Data directory:     {}", config.data_dir().display());
                println!("  Seed on start:      {}", config.storage.seed_on_start);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
