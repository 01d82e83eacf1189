use anyhow::Result;
use clap::{Parser, Subcommand};

use intake::config::Config;
use intake::forms::FormSchema;
use intake::logging::init_logging;
use intake::rest::{self, ApiDoc, ApiState};

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Lead intake service for the CodeCraft Labs and Academic Assist sites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the submission API server (default)
    Serve {
        /// Port to bind, overriding configuration
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the built-in form schemas and their steps
    Forms,

    /// Print the OpenAPI specification as JSON
    Openapi,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let is_server_mode = matches!(&cli.command, None | Some(Commands::Serve { .. }));
    let logging = init_logging(&config, is_server_mode, cli.debug)?;
    if let Some(path) = &logging.log_file_path {
        eprintln!("Logging to {}", path.display());
    }

    match cli.command {
        None | Some(Commands::Serve { port: None }) => {
            let port = config.server.port;
            run_server(config, port).await
        }
        Some(Commands::Serve { port: Some(port) }) => run_server(config, port).await,
        Some(Commands::Forms) => {
            print_forms();
            Ok(())
        }
        Some(Commands::Openapi) => {
            println!("{}", ApiDoc::json()?);
            Ok(())
        }
    }
}

async fn run_server(config: Config, port: u16) -> Result<()> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %config.data_path().display(),
        "Starting intake service"
    );
    let state = ApiState::new(config);
    rest::serve(state, port).await
}

fn print_forms() {
    for schema in FormSchema::all() {
        println!("{} ({})", schema.title, schema.endpoint);
        println!("  collection: {}", schema.collection);
        for (index, step) in schema.steps.iter().enumerate() {
            let step_number = index as u8 + 1;
            let required: Vec<&str> = schema
                .required_for_step(step_number)
                .map(|f| f.name)
                .collect();
            if required.is_empty() {
                println!("  step {}: {}", step_number, step);
            } else {
                println!("  step {}: {} (requires {})", step_number, step, required.join(", "));
            }
        }
        let types: Vec<&str> = schema
            .classification_labels
            .iter()
            .map(|(_, label)| *label)
            .collect();
        println!("  types: {}", types.join(", "));
        let facets: Vec<&str> = schema.expertise.options.iter().map(|(tag, _)| *tag).collect();
        println!("  {}: {}", schema.expertise.name, facets.join(", "));
        for (category, options) in schema.stack.categories {
            println!("  {} / {}: {}", schema.stack.name, category, options.join(", "));
        }
        println!();
    }
}
