use bannergen::{
    form::{
        MemoryForm, TerminalView, BACKGROUND_URL_FIELD, CATEGORY_FIELD, KEYWORDS_FIELD,
        SUBTITLE_FIELD, TITLE_FIELD,
    },
    logger::{self, LogLevel, LoggerConfig},
    ClientConfig, FormHandler, ServiceClient, SubmitEvent,
};
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "bannergen", version, about = "Generate banner images from a remote service")]
struct Cli {
    /// Generation endpoint, e.g. http://localhost:8000/generate-image
    #[arg(long, global = true, env = "BANNERGEN_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in seconds; unset or 0 waits indefinitely
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// User-Agent header sent to the service
    #[arg(long, global = true)]
    user_agent: Option<String>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit one image request and print the resulting URL
    Generate(GenerateArgs),
    /// Query the service health endpoint
    Health,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    subtitle: String,
    #[arg(long)]
    category: String,
    #[arg(long, default_value = "")]
    background_url: String,
    /// Comma-separated keywords
    #[arg(long, default_value = "")]
    keywords: String,
}

impl GenerateArgs {
    fn into_form(self) -> MemoryForm {
        MemoryForm::new()
            .with_value(TITLE_FIELD, self.title)
            .with_value(SUBTITLE_FIELD, self.subtitle)
            .with_value(CATEGORY_FIELD, self.category)
            .with_value(BACKGROUND_URL_FIELD, self.background_url)
            .with_value(KEYWORDS_FIELD, self.keywords)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    let cli = Cli::parse();

    let mut log_config = LoggerConfig::from_env();
    if cli.verbose {
        log_config = log_config.with_level(LogLevel::Debug);
    }
    if let Err(e) = logger::init_with_config(log_config) {
        eprintln!("{}", e);
    }
    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    }

    let mut config = ClientConfig::from_env();
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(user_agent) = cli.user_agent {
        config = config.with_user_agent(user_agent);
    }
    logger::log_config_info(&config);

    let client = match ServiceClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to create service client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Generate(args) => {
            let handler = FormHandler::new(client.image().clone());
            let form = args.into_form();
            let mut view = TerminalView::stdio();
            let mut event = SubmitEvent::new();

            let outcome = handler.handle_submit(&mut event, &form, &mut view).await;
            if outcome.is_displayed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Health => match client.health().check().await {
            Ok(status) => {
                println!("{}", status.status);
                if status.is_healthy() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}
