use skyfare::adapters::outbound::console::StderrProgressReporter;
use skyfare::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use skyfare::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use skyfare::adapters::outbound::network::{AmadeusOffersClient, AmadeusTokenClient};
use skyfare::application::dto::OutputFormat;
use skyfare::application::use_cases::SearchOffersUseCase;
use skyfare::cli::Args;
use skyfare::config::{self, ProviderCredentials, DEFAULT_BASE_URL};
use skyfare::ports::outbound::{OfferFormatter, OutputPresenter};
use skyfare::shared::error::ExitCode;
use skyfare::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    // Resolve configuration: explicit file, or silent working-directory discovery
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(Path::new("."))?,
    };

    let mut credentials = ProviderCredentials::from_env();
    let mut base_url = DEFAULT_BASE_URL.to_string();
    let mut default_travel_class = None;

    if let Some(file) = config_file {
        if let Some(client_id) = file.client_id {
            credentials.client_id = client_id;
        }
        if let Some(client_secret) = file.client_secret {
            credentials.client_secret = client_secret;
        }
        if let Some(url) = file.base_url {
            base_url = url;
        }
        default_travel_class = file.travel_class;
    }

    // Create adapters (Dependency Injection)
    let token_provider = AmadeusTokenClient::new(base_url.as_str(), credentials)?;
    let offer_gateway = AmadeusOffersClient::new(base_url.as_str())?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = SearchOffersUseCase::new(token_provider, offer_gateway, progress_reporter);

    // Execute use case
    let criteria = args.criteria(default_travel_class);
    let response = use_case.execute(criteria).await?;

    // Format results
    let formatter: Box<dyn OfferFormatter> = match args.format {
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
    };
    let formatted_output = formatter.format(&response)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}
