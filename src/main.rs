mod cli;

use bom_rollup::adapters::outbound::console::StderrProgressReporter;
use bom_rollup::adapters::outbound::network::{BomApiClient, CachingPartCatalog};
use bom_rollup::application::dto::{ReportFormat, RollupRequest};
use bom_rollup::application::factories::ReportWriterFactory;
use bom_rollup::application::use_cases::RollUpUseCase;
use bom_rollup::config::{self, Settings};
use bom_rollup::logging;
use bom_rollup::ports::inbound::RollupPort;
use bom_rollup::ports::outbound::PartCatalog;
use bom_rollup::shared::error::ExitCode;
use bom_rollup::shared::Result;
use cli::Args;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    let exit_code = match load_settings(args).and_then(|settings| {
        logging::init(&settings.log_file);
        run(&settings)
    }) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            error!(error = %format!("{:#}", e), "Roll-up aborted");
            report_error(&e);
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn report_error(e: &anyhow::Error) {
    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);

    // Display error chain
    for cause in e.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
}

fn load_settings(args: Args) -> Result<Settings> {
    let current_dir = std::env::current_dir()?;
    let config_file = config::discover_config(&current_dir)?;
    Ok(Settings::resolve(args.output, config_file))
}

fn run(settings: &Settings) -> Result<()> {
    let format = ReportFormat::from_path(&settings.output);
    info!(
        api_host = %settings.api_host,
        output = %settings.output.display(),
        %format,
        "Starting roll-up"
    );

    // Create adapters (Dependency Injection)
    let client = BomApiClient::with_config(&settings.api_host, settings.request_timeout)?;
    let part_catalog: Box<dyn PartCatalog> = if settings.cache_part_numbers {
        Box::new(CachingPartCatalog::new(client))
    } else {
        Box::new(client)
    };
    let report_writer = ReportWriterFactory::create(format);
    let progress_reporter = StderrProgressReporter::new();

    let use_case = RollUpUseCase::new(part_catalog, report_writer, progress_reporter);

    let response = use_case.run(RollupRequest::new(settings.output.clone()))?;

    if !response.report_written {
        info!("Bill of materials was empty, no report written");
    }

    Ok(())
}
