use clap::Parser;
use oop_tour::utils::error::ErrorSeverity;
use oop_tour::utils::{logger, validation::Validate};
use oop_tour::{BufferConsole, CliConfig, OutputFormat, StdoutConsole, TourConfig, TourEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    match args.format {
        OutputFormat::Text => logger::init_cli_logger(args.verbose),
        OutputFormat::Json => logger::init_json_logger(args.verbose),
    }

    tracing::info!("Starting oop-tour");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading scenario from: {}", path);
            match TourConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load scenario '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => TourConfig::default(),
    };

    if !args.lessons.is_empty() {
        config.tour.lessons = Some(args.lessons.clone());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Scenario validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = TourEngine::from_config(&config, &[]);

    let outcome = match args.format {
        OutputFormat::Text => engine.run(&mut StdoutConsole::new()).map(|_| ()),
        OutputFormat::Json => engine.run(&mut BufferConsole::new()).and_then(|report| {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }),
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Tour failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // Low severity is a warning, the tour still counts as done
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    tracing::info!("✅ Tour completed");
    Ok(())
}
