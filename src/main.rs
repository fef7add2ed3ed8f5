use aya::cli::commands::{Cli, Commands};
use aya::domain::values::city_name::normalize_os;
use aya::Aya;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aya=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let aya = match Aya::new() {
        Ok(aya) => aya,
        Err(e) => {
            eprintln!("Error initializing aya: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(aya, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(aya: Aya, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Weather { city, graph } => {
            let city = city.as_deref().map(normalize_os);
            let report = aya.weather(city.as_deref(), graph).await?;
            println!("{report}");
        }
        Commands::ClearConfig => {
            aya.clear_config()?;
            println!("Config file cleared.");
        }
    }
    Ok(())
}
