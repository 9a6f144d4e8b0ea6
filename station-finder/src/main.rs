use std::process::ExitCode;

use clap::{Parser, Subcommand};
use station_finder::config::ClientConfig;
use station_finder::maps::{google_maps_link, place_search_link};
use station_finder::mock::{MockBackend, sample_stations};
use station_finder::stations::{StationClient, StationError};
use tracing_subscriber::EnvFilter;

/// Find gas stations and build Google Maps links.
///
/// The backend is read from `STATION_FINDER_ORIGIN` (default
/// `http://localhost:8080`) and `STATION_FINDER_API_BASE` (default `/api`).
#[derive(Debug, Parser)]
#[command(name = "station-finder")]
#[command(version)]
struct Cli {
    /// Serve sample stations from an in-process mock backend
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all gas stations
    List,
    /// Stations within a radius (metres) of a coordinate
    Nearby {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
    /// Print a Google Maps pin link
    Link {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        label: Option<String>,
    },
    /// Print a Google Maps place search link
    Search {
        #[arg(required = true)]
        address: Vec<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Station(#[from] StationError),

    #[error("failed to start mock backend: {0}")]
    Mock(#[source] std::io::Error),

    #[error("failed to print JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli { mock, command } = cli;

    match command {
        Command::Link { lat, lng, label } => {
            println!("{}", google_maps_link(lat, lng, label.as_deref()));
            Ok(())
        }
        Command::Search { address } => {
            println!("{}", place_search_link(&address.join(" ")));
            Ok(())
        }
        Command::List => fetch(mock, None).await,
        Command::Nearby { lat, lng, radius } => fetch(mock, Some((lat, lng, radius))).await,
    }
}

/// Fetch all stations, or the nearby ones, and print them as JSON.
async fn fetch(mock: bool, nearby: Option<(f64, f64, f64)>) -> Result<(), CliError> {
    // The mock backend stops when its handle is dropped
    let (config, _mock_handle) = if mock {
        let handle = MockBackend::new()
            .with_stations(sample_stations())
            .with_nearby(sample_stations())
            .bind()
            .await
            .map_err(CliError::Mock)?;
        tracing::info!(origin = %handle.origin(), "serving mock backend");
        (ClientConfig::new(handle.origin()), Some(handle))
    } else {
        (ClientConfig::from_env(), None)
    };

    let client = StationClient::new(&config)?;

    let stations = match nearby {
        Some((lat, lng, radius)) => client.fetch_nearby_stations(lat, lng, radius).await?,
        None => client.fetch_stations().await?,
    };

    println!("{}", serde_json::to_string_pretty(&stations)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("station-finder").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_commands() {
        let cli = parse(&["list"]).unwrap();
        assert!(!cli.mock);
        assert!(matches!(cli.command, Command::List));

        let cli = parse(&["--mock", "nearby", "52.5", "13.4", "1000"]).unwrap();
        assert!(cli.mock);
        assert!(matches!(
            cli.command,
            Command::Nearby { lat, lng, radius } if lat == 52.5 && lng == 13.4 && radius == 1000.0
        ));

        let cli = parse(&["link", "52.5", "13.4", "Berlin"]).unwrap();
        assert!(matches!(cli.command, Command::Link { label: Some(ref l), .. } if l == "Berlin"));

        let cli = parse(&["search", "Alexanderplatz", "1"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Search { ref address } if address.join(" ") == "Alexanderplatz 1"
        ));
    }

    #[test]
    fn accepts_negative_coordinates() {
        let cli = parse(&["nearby", "-33.9", "-70.6", "500"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Nearby { lat, lng, .. } if lat == -33.9 && lng == -70.6
        ));

        let cli = parse(&["link", "-33.9", "-70.6"]).unwrap();
        assert!(matches!(cli.command, Command::Link { label: None, .. }));
    }

    #[test]
    fn rejects_bad_arguments() {
        let err = parse(&[]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ));

        let err = parse(&["list", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = parse(&["search"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);

        let err = parse(&["nearby", "north", "13.4", "1000"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
