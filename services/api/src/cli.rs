use crate::estimate::{run_areas, run_estimate, AreasArgs, EstimateArgs};
use crate::server;
use cheru_avm::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Cheru AVM",
    about = "Serve and query the rule-based property valuation engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Value a single property and print the estimate as JSON
    Estimate(EstimateArgs),
    /// List reference areas and amenity uplifts
    Areas(AreasArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate(args) => run_estimate(args),
        Command::Areas(args) => run_areas(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::PropertyCommand;
    use rust_decimal_macros::dec;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["cheru-avm-api"]).expect("parses");
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["cheru-avm-api", "serve", "--port", "9000"]).expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(9000)),
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn parses_house_estimate_arguments() {
        let cli = Cli::try_parse_from([
            "cheru-avm-api",
            "estimate",
            "--revision",
            "revised",
            "house",
            "--area",
            "Runda",
            "--house-size-sqm",
            "320",
            "--acres",
            "0.5",
            "--year-built",
            "2012",
            "--shape",
            "corner",
            "--amenity",
            "pool,garden",
            "--amenity",
            "solar panels",
        ])
        .expect("parses");

        let Some(Command::Estimate(args)) = cli.command else {
            panic!("expected estimate command");
        };
        assert!(args.revision.is_some());
        match args.property {
            PropertyCommand::House(house) => {
                assert_eq!(house.house_size_sqm, dec!(320));
                assert_eq!(house.acres, dec!(0.5));
                assert_eq!(house.amenity, ["pool", "garden", "solar panels"]);
            }
            other => panic!("expected house, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_plot_shape() {
        let result = Cli::try_parse_from([
            "cheru-avm-api",
            "estimate",
            "land",
            "--area",
            "Karen",
            "--acres",
            "1",
            "--shape",
            "triangular",
        ]);
        assert!(result.is_err());
    }
}
