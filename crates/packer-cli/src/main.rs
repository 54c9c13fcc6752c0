use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{arg, Command};
use packer::{Packer, PackerConfig, PackerError};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an optional configuration file path.
const CONFIG_ENV: &str = "PACKER_CONFIG";

fn cli() -> Command {
    Command::new("packer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Picks the most valuable items that fit each line's weight limit")
        .after_help(
            "Environment:\n  PACKER_CONFIG  Path to a .toml or .yaml configuration file\n  RUST_LOG       Log filter (default: warn)",
        )
        .arg(
            arg!(<INPUT> "Path to the input file, one problem per line")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn main() -> ExitCode {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            // Help and version go to stdout and are not failures.
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    let Some(input) = matches.get_one::<PathBuf>("INPUT") else {
        let _ = cli().print_help();
        return ExitCode::FAILURE;
    };

    init_logging();

    match run(input) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Packing failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(input: &Path) -> Result<String, PackerError> {
    let config = load_config(std::env::var_os(CONFIG_ENV).map(PathBuf::from).as_deref())?;
    Packer::new(&config)?.pack_file(input)
}

fn load_config(path: Option<&Path>) -> Result<PackerConfig, PackerError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            Ok(PackerConfig::load(path)?)
        }
        None => Ok(PackerConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::error::ErrorKind;
    use packer::SolverType;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_single_input_argument() {
        let matches = cli().try_get_matches_from(["packer", "input.txt"]).unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>("INPUT"),
            Some(&PathBuf::from("input.txt"))
        );
    }

    #[test]
    fn test_wrong_argument_count_is_an_error() {
        for args in [vec!["packer"], vec!["packer", "a.txt", "b.txt"]] {
            let err = cli().try_get_matches_from(args).unwrap_err();
            assert!(err.use_stderr());
        }
    }

    #[test]
    fn test_help_and_version_are_not_errors() {
        let err = cli().try_get_matches_from(["packer", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());

        let err = cli().try_get_matches_from(["packer", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), PackerConfig::default());
    }

    #[test]
    fn test_load_config_from_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "solver:\n  solver_type: exhaustive\nparallel: true").unwrap();
        file.flush().unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.solver.solver_type, SolverType::Exhaustive);
        assert!(config.parallel);
    }

    #[test]
    fn test_load_config_missing_file_is_fatal() {
        let err = load_config(Some(Path::new("no/such/packer.toml"))).unwrap_err();
        assert!(matches!(err, PackerError::Config(_)));
    }
}
