use anyhow::{anyhow, Context, Result};
use kryptobird_verifier::deployment::RpcDeployment;
use kryptobird_verifier::utils::config::{Config, ConfigOverrides};
use kryptobird_verifier::verifier::{verify_deployment, Expectation};
use std::path::PathBuf;

/// Exit code for failures that happen before any check runs.
const EXIT_SETUP_FAILURE: i32 = 2;

#[derive(Debug, Default)]
struct Args {
    overrides: ConfigOverrides,
    json: bool,
}

fn print_usage() {
    eprintln!(
        "usage: kryptobird-verify [--rpc-url <url>] [--address <0x...>] [--artifact <path>] [--network-id <id>] [--json]\n\
         env fallback: ETH_RPC_URL, CONTRACT_ADDRESS, ARTIFACT_PATH, NETWORK_ID"
    );
}

/// Returns `None` when help was requested.
fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Option<Args>> {
    let mut args = Args::default();
    let mut iter = raw.into_iter();
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .ok_or_else(|| anyhow!("missing value for {arg}"))
        };
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--rpc-url" | "-r" => args.overrides.rpc_url = Some(value()?),
            "--address" | "-a" => args.overrides.contract_address = Some(value()?),
            "--artifact" => args.overrides.artifact_path = Some(PathBuf::from(value()?)),
            "--network-id" | "-n" => args.overrides.network_id = Some(value()?),
            "--json" => args.json = true,
            other => return Err(anyhow!("unknown argument '{other}'")),
        }
    }
    Ok(Some(args))
}

fn init_tracing() {
    // Default to `info` when `RUST_LOG` is unset or invalid to avoid silent runs.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<i32> {
    kryptobird_verifier::utils::env_guard::harden_env_setup();
    let config = Config::load_with(args.overrides).context("failed to load configuration")?;
    tracing::info!(
        "[VERIFY] rpc={} artifact={} network_id={:?}",
        config.eth_rpc_url,
        config.artifact_path.display(),
        config.network_id
    );

    let deployment = RpcDeployment::new(config).context("failed to build RPC deployment")?;
    let report = verify_deployment(&deployment, &Expectation::kryptobird())
        .await
        .context("failed to obtain the deployed KryptoBird instance")?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(report.exit_code())
}

#[tokio::main]
async fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(err) => {
            eprintln!("[VERIFY] {err}");
            print_usage();
            std::process::exit(EXIT_SETUP_FAILURE);
        }
    };

    init_tracing();
    let code = match run(args).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("[VERIFY] {:#}", err);
            EXIT_SETUP_FAILURE
        }
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::parse_args;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_collects_overrides() {
        let args = parse_args(argv(&[
            "--rpc-url",
            "http://127.0.0.1:7545",
            "-a",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            "--network-id",
            "5777",
            "--json",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(
            args.overrides.rpc_url.as_deref(),
            Some("http://127.0.0.1:7545")
        );
        assert_eq!(args.overrides.network_id.as_deref(), Some("5777"));
        assert!(args.overrides.contract_address.is_some());
        assert!(args.json);
    }

    #[test]
    fn test_parse_args_help_and_errors() {
        assert!(parse_args(argv(&["--help"])).unwrap().is_none());
        assert!(parse_args(argv(&["--rpc-url"])).is_err());
        assert!(parse_args(argv(&["--bogus"])).is_err());
    }
}
