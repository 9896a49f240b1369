use anyhow::Result;
use chemanalyzer::app::App;
use chemanalyzer::models::Config;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "chemanalyzer")]
#[command(about = "Pick organobentonite additives for a paint, lubricant or adhesive")]
struct CliArgs {
    /// Product name, e.g. "ПФ-115" or "Литол-24".
    #[arg(value_name = "QUERY", required_unless_present = "image", conflicts_with = "image")]
    query: Option<String>,

    /// Photo of the product label to analyse instead of a name.
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Print the raw analysis JSON instead of the labelled report.
    #[arg(long)]
    json: bool,
}

async fn run(args: CliArgs) -> chemanalyzer::Result<()> {
    let config = Config::from_env()?;
    let app = App::new(&config);

    let input = match (&args.image, &args.query) {
        (Some(path), _) => App::image_input(path).await?,
        (None, Some(query)) => App::text_input(query)?,
        (None, None) => {
            return Err(chemanalyzer::Error::InvalidInput(
                "provide a product name or --image".to_string(),
            ))
        }
    };

    let cancel = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    let report = app.analyze_until(&input, cancel).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.result)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chemanalyzer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();
    info!("Starting chemanalyzer");

    match run(args).await {
        Ok(()) => {
            info!("Analysis completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("Ошибка при анализе: {}", e);
            std::process::exit(1);
        }
    }
}
