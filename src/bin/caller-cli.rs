use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "caller-cli")]
#[command(about = "Drive the scenarios of a running caller service", long_about = None)]
struct Cli {
    /// Base URL of the caller service.
    #[arg(short, long, env = "CALLER_URL", default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every scenario and its resolved endpoint
    List,
    /// Invoke one scenario, e.g. `run callResponseObjectDemoAPI`
    Run { route: String },
    /// Invoke every listed scenario in order
    RunAll,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::List => {
            let scenarios = list(&client, base).await?;
            for s in &scenarios {
                println!(
                    "{:<4} {:<85} {}",
                    s["method"].as_str().unwrap_or("?"),
                    s["path"].as_str().unwrap_or("?"),
                    s["endpoint"].as_str().unwrap_or("<unconfigured>"),
                );
            }
        }
        Commands::Run { route } => {
            let path = if route.starts_with("/caller/") {
                route
            } else {
                format!("/caller/{}", route.trim_start_matches('/'))
            };
            let res = client.get(format!("{base}{path}")).send().await?;
            print_response(res).await?;
        }
        Commands::RunAll => {
            let scenarios = list(&client, base).await?;
            for s in &scenarios {
                let Some(path) = s["path"].as_str() else {
                    continue;
                };
                println!("==> {path}");
                let res = client.get(format!("{base}{path}")).send().await?;
                print_response(res).await?;
            }
        }
    }

    Ok(())
}

async fn list(client: &reqwest::Client, base: &str) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let res = client
        .get(format!("{base}/caller/scenarios"))
        .send()
        .await?
        .error_for_status()?;
    Ok(res.json().await?)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: caller service returned status {}", status);
        if let Ok(text) = res.text().await {
            if !text.is_empty() {
                eprintln!("Response: {}", text);
            }
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
