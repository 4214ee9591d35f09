use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = authormap::cli::Cli::parse();

    if let Err(err) = authormap::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
