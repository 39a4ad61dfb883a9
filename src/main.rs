use ai_chat_service::run_from_env;
use clap::Parser;
use dotenv::dotenv;

/// AI Chat Service - forwards chat conversations to the Gemini API
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Bind host, overrides the HOST environment variable
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides the PORT environment variable
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from `.env` file into std::env (optional)
    dotenv().ok();

    let args = Args::parse();

    run_from_env(args.host, args.port).await
}
