#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use storyworld::backend::{run_server, ServerConfig};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();
    run_server(config).await?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
