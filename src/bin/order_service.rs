//! Order service entry point. Composes orders against the catalog service,
//! default port 8082.

use anyhow::Result;
use microshop::config::AppConfig;
use microshop::logging::init_logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = init_logging(&config);

    println!(
        "Order service starting (env: {}, build: {})",
        env,
        env!("GIT_HASH")
    );
    microshop::order::serve(&config.orders).await
}
