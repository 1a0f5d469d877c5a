//! Product service entry point. Serves the seeded catalog, default port 8081.

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
        "Product service starting (env: {}, build: {})",
        env,
        env!("GIT_HASH")
    );
    microshop::catalog::serve(&config.catalog).await
}
