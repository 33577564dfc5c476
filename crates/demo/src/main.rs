use valuekit_demo::{DemoConfig, build};

fn main() -> anyhow::Result<()> {
    valuekit_observability::init();

    let config = DemoConfig::from_env()?;
    tracing::info!(chunk_size = config.chunk_size, "running demonstrations");

    let report = build(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    tracing::info!("done");
    Ok(())
}
