use envparse::{Decoder, EnvParser, Var};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WorkerConfig {
    num_workers: i64,
    retention_policy: String,
    debug: Option<bool>,
}

fn main() -> Result<(), envparse::EnvError> {
    std::env::set_var("NUM_WORKERS", "4");

    let mut parser = EnvParser::new();
    parser.register(
        Var::new("NUM_WORKERS")
            .decoder(Decoder::Int)
            .required(false)
            .default(1i64),
    )?;
    parser.register(
        Var::new("RETENTION_POLICY")
            .required(false)
            .default("keep-alive"),
    )?;
    parser.register(Var::new("DEBUG").decoder(Decoder::Bool).required(false))?;

    println!("Expected environment:\n{}", parser.description());

    // Deserialize once into a typed struct
    let config: WorkerConfig = parser.parse_env()?.deserialize()?;

    println!("Workers: {}", config.num_workers);
    println!("Retention: {}", config.retention_policy);
    println!("Debug: {:?}", config.debug);

    Ok(())
}
