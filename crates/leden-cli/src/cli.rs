
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "leden", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path of the config file
    #[clap(long, env = "LEDEN_CONFIG", default_value = "leden.toml")]
    pub config: String,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}
