use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "emberfield")]
#[command(about = "Animated particle-and-wireframe backdrop", long_about = None)]
pub struct Cli {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Scene layout seed; derived from the wall clock when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}
