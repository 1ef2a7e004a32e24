use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sweep",
    about = "Removes JavaScript dependency and build artifacts from the current directory",
    version = "0.1.0"
)]
pub struct Cli {}
