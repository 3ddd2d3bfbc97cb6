pub mod info;
pub mod scan;

#[derive(clap::Subcommand)]
pub enum WldCommands {
    /// Summarize one WLD scene file
    Info(info::InfoArgs),
    /// Decode every WLD scene inside a PFS archive
    Scan(scan::ScanArgs),
}

impl WldCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            WldCommands::Info(info) => info.handle(),
            WldCommands::Scan(scan) => scan.handle(),
        }
    }
}
