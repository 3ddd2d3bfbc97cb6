pub mod pfs;
pub mod wld;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle PFS archives
    Pfs {
        #[command(subcommand)]
        command: pfs::PfsCommands,
    },
    /// Handle WLD scene files
    Wld {
        #[command(subcommand)]
        command: wld::WldCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Pfs { command } => command.handle(),
            Commands::Wld { command } => command.handle(),
        }
    }
}
