pub mod create;
pub mod extract;
pub mod list;

#[derive(clap::Subcommand)]
pub enum PfsCommands {
    /// List the entries of a PFS archive
    List(list::ListArgs),
    /// Extract a PFS archive into a directory
    Extract(extract::ExtractArgs),
    /// Create a PFS archive from a directory
    Create(create::CreateArgs),
}

impl PfsCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            PfsCommands::List(list) => list.handle(),
            PfsCommands::Extract(extract) => extract.handle(),
            PfsCommands::Create(create) => create.handle(),
        }
    }
}
