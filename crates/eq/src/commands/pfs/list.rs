use clap::Args;
use eq_pfs::PfsArchive;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::{fs::File, path::PathBuf};

#[derive(Args)]
pub struct ListArgs {
    /// An input PFS archive
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl ListArgs {
    pub fn handle(&self) -> Result<()> {
        let mut f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let pfs = PfsArchive::new(&mut f)?;

        for entry in pfs.files() {
            println!(
                "{:>10}  {:08x}  {}",
                entry.data.len().dimmed(),
                entry.hash.dimmed(),
                entry.name.cyan(),
            );
        }

        println!(
            "{} entries, {} bytes decompressed",
            pfs.len(),
            pfs.decompressed_size().unwrap_or_default(),
        );

        Ok(())
    }
}
