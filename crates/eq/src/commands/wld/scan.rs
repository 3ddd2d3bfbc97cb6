use clap::Args;
use eq_pfs::PfsArchive;
use eq_wld::Wld;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::io::Cursor;
use std::{fs::File, path::PathBuf};
use tracing::info;

#[derive(Args)]
pub struct ScanArgs {
    /// An input PFS archive
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl ScanArgs {
    /// Decode every archive entry carrying the scene extension.
    pub fn handle(&self) -> Result<()> {
        let mut f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let pfs = PfsArchive::new(&mut f)?;

        for entry in pfs.files() {
            if !entry.name.ends_with(".wld") {
                continue;
            }

            info!("decoding {}", entry.name);
            let wld = Wld::new(Cursor::new(&entry.data))
                .context(format!("decoding {}", entry.name))?;

            println!(
                "{}: {:?}, {} fragments, {} regions, {} unrecognized",
                entry.name.cyan(),
                wld.variant,
                wld.fragments.len(),
                wld.region_count,
                wld.unknown_fragments.len(),
            );
        }

        Ok(())
    }
}
