use clap::Args;
use eq_wld::Wld;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::{fs::File, path::PathBuf};

#[derive(Args)]
pub struct InfoArgs {
    /// An input WLD scene file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl InfoArgs {
    pub fn handle(&self) -> Result<()> {
        let mut f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let wld = Wld::new(&mut f)?;

        println!(
            "{:?} scene, {} fragments, {} regions, {} bytes of names",
            wld.variant,
            wld.fragment_count,
            wld.region_count,
            wld.strings.len(),
        );

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for fragment in &wld.fragments {
            *counts.entry(fragment.kind()).or_default() += 1;
        }
        for (kind, count) in counts {
            println!("{:>6}  {}", count, kind.cyan());
        }

        if !wld.unknown_fragments.is_empty() {
            println!(
                "{}",
                format!(
                    "{} fragments had unrecognized type ids and were skipped",
                    wld.unknown_fragments.len()
                )
                .yellow()
            );
        }

        Ok(())
    }
}
