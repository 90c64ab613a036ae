use clap::Subcommand;
use std::path::PathBuf;

pub mod convert;
pub mod info;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the header and group table of a COL file
    Info {
        /// COL file to inspect
        file: PathBuf,

        /// Also parse the blocks and report per-group statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Convert a COL file to Wavefront OBJ
    ToObj {
        /// Source COL file
        source: PathBuf,

        /// Output OBJ file
        destination: PathBuf,
    },

    /// Build a COL file from a Wavefront OBJ
    FromObj {
        /// Source OBJ file
        source: PathBuf,

        /// Output COL file
        destination: PathBuf,

        /// Scale factor applied to every vertex
        #[arg(long, default_value_t = 1.0)]
        scale: f32,
    },
}

impl Commands {
    pub fn execute(self) -> anyhow::Result<()> {
        match self {
            Commands::Info { file, verbose } => info::run(&file, verbose),
            Commands::ToObj {
                source,
                destination,
            } => convert::to_obj(&source, &destination),
            Commands::FromObj {
                source,
                destination,
                scale,
            } => convert::from_obj(&source, &destination, scale),
        }
    }
}
