use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use trophy_icon_gen::icon_gen::{self, DEFAULT_OUTPUT_DIR};

#[derive(Debug, Parser)]
#[clap(
    name = "trophy-icon-gen",
    about = "Generate the trophy app icon set for the iOS asset catalog"
)]
struct Args {
    /// Existing directory the icons are written into.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Also write the icon set's Contents.json
    #[clap(long)]
    contents_json: bool,

    /// Skip system fonts and always draw the vector trophy
    #[clap(long)]
    no_fonts: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        contents_json: args.contents_json,
        no_fonts: args.no_fonts,
    })
}
