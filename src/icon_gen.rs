use crate::{
    background::create_gradient_background,
    contents_json::{write_contents_json, ContentsFile},
    emblem::{EmblemRenderer, EmblemStyle},
    icon_set::{IconSpec, ICON_SPECS},
};
use anyhow::{Context, Result};
use image::{DynamicImage, ImageOutputFormat, RgbaImage};
use log::debug;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Asset catalog directory the icons are written to by default.
pub const DEFAULT_OUTPUT_DIR: &str =
    "/Users/nevrodda/Documents/torny_swift/TornyiOS/Assets.xcassets/AppIcon.appiconset/";

#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
    pub contents_json: bool,
    pub no_fonts: bool,
}

pub fn generate_icons(args: Args) -> Result<()> {
    let renderer = if args.no_fonts {
        EmblemRenderer::procedural()
    } else {
        EmblemRenderer::system()
    };

    for spec in &ICON_SPECS {
        create_app_icon(spec, &args.output, &renderer)?;
    }

    if args.contents_json {
        write_contents_json(&args.output, &ContentsFile::for_icons(&ICON_SPECS))?;
        println!("Created {}", args.output.join("Contents.json").display());
    }

    println!("\n✅ All app icons created successfully!");
    println!("Icons saved to: {}", args.output.display());

    Ok(())
}

/// Compose a single icon: gradient background with the trophy emblem on top.
pub fn render_icon(size: u32, renderer: &EmblemRenderer) -> (RgbaImage, EmblemStyle) {
    let mut canvas = create_gradient_background(size, size);
    let style = renderer.draw(&mut canvas, size);
    (canvas, style)
}

/// Render one icon and write it into `out_dir`, replacing any existing file.
pub fn create_app_icon(
    spec: &IconSpec,
    out_dir: &Path,
    renderer: &EmblemRenderer,
) -> Result<PathBuf> {
    let (canvas, style) = render_icon(spec.size, renderer);
    debug!("{} drawn with {:?}", spec.filename, style);

    let output_path = out_dir.join(spec.filename);
    save_png(canvas, &output_path)?;
    println!(
        "Created {}x{} icon: {}",
        spec.size,
        spec.size,
        output_path.display()
    );

    Ok(output_path)
}

fn save_png(canvas: RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut writer, ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    writer.flush()?;

    Ok(())
}
