//! `stickfont` command line: convert text to single-stroke glyph outlines.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use stickfont::config::Config;
use stickfont::layout::{AdvanceSource, Margins};
use stickfont::{
    convert_to_file, font_names, font_path, pagesize, Colour, ConversionError, Font,
    OutputFormat, Px,
};

#[derive(Parser)]
#[command(version, about = "Convert text to single-stroke glyph outlines as SVG or PDF")]
struct Cli {
    /// Text file to convert; reads standard input when neither this nor --text is given
    file: Option<PathBuf>,

    /// Convert this text instead of reading a file
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Where to save the document; the extension picks the format unless --format is given
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format: svg or pdf
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Read settings from a TOML file; flags override it
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Font file to use
    #[arg(short, long, value_name = "PATH", conflicts_with = "font_name")]
    font: Option<PathBuf>,

    /// Name of a font in the font directory, without the .ttf extension
    #[arg(short = 'n', long, value_name = "NAME")]
    font_name: Option<String>,

    /// Directory holding the fonts listed by --list-fonts and chosen by --font-name
    #[arg(long, value_name = "DIR")]
    font_dir: Option<PathBuf>,

    /// Print the fonts in the font directory and exit
    #[arg(long)]
    list_fonts: bool,

    /// Print the known paper sizes and exit
    #[arg(long)]
    list_papers: bool,

    /// Paper size, e.g. "A4 Portrait" or "A5 Landscape"
    #[arg(short, long)]
    paper: Option<String>,

    /// Font size in device units
    #[arg(short, long, allow_negative_numbers = true)]
    size: Option<f32>,

    /// Set all four margins
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    margin: Option<f32>,

    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    margin_top: Option<f32>,

    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    margin_right: Option<f32>,

    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    margin_bottom: Option<f32>,

    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    margin_left: Option<f32>,

    /// Extra space after every glyph
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    letter_spacing: Option<f32>,

    /// Distance between baselines as a multiple of the font size
    #[arg(long, value_name = "FACTOR", allow_negative_numbers = true)]
    line_spacing: Option<f32>,

    /// Stroke colour, as #rrggbb or a colour name
    #[arg(long, value_name = "COLOUR")]
    stroke: Option<Colour>,

    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    stroke_width: Option<f32>,

    /// Advance by glyph bounding box widths instead of the font's advance widths
    #[arg(long)]
    bounding_box_advance: bool,
}

impl Cli {
    /// Layer the flags over the configuration file, or over the defaults without one
    fn config(&self) -> Result<Config, ConversionError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(dir) = &self.font_dir {
            config.font_dir = dir.clone();
        }
        if let Some(name) = &self.font_name {
            config.font = Some(name.clone());
        }
        if let Some(paper) = &self.paper {
            config.paper = paper.clone();
        }
        if let Some(size) = self.size {
            config.font_size = Px(size);
        }
        if let Some(margin) = self.margin {
            config.margins = Margins::all(Px(margin));
        }
        let sides = [
            (self.margin_top, &mut config.margins.top),
            (self.margin_right, &mut config.margins.right),
            (self.margin_bottom, &mut config.margins.bottom),
            (self.margin_left, &mut config.margins.left),
        ];
        for (flag, side) in sides {
            if let Some(value) = flag {
                *side = Px(value);
            }
        }
        if let Some(spacing) = self.letter_spacing {
            config.letter_spacing = Px(spacing);
        }
        if let Some(spacing) = self.line_spacing {
            config.line_spacing = spacing;
        }
        if let Some(stroke) = self.stroke {
            config.style.stroke = stroke;
        }
        if let Some(width) = self.stroke_width {
            config.style.stroke_width = Px(width);
        }
        if self.bounding_box_advance {
            config.advance = AdvanceSource::BoundingBox;
        }
        if self.format.is_some() {
            config.format = self.format;
        }

        Ok(config)
    }

    /// The text to convert, with surrounding whitespace stripped. Blank input is refused
    /// so no empty document is written.
    fn text(&self) -> Result<String, ConversionError> {
        let text = match (&self.text, &self.file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            }
        };

        let text = text.trim();
        if text.is_empty() {
            return Err(ConversionError::InvalidParameter {
                name: "text",
                reason: "there is no text to convert".to_string(),
            });
        }
        Ok(text.to_string())
    }
}

fn font_file(cli: &Cli, config: &Config) -> Result<PathBuf, ConversionError> {
    if let Some(path) = &cli.font {
        return Ok(path.clone());
    }
    if let Some(path) = config.font_file() {
        return Ok(path);
    }

    let available = font_names(&config.font_dir)
        .map(|names| names.join(", "))
        .unwrap_or_default();
    Err(ConversionError::InvalidParameter {
        name: "font",
        reason: format!(
            "no font given; use --font or --font-name (fonts in {}: {})",
            config.font_dir.display(),
            if available.is_empty() { "none" } else { available.as_str() }
        ),
    })
}

/// The format asked for, else the one the output file name implies, else SVG; and the
/// output path, defaulting to `output.<ext>`
fn output(cli: &Cli, config: &Config) -> (OutputFormat, PathBuf) {
    let format = config
        .format
        .or_else(|| cli.output.as_deref().and_then(OutputFormat::from_path))
        .unwrap_or_default();
    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("output.{}", format.extension())));
    (format, path)
}

fn list_fonts(dir: &Path) -> Result<(), ConversionError> {
    for name in font_names(dir)? {
        println!("{name}\t{}", font_path(dir, &name).display());
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), ConversionError> {
    let config = cli.config()?;

    if cli.list_papers {
        for name in pagesize::names() {
            println!("{name}");
        }
        return Ok(());
    }
    if cli.list_fonts {
        return list_fonts(&config.font_dir);
    }

    let text = cli.text()?;
    let font_file = font_file(cli, &config)?;
    let font = Font::open(&font_file)?;
    debug!(
        "using font {} from {}",
        font.name().unwrap_or("(unnamed)"),
        font_file.display()
    );

    let (format, path) = output(cli, &config);
    let mut params = config.params()?;
    params.format = format;

    let message = convert_to_file(&text, &font, &params, &path)?;
    println!("{message}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_font_error() {
                eprintln!("hint: --list-fonts shows the fonts in the font directory");
            }
            ExitCode::FAILURE
        }
    }
}
