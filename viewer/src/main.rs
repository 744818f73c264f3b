use std::{error::Error, path::PathBuf};

use clap::Parser;
use tint::{
    app,
    ren::{
        RenderError,
        framebuffer,
        settings::{Resolution, Settings},
    },
};

/// Renders the triangle once and writes it to an image file.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Image to write; the format comes from the extension.
    #[arg(short, long, default_value = "triangle.png", value_parser = parse_output)]
    output: PathBuf,
    /// Frame size as WIDTHxHEIGHT.
    #[arg(short, long, default_value_t = Resolution::default(), value_parser = clap::value_parser!(Resolution))]
    resolution: Resolution,
}

// Rejects paths the frame could not be saved to before anything is rendered.
fn parse_output(value: &str) -> Result<PathBuf, RenderError> {
    let path = PathBuf::from(value);
    framebuffer::output_format(&path)?;
    Ok(path)
}

impl Args {
    fn settings(self) -> Settings {
        Settings::default().output(self.output).resolution(self.resolution)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    app::new(String::from("Viewer")).settings(args.settings()).run()?;
    Ok(())
}
