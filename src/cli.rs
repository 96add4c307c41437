use clap::Parser;
use std::path::PathBuf;

/// User-specified command line parameters
#[derive(Debug, Parser)]
#[clap(name = "raycast", about)]
pub struct Args {
    /// Width of the output image, in pixels.
    #[clap(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height of the output image, in pixels.
    #[clap(value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Scene description to load.
    pub input: PathBuf,

    /// Where the rendered image goes.
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["raycast", "640", "480", "in.json", "out.ppm"]).unwrap();
        assert_eq!(args.width, 640);
        assert_eq!(args.height, 480);
        assert_eq!(args.input, PathBuf::from("in.json"));
        assert_eq!(args.output, PathBuf::from("out.ppm"));
    }

    #[test]
    fn test_argument_count() {
        assert!(Args::try_parse_from(["raycast", "640", "480", "in.json"]).is_err());
        let extra = ["raycast", "640", "480", "in.json", "out.ppm", "extra"];
        assert!(Args::try_parse_from(extra).is_err());
    }

    #[test]
    fn test_dimensions_must_be_positive() {
        assert!(Args::try_parse_from(["raycast", "0", "480", "in.json", "out.ppm"]).is_err());
        assert!(Args::try_parse_from(["raycast", "640", "-3", "in.json", "out.ppm"]).is_err());
        assert!(Args::try_parse_from(["raycast", "wide", "480", "in.json", "out.ppm"]).is_err());
    }
}
