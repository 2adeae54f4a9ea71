use std::ffi::OsString;

use clap::App;
use tracing::debug;

use crate::config::{DemoConfig, DemoKind};
use crate::demos;
use crate::error::GlcError;

/// Parses a full command line (program name first) into the demo to run and its settings.
pub fn parse_args<I, T>(args: I) -> Result<(DemoKind, DemoConfig), GlcError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let yaml = load_yaml!("cli.yaml");
    let matches = App::from_yaml(yaml).get_matches_from_safe(args)?;

    let (name, demo_matches) = matches.subcommand();
    let demo = name.parse::<DemoKind>().map_err(|e| {
        clap::Error::with_description(&e, clap::ErrorKind::UnrecognizedSubcommand)
    })?;

    let config = DemoConfig::from_matches(&matches, demo_matches)?;

    Ok((demo, config))
}

pub fn cli_main() -> Result<(), GlcError> {
    let (demo, config) = match parse_args(std::env::args_os()) {
        Ok(parsed) => parsed,
        // Covers --help and --version too, which clap reports as errors
        Err(GlcError::Cli(e)) => e.exit(),
        Err(e) => return Err(e),
    };

    debug!(?demo, ?config, "starting");

    demos::run(demo, config)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_match_the_classic_window() {
        let (demo, config) = parse_args(vec!["glcollection", "cube"]).unwrap();

        assert_eq!(demo, DemoKind::Cube);
        assert_eq!(config, DemoConfig::default());
        assert_eq!((config.width, config.height), (640, 480));
    }

    #[test]
    fn every_demo_has_a_subcommand() {
        let cases = [
            ("cube", DemoKind::Cube),
            ("screen-quad", DemoKind::ScreenQuad),
            ("screenshot", DemoKind::Screenshot),
            ("normals", DemoKind::Normals),
        ];

        for (name, kind) in cases.iter() {
            let (demo, _) = parse_args(vec!["glcollection", *name]).unwrap();
            assert_eq!(demo, *kind);
        }
    }

    #[test]
    fn window_options_come_before_the_demo() {
        let (_, config) = parse_args(vec![
            "glcollection", "--width", "800", "--height", "600",
            "--screenshot-dir", "/tmp/shots", "screenshot",
        ]).unwrap();

        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.screenshot_dir, PathBuf::from("/tmp/shots"));
    }

    #[test]
    fn window_options_also_come_after_the_demo() {
        let (demo, config) = parse_args(vec!["glcollection", "cube", "--width", "800"]).unwrap();
        assert_eq!(demo, DemoKind::Cube);
        assert_eq!((config.width, config.height), (800, 480));

        let (_, config) = parse_args(vec![
            "glcollection", "--height", "600", "normals",
            "--screenshot-dir", "/tmp/shots", "--normal-length", "0.5",
        ]).unwrap();
        assert_eq!((config.width, config.height), (640, 600));
        assert_eq!(config.screenshot_dir, PathBuf::from("/tmp/shots"));
        assert_eq!(config.normal_length, 0.5);
    }

    #[test]
    fn bad_window_options_after_the_demo_are_cli_errors() {
        let result = parse_args(vec!["glcollection", "screenshot", "--width", "0"]);
        assert!(matches!(result, Err(GlcError::Cli(_))));
    }

    #[test]
    fn normals_options() {
        let (demo, config) = parse_args(vec![
            "glcollection", "normals", "--model", "models/teapot.obj",
            "--shader-dir", "assets/shaders", "--normal-length", "0.5",
        ]).unwrap();

        assert_eq!(demo, DemoKind::Normals);
        assert_eq!(config.model, PathBuf::from("models/teapot.obj"));
        assert_eq!(config.shader_dir, PathBuf::from("assets/shaders"));
        assert_eq!(config.normal_length, 0.5);
    }

    #[test]
    fn bad_numbers_are_cli_errors() {
        let result = parse_args(vec!["glcollection", "--width", "wide", "cube"]);
        assert!(matches!(result, Err(GlcError::Cli(_))));

        let result = parse_args(vec!["glcollection", "--height", "0", "cube"]);
        assert!(matches!(result, Err(GlcError::Cli(_))));

        let result = parse_args(vec!["glcollection", "normals", "--normal-length", "long"]);
        assert!(matches!(result, Err(GlcError::Cli(_))));
    }

    #[test]
    fn a_demo_is_required() {
        assert!(parse_args(vec!["glcollection"]).is_err());
        assert!(parse_args(vec!["glcollection", "teapot"]).is_err());
    }

    #[test]
    fn titles_and_centring() {
        assert_eq!(DemoKind::Cube.title(), "Cube - GLCollection");
        assert_eq!(DemoKind::Normals.title(), "Visualizing Normals - GLCollection");
        assert!(DemoKind::Screenshot.centered());
        assert!(!DemoKind::ScreenQuad.centered());
    }
}
