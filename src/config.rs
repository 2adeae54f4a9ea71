use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgMatches, ErrorKind};

use crate::error::GlcError;

/// Which of the examples to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoKind {
    Cube,
    ScreenQuad,
    Screenshot,
    Normals,
}

impl DemoKind {
    /// Window title, in the `"<Name> - GLCollection"` form.
    pub fn title(self) -> &'static str {
        match self {
            DemoKind::Cube => "Cube - GLCollection",
            DemoKind::ScreenQuad => "Screen Quad - GLCollection",
            DemoKind::Screenshot => "Screenshot - GLCollection",
            DemoKind::Normals => "Visualizing Normals - GLCollection",
        }
    }

    /// Whether the window gets moved to the middle of its monitor before it's shown.
    pub fn centered(self) -> bool {
        self != DemoKind::ScreenQuad
    }
}

impl FromStr for DemoKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(DemoKind::Cube),
            "screen-quad" => Ok(DemoKind::ScreenQuad),
            "screenshot" => Ok(DemoKind::Screenshot),
            "normals" => Ok(DemoKind::Normals),
            other => Err(format!("unknown demo `{}`", other)),
        }
    }
}

/// Settings shared by the demos, plus the few only `normals` reads.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub width: u32,
    pub height: u32,
    pub screenshot_dir: PathBuf,
    pub model: PathBuf,
    pub shader_dir: PathBuf,
    pub normal_length: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            width: 640,
            height: 480,
            screenshot_dir: PathBuf::from("screenshots"),
            model: PathBuf::from("models/icosahedron.obj"),
            shader_dir: PathBuf::from("shaders"),
            normal_length: 0.2,
        }
    }
}

fn positive(name: &str, value: u32) -> Result<u32, clap::Error> {
    if value == 0 {
        Err(clap::Error::with_description(
            &format!("--{} must be greater than zero", name),
            ErrorKind::InvalidValue,
        ))
    } else {
        Ok(value)
    }
}

/// The window options are global, so they can come before or after the demo name. Whichever set
/// of matches actually holds `name` wins, with the demo's own taking precedence.
fn holding<'m, 'a>(
    matches: &'m ArgMatches<'a>,
    demo_matches: Option<&'m ArgMatches<'a>>,
    name: &str,
) -> Option<&'m ArgMatches<'a>> {
    demo_matches
        .filter(|sub| sub.is_present(name))
        .or_else(|| Some(matches).filter(|m| m.is_present(name)))
}

impl DemoConfig {
    /// Reads the window options from whichever of `matches` or `demo_matches` holds them, and the
    /// `normals` options from `demo_matches`. Anything not given keeps its default.
    pub fn from_matches<'a>(
        matches: &ArgMatches<'a>,
        demo_matches: Option<&ArgMatches<'a>>,
    ) -> Result<Self, GlcError> {
        let mut config = DemoConfig::default();

        if let Some(m) = holding(matches, demo_matches, "width") {
            config.width = positive("width", value_t!(m, "width", u32)?)?;
        }
        if let Some(m) = holding(matches, demo_matches, "height") {
            config.height = positive("height", value_t!(m, "height", u32)?)?;
        }
        if let Some(dir) = holding(matches, demo_matches, "screenshot-dir")
            .and_then(|m| m.value_of_os("screenshot-dir"))
        {
            config.screenshot_dir = PathBuf::from(dir);
        }

        if let Some(sub) = demo_matches {
            if let Some(model) = sub.value_of_os("model") {
                config.model = PathBuf::from(model);
            }
            if let Some(dir) = sub.value_of_os("shader-dir") {
                config.shader_dir = PathBuf::from(dir);
            }
            if sub.is_present("normal-length") {
                config.normal_length = value_t!(sub, "normal-length", f32)?;
            }
        }

        Ok(config)
    }
}
