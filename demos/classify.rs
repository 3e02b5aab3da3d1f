// glplatform/demos/classify.rs
//
//! Classifies an OpenGL implementation from strings given on the command line and prints the
//! diagnostic report, without creating a context.
//!
//! For example:
//!
//! ```text
//! cargo run --example classify -- "NVIDIA Corporation" "GeForce GTX 480/PCIe/SSE2" \
//!     "4.5.0 NVIDIA 361.45" --glsl "4.50 NVIDIA" --extensions "GL_ARB_shader_objects ..."
//! ```

use clap::{App, Arg};
use glplatform::{GLPlatform, GLStrings, SystemVersions, VersionNumber};

static APP_NAME: &'static str = "glplatform classify example";

fn main() {
    let matches = App::new(APP_NAME)
        .arg(Arg::with_name("VENDOR").required(true).index(1).help("GL_VENDOR string"))
        .arg(Arg::with_name("RENDERER").required(true).index(2).help("GL_RENDERER string"))
        .arg(Arg::with_name("VERSION").required(true).index(3).help("GL_VERSION string"))
        .arg(
            Arg::with_name("extensions")
                .short("e")
                .long("extensions")
                .takes_value(true)
                .help("Space-separated GL_EXTENSIONS string"),
        )
        .arg(
            Arg::with_name("glsl")
                .short("g")
                .long("glsl")
                .takes_value(true)
                .help("GL_SHADING_LANGUAGE_VERSION string"),
        )
        .arg(
            Arg::with_name("server")
                .short("x")
                .long("server-version")
                .takes_value(true)
                .help("Windowing server version, such as 1.18.4"),
        )
        .arg(
            Arg::with_name("features")
                .short("f")
                .long("features")
                .help("Also print the raw feature flags"),
        )
        .get_matches();

    let strings = GLStrings::new(
        matches.value_of("VENDOR").unwrap(),
        matches.value_of("RENDERER").unwrap(),
        matches.value_of("VERSION").unwrap(),
        matches.value_of("extensions").unwrap_or(""),
    )
    .with_shading_language_version(matches.value_of("glsl").unwrap_or(""));

    let server_version = matches
        .value_of("server")
        .map_or(VersionNumber::ZERO, VersionNumber::parse);
    let system = SystemVersions::current().with_server_version(server_version);

    let platform = GLPlatform::detect(&strings, &system);
    print!("{}", platform.report());

    if matches.is_present("features") {
        println!("{:?}", platform.features());
    }
}
