extern crate clap;
extern crate env_logger;
extern crate newton_fractal;

use clap::{App, AppSettings, Arg, ArgMatches};
use newton_fractal::settings::DEFAULT_OUTPUT;
use newton_fractal::{write_image, Complex, NewtonRenderer, Polynomial, Settings};
use std::path::Path;
use std::str::FromStr;

fn validate_positive(s: &str, err: &str) -> Result<(), String> {
    match usize::from_str(s) {
        Ok(i) if i > 0 => Ok(()),
        _ => Err(err.to_string()),
    }
}

fn validate_float(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() => Ok(()),
        _ => Err(err.to_string()),
    }
}

const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const XMIN: &str = "xmin";
const XMAX: &str = "xmax";
const YMIN: &str = "ymin";
const YMAX: &str = "ymax";
const OUTPUT: &str = "output";

fn coordinate<'a>(name: &'a str, index: u64, help: &'a str) -> Arg<'a, 'a> {
    Arg::with_name(name)
        .required(true)
        .index(index)
        .validator(|s| validate_float(&s, "Could not parse plane coordinate"))
        .help(help)
}

fn args<'a>() -> ArgMatches<'a> {
    App::new("newton")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Newton fractal renderer for x^3 + 1")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name(WIDTH)
                .required(true)
                .index(1)
                .validator(|s| validate_positive(&s, "Width must be a positive integer"))
                .help("Width of output image in pixels"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .required(true)
                .index(2)
                .validator(|s| validate_positive(&s, "Height must be a positive integer"))
                .help("Height of output image in pixels"),
        )
        .arg(coordinate(XMIN, 3, "Left edge of the complex plane"))
        .arg(coordinate(XMAX, 4, "Right edge of the complex plane"))
        .arg(coordinate(YMIN, 5, "Bottom edge of the complex plane"))
        .arg(coordinate(YMAX, 6, "Top edge of the complex plane"))
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .index(7)
                .default_value(DEFAULT_OUTPUT)
                .help("Output file"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> T {
    match matches.value_of(name).map(T::from_str) {
        Some(Ok(v)) => v,
        _ => clap::Error::with_description(
            &format!("Could not parse {}", name),
            clap::ErrorKind::InvalidValue,
        )
        .exit(),
    }
}

fn main() {
    env_logger::init();
    let matches = args();

    let width: usize = value(&matches, WIDTH);
    let height: usize = value(&matches, HEIGHT);
    let leftlower = Complex::new(value(&matches, XMIN), value(&matches, YMIN));
    let rightupper = Complex::new(value(&matches, XMAX), value(&matches, YMAX));
    let output = matches.value_of(OUTPUT).unwrap_or(DEFAULT_OUTPUT);

    let renderer = match NewtonRenderer::new(
        width,
        height,
        leftlower,
        rightupper,
        Polynomial::newton_cubic(),
        Settings::default(),
    ) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", renderer.polynomial());
    println!("{}", renderer.derivative());

    let render = renderer.render();
    if let Err(e) = write_image(Path::new(output), &render.image) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
