use band_sampler::{
    sample_image_bands, write_report, CLIParser, ErrorKind, RGBColor, ReportFormat,
};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::PathBuf;

const STRIPED_IMAGE_PATH: &str = "tests/striped_horizontal.png";
const TALL_IMAGE_PATH: &str = "tests/striped_vertical.png";
const NARROW_IMAGE_PATH: &str = "tests/narrow.png";
const CORRUPT_IMAGE_PATH: &str = "tests/corrupt.png";
const MISSING_IMAGE_PATH: &str = "tests/missing.png";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_fixture_path(relative_path: &str) -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push(relative_path);
    root_path
}

fn cleanup(path: &PathBuf) {
    if path.exists() && path.is_file() {
        fs::remove_file(path).expect("Deletion of fixture failed");
    }
}

fn stripe_color(index: u32) -> RGBColor {
    RGBColor::new(index as u8, 255 - index as u8, (index * 2) as u8)
}

fn parse_arguments(path: &PathBuf, extra: &[&str]) -> band_sampler::Arguments {
    let mut cli_parser = CLIParser::new();
    let mut argv = vec!["test", path.to_str().unwrap()];
    argv.extend_from_slice(extra);
    cli_parser.parse(argv)
}

#[test]
fn test_sample_horizontal_stripes() {
    let path = get_fixture_path(STRIPED_IMAGE_PATH);
    cleanup(&path);
    RgbImage::from_fn(1260, 10, |x, _| stripe_color(x / 10).into())
        .save(&path)
        .expect("Writing fixture failed");

    let arguments = parse_arguments(&path, &[]);
    let results = sample_image_bands(&arguments);
    cleanup(&path);

    let results = results.expect("Sampling failed");
    assert_eq!(results.len(), 126);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.index(), i as u32 + 1);
        assert_eq!(result.color(), stripe_color(i as u32), "band {}", i + 1);
    }
}

#[test]
fn test_sample_translucent_vertical_stripes() {
    let path = get_fixture_path(TALL_IMAGE_PATH);
    cleanup(&path);
    RgbaImage::from_fn(9, 40, |_, y| {
        let pixel: Rgb<u8> = stripe_color(y / 5).into();
        let Rgb([red, green, blue]) = pixel;
        Rgba([red, green, blue, 100])
    })
    .save(&path)
    .expect("Writing fixture failed");

    let arguments = parse_arguments(&path, &["--bands", "8", "--format", "csv"]);
    let results = sample_image_bands(&arguments);
    cleanup(&path);

    let results = results.expect("Sampling failed");
    let mut buffer = Vec::new();
    write_report(&mut buffer, &results, arguments.report_format()).unwrap();
    let report = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 9, "header plus one row per band");
    assert_eq!(lines[0], "band,red,green,blue");
    assert_eq!(lines[1], "1,0,255,0");
    assert_eq!(lines[8], "8,7,248,14");
}

#[test]
fn test_report_text_format() {
    let path = get_fixture_path(NARROW_IMAGE_PATH);
    cleanup(&path);
    RgbImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            Rgb([255, 0, 0])
        } else {
            Rgb([0, 0, 255])
        }
    })
    .save(&path)
    .expect("Writing fixture failed");

    let arguments = parse_arguments(&path, &["-n", "2"]);
    let results = sample_image_bands(&arguments);
    cleanup(&path);

    let mut buffer = Vec::new();
    write_report(&mut buffer, &results.unwrap(), ReportFormat::Text).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "Band 1: RGB(255, 0, 0)\nBand 2: RGB(0, 0, 255)\n"
    );
}

#[test]
fn test_too_many_bands_for_image() {
    let path = get_fixture_path(NARROW_IMAGE_PATH).with_extension("wide.png");
    cleanup(&path);
    RgbImage::new(100, 20).save(&path).expect("Writing fixture failed");

    let arguments = parse_arguments(&path, &[]);
    let results = sample_image_bands(&arguments);
    cleanup(&path);

    let error = results.expect_err("126 bands cannot fit into 100 pixels");
    assert_eq!(error.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn test_missing_input_file() {
    let path = get_fixture_path(MISSING_IMAGE_PATH);
    cleanup(&path);
    let arguments = parse_arguments(&path, &[]);
    let error = sample_image_bands(&arguments).expect_err("Missing file was sampled");
    assert_eq!(error.kind(), ErrorKind::ResourceNotFound);
}

#[test]
fn test_corrupt_input_file() {
    let path = get_fixture_path(CORRUPT_IMAGE_PATH);
    fs::write(&path, [0x89, b'P', b'N', b'G', 0, 1, 2, 3]).expect("Writing fixture failed");
    let arguments = parse_arguments(&path, &[]);
    let results = sample_image_bands(&arguments);
    cleanup(&path);
    let error = results.expect_err("Corrupt file was sampled");
    assert_eq!(error.kind(), ErrorKind::UnclassifiedFailure);
}
