use std::fs::File;
use std::io::BufReader;

use fractal_field::core::data::point::Point;
use fractal_field::core::fractals::algorithm::EscapeTimeAlgorithm;
use fractal_field::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use fractal_field::presenters::file::ppm::read_ppm;
use fractal_field::{
    compute_frame, ColourSettings, Complex, FieldComputer, FilePresenterPort, HueColourMap,
    PolyDegree, PpmFilePresenter, RenderConfig, ViewParameters,
};

#[test]
fn test_mandelbrot_centre_never_escapes_and_far_point_escapes_fast() {
    let (pixels, _, extrema) = compute_frame(ViewParameters::mandelbrot(), 800, 800, 4).unwrap();
    assert_eq!(pixels.get(400, 400), Some(128));
    assert_eq!(extrema.max_iter(), 128);

    let mut view = ViewParameters::mandelbrot();
    view.set_scale(0.01).unwrap();
    let (pixels, _, _) = compute_frame(view, 800, 800, 4).unwrap();

    // 400 + 2.5 / 0.01 = 650
    let far = pixels.get(650, 650).unwrap();
    assert!(far <= 2, "expected a fast escape, got {far}");
}

#[test]
fn test_julia_origin_escapes() {
    let view = ViewParameters::julia(Complex::new(0.285, 0.01), PolyDegree::Quadratic);

    let (pixels, _, _) = compute_frame(view, 800, 800, 4).unwrap();

    let origin = pixels.get(400, 400).unwrap();
    assert!(origin < view.max_iterations(), "origin reported {origin}");

    let algorithm = EscapeTimeAlgorithm::new(ViewParameters::mandelbrot(), 800, 800);
    assert_eq!(algorithm.compute(Point { x: 400, y: 400 }), 128);
}

#[test]
fn test_identical_requests_are_bit_identical() {
    let view = ViewParameters::julia(Complex::new(-0.8, 0.156), PolyDegree::Quadratic);

    let first = compute_frame(view, 257, 129, 6).unwrap();
    let second = compute_frame(view, 257, 129, 6).unwrap();

    assert_eq!(first.0, second.0);
    assert_eq!(first.1.as_bytes(), second.1.as_bytes());
    assert_eq!(first.2, second.2);
}

#[test]
fn test_thread_count_does_not_change_the_frame() {
    let view = ViewParameters::julia(Complex::new(-0.621, 0.0), PolyDegree::CubicExp);
    let (reference_pixels, reference_colours, reference_extrema) =
        compute_frame(view, 97, 61, 1).unwrap();

    for threads in [2, 5, 16, 61, 200] {
        let (pixels, colours, extrema) = compute_frame(view, 97, 61, threads).unwrap();

        assert_eq!(pixels, reference_pixels, "{threads} threads");
        assert_eq!(colours.as_bytes(), reference_colours.as_bytes(), "{threads} threads");
        assert_eq!(extrema, reference_extrema, "{threads} threads");
    }
}

#[test]
fn test_ppm_export_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.ppm");
    let mut computer = FieldComputer::new(RenderConfig::with_thread_count(3).unwrap()).unwrap();

    let frame = computer
        .compute_frame(&ViewParameters::mandelbrot(), 100, 70)
        .unwrap();
    PpmFilePresenter::new().present(&frame, &path).unwrap();

    let restored = read_ppm(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!((restored.width(), restored.height()), (100, 70));
    for y in 0..70 {
        assert_eq!(restored.row(y), frame.colours.row(y), "row {y}");
    }
}

#[test]
fn test_invert_mirrors_the_iteration_range() {
    let plain = HueColourMap::new(ColourSettings::new(2, false, true));
    let inverted = HueColourMap::new(ColourSettings::new(2, true, true));
    let (min, max) = (17, 300);

    for k in min..=max {
        assert_eq!(inverted.colour(k, min, max), plain.colour(max - (k - min), min, max));
    }
}

#[test]
fn test_degenerate_range_has_a_colour() {
    for settings in [
        ColourSettings::default(),
        ColourSettings::new(5, true, true),
        ColourSettings::new(0, false, false),
    ] {
        let map = HueColourMap::new(settings);

        for k in [0, 64, 128, 129] {
            assert_eq!(map.colour(k, 128, 128), map.colour(k, 128, 129), "{settings:?} k={k}");
        }
    }
}
