use peak_engine::compose::{Composer, ReferencePolicy};
use peak_engine::layers::MasterControls;
use peak_engine::paint::ColorPalette;
use peak_svg::{rasterize, render_svg};

fn palette() -> ColorPalette {
    ColorPalette::from(["#0b1d3a", "#1f4e79", "#3a7bd5", "#8ec5fc", "#e0f2ff"])
}

#[test]
fn preset_renders_and_rasterizes() {
    let list = Composer::new()
        .with_policy(ReferencePolicy::Strict)
        .compose_preset(&palette(), MasterControls::default())
        .unwrap();
    let svg = render_svg(&list);
    let img = rasterize(&svg, 64, 64).unwrap();

    // Nothing reaches the top-left corner; every layer covers the bottom center.
    assert_eq!(img.pixel(0, 0).unwrap()[3], 0);
    assert!(img.pixel(32, 63).unwrap()[3] > 0);
}

#[test]
fn flat_masters_put_every_apex_on_the_baseline() {
    let list = Composer::new()
        .compose_preset(&palette(), MasterControls::new(0.0, 0.0))
        .unwrap();
    for layer in list.layers() {
        assert_eq!(layer.path.apex().y, 100.0);
    }
    let img = rasterize(&render_svg(&list), 32, 32).unwrap();
    assert_eq!(img.pixel(16, 0).unwrap()[3], 0);
}

#[test]
fn out_of_range_masters_render() {
    for (peak, point) in [(-50.0, 500.0), (1e9, -1e9), (f64::NAN, 75.0)] {
        let list = Composer::new()
            .compose_preset(&palette(), MasterControls::new(peak, point))
            .unwrap();
        let svg = render_svg(&list);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
        rasterize(&svg, 16, 16).unwrap();
    }
}
