//! End-to-end fitting scenarios, driven through the public watermark and
//! engine APIs with deterministic stub font metrics.

use std::f64::consts::SQRT_2;

use pdf_watermark::geometry::Angle;
use pdf_watermark::{
    Appearance, BannerAngle, BannerTextSlotCalculator, BannerTextWatermark, Fitting, Font,
    FontMetrics, Justification, OverflowSelection, PageEdgePosition, PageEdgeTextSlotCalculator,
    PageEdgeTextWatermark, PageSize, Pt, Size, TextPositionCalculator, WatermarkError, colours,
};

/// Every character is as wide as the font size.
struct SquareGlyphs;

impl FontMetrics for SquareGlyphs {
    fn measure_width(&self, text: &str, font_size: Pt) -> Pt {
        font_size * text.chars().count() as f64
    }
}

/// Every character is a fixed width, regardless of font size.
struct FixedGlyphs(f64);

impl FontMetrics for FixedGlyphs {
    fn measure_width(&self, text: &str, _font_size: Pt) -> Pt {
        Pt(self.0 * text.chars().count() as f64)
    }
}

fn square_font() -> Font {
    Font::new("stub", Size::absolute(Pt(10.0)).unwrap(), Box::new(SquareGlyphs))
}

fn page(width: f64, height: f64) -> PageSize {
    PageSize::new(Pt(width), Pt(height)).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Makes `RUST_LOG` work for the fitting-loop tests.
fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn centered_diagonal_banner_positions_match_the_chord_geometry() {
    // A 45° banner on a 500x720 page: the single slot runs from the left
    // edge to the right edge, pulled in by one font size at the top end,
    // so its width is 500·√2 − fontSize. "TEST" measures 100, so centre
    // justification pushes it along the slot by half the spare space.
    let font = Font::new(
        "stub",
        Size::absolute(Pt(10.0)).unwrap(),
        Box::new(FixedGlyphs(25.0)),
    );
    let calculator = BannerTextSlotCalculator::new(
        page(500.0, 720.0),
        Angle::degrees(45.0).unwrap(),
    );
    let engine = TextPositionCalculator::new(
        &calculator,
        &font,
        Justification::Centre,
        Fitting::NONE,
        OverflowSelection::KeepMiddle,
    );
    let positioned = engine.positioned_text("TEST", Pt(10.0)).unwrap();

    assert_eq!(positioned.font_size(), Pt(10.0));
    assert_eq!(positioned.len(), 1);
    let element = positioned.iter().next().unwrap();
    assert_eq!(element.text(), "TEST");

    let slot_width = 500.0 * SQRT_2 - 10.0;
    let justification_shift = (slot_width - 100.0) / 2.0 * Angle::degrees(45.0).unwrap().cos();
    // The slot's effective origin is on the left page edge, at the height
    // where the (adjusted) center line meets it: (720 − 500) / 2 = 110.
    assert!(close(element.position().x.0, justification_shift));
    assert!(close(element.position().y.0, 110.0 + justification_shift));
}

#[test]
fn shrink_fits_an_oversized_word_by_stepping_the_font_down() {
    // 15 squares per line: fits the 100pt slot once 15·size ≤ 100, and
    // sizes move on the 0.5 grid, so the first fitting size is 6.5.
    let font = square_font();
    let calculator = BannerTextSlotCalculator::new(page(100.0, 100.0), Angle::DEGREES_0);
    let engine = TextPositionCalculator::new(
        &calculator,
        &font,
        Justification::Left,
        Fitting::NONE.shrink(),
        OverflowSelection::KeepMiddle,
    );
    let positioned = engine.positioned_text("ABCDEFGHIJKLMNO", Pt(10.0)).unwrap();
    assert_eq!(positioned.font_size(), Pt(6.5));
}

#[test]
fn wrapping_breaks_text_across_the_slot_ladder() {
    let font = square_font();
    let calculator = BannerTextSlotCalculator::new(page(100.0, 100.0), Angle::DEGREES_0);
    let engine = TextPositionCalculator::new(
        &calculator,
        &font,
        Justification::Left,
        Fitting::NONE.wrap(),
        OverflowSelection::KeepMiddle,
    );
    // 11 characters in one line does not fit 100pt at size 10; wrapped on
    // the space it becomes two fitting lines.
    let positioned = engine.positioned_text("AAAAA BBBBB", Pt(10.0)).unwrap();
    assert_eq!(positioned.font_size(), Pt(10.0));
    let texts: Vec<&str> = positioned.iter().map(|element| element.text()).collect();
    assert_eq!(texts, vec!["AAAAA", "BBBBB"]);
    // Two lines straddle the page center: baselines at 50 and 40.
    let positions: Vec<(f64, f64)> = positioned
        .iter()
        .map(|element| (element.position().x.0, element.position().y.0))
        .collect();
    assert!(close(positions[0].1, 50.0));
    assert!(close(positions[1].1, 40.0));
}

#[test]
fn wrap_with_overflow_terminates_on_a_crowded_banner() {
    init_tracing();
    // Far more words than the diagonal ladder can hold: wrapping spills
    // surplus lines, overflow drops back down to the central ones, and the
    // two remedies must not keep undoing each other. The engine has to
    // come back with an answer instead of ping-ponging between them.
    let font = square_font();
    let calculator =
        BannerTextSlotCalculator::new(page(200.0, 200.0), Angle::degrees(45.0).unwrap());
    let engine = TextPositionCalculator::new(
        &calculator,
        &font,
        Justification::Centre,
        Fitting::NONE.wrap().overflow(),
        OverflowSelection::KeepMiddle,
    );
    let text = vec!["aa"; 200].join(" ");
    let positioned = engine.positioned_text(&text, Pt(10.0)).unwrap();
    assert_eq!(positioned.font_size(), Pt(10.0));
    assert!(!positioned.is_empty());
}

#[test]
fn wrap_falls_back_to_shrink_for_an_unsplittable_word() {
    let font = square_font();
    let calculator = BannerTextSlotCalculator::new(page(100.0, 100.0), Angle::DEGREES_0);
    let engine = TextPositionCalculator::new(
        &calculator,
        &font,
        Justification::Left,
        Fitting::NONE.wrap().shrink(),
        OverflowSelection::KeepMiddle,
    );
    let positioned = engine.positioned_text("ABCDEFGHIJKLMNO", Pt(10.0)).unwrap();
    assert_eq!(positioned.font_size(), Pt(6.5));
}

#[test]
fn growing_finds_the_largest_fitting_size() {
    init_tracing();
    // "AB" fits while 2·size ≤ 100; the grow search should land on
    // exactly 50 via doubling steps and the backoff refinement.
    let font = square_font();
    let calculator = BannerTextSlotCalculator::new(page(100.0, 100.0), Angle::DEGREES_0);
    let engine = TextPositionCalculator::new(
        &calculator,
        &font,
        Justification::Left,
        Fitting::NONE.grow(),
        OverflowSelection::KeepMiddle,
    );
    let positioned = engine.positioned_text("AB", Pt(10.0)).unwrap();
    assert_eq!(positioned.font_size(), Pt(50.0));
}

#[test]
fn shrink_only_on_a_hopeless_page_terminates_with_insufficient_space() {
    init_tracing();
    // Even at the 1pt floor the word cannot fit a 5pt page, so the engine
    // must walk down the whole grid and then give up.
    let font = square_font();
    let calculator = BannerTextSlotCalculator::new(page(5.0, 5.0), Angle::DEGREES_0);
    let engine = TextPositionCalculator::new(
        &calculator,
        &font,
        Justification::Left,
        Fitting::NONE.shrink(),
        OverflowSelection::KeepMiddle,
    );
    let result = engine.positioned_text("WATERMARK", Pt(10.0));
    assert!(matches!(
        result,
        Err(WatermarkError::InsufficientSpace(Some(_)))
    ));
}

#[test]
fn no_fitting_permissions_fails_immediately() {
    let font = square_font();
    let calculator = BannerTextSlotCalculator::new(page(100.0, 100.0), Angle::DEGREES_0);
    let engine = TextPositionCalculator::new(
        &calculator,
        &font,
        Justification::Left,
        Fitting::NONE,
        OverflowSelection::KeepMiddle,
    );
    let result = engine.positioned_text("AAAAA BBBBB", Pt(10.0));
    assert!(matches!(result, Err(WatermarkError::InsufficientSpace(_))));
}

#[test]
fn overflow_tolerates_an_over_wide_line() {
    let font = square_font();
    let calculator = BannerTextSlotCalculator::new(page(100.0, 100.0), Angle::DEGREES_0);
    let engine = TextPositionCalculator::new(
        &calculator,
        &font,
        Justification::Left,
        Fitting::NONE.overflow(),
        OverflowSelection::KeepMiddle,
    );
    let positioned = engine.positioned_text("TOOLONGWORD", Pt(10.0)).unwrap();
    assert_eq!(positioned.len(), 1);
    assert_eq!(positioned.iter().next().unwrap().text(), "TOOLONGWORD");
}

#[test]
fn overflow_drops_the_lines_furthest_from_the_edge() {
    let font = square_font();
    // floor(95 / 30) = 3 whole lines, plus the partial line overflow
    // permits: 4 slots for 6 hard lines.
    let calculator = PageEdgeTextSlotCalculator::new(
        page(100.0, 95.0),
        PageEdgePosition::Top,
        PageEdgePosition::Top.angle(),
        Fitting::NONE.overflow(),
        false,
    );
    let font_size = Pt(30.0);
    let engine = TextPositionCalculator::new(
        &calculator,
        &font,
        Justification::Left,
        Fitting::NONE.overflow(),
        OverflowSelection::KeepFirst,
    );
    let positioned = engine.positioned_text("a\nb\nc\nd\ne\nf", font_size).unwrap();
    let texts: Vec<&str> = positioned.iter().map(|element| element.text()).collect();
    assert_eq!(texts, vec!["a", "b", "c", "d"]);
}

#[test]
fn banner_watermark_reapplies_its_margin() {
    let watermark = BannerTextWatermark::new(
        "DRAFT",
        square_font(),
        Appearance::new(colours::LIGHT_GREY, 0.25, true).unwrap(),
        Justification::Left,
        Fitting::NONE,
        Size::absolute(Pt(10.0)).unwrap(),
        BannerAngle::Custom(Angle::DEGREES_0),
    )
    .unwrap();
    let layout = watermark.layout(&page(120.0, 120.0)).unwrap();

    assert_eq!(layout.angle(), Angle::DEGREES_0);
    assert!(layout.is_background());
    assert_eq!(layout.opacity(), 0.25);
    assert_eq!(layout.elements().len(), 1);
    // The margin-reduced page is 100x100, so the single odd slot's
    // baseline sits at 45 there, then shifts back by the 10pt margin.
    let element = layout.elements().iter().next().unwrap();
    assert!(close(element.position().x.0, 10.0));
    assert!(close(element.position().y.0, 55.0));
}

#[test]
fn page_edge_watermark_lays_out_along_the_chosen_edge() {
    let watermark = PageEdgeTextWatermark::new(
        "CONFIDENTIAL",
        square_font(),
        Appearance::new(colours::RED, 1.0, false).unwrap(),
        Justification::Left,
        Fitting::NONE.shrink(),
        Size::absolute(Pt(0.0)).unwrap(),
        PageEdgePosition::Top,
        false,
    )
    .unwrap();
    let layout = watermark.layout(&page(500.0, 720.0)).unwrap();

    assert_eq!(layout.angle(), Angle::DEGREES_0);
    assert_eq!(layout.elements().len(), 1);
    let element = layout.elements().iter().next().unwrap();
    assert_eq!(element.text(), "CONFIDENTIAL");
    // 12 characters at size 10 is 120pt, well within the 500pt edge.
    assert_eq!(layout.elements().font_size(), Pt(10.0));
    assert!(close(element.position().y.0, 710.0));
    assert!(close(element.position().x.0, 0.0));
}

#[test]
fn empty_watermark_text_is_rejected_eagerly() {
    let result = BannerTextWatermark::new(
        "   ",
        square_font(),
        Appearance::new(colours::LIGHT_GREY, 0.5, false).unwrap(),
        Justification::Centre,
        Fitting::NONE,
        Size::absolute(Pt(0.0)).unwrap(),
        BannerAngle::BottomLeftToTopRight,
    );
    assert!(matches!(result, Err(WatermarkError::EmptyText)));
}

#[test]
fn oversized_margin_fails_before_any_fitting() {
    let watermark = BannerTextWatermark::new(
        "DRAFT",
        square_font(),
        Appearance::new(colours::LIGHT_GREY, 0.5, false).unwrap(),
        Justification::Centre,
        Fitting::NONE.shrink(),
        Size::absolute(Pt(80.0)).unwrap(),
        BannerAngle::BottomLeftToTopRight,
    )
    .unwrap();
    assert!(matches!(
        watermark.layout(&page(100.0, 100.0)),
        Err(WatermarkError::MarginTooLarge { .. })
    ));
}
