use crate::isrc::Isrc;
use crate::output::svg::SvgElement;
use crate::output::svg::histogram::YearHistogram;
use crate::report::YearDistribution;

fn dist(codes: &[&str]) -> YearDistribution {
    let codes: Vec<Isrc> = codes.iter().map(|c| Isrc::parse(c).unwrap()).collect();
    YearDistribution::from_codes(&codes, 2024)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn from_distribution_fills_gaps() {
    let hist = YearHistogram::from_distribution(&dist(&["USRC11600001", "USRC11900001"]));

    let labels: Vec<&str> = hist.data.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["2016", "2017", "2018", "2019"]);
    assert!((hist.data[1].value).abs() < f64::EPSILON);
    assert_eq!(hist.total(), 2);
}

#[test]
fn from_distribution_orders_rolled_back_years_first() {
    let hist = YearHistogram::from_distribution(&dist(&["USRC12300001", "USRC19900001"]));
    assert_eq!(hist.data.first().unwrap().label, "1999");
    assert_eq!(hist.data.last().unwrap().label, "2023");
    assert_eq!(hist.data.len(), 25);
}

#[test]
fn builders_override_defaults() {
    let hist = YearHistogram::from_distribution(&YearDistribution::new())
        .with_title("Custom")
        .with_size(800.0, 400.0);
    assert_eq!(hist.title, "Custom");
    assert!((hist.width - 800.0).abs() < f64::EPSILON);
    assert!((hist.height - 400.0).abs() < f64::EPSILON);

    let hist = hist.with_width(500.0);
    assert!((hist.width - 500.0).abs() < f64::EPSILON);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn empty_distribution_renders_empty_state() {
    let svg = YearHistogram::from_distribution(&YearDistribution::new()).render();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("No ISRCs to display"));
    assert!(!svg.contains("<rect"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn renders_one_bar_per_year() {
    let svg = YearHistogram::from_distribution(&dist(&[
        "USRC11600001",
        "USRC11600002",
        "USRC11800001",
    ]))
    .render();

    assert_eq!(svg.matches("<rect").count(), 3);
    assert!(svg.contains("<title>2016: 2</title>"));
    assert!(svg.contains("<title>2017: 0</title>"));
    assert!(svg.contains("<title>2018: 1</title>"));
}

#[test]
fn renders_axis_titles() {
    let svg = YearHistogram::from_distribution(&dist(&["USRC11600001"])).render();
    assert!(svg.contains(">Years</text>"));
    assert!(svg.contains(">Numbers of ISRCs</text>"));
    assert!(svg.contains("<title>ISRC year distribution</title>"));
}

#[test]
fn single_year_renders_single_bar() {
    let svg = YearHistogram::from_distribution(&dist(&["GBUM71505078"])).render();
    assert_eq!(svg.matches("<rect").count(), 1);
    assert!(svg.contains(">2015</text>"));
}

#[test]
fn long_ranges_thin_out_year_labels() {
    // 1950..=2024: 75 bars, every 5th year labelled.
    let hist = YearHistogram::from_distribution(&dist(&["USRC15000001", "USRC12400001"]));
    assert_eq!(hist.data.len(), 75);

    let svg = hist.render();
    assert!(svg.contains(">1950</text>"));
    assert!(svg.contains(">1955</text>"));
    assert!(!svg.contains(">1951</text>"));
}

#[test]
fn y_axis_uses_whole_counts() {
    let svg = YearHistogram::from_distribution(&dist(&[
        "USRC11600001",
        "USRC11600002",
        "USRC11600003",
    ]))
    .render();
    // max 3 over 4 steps rounds up to a step of 1.
    for label in ["0", "1", "2", "3", "4"] {
        assert!(svg.contains(&format!(">{label}</text>")), "missing {label}");
    }
}
