use approx::assert_relative_eq;
use graphiq::charts::{ChartProjector, SeriesBar};
use graphiq::data::{AxisConfigStore, DataPointStore, HexColor, PointEdit, SeriesSummary};

fn point(store: &mut DataPointStore, label: &str, value: &str, color: &str) {
    let id = store.add();
    store.apply(PointEdit::SetLabel(id, label.into()));
    store.apply(PointEdit::SetValue(id, value.into()));
    store.apply(PointEdit::SetColor(id, color.parse().expect("valid color")));
}

#[test]
fn single_point_projects_to_single_bar() {
    let mut store = DataPointStore::new();
    point(&mut store, "A", "10", "#ff0000");

    let scene = ChartProjector::project(&store, &AxisConfigStore::new());
    assert_eq!(
        scene.series,
        vec![SeriesBar {
            category_label: "A".into(),
            numeric_value: 10.0,
            color: HexColor([255, 0, 0]),
        }]
    );
    assert_eq!(scene.series[0].color.to_string(), "#ff0000");
}

#[test]
fn empty_value_is_filtered_out() {
    let mut store = DataPointStore::new();
    let id = store.add();
    store.apply(PointEdit::SetLabel(id, "A".into()));

    let scene = ChartProjector::project(&store, &AxisConfigStore::new());
    assert!(scene.series.is_empty());
}

#[test]
fn whitespace_only_fields_are_filtered_out() {
    let mut store = DataPointStore::new();
    point(&mut store, "   ", "5", "#000000");
    point(&mut store, "B", "  ", "#000000");
    assert!(ChartProjector::project_series(&store).is_empty());
}

#[test]
fn values_are_coerced_not_rejected() {
    let mut store = DataPointStore::new();
    point(&mut store, "bad", "abc", "#3b82f6");
    point(&mut store, "good", "42.5", "#3b82f6");
    point(&mut store, "padded", "  7 ", "#3b82f6");
    point(&mut store, "units", "12px", "#3b82f6");
    point(&mut store, "comma", "1,5", "#3b82f6");
    point(&mut store, "weight", "3kg", "#3b82f6");

    let values: Vec<f64> = ChartProjector::project_series(&store)
        .iter()
        .map(|b| b.numeric_value)
        .collect();
    assert_eq!(values, vec![0.0, 42.5, 7.0, 12.0, 1.0, 3.0]);
}

#[test]
fn removing_keeps_order_of_the_rest() {
    let mut store = DataPointStore::new();
    point(&mut store, "A", "1", "#000000");
    point(&mut store, "B", "2", "#000000");
    point(&mut store, "C", "3", "#000000");
    let b = store.points()[1].id;
    assert!(store.remove(b));

    let labels: Vec<_> = ChartProjector::project_series(&store)
        .into_iter()
        .map(|bar| bar.category_label)
        .collect();
    assert_eq!(labels, vec!["A", "C"]);
}

#[test]
fn editing_unknown_id_is_a_no_op() {
    let mut store = DataPointStore::new();
    point(&mut store, "A", "1", "#000000");
    let before = store.points().to_vec();

    assert!(!store.apply(PointEdit::SetLabel(999, "Z".into())));
    assert!(!store.remove(999));
    assert_eq!(store.points(), before.as_slice());
}

#[test]
fn y_bounds_flow_into_directives_unchanged() {
    let mut axis = AxisConfigStore::new();
    axis.set_y_min_text("-20");
    axis.set_y_max_text("oops");
    let directives = ChartProjector::directives(&axis);
    assert_eq!(directives.y_domain, (-20.0, 100.0));

    axis.set_y_min_text("nope");
    assert_eq!(ChartProjector::directives(&axis).y_domain, (0.0, 100.0));
}

#[test]
fn summary_describes_projected_series() {
    let mut store = DataPointStore::new();
    point(&mut store, "A", "2", "#000000");
    point(&mut store, "B", "4", "#000000");
    point(&mut store, "C", "9", "#000000");

    let series = ChartProjector::project_series(&store);
    let summary = SeriesSummary::from_series(&series).expect("non-empty series");
    assert_eq!(summary.count, 3);
    assert_relative_eq!(summary.mean, 5.0);
    assert_relative_eq!(summary.median, 4.0);
    assert_relative_eq!(summary.min, 2.0);
    assert_relative_eq!(summary.max, 9.0);
}

#[test]
fn csv_rows_import_with_palette_colors() {
    let mut store = DataPointStore::new();
    let added = store.import(vec![
        ("North".to_string(), "12".to_string()),
        ("South".to_string(), "".to_string()),
    ]);
    assert_eq!(added, 2);

    let series = ChartProjector::project_series(&store);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].category_label, "North");
    assert_eq!(series[0].color, HexColor::palette(0));
}
