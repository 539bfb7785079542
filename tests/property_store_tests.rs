use graphiq::charts::{ChartProjector, Y_SPAN_LIMIT};
use graphiq::data::{
    Axis, AxisConfig, AxisConfigStore, DataPointStore, HexColor, Nudge, PointEdit, PointId,
    StyleVariant, LABEL_SIZE_MAX, LABEL_SIZE_MIN,
};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum StoreOp {
    Add,
    Remove(usize),
    Label(usize, String),
    Value(usize, String),
    Color(usize, [u8; 3]),
}

fn store_op() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        3 => Just(StoreOp::Add),
        2 => any::<usize>().prop_map(StoreOp::Remove),
        2 => (any::<usize>(), "[ a-zA-Z]{0,6}").prop_map(|(i, s)| StoreOp::Label(i, s)),
        2 => (any::<usize>(), "[ 0-9.a-z-]{0,6}").prop_map(|(i, s)| StoreOp::Value(i, s)),
        1 => (any::<usize>(), any::<[u8; 3]>()).prop_map(|(i, c)| StoreOp::Color(i, c)),
    ]
}

/// Picks an id currently in the store, or a never-issued one when empty.
fn target(store: &DataPointStore, index: usize) -> PointId {
    let points = store.points();
    if points.is_empty() {
        u64::MAX
    } else {
        points[index % points.len()].id
    }
}

fn run(store: &mut DataPointStore, op: &StoreOp, issued: &mut Vec<PointId>) {
    match op {
        StoreOp::Add => issued.push(store.add()),
        StoreOp::Remove(i) => {
            let id = target(store, *i);
            store.remove(id);
        }
        StoreOp::Label(i, s) => {
            let id = target(store, *i);
            store.apply(PointEdit::SetLabel(id, s.clone()));
        }
        StoreOp::Value(i, s) => {
            let id = target(store, *i);
            store.apply(PointEdit::SetValue(id, s.clone()));
        }
        StoreOp::Color(i, c) => {
            let id = target(store, *i);
            store.apply(PointEdit::SetColor(id, HexColor(*c)));
        }
    }
}

proptest! {
    #[test]
    fn ids_stay_unique_and_are_never_reissued(ops in prop::collection::vec(store_op(), 0..80)) {
        let mut store = DataPointStore::new();
        let mut issued = Vec::new();
        for op in &ops {
            run(&mut store, op, &mut issued);

            let ids: HashSet<_> = store.points().iter().map(|p| p.id).collect();
            prop_assert_eq!(ids.len(), store.len());
        }

        let unique: HashSet<_> = issued.iter().copied().collect();
        prop_assert_eq!(unique.len(), issued.len());
        prop_assert!(issued.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn series_is_the_filtered_store_in_order(ops in prop::collection::vec(store_op(), 0..60)) {
        let mut store = DataPointStore::new();
        let mut issued = Vec::new();
        for op in &ops {
            run(&mut store, op, &mut issued);
        }

        let series = ChartProjector::project_series(&store);
        let expected: Vec<_> = store
            .points()
            .iter()
            .filter(|p| !p.label.trim().is_empty() && !p.value.trim().is_empty())
            .collect();

        prop_assert_eq!(series.len(), expected.len());
        for (bar, point) in series.iter().zip(expected) {
            prop_assert_eq!(&bar.category_label, &point.label);
            prop_assert_eq!(bar.color, point.color);
            prop_assert!(bar.numeric_value.is_finite());
        }
    }

    #[test]
    fn label_sizes_never_leave_bounds(steps in prop::collection::vec((any::<bool>(), any::<bool>()), 0..60)) {
        let mut axis = AxisConfigStore::new();
        for (grow, is_x) in steps {
            let which = if is_x { Axis::X } else { Axis::Y };
            if grow { axis.grow_label(which) } else { axis.shrink_label(which) }

            let config = axis.config();
            prop_assert!((LABEL_SIZE_MIN..=LABEL_SIZE_MAX).contains(&config.x_label_size));
            prop_assert!((LABEL_SIZE_MIN..=LABEL_SIZE_MAX).contains(&config.y_label_size));
        }
    }

    #[test]
    fn reset_restores_literal_defaults_from_any_state(
        y_min in -1e6f64..1e6,
        y_max in -1e6f64..1e6,
        nudges in prop::collection::vec(0u8..4, 0..20),
        x_label in "[a-z]{0,8}",
        grow in 0usize..10,
    ) {
        let mut axis = AxisConfigStore::new();
        axis.set_y_min(y_min);
        axis.set_y_max(y_max);
        axis.set_label(Axis::X, x_label);
        axis.set_style(StyleVariant::Dark);
        for _ in 0..grow {
            axis.grow_label(Axis::Y);
        }
        for n in nudges {
            let nudge = [Nudge::Left, Nudge::Right, Nudge::Up, Nudge::Down][n as usize];
            axis.nudge(Axis::X, nudge);
            axis.nudge(Axis::Y, nudge);
        }

        axis.reset();
        let c = axis.config();
        prop_assert_eq!(c, &AxisConfig::default());
        prop_assert_eq!(c.y_min, 0.0);
        prop_assert_eq!(c.y_max, 100.0);
        prop_assert_eq!(c.x_label_size, 12);
        prop_assert_eq!(c.y_label_size, 12);
        prop_assert_eq!((c.x_label_offset.dx, c.x_label_offset.dy), (0.0, 0.0));
        prop_assert_eq!((c.y_label_offset.dx, c.y_label_offset.dy), (0.0, 0.0));
        prop_assert_eq!(c.style, StyleVariant::Default);
        prop_assert!(c.x_label.is_empty());
        prop_assert!(c.y_label.is_empty());
    }

    #[test]
    fn any_finite_domain_yields_a_finite_ascending_span(
        y_min in any::<f64>().prop_filter("finite", |v| v.is_finite()),
        y_max in any::<f64>().prop_filter("finite", |v| v.is_finite()),
    ) {
        let mut axis = AxisConfigStore::new();
        axis.set_y_min(y_min);
        axis.set_y_max(y_max);
        let (lo, hi) = ChartProjector::directives(&axis).y_span();
        prop_assert!(lo.is_finite() && hi.is_finite());
        prop_assert!(lo < hi);
        prop_assert!((hi - lo).is_finite());
        prop_assert_eq!(lo, y_min.min(y_max).clamp(-Y_SPAN_LIMIT, Y_SPAN_LIMIT));
    }

    #[test]
    fn ordinary_domains_are_plotted_as_configured(y_min in -1e6f64..1e6, y_max in -1e6f64..1e6) {
        prop_assume!((y_max - y_min).abs() > 1e-3);
        let mut axis = AxisConfigStore::new();
        axis.set_y_min(y_min);
        axis.set_y_max(y_max);
        let span = ChartProjector::directives(&axis).y_span();
        prop_assert_eq!(span, (y_min.min(y_max), y_min.max(y_max)));
    }
}
