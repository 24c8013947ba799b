use figgrade::figure::{Figure, Series};
use figgrade::grade::{ChecklistItem, Rubric, grade_figure};
use proptest::prelude::*;

fn build_figure(
    with_title: bool,
    with_xlabel: bool,
    with_ylabel: bool,
    plotted: &[(Vec<f64>, Vec<f64>)],
) -> Figure {
    let mut figure = Figure::new();
    let axes = figure.add_axes();
    if with_title {
        axes.set_title("title");
    }
    if with_xlabel {
        axes.set_xlabel("x");
    }
    if with_ylabel {
        axes.set_ylabel("y");
    }
    for (x, y) in plotted {
        axes.plot(Series::line(x.clone(), y.clone()).expect("series"));
    }
    figure
}

fn reference_pairs() -> impl Strategy<Value = Vec<(Vec<f64>, Vec<f64>)>> {
    proptest::collection::vec(
        proptest::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 1..32)
            .prop_map(|points| points.into_iter().unzip()),
        0..4,
    )
}

proptest! {
    #[test]
    fn grade_stays_within_bounds(
        with_title in any::<bool>(),
        with_xlabel in any::<bool>(),
        with_ylabel in any::<bool>(),
        pairs in reference_pairs(),
        plot_mask in proptest::collection::vec(any::<bool>(), 4),
        item_points in 0.1f64..10.0,
        data_points in 0.1f64..10.0
    ) {
        let plotted: Vec<(Vec<f64>, Vec<f64>)> = pairs
            .iter()
            .zip(&plot_mask)
            .filter(|(_, keep)| **keep)
            .map(|(pair, _)| pair.clone())
            .collect();
        let figure = build_figure(with_title, with_xlabel, with_ylabel, &plotted);

        let mut rubric = Rubric::new()
            .with_items(ChecklistItem::ALL)
            .with_item_points(item_points)
            .with_data_points(data_points);
        for (x, y) in &pairs {
            rubric = rubric.with_reference(x.clone(), y.clone());
        }

        let report = grade_figure(&figure, &rubric);
        let grade = report.grade.expect("rubric requests three items");
        prop_assert!((0.0..=100.0).contains(&grade));
    }

    #[test]
    fn grade_matches_weighted_share(
        with_title in any::<bool>(),
        with_xlabel in any::<bool>(),
        with_ylabel in any::<bool>(),
        item_points in 0.1f64..10.0,
        data_points in 0.1f64..10.0
    ) {
        let x: Vec<f64> = (0..16).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| v * 2.0).collect();
        let figure = build_figure(with_title, with_xlabel, with_ylabel, &[(x.clone(), y.clone())]);

        let rubric = Rubric::new()
            .with_items(ChecklistItem::ALL)
            .with_reference(x, y)
            .with_item_points(item_points)
            .with_data_points(data_points);
        let report = grade_figure(&figure, &rubric);
        let grade = report.grade.expect("non-empty rubric");

        let satisfied = [with_title, with_xlabel, with_ylabel]
            .iter()
            .filter(|present| **present)
            .count() as f64;
        let expected = (item_points * satisfied + data_points)
            / (item_points * 3.0 + data_points)
            * 100.0;
        prop_assert!((grade - expected).abs() <= 1e-9);
    }

    #[test]
    fn satisfying_one_more_item_never_lowers_the_grade(
        with_xlabel in any::<bool>(),
        with_ylabel in any::<bool>(),
        item_points in 0.1f64..10.0
    ) {
        let before = build_figure(false, with_xlabel, with_ylabel, &[]);
        let after = build_figure(true, with_xlabel, with_ylabel, &[]);

        let rubric = Rubric::new()
            .with_items(ChecklistItem::ALL)
            .with_item_points(item_points);
        let grade_before = grade_figure(&before, &rubric).grade.expect("graded");
        let grade_after = grade_figure(&after, &rubric).grade.expect("graded");
        prop_assert!(grade_after >= grade_before);
    }

    #[test]
    fn item_request_order_does_not_change_the_grade(
        with_title in any::<bool>(),
        with_xlabel in any::<bool>(),
        with_ylabel in any::<bool>(),
        order in Just(ChecklistItem::ALL.to_vec()).prop_shuffle()
    ) {
        let figure = build_figure(with_title, with_xlabel, with_ylabel, &[]);

        let forward = Rubric::new().with_items(ChecklistItem::ALL);
        let shuffled = Rubric::new().with_items(order);
        let forward_grade = grade_figure(&figure, &forward).grade.expect("graded");
        let shuffled_grade = grade_figure(&figure, &shuffled).grade.expect("graded");
        prop_assert!((forward_grade - shuffled_grade).abs() <= 1e-12);
    }
}
