use figgrade::figure::{Axes, Figure, Series};
use figgrade::inspect::{has_legend, has_text, has_title, has_xlabel, has_ylabel};

#[test]
fn title_presence_requires_non_empty_string() {
    let mut axes = Axes::new();
    assert!(!has_title(&axes));

    axes.set_title("");
    assert!(!has_title(&axes));

    axes.set_title("my title");
    assert!(has_title(&axes));

    axes.set_title("");
    assert!(!has_title(&axes));
}

#[test]
fn whitespace_only_title_counts_as_absent() {
    let mut axes = Axes::new();
    axes.set_title("   ");
    assert!(!has_title(&axes));
}

#[test]
fn xlabel_presence_requires_non_empty_string() {
    let mut axes = Axes::new();
    assert!(!has_xlabel(&axes));

    axes.set_xlabel("");
    assert!(!has_xlabel(&axes));

    axes.set_xlabel("x");
    assert!(has_xlabel(&axes));
}

#[test]
fn ylabel_presence_requires_non_empty_string() {
    let mut axes = Axes::new();
    assert!(!has_ylabel(&axes));

    axes.set_ylabel("");
    assert!(!has_ylabel(&axes));

    axes.set_ylabel("y");
    assert!(has_ylabel(&axes));
}

#[test]
fn legend_requires_labeled_series_and_attachment() {
    let mut axes = Axes::new();
    assert!(!has_legend(&axes));

    let series = Series::line(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).expect("series");
    axes.plot(series.clone().with_label("a"));
    assert!(
        !has_legend(&axes),
        "labeled series without attached legend must not count"
    );

    axes.attach_legend();
    assert!(has_legend(&axes));

    let mut unlabeled = Axes::new();
    unlabeled.plot(series);
    unlabeled.attach_legend();
    assert!(
        !has_legend(&unlabeled),
        "attached legend over unlabeled series must not count"
    );
}

#[test]
fn empty_string_label_does_not_make_series_labeled() {
    let mut axes = Axes::new();
    let series = Series::line(vec![0.0, 1.0], vec![1.0, 2.0]).expect("series");
    axes.plot(series.with_label(""));
    axes.attach_legend();
    assert!(!has_legend(&axes));
}

#[test]
fn figure_text_presence_sees_only_figure_level_captions() {
    let mut figure = Figure::new();
    figure.add_axes();
    assert!(!has_text(&figure));

    figure.add_text(0.0, 0.0, "my text");
    assert!(has_text(&figure));
}

#[test]
fn axes_owned_text_is_excluded_from_figure_text_presence() {
    let mut figure = Figure::new();
    let axes = figure.add_axes();
    axes.add_text(0.5, 0.5, "annotation inside axes");
    assert!(!has_text(&figure));

    // The annotation is still reachable from the figure as a whole.
    assert_eq!(figure.all_texts().count(), 1);
}

#[test]
fn empty_caption_content_does_not_count() {
    let mut figure = Figure::new();
    figure.add_axes();
    figure.add_text(0.0, 0.0, "");
    assert!(!has_text(&figure));

    figure.add_text(0.0, 0.1, "   ");
    assert!(!has_text(&figure));

    figure.add_text(0.0, 0.2, "caption");
    assert!(has_text(&figure));
}
