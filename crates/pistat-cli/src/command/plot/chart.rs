//! SVG chart rendering
//!
//! Each function draws one chart of the cohort into its own SVG file.

use std::{ops::Range, path::Path};

use pistat_dataset::{Cohort, NrsGroup, Phase};
use pistat_stats::{histogram::Histogram, kde::GaussianKde, summary::GroupSummary};
use plotters::prelude::*;

const WIDE_CHART_SIZE: (u32, u32) = (1000, 500);
const NARROW_CHART_SIZE: (u32, u32) = (800, 500);
const KDE_POINTS: usize = 200;

const PI_LABEL: &str = "Pulsatility Index (PI)";
const PATIENTS_LABEL: &str = "Number of Patients";
const PHASE_TITLE: &str = "Distribution of PI in Different Phases";

fn phase_color(phase: Phase) -> RGBColor {
    match phase {
        Phase::Intercritical => BLUE,
        Phase::FrequentCrisis => GREEN,
        Phase::Critical => RED,
    }
}

/// Histogram bin count used for a phase's PI values.
fn histogram_bins(phase: Phase) -> usize {
    match phase {
        Phase::Intercritical | Phase::FrequentCrisis => 6,
        Phase::Critical => 7,
    }
}

/// `[min, max]` of `values`, widened by `pad` of its span on each side.
fn padded_range<I>(values: I, pad: f64) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = if max - min < f64::EPSILON { 1.0 } else { max - min };
    (min - span * pad)..(max + span * pad)
}

/// Histogram with a scaled KDE overlay of each phase's PI values.
#[expect(clippy::cast_precision_loss)]
pub(super) fn pi_distribution(path: &Path, cohort: &Cohort) -> anyhow::Result<()> {
    let mut layers = vec![];
    for table in &cohort.phases {
        let values = table.pi_values();
        let histogram = Histogram::new(values.iter().copied(), histogram_bins(table.phase));
        let scale = values.len() as f64 * histogram.bin_width();
        let kde = match GaussianKde::new(&values) {
            Ok(kde) => Some(kde),
            Err(err) => {
                tracing::warn!(phase = %table.phase, %err, "skipping KDE overlay");
                None
            }
        };
        layers.push((table.phase, values, histogram, kde, scale));
    }

    let x_range = padded_range(
        layers.iter().flat_map(|(_, values, ..)| values.iter().copied()),
        0.15,
    );
    let mut curves = vec![];
    for (_, _, _, kde, scale) in &layers {
        let curve = kde.as_ref().map(|kde| {
            kde.curve(x_range.start, x_range.end, KDE_POINTS)
                .into_iter()
                .map(|(x, density)| (x, density * scale))
                .collect::<Vec<_>>()
        });
        curves.push(curve);
    }
    let y_max = layers
        .iter()
        .map(|(_, _, histogram, ..)| histogram.max_count() as f64)
        .chain(curves.iter().flatten().flatten().map(|(_, y)| *y))
        .fold(1.0, f64::max);

    let root = SVGBackend::new(path, WIDE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(PHASE_TITLE, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, 0.0..(y_max * 1.1))?;
    chart
        .configure_mesh()
        .x_desc(PI_LABEL)
        .y_desc(PATIENTS_LABEL)
        .draw()?;

    for ((phase, _, histogram, ..), curve) in layers.iter().zip(&curves) {
        let color = phase_color(*phase);
        chart
            .draw_series(histogram.bins.iter().map(|bin| {
                Rectangle::new(
                    [(bin.range.start, 0.0), (bin.range.end, bin.count as f64)],
                    color.mix(0.3).filled(),
                )
            }))?
            .label(phase.to_string())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.mix(0.3).filled()));
        if let Some(curve) = curve {
            chart.draw_series(LineSeries::new(curve.iter().copied(), color.stroke_width(2)))?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Patient counts over PI, one bar per phase at each PI level.
pub(super) fn patients_by_pi(path: &Path, cohort: &Cohort) -> anyhow::Result<()> {
    const BAR_WIDTH: f64 = 0.03;

    let x_range = padded_range(
        cohort
            .phases
            .iter()
            .flat_map(|t| t.rows.iter().map(|r| r.pi)),
        0.08,
    );
    let y_max = cohort
        .phases
        .iter()
        .flat_map(|t| t.rows.iter().map(|r| f64::from(r.patient_count)))
        .fold(1.0, f64::max);

    let root = SVGBackend::new(path, WIDE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(PHASE_TITLE, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, 0.0..(y_max * 1.1))?;
    chart
        .configure_mesh()
        .x_desc(PI_LABEL)
        .y_desc(PATIENTS_LABEL)
        .draw()?;

    for (offset, table) in (-1_i32..).zip(&cohort.phases) {
        let color = phase_color(table.phase);
        let shift = f64::from(offset) * BAR_WIDTH;
        chart
            .draw_series(table.rows.iter().map(|row| {
                let x = row.pi + shift;
                Rectangle::new(
                    [
                        (x - BAR_WIDTH / 2.0, 0.0),
                        (x + BAR_WIDTH / 2.0, f64::from(row.patient_count)),
                    ],
                    color.filled(),
                )
            }))?
            .label(table.phase.to_string())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Scatter of group PI against the group's mean NRS score.
pub(super) fn pi_vs_nrs(path: &Path, cohort: &Cohort) -> anyhow::Result<()> {
    let points = cohort
        .nrs
        .groups
        .iter()
        .filter_map(|g| g.mean().map(|mean| (g.pi, mean)))
        .collect::<Vec<_>>();

    let root = SVGBackend::new(path, NARROW_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Correlation between PI and Pain Intensity (NRS)",
            ("sans-serif", 22),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            padded_range(points.iter().map(|(x, _)| *x), 0.1),
            padded_range(points.iter().map(|(_, y)| *y), 0.1),
        )?;
    chart
        .configure_mesh()
        .x_desc(PI_LABEL)
        .y_desc("Mean NRS Score")
        .draw()?;

    chart.draw_series(points.iter().map(|&p| Circle::new(p, 5, BLUE.filled())))?;
    root.present()?;
    Ok(())
}

/// Notched box plot of the NRS scores of every group.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(super) fn nrs_boxplot(path: &Path, cohort: &Cohort) -> anyhow::Result<()> {
    const HALF_WIDTH: f64 = 0.3;
    const NOTCH_INSET: f64 = 0.12;

    let boxes = cohort
        .nrs
        .groups
        .iter()
        .filter_map(|group: &NrsGroup| GroupSummary::new(group.values()).map(|s| (group, s)))
        .collect::<Vec<_>>();
    let labels = boxes
        .iter()
        .map(|(group, _)| group.label.clone())
        .collect::<Vec<_>>();
    let y_range = padded_range(
        boxes
            .iter()
            .flat_map(|(_, summary)| [summary.stats.min, summary.stats.max]),
        0.08,
    );

    let root = SVGBackend::new(path, WIDE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Distribution of NRS Scores by PI Group", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..(boxes.len() as f64 - 0.5), y_range)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(boxes.len() + 1)
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .x_desc("PI Group")
        .y_desc("NRS Score")
        .draw()?;

    for (idx, (_, summary)) in boxes.iter().enumerate() {
        let q = &summary.quartiles;
        let center = idx as f64;
        let (left, right) = (center - HALF_WIDTH, center + HALF_WIDTH);
        let (notch_left, notch_right) = (left + NOTCH_INSET, right - NOTCH_INSET);
        // notches may reach past the hinges on small groups
        let notch_low = q.notch_low.max(q.q1);
        let notch_high = q.notch_high.min(q.q3);
        let color = Palette99::pick(idx);

        chart.draw_series(std::iter::once(Polygon::new(
            vec![
                (left, q.q1),
                (left, notch_low),
                (notch_left, q.median),
                (left, notch_high),
                (left, q.q3),
                (right, q.q3),
                (right, notch_high),
                (notch_right, q.median),
                (right, notch_low),
                (right, q.q1),
            ],
            color.mix(0.5).filled(),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![
                (left, q.q1),
                (left, notch_low),
                (notch_left, q.median),
                (left, notch_high),
                (left, q.q3),
                (right, q.q3),
                (right, notch_high),
                (notch_right, q.median),
                (right, notch_low),
                (right, q.q1),
                (left, q.q1),
            ],
            BLACK,
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(notch_left, q.median), (notch_right, q.median)],
            BLACK.stroke_width(2),
        )))?;

        let cap = HALF_WIDTH / 2.0;
        for (hinge, whisker) in [(q.q1, q.lower_whisker), (q.q3, q.upper_whisker)] {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(center, hinge), (center, whisker)],
                BLACK,
            )))?;
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(center - cap, whisker), (center + cap, whisker)],
                BLACK,
            )))?;
        }
        chart.draw_series(
            q.outliers
                .iter()
                .map(|&y| Circle::new((center, y), 3, BLACK.stroke_width(1))),
        )?;
    }

    root.present()?;
    Ok(())
}

/// Scatter of PI against mean pain duration, joined by a dashed line.
pub(super) fn pi_vs_duration(path: &Path, cohort: &Cohort) -> anyhow::Result<()> {
    let points = cohort
        .pain_duration
        .rows
        .iter()
        .map(|row| (row.pi, row.mean_duration))
        .collect::<Vec<_>>();

    let root = SVGBackend::new(path, NARROW_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Correlation between PI and Pain Duration", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            padded_range(points.iter().map(|(x, _)| *x), 0.1),
            padded_range(points.iter().map(|(_, y)| *y), 0.1),
        )?;
    chart
        .configure_mesh()
        .x_desc(PI_LABEL)
        .y_desc("Mean Pain Duration (Hours)")
        .draw()?;

    chart.draw_series(DashedLineSeries::new(
        points.iter().copied(),
        8,
        4,
        BLACK.mix(0.6).stroke_width(1),
    ))?;
    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 5, RED.filled())))?
        .label("Mean Pain Duration")
        .legend(|(x, y)| Circle::new((x + 7, y), 5, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
