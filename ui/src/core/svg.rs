//! SVG rendering for figures. Pure markup building: the dashboard embeds the
//! returned string with `dangerous_inner_html`, so everything user-supplied
//! is escaped here.

use super::chart::{ChartKind, Figure};

const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 76.0;
const TICKS: i64 = 4;
const X_LABEL_MAX: usize = 16;

pub fn render_svg(figure: &Figure, width: u32, height: u32) -> String {
    let w = width as f64;
    let h = height as f64;
    let plot_w = w - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = h - MARGIN_TOP - MARGIN_BOTTOM;
    let base_y = MARGIN_TOP + plot_h;

    let max_value = figure
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied().flatten())
        .max()
        .unwrap_or(0)
        .max(1);
    let tick_step = ((max_value as f64) / TICKS as f64).ceil().max(1.0) as i64;
    let axis_max = (tick_step * TICKS) as f64;
    let scale = |value: i64| base_y - (value as f64 / axis_max) * plot_h;

    let slots = figure.x_labels.len().max(1) as f64;
    let slot_w = plot_w / slots;
    let slot_center = |i: usize| MARGIN_LEFT + slot_w * (i as f64 + 0.5);

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {width} {height}\" \
         class=\"chart-figure\" role=\"img\">"
    );

    // Value axis: gridlines and tick labels.
    for tick in 0..=TICKS {
        let value = tick_step * tick;
        let y = scale(value);
        svg.push_str(&format!(
            "<line class=\"chart-figure__grid\" x1=\"{MARGIN_LEFT:.1}\" y1=\"{y:.1}\" \
             x2=\"{:.1}\" y2=\"{y:.1}\"/>",
            w - MARGIN_RIGHT
        ));
        svg.push_str(&format!(
            "<text class=\"chart-figure__tick\" x=\"{:.1}\" y=\"{:.1}\" \
             text-anchor=\"end\">{value}</text>",
            MARGIN_LEFT - 8.0,
            y + 4.0
        ));
    }

    // Keyword labels along the x axis, tilted so long tails stay readable.
    for (i, label) in figure.x_labels.iter().enumerate() {
        svg.push_str(&format!(
            "<text class=\"chart-figure__label\" text-anchor=\"end\" \
             transform=\"translate({:.1} {:.1}) rotate(-35)\">{}</text>",
            slot_center(i),
            base_y + 16.0,
            xml_escape(&truncate_label(label))
        ));
    }

    match figure.kind {
        ChartKind::Bar => {
            for slot in 0..figure.x_labels.len() {
                let present: Vec<(usize, i64)> = figure
                    .series
                    .iter()
                    .enumerate()
                    .filter_map(|(si, s)| s.values.get(slot).copied().flatten().map(|v| (si, v)))
                    .collect();
                if present.is_empty() {
                    continue;
                }
                let group_w = slot_w * 0.72;
                let bar_w = group_w / present.len() as f64;
                let x0 = slot_center(slot) - group_w / 2.0;
                for (k, (si, value)) in present.iter().enumerate() {
                    let y = scale(*value);
                    svg.push_str(&format!(
                        "<rect class=\"chart-figure__bar\" x=\"{:.1}\" y=\"{y:.1}\" \
                         width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\">\
                         <title>{} · {}: {value}</title></rect>",
                        x0 + k as f64 * bar_w,
                        (bar_w - 1.0).max(1.0),
                        base_y - y,
                        figure.series[*si].color,
                        xml_escape(&figure.x_labels[slot]),
                        xml_escape(&figure.series[*si].name),
                    ));
                }
            }
        }
        ChartKind::Line => {
            for series in &figure.series {
                let points: Vec<(f64, f64)> = series
                    .values
                    .iter()
                    .enumerate()
                    .filter_map(|(i, v)| v.map(|value| (slot_center(i), scale(value))))
                    .collect();
                if points.is_empty() {
                    continue;
                }
                let path: Vec<String> = points
                    .iter()
                    .map(|(x, y)| format!("{x:.1},{y:.1}"))
                    .collect();
                svg.push_str(&format!(
                    "<polyline class=\"chart-figure__line\" points=\"{}\" fill=\"none\" \
                     stroke=\"{}\"/>",
                    path.join(" "),
                    series.color
                ));
                for (x, y) in &points {
                    svg.push_str(&format!(
                        "<circle class=\"chart-figure__marker\" cx=\"{x:.1}\" cy=\"{y:.1}\" \
                         r=\"3\" fill=\"{}\"/>",
                        series.color
                    ));
                }
            }
        }
        ChartKind::Scatter => {
            for series in &figure.series {
                for (i, value) in series.values.iter().enumerate() {
                    if let Some(value) = value {
                        svg.push_str(&format!(
                            "<circle class=\"chart-figure__point\" cx=\"{:.1}\" cy=\"{:.1}\" \
                             r=\"4.5\" fill=\"{}\"><title>{} · {}: {value}</title></circle>",
                            slot_center(i),
                            scale(*value),
                            series.color,
                            xml_escape(&figure.x_labels[i]),
                            xml_escape(&series.name),
                        ));
                    }
                }
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= X_LABEL_MAX {
        return label.to_string();
    }
    let mut short: String = label.chars().take(X_LABEL_MAX - 1).collect();
    short.push('…');
    short
}

fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
