use std::f64::consts::PI;

use serde::Serialize;

use crate::models::ChartDay;

/// Extra stroke width for the current day's segment.
const CURRENT_EMPHASIS: f64 = 4.0;
/// Extra stroke width for a user-selected segment.
const SELECTED_EMPHASIS: f64 = 2.0;
const DIMMED_OPACITY: f64 = 0.8;
const MARKER_RADIUS: f64 = 4.0;

/// Display parameters for the cycle ring.
#[derive(Debug, Clone)]
pub struct RingOptions {
    /// Overall diameter in pixels.
    pub size: f64,
    pub stroke_width: f64,
    pub show_labels: bool,
    pub show_center: bool,
    pub selected_day: Option<i64>,
}

impl Default for RingOptions {
    fn default() -> Self {
        Self {
            size: 240.0,
            stroke_width: 12.0,
            show_labels: false,
            show_center: true,
            selected_day: None,
        }
    }
}

/// One day's arc on the ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingSegment {
    pub day: i64,
    pub color: &'static str,
    /// Degrees; 12 o'clock is -90 in SVG coordinates.
    pub start_angle: f64,
    pub end_angle: f64,
    pub stroke_width: f64,
    pub opacity: f64,
    pub path: String,
}

/// Dot placed just outside the ring at the current day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLabel {
    pub day: i64,
    pub x: f64,
    pub y: f64,
}

/// Inner disc drawn beneath the ring. Visual layering only, carries no data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterDisc {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingLayout {
    pub size: f64,
    pub segments: Vec<RingSegment>,
    pub marker: Option<Marker>,
    pub center: Option<CenterDisc>,
    pub labels: Vec<DayLabel>,
}

/// Map per-day chart data onto ring geometry.
///
/// The circle is split into `chart_data.len()` equal arcs, rotated -90
/// degrees so day 1 starts at 12 o'clock. The current day gets a wider
/// stroke, full opacity, and a marker dot offset outward from the ring.
pub fn ring_layout(chart_data: &[ChartDay], opts: &RingOptions) -> RingLayout {
    let cx = opts.size / 2.0;
    let cy = opts.size / 2.0;
    // Leave room for the widened current-day stroke and the marker.
    let radius = opts.size / 2.0 - (opts.stroke_width + CURRENT_EMPHASIS) / 2.0 - MARKER_RADIUS;

    let center = if opts.show_center {
        Some(CenterDisc {
            cx,
            cy,
            r: (radius - opts.stroke_width / 2.0 - 4.0).max(0.0),
        })
    } else {
        None
    };

    if chart_data.is_empty() {
        return RingLayout {
            size: opts.size,
            segments: Vec::new(),
            marker: None,
            center,
            labels: Vec::new(),
        };
    }

    let segment_angle = 360.0 / chart_data.len() as f64;
    let mut segments = Vec::with_capacity(chart_data.len());
    let mut marker = None;
    let mut labels = Vec::new();

    for (i, day) in chart_data.iter().enumerate() {
        let start_angle = i as f64 * segment_angle - 90.0;
        let end_angle = start_angle + segment_angle;
        let selected = opts.selected_day == Some(day.day);

        let stroke_width = if day.is_current {
            opts.stroke_width + CURRENT_EMPHASIS
        } else if selected {
            opts.stroke_width + SELECTED_EMPHASIS
        } else {
            opts.stroke_width
        };
        let opacity = if day.is_current || selected {
            1.0
        } else {
            DIMMED_OPACITY
        };

        segments.push(RingSegment {
            day: day.day,
            color: day.color,
            start_angle,
            end_angle,
            stroke_width,
            opacity,
            path: arc_path(cx, cy, radius, start_angle, end_angle),
        });

        let mid_angle = start_angle + segment_angle / 2.0;
        if day.is_current {
            let (mx, my) = polar(cx, cy, radius + opts.stroke_width / 2.0 + MARKER_RADIUS, mid_angle);
            marker = Some(Marker {
                cx: mx,
                cy: my,
                r: MARKER_RADIUS,
                color: day.color,
            });
        }
        if opts.show_labels {
            let (lx, ly) = polar(cx, cy, radius - opts.stroke_width / 2.0 - 10.0, mid_angle);
            labels.push(DayLabel {
                day: day.day,
                x: lx,
                y: ly,
            });
        }
    }

    RingLayout {
        size: opts.size,
        segments,
        marker,
        center,
        labels,
    }
}

/// Render the layout as a standalone SVG document.
pub fn render_svg(layout: &RingLayout) -> String {
    let mut body = String::new();

    if let Some(c) = &layout.center {
        body.push_str(&format!(
            r##"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="#FDF2F8"/>
"##,
            c.cx, c.cy, c.r
        ));
    }
    for s in &layout.segments {
        body.push_str(&format!(
            r##"  <path d="{}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-linecap="butt" opacity="{:.2}"/>
"##,
            s.path, s.color, s.stroke_width, s.opacity
        ));
    }
    if let Some(m) = &layout.marker {
        body.push_str(&format!(
            r##"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1.5"/>
"##,
            m.cx, m.cy, m.r, m.color
        ));
    }
    for l in &layout.labels {
        body.push_str(&format!(
            r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="middle" font-size="8" fill="#6b7280">{}</text>
"##,
            l.x, l.y, l.day
        ));
    }

    format!(
        r##"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">
{body}</svg>"##,
        size = layout.size,
        body = body
    )
}

fn polar(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg * PI / 180.0;
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

fn arc_path(cx: f64, cy: f64, radius: f64, start_deg: f64, end_deg: f64) -> String {
    let (x1, y1) = polar(cx, cy, radius, start_deg);
    let (x2, y2) = polar(cx, cy, radius, end_deg);
    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2}",
        x1, y1, radius, radius, large_arc, x2, y2
    )
}
