//! Geometry of the sales line chart (SVG user units)

/// Plotted sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 240.0,
            padding: 40.0,
        }
    }
}

/// Fractions of the plot height where grid lines are drawn
pub const GRID_STEPS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

impl ChartGeometry {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    /// Horizontal position of sample `index` out of `count`
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        let span = self.width - self.padding * 2.0;
        let steps = count.saturating_sub(1).max(1) as f64;
        self.padding + (index as f64 * span) / steps
    }

    /// Vertical position of `value`; the maximum sits on the top padding line
    pub fn y_at(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        self.padding + (1.0 - value / max) * (self.height - self.padding * 2.0)
    }

    pub fn points(&self, values: &[f64]) -> Vec<ChartPoint> {
        let max = max_value(values);
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ChartPoint {
                x: self.x_at(i, values.len()),
                y: self.y_at(*v, max),
            })
            .collect()
    }

    /// y coordinates of the horizontal grid lines
    pub fn grid_lines(&self) -> Vec<f64> {
        GRID_STEPS
            .iter()
            .map(|t| self.padding + t * (self.height - self.padding * 2.0))
            .collect()
    }

    /// Closed area under the line, for the fill polygon
    pub fn area_points(&self, points: &[ChartPoint]) -> String {
        if points.is_empty() {
            return String::new();
        }
        format!(
            "{} {},{} {},{}",
            polyline(points),
            self.width - self.padding,
            self.baseline(),
            self.padding,
            self.baseline()
        )
    }
}

/// `points` attribute of an SVG polyline ("x,y x,y ...")
pub fn polyline(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_overview::data::sample_sales;

    #[test]
    fn test_points_span_plot_area() {
        let g = ChartGeometry::default();
        let values: Vec<f64> = sample_sales().iter().map(|s| s.value).collect();
        let points = g.points(&values);

        assert_eq!(points.len(), 7);
        assert_eq!(points[0].x, 40.0);
        assert_eq!(points[6].x, 720.0);
        // May (420) is the maximum
        assert_eq!(points[4].y, 40.0);
        // Jan: 40 + (1 - 200/420) * 160
        assert!((points[0].y - (40.0 + (1.0 - 200.0 / 420.0) * 160.0)).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_and_zero_max() {
        let g = ChartGeometry::default();
        let points = g.points(&[0.0]);
        assert_eq!(points, vec![ChartPoint { x: 40.0, y: 200.0 }]);
        assert!(g.points(&[]).is_empty());
        assert_eq!(g.area_points(&[]), "");
    }

    #[test]
    fn test_grid_lines() {
        let g = ChartGeometry::default();
        assert_eq!(g.grid_lines(), vec![40.0, 80.0, 120.0, 160.0, 200.0]);
    }

    #[test]
    fn test_polyline_format() {
        let pts = [ChartPoint { x: 40.0, y: 80.5 }, ChartPoint { x: 720.0, y: 40.0 }];
        assert_eq!(polyline(&pts), "40,80.5 720,40");
        let g = ChartGeometry::default();
        assert_eq!(g.area_points(&pts), "40,80.5 720,40 720,200 40,200");
        assert_eq!(g.view_box(), "0 0 760 240");
    }
}
