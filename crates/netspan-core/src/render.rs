//! Raster rendering of graphs and routes
//!
//! Draws edges as lines and nodes as filled discs onto an RGB canvas,
//! over-drawing a route in highlight colors, and exports PNG. World
//! coordinates are fitted to the canvas with a uniform scale; the y
//! axis is flipped into image space.

use std::collections::HashSet;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::config::RenderConfig;
use crate::error::{NetspanError, Result};
use crate::graph::{Graph, Node};

/// Render a graph, highlighting the given route if any
pub fn render_graph(
    graph: &Graph,
    route: Option<&[String]>,
    cfg: &RenderConfig,
) -> Result<RgbImage> {
    let background = parse_color(&cfg.background)?;
    let edge_color = parse_color(&cfg.edge_color)?;
    let node_color = parse_color(&cfg.node_color)?;
    let route_edge_color = parse_color(&cfg.route_edge_color)?;
    let route_node_color = parse_color(&cfg.route_node_color)?;

    let mut canvas = RgbImage::from_pixel(cfg.width.max(1), cfg.height.max(1), background);
    let Some(projection) = Projection::fit(graph, cfg) else {
        return Ok(canvas);
    };

    let route = route.unwrap_or(&[]);
    let on_route: HashSet<&str> = route.iter().map(String::as_str).collect();
    let route_hops: HashSet<(&str, &str)> = route
        .windows(2)
        .map(|pair| order_pair(&pair[0], &pair[1]))
        .collect();

    for edge in graph.edges() {
        let (Some(a), Some(b)) = (graph.node(&edge.a), graph.node(&edge.b)) else {
            continue;
        };
        let color = if route_hops.contains(&order_pair(&edge.a, &edge.b)) {
            route_edge_color
        } else {
            edge_color
        };
        draw_line(&mut canvas, projection.project(a), projection.project(b), color);
    }

    for node in graph.nodes() {
        let color = if on_route.contains(node.id.as_str()) {
            route_node_color
        } else {
            node_color
        };
        draw_disc(&mut canvas, projection.project(node), cfg.node_radius, color);
    }

    Ok(canvas)
}

/// Write a rendered canvas as a PNG file
pub fn write_png(path: &Path, image: &RgbImage) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Parse a "#rrggbb" color string
pub fn parse_color(value: &str) -> Result<Rgb<u8>> {
    let hex = value
        .strip_prefix('#')
        .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| NetspanError::invalid_value("color", value))?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| NetspanError::invalid_value("color", value))
    };
    Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}

fn order_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// World-to-canvas mapping: uniform scale, centered, y flipped
struct Projection {
    scale: f64,
    tx: f64,
    ty: f64,
    height: f64,
}

impl Projection {
    fn fit(graph: &Graph, cfg: &RenderConfig) -> Option<Projection> {
        let mut nodes = graph.nodes();
        let first = nodes.next()?;
        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;
        for node in nodes {
            min_x = min_x.min(node.x);
            max_x = max_x.max(node.x);
            min_y = min_y.min(node.y);
            max_y = max_y.max(node.y);
        }

        let avail_w = cfg.width.saturating_sub(2 * cfg.margin).max(1) as f64;
        let avail_h = cfg.height.saturating_sub(2 * cfg.margin).max(1) as f64;
        let span_x = max_x - min_x;
        let span_y = max_y - min_y;
        let scale = match (span_x > 0.0, span_y > 0.0) {
            (true, true) => (avail_w / span_x).min(avail_h / span_y),
            (true, false) => avail_w / span_x,
            (false, true) => avail_h / span_y,
            (false, false) => 1.0,
        };

        let margin = cfg.margin as f64;
        Some(Projection {
            scale,
            tx: margin + (avail_w - span_x * scale) / 2.0 - min_x * scale,
            ty: margin + (avail_h - span_y * scale) / 2.0 - min_y * scale,
            height: cfg.height.max(1) as f64,
        })
    }

    fn project(&self, node: &Node) -> (i64, i64) {
        let x = node.x * self.scale + self.tx;
        let y = self.height - 1.0 - (node.y * self.scale + self.ty);
        (x.round() as i64, y.round() as i64)
    }
}

fn put_pixel_checked(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_line(canvas: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel_checked(canvas, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn draw_disc(canvas: &mut RgbImage, center: (i64, i64), radius: u32, color: Rgb<u8>) {
    let r = radius as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put_pixel_checked(canvas, center.0 + dx, center.1 + dy, color);
            }
        }
    }
}
