//! SVG generation for road and marker tiles

use crate::family::{Naming, TileCandidate};
use crate::geometry::{port_lines, Segment, ANCHOR_POINTS};
use crate::marker::{MarkerKind, MarkerTile};
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// A rendered SVG document and the file name it belongs under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTile {
    pub file_name: String,
    pub svg: String,
}

impl RenderedTile {
    /// File name without the `.svg` extension, used as the document id
    pub fn stem(&self) -> &str {
        file_stem(&self.file_name)
    }
}

/// Build a tile SVG document incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    id: String,
    description: String,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig, id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            config,
            id: id.into(),
            description: description.into(),
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn push(&mut self, element: String) {
        let line = format!("{}{}", self.indent_str(), element);
        self.elements.push(line);
    }

    /// Add the faint alignment grid and tile frame
    pub fn add_grid(&mut self, id: Option<&str>, color: &str) {
        let size = self.config.tile_size;
        let offsets = self.config.grid_offsets();

        self.start_group(
            id,
            &format!("{}{}", attr("stroke", color), attr("stroke-width", "0.5")),
        );
        for &x in &offsets {
            self.add_line(&Segment { x1: x, y1: 0, x2: x, y2: size }, "");
        }
        for &y in &offsets {
            self.add_line(&Segment { x1: 0, y1: y, x2: size, y2: y }, "");
        }
        let size = f64::from(size);
        self.add_rect(0.0, 0.0, size, size, &attr("fill", "none"));
        self.end_group();
    }

    /// Add the legacy alignment grid: rows, then columns, then the four
    /// border lines in place of a frame rect
    pub fn add_bordered_grid(&mut self, id: Option<&str>, color: &str) {
        let size = self.config.tile_size;
        let offsets = self.config.grid_offsets();

        self.start_group(
            id,
            &format!("{}{}", attr("stroke", color), attr("stroke-width", "0.5")),
        );
        for &y in &offsets {
            self.add_line(&Segment { x1: 0, y1: y, x2: size, y2: y }, "");
        }
        for &x in &offsets {
            self.add_line(&Segment { x1: x, y1: 0, x2: x, y2: size }, "");
        }
        for edge in [0, size] {
            self.add_line(&Segment { x1: 0, y1: edge, x2: size, y2: edge }, "");
        }
        for edge in [0, size] {
            self.add_line(&Segment { x1: edge, y1: 0, x2: edge, y2: size }, "");
        }
        self.end_group();
    }

    /// Add an empty `<defs>` block holding an empty `<style>`
    pub fn add_empty_defs(&mut self) {
        self.push("<defs>".to_string());
        self.indent += 1;
        self.push("<style></style>".to_string());
        self.indent = self.indent.saturating_sub(1);
        self.push("</defs>".to_string());
    }

    /// Add a line element
    pub fn add_line(&mut self, segment: &Segment, styles: &str) {
        self.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            segment.x1, segment.y1, segment.x2, segment.y2, styles
        ));
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, x: f64, y: f64, w: f64, h: f64, styles: &str) {
        self.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            x, y, w, h, styles
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64, styles: &str) {
        self.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            cx, cy, r, styles
        ));
    }

    /// Add a path element with optional ID
    pub fn add_path(&mut self, id: Option<&str>, d: &str, styles: &str) {
        let id_attr = id.map(|i| attr("id", i)).unwrap_or_default();
        self.push(format!(
            r#"<path{} d="{}"{}/>"#,
            id_attr,
            escape_xml(d),
            styles
        ));
    }

    /// Add a text element
    pub fn add_text(&mut self, text: &str, x: f64, y: f64, styles: &str) {
        self.push(format!(
            r#"<text x="{}" y="{}"{}>{}</text>"#,
            x,
            y,
            styles,
            escape_xml(text)
        ));
    }

    /// Open a group element with optional ID
    pub fn start_group(&mut self, id: Option<&str>, styles: &str) {
        let id_attr = id.map(|i| attr("id", i)).unwrap_or_default();
        self.push(format!("<g{}{}>", id_attr, styles));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.push("</g>".to_string());
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let size = self.config.tile_size;
        let inner_indent = if self.config.pretty_print { "  " } else { "" };

        let mut svg = String::new();

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            escape_xml(&self.id),
            size,
            size,
            size,
            size
        ));
        svg.push_str(nl);

        svg.push_str(&format!(
            "{}<desc>{}</desc>",
            inner_indent,
            escape_xml(&self.description)
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// Render one road tile
///
/// Rotated variants reuse the base path data inside a `rotate` transform
/// about the tile centre. Legacy key-named output keeps the older document
/// skeleton: an empty `<defs>` block, a bordered grid, ids on the groups
/// and paths, and the border anchor points.
pub fn render_road_tile(
    tile: &TileCandidate,
    naming: Naming,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> RenderedTile {
    let file_name = tile.file_name(naming);
    let legacy = naming == Naming::Key;
    let (cx, cy) = config.center();

    let mut builder = SvgBuilder::new(
        config.clone(),
        file_stem(&file_name),
        tile.description(naming),
    );

    let grid_color = stylesheet.resolve_or_default("grid");
    if legacy {
        builder.add_empty_defs();
        builder.add_bordered_grid(Some("grid"), &grid_color);
    } else {
        builder.add_grid(None, &grid_color);
    }

    let mut road_styles = format!(
        "{}{}{}",
        attr("stroke", &stylesheet.resolve_or_default("road")),
        attr("stroke-width", "1"),
        attr("fill", "none")
    );
    if let Some(transform) = tile.rotation.svg_transform(cx, cy) {
        road_styles.push_str(&attr("transform", &transform));
    }

    let outer_id = legacy.then(|| format!("road-outer-{}", tile.shape));
    let inner_id = legacy.then(|| format!("road-inner-{}", tile.shape));

    builder.start_group(legacy.then_some("road"), &road_styles);
    builder.add_path(outer_id.as_deref(), tile.paths.outer, "");
    builder.add_path(inner_id.as_deref(), tile.paths.inner, "");
    builder.end_group();

    if legacy {
        builder.start_group(
            Some("anchor-points"),
            &attr("fill", &stylesheet.resolve_or_default("anchor")),
        );
        for (x, y) in ANCHOR_POINTS {
            builder.add_circle(f64::from(x), f64::from(y), 1.0, "");
        }
        builder.end_group();
    }

    RenderedTile {
        svg: builder.build(),
        file_name,
    }
}

/// Render a start or goal marker tile
pub fn render_marker_tile(
    marker: &MarkerTile,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> RenderedTile {
    let file_name = marker.file_name();
    let mut builder = SvgBuilder::new(config.clone(), file_stem(&file_name), marker.description());

    builder.add_grid(None, &stylesheet.resolve_or_default("grid"));

    if !marker.ports.is_empty() {
        builder.start_group(
            None,
            &format!(
                "{}{}{}",
                attr("stroke", &stylesheet.resolve_or_default("connector")),
                attr("stroke-width", "1"),
                attr("fill", "none")
            ),
        );
        for &port in &marker.ports {
            for line in port_lines(port) {
                let d = format!("M {} {} L {} {}", line.x1, line.y1, line.x2, line.y2);
                builder.add_path(None, &d, "");
            }
        }
        builder.end_group();
    }

    let accent = stylesheet.resolve_or_default(marker.kind.accent_token());
    match marker.kind {
        MarkerKind::Start => add_start_flag(&mut builder, stylesheet, &accent),
        MarkerKind::Goal => add_goal_target(&mut builder, &accent),
    }

    RenderedTile {
        svg: builder.build(),
        file_name,
    }
}

fn add_start_flag(builder: &mut SvgBuilder, stylesheet: &Stylesheet, accent: &str) {
    builder.start_group(None, "");
    builder.add_rect(
        10.0,
        5.0,
        1.5,
        20.0,
        &attr("fill", &stylesheet.resolve_or_default("pole")),
    );
    builder.add_path(None, "M 11.5 5 v 10 L 18 10 z", &attr("fill", accent));
    add_caption(builder, "START", accent);
    builder.end_group();
}

fn add_goal_target(builder: &mut SvgBuilder, accent: &str) {
    let ring = format!(
        "{}{}{}",
        attr("fill", "none"),
        attr("stroke", accent),
        attr("stroke-width", "1")
    );

    builder.start_group(None, "");
    add_caption(builder, "GOAL", accent);
    builder.start_group(None, &attr("transform", "translate(20, 15)"));
    builder.add_circle(0.0, 0.0, 6.0, &ring);
    builder.add_circle(0.0, 0.0, 3.0, &ring);
    builder.add_circle(0.0, 0.0, 1.0, &attr("fill", accent));
    builder.end_group();
    builder.end_group();
}

/// Tinted badge with bold caption along the bottom of the tile
fn add_caption(builder: &mut SvgBuilder, text: &str, accent: &str) {
    builder.start_group(None, &attr("transform", "translate(5, 32)"));
    builder.add_rect(
        0.0,
        -7.0,
        30.0,
        10.0,
        &format!(
            "{}{}{}",
            attr("rx", "2"),
            attr("fill", accent),
            attr("fill-opacity", "0.2")
        ),
    );
    builder.add_text(
        text,
        15.0,
        0.0,
        &format!(
            "{}{}{}{}{}",
            attr("font-family", "Arial, sans-serif"),
            attr("font-size", "6"),
            attr("text-anchor", "middle"),
            attr("font-weight", "bold"),
            attr("fill", accent)
        ),
    );
    builder.end_group();
}

fn file_stem(file_name: &str) -> &str {
    file_name.strip_suffix(".svg").unwrap_or(file_name)
}

/// Format a single ` name="value"` attribute
fn attr(name: &str, value: &str) -> String {
    format!(r#" {}="{}""#, name, escape_xml(value))
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::family::{family_candidates, TileTables};
    use crate::geometry::TileShape;
    use crate::port::Port;

    fn curve_tiles() -> Vec<TileCandidate> {
        family_candidates(TileShape::Curve, &TileTables::standard()).unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
    }

    #[test]
    fn test_base_orientation_has_no_transform() {
        let tile = &curve_tiles()[0];
        let rendered = render_road_tile(
            tile,
            Naming::Mask,
            &SvgConfig::default(),
            &Stylesheet::default(),
        );
        assert_eq!(rendered.file_name, "road-tile-curve-05.svg");
        assert!(!rendered.svg.contains("transform"));
        assert!(rendered
            .svg
            .contains(r#"<path d="M 10 0 L 10 10 C 10 15.5 14.5 20 20 20 L 40 20"/>"#));
    }

    #[test]
    fn test_rotated_variant_reuses_base_paths() {
        let tiles = curve_tiles();
        let config = SvgConfig::default();
        let stylesheet = Stylesheet::default();
        let base = render_road_tile(&tiles[0], Naming::Mask, &config, &stylesheet);
        let rotated = render_road_tile(&tiles[3], Naming::Mask, &config, &stylesheet);

        assert_eq!(rotated.file_name, "road-tile-curve-81.svg");
        assert!(rotated.svg.contains(r#"transform="rotate(270 20 20)""#));
        let paths = |svg: &str| {
            svg.lines()
                .filter(|l| l.trim_start().starts_with("<path"))
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        assert_eq!(paths(base.svg.as_str()), paths(rotated.svg.as_str()));
    }

    #[test]
    fn test_road_document_layout() {
        let tile = &curve_tiles()[1];
        let svg = render_road_tile(
            tile,
            Naming::Mask,
            &SvgConfig::default(),
            &Stylesheet::default(),
        )
        .svg;
        let expected = r##"<svg xmlns="http://www.w3.org/2000/svg" id="road-tile-curve-24" width="40" height="40" viewBox="0 0 40 40">
  <desc>curve tile, key=R1R2-D1D2, mask=0x24</desc>
  <g stroke="#ccc" stroke-width="0.5">
    <line x1="10" y1="0" x2="10" y2="40"/>
    <line x1="20" y1="0" x2="20" y2="40"/>
    <line x1="30" y1="0" x2="30" y2="40"/>
    <line x1="0" y1="10" x2="40" y2="10"/>
    <line x1="0" y1="20" x2="40" y2="20"/>
    <line x1="0" y1="30" x2="40" y2="30"/>
    <rect x="0" y="0" width="40" height="40" fill="none"/>
  </g>
  <g stroke="#000" stroke-width="1" fill="none" transform="rotate(90 20 20)">
    <path d="M 10 0 L 10 10 C 10 15.5 14.5 20 20 20 L 40 20"/>
    <path d="M 20 0 L 20 5 C 20 7.8 22.2 10 25 10 L 40 10"/>
  </g>
</svg>
"##;
        assert_eq!(svg, expected);
    }

    #[test]
    fn test_legacy_document_layout() {
        let tile = &curve_tiles()[0];
        let svg = render_road_tile(
            tile,
            Naming::Key,
            &SvgConfig::default(),
            &Stylesheet::default(),
        )
        .svg;
        let expected = r##"<svg xmlns="http://www.w3.org/2000/svg" id="road-tile-curve-U1U2-R1R2" width="40" height="40" viewBox="0 0 40 40">
  <desc>Curve tile: Entry Upper (X:10-20), Exit Right (Y:10-20)</desc>
  <defs>
    <style></style>
  </defs>
  <g id="grid" stroke="#ccc" stroke-width="0.5">
    <line x1="0" y1="10" x2="40" y2="10"/>
    <line x1="0" y1="20" x2="40" y2="20"/>
    <line x1="0" y1="30" x2="40" y2="30"/>
    <line x1="10" y1="0" x2="10" y2="40"/>
    <line x1="20" y1="0" x2="20" y2="40"/>
    <line x1="30" y1="0" x2="30" y2="40"/>
    <line x1="0" y1="0" x2="40" y2="0"/>
    <line x1="0" y1="40" x2="40" y2="40"/>
    <line x1="0" y1="0" x2="0" y2="40"/>
    <line x1="40" y1="0" x2="40" y2="40"/>
  </g>
  <g id="road" stroke="#000" stroke-width="1" fill="none">
    <path id="road-outer-curve" d="M 10 0 L 10 10 C 10 15.5 14.5 20 20 20 L 40 20"/>
    <path id="road-inner-curve" d="M 20 0 L 20 5 C 20 7.8 22.2 10 25 10 L 40 10"/>
  </g>
  <g id="anchor-points" fill="#ff0000">
    <circle cx="10" cy="0" r="1"/>
    <circle cx="20" cy="0" r="1"/>
    <circle cx="30" cy="0" r="1"/>
    <circle cx="40" cy="10" r="1"/>
    <circle cx="40" cy="20" r="1"/>
    <circle cx="40" cy="30" r="1"/>
    <circle cx="10" cy="40" r="1"/>
    <circle cx="20" cy="40" r="1"/>
    <circle cx="30" cy="40" r="1"/>
    <circle cx="0" cy="10" r="1"/>
    <circle cx="0" cy="20" r="1"/>
    <circle cx="0" cy="30" r="1"/>
  </g>
</svg>
"##;
        assert_eq!(svg, expected);
    }

    #[test]
    fn test_legacy_layout_has_ids_and_anchors() {
        let tile = &curve_tiles()[0];
        let rendered = render_road_tile(
            tile,
            Naming::Key,
            &SvgConfig::default(),
            &Stylesheet::default(),
        );
        assert_eq!(rendered.file_name, "road-tile-curve-U1U2-R1R2.svg");
        assert_eq!(rendered.stem(), "road-tile-curve-U1U2-R1R2");
        let svg = &rendered.svg;
        assert!(svg.contains(r#"id="road-tile-curve-U1U2-R1R2""#));
        assert!(svg.contains(r#"<g id="grid""#));
        assert!(svg.contains(r#"<path id="road-outer-curve""#));
        assert!(svg.contains(r#"<path id="road-inner-curve""#));
        assert!(svg.contains(r##"<g id="anchor-points" fill="#ff0000">"##));
        assert_eq!(svg.matches("<circle").count(), 12);
        assert!(svg.contains(
            "<desc>Curve tile: Entry Upper (X:10-20), Exit Right (Y:10-20)</desc>"
        ));
    }

    #[test]
    fn test_compact_output() {
        let tile = &curve_tiles()[0];
        let svg = render_road_tile(
            tile,
            Naming::Mask,
            &SvgConfig::default().with_pretty_print(false),
            &Stylesheet::default(),
        )
        .svg;
        assert!(!svg.contains('\n'));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_marker_connectors() {
        let marker = MarkerTile::new(MarkerKind::Start, vec![Port::E0]);
        let rendered = render_marker_tile(&marker, &SvgConfig::default(), &Stylesheet::default());
        assert_eq!(rendered.file_name, "road-tile-marker-start-04.svg");
        let svg = &rendered.svg;
        assert!(svg.contains(r#"<path d="M 30 10 L 40 10"/>"#));
        assert!(svg.contains(r#"<path d="M 30 20 L 40 20"/>"#));
        assert!(svg.contains(">START</text>"));
        assert!(svg.contains(r##"fill="#3498db""##));
        assert!(!svg.contains("GOAL"));
        assert!(svg.contains("<desc>Start marker tile, ports=[E0], mask=0x04</desc>"));
    }

    #[test]
    fn test_goal_marker_decoration() {
        let marker = MarkerTile::new(MarkerKind::Goal, vec![Port::W0]);
        let svg = render_marker_tile(&marker, &SvgConfig::default(), &Stylesheet::default()).svg;
        assert!(svg.contains(">GOAL</text>"));
        assert!(svg.contains(r#"transform="translate(20, 15)""#));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(r#"<path d="M 0 10 L 10 10"/>"#));
        assert!(!svg.contains("START"));
    }

    #[test]
    fn test_marker_without_ports_has_no_connectors() {
        let marker = MarkerTile::new(MarkerKind::Goal, vec![]);
        let rendered = render_marker_tile(&marker, &SvgConfig::default(), &Stylesheet::default());
        assert_eq!(rendered.file_name, "road-tile-marker-goal-00.svg");
        assert!(!rendered.svg.contains(r#"d="M 0"#));
    }

    #[test]
    fn test_stylesheet_colors_apply() {
        let stylesheet = Stylesheet::from_str(
            r##"
[colors]
road = "#123456"
grid = "#eeeeee"
"##,
        )
        .unwrap();
        let tile = &curve_tiles()[0];
        let svg = render_road_tile(tile, Naming::Mask, &SvgConfig::default(), &stylesheet).svg;
        assert!(svg.contains(r##"<g stroke="#123456" stroke-width="1" fill="none">"##));
        assert!(svg.contains(r##"<g stroke="#eeeeee" stroke-width="0.5">"##));
    }
}
