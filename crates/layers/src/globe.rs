use flights::{GlobeData, HighlightSet, RouteKey};
use foundation::math::project;
use scene::components::{AirportMarker, Drawable3D};
use scene::prefabs::globe_drawable;
use scene::{ArcBuilder, ArcCurve, MeshLine, MeshLineMaterial};
use tracing::debug;

use crate::layer::{Layer, LayerId};
use crate::symbology::{CameraDefaults, GlobeStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct RouteRibbon {
    /// Index into `GlobeData::routes`.
    pub route_index: usize,
    pub key: RouteKey,
    pub highlighted: bool,
    pub arc: ArcCurve,
    pub line: MeshLine,
    pub material: MeshLineMaterial,
}

/// Everything the rendering surface needs for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeSnapshot {
    pub layer: LayerId,
    pub globe: Drawable3D,
    pub markers: Vec<AirportMarker>,
    pub ribbons: Vec<RouteRibbon>,
    /// Routes dropped because an endpoint is not in the airport set.
    pub skipped_routes: usize,
    pub camera: CameraDefaults,
}

impl GlobeSnapshot {
    pub fn highlighted(&self) -> impl Iterator<Item = &RouteRibbon> + '_ {
        self.ribbons.iter().filter(|r| r.highlighted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobeLayer {
    id: LayerId,
    style: GlobeStyle,
}

impl GlobeLayer {
    pub fn new(id: u64) -> Self {
        Self::with_style(id, GlobeStyle::default())
    }

    pub fn with_style(id: u64, style: GlobeStyle) -> Self {
        Self {
            id: LayerId(id),
            style,
        }
    }

    pub fn style(&self) -> &GlobeStyle {
        &self.style
    }

    /// Rebuilds the drawable list from scratch. The dataset and highlight set
    /// are only read.
    pub fn extract(&self, data: &GlobeData, highlight: &HighlightSet) -> GlobeSnapshot {
        let style = &self.style;

        let markers = data
            .airports()
            .iter()
            .map(|a| AirportMarker::for_airport(a, style.lift, style.marker_radius, style.marker_color))
            .collect();

        let arcs = ArcBuilder::new(style.lift, style.arc_height_factor).with_divisions(style.arc_divisions);
        let mut ribbons = Vec::with_capacity(data.routes().len());
        let mut skipped_routes = 0;

        for (route_index, route) in data.routes().iter().enumerate() {
            let Some((origin, dest)) = data.endpoints(route) else {
                debug!("skipping route {} -> {}: unknown airport", route.source, route.target);
                skipped_routes += 1;
                continue;
            };

            let key = route.key();
            let highlighted = highlight.contains_key(&key);
            let route_style = style.route_style(highlighted);

            let arc = arcs.build(
                project(origin.lat, origin.lon, style.lift),
                project(dest.lat, dest.lon, style.lift),
            );
            let line = MeshLine::from_points(&arc.points, |_| style.ribbon_width);

            ribbons.push(RouteRibbon {
                route_index,
                key,
                highlighted,
                arc,
                line,
                material: MeshLineMaterial::screen_space(route_style.color, route_style.width),
            });
        }

        GlobeSnapshot {
            layer: self.id,
            globe: globe_drawable(style.globe_radius, style.globe_segments, &style.texture),
            markers,
            ribbons,
            skipped_routes,
            camera: style.camera,
        }
    }
}

impl Layer for GlobeLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}
