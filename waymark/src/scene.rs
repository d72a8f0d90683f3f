//! Configuration of the 3d scene handed to the external map renderer.
//!
//! None of this is rendered by this crate. The types here describe the
//! basemap, the camera, the overlay layers and the park-boundary layer the
//! way the embedding application configures its mapping SDK; GeoJSON and
//! feature-service URLs are opaque inputs.

use serde::{Deserialize, Serialize};
use waymark_types::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};
use waymark_types::latlon;

use crate::color::Color;
use crate::symbol::{LineStyle, LineSymbol, UniqueValueRenderer};

const PARK_BOUNDARIES_URL: &str =
    "https://services1.arcgis.com/fBc8EJBxQRMcHlei/ArcGIS/rest/services/NPS_Park_Boundaries/FeatureServer/0";
const TRAILS_OVERLAY_URL: &str =
    "https://opendata.arcgis.com/datasets/4746b25f893a4e25b94ab571e8c4cf3d_0.geojson";
const POI_OVERLAY_URL: &str = "data/poi.geojson";

/// Basemap of the scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basemap {
    /// Satellite imagery.
    Satellite,
    /// Basemap loaded from a portal item with the given id.
    PortalItem(String),
}

impl Default for Basemap {
    fn default() -> Self {
        Basemap::Satellite
    }
}

/// Camera position of the scene view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Ground position the camera is placed above.
    pub position: GeoPoint2d,
    /// Elevation above the surface in meters.
    pub elevation: f64,
    /// Compass heading in degrees.
    pub heading: f64,
    /// Tilt from the vertical in degrees.
    pub tilt: f64,
}

impl Camera {
    /// Creates a camera looking straight down from the given elevation.
    pub fn new(position: GeoPoint2d, elevation: f64) -> Self {
        Self {
            position,
            elevation,
            heading: 0.0,
            tilt: 0.0,
        }
    }

    /// Sets the compass heading in degrees.
    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    /// Sets the tilt from the vertical in degrees.
    pub fn with_tilt(mut self, tilt: f64) -> Self {
        self.tilt = tilt;
        self
    }

    /// Returns a copy of the camera shifted by the given number of degrees
    /// of longitude.
    pub fn shifted_lon(&self, degrees: f64) -> Self {
        Self {
            position: GeoPoint2d::latlon(self.position.lat(), self.position.lon() + degrees),
            ..*self
        }
    }

    /// Start position of the scene: a wide view over the Americas.
    pub fn start() -> Self {
        Camera::new(latlon!(13.503629, -98.634766), 5_000_000.0).with_tilt(30.35)
    }

    /// Preset used by the default fly-to button: an overlook of Glacier
    /// National Park.
    pub fn glacier_overlook() -> Self {
        Camera::new(latlon!(48.60, -113.93), 2_500.0)
            .with_heading(45.0)
            .with_tilt(85.0)
    }
}

/// Popup template of an overlay layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupTemplate {
    /// Popup title.
    pub title: String,
    /// Popup body with `{FIELD}` placeholders resolved by the renderer.
    pub content: String,
}

impl PopupTemplate {
    /// Popup for trail overlay features.
    pub fn trail_info() -> Self {
        Self {
            title: "Trail Info".into(),
            content: "<b>Trail Name:</b> {NAME} <br> <b>Type:</b> Class {CLASS} \
                      <br> <b>Notes:</b> {TRLFEATTYPE}"
                .into(),
        }
    }
}

/// A GeoJSON overlay layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonOverlay {
    /// URL the layer is loaded from.
    pub url: String,
    /// Attribution shown for the layer.
    pub copyright: Option<String>,
    /// Popup opened when a feature of the layer is clicked.
    pub popup: Option<PopupTemplate>,
    /// Renderer of the layer. The renderer's default applies when `None`.
    pub renderer: Option<UniqueValueRenderer>,
}

impl GeoJsonOverlay {
    /// Creates an overlay with no attribution, popup or renderer override.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            copyright: None,
            popup: None,
            renderer: None,
        }
    }
}

/// Configuration of the park-boundary feature layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureServiceConfig {
    /// URL of the feature-service layer.
    pub url: String,
    /// Expression producing the feature labels.
    pub label_expression: String,
    /// Symbol the boundaries are drawn with.
    pub boundary_symbol: LineSymbol,
}

/// Full configuration of the reporter scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Basemap of the scene.
    pub basemap: Basemap,
    /// Initial camera position.
    pub camera: Camera,
    /// GeoJSON overlay layers, bottom to top.
    pub overlays: Vec<GeoJsonOverlay>,
    /// The park-boundary layer the park directory is queried from.
    pub park_boundaries: FeatureServiceConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            basemap: Basemap::Satellite,
            camera: Camera::start(),
            overlays: vec![
                GeoJsonOverlay::new(POI_OVERLAY_URL),
                GeoJsonOverlay {
                    url: TRAILS_OVERLAY_URL.into(),
                    copyright: Some("USGS".into()),
                    popup: Some(PopupTemplate::trail_info()),
                    renderer: Some(UniqueValueRenderer::trail_classes()),
                },
            ],
            park_boundaries: FeatureServiceConfig {
                url: PARK_BOUNDARIES_URL.into(),
                label_expression: "$feature.UNIT_NAME".into(),
                boundary_symbol: LineSymbol {
                    color: Color::rgba(26, 26, 26, 255),
                    width: 4.0,
                    style: LineStyle::Dot,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn camera_shift_moves_longitude_only() {
        let camera = Camera::glacier_overlook();
        let shifted = camera.shifted_lon(2.5);

        assert_relative_eq!(shifted.position.lon(), camera.position.lon() + 2.5);
        assert_relative_eq!(shifted.position.lat(), camera.position.lat());
        assert_relative_eq!(shifted.tilt, camera.tilt);
    }

    #[test]
    fn scene_config_serde_round_trip() {
        let config = SceneConfig::default();

        let encoded = serde_json::to_string(&config).expect("serialization failed");
        let decoded: SceneConfig = serde_json::from_str(&encoded).expect("deserialization failed");

        assert_eq!(decoded, config);
    }

    #[test]
    fn default_scene_lists_both_overlays() {
        let config = SceneConfig::default();

        assert_eq!(config.overlays.len(), 2);
        assert!(config.overlays[1].renderer.is_some());
        assert_eq!(config.park_boundaries.boundary_symbol.width, 4.0);
    }
}
