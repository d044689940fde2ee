use crate::models::Error;
use crate::types::{CityFrequency, CityName, ResultSet};
use geojson::{GeoJson, Value};
use log::info;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::fs;
use std::path::Path;

/// One closed boundary ring as `(longitude, latitude)` pairs in WGS84 degrees.
pub type BoundaryRing = Vec<(f64, f64)>;

/// Loads a GeoJSON country-boundary layer into plain polygon rings.
///
/// A missing or malformed dataset is fatal; the map cannot be drawn without its
/// base layer. Polygon, MultiPolygon and nested geometry collections are
/// accepted, other geometry types are ignored.
pub fn load_country_boundaries(path: &Path) -> Result<Vec<BoundaryRing>, Error> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::RenderError(format!(
            "Failed to read boundary dataset {}: {}",
            path.display(),
            e
        ))
    })?;

    let geojson = contents.parse::<GeoJson>().map_err(|e| {
        Error::RenderError(format!(
            "Failed to parse boundary dataset {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut rings = Vec::new();
    match geojson {
        GeoJson::FeatureCollection(collection) => {
            for feature in collection.features {
                if let Some(geometry) = feature.geometry {
                    collect_polygon_rings(&geometry.value, &mut rings);
                }
            }
        }
        GeoJson::Feature(feature) => {
            if let Some(geometry) = feature.geometry {
                collect_polygon_rings(&geometry.value, &mut rings);
            }
        }
        GeoJson::Geometry(geometry) => collect_polygon_rings(&geometry.value, &mut rings),
    }

    if rings.is_empty() {
        return Err(Error::RenderError(format!(
            "Boundary dataset {} contains no polygons",
            path.display()
        )));
    }

    info!("Loaded {} boundary rings from {}", rings.len(), path.display());
    Ok(rings)
}

fn collect_polygon_rings(value: &Value, rings: &mut Vec<BoundaryRing>) {
    match value {
        Value::Polygon(polygon) => push_rings(polygon, rings),
        Value::MultiPolygon(multi_polygon) => {
            for polygon in multi_polygon {
                push_rings(polygon, rings);
            }
        }
        Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_polygon_rings(&geometry.value, rings);
            }
        }
        _ => {}
    }
}

fn push_rings(polygon: &[Vec<Vec<f64>>], rings: &mut Vec<BoundaryRing>) {
    for ring in polygon {
        let points: BoundaryRing = ring
            .iter()
            .filter(|position| position.len() >= 2)
            .map(|position| (position[0], position[1]))
            .collect();
        if points.len() >= 3 {
            rings.push(points);
        }
    }
}

/// Renders the top-N mention frequencies as a descending bar chart PNG.
///
/// `ranked` must already be in display order (count descending, first-seen tie
/// order); the renderer only truncates to `top_n` and draws. An empty ranking
/// still produces an (empty) chart rather than failing the run.
pub fn render_frequency_plot(
    ranked: &[(CityName, CityFrequency)],
    top_n: usize,
    out_path: &Path,
) -> Result<(), Error> {
    let top: Vec<&(CityName, CityFrequency)> = ranked.iter().take(top_n).collect();
    let max_count = top.iter().map(|(_, count)| *count).max().unwrap_or(1);
    let bar_count = top.len().max(1);

    let root = BitMapBackend::new(out_path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| Error::RenderError(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Most mentioned cities", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(140)
        .y_label_area_size(60)
        .build_cartesian_2d(0i32..bar_count as i32, 0u32..(max_count as u32 + 1))
        .map_err(|e| Error::RenderError(e.to_string()))?;

    let labels: Vec<String> = top.iter().map(|(city_name, _)| city_name.clone()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bar_count)
        .x_label_formatter(&|x| {
            labels
                .get(*x as usize)
                .cloned()
                .unwrap_or_default()
        })
        .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
        .y_desc("Mentions")
        .draw()
        .map_err(|e| Error::RenderError(e.to_string()))?;

    chart
        .draw_series(top.iter().enumerate().map(|(index, (_, count))| {
            Rectangle::new(
                [(index as i32, 0u32), (index as i32 + 1, *count as u32)],
                RED.mix(0.6).filled(),
            )
        }))
        .map_err(|e| Error::RenderError(e.to_string()))?;

    root.present()
        .map_err(|e| Error::RenderError(e.to_string()))?;

    info!("Wrote frequency plot to {}", out_path.display());
    Ok(())
}

/// Renders the geocoded result set as markers over the country-boundary layer.
///
/// Axes are plain longitude/latitude degrees (EPSG:4326). Countries are drawn
/// as translucent grey polygons, each geocoded city as a translucent red
/// triangle marker.
pub fn render_point_map(
    result_set: &ResultSet,
    boundaries: &[BoundaryRing],
    out_path: &Path,
) -> Result<(), Error> {
    let root = BitMapBackend::new(out_path, (1600, 900)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| Error::RenderError(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Mentioned cities", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-180f64..180f64, -90f64..90f64)
        .map_err(|e| Error::RenderError(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Longitude")
        .y_desc("Latitude")
        .draw()
        .map_err(|e| Error::RenderError(e.to_string()))?;

    let country_style = RGBColor(128, 128, 128).mix(0.3).filled();
    for ring in boundaries {
        chart
            .draw_series(std::iter::once(Polygon::new(ring.clone(), country_style)))
            .map_err(|e| Error::RenderError(e.to_string()))?;
    }

    chart
        .draw_series(result_set.iter().map(|(_, (latitude, longitude))| {
            TriangleMarker::new((*longitude, *latitude), 7, RED.mix(0.4).filled())
        }))
        .map_err(|e| Error::RenderError(e.to_string()))?;

    root.present()
        .map_err(|e| Error::RenderError(e.to_string()))?;

    info!(
        "Wrote point map with {} markers to {}",
        result_set.len(),
        out_path.display()
    );
    Ok(())
}
