use super::ingest_error::IngestError;
use serde::Serialize;
use stationboard_core::model::RouteShapeFeature;
use std::path::Path;

/// writes one index artifact as pretty-printed JSON. an existing file is
/// left alone unless `overwrite` is set, matching the batch job's re-run
/// behavior.
pub fn write_json_artifact<T: Serialize>(
    value: &T,
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<(), IngestError> {
    let path = directory.join(filename);
    if path.exists() && !overwrite {
        log::info!("artifact {} exists, skipping", path.display());
        return Ok(());
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| IngestError::SerializeError {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, json)
        .map_err(|source| IngestError::ArtifactWriteError { path, source })?;
    Ok(())
}

/// writes the route geometry artifact as a GeoJSON FeatureCollection.
pub fn write_geojson_artifact(
    features: &[RouteShapeFeature],
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<(), IngestError> {
    let path = directory.join(filename);
    if path.exists() && !overwrite {
        log::info!("artifact {} exists, skipping", path.display());
        return Ok(());
    }
    let collection = geojson::FeatureCollection {
        bbox: None,
        features: features.iter().map(|f| f.to_geojson_feature()).collect(),
        foreign_members: None,
    };
    let body = geojson::GeoJson::from(collection).to_string();
    std::fs::write(&path, body)
        .map_err(|source| IngestError::ArtifactWriteError { path, source })?;
    Ok(())
}
