use image::imageops::FilterType;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::{debug, warn};

use super::resolve_poster;
use crate::error::AssetError;

/// Longest edge of list-row thumbnails
const THUMBNAIL_SIZE: u32 = 96;

/// Get the poster thumbnail cache directory
/// Returns ~/.cache/movieslib/posters on Linux
pub fn get_thumbnail_cache_dir() -> Result<PathBuf, AssetError> {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .ok_or(AssetError::CacheDir)?;

    path.push("movieslib");
    path.push("posters");

    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Cache file name for a poster file.
///
/// Keyed on the canonical source path plus its length and modification
/// time, so a replaced poster or a different assets directory gets a
/// fresh thumbnail.
fn cache_file_name(source: &Path) -> Result<String, AssetError> {
    let metadata = fs::metadata(source)?;
    let modified = metadata
        .modified()?
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let canonical = source.canonicalize()?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.to_string_lossy().as_bytes());
    hasher.update(metadata.len().to_le_bytes());
    hasher.update(modified.to_le_bytes());
    Ok(format!("{:x}.png", hasher.finalize()))
}

/// Generate (or reuse) the thumbnail for a poster inside `cache_dir`
pub fn poster_thumbnail_in(cache_dir: &Path, source: &Path) -> Result<PathBuf, AssetError> {
    let thumbnail_path = cache_dir.join(cache_file_name(source)?);
    if thumbnail_path.exists() {
        return Ok(thumbnail_path);
    }

    let img = image::open(source)?;
    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);
    thumbnail.save(&thumbnail_path)?;

    debug!("📸 Generated thumbnail: {}", thumbnail_path.display());
    Ok(thumbnail_path)
}

/// Build thumbnails for every reference that has a poster in `assets_dir`.
///
/// Missing or undecodable posters are skipped; the list just shows no image.
pub async fn generate_thumbnails(
    assets_dir: PathBuf,
    references: Vec<String>,
) -> Vec<(String, PathBuf)> {
    let result = tokio::task::spawn_blocking(move || {
        let cache_dir = match get_thumbnail_cache_dir() {
            Ok(dir) => dir,
            Err(e) => {
                warn!("⚠️  Poster thumbnails disabled: {}", e);
                return Vec::new();
            }
        };
        generate_thumbnails_in(&cache_dir, &assets_dir, &references)
    })
    .await;

    match result {
        Ok(thumbnails) => thumbnails,
        Err(e) => {
            warn!("⚠️  Thumbnail task failed: {}", e);
            Vec::new()
        }
    }
}

fn generate_thumbnails_in(
    cache_dir: &Path,
    assets_dir: &Path,
    references: &[String],
) -> Vec<(String, PathBuf)> {
    let mut thumbnails = Vec::new();

    for reference in references {
        let Some(source) = resolve_poster(assets_dir, reference) else {
            debug!("No poster for {:?} in {}", reference, assets_dir.display());
            continue;
        };

        match poster_thumbnail_in(cache_dir, &source) {
            Ok(path) => thumbnails.push((reference.clone(), path)),
            Err(e) => warn!("⚠️  Skipping poster {}: {}", source.display(), e),
        }
    }

    thumbnails
}
