// crates/yamadb-core/src/loader.rs

//! # Dataset Loader
//!
//! Handles the physical layer (file I/O, optional decompression) for the
//! bundled peak dataset and memoizes the parsed database process-wide via
//! `OnceCell`. An on-disk bincode cache beside the JSON source is read when
//! it is at least as new as the source; writing one is an explicit step
//! ([`PeakDb::write_cache`]), never a side effect of loading.

use crate::error::{GeoError, Result};
use crate::model::PeakDb;
use crate::traits::DefaultBackend;
use once_cell::sync::OnceCell;
#[cfg(feature = "json")]
use std::fs::File;
#[cfg(feature = "json")]
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

static PEAK_DB_CACHE: OnceCell<PeakDb<DefaultBackend>> = OnceCell::new();

/// Suffix of the on-disk binary cache written next to the JSON source.
pub const CACHE_SUFFIX: &str = ".bin";

impl PeakDb<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "mountains.json"
    }

    /// Load the bundled dataset, memoized for the process lifetime.
    pub fn load() -> Result<Self> {
        PEAK_DB_CACHE
            .get_or_try_init(|| {
                let dir = Self::default_data_dir();
                let file = Self::default_dataset_filename();
                Self::load_from_path(dir.join(file))
            })
            .cloned()
    }

    /// Load a dataset from an explicit path.
    ///
    /// A binary cache (`<name>.bin`) beside the source is used when its
    /// mtime is at least the source's, so an edited JSON (or `.json.gz`,
    /// with the `compact` feature) always wins over a stale cache. Loading
    /// never writes the cache; see [`Self::write_cache`].
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let cache_path = binary_cache_path(path);
        if cache_is_fresh(&cache_path, path) {
            let bytes = std::fs::read(&cache_path)?;
            return Self::from_bytes(&bytes);
        }

        Self::load_source(path)
    }

    /// Write the binary cache beside `source_path` and return its path.
    pub fn write_cache(&self, source_path: impl AsRef<Path>) -> Result<PathBuf> {
        let cache_path = binary_cache_path(source_path.as_ref());
        std::fs::write(&cache_path, self.to_bytes()?)?;
        Ok(cache_path)
    }

    /// Decode a database from its bincode representation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Encode the database to its bincode representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    #[cfg(feature = "json")]
    fn load_source(path: &Path) -> Result<Self> {
        let reader = open_stream(path)?;
        let raw: crate::model::PeaksRaw = serde_json::from_reader(reader)?;
        Ok(crate::model::build_peakdb(raw))
    }

    #[cfg(not(feature = "json"))]
    fn load_source(path: &Path) -> Result<Self> {
        Err(GeoError::NotFound(format!(
            "no binary cache at {} and JSON support is disabled (enable the `json` feature)",
            binary_cache_path(path).display()
        )))
    }
}

/// `mountains.json` -> `mountains.json.bin`; `mountains.json.gz` likewise.
fn binary_cache_path(source: &Path) -> PathBuf {
    let mut name = source.as_os_str().to_os_string();
    name.push(CACHE_SUFFIX);
    PathBuf::from(name)
}

/// True when the cache exists and is no older than the source. A cache
/// without a readable source (a `.bin`-only install) counts as fresh.
fn cache_is_fresh(cache: &Path, source: &Path) -> bool {
    let Ok(cache_meta) = std::fs::metadata(cache) else {
        return false;
    };
    let source_mtime = std::fs::metadata(source).and_then(|m| m.modified());
    match (cache_meta.modified(), source_mtime) {
        (Ok(c), Ok(s)) => c >= s,
        (_, Err(_)) => true,
        (Err(_), Ok(_)) => false,
    }
}

/// Opens a file, buffers it, and unwraps gzip when the extension says so.
/// The caller gets a plain reader either way.
#[cfg(feature = "json")]
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        return Err(GeoError::NotFound(format!(
            "{} is gzip-compressed but the `compact` feature is disabled",
            path.display()
        )));
    }

    Ok(Box::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_loads_and_memoizes() {
        let db = PeakDb::load().expect("bundled dataset");
        let stats = db.stats();
        assert!(stats.peaks >= 40, "bundled dataset too small: {}", stats.peaks);
        assert!(stats.located <= stats.peaks);
        // Second load hits the in-memory cache and agrees.
        let again = PeakDb::load().unwrap();
        assert_eq!(again.stats().peaks, stats.peaks);
    }

    #[test]
    fn bundled_dataset_contains_fuji() {
        let db = PeakDb::load().unwrap();
        let fuji = db.find_by_name("fuji");
        assert!(fuji.iter().any(|p| p.name() == "富士山"));
    }

    #[test]
    fn binary_round_trip() {
        let db = PeakDb::load().unwrap();
        let bytes = db.to_bytes().unwrap();
        let back = PeakDb::from_bytes(&bytes).unwrap();
        assert_eq!(back.stats().peaks, db.stats().peaks);
    }

    #[test]
    fn missing_dataset_is_not_found() {
        let err = PeakDb::load_from_path("/no/such/dataset.json").unwrap_err();
        assert!(matches!(err, GeoError::NotFound(_)));
    }

    #[test]
    fn cache_path_appends_suffix() {
        assert_eq!(
            binary_cache_path(Path::new("data/mountains.json")),
            PathBuf::from("data/mountains.json.bin")
        );
    }

    #[cfg(feature = "json")]
    fn scratch_dataset(test: &str, json: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("yamadb-{}-{}", test, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("peaks.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[cfg(feature = "json")]
    const ONE_PEAK: &str =
        r#"[{ "mid": "1", "name": "高尾山", "lat": 35.6252, "lon": 139.2437 }]"#;
    #[cfg(feature = "json")]
    const TWO_PEAKS: &str = r#"[
        { "mid": "1", "name": "高尾山", "lat": 35.6252, "lon": 139.2437 },
        { "mid": "2", "name": "陣馬山", "lat": 35.6539, "lon": 139.1664 }
    ]"#;

    #[cfg(feature = "json")]
    #[test]
    fn loading_does_not_write_a_cache() {
        let path = scratch_dataset("no-cache-write", ONE_PEAK);
        let db = PeakDb::load_from_path(&path).unwrap();
        assert_eq!(db.stats().peaks, 1);
        assert!(!binary_cache_path(&path).exists());
    }

    #[cfg(feature = "json")]
    #[test]
    fn edited_source_beats_stale_cache() {
        let path = scratch_dataset("stale-cache", ONE_PEAK);
        let db = PeakDb::load_from_path(&path).unwrap();
        db.write_cache(&path).unwrap();

        // Re-edit the source strictly later than the cache.
        std::thread::sleep(std::time::Duration::from_millis(20));
        std::fs::write(&path, TWO_PEAKS).unwrap();

        let reloaded = PeakDb::load_from_path(&path).unwrap();
        assert_eq!(reloaded.stats().peaks, 2);
    }

    #[cfg(feature = "json")]
    #[test]
    fn fresh_cache_is_read() {
        let path = scratch_dataset("fresh-cache", TWO_PEAKS);
        let db = PeakDb::load_from_path(&path).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let cache = db.write_cache(&path).unwrap();
        assert!(cache.exists());

        // The cache alone suffices once the source is gone.
        std::fs::remove_file(&path).unwrap();
        let from_cache = PeakDb::load_from_path(&path).unwrap();
        assert_eq!(from_cache.stats().peaks, 2);
    }
}
