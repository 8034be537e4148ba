//! Test helpers for writing catalog fixtures into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;
use tempfile::TempDir;

/// Write `contents` to `path`, creating the file.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Create a temporary directory and return it alongside its UTF-8 path.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// A small baking catalog: `cook` saved the cake, `new` saved nothing.
pub(super) fn baking_catalog_json() -> serde_json::Value {
    json!({
        "items": [
            {"id": "cake", "title": "Cake", "ingredients": ["flour", "egg", "sugar", "butter"]},
            {"id": "biscuits", "title": "Biscuits", "ingredients": ["flour", "sugar", "butter"]},
            {"id": "risotto", "title": "Risotto", "ingredients": ["rice", "stock", "onion"]}
        ],
        "users": [
            {"id": "cook", "saved": ["cake"]},
            {"id": "new", "saved": []}
        ]
    })
}

/// Serialise the baking catalog to `path`.
pub(super) fn write_baking_catalog(path: &Utf8Path) {
    let payload = serde_json::to_vec_pretty(&baking_catalog_json()).expect("serialise catalog");
    write_utf8(path, &payload);
}
