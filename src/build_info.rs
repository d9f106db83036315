//! Commit hash and build date baked in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Short "date (commit)" label for the info panel.
pub fn label() -> String {
    format!("{} ({})", BUILD_DATE, BUILD_COMMIT)
}
