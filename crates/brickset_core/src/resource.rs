//! Resources embedded into the binary at compile time.
//!
//! Lookups are by file name, mirroring how the catalogue is shipped next to
//! the crate sources under `resources/`.

/// Name of the bundled LEGO set catalogue.
pub const BRICKSET_RESOURCE: &str = "brickset.json";

const BUNDLED: &[(&str, &str)] = &[(
    BRICKSET_RESOURCE,
    include_str!("../resources/brickset.json"),
)];

/// Returns the content of a bundled resource, or `None` for unknown names.
pub fn bundled(name: &str) -> Option<&'static str> {
    BUNDLED
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, content)| *content)
}

/// Returns the names of all bundled resources.
pub fn bundled_names() -> impl Iterator<Item = &'static str> {
    BUNDLED.iter().map(|(name, _)| *name)
}
