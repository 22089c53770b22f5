// src/render/color.rs - Deterministic edge colors for recursion routes
use sha2::{Digest, Sha256};

/// Graphviz color names assigned to recursion routes.
const PALETTE: [&str; 25] = [
    "green",
    "red",
    "blue",
    "grey",
    "yellow",
    "purple",
    "salmon2",
    "deepskyblue",
    "goldenrod2",
    "burlywood2",
    "gold1",
    "greenyellow",
    "darkseagreen",
    "dodgerblue1",
    "thistle2",
    "darkolivegreen3",
    "chocolate",
    "turquoise3",
    "steelblue3",
    "navy",
    "darkseagreen4",
    "blanchedalmond",
    "lightskyblue1",
    "aquamarine2",
    "lemonchiffon",
];

/// Pick a palette color from the annotated route text.
///
/// SHA-256 keeps the choice stable across runs, platforms and compiler
/// versions, so identical corpora render byte-identical recursion views.
pub fn route_color(route_text: &str) -> &'static str {
    let digest = Sha256::digest(route_text.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let hash = u64::from_be_bytes(prefix);
    PALETTE[(hash % PALETTE.len() as u64) as usize]
}
