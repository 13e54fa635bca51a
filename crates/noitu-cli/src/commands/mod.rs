pub mod check;
pub mod normalize;
pub mod play;

use std::path::Path;

use noitu_core::Dictionary;
use tracing::warn;

/// Load the word list, falling back to the built-in list if it cannot be read.
fn load_dictionary(path: &Path) -> Dictionary {
    match Dictionary::from_path(path) {
        Ok(dict) => dict,
        Err(e) => {
            warn!(error = %e, "using built-in word list");
            Dictionary::fallback()
        }
    }
}
