//! The fixed set of generated files this tool knows about.
//!
//! Everything here is a process-wide constant: the copy whitelist, the
//! import patches that the generator fails to emit, and the index template
//! that defines the package's export surface.

/// Name of the generated sub-directory inside the source root.
pub const PRIMITIVES_DIR: &str = "primitives";

/// Files copied from `<source>/primitives/`, in copy order.
pub const REQUIRED_FILES: [&str; 4] = [
    "Chain.ts",
    "SwapProvider.ts",
    "swap/Approval.ts",
    "swap/Mod.ts",
];

/// Import statements inserted into copied files that reference types from
/// sibling files without importing them.
pub const IMPORT_PATCHES: [(&str, &str); 2] = [
    (
        "swap/Approval.ts",
        "import { SwapProvider } from \"../SwapProvider\";\n\n",
    ),
    ("swap/Mod.ts", "import { QuoteAsset } from \"./Approval\";\n\n"),
];

/// Output name of the index file.
pub const INDEX_FILE: &str = "index.ts";

/// Index template, written verbatim to `<output>/index.ts`.
pub const INDEX_TEMPLATE: &str = include_str!("../templates/primitives_index.ts");

/// Output path of the generated swapper error type, relative to the output root.
pub const SWAPPER_ERROR_OUTPUT: &str = "swap/Error.ts";

/// Location of the swapper error definitions relative to the directory that
/// contains this repository.
pub const SWAPPER_ERROR_SOURCE: &str = "core/crates/swapper/src/error.rs";

/// Look up the import patch registered for a required file, if any.
pub fn import_patch_for(relative_path: &str) -> Option<&'static str> {
    IMPORT_PATCHES
        .iter()
        .find(|(path, _)| *path == relative_path)
        .map(|(_, patch)| *patch)
}
