//! Shared fixtures for `typeshare_prep` integration tests.

#![allow(unreachable_pub)]
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Generated-file header as typeshare writes it.
pub const HEADER: &str = "/*\n Generated by typeshare 1.13.2\n*/\n\n";

/// Contents of a well-formed primitives tree, keyed by relative path.
pub fn generated_files() -> Vec<(&'static str, String)> {
    vec![
        (
            "Chain.ts",
            format!("{HEADER}export enum Chain {{\n\tBitcoin = \"bitcoin\",\n\tEthereum = \"ethereum\",\n}}\n"),
        ),
        (
            "SwapProvider.ts",
            format!("{HEADER}export enum SwapProvider {{\n\tUniswapV3 = \"uniswap_v3\",\n}}\n"),
        ),
        (
            "swap/Approval.ts",
            format!(
                "{HEADER}export interface QuoteAsset {{\n\tid: string;\n}}\n\nexport interface SwapQuoteData {{\n\tprovider: SwapProvider;\n}}\n"
            ),
        ),
        (
            "swap/Mod.ts",
            format!("{HEADER}export interface ProxyQuoteRequest {{\n\tfrom_asset: QuoteAsset;\n}}\n"),
        ),
    ]
}

/// Write a typeshare output root under `dir` and return its path.
///
/// Files named in `skip` are left out.
pub fn source_tree(dir: &Path, skip: &[&str]) -> PathBuf {
    let root = dir.join("generated");
    for (rel, text) in generated_files() {
        if skip.contains(&rel) {
            continue;
        }
        let path = root.join("primitives").join(rel);
        fs::create_dir_all(path.parent().unwrap()).expect("create fixture dir");
        fs::write(path, text).expect("write fixture file");
    }
    fs::create_dir_all(root.join("primitives")).expect("create primitives dir");
    root
}

/// Read every file under `root` into a map keyed by `/`-separated relative path.
pub fn read_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .map(|e| e.expect("walk output tree"))
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            (rel, fs::read(e.path()).expect("read output file"))
        })
        .collect()
}

/// A stand-in for the typeshare CLI that records its arguments to
/// `<dir>/typeshare-args.txt` and writes a small file to `--output-file`.
#[cfg(unix)]
pub fn fake_typeshare(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-typeshare");
    let log = dir.join("typeshare-args.txt");
    let body = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nfor arg in \"$@\"; do\n  case \"$arg\" in\n    --output-file=*) printf 'export type SwapperError = {{ type: \"NoQuoteAvailable\" }};\\n' > \"${{arg#--output-file=}}\" ;;\n  esac\ndone\n",
        log.display()
    );
    fs::write(&script, body).expect("write fake typeshare");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod fake typeshare");
    script
}
