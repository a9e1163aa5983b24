use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

const SHEET_EXTENSIONS: &[&str] = &["chords", "json"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("songs.rs");
    let library_dir = Path::new(&manifest_dir).join("library");

    let mut code = String::new();
    code.push_str("/// Embedded song sheets, keyed by path relative to `library/`\n");
    code.push_str("pub static SONGS: &[(&str, &str)] = &[\n");

    if library_dir.exists() {
        for entry in WalkDir::new(&library_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map_or(false, |ext| SHEET_EXTENSIONS.contains(&ext))
            })
        {
            let path = entry.path();
            let relative_path = path.strip_prefix(&library_dir).unwrap();
            let name = relative_path
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            code.push_str(&format!(
                "    ({:?}, include_str!({:?})),\n",
                name,
                path.to_string_lossy()
            ));
        }
    }

    code.push_str("];\n");

    fs::write(&dest_path, code).unwrap();

    println!("cargo:rerun-if-changed=library");
}
