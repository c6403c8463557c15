use std::path::PathBuf;

/// Edge lengths of the generated icons, smallest first.
pub const FAVICON_SIZES: [u32; 5] = [16, 32, 64, 128, 256];

pub const DEFAULT_APP_NAME: &str = "None";
pub const DEFAULT_MANIFEST_PATH: &str = "site.webmanifest";
pub const ICON_MIME_TYPE: &str = "image/png";

pub fn icon_file_name(size: u32) -> String {
    format!("favicon-{}.png", size)
}

/// Parameters of a single generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Written verbatim as the manifest's `name`.
    pub app_name: String,
    pub manifest_path: PathBuf,
    /// Directory receiving the PNG files.
    pub out_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app_name: DEFAULT_APP_NAME.into(),
            manifest_path: DEFAULT_MANIFEST_PATH.into(),
            out_dir: PathBuf::from("."),
        }
    }
}
