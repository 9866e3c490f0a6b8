use std::path::PathBuf;

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("glint")
}

/// Where the board keeps its durable data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoardConfig {
    pub data_dir: PathBuf,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl BoardConfig {
    /// Ensure the data directory exists.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)
    }
}
