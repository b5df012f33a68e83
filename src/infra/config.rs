use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub images_dir: PathBuf,
    pub icon_size: (u32, u32),
    pub card_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("games.json"),
            images_dir: PathBuf::from("images"),
            icon_size: (220, 220),
            card_width: 400.0,
        }
    }
}

impl AppConfig {
    /// Consumes `--catalog <file>` and `--images <dir>` from `args`, leaving
    /// the remaining arguments in order.
    pub fn apply_overrides(&mut self, args: Vec<String>) -> Result<Vec<String>, String> {
        let mut rest = Vec::with_capacity(args.len());
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = iter.next().ok_or("missing value for --catalog")?;
                    self.catalog_path = PathBuf::from(value);
                }
                "--images" => {
                    let value = iter.next().ok_or("missing value for --images")?;
                    self.images_dir = PathBuf::from(value);
                }
                _ => rest.push(arg),
            }
        }
        Ok(rest)
    }
}
