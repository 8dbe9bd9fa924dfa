use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::structure::Page;

/// where the generated Hugo content lives, relative to the invocation directory
pub const CONTENT_DIR: &str = "content";

/// serialize one page: TOML front matter fenced by `+++`, a blank line,
/// then the body with a single trailing newline.
///
/// The title goes between the quotes verbatim, no escaping, so a title
/// containing a double quote corrupts the front matter.
pub fn format_page(page: &Page) -> String {
    format!(
        "+++\ntitle = \"{}\"\nweight = {}\n+++\n\n{}\n",
        page.title, page.weight, page.body
    )
}

/// the output content root
#[derive(Debug)]
pub struct Content {
    root: PathBuf,
}

impl Content {
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        fs::create_dir_all(&root).context(format!("mkdir \"{}\"", root.display()))?;

        Ok(Content { root })
    }

    pub fn section_writer(&self, section: &str) -> Result<ContentWriter> {
        ContentWriter::new(&self.root, section)
    }
}

/// writes the pages of a single section
#[derive(Debug)]
pub struct ContentWriter {
    section_dir: PathBuf,
}

impl ContentWriter {
    fn new(content_root: &Path, section: &str) -> Result<Self> {
        let section_dir = content_root.join(section);

        fs::create_dir_all(&section_dir).context(format!("mkdir \"{}\"", section_dir.display()))?;

        Ok(ContentWriter { section_dir })
    }

    /// create or truncate the page file, returning its path;
    /// the file handle is released before returning
    pub fn write_page(&self, file_name: &str, page: &Page) -> Result<PathBuf> {
        let path = self.section_dir.join(file_name);

        let mut f = File::create(&path).context(format!("create \"{}\"", path.display()))?;
        f.write_all(format_page(page).as_bytes())
            .context(format!("write \"{}\"", path.display()))?;

        Ok(path)
    }
}
