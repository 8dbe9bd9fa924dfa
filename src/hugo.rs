use anyhow::Result;

use crate::structure::Section;

mod content;
pub use content::{format_page, Content, ContentWriter, CONTENT_DIR};

/// write every page of every section under the given content root,
/// in table order; the first I/O error aborts the run
pub fn generate<P>(root: P, sections: &[Section]) -> Result<()>
where
    P: Into<std::path::PathBuf>,
{
    let content = Content::new(root)?;

    for section in sections {
        let writer = content.section_writer(section.id)?;

        for (file_name, page) in section.pages {
            writer.write_page(file_name, page)?;
        }
    }

    Ok(())
}
