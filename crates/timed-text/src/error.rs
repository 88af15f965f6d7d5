use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimedTextError>;

#[derive(Error, Debug)]
pub enum TimedTextError {
	#[error("Manifest syntax error: {0}")]
	ManifestSyntax(#[from] quick_xml::Error),

	#[error("No chapter event stream found in manifest")]
	MissingChapterStream,
}
