pub mod svg;

pub use svg::{render_svg, RenderOptions, SVG_FILE_NAME, SVG_MIME_TYPE};
