//! Rendering of a finished page to the supported vector formats.

use crate::page::{Page, Path, PathStyle};
use crate::units::Px;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf, Ref};
use std::io::Write;
use svg::node::element::path::Data;

fn xy(point: &(Px, Px)) -> (f32, f32) {
    (*point.0, *point.1)
}

fn svg_path(path: &Path) -> Option<svg::node::element::Path> {
    let (first, rest) = path.points.split_first()?;
    let data = rest
        .iter()
        .fold(Data::new().move_to(xy(first)), |data, point| data.line_to(xy(point)))
        .close();

    Some(
        svg::node::element::Path::new()
            .set("fill", "none")
            .set("stroke", path.style.stroke.svg_paint())
            .set("stroke-width", *path.style.stroke_width)
            .set("d", data),
    )
}

/// Renders the page as an SVG Tiny 1.2 document the size of the page, with one
/// unfilled `<path>` per contour
pub(crate) fn render_svg(page: &Page) -> Result<Vec<u8>, std::io::Error> {
    let document = page.contents.iter().filter_map(svg_path).fold(
        svg::Document::new()
            .set("width", *page.config.width)
            .set("height", *page.config.height)
            .set("baseProfile", "tiny")
            .set("version", "1.2"),
        |document, path| document.add(path),
    );

    let mut rendered: Vec<u8> = Vec::default();
    svg::write(&mut rendered, &document)?;
    Ok(rendered)
}

/// Writes the stroking operators for every path. Page coordinates grow downwards, so
/// the whole stream is drawn under a transform flipping the y axis.
#[allow(clippy::write_with_newline)]
fn render_contents(page: &Page) -> Result<Vec<u8>, std::io::Error> {
    if page.contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();
    write!(&mut content, "q\n")?;
    write!(&mut content, "1 0 0 -1 0 {} cm\n", page.config.height)?;

    let mut current_style: Option<PathStyle> = None;
    for path in page.contents.iter() {
        let Some((first, rest)) = path.points.split_first() else {
            continue;
        };

        if current_style != Some(path.style) {
            current_style = Some(path.style);
            write_style(&mut content, path.style)?;
        }

        write!(&mut content, "{} {} m\n", first.0, first.1)?;
        for (x, y) in rest.iter() {
            write!(&mut content, "{x} {y} l\n")?;
        }
        write!(&mut content, "h S\n")?;
    }

    write!(&mut content, "Q\n")?;
    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn write_style(content: &mut Vec<u8>, style: PathStyle) -> Result<(), std::io::Error> {
    write!(content, "{}\n", style.stroke.pdf_stroke_operator())?;
    write!(content, "{} w\n", style.stroke_width)
}

/// Renders the page as a single page PDF. One PDF unit is one device unit, so the media
/// box matches the SVG output's size.
pub(crate) fn render_pdf(page: &Page) -> Result<Vec<u8>, std::io::Error> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let page_id = alloc.bump();
    let content_id = alloc.bump();

    let mut writer = Pdf::new();
    writer.catalog(catalog_id).pages(page_tree_id);
    writer.pages(page_tree_id).kids([page_id]).count(1);

    let mut pdf_page = writer.page(page_id);
    pdf_page.media_box(page.config.media_box().into());
    pdf_page.art_box(page.config.content_box().into());
    pdf_page.parent(page_tree_id);
    pdf_page.contents(content_id);
    pdf_page.finish();

    let rendered = render_contents(page)?;
    let compressed = compress_to_vec_zlib(
        &rendered,
        CompressionLevel::DefaultCompression as u8,
    );
    writer
        .stream(content_id, &compressed)
        .filter(Filter::FlateDecode);

    Ok(writer.finish())
}
