//! In-memory PDF builders for tests.

use std::fmt::Write;

use lopdf::{Dictionary, Object, Stream, dictionary};

/// Column width of [`ruled_table`] cells.
pub const CELL_WIDTH: f32 = 120.0;
/// Row height of [`ruled_table`] cells.
pub const CELL_HEIGHT: f32 = 20.0;

/// Builds a PDF with one page per content stream, all using Helvetica as `F1`.
pub fn pdf_with_pages(contents: &[&str]) -> Vec<u8> {
    build(contents, |doc| {
        doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        })
    })
}

/// Builds a PDF whose `F1` is a Type0 font with `Identity-H` encoding and a
/// ToUnicode map sending every two-byte code to the same code point, the
/// shape office suites emit. Pair with [`ruled_table_hex`].
pub fn identity_h_pdf_with_pages(contents: &[&str]) -> Vec<u8> {
    build(contents, |doc| {
        let to_unicode = Stream::new(
            dictionary! {},
            b"/CIDInit /ProcSet findresource begin\n\
              12 dict begin\n\
              begincmap\n\
              /CMapName /Adobe-Identity-UCS def\n\
              /CMapType 2 def\n\
              1 begincodespacerange\n\
              <0000> <FFFF>\n\
              endcodespacerange\n\
              1 beginbfrange\n\
              <0000> <00FF> <0000>\n\
              endbfrange\n\
              endcmap\n"
                .to_vec(),
        );
        let to_unicode_id = doc.add_object(Object::Stream(to_unicode));

        let descendant_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "CIDFontType2",
            "BaseFont" => "Calibri",
            "DW" => Object::Integer(500),
            "CIDToGIDMap" => "Identity",
            "CIDSystemInfo" => dictionary! {
                "Registry" => Object::string_literal("Adobe"),
                "Ordering" => Object::string_literal("Identity"),
                "Supplement" => Object::Integer(0),
            },
        });

        doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => "Calibri",
            "Encoding" => "Identity-H",
            "DescendantFonts" => vec![Object::Reference(descendant_id)],
            "ToUnicode" => Object::Reference(to_unicode_id),
        })
    })
}

fn build(contents: &[&str], font: impl FnOnce(&mut lopdf::Document) -> lopdf::ObjectId) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let font_id = font(&mut doc);

    let pages_id = doc.new_object_id();
    let mut kids = Vec::new();
    for content in contents {
        let stream = Stream::new(dictionary! {}, content.as_bytes().to_vec());
        let content_id = doc.add_object(stream);
        let resources: Dictionary = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        };
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize pdf");
    buf
}

/// Content stream drawing a fully ruled grid whose top-left corner is at
/// `(left, top)`, with each cell's text written inside it as a literal string.
pub fn ruled_table(left: f32, top: f32, rows: &[&[&str]]) -> String {
    ruled_grid(left, top, rows, |cell| format!("({cell})"))
}

/// [`ruled_table`] with cell text written as two-byte hex codes, for
/// [`identity_h_pdf_with_pages`].
pub fn ruled_table_hex(left: f32, top: f32, rows: &[&[&str]]) -> String {
    ruled_grid(left, top, rows, |cell| {
        let mut hex = String::from("<");
        for ch in cell.chars() {
            write!(hex, "{:04X}", u32::from(ch)).expect("write to string");
        }
        hex.push('>');
        hex
    })
}

fn ruled_grid(left: f32, top: f32, rows: &[&[&str]], show: impl Fn(&str) -> String) -> String {
    let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let right = left + columns as f32 * CELL_WIDTH;
    let bottom = top - rows.len() as f32 * CELL_HEIGHT;

    let mut out = String::from("0.5 w\n");
    for i in 0..=rows.len() {
        let y = top - i as f32 * CELL_HEIGHT;
        writeln!(out, "{left} {y} m {right} {y} l S").expect("write to string");
    }
    for j in 0..=columns {
        let x = left + j as f32 * CELL_WIDTH;
        writeln!(out, "{x} {bottom} m {x} {top} l S").expect("write to string");
    }

    out.push_str("BT /F1 10 Tf\n");
    for (i, row) in rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let x = left + j as f32 * CELL_WIDTH + 4.0;
            let y = top - (i + 1) as f32 * CELL_HEIGHT + 6.0;
            writeln!(out, "1 0 0 1 {x} {y} Tm {} Tj", show(cell)).expect("write to string");
        }
    }
    out.push_str("ET\n");
    out
}
