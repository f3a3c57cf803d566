use crate::content::{PageContext, font_resource_name};
use crate::error::RenderError;
use crate::writer::PdfWriter;
use faktura_layout::{LaidOutDocument, LogoImage};
use faktura_types::{FontWeight, MM_TO_PT};
use lopdf::{Object, Stream, dictionary};
use std::io::Cursor;

/// Serialize a laid-out document to PDF bytes.
///
/// Every page shares one resources dictionary: the two WinAnsi Type1
/// Helvetica faces and, when the document carries one, the logo XObject.
pub fn render_document(doc: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
    let mut writer = PdfWriter::new(Cursor::new(Vec::new()), "1.7")?;

    let font_dict = dictionary! {
        font_resource_name(FontWeight::Regular) => base_font("Helvetica"),
        font_resource_name(FontWeight::Bold) => base_font("Helvetica-Bold"),
    };
    let mut resources = dictionary! { "Font" => font_dict };

    let logo_name = doc.logo.as_ref().map(|logo| {
        let id = writer.buffer_object(Object::Stream(logo_xobject(logo)));
        resources.set("XObject", dictionary! { "Im1" => Object::Reference(id) });
        "Im1"
    });
    writer.set_resources(resources);

    let page_width = doc.geometry.page.width * MM_TO_PT;
    let page_height = doc.geometry.page.height * MM_TO_PT;

    for page in &doc.pages {
        let mut ctx = PageContext::new(doc.geometry.page.height, logo_name);
        for el in &page.elements {
            ctx.draw_element(el);
        }
        let content_id = writer.buffer_content_stream(ctx.finish())?;

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page_width.into(), page_height.into()],
            "Contents" => content_id,
            "Resources" => writer.resources_id,
        };
        let page_id = writer.buffer_object(page_dict.into());
        writer.add_page_id(page_id);
    }

    log::debug!("serializing {} page(s)", doc.pages.len());
    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

fn base_font(name: &str) -> Object {
    Object::Dictionary(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => name,
        "Encoding" => "WinAnsiEncoding",
    })
}

fn logo_xobject(logo: &LogoImage) -> Stream {
    let color_space = if logo.grayscale { "DeviceGray" } else { "DeviceRGB" };
    Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => logo.px_width as i64,
            "Height" => logo.px_height as i64,
            "ColorSpace" => color_space,
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        logo.data.clone(),
    )
}
