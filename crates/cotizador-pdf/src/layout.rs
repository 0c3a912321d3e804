// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Two-page quotation layout. Coordinates are millimetres from the top-left
//! corner of an A4 page, converted to printpdf's bottom-up axis at draw time.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cotizador_app::{QuotationForm, Totals, amount_to_words, display_or_na, format_mxn};
use printpdf::*;

use crate::Logos;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

const TITLE_FONT_SIZE: f32 = 20.0;
const BODY_FONT_SIZE: f32 = 10.0;
const TERMS_FONT_SIZE: f32 = 12.0;

const LOGO_WIDTH_MM: f32 = 50.0;
const TABLE_LEFT_MM: f32 = 10.0;
const TABLE_RIGHT_MM: f32 = 200.0;
const TABLE_ROW_HEIGHT_MM: f32 = 8.0;
const TABLE_START_Y_MM: f32 = 110.0;

/// Rough advance width of builtin Helvetica, for centering fixed strings.
const HELVETICA_EM: f32 = 0.55;

/// Render the quotation and save it as `Cotizacion_<MODEL>.pdf` in `out_dir`.
/// Always two pages. No overwrite protection: an existing file for the same
/// model is replaced.
pub fn render_quote(
    form: &QuotationForm,
    folio: &str,
    totals: &Totals,
    logos: Option<&Logos>,
    out_dir: &Path,
) -> Result<PathBuf> {
    let (doc, page1, layer1) = PdfDocument::new(
        format!("Cotización {folio}"),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("add Helvetica font")?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("add Helvetica bold font")?;

    let layer = doc.get_page(page1).get_layer(layer1);
    draw_page_one(&layer, &font, &font_bold, form, folio, totals, logos);

    let (page2, layer2) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let layer = doc.get_page(page2).get_layer(layer2);
    draw_terms_page(&layer, &font, &font_bold, form.resolved_delivery());

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;
    let path = out_dir.join(format!("Cotizacion_{}.pdf", form.model.as_str()));
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
    doc.save(&mut BufWriter::new(file))
        .with_context(|| format!("save {}", path.display()))?;
    tracing::debug!(target: "cotizador", path = %path.display(), "quotation PDF saved");
    Ok(path)
}

fn draw_page_one(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    font_bold: &IndirectFontRef,
    form: &QuotationForm,
    folio: &str,
    totals: &Totals,
    logos: Option<&Logos>,
) {
    if let Some(logos) = logos {
        embed_logo(layer, &logos.primary, 10.0, 10.0);
        embed_logo(layer, &logos.secondary, 150.0, 10.0);
    }

    text_centered(layer, font, "COTIZACIÓN", TITLE_FONT_SIZE, 20.0);

    text(layer, font, &format!("Folio: {folio}"), 150.0, 35.0);
    text(layer, font, &format!("Fecha: {}", form.quote_date), 150.0, 40.0);

    text(layer, font_bold, "Información del Cliente", 10.0, 50.0);
    text(layer, font, &format!("Nombre: {}", form.client), 10.0, 55.0);

    text(layer, font_bold, "Datos del Vehículo", 10.0, 70.0);
    text(layer, font, &format!("Modelo: {}", form.model.as_str()), 10.0, 75.0);
    text(
        layer,
        font,
        &format!("Versión: {}", form.version_display()),
        10.0,
        80.0,
    );
    text(
        layer,
        font,
        &format!("Año: {}", display_or_na(&form.year)),
        10.0,
        85.0,
    );
    text(
        layer,
        font,
        &format!(
            "Dimensiones: Largo: {} m, Ancho: {} m, Altura: {} m",
            display_or_na(&form.length_m),
            display_or_na(&form.width_m),
            display_or_na(&form.height_m),
        ),
        10.0,
        90.0,
    );
    text(
        layer,
        font,
        &format!("PBV: {} kg", display_or_na(&form.gross_weight_kg)),
        10.0,
        95.0,
    );
    text(
        layer,
        font,
        &format!(
            "Capacidad ({}): {}",
            form.capacity_kind_label(),
            display_or_na(&form.capacity_value),
        ),
        10.0,
        100.0,
    );
    text(
        layer,
        font,
        &format!("Garantía: {}", form.warranty.label()),
        10.0,
        105.0,
    );

    let table_end = draw_pricing_table(layer, font, font_bold, totals);

    text(
        layer,
        font,
        &format!("Total en letras: {}", amount_to_words(totals.total)),
        10.0,
        table_end + 10.0,
    );
    text(
        layer,
        font,
        &format!("Fecha de Entrega: {}", form.resolved_delivery()),
        10.0,
        table_end + 20.0,
    );
}

/// Unit/discount/total table. Returns the table's final vertical position
/// (mm from top) so the caller can stack the trailing lines below it.
fn draw_pricing_table(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    font_bold: &IndirectFontRef,
    totals: &Totals,
) -> f32 {
    const COLUMNS_MM: [f32; 4] = [12.0, 82.0, 132.0, 162.0];
    let header = ["Descripción", "Precio unitario", "Cantidad", "Importe"];

    let price = format_mxn(totals.price);
    let discount = format_mxn(totals.discount);
    let total = format_mxn(totals.total);
    let rows: [[&str; 4]; 3] = [
        ["Unidad", &price, "1", &price],
        ["Descuento", &discount, "-", &discount],
        ["Total", "", "", &total],
    ];

    rule(layer, TABLE_START_Y_MM);
    for (column, label) in COLUMNS_MM.into_iter().zip(header) {
        text(layer, font_bold, label, column, TABLE_START_Y_MM + 6.0);
    }
    rule(layer, TABLE_START_Y_MM + TABLE_ROW_HEIGHT_MM);

    for (index, row) in rows.iter().enumerate() {
        let row_top = TABLE_START_Y_MM + TABLE_ROW_HEIGHT_MM * (index as f32 + 1.0);
        for (column, value) in COLUMNS_MM.into_iter().zip(*row) {
            text(layer, font, value, column, row_top + 6.0);
        }
    }

    let table_end = TABLE_START_Y_MM + TABLE_ROW_HEIGHT_MM * 4.0;
    rule(layer, table_end);
    table_end
}

fn draw_terms_page(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    font_bold: &IndirectFontRef,
    delivery: &str,
) {
    terms_block(layer, font, font_bold, "Pago:", "48 horas antes de la entrega.", 20.0);
    terms_block(
        layer,
        font,
        font_bold,
        "Importante:",
        "Mientras no sea confirmado formalmente su pedido (OC) los precios y tiempos de \
         entrega quedan sujetos a variación.",
        40.0,
    );
    terms_block(
        layer,
        font,
        font_bold,
        "Entrega Unidad y Equipo Aliado:",
        "Se realizará 48 horas después del pago total del proyecto. La unidad se entrega \
         en los patios de Foton León o rodando como límite a la redonda hasta 50 km. \
         Fuera de esta área se cotiza traslado.",
        60.0,
    );
    terms_block(
        layer,
        font,
        font_bold,
        "Adaptaciones, Versiones, Customización:",
        "Cualquier adaptación que requiera la unidad y antes de entregarla a la carrocera, \
         la unidad deberá ser liquidada en su totalidad.",
        90.0,
    );

    text_sized(layer, font_bold, "FECHA DE ENTREGA:", TERMS_FONT_SIZE, 10.0, 120.0);
    text_sized(layer, font, delivery, TERMS_FONT_SIZE, 55.0, 120.0);
}

/// Bold label at the left margin with wrapped plain text beside it.
fn terms_block(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    font_bold: &IndirectFontRef,
    label: &str,
    body: &str,
    top_mm: f32,
) {
    text_sized(layer, font_bold, label, TERMS_FONT_SIZE, 10.0, top_mm);
    for (index, line) in wrap_words(body, 72).iter().enumerate() {
        text_sized(
            layer,
            font,
            line,
            TERMS_FONT_SIZE,
            55.0,
            top_mm + index as f32 * 5.0,
        );
    }
}

fn text(layer: &PdfLayerReference, font: &IndirectFontRef, value: &str, x_mm: f32, top_mm: f32) {
    text_sized(layer, font, value, BODY_FONT_SIZE, x_mm, top_mm);
}

fn text_sized(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    value: &str,
    size: f32,
    x_mm: f32,
    top_mm: f32,
) {
    layer.use_text(value, size, Mm(x_mm), Mm(PAGE_HEIGHT_MM - top_mm), font);
}

fn text_centered(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    value: &str,
    size: f32,
    top_mm: f32,
) {
    let width_mm = value.chars().count() as f32 * size * HELVETICA_EM * 25.4 / 72.0;
    let x_mm = (PAGE_WIDTH_MM - width_mm) / 2.0;
    text_sized(layer, font, value, size, x_mm, top_mm);
}

fn rule(layer: &PdfLayerReference, top_mm: f32) {
    let y = Mm(PAGE_HEIGHT_MM - top_mm);
    let line = Line {
        points: vec![
            (Point::new(Mm(TABLE_LEFT_MM), y), false),
            (Point::new(Mm(TABLE_RIGHT_MM), y), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

fn embed_logo(layer: &PdfLayerReference, logo: &crate::Logo, x_mm: f32, top_mm: f32) {
    let image = Image::from(ImageXObject {
        width: Px(logo.width as usize),
        height: Px(logo.height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: false,
        image_data: logo.pixels.clone(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    // Scale to the fixed header width; height follows the aspect ratio.
    let dpi = logo.width as f32 / (LOGO_WIDTH_MM / 25.4);
    let rendered_height_mm = logo.height as f32 * 25.4 / dpi;
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x_mm)),
            translate_y: Some(Mm(PAGE_HEIGHT_MM - top_mm - rendered_height_mm)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}

fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
