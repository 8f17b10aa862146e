use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use plotters_backend::text_anchor::{HPos, VPos};
use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
    FontTransform,
};
use thiserror::Error;

use super::font::{self, BASE_FONT, CAP_HEIGHT, DESCENT};
use crate::color::to_unit_rgb;

/// Page points per backend pixel (72 pt per inch at 100 px per inch).
pub const PT_PER_PX: f64 = 0.72;

const FONT_RESOURCE: &str = "F1";

/// Bezier control distance for a quarter circle of radius 1.
const KAPPA: f64 = 0.552_284_8;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("encoding page content: {0}")]
    Encode(String),
    #[error("serializing document: {0}")]
    Serialize(String),
}

type DrawResult = Result<(), DrawingErrorKind<PdfError>>;

// ---------------------------------------------------------------------------
// PdfBackend – plotters drawing backend emitting a single PDF page
// ---------------------------------------------------------------------------

/// A `plotters` backend that records drawing calls as PDF content
/// operators and serializes a one-page document into `target` on
/// [`present`](DrawingBackend::present).
///
/// Coordinates are backend pixels with the origin at the top-left corner;
/// the page is `size * PT_PER_PX` points with the PDF origin bottom-left.
pub struct PdfBackend<'a> {
    target: &'a mut Vec<u8>,
    size: (u32, u32),
    operations: Vec<Operation>,
    saved: bool,
}

impl<'a> PdfBackend<'a> {
    pub fn new(target: &'a mut Vec<u8>, size: (u32, u32)) -> Self {
        Self {
            target,
            size,
            operations: Vec::new(),
            saved: false,
        }
    }

    /// Page dimensions in points.
    pub fn page_size(&self) -> (f64, f64) {
        (
            f64::from(self.size.0) * PT_PER_PX,
            f64::from(self.size.1) * PT_PER_PX,
        )
    }

    fn to_page(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (x * PT_PER_PX, (f64::from(self.size.1) - y) * PT_PER_PX)
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn push_point(&mut self, operator: &str, point: BackendCoord) {
        let (x, y) = self.to_page(pixel(point));
        self.push(operator, vec![real(x), real(y)]);
    }

    fn set_color(&mut self, operator: &str, color: BackendColor) {
        let [r, g, b] = to_unit_rgb(color.rgb);
        self.push(operator, vec![real(f64::from(r)), real(f64::from(g)), real(f64::from(b))]);
    }

    fn set_stroke<S: BackendStyle>(&mut self, style: &S) {
        self.set_color("RG", style.color());
        let width = f64::from(style.stroke_width()) * PT_PER_PX;
        self.push("w", vec![real(width)]);
    }

    /// Set up colour and width for the path that follows. Graphics state
    /// operators are not allowed inside a path, so this precedes the `m`.
    fn begin_path<S: BackendStyle>(&mut self, style: &S, fill: bool) {
        if fill {
            self.set_color("rg", style.color());
        } else {
            self.set_stroke(style);
        }
    }

    /// Fill (`f`) or stroke (`S`) the current path.
    fn end_path(&mut self, fill: bool) {
        self.push(if fill { "f" } else { "S" }, vec![]);
    }

    fn finish(&self) -> Result<Vec<u8>, PdfError> {
        let mut operations = vec![
            Operation::new("J", vec![Object::from(1)]),
            Operation::new("j", vec![Object::from(1)]),
        ];
        operations.extend(self.operations.iter().cloned());
        let content = Content { operations }
            .encode()
            .map_err(|e| PdfError::Encode(e.to_string()))?;

        let (width, height) = self.page_size();
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => BASE_FONT,
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_RESOURCE => font_id,
            },
        });
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![Object::from(0), Object::from(0), real(width), real(height)],
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::from(page_id)],
            "Count" => 1,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| PdfError::Serialize(e.to_string()))?;
        Ok(bytes)
    }
}

fn pixel((x, y): BackendCoord) -> (f64, f64) {
    (f64::from(x), f64::from(y))
}

fn real(v: f64) -> Object {
    Object::from(v as f32)
}

fn invisible(color: BackendColor) -> bool {
    color.alpha == 0.0
}

impl DrawingBackend for PdfBackend<'_> {
    type ErrorType = PdfError;

    fn get_size(&self) -> (u32, u32) {
        self.size
    }

    fn ensure_prepared(&mut self) -> DrawResult {
        if self.saved {
            self.operations.clear();
            self.saved = false;
        }
        Ok(())
    }

    fn present(&mut self) -> DrawResult {
        if !self.saved {
            *self.target = self.finish().map_err(DrawingErrorKind::DrawingError)?;
            self.saved = true;
        }
        Ok(())
    }

    fn draw_pixel(&mut self, point: BackendCoord, color: BackendColor) -> DrawResult {
        if invisible(color) {
            return Ok(());
        }
        let (x, y) = self.to_page((f64::from(point.0), f64::from(point.1 + 1)));
        self.set_color("rg", color);
        self.push("re", vec![real(x), real(y), real(PT_PER_PX), real(PT_PER_PX)]);
        self.push("f", vec![]);
        Ok(())
    }

    fn draw_line<S: BackendStyle>(
        &mut self,
        from: BackendCoord,
        to: BackendCoord,
        style: &S,
    ) -> DrawResult {
        if invisible(style.color()) {
            return Ok(());
        }
        self.begin_path(style, false);
        self.push_point("m", from);
        self.push_point("l", to);
        self.end_path(false);
        Ok(())
    }

    fn draw_rect<S: BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> DrawResult {
        if invisible(style.color()) {
            return Ok(());
        }
        let (left, top) = self.to_page(pixel(upper_left));
        let (right, bottom) = self.to_page(pixel(bottom_right));
        self.begin_path(style, fill);
        self.push(
            "re",
            vec![real(left), real(bottom), real(right - left), real(top - bottom)],
        );
        self.end_path(fill);
        Ok(())
    }

    fn draw_path<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        path: I,
        style: &S,
    ) -> DrawResult {
        if invisible(style.color()) {
            return Ok(());
        }
        let points: Vec<BackendCoord> = path.into_iter().collect();
        let [first, rest @ ..] = points.as_slice() else {
            return Ok(());
        };
        if rest.is_empty() {
            return Ok(());
        }
        self.begin_path(style, false);
        self.push_point("m", *first);
        for &point in rest {
            self.push_point("l", point);
        }
        self.end_path(false);
        Ok(())
    }

    fn draw_circle<S: BackendStyle>(
        &mut self,
        center: BackendCoord,
        radius: u32,
        style: &S,
        fill: bool,
    ) -> DrawResult {
        if invisible(style.color()) {
            return Ok(());
        }
        let (cx, cy) = self.to_page(pixel(center));
        let r = f64::from(radius) * PT_PER_PX;
        let k = KAPPA * r;
        self.begin_path(style, fill);
        self.push("m", vec![real(cx + r), real(cy)]);
        let quarters = [
            [cx + r, cy + k, cx + k, cy + r, cx, cy + r],
            [cx - k, cy + r, cx - r, cy + k, cx - r, cy],
            [cx - r, cy - k, cx - k, cy - r, cx, cy - r],
            [cx + k, cy - r, cx + r, cy - k, cx + r, cy],
        ];
        for quarter in quarters {
            self.push("c", quarter.iter().map(|&v| real(v)).collect());
        }
        self.push("h", vec![]);
        self.end_path(fill);
        Ok(())
    }

    fn fill_polygon<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        vert: I,
        style: &S,
    ) -> DrawResult {
        if invisible(style.color()) {
            return Ok(());
        }
        let mut points = vert.into_iter();
        let Some(first) = points.next() else {
            return Ok(());
        };
        self.begin_path(style, true);
        self.push_point("m", first);
        for point in points {
            self.push_point("l", point);
        }
        self.push("h", vec![]);
        self.end_path(true);
        Ok(())
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> DrawResult {
        let color = style.color();
        if text.is_empty() || invisible(color) {
            return Ok(());
        }
        let size = style.size();
        let width = font::text_width(text, size);
        let anchor = style.anchor();

        // Offsets from `pos` to the start of the baseline, measured along
        // the text direction and towards the glyph bottoms.
        let along = match anchor.h_pos {
            HPos::Left => 0.0,
            HPos::Center => -width / 2.0,
            HPos::Right => -width,
        };
        let below = match anchor.v_pos {
            VPos::Top => size * CAP_HEIGHT,
            VPos::Center => size * CAP_HEIGHT / 2.0,
            VPos::Bottom => -size * DESCENT,
        };
        let (dir, down) = match style.transform() {
            FontTransform::None => ((1.0, 0.0), (0.0, 1.0)),
            FontTransform::Rotate90 => ((0.0, 1.0), (-1.0, 0.0)),
            FontTransform::Rotate180 => ((-1.0, 0.0), (0.0, -1.0)),
            FontTransform::Rotate270 => ((0.0, -1.0), (1.0, 0.0)),
        };
        let (px, py) = pixel(pos);
        let origin = (
            px + along * dir.0 + below * down.0,
            py + along * dir.1 + below * down.1,
        );
        let (tx, ty) = self.to_page(origin);
        // page y points up, so the text direction flips vertically
        let (cos, sin) = (dir.0, -dir.1);

        self.set_color("rg", color);
        self.push("BT", vec![]);
        self.push("Tf", vec![Object::from(FONT_RESOURCE), real(size * PT_PER_PX)]);
        self.push(
            "Tm",
            vec![real(cos), real(sin), real(-sin), real(cos), real(tx), real(ty)],
        );
        self.push(
            "Tj",
            vec![Object::String(font::encode(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> Result<(u32, u32), DrawingErrorKind<PdfError>> {
        let size = style.size();
        Ok((
            font::text_width(text, size).ceil() as u32,
            size.ceil() as u32,
        ))
    }
}

impl Drop for PdfBackend<'_> {
    fn drop(&mut self) {
        if !self.saved {
            // drawing errors are already reported by the caller
            let _ = self.present();
        }
    }
}

#[cfg(test)]
mod tests {
    use lopdf::content::Content;
    use lopdf::{Document, Object};
    use plotters::style::text_anchor::{HPos, Pos, VPos};
    use plotters::style::{Color, FontTransform, IntoFont, TextStyle, BLUE, RED, TRANSPARENT};

    use super::*;

    fn number(obj: &Object) -> f64 {
        match obj {
            Object::Integer(i) => *i as f64,
            Object::Real(r) => f64::from(*r),
            other => panic!("not a number: {other:?}"),
        }
    }

    fn page_operations(bytes: &[u8]) -> Vec<Operation> {
        let doc = Document::load_mem(bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);
        let page_id = *pages.values().next().unwrap();
        let data = doc.get_page_content(page_id).unwrap();
        Content::decode(&data).unwrap().operations
    }

    fn operators(ops: &[Operation]) -> Vec<&str> {
        ops.iter().map(|op| op.operator.as_str()).collect()
    }

    #[test]
    fn present_writes_single_page_pdf() {
        let mut buf = Vec::new();
        {
            let mut backend = PdfBackend::new(&mut buf, (640, 480));
            assert_eq!(backend.page_size(), (640.0 * 0.72, 480.0 * 0.72));
            backend.present().unwrap();
        }
        assert!(buf.starts_with(b"%PDF-1.5"));
        let doc = Document::load_mem(&buf).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn line_maps_to_flipped_page_coordinates() {
        let mut buf = Vec::new();
        {
            let mut backend = PdfBackend::new(&mut buf, (100, 100));
            backend
                .draw_line((0, 0), (100, 50), &Color::stroke_width(&RED, 2))
                .unwrap();
            backend.present().unwrap();
        }
        let ops = page_operations(&buf);
        let moveto = ops.iter().find(|op| op.operator == "m").unwrap();
        assert_eq!(number(&moveto.operands[0]), 0.0);
        assert!((number(&moveto.operands[1]) - 72.0).abs() < 1e-4);
        let lineto = ops.iter().find(|op| op.operator == "l").unwrap();
        assert!((number(&lineto.operands[0]) - 72.0).abs() < 1e-4);
        assert!((number(&lineto.operands[1]) - 36.0).abs() < 1e-4);

        let stroke = ops.iter().find(|op| op.operator == "RG").unwrap();
        let rgb: Vec<f64> = stroke.operands.iter().map(number).collect();
        assert_eq!(rgb, vec![1.0, 0.0, 0.0]);
        let width = ops.iter().find(|op| op.operator == "w").unwrap();
        assert!((number(&width.operands[0]) - 1.44).abs() < 1e-4);
        assert!(operators(&ops).contains(&"S"));
    }

    #[test]
    fn transparent_shapes_are_skipped() {
        let mut buf = Vec::new();
        {
            let mut backend = PdfBackend::new(&mut buf, (100, 100));
            backend
                .draw_line((0, 0), (10, 10), &Color::stroke_width(&TRANSPARENT, 1))
                .unwrap();
            backend
                .draw_rect((0, 0), (10, 10), &TRANSPARENT.filled(), true)
                .unwrap();
            backend.present().unwrap();
        }
        let ops = page_operations(&buf);
        assert!(!operators(&ops).contains(&"S"));
        assert!(!operators(&ops).contains(&"re"));
    }

    #[test]
    fn filled_rect_and_polygon_use_fill_colour() {
        let mut buf = Vec::new();
        {
            let mut backend = PdfBackend::new(&mut buf, (100, 100));
            backend
                .draw_rect((10, 10), (20, 30), &BLUE.filled(), true)
                .unwrap();
            backend
                .fill_polygon(vec![(0, 0), (10, 0), (5, 5)], &BLUE.filled())
                .unwrap();
            backend
                .draw_circle((50, 50), 4, &RED.filled(), false)
                .unwrap();
            backend.present().unwrap();
        }
        let ops = page_operations(&buf);
        let rect = ops.iter().find(|op| op.operator == "re").unwrap();
        let dims: Vec<f64> = rect.operands.iter().map(number).collect();
        assert!((dims[2] - 7.2).abs() < 1e-4);
        assert!((dims[3] - 14.4).abs() < 1e-4);
        let fills = ops.iter().filter(|op| op.operator == "f").count();
        assert_eq!(fills, 2);
        assert_eq!(ops.iter().filter(|op| op.operator == "c").count(), 4);
    }

    #[test]
    fn single_point_path_draws_nothing() {
        let mut buf = Vec::new();
        {
            let mut backend = PdfBackend::new(&mut buf, (100, 100));
            backend.draw_path(vec![(5, 5)], &Color::stroke_width(&RED, 1)).unwrap();
            backend.present().unwrap();
        }
        let ops = page_operations(&buf);
        assert!(!operators(&ops).contains(&"m"));
    }

    #[test]
    fn text_is_positioned_by_anchor() {
        let mut buf = Vec::new();
        {
            let mut backend = PdfBackend::new(&mut buf, (100, 100));
            let style = TextStyle::from(("sans-serif", 10.0).into_font())
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            backend.draw_text("Actual", &style, (50, 50)).unwrap();
            backend.present().unwrap();
        }
        let ops = page_operations(&buf);
        let show = ops.iter().find(|op| op.operator == "Tj").unwrap();
        assert!(matches!(&show.operands[0], Object::String(s, _) if s == b"Actual"));

        let matrix = ops.iter().find(|op| op.operator == "Tm").unwrap();
        let m: Vec<f64> = matrix.operands.iter().map(number).collect();
        let width = font::text_width("Actual", 10.0);
        assert_eq!(&m[..4], &[1.0, 0.0, 0.0, 1.0]);
        assert!((m[4] - (50.0 - width / 2.0) * PT_PER_PX).abs() < 1e-2);
        assert!((m[5] - (50.0 + 10.0 * DESCENT) * PT_PER_PX).abs() < 1e-2);

        let font = ops.iter().find(|op| op.operator == "Tf").unwrap();
        assert!((number(&font.operands[1]) - 7.2).abs() < 1e-4);
    }

    #[test]
    fn rotated_text_reads_upwards() {
        let mut buf = Vec::new();
        {
            let mut backend = PdfBackend::new(&mut buf, (100, 100));
            let style = TextStyle::from(("sans-serif", 10.0).into_font())
                .transform(FontTransform::Rotate270);
            backend.draw_text("y", &style, (20, 80)).unwrap();
            backend.present().unwrap();
        }
        let ops = page_operations(&buf);
        let matrix = ops.iter().find(|op| op.operator == "Tm").unwrap();
        let m: Vec<f64> = matrix.operands.iter().map(number).collect();
        assert_eq!(&m[..4], &[0.0, 1.0, -1.0, 0.0]);
    }

    #[test]
    fn text_size_estimate_uses_font_metrics() {
        let mut buf = Vec::new();
        let backend = PdfBackend::new(&mut buf, (100, 100));
        let style = TextStyle::from(("sans-serif", 10.0).into_font());
        let (w, h) = backend.estimate_text_size("100", &style).unwrap();
        assert_eq!((w, h), (17, 10));
    }
}
