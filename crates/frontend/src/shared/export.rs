//! Excel (.xlsx) export
//!
//! The workbook is built in the browser as an OOXML package: a few XML parts
//! packed with `zip`, then downloaded through a Blob URL.

use std::io::{Cursor, Write};

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Cell value
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Number(value as f64)
    }
}

/// Rows that can be written to an Excel sheet
pub trait ExcelExportable {
    /// Column headers, in output order
    fn headers() -> Vec<&'static str>;

    /// One sheet row; same length as `headers()`
    fn to_row(&self) -> Vec<CellValue>;
}

/// Builds a single-sheet .xlsx and returns the package bytes.
pub fn build_workbook<T: ExcelExportable>(data: &[T], sheet_name: &str) -> Result<Vec<u8>, String> {
    let sheet_name = sanitize_sheet_name(sheet_name);

    let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(data.len() + 1);
    rows.push(T::headers().into_iter().map(CellValue::from).collect());
    rows.extend(data.iter().map(ExcelExportable::to_row));

    let parts = [
        ("[Content_Types].xml", content_types_xml()),
        ("_rels/.rels", root_rels_xml()),
        ("xl/workbook.xml", workbook_xml(&sheet_name)),
        ("xl/_rels/workbook.xml.rels", workbook_rels_xml()),
        ("xl/styles.xml", styles_xml()),
        ("xl/worksheets/sheet1.xml", sheet_xml(&rows)),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, content) in parts {
        zip.start_file(name, options)
            .map_err(|e| format!("Failed to start {}: {}", name, e))?;
        zip.write_all(content.as_bytes())
            .map_err(|e| format!("Failed to write {}: {}", name, e))?;
    }
    let cursor = zip
        .finish()
        .map_err(|e| format!("Failed to finish workbook: {}", e))?;

    Ok(cursor.into_inner())
}

/// Builds the workbook and starts the download
pub fn export_to_excel<T: ExcelExportable>(
    data: &[T],
    sheet_name: &str,
    filename: &str,
) -> Result<(), String> {
    let bytes = build_workbook(data, sheet_name)?;
    let blob = create_xlsx_blob(&bytes)?;
    download_blob(&blob, filename)?;
    log::info!("Exported {} rows to {}", data.len(), filename);
    Ok(())
}

/// Column letters: 0 -> A, 25 -> Z, 26 -> AA
pub fn column_name(index: usize) -> String {
    let mut n = index + 1;
    let mut name = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

/// Excel caps sheet names at 31 chars and forbids `[]:*?/\`
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(31)
        .collect();
    if cleaned.trim().is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // Control characters other than tab/newline are invalid in XML 1.0
            c if (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r') => {}
            c => out.push(c),
        }
    }
    out
}

fn sheet_xml(rows: &[Vec<CellValue>]) -> String {
    let mut xml = String::new();
    xml.push_str(XML_HEADER);
    xml.push_str(&format!(r#"<worksheet xmlns="{}">"#, NS_MAIN));
    xml.push_str(r#"<sheetViews><sheetView rightToLeft="1" workbookViewId="0"/></sheetViews>"#);
    xml.push_str("<sheetData>");

    for (r, row) in rows.iter().enumerate() {
        let row_number = r + 1;
        // First row holds the headers, bold (style 1)
        let style = if r == 0 { r#" s="1""# } else { "" };
        xml.push_str(&format!(r#"<row r="{}">"#, row_number));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_name(c), row_number);
            match cell {
                CellValue::Text(text) => xml.push_str(&format!(
                    r#"<c r="{}" t="inlineStr"{}><is><t xml:space="preserve">{}</t></is></c>"#,
                    reference,
                    style,
                    escape_xml(text)
                )),
                CellValue::Number(value) => {
                    let value = if value.is_finite() { *value } else { 0.0 };
                    xml.push_str(&format!(r#"<c r="{}"{}><v>{}</v></c>"#, reference, style, value));
                }
            }
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

fn content_types_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
            r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
            "</Types>"
        ),
        XML_HEADER
    )
}

fn root_rels_xml() -> String {
    format!(
        r#"{}<Relationships xmlns="{}"><Relationship Id="rId1" Type="{}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#,
        XML_HEADER, NS_PKG_REL, NS_REL
    )
}

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        r#"{}<workbook xmlns="{}" xmlns:r="{}"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        XML_HEADER,
        NS_MAIN,
        NS_REL,
        escape_xml(sheet_name)
    )
}

fn workbook_rels_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<Relationships xmlns="{}">"#,
            r#"<Relationship Id="rId1" Type="{}/worksheet" Target="worksheets/sheet1.xml"/>"#,
            r#"<Relationship Id="rId2" Type="{}/styles" Target="styles.xml"/>"#,
            "</Relationships>"
        ),
        XML_HEADER, NS_PKG_REL, NS_REL, NS_REL
    )
}

fn styles_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<styleSheet xmlns="{}">"#,
            r#"<fonts count="2"><font><sz val="11"/><name val="Calibri"/></font><font><b/><sz val="11"/><name val="Calibri"/></font></fonts>"#,
            r#"<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>"#,
            r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#,
            r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
            r#"<cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/><xf numFmtId="0" fontId="1" fillId="0" borderId="0" xfId="0" applyFont="1"/></cellXfs>"#,
            r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#,
            "</styleSheet>"
        ),
        XML_HEADER, NS_MAIN
    )
}

/// Wraps the workbook bytes in a Blob
fn create_xlsx_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(XLSX_MIME);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Starts a browser download of the Blob
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    struct Meter {
        label: String,
        amount: f64,
    }

    impl ExcelExportable for Meter {
        fn headers() -> Vec<&'static str> {
            vec!["النوع", "المبلغ"]
        }

        fn to_row(&self) -> Vec<CellValue> {
            vec![self.label.clone().into(), self.amount.into()]
        }
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_column_name() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(6), "G");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(27), "AB");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(702), "AAA");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"A & <B> "c""#), "A &amp; &lt;B&gt; &quot;c&quot;");
        assert_eq!(escape_xml("a\u{1}b"), "ab");
    }

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("بيانات المربعات"), "بيانات المربعات");
        assert_eq!(sanitize_sheet_name("a/b:c"), "abc");
        assert_eq!(sanitize_sheet_name("??"), "Sheet1");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40)).len(), 31);
    }

    #[test]
    fn test_workbook_package_parts() {
        let bytes = build_workbook::<Meter>(&[], "ورقة").unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "xl/_rels/workbook.xml.rels",
                "xl/styles.xml",
                "xl/workbook.xml",
                "xl/worksheets/sheet1.xml",
            ]
        );
        assert!(read_part(&bytes, "xl/workbook.xml").contains(r#"<sheet name="ورقة""#));
    }

    #[test]
    fn test_sheet_rows_and_direction() {
        let data = vec![
            Meter { label: "عداد صغير".into(), amount: 5000.0 },
            Meter { label: "R&D".into(), amount: 12.5 },
        ];
        let bytes = build_workbook(&data, "tariffs").unwrap();
        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

        assert!(sheet.contains(r#"rightToLeft="1""#));
        assert_eq!(sheet.matches("<row ").count(), 3);
        assert!(sheet.contains(r#"<c r="A1" t="inlineStr" s="1"><is><t xml:space="preserve">النوع</t></is></c>"#));
        assert!(sheet.contains(r#"<c r="B2"><v>5000</v></c>"#));
        assert!(sheet.contains("R&amp;D"));
        assert!(sheet.contains(r#"<c r="B3"><v>12.5</v></c>"#));
    }
}
