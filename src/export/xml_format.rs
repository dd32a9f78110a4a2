//! XML export.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{ExporterError, ExporterResult};

use super::{ExpenseSerializer, ExportFormat, ExportRecord};

const ROOT: &str = "expenses";
const RECORD: &str = "expense";

/// Writes an `<expenses>` document with one `<expense id="…">` per record.
///
/// Output is indented by two spaces. An empty batch produces `<expenses/>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlSerializer;

impl ExpenseSerializer for XmlSerializer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xml
    }

    fn serialize(&self, records: &[ExportRecord<'_>]) -> ExporterResult<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        if records.is_empty() {
            writer
                .write_event(Event::Empty(BytesStart::new(ROOT)))
                .map_err(xml_error)?;
        } else {
            writer
                .write_event(Event::Start(BytesStart::new(ROOT)))
                .map_err(xml_error)?;
            for record in records {
                write_record(&mut writer, record)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(ROOT)))
                .map_err(xml_error)?;
        }

        String::from_utf8(writer.into_inner()).map_err(xml_error)
    }
}

fn write_record(writer: &mut Writer<Vec<u8>>, record: &ExportRecord<'_>) -> ExporterResult<()> {
    let id = record.expense_id.to_string();
    let mut start = BytesStart::new(RECORD);
    start.push_attribute(("id", id.as_str()));
    writer.write_event(Event::Start(start)).map_err(xml_error)?;

    write_text_element(writer, "employeeName", record.employee_name)?;
    write_text_element(writer, "position", record.position)?;
    write_text_element(writer, "description", record.description)?;
    write_text_element(writer, "amount", &record.amount.to_string())?;
    write_text_element(writer, "date", &record.calendar_date())?;

    writer
        .write_event(Event::End(BytesEnd::new(RECORD)))
        .map_err(xml_error)
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> ExporterResult<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)
}

fn xml_error(err: impl std::fmt::Display) -> ExporterError {
    ExporterError::Serialization {
        format: ExportFormat::Xml.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quick_xml::Reader;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn record<'a>(id: u32, description: &'a str, amount: &str) -> ExportRecord<'a> {
        ExportRecord {
            expense_id: id,
            employee_id: 3,
            employee_name: "Maria Georgieva",
            position: "Intern",
            description,
            amount: Decimal::from_str(amount).unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
        }
    }

    /// Collects (element name, text) pairs in document order.
    fn text_nodes(xml: &str) -> Vec<(String, String)> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut current = String::new();
        let mut nodes = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) => {
                    current = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                }
                Event::Text(t) => {
                    nodes.push((current.clone(), t.unescape().unwrap().into_owned()));
                }
                Event::Eof => break,
                _ => {}
            }
        }
        nodes
    }

    #[test]
    fn test_empty_batch_is_empty_root() {
        let xml = XmlSerializer.serialize(&[]).unwrap();
        assert_eq!(xml, "<expenses/>");
    }

    #[test]
    fn test_record_id_is_attribute() {
        let xml = XmlSerializer.serialize(&[record(3, "Transport", "450")]).unwrap();

        assert!(xml.starts_with("<expenses>"), "{xml}");
        assert!(xml.contains("<expense id=\"3\">"), "{xml}");
        assert!(xml.trim_end().ends_with("</expenses>"), "{xml}");
    }

    #[test]
    fn test_fields_are_child_elements_in_order() {
        let xml = XmlSerializer.serialize(&[record(3, "Transport", "450.00")]).unwrap();

        assert_eq!(
            text_nodes(&xml),
            vec![
                ("employeeName".to_string(), "Maria Georgieva".to_string()),
                ("position".to_string(), "Intern".to_string()),
                ("description".to_string(), "Transport".to_string()),
                ("amount".to_string(), "450.00".to_string()),
                ("date".to_string(), "2025-03-12".to_string()),
            ]
        );
    }

    #[test]
    fn test_markup_characters_are_escaped() {
        let xml = XmlSerializer
            .serialize(&[record(4, "Tools <&> supplies", "10")])
            .unwrap();

        assert!(!xml.contains("<&>"), "{xml}");
        let description = text_nodes(&xml)
            .into_iter()
            .find(|(name, _)| name == "description")
            .unwrap();
        assert_eq!(description.1, "Tools <&> supplies");
    }
}
