//! Field-mapping CSV rendering

use crate::provenance::ProvenanceRow;

/// Header row of the field-mapping CSV
pub const FIELD_MAPPING_HEADER: [&str; 6] = [
    "Project",
    "TO_Summary_Field",
    "TO_Summary_Value",
    "Source_File",
    "Original_Field",
    "Original_Value",
];

/// Escape a field for CSV output.
///
/// Fields containing a comma, quote or newline are wrapped in quotes with
/// inner quotes doubled; everything else is written as-is.
pub fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_line<'a>(columns: impl IntoIterator<Item = &'a str>) -> String {
    columns
        .into_iter()
        .map(escape_csv_field)
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the header plus one line per provenance row.
///
/// Lines are separated by `\n` with no trailing newline.
pub fn render_field_mapping(rows: &[ProvenanceRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(csv_line(FIELD_MAPPING_HEADER));
    lines.extend(rows.iter().map(|row| csv_line(row.columns())));
    lines.join("\n")
}
