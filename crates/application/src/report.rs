use dnscache_view_domain::CacheEntry;

/// Payload column text for rows whose record payload could not be shown.
/// A normal display state, not an error.
pub const NO_DATA: &str = "no data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Table,
    Csv,
}

/// Header line for the active mode. Emitted once per run, before any data
/// row; the column set never varies with entry contents.
pub fn header(mode: ReportMode) -> String {
    match mode {
        ReportMode::Table => format!(
            "{:<40} {:<8} {:<8} {:<12} {:<10} {}",
            "Name", "Type", "DataLen", "Flags", "TTL(raw)", "Data"
        ),
        ReportMode::Csv => "Name,Type,DataLength,Flags,TTL(raw),Data".to_string(),
    }
}

/// One data row for `entry` with its already-rendered payload text.
///
/// CSV quotes the two text fields and leaves numerics bare. Embedded
/// quote or comma characters are not escaped.
pub fn format_row(entry: &CacheEntry, payload: &str, mode: ReportMode) -> String {
    match mode {
        ReportMode::Table => {
            let flags = format!("0x{:08x}", entry.flags);
            format!(
                "{:<40} {:<8} {:<8} {:<12} {:<10} {}",
                entry.name, entry.record_type, entry.data_length, flags, entry.ttl, payload
            )
        }
        ReportMode::Csv => format!(
            "\"{}\",{},{},0x{:08x},{},\"{}\"",
            entry.name, entry.record_type, entry.data_length, entry.flags, entry.ttl, payload
        ),
    }
}
