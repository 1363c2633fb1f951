use anyhow::{Context, Result};
use csv::WriterBuilder;
use log::debug;

use crate::common::constants::{EXPORT_DELIMITER, GROUP_HEADER, TABLE_HEADERS, UTF8_BOM};
use crate::common::types::LinkRecord;

/// Serializes records as `;`-separated UTF-8 with a BOM, one header row,
/// columns `Grupo;Tipo;Identificador;Base;Link Final`.
pub fn records_to_csv(records: &[LinkRecord]) -> Result<Vec<u8>> {
    let mut buffer = UTF8_BOM.to_vec();

    {
        let mut writer = WriterBuilder::new()
            .delimiter(EXPORT_DELIMITER)
            .from_writer(&mut buffer);

        let mut header = vec![GROUP_HEADER];
        header.extend(TABLE_HEADERS);
        writer
            .write_record(&header)
            .context("Failed to write CSV header")?;

        for record in records {
            writer
                .write_record([
                    record.kind.group_label(),
                    record.kind.type_label(),
                    record.identifier.as_str(),
                    record.base.as_str(),
                    record.url.as_str(),
                ])
                .with_context(|| format!("Failed to write CSV row for {}", record.identifier))?;
        }

        writer.flush().context("Failed to flush CSV writer")?;
    }

    debug!(
        "Serialized {} record(s) into {} CSV bytes",
        records.len(),
        buffer.len()
    );
    Ok(buffer)
}
