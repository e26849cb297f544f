//! CSV-directory log store adapter.
//!
//! Each monthly log is one headerless `<name>.csv` file under the data
//! directory, two columns per row: timestamp, price.

use std::fs;
use std::path::PathBuf;

use crate::domain::error::PricelogError;
use crate::ports::config_port::ConfigPort;
use crate::ports::log_store_port::LogStorePort;

pub const DEFAULT_DATA_DIR: &str = "./data";

pub struct CsvLogStore {
    base_path: PathBuf,
}

impl CsvLogStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let dir = config
            .get_string("storage", "data_dir")
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        Self::new(PathBuf::from(dir))
    }

    fn log_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{name}.csv"))
    }

    fn load_rows(&self, name: &str) -> Result<Vec<Vec<String>>, PricelogError> {
        let path = self.log_path(name);
        let content = fs::read_to_string(&path).map_err(|e| PricelogError::Storage {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| PricelogError::Storage {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    fn store_rows(&self, name: &str, rows: &[Vec<String>]) -> Result<(), PricelogError> {
        let path = self.log_path(name);
        let mut wtr = csv::Writer::from_path(&path).map_err(|e| PricelogError::Storage {
            reason: format!("failed to open {} for writing: {}", path.display(), e),
        })?;

        for row in rows {
            wtr.write_record(row).map_err(|e| PricelogError::Storage {
                reason: format!("failed to write {}: {}", path.display(), e),
            })?;
        }
        wtr.flush().map_err(|e| PricelogError::Storage {
            reason: format!("failed to flush {}: {}", path.display(), e),
        })?;
        Ok(())
    }
}

impl LogStorePort for CsvLogStore {
    fn log_exists(&self, name: &str) -> Result<bool, PricelogError> {
        Ok(self.log_path(name).is_file())
    }

    fn create_log(&self, name: &str) -> Result<(), PricelogError> {
        let path = self.log_path(name);
        if path.exists() {
            return Err(PricelogError::Storage {
                reason: format!("log {name} already exists"),
            });
        }
        fs::create_dir_all(&self.base_path).map_err(|e| PricelogError::Storage {
            reason: format!(
                "failed to create directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;
        fs::write(&path, "").map_err(|e| PricelogError::Storage {
            reason: format!("failed to create {}: {}", path.display(), e),
        })
    }

    fn last_row(&self, name: &str) -> Result<usize, PricelogError> {
        Ok(self.load_rows(name)?.len())
    }

    fn set_cell(
        &self,
        name: &str,
        row: usize,
        col: usize,
        value: &str,
    ) -> Result<(), PricelogError> {
        if row == 0 || col == 0 || col > 2 {
            return Err(PricelogError::Storage {
                reason: format!("cell ({row}, {col}) out of range"),
            });
        }

        let mut rows = self.load_rows(name)?;
        while rows.len() < row {
            rows.push(vec![String::new(), String::new()]);
        }
        let target = &mut rows[row - 1];
        while target.len() < col {
            target.push(String::new());
        }
        target[col - 1] = value.to_string();

        self.store_rows(name, &rows)
    }

    fn read_rows(&self, name: &str) -> Result<Vec<(String, f64)>, PricelogError> {
        self.load_rows(name)?
            .into_iter()
            .map(|row| {
                let timestamp = row.first().cloned().unwrap_or_default();
                let price_cell = row.get(1).ok_or_else(|| PricelogError::Storage {
                    reason: format!("row in log {name} has no price column"),
                })?;
                let price = price_cell.parse().map_err(|_| PricelogError::Storage {
                    reason: format!("non-numeric price cell in log {name}: {price_cell:?}"),
                })?;
                Ok((timestamp, price))
            })
            .collect()
    }
}
