pub mod cli;

use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{Validate, INPUT_FORMAT};
use chrono::NaiveDateTime;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "catermatch")]
#[command(about = "Suggests catering menu items a vendor can deliver for an order")]
pub struct CliConfig {
    /// The order fields: filename dd/mm/yy hh:mm postcode amount
    #[arg(value_name = "ORDER", num_args = 0..)]
    pub order: Vec<String>,

    /// Directory vendor catalogue files are resolved against
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    /// Pin the clock for lead-time arithmetic, "yyyy-mm-dd hh:mm" (debug)
    #[arg(long, value_name = "DATETIME")]
    pub as_if_now: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The parsed debug clock override, if one was given.
    pub fn simulated_now(&self) -> Result<Option<NaiveDateTime>> {
        self.as_if_now
            .as_deref()
            .map(|raw| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").map_err(|_| {
                    MatchError::invalid_input(
                        "--as-if-now",
                        "Must be in format \"yyyy-mm-dd hh:mm\"",
                    )
                })
            })
            .transpose()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.order.is_empty() {
            return Err(MatchError::invalid_input(
                "input arguments",
                format!("Right format is: \"{INPUT_FORMAT}\""),
            ));
        }
        if self.data_dir.trim().is_empty() {
            return Err(MatchError::invalid_input(
                "--data-dir",
                "Directory cannot be empty",
            ));
        }
        self.simulated_now()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(order: &[&str], as_if_now: Option<&str>) -> CliConfig {
        CliConfig {
            order: order.iter().map(|s| s.to_string()).collect(),
            data_dir: "./data".to_string(),
            as_if_now: as_if_now.map(|s| s.to_string()),
            verbose: false,
        }
    }

    #[test]
    fn test_simulated_now_parsing() {
        let cfg = config(&["a", "b", "c", "d", "e"], Some("2015-10-20 00:00"));
        let now = cfg.simulated_now().unwrap().unwrap();
        assert_eq!(now, "2015-10-20T00:00:00".parse::<NaiveDateTime>().unwrap());

        let bad = config(&["a", "b", "c", "d", "e"], Some("20/10/2015"));
        assert!(bad.simulated_now().is_err());

        let absent = config(&["a", "b", "c", "d", "e"], None);
        assert!(absent.simulated_now().unwrap().is_none());
    }

    #[test]
    fn test_validate_rejects_empty_order() {
        assert!(config(&[], None).validate().is_err());
        assert!(config(&["a", "b", "c", "d", "e"], None).validate().is_ok());
    }
}
