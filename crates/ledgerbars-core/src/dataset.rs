// File: crates/ledgerbars-core/src/dataset.rs
// Summary: Monthly earn/spend records, CSV loading, and the bundled sample.

use std::io::Read;
use std::path::Path;

use crate::error::Error;

/// The bundled dataset the chart was designed around.
const SAMPLE_CSV: &str = include_str!("../data/months.csv");

/// One of the two bar series drawn inside each month's band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subgroup {
    Earn,
    Spend,
}

impl Subgroup {
    /// Drawing order within a band: earn on the left, spend on the right.
    pub const ALL: [Subgroup; 2] = [Subgroup::Earn, Subgroup::Spend];

    /// Key used for the sub-band and color scale domains and as the rect
    /// class in the output markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Subgroup::Earn => "earn",
            Subgroup::Spend => "spend",
        }
    }
}

/// One month's pair of values. Month labels are opaque ordered categories;
/// dataset order is display order.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthRecord {
    pub month: String,
    pub earn: f64,
    pub spend: f64,
}

impl MonthRecord {
    pub fn amount(&self, group: Subgroup) -> f64 {
        match group {
            Subgroup::Earn => self.earn,
            Subgroup::Spend => self.spend,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<MonthRecord>,
}

impl Dataset {
    pub fn new(records: Vec<MonthRecord>) -> Self {
        Self { records }
    }

    /// The dataset compiled into the crate.
    pub fn sample() -> Result<Self, Error> {
        Self::from_csv_reader(SAMPLE_CSV.as_bytes())
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Decode `month,earn,spend` rows. Header matching is case-insensitive
    /// and order-independent; rows with unparsable numbers are skipped.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect::<Vec<_>>();
        let col = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(Error::MissingColumn(name))
        };
        let i_month = col("month")?;
        let i_earn = col("earn")?;
        let i_spend = col("spend")?;

        let mut records = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
            let month = rec.get(i_month).map(str::trim).unwrap_or("");
            if month.is_empty() {
                continue;
            }
            if let (Some(earn), Some(spend)) = (parse(i_earn), parse(i_spend)) {
                records.push(MonthRecord { month: month.to_string(), earn, spend });
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[MonthRecord] {
        &self.records
    }

    /// Month labels in dataset order; this is the x scale domain.
    pub fn months(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.month.as_str()).collect()
    }

    /// Largest value across both series; both bars share one y scale so the
    /// two series stay comparable. 0.0 for an empty dataset.
    pub fn max_amount(&self) -> f64 {
        let mut max = 0.0_f64;
        for r in &self.records {
            max = max.max(r.earn).max(r.spend);
        }
        max
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
