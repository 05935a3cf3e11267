use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_NAME: &str = "Unnamed Chemical";
pub const DEFAULT_PACKAGING: &str = "N/A";
pub const DEFAULT_UNIT: &str = "units";

const SEED_JSON: &str = include_str!("../data/chemicals.json");

/// One chemical inventory entry. Records have no identity beyond their
/// position in the list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Chemical {
    pub name: String,
    pub vendor: String,
    pub density: f64,
    pub viscosity: f64,
    pub packaging: String,
    #[serde(alias = "packSize")]
    pub pack_size: PackSize,
    pub unit: String,
    pub quantity: f64,
}

impl Default for Chemical {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            vendor: String::new(),
            density: 0.0,
            viscosity: 0.0,
            packaging: DEFAULT_PACKAGING.to_string(),
            pack_size: PackSize::default(),
            unit: DEFAULT_UNIT.to_string(),
            quantity: 0.0,
        }
    }
}

impl Chemical {
    /// Raw cell text, as exported and as shown in the inline editor.
    pub fn cell_text(&self, column: Column) -> String {
        match column {
            Column::Name => self.name.clone(),
            Column::Vendor => self.vendor.clone(),
            Column::Density => self.density.to_string(),
            Column::Viscosity => self.viscosity.to_string(),
            Column::Packaging => self.packaging.clone(),
            Column::PackSize => self.pack_size.to_string(),
            Column::Unit => self.unit.clone(),
            Column::Quantity => self.quantity.to_string(),
        }
    }

    /// Cell text for the grid: numeric columns are shown with two decimals.
    pub fn display_text(&self, column: Column) -> String {
        match column {
            Column::Density => format!("{:.2}", self.density),
            Column::Viscosity => format!("{:.2}", self.viscosity),
            Column::Quantity => format!("{:.2}", self.quantity),
            _ => self.cell_text(column),
        }
    }

    pub fn numeric(&self, column: Column) -> Option<f64> {
        match column {
            Column::Density => Some(self.density),
            Column::Viscosity => Some(self.viscosity),
            Column::Quantity => Some(self.quantity),
            _ => None,
        }
    }

    fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Name => Some(&self.name),
            Column::Vendor => Some(&self.vendor),
            Column::Packaging => Some(&self.packaging),
            Column::Unit => Some(&self.unit),
            _ => None,
        }
    }

    /// Ascending order of two records on one column.
    pub fn compare(&self, other: &Self, column: Column) -> Ordering {
        match column.kind() {
            ColumnKind::Text => self.text(column).cmp(&other.text(column)),
            ColumnKind::Numeric => {
                let a = self.numeric(column).unwrap_or_default();
                let b = other.numeric(column).unwrap_or_default();
                a.total_cmp(&b)
            }
            ColumnKind::Mixed => self.pack_size.cmp_key(&other.pack_size),
        }
    }
}

/// Pack size is either a plain number (`20`) or free text (`"4x2.5L"`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PackSize {
    Number(f64),
    Text(String),
}

impl Default for PackSize {
    fn default() -> Self {
        PackSize::Number(0.0)
    }
}

impl PackSize {
    /// Finite numbers become `Number`, anything else is kept verbatim as `Text`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => PackSize::Number(n),
            _ => PackSize::Text(raw.to_string()),
        }
    }

    // Numbers sort before text.
    fn cmp_key(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PackSize::Number(a), PackSize::Number(b)) => a.total_cmp(b),
            (PackSize::Text(a), PackSize::Text(b)) => a.cmp(b),
            (PackSize::Number(_), PackSize::Text(_)) => Ordering::Less,
            (PackSize::Text(_), PackSize::Number(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for PackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackSize::Number(n) => write!(f, "{}", n),
            PackSize::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Numeric,
    Mixed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Name,
    Vendor,
    Density,
    Viscosity,
    Packaging,
    PackSize,
    Unit,
    Quantity,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Name,
        Column::Vendor,
        Column::Density,
        Column::Viscosity,
        Column::Packaging,
        Column::PackSize,
        Column::Unit,
        Column::Quantity,
    ];

    /// Column at a 0-based header position over the data columns.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Vendor => "Vendor",
            Column::Density => "Density",
            Column::Viscosity => "Viscosity",
            Column::Packaging => "Packaging",
            Column::PackSize => "Pack Size",
            Column::Unit => "Unit",
            Column::Quantity => "Quantity",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::Name | Column::Vendor | Column::Packaging | Column::Unit => ColumnKind::Text,
            Column::Density | Column::Viscosity | Column::Quantity => ColumnKind::Numeric,
            Column::PackSize => ColumnKind::Mixed,
        }
    }
}

impl FromStr for Column {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Column::Name),
            "vendor" => Ok(Column::Vendor),
            "density" => Ok(Column::Density),
            "viscosity" => Ok(Column::Viscosity),
            "packaging" => Ok(Column::Packaging),
            "pack_size" | "packsize" | "pack size" => Ok(Column::PackSize),
            "unit" => Ok(Column::Unit),
            "quantity" => Ok(Column::Quantity),
            _ => Err(TableError::UnknownColumn(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Descending)
        } else {
            Err(TableError::InvalidSortDirection(s.to_string()))
        }
    }
}

/// Initial record list bundled with the app.
pub fn seed_chemicals() -> Result<Vec<Chemical>> {
    parse_chemicals(SEED_JSON)
}

pub fn parse_chemicals(json: &str) -> Result<Vec<Chemical>> {
    serde_json::from_str(json).map_err(|e| TableError::SeedData(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acetone() -> Chemical {
        Chemical {
            name: "Acetone".to_string(),
            vendor: "X".to_string(),
            density: 0.79,
            viscosity: 0.32,
            packaging: "Drum".to_string(),
            pack_size: PackSize::Number(20.0),
            unit: "L".to_string(),
            quantity: 5.0,
        }
    }

    mod chemical_tests {
        use super::*;

        #[test]
        fn default_matches_new_row_values() {
            let chem = Chemical::default();
            assert_eq!(chem.name, "Unnamed Chemical");
            assert_eq!(chem.vendor, "");
            assert_eq!(chem.density, 0.0);
            assert_eq!(chem.viscosity, 0.0);
            assert_eq!(chem.packaging, "N/A");
            assert_eq!(chem.pack_size, PackSize::Number(0.0));
            assert_eq!(chem.unit, "units");
            assert_eq!(chem.quantity, 0.0);
        }

        #[test]
        fn cell_text_uses_shortest_number_form() {
            let chem = acetone();
            assert_eq!(chem.cell_text(Column::Density), "0.79");
            assert_eq!(chem.cell_text(Column::PackSize), "20");
            assert_eq!(chem.cell_text(Column::Quantity), "5");
        }

        #[test]
        fn display_text_rounds_numeric_columns() {
            let chem = acetone();
            assert_eq!(chem.display_text(Column::Density), "0.79");
            assert_eq!(chem.display_text(Column::Quantity), "5.00");
            assert_eq!(chem.display_text(Column::Name), "Acetone");
            assert_eq!(chem.display_text(Column::PackSize), "20");
        }

        #[test]
        fn compare_text_is_lexicographic() {
            let a = acetone();
            let mut b = acetone();
            b.name = "Benzene".to_string();
            assert_eq!(a.compare(&b, Column::Name), Ordering::Less);
            assert_eq!(b.compare(&a, Column::Name), Ordering::Greater);
        }

        #[test]
        fn compare_numeric_is_numeric_not_textual() {
            let mut a = acetone();
            let mut b = acetone();
            a.quantity = 9.0;
            b.quantity = 10.0;
            assert_eq!(a.compare(&b, Column::Quantity), Ordering::Less);
        }
    }

    mod pack_size_tests {
        use super::*;

        #[test]
        fn parse_number() {
            assert_eq!(PackSize::parse(" 25 "), PackSize::Number(25.0));
        }

        #[test]
        fn parse_text_keeps_input() {
            assert_eq!(PackSize::parse("4x2.5L"), PackSize::Text("4x2.5L".to_string()));
        }

        #[test]
        fn parse_nan_is_text() {
            assert_eq!(PackSize::parse("NaN"), PackSize::Text("NaN".to_string()));
        }

        #[test]
        fn numbers_sort_before_text() {
            let n = PackSize::Number(500.0);
            let t = PackSize::Text("1 gal".to_string());
            assert_eq!(n.cmp_key(&t), Ordering::Less);
            assert_eq!(t.cmp_key(&n), Ordering::Greater);
        }

        #[test]
        fn deserialize_number_or_text() {
            let n: PackSize = serde_json::from_str("20").unwrap();
            let t: PackSize = serde_json::from_str("\"4x1L\"").unwrap();
            assert_eq!(n, PackSize::Number(20.0));
            assert_eq!(t, PackSize::Text("4x1L".to_string()));
        }
    }

    mod column_tests {
        use super::*;

        #[test]
        fn from_index_follows_header_order() {
            assert_eq!(Column::from_index(0), Some(Column::Name));
            assert_eq!(Column::from_index(5), Some(Column::PackSize));
            assert_eq!(Column::from_index(7), Some(Column::Quantity));
            assert_eq!(Column::from_index(8), None);
        }

        #[test]
        fn parse_names() {
            assert_eq!("density".parse::<Column>(), Ok(Column::Density));
            assert_eq!("packSize".parse::<Column>(), Ok(Column::PackSize));
            assert_eq!("pack_size".parse::<Column>(), Ok(Column::PackSize));
            assert_eq!(
                "colour".parse::<Column>(),
                Err(TableError::UnknownColumn("colour".to_string()))
            );
        }

        #[test]
        fn kinds() {
            assert_eq!(Column::Vendor.kind(), ColumnKind::Text);
            assert_eq!(Column::Viscosity.kind(), ColumnKind::Numeric);
            assert_eq!(Column::PackSize.kind(), ColumnKind::Mixed);
        }
    }

    mod sort_direction_tests {
        use super::*;

        #[test]
        fn parses_asc_and_desc() {
            assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Ascending));
            assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Descending));
        }

        #[test]
        fn rejects_anything_else() {
            assert_eq!(
                "up".parse::<SortDirection>(),
                Err(TableError::InvalidSortDirection("up".to_string()))
            );
        }
    }

    mod seed_tests {
        use super::*;

        #[test]
        fn bundled_seed_parses() {
            let chemicals = seed_chemicals().unwrap();
            assert!(!chemicals.is_empty());
            assert!(chemicals.iter().all(|c| !c.name.is_empty()));
        }

        #[test]
        fn accepts_camel_case_pack_size() {
            let json = r#"[{
                "name": "Ethanol", "vendor": "Y", "density": 0.789, "viscosity": 1.2,
                "packaging": "Bottle", "packSize": "4x1L", "unit": "L", "quantity": 12
            }]"#;
            let chemicals = parse_chemicals(json).unwrap();
            assert_eq!(chemicals[0].pack_size, PackSize::Text("4x1L".to_string()));
            assert_eq!(chemicals[0].quantity, 12.0);
        }

        #[test]
        fn malformed_seed_is_reported() {
            let err = parse_chemicals("[{\"name\": 1}]").unwrap_err();
            assert!(matches!(err, TableError::SeedData(_)));
        }
    }
}
